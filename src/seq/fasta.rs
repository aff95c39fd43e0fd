// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::fs::File;
use std::io::{BufRead, BufReader, Lines, Write};
use std::mem;
use std::path::Path;

use log::warn;

use crate::errors::SeqMutError;
use crate::seq::record::SeqRecord;

enum ParserState {
    // No header seen yet
    Idle,
    InRecord(SeqRecord),
    // Input exhausted, or a fatal error was returned
    Done,
}

/// Streaming FastA reader. Yields one record at a time; a record is complete when the next
/// header line (or the end of input) is reached. Lines are read lazily, so only the record in
/// progress is held in memory.
///
/// Non-empty lines found before the first header ("orphan" lines) have no record to belong to.
/// By default they are dropped (with a warning); in strict mode the first one is an error.
pub struct FastaReader<R> {
    lines: Lines<R>,
    state: ParserState,
    strict: bool,
    line_no: usize,
    orphan_lines: usize,
}

impl<R: BufRead> FastaReader<R> {
    pub fn new(reader: R) -> Self {
        FastaReader {
            lines: reader.lines(),
            state: ParserState::Idle,
            strict: false,
            line_no: 0,
            orphan_lines: 0,
        }
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Number of orphan lines discarded so far.
    pub fn orphan_lines(&self) -> usize {
        self.orphan_lines
    }

    fn warn_orphans(&self) {
        if self.orphan_lines > 0 {
            warn!(
                "Discarded {} sequence line(s) found before the first header",
                self.orphan_lines
            );
        }
    }
}

impl<R: BufRead> Iterator for FastaReader<R> {
    type Item = Result<SeqRecord, SeqMutError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let ParserState::Done = self.state {
                return None;
            }
            let line = match self.lines.next() {
                Some(Ok(l)) => l,
                Some(Err(e)) => {
                    self.state = ParserState::Done;
                    return Some(Err(e.into()));
                }
                None => {
                    return match mem::replace(&mut self.state, ParserState::Done) {
                        ParserState::InRecord(record) => Some(Ok(record)),
                        _ => {
                            self.warn_orphans();
                            None
                        }
                    };
                }
            };
            self.line_no += 1;

            if let Some(hdr) = line.strip_prefix('>') {
                let new_record = ParserState::InRecord(SeqRecord::new(hdr));
                match mem::replace(&mut self.state, new_record) {
                    ParserState::InRecord(record) => return Some(Ok(record)),
                    _ => self.warn_orphans(),
                }
            } else if let ParserState::InRecord(record) = &mut self.state {
                record.sequence.push_str(&line);
            } else if !line.is_empty() {
                if self.strict {
                    self.state = ParserState::Done;
                    return Some(Err(format!(
                        "line {}: sequence data before first header",
                        self.line_no
                    )
                    .into()));
                }
                self.orphan_lines += 1;
            }
        }
    }
}

pub fn read_fasta_file<P: AsRef<Path>>(
    path: P,
) -> Result<FastaReader<BufReader<File>>, std::io::Error> {
    let file = File::open(path)?;
    Ok(FastaReader::new(BufReader::new(file)))
}

// Sequences are not re-wrapped: one header line, one sequence line.
pub fn write_fasta_record<W: Write>(out: &mut W, record: &SeqRecord) -> std::io::Result<()> {
    writeln!(out, ">{}", record.header)?;
    writeln!(out, "{}", record.sequence)
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::{
    io::{stdout, BufRead, BufWriter, Write},
    path::PathBuf,
};

use clap::Parser;
use log::{debug, info};
use rand::Rng;

use crate::errors::SeqMutError;
use crate::mutate::Mutator;
use crate::seq::fasta::{read_fasta_file, write_fasta_record, FastaReader};

#[derive(Debug, Parser)]
#[command(version, about, long_about = None) ]
struct Cli {
    /// FastA input file
    input: PathBuf,

    /// Per-base substitution probability (<= 0: no change, >= 1: every A/C/G/T changes)
    #[arg(allow_negative_numbers = true)]
    rate: f64,

    /// Treat sequence lines before the first header as an error instead of dropping them
    #[arg(short, long)]
    strict: bool,
}

/// Reads every record from `reader`, mutates it, and writes it to `out`. Records are processed
/// one at a time, in input order. Returns the number of records written.
pub fn mutate_fasta<B, W, R>(
    reader: FastaReader<B>,
    out: &mut W,
    mutator: &mut Mutator<R>,
) -> Result<usize, SeqMutError>
where
    B: BufRead,
    W: Write,
    R: Rng,
{
    let mut n_records = 0;
    for record in reader {
        let mut record = record?;
        let stats = mutator.mutate_record(&mut record);
        debug!(
            "{}: {} chars, {} substitution(s) in {} base(s)",
            record.header,
            record.sequence.chars().count(),
            stats.substituted,
            stats.examined
        );
        write_fasta_record(out, &record)?;
        n_records += 1;
    }
    Ok(n_records)
}

pub fn run() -> Result<(), SeqMutError> {
    let cli = Cli::parse();
    let reader = read_fasta_file(&cli.input)?.strict(cli.strict);
    let mut mutator = Mutator::new(cli.rate, rand::rng());
    info!("Mutating {} at rate {}", cli.input.display(), mutator.rate());
    let mut out = BufWriter::new(stdout().lock());

    let n_records = mutate_fasta(reader, &mut out, &mut mutator)?;
    out.flush()?;

    let stats = mutator.stats();
    info!(
        "Wrote {} record(s): {} of {} base(s) substituted (observed rate {:.4})",
        n_records,
        stats.substituted,
        stats.examined,
        stats.observed_rate()
    );
    Ok(())
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use rand::{rngs::SmallRng, SeedableRng};

use seqmut::{
    mutate::Mutator,
    mutate_fasta,
    seq::{fasta::FastaReader, record::SeqRecord},
};

pub const SEED: u64 = 20_251_016;

#[allow(dead_code)]
pub fn mutator(rate: f64) -> Mutator<SmallRng> {
    Mutator::new(rate, SmallRng::seed_from_u64(SEED))
}

// Runs the whole read -> mutate -> write pipeline on an in-memory FastA string.
#[allow(dead_code)]
pub fn run_on(input: &str, rate: f64) -> String {
    let mut out: Vec<u8> = Vec::new();
    let mut m = mutator(rate);
    mutate_fasta(FastaReader::new(input.as_bytes()), &mut out, &mut m).expect("mutate");
    String::from_utf8(out).expect("utf-8 output")
}

#[allow(dead_code)]
pub fn parse(fasta: &str) -> Vec<SeqRecord> {
    FastaReader::new(fasta.as_bytes())
        .collect::<Result<_, _>>()
        .expect("parse")
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

mod common;

use approx::assert_abs_diff_eq;

use crate::common::utils;

use seqmut::{
    errors::SeqMutError,
    mutate_fasta,
    seq::{fasta::read_fasta_file, record::SeqRecord},
};

fn read_all(path: &str) -> Vec<SeqRecord> {
    read_fasta_file(path)
        .expect("Test file not found")
        .collect::<Result<_, _>>()
        .expect("parse")
}

#[test]
fn zero_rate_reproduces_file_records() {
    let original = read_all("data/test2.fas");
    let mut out: Vec<u8> = Vec::new();
    let reader = read_fasta_file("data/test2.fas").expect("Test file not found");
    let n = mutate_fasta(reader, &mut out, &mut utils::mutator(0.0)).expect("mutate");
    assert_eq!(n, original.len());
    assert_eq!(utils::parse(&String::from_utf8(out).unwrap()), original);
}

#[test]
fn orphan_lines_are_dropped_by_default() {
    let mut out: Vec<u8> = Vec::new();
    let reader = read_fasta_file("data/orphans.fas").expect("Test file not found");
    let n = mutate_fasta(reader, &mut out, &mut utils::mutator(0.0)).expect("mutate");
    assert_eq!(n, 3);
    let recs = utils::parse(&String::from_utf8(out).unwrap());
    assert_eq!(recs[0].header, "chr_mix");
    assert_eq!(recs[0].sequence, "ACGTNNNNacgtRYKM--ACGT--");
    assert_eq!(recs[1].header, "empty");
    assert_eq!(recs[1].sequence, "");
    assert_eq!(recs[2].sequence, "GATTACA");
}

#[test]
fn orphan_lines_fail_in_strict_mode() {
    let mut out: Vec<u8> = Vec::new();
    let reader = read_fasta_file("data/orphans.fas")
        .expect("Test file not found")
        .strict(true);
    let res = mutate_fasta(reader, &mut out, &mut utils::mutator(0.0));
    assert!(matches!(res, Err(SeqMutError::Format(_))));
    assert!(out.is_empty());
}

#[test]
fn only_uppercase_acgt_mutate() {
    let mut out: Vec<u8> = Vec::new();
    let reader = read_fasta_file("data/orphans.fas").expect("Test file not found");
    let mut m = utils::mutator(1.0);
    mutate_fasta(reader, &mut out, &mut m).expect("mutate");
    let recs = utils::parse(&String::from_utf8(out).unwrap());

    let before = "ACGTNNNNacgtRYKM--ACGT--";
    let after = &recs[0].sequence;
    for (b, a) in before.chars().zip(after.chars()) {
        if "ACGT".contains(b) {
            assert_ne!(a, b);
        } else {
            assert_eq!(a, b);
        }
    }
    // 8 in chr_mix, 7 in tail
    assert_eq!(m.stats().examined, 15);
    assert_abs_diff_eq!(m.stats().observed_rate(), 1.0);
}

#[test]
fn missing_input_file_is_an_error() {
    assert!(read_fasta_file("data/does-not-exist.fas").is_err());
}

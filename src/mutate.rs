// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use rand::Rng;

use crate::seq::record::SeqRecord;

/// The bases eligible for substitution, in canonical order. Matching is case-sensitive: anything
/// else (lowercase, IUPAC ambiguity codes, gaps, ...) is copied through as is.
pub const NUCLEOTIDES: [char; 4] = ['A', 'C', 'G', 'T'];

pub fn is_recognized(c: char) -> bool {
    NUCLEOTIDES.contains(&c)
}

// The three bases a recognized base can mutate into, in canonical order.
fn alternatives(base: char) -> Option<[char; 3]> {
    match base {
        'A' => Some(['C', 'G', 'T']),
        'C' => Some(['A', 'G', 'T']),
        'G' => Some(['A', 'C', 'T']),
        'T' => Some(['A', 'C', 'G']),
        _ => None,
    }
}

/// Chooses the replacement for `base` from a uniform draw in [0, 1): the upper third of the range
/// picks the last alternative, the middle third the second, and the lower third the first.
/// Unrecognized characters are returned unchanged.
pub fn substitute(base: char, draw: f64) -> char {
    match alternatives(base) {
        Some(alts) => {
            if draw > 2.0 / 3.0 {
                alts[2]
            } else if draw > 1.0 / 3.0 {
                alts[1]
            } else {
                alts[0]
            }
        }
        None => base,
    }
}

/// Counts of recognized bases seen and of those that were substituted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MutationStats {
    pub examined: u64,
    pub substituted: u64,
}

impl MutationStats {
    pub fn observed_rate(&self) -> f64 {
        if self.examined == 0 {
            0.0
        } else {
            self.substituted as f64 / self.examined as f64
        }
    }
}

/// Applies independent point substitutions at a fixed per-base rate.
///
/// Each recognized base costs one draw from `rng`; a base that is substituted costs a second draw
/// to choose its replacement. A substitution never yields the original base. A rate <= 0 leaves
/// every sequence unchanged, and a rate >= 1 substitutes every recognized base.
pub struct Mutator<R> {
    rate: f64,
    rng: R,
    stats: MutationStats,
}

impl<R: Rng> Mutator<R> {
    pub fn new(rate: f64, rng: R) -> Self {
        Mutator {
            rate,
            rng,
            stats: MutationStats::default(),
        }
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Totals over everything mutated so far.
    pub fn stats(&self) -> MutationStats {
        self.stats
    }

    pub fn mutate_base(&mut self, base: char) -> char {
        if !is_recognized(base) {
            return base;
        }
        self.stats.examined += 1;
        if self.rng.random::<f64>() < self.rate {
            self.stats.substituted += 1;
            substitute(base, self.rng.random::<f64>())
        } else {
            base
        }
    }

    pub fn mutate_seq(&mut self, seq: &str) -> String {
        seq.chars().map(|c| self.mutate_base(c)).collect()
    }

    /// Mutates the record's sequence in place; the header is left alone. Returns the stats for
    /// this record only.
    pub fn mutate_record(&mut self, record: &mut SeqRecord) -> MutationStats {
        let before = self.stats;
        record.sequence = self.mutate_seq(&record.sequence);
        MutationStats {
            examined: self.stats.examined - before.examined,
            substituted: self.stats.substituted - before.substituted,
        }
    }
}

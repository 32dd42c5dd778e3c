// Copyright 2017 Lyndon Brown
//
// This file is part of the `adaptargs` command-line argument parsing library.
//
// Licensed under the MIT license or the Apache license (version 2.0), at your option. You may not
// copy, modify, or distribute this file except in compliance with said license. You can find copies
// of these licenses either in the LICENSE-MIT and LICENSE-APACHE files, or alternatively at
// <http://opensource.org/licenses/MIT> and <http://www.apache.org/licenses/LICENSE-2.0>
// respectively.

//! Distributing a run of positional tokens across ordered, quantified slots.
//!
//! Given `K` leftover (non-option) tokens and an ordered list of `P` [`Quantifier`] slots, the
//! [`Partitioner`] finds counts `c_1..c_P` summing to `K`, each respecting its slot's bound, or
//! reports that no such assignment exists. Where more than one assignment would satisfy every
//! bound, ties are broken **left-greedy with mandatory reservation**: walking slots left to
//! right, each slot takes as many tokens as it can while still leaving enough for every slot to
//! its right to reach its own minimum.

use crate::quantifier::Quantifier;

/// A sequence of quantified slots that [`partition`](Partitioner::partition) can distribute a
/// token count across.
#[derive(Debug, Clone, Default)]
pub struct Partitioner {
    slots: Vec<Quantifier>,
}

impl Partitioner {
    pub fn new() -> Self {
        Partitioner { slots: Vec::new() }
    }

    /// Appends a slot with the given bound.
    pub fn add_range(&mut self, min: u32, max: u32) -> &mut Self {
        self.slots.push(Quantifier::new(min, max));
        self
    }

    /// Appends a slot described by an existing quantifier.
    pub fn add_quantifier(&mut self, quantifier: Quantifier) -> &mut Self {
        self.slots.push(quantifier);
        self
    }

    /// Number of registered slots (`P`).
    pub fn partitions_count(&self) -> usize {
        self.slots.len()
    }

    /// The smallest `K` for which a partition can possibly exist (`∑ min`).
    pub fn minimum_sequence_size(&self) -> u32 {
        self.slots.iter().fold(0u32, |acc, q| acc.saturating_add(q.min))
    }

    /// The largest `K` for which a partition can possibly exist (`∑ max`), or
    /// [`Quantifier::UNBOUNDED`] if any slot is itself unbounded.
    pub fn maximum_sequence_size(&self) -> u32 {
        self.slots.iter().fold(0u32, |acc, q| {
            if acc == Quantifier::UNBOUNDED || q.is_unbounded() {
                Quantifier::UNBOUNDED
            } else {
                acc.saturating_add(q.max)
            }
        })
    }

    /// Distributes `k` items across the registered slots, or `None` if no distribution can
    /// satisfy every slot's bound (too few items for the combined minimum, too many for the
    /// combined maximum, or an infeasible point in between).
    pub fn partition(&self, k: u32) -> Option<Vec<u32>> {
        let p = self.slots.len();
        if p == 0 {
            return if k == 0 { Some(Vec::new()) } else { None };
        }

        // suffix_min[i] / suffix_max[i] = sum of min/max over slots i..P (unbounded-aware).
        let mut suffix_min = vec![0u32; p + 1];
        let mut suffix_max = vec![0u32; p + 1];
        for i in (0..p).rev() {
            let q = self.slots[i];
            suffix_min[i] = suffix_min[i + 1].saturating_add(q.min);
            suffix_max[i] = if suffix_max[i + 1] == Quantifier::UNBOUNDED || q.is_unbounded() {
                Quantifier::UNBOUNDED
            } else {
                suffix_max[i + 1].saturating_add(q.max)
            };
        }
        // reserved/cap "after slot i" is the suffix starting at i + 1.
        let reserved_after = |i: usize| suffix_min[i + 1];
        let cap_after = |i: usize| suffix_max[i + 1];

        let mut counts = vec![0u32; p];
        let mut remaining = k;
        for i in 0..p {
            let q = self.slots[i];
            let reserved = reserved_after(i);
            let cap = cap_after(i);

            let lower = if cap == Quantifier::UNBOUNDED {
                q.min
            } else {
                q.min.max(remaining.saturating_sub(cap))
            };
            // `reserved` is a sum of finite mins, so it is never the unbounded sentinel.
            let upper = q.max.min(remaining.saturating_sub(reserved));

            if lower > upper {
                return None;
            }
            // Left-greedy: take as much as possible now.
            let take = upper;
            counts[i] = take;
            remaining -= take;
        }

        if remaining != 0 {
            return None;
        }
        Some(counts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_unbounded_slot_takes_everything() {
        let mut p = Partitioner::new();
        p.add_range(0, Quantifier::UNBOUNDED);
        assert_eq!(p.partition(0), Some(vec![0]));
        assert_eq!(p.partition(7), Some(vec![7]));
    }

    #[test]
    fn below_minimum_is_infeasible() {
        let mut p = Partitioner::new();
        p.add_range(1, 1);
        p.add_range(0, Quantifier::UNBOUNDED);
        assert_eq!(p.partition(0), None);
    }

    #[test]
    fn above_maximum_is_infeasible() {
        let mut p = Partitioner::new();
        p.add_range(0, 2);
        assert_eq!(p.partition(3), None);
    }

    /// Mirrors the spec's S5 scenario: `foo` (Once), `bar` (ZeroOrMore) over 3 tokens.
    #[test]
    fn s5_once_then_unbounded() {
        let mut p = Partitioner::new();
        p.add_quantifier(Quantifier::ONCE);
        p.add_quantifier(Quantifier::ZERO_OR_MORE_TIMES);
        assert_eq!(p.partition(3), Some(vec![1, 2]));
    }

    /// Mirrors the spec's S6 scenario: `foo` (OneOrMore), `bar` (Once) over 3 tokens. Left-greedy
    /// with mandatory reservation gives the first slot everything except what the second slot's
    /// minimum requires.
    #[test]
    fn s6_left_greedy_reserves_for_later_minimum() {
        let mut p = Partitioner::new();
        p.add_quantifier(Quantifier::ONE_OR_MORE_TIMES);
        p.add_quantifier(Quantifier::ONCE);
        assert_eq!(p.partition(3), Some(vec![2, 1]));
    }

    #[test]
    fn monotonic_in_k() {
        let mut p = Partitioner::new();
        p.add_range(0, Quantifier::UNBOUNDED);
        p.add_range(1, 1);
        let low = p.partition(1).unwrap();
        let high = p.partition(2).unwrap();
        assert!(low[0] <= high[0]);
    }

    #[test]
    fn empty_partitioner_only_accepts_zero() {
        let p = Partitioner::new();
        assert_eq!(p.partition(0), Some(vec![]));
        assert_eq!(p.partition(1), None);
    }
}

// Copyright 2017 Lyndon Brown
//
// This file is part of the `adaptargs` command-line argument parsing library.
//
// Licensed under the MIT license or the Apache license (version 2.0), at your option. You may not
// copy, modify, or distribute this file except in compliance with said license. You can find copies
// of these licenses either in the LICENSE-MIT and LICENSE-APACHE files, or alternatively at
// <http://opensource.org/licenses/MIT> and <http://www.apache.org/licenses/LICENSE-2.0>
// respectively.

//! Occurrence bounds.
//!
//! A [`Quantifier`] is a `(min, max)` occurrence bound, used both for option repetition and for
//! positional slot sizing. `max` may be unbounded, represented here as [`Quantifier::UNBOUNDED`]
//! (`u32::MAX`) rather than as a separate enum case, so that arithmetic stays plain saturating
//! integer arithmetic instead of an `Option`-laden match at every call site.

use std::ops::Add;

use crate::error::SpecError;

/// An inclusive occurrence bound `min ..= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quantifier {
    pub min: u32,
    pub max: u32,
}

impl Quantifier {
    /// Sentinel standing in for an unbounded maximum.
    pub const UNBOUNDED: u32 = u32::MAX;

    /// Exactly one occurrence.
    pub const ONCE: Quantifier = Quantifier { min: 1, max: 1 };
    /// Zero or one occurrence.
    pub const NEVER_OR_ONCE: Quantifier = Quantifier { min: 0, max: 1 };
    /// Any number of occurrences, including none.
    pub const ZERO_OR_MORE_TIMES: Quantifier = Quantifier { min: 0, max: Quantifier::UNBOUNDED };
    /// At least one occurrence, with no upper bound.
    pub const ONE_OR_MORE_TIMES: Quantifier = Quantifier { min: 1, max: Quantifier::UNBOUNDED };

    /// Builds a new quantifier. Panics if `min > max`; use [`Quantifier::try_new`] at a
    /// registration boundary where the caller wants an error instead of a panic.
    pub fn new(min: u32, max: u32) -> Self {
        assert!(min <= max, "quantifier min ({}) exceeds max ({})", min, max);
        Quantifier { min, max }
    }

    /// Builds a new quantifier, returning [`SpecError::InvalidQuantifier`] rather than panicking
    /// if `min > max`. The fallible counterpart to [`Quantifier::new`], for call sites building a
    /// quantifier from caller-supplied bounds rather than a fixed constant.
    pub fn try_new(min: u32, max: u32) -> Result<Self, SpecError> {
        if min <= max {
            Ok(Quantifier { min, max })
        } else {
            Err(SpecError::InvalidQuantifier { min, max })
        }
    }

    /// A fixed exact occurrence count.
    pub fn exactly(n: u32) -> Self {
        Quantifier { min: n, max: n }
    }

    /// At least `n` occurrences, unbounded above.
    pub fn at_least(n: u32) -> Self {
        Quantifier { min: n, max: Quantifier::UNBOUNDED }
    }

    /// Whether `max` is the unbounded sentinel.
    pub fn is_unbounded(&self) -> bool {
        self.max == Quantifier::UNBOUNDED
    }

    /// Whether `n` occurrences satisfy this bound.
    pub fn satisfies(&self, n: u32) -> bool {
        self.min <= n && n <= self.max
    }

    /// How many more occurrences are permitted after `n` have already been seen. Saturates at
    /// zero; stays unbounded if `max` is unbounded.
    pub fn remaining(&self, n: u32) -> u32 {
        if self.is_unbounded() {
            Quantifier::UNBOUNDED
        } else {
            self.max.saturating_sub(n)
        }
    }
}

/// Component-wise addition with saturating arithmetic; the unbounded sentinel absorbs any
/// further addition (`∞ + x = ∞`).
impl Add for Quantifier {
    type Output = Quantifier;

    fn add(self, rhs: Quantifier) -> Quantifier {
        let max = if self.is_unbounded() || rhs.is_unbounded() {
            Quantifier::UNBOUNDED
        } else {
            self.max.saturating_add(rhs.max)
        };
        Quantifier { min: self.min.saturating_add(rhs.min), max }
    }
}

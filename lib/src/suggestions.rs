// Copyright 2017 Lyndon Brown
//
// This file is part of the `adaptargs` command-line argument parsing library.
//
// Licensed under the MIT license or the Apache license (version 2.0), at your option. You may not
// copy, modify, or distribute this file except in compliance with said license. You can find copies
// of these licenses either in the LICENSE-MIT and LICENSE-APACHE files, or alternatively at
// <http://opensource.org/licenses/MIT> and <http://www.apache.org/licenses/LICENSE-2.0>
// respectively.

//! “Did you mean…?” suggestions for unrecognised long options.
//!
//! Gated behind the `suggestions` Cargo feature (enabled by default), this uses the
//! `jaro_winkler` algorithm from the `strsim` crate to find the closest registered long option to
//! one the caller typed but that matched nothing. Candidates scoring below `0.8` are discarded;
//! among the rest, the first with the highest score is returned.

/// The minimum `jaro_winkler` score a candidate must reach to be worth suggesting.
#[cfg(feature = "suggestions")]
const MIN_SCORE: f64 = 0.8;

/// Finds the best-matching candidate for `unknown`, if any candidate scores highly enough.
#[cfg(feature = "suggestions")]
pub fn suggest<'c>(unknown: &str, candidates: impl Iterator<Item = &'c str>) -> Option<&'c str> {
    let mut best: Option<(&'c str, f64)> = None;
    for candidate in candidates {
        let score = strsim::jaro_winkler(unknown, candidate);
        if score < MIN_SCORE {
            continue;
        }
        match best {
            Some((_, best_score)) if best_score >= score => {},
            _ => best = Some((candidate, score)),
        }
    }
    best.map(|(candidate, _)| candidate)
}

/// Without the `suggestions` feature, no suggestion is ever offered.
#[cfg(not(feature = "suggestions"))]
pub fn suggest<'c>(_unknown: &str, _candidates: impl Iterator<Item = &'c str>) -> Option<&'c str> {
    None
}

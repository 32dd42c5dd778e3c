// Copyright 2017 Lyndon Brown
//
// This file is part of the `adaptargs` command-line argument parsing library.
//
// Licensed under the MIT license or the Apache license (version 2.0), at your option. You may not
// copy, modify, or distribute this file except in compliance with said license. You can find copies
// of these licenses either in the LICENSE-MIT and LICENSE-APACHE files, or alternatively at
// <http://opensource.org/licenses/MIT> and <http://www.apache.org/licenses/LICENSE-2.0>
// respectively.

//! Long-option name resolution: exact match, falling back to unambiguous abbreviation.
//!
//! The bodies are kept in a [`BTreeMap`] rather than the sorted-vector-plus-custom-comparator
//! `lowerBound` scheme used upstream; ordered iteration from a located key gives the same "find
//! all keys for which the query is a proper prefix" contract with deterministic, already-sorted
//! candidate ordering, without a hand-rolled three-way comparator.

use std::collections::BTreeMap;

/// Outcome of resolving a long-option body against a registered set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LongMatch {
    /// No registered body equals or is prefixed by the query.
    Unknown,
    /// Exactly one registered body matches (exactly, or as the sole abbreviation candidate).
    Exact(usize),
    /// More than one registered body is a proper-prefix match; abbreviation is ambiguous. Carries
    /// the matching option indices, body order (which is what the caller renders into canonical
    /// names), not the bare bodies themselves — bodies have no prefix to show the user.
    Ambiguous(Vec<usize>),
}

/// Resolves `name` against `longs` (body → option index). Exact matches always win; otherwise,
/// when `allow_abbreviation` is set, an unambiguous proper-prefix match is accepted.
pub fn find_long_match(
    longs: &BTreeMap<String, usize>,
    name: &str,
    allow_abbreviation: bool,
) -> LongMatch {
    if let Some(&index) = longs.get(name) {
        return LongMatch::Exact(index);
    }
    if !allow_abbreviation {
        return LongMatch::Unknown;
    }

    let mut candidates: Vec<usize> = Vec::new();
    for (body, &index) in longs.range(name.to_owned()..) {
        if !body.starts_with(name) {
            break;
        }
        candidates.push(index);
    }

    match candidates.len() {
        0 => LongMatch::Unknown,
        1 => LongMatch::Exact(candidates[0]),
        _ => LongMatch::Ambiguous(candidates),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(pairs: &[(&str, usize)]) -> BTreeMap<String, usize> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn exact_match_wins_over_abbreviation() {
        let longs = set(&[("foo", 0), ("foobar", 1)]);
        assert_eq!(find_long_match(&longs, "foo", true), LongMatch::Exact(0));
    }

    #[test]
    fn unique_abbreviation_resolves() {
        let longs = set(&[("foo", 0), ("foobar", 1)]);
        assert_eq!(find_long_match(&longs, "foob", true), LongMatch::Exact(1));
    }

    #[test]
    fn ambiguous_abbreviation_lists_sorted_candidates() {
        let longs = set(&[("foobar", 0), ("foorab", 1)]);
        match find_long_match(&longs, "fo", true) {
            LongMatch::Ambiguous(candidates) => assert_eq!(candidates, vec![0, 1]),
            other => panic!("expected Ambiguous, got {:?}", other),
        }
    }

    #[test]
    fn abbreviation_disabled_requires_exact() {
        let longs = set(&[("foo", 0)]);
        assert_eq!(find_long_match(&longs, "fo", false), LongMatch::Unknown);
    }

    #[test]
    fn unknown_when_no_candidates() {
        let longs = set(&[("foo", 0)]);
        assert_eq!(find_long_match(&longs, "bar", true), LongMatch::Unknown);
    }
}

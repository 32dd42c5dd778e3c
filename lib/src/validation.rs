// Copyright 2017 Lyndon Brown
//
// This file is part of the `adaptargs` command-line argument parsing library.
//
// Licensed under the MIT license or the Apache license (version 2.0), at your option. You may not
// copy, modify, or distribute this file except in compliance with said license. You can find copies
// of these licenses either in the LICENSE-MIT and LICENSE-APACHE files, or alternatively at
// <http://opensource.org/licenses/MIT> and <http://www.apache.org/licenses/LICENSE-2.0>
// respectively.

//! Per-parse occurrence counts.

use std::collections::HashMap;

/// Maps a registered option's or positional's canonical name to how many times it was observed
/// during one `parse` call. A fresh, all-zero instance is created per call; unobserved names
/// simply never gain an entry, which [`ValidationData::count`] treats the same as an explicit
/// zero.
#[derive(Debug, Clone, Default)]
pub struct ValidationData {
    counts: HashMap<String, u32>,
}

impl ValidationData {
    pub fn new() -> Self {
        ValidationData { counts: HashMap::new() }
    }

    /// Increments the count recorded under `name`.
    pub fn record(&mut self, name: &str) {
        *self.counts.entry(name.to_owned()).or_insert(0) += 1;
    }

    /// The number of times `name` was observed; zero if it was never recorded.
    pub fn count(&self, name: &str) -> u32 {
        self.counts.get(name).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unobserved_name_counts_as_zero() {
        let data = ValidationData::new();
        assert_eq!(data.count("--foo"), 0);
    }

    #[test]
    fn record_increments() {
        let mut data = ValidationData::new();
        data.record("--foo");
        data.record("--foo");
        assert_eq!(data.count("--foo"), 2);
        assert_eq!(data.count("--bar"), 0);
    }
}

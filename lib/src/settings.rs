// Copyright 2017 Lyndon Brown
//
// This file is part of the `adaptargs` command-line argument parsing library.
//
// Licensed under the MIT license or the Apache license (version 2.0), at your option. You may not
// copy, modify, or distribute this file except in compliance with said license. You can find copies
// of these licenses either in the LICENSE-MIT and LICENSE-APACHE files, or alternatively at
// <http://opensource.org/licenses/MIT> and <http://www.apache.org/licenses/LICENSE-2.0>
// respectively.

//! Prefix and delimiter configuration.

/// Recognised prefixes, delimiters and stop sequences for a [`Parser`](crate::parser::Parser).
///
/// Multiple spellings of a prefix or delimiter may be declared "equivalent": interchangeable on
/// the wire, canonicalised internally to whichever form the caller registered first. This is
/// modelled simply, by allowing more than one entry in the relevant set rather than via a
/// separate spelling→canonical-id map; the tokenizer treats every member of a set identically.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Single characters that introduce a short option (e.g. `-`).
    pub short_prefixes: Vec<char>,
    /// Multi-character strings that introduce a long option (e.g. `--`).
    pub long_prefixes: Vec<String>,
    /// Characters separating an inline `name=value` pair.
    pub value_delimiters: Vec<char>,
    /// Literal tokens that switch the remainder of the stream to "no more options".
    pub option_stop_sequences: Vec<String>,
    /// Whether an unambiguous proper prefix of a long option's body may stand in for it.
    pub allow_abbreviation: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings::common_unix()
    }
}

impl Settings {
    /// The conventional Unix-style configuration: `-` for short options, `--` for long options
    /// and the stop sequence, `=` for inline values, abbreviation enabled.
    pub fn common_unix() -> Self {
        Settings {
            short_prefixes: vec!['-'],
            long_prefixes: vec!["--".to_owned()],
            value_delimiters: vec!['='],
            option_stop_sequences: vec!["--".to_owned()],
            allow_abbreviation: true,
        }
    }

    /// A single-dash "alternate" style: long options only, introduced with one dash (`-help`
    /// rather than `--help`). Some people simply prefer this.
    pub fn alternate() -> Self {
        Settings {
            short_prefixes: vec![],
            long_prefixes: vec!["-".to_owned()],
            value_delimiters: vec!['='],
            option_stop_sequences: vec!["--".to_owned()],
            allow_abbreviation: true,
        }
    }

    pub fn with_allow_abbreviation(mut self, allow: bool) -> Self {
        self.allow_abbreviation = allow;
        self
    }

    pub fn with_short_prefixes(mut self, prefixes: Vec<char>) -> Self {
        self.short_prefixes = prefixes;
        self
    }

    pub fn with_long_prefixes(mut self, prefixes: Vec<String>) -> Self {
        self.long_prefixes = prefixes;
        self
    }

    pub fn with_value_delimiters(mut self, delimiters: Vec<char>) -> Self {
        self.value_delimiters = delimiters;
        self
    }

    pub fn with_option_stop_sequences(mut self, sequences: Vec<String>) -> Self {
        self.option_stop_sequences = sequences;
        self
    }

    pub(crate) fn matching_long_prefix<'a>(&self, arg: &'a str) -> Option<&'a str> {
        for prefix in &self.long_prefixes {
            if let Some(body) = arg.strip_prefix(prefix.as_str()) {
                return Some(body);
            }
        }
        None
    }

    pub(crate) fn matching_short_prefix(&self, arg: &str) -> Option<char> {
        let mut chars = arg.chars();
        let first = chars.next()?;
        if self.short_prefixes.contains(&first) && chars.next().is_some() {
            Some(first)
        } else {
            None
        }
    }

    pub(crate) fn is_option_stop_sequence(&self, arg: &str) -> bool {
        self.option_stop_sequences.iter().any(|s| s == arg)
    }

    pub(crate) fn split_on_delimiter<'a>(&self, body: &'a str) -> Option<(&'a str, &'a str)> {
        let idx = body.find(|c| self.value_delimiters.contains(&c))?;
        let delim_len = body[idx..].chars().next().unwrap().len_utf8();
        Some((&body[..idx], &body[idx + delim_len..]))
    }
}

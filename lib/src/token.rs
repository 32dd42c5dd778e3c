// Copyright 2017 Lyndon Brown
//
// This file is part of the `adaptargs` command-line argument parsing library.
//
// Licensed under the MIT license or the Apache license (version 2.0), at your option. You may not
// copy, modify, or distribute this file except in compliance with said license. You can find copies
// of these licenses either in the LICENSE-MIT and LICENSE-APACHE files, or alternatively at
// <http://opensource.org/licenses/MIT> and <http://www.apache.org/licenses/LICENSE-2.0>
// respectively.

//! Tokens produced by the [tokenizer](crate::tokenizer).

use std::borrow::Cow;

/// One classified unit of the argument stream. Text fields borrow from the original argv buffer
/// where possible; a `Token` must not outlive it.
///
/// `used_name` is always the full spelling as written, prefix included (`"-x"`, `"--foo"`), so
/// that every error built from a token names the option the same way across the short and long
/// paths. For a long option or a whole unrecognised/multi-char-short argument it simply borrows
/// the original entry; reassembling a single short option peeled out of a bundle (`-z` out of
/// `-xza`) needs its own small owned string, since the prefix character and the peeled character
/// are not adjacent in the original argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'s> {
    /// A recognised option, possibly carrying an inline `name=value` argument.
    Option {
        arg_idx: usize,
        option_index: usize,
        used_name: Cow<'s, str>,
        inline_argument: Option<&'s str>,
    },
    /// A non-option argument.
    Argument { arg_idx: usize, text: &'s str },
    /// An explicit stop sequence; everything after it is `Argument`.
    OptionStop { arg_idx: usize },
    /// An option-looking spelling that matched no registered form.
    UnknownOption { arg_idx: usize, used_name: Cow<'s, str> },
    /// A long-option abbreviation that matched more than one registered form.
    AmbiguousOption { arg_idx: usize, used_name: &'s str, candidates: Vec<String> },
}

impl<'s> Token<'s> {
    pub fn arg_idx(&self) -> usize {
        match self {
            Token::Option { arg_idx, .. }
            | Token::Argument { arg_idx, .. }
            | Token::OptionStop { arg_idx }
            | Token::UnknownOption { arg_idx, .. }
            | Token::AmbiguousOption { arg_idx, .. } => *arg_idx,
        }
    }
}

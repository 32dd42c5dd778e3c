// Copyright 2017 Lyndon Brown
//
// This file is part of the `adaptargs` command-line argument parsing library.
//
// Licensed under the MIT license or the Apache license (version 2.0), at your option. You may not
// copy, modify, or distribute this file except in compliance with said license. You can find copies
// of these licenses either in the LICENSE-MIT and LICENSE-APACHE files, or alternatively at
// <http://opensource.org/licenses/MIT> and <http://www.apache.org/licenses/LICENSE-2.0>
// respectively.

//! An adaptive command line argument parser.
//!
//! This crate assists Rust programs in parsing argument vectors that mix interleaved *options*
//! with a run of *positional* arguments distributed across an ordered sequence of occurrence-
//! quantified slots, plus a small boolean algebra for expressing constraints over which options
//! were observed once parsing finishes.
//!
//! Licensed under the MIT license or the Apache license, Version 2.0, at your option.
//!
//! # Documentation
//!
//! Most of this crate's documentation is found within its submodules, including a dedicated
//! [documentation (`docs`) module](docs/index.html).
//!
//! # Quick tour
//!
//! - [`Settings`](settings::Settings) configures the recognised prefixes, delimiters and
//!   option-stop sequences.
//! - [`OptionName`](option_name::OptionName) and [`OptionSpec`](spec::OptionSpec) describe one
//!   registrable option; [`PositionalSpec`](spec::PositionalSpec) describes one positional slot.
//! - [`Quantifier`](quantifier::Quantifier) is the `(min, max)` occurrence bound shared by both.
//! - [`Parser`](parser::Parser) owns a registered collection of both and drives
//!   [`Parser::parse`](parser::Parser::parse) against an argument vector.
//! - [`Validator`](validator::Validator) expresses post-parse constraints over
//!   [`ValidationData`](validation::ValidationData).

#![deny(bare_trait_objects)]

#[cfg(feature = "suggestions")]
extern crate strsim;

pub mod docs;
pub mod error;
mod matching;
pub mod option_name;
pub mod partitioner;
pub mod parser;
pub mod quantifier;
pub mod settings;
pub mod spec;
pub mod suggestions;
pub mod token;
mod tokenizer;
pub mod validation;
pub mod validator;

// Copyright 2017 Lyndon Brown
//
// This file is part of the `adaptargs` command-line argument parsing library.
//
// Licensed under the MIT license or the Apache license (version 2.0), at your option. You may not
// copy, modify, or distribute this file except in compliance with said license. You can find copies
// of these licenses either in the LICENSE-MIT and LICENSE-APACHE files, or alternatively at
// <http://opensource.org/licenses/MIT> and <http://www.apache.org/licenses/LICENSE-2.0>
// respectively.

//! Error types.
//!
//! Two distinct channels exist. [`SpecError`] is raised during the builder phase, when describing
//! *options* and *positionals* to a [`Parser`](crate::parser::Parser) — these are programming
//! errors, the kind that should be caught the first time a test exercises the broken registration.
//! [`ParseError`] is raised while parsing an actual argument vector, and is the only channel a
//! well-formed program needs to handle at runtime.

use std::error::Error;
use std::fmt;

/// A failure encountered while registering *options* or *positionals* with a parser.
///
/// These indicate a bug in the calling program (duplicate forms, a malformed quantifier) rather
/// than anything to do with user-supplied input, and are therefore kept on a separate channel
/// from [`ParseError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecError {
    /// Two or more registered option names share a spelling (short or long).
    DuplicateOptionForm(String),
    /// A specifier did not begin with any configured prefix.
    MissingPrefix(String),
    /// A specifier was empty after its prefix was stripped.
    EmptySpecifier(String),
    /// An option name contained a reserved character (a value delimiter, in a long form).
    ReservedCharacter(String),
    /// A quantifier's `min` exceeded its `max`.
    InvalidQuantifier { min: u32, max: u32 },
    /// Two or more registered positionals, or the validator targeting a name, refer to a name
    /// that nothing was actually registered under.
    UnknownName(String),
}

impl fmt::Display for SpecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecError::DuplicateOptionForm(name) => {
                write!(f, "duplicate option form: {}", name)
            },
            SpecError::MissingPrefix(spec) => {
                write!(f, "specifier has no recognised prefix: {}", spec)
            },
            SpecError::EmptySpecifier(spec) => {
                write!(f, "specifier is empty after its prefix: {}", spec)
            },
            SpecError::ReservedCharacter(spec) => {
                write!(f, "specifier contains a reserved character: {}", spec)
            },
            SpecError::InvalidQuantifier { min, max } => {
                write!(f, "invalid quantifier: min ({}) exceeds max ({})", min, max)
            },
            SpecError::UnknownName(name) => {
                write!(f, "no option or positional is registered under the name: {}", name)
            },
        }
    }
}

impl Error for SpecError {}

/// A failure encountered while parsing an argument vector.
///
/// The first error aborts parsing; there is no partial-success recovery. Each variant carries
/// enough data to reconstruct a human-readable message without re-parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// An option-looking token matched no registered short or long form.
    UnrecognizedOption(String),
    /// An abbreviated long option matched more than one registered form.
    AmbiguousOption { used: String, candidates: Vec<String> },
    /// A `Required`-argument option reached end of stream (or a following option) with no value.
    MissingOptionArgument(String),
    /// A value was supplied (via `=value`) to an option that takes no argument.
    ExtraOptionArgument(String),
    /// More positional tokens were present than the registered positionals can absorb.
    ExtraPositional(String),
    /// A quantifier minimum went unmet, or a registered validator rejected the parse.
    ValidationError(String),
    /// A user-supplied handler (option, positional, or validator) returned its own failure.
    HandlerFailed(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnrecognizedOption(name) => {
                write!(f, "unrecognized option: {}", name)
            },
            ParseError::AmbiguousOption { used, candidates } => {
                write!(f, "ambiguous option: {} (candidates: {})", used, candidates.join(", "))
            },
            ParseError::MissingOptionArgument(name) => {
                write!(f, "missing argument for option: {}", name)
            },
            ParseError::ExtraOptionArgument(name) => {
                write!(f, "unexpected argument supplied to option: {}", name)
            },
            ParseError::ExtraPositional(value) => {
                write!(f, "unexpected extra positional argument: {}", value)
            },
            ParseError::ValidationError(description) => {
                write!(f, "validation failed: {}", description)
            },
            ParseError::HandlerFailed(message) => {
                write!(f, "handler failed: {}", message)
            },
        }
    }
}

impl Error for ParseError {}

/// Convenience alias for a handler result where the error has already been rendered to text.
///
/// User handlers may fail with any [`Error`]; the parser stores the rendered [`Display`] message
/// in [`ParseError::HandlerFailed`] since handler error types vary per caller and are not
/// otherwise nameable in the parser's own error enum.
pub type HandlerResult = Result<(), Box<dyn Error>>;

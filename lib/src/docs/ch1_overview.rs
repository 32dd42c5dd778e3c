// Copyright 2017 Lyndon Brown
//
// This file is part of the `adaptargs` command-line argument parsing library.
//
// Licensed under the MIT license or the Apache license (version 2.0), at your option. You may not
// copy, modify, or distribute this file except in compliance with said license. You can find copies
// of these licenses either in the LICENSE-MIT and LICENSE-APACHE files, or alternatively at
// <http://opensource.org/licenses/MIT> and <http://www.apache.org/licenses/LICENSE-2.0>
// respectively.

//! Documentation: Crate overview
//!
//! A common requirement of a program is the need to parse command line arguments supplied to it.
//! This library was designed to *assist* Rust based programs in this area, going a step further
//! than a traditional `getopt`-alike by also taking on the bookkeeping of distributing a run of
//! *positional* arguments across an ordered sequence of quantified slots, and the evaluation of
//! post-parse constraints over which options were seen.
//!
//! # Design
//!
//! The basic premise of usage is:
//!
//!  1. Describe the *options* and *positionals* “available” to your program, each with an
//!     occurrence [`Quantifier`](crate::quantifier::Quantifier) and a handler.
//!  2. Optionally describe [*validators*](crate::validator::Validator): boolean combinations of
//!     “was this option seen” predicates, evaluated once parsing has otherwise succeeded.
//!  3. Hand the input argument vector to [`Parser::parse`](crate::parser::Parser::parse). Options
//!     are dispatched to their handlers immediately, in argv order; positionals are buffered and,
//!     once the whole vector has been seen, distributed across their slots by the
//!     [`Partitioner`](crate::partitioner::Partitioner) before their own handlers run; validators
//!     run last.
//!
//! What it does not attempt to do includes: subcommand dispatch; automating help/usage/version
//! text; data/state conversion beyond delivering string views to handlers; environment-variable or
//! config-file integration; interactive prompting. See the crate root for the full non-goals list.
//!
//! # Features
//!
//! <table>
//!     <thead>
//!         <tr><th>Feature</th><th>Supported/provided?</th></tr>
//!     </thead>
//!     <tbody>
//!         <tr><td>“Posixly correct”-style option/positional interleaving</td><td>Yes, positionals are buffered and placed independently of interleaved options</td></tr>
//!         <tr><td>Traditional style options (‘long’ and ‘short’)</td><td>Yes</td></tr>
//!         <tr><td>Alternate style options (‘long’ only, with single dash)</td><td>Yes</td></tr>
//!         <tr><td>Mandatory data-value taking options</td><td>Yes, both ‘in-same-arg’ and ‘in-next-arg’</td></tr>
//!         <tr><td>Optional data-value taking options</td><td>Yes, ‘in-same-arg’ only</td></tr>
//!         <tr><td>Quantified ‘positional’ slots</td><td>Yes, via the [`Partitioner`](crate::partitioner::Partitioner)</td></tr>
//!         <tr><td>‘Early terminator’</td><td>Yes</td></tr>
//!         <tr><td>Abbreviated long option name matching</td><td>Yes (optional)</td></tr>
//!         <tr><td>Mismatch suggestions</td><td>Yes*, for unrecognised long options</td></tr>
//!         <tr><td>Validator algebra over observed occurrence counts</td><td>Yes, see [`Validator`](crate::validator::Validator)</td></tr>
//!         <tr><td>Command arguments (subcommands)</td><td>No, out of scope</td></tr>
//!         <tr><td>Help/usage output generation</td><td>No, out of scope</td></tr>
//!         <tr><td>Data value range/set checking, type conversion</td><td>Not done for you</td></tr>
//!     </tbody>
//! </table>
//!
//! *Optional feature, controlled via the `Cargo` feature `suggestions`.

// Copyright 2017 Lyndon Brown
//
// This file is part of the `adaptargs` command-line argument parsing library.
//
// Licensed under the MIT license or the Apache license (version 2.0), at your option. You may not
// copy, modify, or distribute this file except in compliance with said license. You can find copies
// of these licenses either in the LICENSE-MIT and LICENSE-APACHE files, or alternatively at
// <http://opensource.org/licenses/MIT> and <http://www.apache.org/licenses/LICENSE-2.0>
// respectively.

//! Documentation: Option argument support
//!
//! This crate has been designed around standard *option* conventions, on par with the C
//! `getopt_long` function.
//!
//! # Option styles
//!
//! There are two different common *option* styles this library can parse
//! ([`Settings::common_unix`](crate::settings::Settings::common_unix) versus
//! [`Settings::alternate`](crate::settings::Settings::alternate)):
//!
//! - Standard mode (default) supports traditional *long* and *short* *options*, where *long
//!   options* use a “double-dash” prefix (e.g. `--help`), and *short options* use a single dash
//!   (e.g. `-h`).
//! - Alternate mode supports *long options* only (no *short options*), with a single dash prefix
//!   (i.e. `-help` rather than `--help`).
//!
//! # Basic parsing model
//!
//! The fundamental argument parsing logic follows this model:
//!
//!  - An argument either **not** starting with a dash, or consisting only of a single dash, is
//!    **not** an *option* argument — it is a *positional*.
//!  - An argument matching a configured *option-stop sequence* (`--` by default) is not an
//!    *option* either; it switches the remainder of the stream to “no more options”.
//!  - An argument starting with a long prefix followed by additional characters is a *long
//!    option*. The portion after the prefix is the *long option name* (or name plus inline value,
//!    as below).
//!  - An argument starting with a short prefix followed by additional (non-dash) characters is a
//!    *short option set*, where each character after the prefix represents a *short option*
//!    (except with respect to inline data values). More than one *short option* can be specified
//!    in a single argument (“bundling”).
//!
//! Arguments are parsed in sequence, one at a time. Parsing of each argument may alter how one or
//! more subsequent arguments are interpreted — consider the effect of an *option-stop sequence*,
//! or of an option with an “in-next-argument” data value.
//!
//! Option matching is case-sensitive. Argument-looking strings that happen to resemble negative
//! numbers (`-4`) are never special-cased: `-4` is an option iff `-4` is registered, otherwise it
//! is a positional like any other.
//!
//! # Data values
//!
//! *Long* and *short* *options* can be configured as flag (no value), optional-value, or
//! required-value.
//!
//! ## With long options
//!
//! “In-next-argument” style looks like `--foo bar`; “in-same-argument” style uses the first
//! configured delimiter (`=` by default) between name and value, e.g. `--foo=bar`. A long option’s
//! name may not itself contain a delimiter character.
//!
//! When a long-option argument contains a delimiter, the portion before the first one is taken as
//! the name and the remainder (even if empty, as in `--foo=`) as the inline value, *before*
//! matching against registered options.
//!
//!  - A flag option given an inline value (even an empty one) reports `ExtraOptionArgument`.
//!  - A required-value option consumes an inline value if present, otherwise the next argument;
//!    if there is no next argument, `MissingOptionArgument` is reported.
//!  - An optional-value option only ever consumes an inline value; with none present, its handler
//!    runs with `None`, distinguishing `--foo` from `--foo=`.
//!
//! ## With short options
//!
//! “In-next-argument” style looks like `-o val`; “in-same-argument” style looks like `-oval`.
//! Unlike long options, a short option's inline value is **not** split on a delimiter character —
//! `-z=a` passes the literal text `=a` as `-z`'s value, matching the behaviour of the reference
//! implementation this library's *adaptive parser* was modelled on.
//!
//! When a short option set is encountered, its characters are matched in sequence:
//!
//!  - A flag-type match is simply reported, and the next character (if any) is matched next.
//!  - A value-taking match consumes the remainder of the argument as its value (e.g. with `o`
//!    taking a value, `-oval` yields `val`); if it is the last character and the value is
//!    required, the next argument is consumed instead.
//!  - An unrecognised character is reported as an unknown option, and matching continues with the
//!    characters after it.
//!
//! A *multi-character short* form (registered with more than one character after the prefix, e.g.
//! `-fo`) is matched only exactly, against the whole, unpeeled body of the argument, never as part
//! of per-character bundling.
//!
//! # Abbreviated long option name matching
//!
//! An abbreviated form of a *long option’s* name matches so long as it is a proper prefix of
//! exactly one registered long option. This is enabled by default
//! ([`Settings::allow_abbreviation`](crate::settings::Settings)) and can be disabled.
//!
//! Given options `foo` and `foobar`: `--foo` and `--foobar` are exact matches; `--f` and `--fo` are
//! ambiguous (matching both); `--foob` and `--fooba` uniquely resolve to `foobar`. An exact match
//! always takes precedence over an abbreviation, however short.

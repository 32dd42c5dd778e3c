// Copyright 2017 Lyndon Brown
//
// This file is part of the `adaptargs` command-line argument parsing library.
//
// Licensed under the MIT license or the Apache license (version 2.0), at your option. You may not
// copy, modify, or distribute this file except in compliance with said license. You can find copies
// of these licenses either in the LICENSE-MIT and LICENSE-APACHE files, or alternatively at
// <http://opensource.org/licenses/MIT> and <http://www.apache.org/licenses/LICENSE-2.0>
// respectively.

//! Documentation: Positional partitioning and validators
//!
//! # Positionals and quantifiers
//!
//! A *positional* is any argument that is not consumed as an option or an option's value. Rather
//! than shuffling positionals to the end of the input (the default `getopt` behaviour), this
//! library buffers them in the order encountered and, once the entire argument vector has been
//! tokenized, distributes them across the registered positional slots in one step.
//!
//! Each slot carries a [`Quantifier`](crate::quantifier::Quantifier): an inclusive `(min, max)`
//! occurrence bound. `max` may be unbounded. The
//! [`Partitioner`](crate::partitioner::Partitioner) walks the slots left to right; for any given
//! count of leftover tokens there is at most one feasible assignment under the tie-break rule
//! **left-greedy with mandatory reservation**: each slot takes as many tokens as it can while
//! still leaving enough for every slot after it to reach its own minimum.
//!
//! For example, with slots `foo` (`OneOrMoreTimes`) then `bar` (`Once`) and three leftover tokens,
//! `foo` does *not* take all three: it reserves the one token `bar` requires, taking two for
//! itself. With the slot order reversed, `foo` still takes only as many as it can while honouring
//! `bar`'s minimum wherever `bar` sits in the sequence.
//!
//! If the leftover token count is below the combined minimum or above the combined maximum (or
//! falls in an infeasible gap between per-slot bounds), parsing fails with a structured error
//! identifying the shortfall or the first unplaceable token, rather than silently dropping
//! anything.
//!
//! # Validators
//!
//! Once positionals have been placed, any registered [`Validator`](crate::validator::Validator)
//! runs over the resulting occurrence counts ([`ValidationData`](crate::validation::ValidationData)).
//! A validator is a small boolean expression tree built from two leaf predicates —
//! [`Validator::required`] (“this name was seen at least once”) and [`Validator::absent`] (“this
//! name was never seen”) — combined with [`Validator::and`], [`Validator::or`],
//! [`Validator::xor`] and [`Validator::nxor`].
//!
//! Negating a validator ([`Validator::negate`]) rewrites it eagerly via De Morgan's laws, so the
//! tree a validator is built from is always already in negation-normal form: there is no separate
//! `Not` node to carry around or to un-negate later. `And` and `Or` flatten directly nested
//! children of the same kind at construction time (`a && (b && c)` and `(a && b) && c` produce the
//! same 3-child node); `Xor` and `NXor` do not, since parity over a flattened child list would not
//! mean the same thing as parity over the original grouping.
//!
//! Every validator can render itself as an indented, human-readable tree
//! ([`Validator::describe`]); a validator added without an explicit description uses this
//! rendering as the message of the [`ParseError::ValidationError`](crate::error::ParseError) it
//! raises on failure.

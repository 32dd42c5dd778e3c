// Copyright 2017 Lyndon Brown
//
// This file is part of the `adaptargs` command-line argument parsing library.
//
// Licensed under the MIT license or the Apache license (version 2.0), at your option. You may not
// copy, modify, or distribute this file except in compliance with said license. You can find copies
// of these licenses either in the LICENSE-MIT and LICENSE-APACHE files, or alternatively at
// <http://opensource.org/licenses/MIT> and <http://www.apache.org/licenses/LICENSE-2.0>
// respectively.

//! Registrable option and positional descriptions.
//!
//! Handlers are stored in a tagged union over the three [`OptionArgumentKind`] variants, rather
//! than a single handler trait with runtime argument-count checks: the parser dispatches on the
//! tag, and the handler's own type signature rules out calling it with the wrong shape of
//! argument at compile time.

use crate::error::HandlerResult;
use crate::option_name::OptionName;
use crate::quantifier::Quantifier;

/// Whether an option takes a data value, and if so, whether supplying one is mandatory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionArgumentKind {
    /// A flag option; takes no value.
    None,
    /// A value may be supplied, but only in the same argument (`--foo=bar` / `-fbar`); never
    /// consumes the next argv entry.
    Optional,
    /// A value must be supplied, either in the same argument or as the next argv entry.
    Required,
}

/// An option's handler, keyed by the shape its [`OptionArgumentKind`] implies.
pub enum OptionHandler<'h> {
    None(Box<dyn FnMut() -> HandlerResult + 'h>),
    Optional(Box<dyn FnMut(Option<&str>) -> HandlerResult + 'h>),
    Required(Box<dyn FnMut(&str) -> HandlerResult + 'h>),
}

/// One registrable option: its name, how it takes a value, how many times it may occur, and the
/// handler invoked each time it is matched.
pub struct OptionSpec<'h> {
    pub(crate) name: OptionName,
    pub(crate) occurrence: Quantifier,
    pub(crate) handler: OptionHandler<'h>,
}

impl<'h> OptionSpec<'h> {
    /// A flag option, taking no value.
    pub fn none(
        name: OptionName,
        occurrence: Quantifier,
        handler: impl FnMut() -> HandlerResult + 'h,
    ) -> Self {
        OptionSpec { name, occurrence, handler: OptionHandler::None(Box::new(handler)) }
    }

    /// An option whose value may only be supplied in the same argument.
    pub fn optional(
        name: OptionName,
        occurrence: Quantifier,
        handler: impl FnMut(Option<&str>) -> HandlerResult + 'h,
    ) -> Self {
        OptionSpec { name, occurrence, handler: OptionHandler::Optional(Box::new(handler)) }
    }

    /// An option whose value must be supplied, in the same or the next argument.
    pub fn required(
        name: OptionName,
        occurrence: Quantifier,
        handler: impl FnMut(&str) -> HandlerResult + 'h,
    ) -> Self {
        OptionSpec { name, occurrence, handler: OptionHandler::Required(Box::new(handler)) }
    }

    pub fn name(&self) -> &OptionName {
        &self.name
    }

    pub fn occurrence(&self) -> Quantifier {
        self.occurrence
    }

    pub fn arg_kind(&self) -> OptionArgumentKind {
        match &self.handler {
            OptionHandler::None(_) => OptionArgumentKind::None,
            OptionHandler::Optional(_) => OptionArgumentKind::Optional,
            OptionHandler::Required(_) => OptionArgumentKind::Required,
        }
    }
}

/// One registrable positional slot: a display name (used as its canonical
/// [`ValidationData`](crate::validation::ValidationData) key), an occurrence quantifier, and a
/// handler invoked once per assigned token with a 0-based index local to the slot.
pub struct PositionalSpec<'h> {
    pub(crate) display_name: String,
    pub(crate) occurrence: Quantifier,
    pub(crate) handler: Box<dyn FnMut(u32, &str) -> HandlerResult + 'h>,
}

impl<'h> PositionalSpec<'h> {
    pub fn new(
        display_name: impl Into<String>,
        occurrence: Quantifier,
        handler: impl FnMut(u32, &str) -> HandlerResult + 'h,
    ) -> Self {
        PositionalSpec { display_name: display_name.into(), occurrence, handler: Box::new(handler) }
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn occurrence(&self) -> Quantifier {
        self.occurrence
    }
}

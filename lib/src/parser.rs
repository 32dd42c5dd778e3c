// Copyright 2017 Lyndon Brown
//
// This file is part of the `adaptargs` command-line argument parsing library.
//
// Licensed under the MIT license or the Apache license (version 2.0), at your option. You may not
// copy, modify, or distribute this file except in compliance with said license. You can find copies
// of these licenses either in the LICENSE-MIT and LICENSE-APACHE files, or alternatively at
// <http://opensource.org/licenses/MIT> and <http://www.apache.org/licenses/LICENSE-2.0>
// respectively.

//! The adaptive parser.
//!
//! A [`Parser`] owns a collection of registered *options* and *positionals*, plus a set of
//! [`Settings`]. Options are dispatched the moment they are recognised; positional tokens are
//! buffered until the end of the argument stream, at which point a [`Partitioner`] built from the
//! registered positionals' quantifiers decides how many tokens each slot gets. Validators then run
//! over the resulting occurrence counts.
//!
//! # Parsing style
//!
//! There is exactly one parsing style: call [`Parser::parse`] with an argument slice (excluding
//! the program name) and let it run to completion, invoking handlers as it goes and returning
//! `Ok(())` or the first [`ParseError`] encountered. Handlers run synchronously, in argv order, on
//! the calling thread; there is no iterator-based "one token at a time" entry point, since
//! dispatch needs one token of lookahead to resolve a [`pending`](PendingOption) option's
//! argument, which the orchestration in this module keeps as private state rather than exposing as
//! resumable iteration.

use std::borrow::Cow;

use crate::error::{ParseError, SpecError};
use crate::partitioner::Partitioner;
use crate::quantifier::Quantifier;
use crate::settings::Settings;
use crate::spec::{OptionArgumentKind, OptionSpec, PositionalSpec};
use crate::token::Token;
use crate::tokenizer::{Registry, Tokenizer};
use crate::validation::ValidationData;
use crate::validator::Validator;

/// The two-state pending-option machine from the component design: `Idle`, or `Awaiting` an
/// argument for a specific `Required`-kind option that has already been matched but not yet
/// supplied a value.
enum PendingOption<'s> {
    Idle,
    Awaiting { option_index: usize, used_name: Cow<'s, str> },
}

/// A registered collection of *options* and *positionals*, ready to parse argument vectors
/// against.
///
/// `'h` is the lifetime of any state captured by registered handlers.
pub struct Parser<'h> {
    settings: Settings,
    registry: Registry,
    options: Vec<OptionSpec<'h>>,
    positionals: Vec<PositionalSpec<'h>>,
    validators: Vec<(Validator, Option<String>)>,
}

impl<'h> Parser<'h> {
    pub fn new(settings: Settings) -> Self {
        Parser {
            settings,
            registry: Registry::new(),
            options: Vec::new(),
            positionals: Vec::new(),
            validators: Vec::new(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Registers an option. Fails if any of its forms collides with one already registered.
    pub fn add_option(&mut self, spec: OptionSpec<'h>) -> Result<(), SpecError> {
        self.registry.register(&spec.name, spec.arg_kind())?;
        self.options.push(spec);
        Ok(())
    }

    /// Registers a positional slot. Slots are consulted, in registration order, by the
    /// [`Partitioner`] built at the end of each `parse` call.
    pub fn add_positional(&mut self, spec: PositionalSpec<'h>) {
        self.positionals.push(spec);
    }

    /// Registers a validator with an explicit description, used verbatim in the resulting
    /// [`ParseError::ValidationError`] should it fail. Fails if any leaf predicate names an option
    /// or positional that was not already registered with this parser — validators are meant to
    /// be added after the specs they constrain, same as the builder order used throughout this
    /// crate's own examples.
    pub fn add_validator_described(
        &mut self,
        validator: Validator,
        description: impl Into<String>,
    ) -> Result<(), SpecError> {
        self.check_validator_names(&validator)?;
        self.validators.push((validator, Some(description.into())));
        Ok(())
    }

    /// Registers a validator whose description, should it fail, is derived by rendering its tree
    /// (see [`Validator::describe`]). Same name-checking as
    /// [`add_validator_described`](Parser::add_validator_described).
    pub fn add_validator(&mut self, validator: Validator) -> Result<(), SpecError> {
        self.check_validator_names(&validator)?;
        self.validators.push((validator, None));
        Ok(())
    }

    /// Checks that every leaf predicate in `validator` names an already-registered option or
    /// positional, returning [`SpecError::UnknownName`] for the first that does not.
    fn check_validator_names(&self, validator: &Validator) -> Result<(), SpecError> {
        let mut names = Vec::new();
        validator.leaf_names(&mut names);
        for name in names {
            let known = self.options.iter().any(|o| o.name().canonical() == name)
                || self.positionals.iter().any(|p| p.display_name() == name);
            if !known {
                return Err(SpecError::UnknownName(name.to_owned()));
            }
        }
        Ok(())
    }

    /// Parses `args` (the program name must already be excluded). Returns the first error
    /// encountered; on error, no further handlers or validators run; on `Ok`, every token was
    /// consumed, every option and positional quantifier was satisfied, and every validator passed.
    pub fn parse<'s>(&mut self, args: &'s [String]) -> Result<(), ParseError> {
        let mut validation = ValidationData::new();
        let mut positional_buffer: Vec<&'s str> = Vec::new();
        let mut pending = PendingOption::Idle;

        let tokens: Vec<Token<'s>> =
            Tokenizer::new(&self.registry, &self.settings, args).collect();

        for token in tokens {
            match token {
                Token::OptionStop { .. } => {
                    self.flush_pending(&mut pending, &mut validation)?;
                },
                Token::Option { option_index, used_name, inline_argument, .. } => {
                    self.flush_pending(&mut pending, &mut validation)?;
                    let arg_kind = self.options[option_index].arg_kind();
                    match (arg_kind, inline_argument) {
                        (OptionArgumentKind::None, Some(_)) => {
                            return Err(ParseError::ExtraOptionArgument(used_name.into_owned()));
                        },
                        (OptionArgumentKind::Required, None) => {
                            pending = PendingOption::Awaiting { option_index, used_name };
                        },
                        (_, value) => {
                            self.invoke_option(option_index, value)?;
                            validation.record(self.registry.canonical(option_index));
                        },
                    }
                },
                Token::Argument { text, .. } => match pending {
                    PendingOption::Awaiting { option_index, .. } => {
                        self.invoke_option(option_index, Some(text))?;
                        validation.record(self.registry.canonical(option_index));
                        pending = PendingOption::Idle;
                    },
                    PendingOption::Idle => positional_buffer.push(text),
                },
                Token::UnknownOption { used_name, .. } => match pending {
                    // Permissive: a `Required` option still awaiting its value consumes even an
                    // option-looking spelling as that value, rather than rejecting it outright.
                    PendingOption::Awaiting { option_index, .. } => {
                        self.invoke_option(option_index, Some(used_name.as_ref()))?;
                        validation.record(self.registry.canonical(option_index));
                        pending = PendingOption::Idle;
                    },
                    PendingOption::Idle => {
                        return Err(ParseError::UnrecognizedOption(used_name.into_owned()));
                    },
                },
                Token::AmbiguousOption { used_name, candidates, .. } => {
                    self.flush_pending(&mut pending, &mut validation)?;
                    return Err(ParseError::AmbiguousOption {
                        used: used_name.to_owned(),
                        candidates,
                    });
                },
            }
        }

        self.flush_pending(&mut pending, &mut validation)?;
        self.check_option_quantifiers(&validation)?;
        self.partition_and_dispatch_positionals(&positional_buffer, &mut validation)?;
        self.run_validators(&validation)?;
        Ok(())
    }

    fn flush_pending(
        &mut self,
        pending: &mut PendingOption<'_>,
        validation: &mut ValidationData,
    ) -> Result<(), ParseError> {
        let (option_index, used_name) = match std::mem::replace(pending, PendingOption::Idle) {
            PendingOption::Idle => return Ok(()),
            PendingOption::Awaiting { option_index, used_name } => (option_index, used_name),
        };
        match self.options[option_index].arg_kind() {
            OptionArgumentKind::Required => Err(ParseError::MissingOptionArgument(used_name.into_owned())),
            OptionArgumentKind::Optional | OptionArgumentKind::None => {
                self.invoke_option(option_index, None)?;
                validation.record(self.registry.canonical(option_index));
                Ok(())
            },
        }
    }

    fn invoke_option(&mut self, option_index: usize, value: Option<&str>) -> Result<(), ParseError> {
        use crate::spec::OptionHandler;
        let result = match &mut self.options[option_index].handler {
            OptionHandler::None(f) => f(),
            OptionHandler::Optional(f) => f(value),
            OptionHandler::Required(f) => {
                f(value.expect("a Required option was invoked without a value"))
            },
        };
        result.map_err(|e| ParseError::HandlerFailed(e.to_string()))
    }

    fn check_option_quantifiers(&self, validation: &ValidationData) -> Result<(), ParseError> {
        for spec in &self.options {
            let count = validation.count(spec.name().canonical());
            if !spec.occurrence().satisfies(count) {
                return Err(ParseError::ValidationError(format!(
                    "{} must occur between {} and {} times, occurred {} times",
                    spec.name().canonical(),
                    spec.occurrence().min,
                    display_max(spec.occurrence()),
                    count,
                )));
            }
        }
        Ok(())
    }

    fn partition_and_dispatch_positionals(
        &mut self,
        positional_buffer: &[&str],
        validation: &mut ValidationData,
    ) -> Result<(), ParseError> {
        let mut partitioner = Partitioner::new();
        for spec in &self.positionals {
            partitioner.add_quantifier(spec.occurrence());
        }

        let k = positional_buffer.len() as u32;
        let counts = match partitioner.partition(k) {
            Some(counts) => counts,
            None => {
                let max_total = partitioner.maximum_sequence_size();
                if max_total != Quantifier::UNBOUNDED && k > max_total {
                    let overflow_idx = max_total as usize;
                    let value = positional_buffer
                        .get(overflow_idx)
                        .map(|s| (*s).to_owned())
                        .unwrap_or_default();
                    return Err(ParseError::ExtraPositional(value));
                }
                let name = self.first_unmet_positional_name(k);
                return Err(ParseError::ValidationError(format!(
                    "not enough positional arguments for '{}'",
                    name
                )));
            },
        };

        let mut offset = 0usize;
        for (slot_idx, &count) in counts.iter().enumerate() {
            let canonical = self.positionals[slot_idx].display_name().to_owned();
            for local_index in 0..count {
                let text = positional_buffer[offset];
                {
                    let spec = &mut self.positionals[slot_idx];
                    (spec.handler)(local_index, text)
                        .map_err(|e| ParseError::HandlerFailed(e.to_string()))?;
                }
                validation.record(&canonical);
                offset += 1;
            }
        }
        Ok(())
    }

    /// Best-effort identification of the first slot whose minimum cannot be met by `k` leftover
    /// tokens, for the `ValidationError` message when `partition` reports infeasibility that is
    /// not a simple overflow.
    fn first_unmet_positional_name(&self, k: u32) -> &str {
        let mut remaining = k;
        for spec in &self.positionals {
            if remaining < spec.occurrence().min {
                return spec.display_name();
            }
            remaining = remaining.saturating_sub(spec.occurrence().min);
        }
        self.positionals.last().map(|s| s.display_name()).unwrap_or("<positional>")
    }

    /// Suggests the closest registered long option to a spelling that matched nothing, for
    /// building a "did you mean" hint around an [`ParseError::UnrecognizedOption`]. Returns
    /// `None` if `unrecognized` is not long-prefixed, or no candidate scores highly enough (see
    /// the [`suggestions`](crate::suggestions) module), or the crate was built without the
    /// `suggestions` feature.
    pub fn suggest(&self, unrecognized: &str) -> Option<String> {
        let body = self.settings.matching_long_prefix(unrecognized)?;
        let prefix = self.settings.long_prefixes.first()?;
        crate::suggestions::suggest(body, self.registry.long_bodies())
            .map(|candidate| format!("{}{}", prefix, candidate))
    }

    fn run_validators(&self, validation: &ValidationData) -> Result<(), ParseError> {
        for (validator, description) in &self.validators {
            if !validator.evaluate(validation) {
                let message = description.clone().unwrap_or_else(|| validator.describe());
                return Err(ParseError::ValidationError(message));
            }
        }
        Ok(())
    }
}

fn display_max(q: Quantifier) -> String {
    if q.is_unbounded() {
        "unlimited".to_owned()
    } else {
        q.max.to_string()
    }
}

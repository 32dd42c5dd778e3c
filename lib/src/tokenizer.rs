// Copyright 2017 Lyndon Brown
//
// This file is part of the `adaptargs` command-line argument parsing library.
//
// Licensed under the MIT license or the Apache license (version 2.0), at your option. You may not
// copy, modify, or distribute this file except in compliance with said license. You can find copies
// of these licenses either in the LICENSE-MIT and LICENSE-APACHE files, or alternatively at
// <http://opensource.org/licenses/MIT> and <http://www.apache.org/licenses/LICENSE-2.0>
// respectively.

//! Streams an argument vector into a sequence of classified [`Token`]s under a [`Settings`]
//! policy.
//!
//! [`Tokenizer`] is a pull iterator, mirroring the upstream `ParseIter` shape: each call to
//! `next()` returns one token, borrowing its text from the original argument slice. A short
//! option bundle (e.g. `-abc`) spans several `next()` calls; the unconsumed remainder of the
//! bundle is kept as small internal state between calls rather than materialised up front.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};

use crate::error::SpecError;
use crate::matching::{find_long_match, LongMatch};
use crate::option_name::OptionName;
use crate::settings::Settings;
use crate::spec::OptionArgumentKind;
use crate::token::Token;

struct RegisteredOption {
    canonical: String,
    arg_kind: OptionArgumentKind,
}

/// The tokenizer's view of the registered options: three ordered dictionaries keyed by each
/// option's forms, per §4.2.
#[derive(Default)]
pub struct Registry {
    options: Vec<RegisteredOption>,
    single_shorts: HashMap<char, usize>,
    multi_shorts: HashMap<String, usize>,
    longs: BTreeMap<String, usize>,
    /// Every character that leads *some* registered short form, single or multi. Used to decide
    /// whether an unrecognised short body was a plausible attempt at an option (and should abort
    /// with the full spelling) or bears no relation to anything registered (and should fall back
    /// to a literal positional, per the "no numeric special case" rule: digits are not singled
    /// out, they simply never happen to lead a registered form).
    lead_chars: std::collections::HashSet<char>,
}

impl Registry {
    pub fn new() -> Self {
        Registry::default()
    }

    /// Registers `name` with argument kind `arg_kind`, returning its option index. Fails if any
    /// of its forms collides with an already-registered option.
    pub fn register(
        &mut self,
        name: &OptionName,
        arg_kind: OptionArgumentKind,
    ) -> Result<usize, SpecError> {
        for c in name.short_single_forms() {
            if self.single_shorts.contains_key(c) {
                return Err(SpecError::DuplicateOptionForm(format!("-{}", c)));
            }
        }
        for body in name.short_multi_bodies() {
            if self.multi_shorts.contains_key(body) {
                return Err(SpecError::DuplicateOptionForm(format!("-{}", body)));
            }
        }
        for body in name.long_bodies() {
            if self.longs.contains_key(body) {
                return Err(SpecError::DuplicateOptionForm(format!("--{}", body)));
            }
        }

        let index = self.options.len();
        self.options.push(RegisteredOption { canonical: name.canonical().to_owned(), arg_kind });
        for &c in name.short_single_forms() {
            self.single_shorts.insert(c, index);
            self.lead_chars.insert(c);
        }
        for body in name.short_multi_bodies() {
            self.multi_shorts.insert(body.clone(), index);
            if let Some(c) = body.chars().next() {
                self.lead_chars.insert(c);
            }
        }
        for body in name.long_bodies() {
            self.longs.insert(body.clone(), index);
        }
        Ok(index)
    }

    pub fn arg_kind(&self, index: usize) -> OptionArgumentKind {
        self.options[index].arg_kind
    }

    pub fn canonical(&self, index: usize) -> &str {
        &self.options[index].canonical
    }

    /// The bare (prefix-stripped) bodies of every registered long option, for suggestion lookup.
    pub(crate) fn long_bodies(&self) -> impl Iterator<Item = &str> {
        self.longs.keys().map(|s| s.as_str())
    }
}

/// Pulls one [`Token`] at a time out of an argument slice (index 0, the program name, must
/// already be excluded by the caller).
pub struct Tokenizer<'o, 's> {
    registry: &'o Registry,
    settings: &'o Settings,
    args: &'s [String],
    arg_idx: usize,
    option_stop: bool,
    /// Remaining unconsumed portion of a short bundle still being peeled: the argv index, the
    /// full original entry (for reporting), the unconsumed remainder, and whether that remainder
    /// is still the fresh (unpeeled) body of its argument (multi-char-short exact match, and the
    /// literal/near-miss fallback, only apply to the fresh body, never to a continuation after
    /// peeling has begun).
    pending_short: Option<(usize, &'s str, &'s str, bool)>,
}

impl<'o, 's> Tokenizer<'o, 's> {
    pub fn new(registry: &'o Registry, settings: &'o Settings, args: &'s [String]) -> Self {
        Tokenizer { registry, settings, args, arg_idx: 0, option_stop: false, pending_short: None }
    }
}

impl<'o, 's> Iterator for Tokenizer<'o, 's> {
    type Item = Token<'s>;

    fn next(&mut self) -> Option<Token<'s>> {
        if let Some((arg_idx, full_arg, body, fresh)) = self.pending_short.take() {
            return Some(self.peel_short(arg_idx, full_arg, body, fresh));
        }

        let idx = self.arg_idx;
        if idx >= self.args.len() {
            return None;
        }
        self.arg_idx += 1;
        let arg: &'s str = self.args[idx].as_str();

        if self.option_stop {
            return Some(Token::Argument { arg_idx: idx, text: arg });
        }
        if self.settings.is_option_stop_sequence(arg) {
            self.option_stop = true;
            return Some(Token::OptionStop { arg_idx: idx });
        }
        if let Some(body) = self.settings.matching_long_prefix(arg) {
            return Some(self.handle_long(idx, arg, body));
        }
        if self.settings.matching_short_prefix(arg).is_some() {
            let prefix_len = arg.chars().next().unwrap().len_utf8();
            let body = &arg[prefix_len..];
            return Some(self.peel_short(idx, arg, body, true));
        }
        Some(Token::Argument { arg_idx: idx, text: arg })
    }
}

impl<'o, 's> Tokenizer<'o, 's> {
    fn handle_long(&mut self, arg_idx: usize, full_arg: &'s str, body: &'s str) -> Token<'s> {
        let (name, inline) = match self.settings.split_on_delimiter(body) {
            Some((name, value)) => (name, Some(value)),
            None => (body, None),
        };
        match find_long_match(&self.registry.longs, name, self.settings.allow_abbreviation) {
            LongMatch::Unknown => Token::UnknownOption { arg_idx, used_name: Cow::Borrowed(full_arg) },
            LongMatch::Exact(option_index) => Token::Option {
                arg_idx,
                option_index,
                used_name: Cow::Borrowed(full_arg),
                inline_argument: inline,
            },
            LongMatch::Ambiguous(candidates) => {
                // §4.2 wants the sorted *canonical* names (prefix included), not the bare bodies
                // `find_long_match` matched against.
                let candidates = candidates
                    .into_iter()
                    .map(|index| self.registry.canonical(index).to_owned())
                    .collect();
                Token::AmbiguousOption { arg_idx, used_name: full_arg, candidates }
            },
        }
    }

    /// Consumes exactly one short option (or, on a fresh body, checks for a multi-char short
    /// first) from `body`, leaving any remainder pending for the next `next()` call.
    ///
    /// On a fresh body whose leading character matches nothing registered, two outcomes are
    /// possible rather than one: if no registered short form (single or multi) even *starts*
    /// with that character, the whole original entry bears no relation to the registered option
    /// set and is handed back whole as a literal [`Token::Argument`] (this is what keeps an
    /// unregistered `-2` a plain positional rather than a parade of one-character unknown-option
    /// tokens, without singling out digits specially). If some registered form does start with
    /// that character, the spelling was a plausible-but-failed attempt at an option, so peeling
    /// aborts and the *whole* entry is reported via [`Token::UnknownOption`] instead of just the
    /// offending character.
    fn peel_short(&mut self, arg_idx: usize, full_arg: &'s str, body: &'s str, fresh: bool) -> Token<'s> {
        if fresh {
            if let Some(&option_index) = self.registry.multi_shorts.get(body) {
                // `body` is the fresh, untouched remainder after the prefix, so `full_arg` is
                // exactly the prefix followed by `body` — borrowing is safe here.
                return Token::Option {
                    arg_idx,
                    option_index,
                    used_name: Cow::Borrowed(full_arg),
                    inline_argument: None,
                };
            }
        }

        let mut chars = body.chars();
        let c = chars.next().expect("peel_short called with an empty body");
        let rest: &'s str = chars.as_str();
        let prefix_char = full_arg.chars().next().expect("full_arg carries a short prefix");
        let used_name: Cow<'s, str> = Cow::Owned(format!("{}{}", prefix_char, c));

        match self.registry.single_shorts.get(&c) {
            None => {
                if fresh {
                    if !self.registry.lead_chars.contains(&c) {
                        return Token::Argument { arg_idx, text: full_arg };
                    }
                    return Token::UnknownOption { arg_idx, used_name: Cow::Borrowed(full_arg) };
                }
                if !rest.is_empty() {
                    self.pending_short = Some((arg_idx, full_arg, rest, false));
                }
                Token::UnknownOption { arg_idx, used_name }
            },
            Some(&option_index) => {
                if self.registry.arg_kind(option_index) == OptionArgumentKind::None {
                    if !rest.is_empty() {
                        self.pending_short = Some((arg_idx, full_arg, rest, false));
                    }
                    Token::Option { arg_idx, option_index, used_name, inline_argument: None }
                } else {
                    let inline = if rest.is_empty() { None } else { Some(rest) };
                    Token::Option { arg_idx, option_index, used_name, inline_argument: inline }
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;

    fn settings() -> Settings {
        Settings::common_unix()
    }

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bundling_equivalence() {
        let settings = settings();
        let mut registry = Registry::new();
        for spec in ["-a", "-b", "-c"] {
            let name = OptionName::new(&settings, &[spec]).unwrap();
            registry.register(&name, OptionArgumentKind::None).unwrap();
        }
        let bundled = args(&["-abc"]);
        let separate = args(&["-a", "-b", "-c"]);

        let bundled_tokens: Vec<_> =
            Tokenizer::new(&registry, &settings, &bundled).map(token_summary).collect();
        let separate_tokens: Vec<_> =
            Tokenizer::new(&registry, &settings, &separate).map(token_summary).collect();
        assert_eq!(bundled_tokens, separate_tokens);
    }

    fn token_summary(t: Token<'_>) -> (String, Option<String>) {
        match t {
            Token::Option { option_index, inline_argument, .. } => {
                (format!("opt{}", option_index), inline_argument.map(|s| s.to_owned()))
            },
            Token::Argument { text, .. } => ("arg".to_owned(), Some(text.to_owned())),
            Token::OptionStop { .. } => ("stop".to_owned(), None),
            Token::UnknownOption { used_name, .. } => {
                ("unknown".to_owned(), Some(used_name.into_owned()))
            },
            Token::AmbiguousOption { used_name, .. } => {
                ("ambiguous".to_owned(), Some(used_name.to_owned()))
            },
        }
    }

    /// Mirrors the spec's S3 scenario: `-x` (none), `-z` (requires arg), input `-xza`.
    #[test]
    fn s3_short_bundle_with_trailing_data_option() {
        let settings = settings();
        let mut registry = Registry::new();
        let x = OptionName::new(&settings, &["-x"]).unwrap();
        registry.register(&x, OptionArgumentKind::None).unwrap();
        let z = OptionName::new(&settings, &["-z"]).unwrap();
        registry.register(&z, OptionArgumentKind::Required).unwrap();

        let input = args(&["-xza"]);
        let tokens: Vec<_> = Tokenizer::new(&registry, &settings, &input).collect();
        match &tokens[..] {
            [Token::Option { option_index: 0, inline_argument: None, .. }, Token::Option { option_index: 1, inline_argument: Some("a"), .. }] =>
            {},
            other => panic!("unexpected tokens: {:?}", other),
        }
    }

    /// Mirrors the spec's S4 scenario: ambiguous abbreviation.
    #[test]
    fn s4_ambiguous_abbreviation() {
        let settings = settings();
        let mut registry = Registry::new();
        let a = OptionName::new(&settings, &["--foobar"]).unwrap();
        registry.register(&a, OptionArgumentKind::None).unwrap();
        let b = OptionName::new(&settings, &["--foorab"]).unwrap();
        registry.register(&b, OptionArgumentKind::None).unwrap();

        let input = args(&["--fo"]);
        let tokens: Vec<_> = Tokenizer::new(&registry, &settings, &input).collect();
        match &tokens[..] {
            [Token::AmbiguousOption { candidates, .. }] => {
                assert_eq!(candidates, &["--foobar".to_owned(), "--foorab".to_owned()]);
            },
            other => panic!("unexpected tokens: {:?}", other),
        }
    }

    #[test]
    fn long_inline_value_splits_on_first_delimiter() {
        let settings = settings();
        let mut registry = Registry::new();
        let name = OptionName::new(&settings, &["--foo"]).unwrap();
        registry.register(&name, OptionArgumentKind::Required).unwrap();

        let input = args(&["--foo=bar=baz"]);
        let tokens: Vec<_> = Tokenizer::new(&registry, &settings, &input).collect();
        match &tokens[..] {
            [Token::Option { inline_argument: Some("bar=baz"), .. }] => {},
            other => panic!("unexpected tokens: {:?}", other),
        }
    }

    #[test]
    fn short_inline_value_is_not_split_on_delimiter() {
        let settings = settings();
        let mut registry = Registry::new();
        let name = OptionName::new(&settings, &["-z"]).unwrap();
        registry.register(&name, OptionArgumentKind::Required).unwrap();

        let input = args(&["-z=a"]);
        let tokens: Vec<_> = Tokenizer::new(&registry, &settings, &input).collect();
        match &tokens[..] {
            [Token::Option { inline_argument: Some("=a"), .. }] => {},
            other => panic!("unexpected tokens: {:?}", other),
        }
    }

    /// An unregistered short body that nonetheless shares a leading character with a registered
    /// multi-char short (`-yyy`) is a plausible-but-failed attempt, not a stray positional: the
    /// whole spelling aborts as a single `UnknownOption` rather than a one-character token.
    #[test]
    fn near_miss_short_bundle_aborts_with_full_spelling() {
        let settings = settings();
        let mut registry = Registry::new();
        let x = OptionName::new(&settings, &["-x"]).unwrap();
        registry.register(&x, OptionArgumentKind::None).unwrap();
        let yyy = OptionName::new(&settings, &["-yyy"]).unwrap();
        registry.register(&yyy, OptionArgumentKind::None).unwrap();
        let z = OptionName::new(&settings, &["-z"]).unwrap();
        registry.register(&z, OptionArgumentKind::Required).unwrap();

        let input = args(&["-yx"]);
        let tokens: Vec<_> = Tokenizer::new(&registry, &settings, &input).collect();
        match &tokens[..] {
            [Token::UnknownOption { used_name, .. }] if used_name.as_ref() == "-yx" => {},
            other => panic!("unexpected tokens: {:?}", other),
        }
    }

    #[test]
    fn lone_dash_is_a_positional() {
        let settings = settings();
        let registry = Registry::new();
        let input = args(&["-"]);
        let tokens: Vec<_> = Tokenizer::new(&registry, &settings, &input).collect();
        match &tokens[..] {
            [Token::Argument { text: "-", .. }] => {},
            other => panic!("unexpected tokens: {:?}", other),
        }
    }

    /// Mirrors the spec's S8 scenario: no numeric special-casing.
    #[test]
    fn negative_numbers_are_not_special_cased() {
        let settings = settings();
        let mut registry = Registry::new();
        let four = OptionName::new(&settings, &["-4"]).unwrap();
        registry.register(&four, OptionArgumentKind::None).unwrap();

        let input = args(&["-4", "-2"]);
        let tokens: Vec<_> = Tokenizer::new(&registry, &settings, &input).collect();
        match &tokens[..] {
            [Token::Option { option_index: 0, .. }, Token::Argument { text: "-2", .. }] => {},
            other => panic!("unexpected tokens: {:?}", other),
        }
    }

    #[test]
    fn option_stop_switches_remainder_to_arguments() {
        let settings = settings();
        let mut registry = Registry::new();
        let name = OptionName::new(&settings, &["-x"]).unwrap();
        registry.register(&name, OptionArgumentKind::None).unwrap();

        let input = args(&["--", "-x"]);
        let tokens: Vec<_> = Tokenizer::new(&registry, &settings, &input).collect();
        match &tokens[..] {
            [Token::OptionStop { .. }, Token::Argument { text: "-x", .. }] => {},
            other => panic!("unexpected tokens: {:?}", other),
        }
    }
}

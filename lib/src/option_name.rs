// Copyright 2017 Lyndon Brown
//
// This file is part of the `adaptargs` command-line argument parsing library.
//
// Licensed under the MIT license or the Apache license (version 2.0), at your option. You may not
// copy, modify, or distribute this file except in compliance with said license. You can find copies
// of these licenses either in the LICENSE-MIT and LICENSE-APACHE files, or alternatively at
// <http://opensource.org/licenses/MIT> and <http://www.apache.org/licenses/LICENSE-2.0>
// respectively.

//! Option names: the immutable set of spellings an option is known by.

use crate::error::SpecError;
use crate::settings::Settings;

/// A single specifier's classification once its prefix has been stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Form {
    /// A long form; body has two or more characters conventionally, but any length is allowed so
    /// long as it is non-empty (e.g. alternate mode's single-dash long options commonly use short
    /// bodies too).
    Long(String),
    /// A single-character short form.
    ShortSingle(char),
    /// A multi-character short form ("multi-char short"), matched only exactly, never peeled.
    ShortMulti(String),
}

/// An option's full set of spellings, built from one or more specifier strings (e.g. `"-x"`,
/// `"--foo"`, `"--f"`). Every specifier must begin with a prefix configured in the [`Settings`]
/// passed to [`OptionName::new`].
///
/// The canonical display name is the first registered long form if any were given, else the
/// lexicographically first short form (by full spelling, prefix included).
#[derive(Debug, Clone, PartialEq)]
pub struct OptionName {
    canonical: String,
    long_bodies: Vec<String>,
    short_single: Vec<char>,
    short_multi: Vec<String>,
}

impl OptionName {
    /// Builds an `OptionName` from one or more specifier strings, classifying each against the
    /// prefixes and delimiters in `settings`.
    pub fn new(settings: &Settings, specifiers: &[&str]) -> Result<OptionName, SpecError> {
        if specifiers.is_empty() {
            return Err(SpecError::EmptySpecifier(String::new()));
        }

        let mut forms = Vec::with_capacity(specifiers.len());
        let mut long_candidates: Vec<&str> = Vec::new();
        let mut short_candidates: Vec<&str> = Vec::new();

        for &spec in specifiers {
            if let Some(body) = settings.matching_long_prefix(spec) {
                if body.is_empty() {
                    return Err(SpecError::EmptySpecifier(spec.to_owned()));
                }
                if body.chars().any(|c| settings.value_delimiters.contains(&c)) {
                    return Err(SpecError::ReservedCharacter(spec.to_owned()));
                }
                forms.push(Form::Long(body.to_owned()));
                long_candidates.push(spec);
            } else if let Some(_prefix) = settings.matching_short_prefix(spec) {
                let body = &spec[spec.chars().next().unwrap().len_utf8()..];
                if body.is_empty() {
                    return Err(SpecError::EmptySpecifier(spec.to_owned()));
                }
                let mut chars = body.chars();
                let first = chars.next().unwrap();
                if chars.next().is_none() {
                    forms.push(Form::ShortSingle(first));
                } else {
                    forms.push(Form::ShortMulti(body.to_owned()));
                }
                short_candidates.push(spec);
            } else {
                return Err(SpecError::MissingPrefix(spec.to_owned()));
            }
        }

        let canonical = if let Some(first_long) = long_candidates.first() {
            (*first_long).to_owned()
        } else {
            let mut sorted = short_candidates.clone();
            sorted.sort_unstable();
            sorted[0].to_owned()
        };

        let mut name = OptionName {
            canonical,
            long_bodies: Vec::new(),
            short_single: Vec::new(),
            short_multi: Vec::new(),
        };
        for form in forms {
            match form {
                Form::Long(body) => name.long_bodies.push(body),
                Form::ShortSingle(c) => name.short_single.push(c),
                Form::ShortMulti(body) => name.short_multi.push(body),
            }
        }
        Ok(name)
    }

    /// The preferred spelling for display and as the key into [`ValidationData`](crate::validation::ValidationData).
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    pub fn long_bodies(&self) -> &[String] {
        &self.long_bodies
    }

    pub fn short_single_forms(&self) -> &[char] {
        &self.short_single
    }

    pub fn short_multi_bodies(&self) -> &[String] {
        &self.short_multi
    }

    /// Whether this name shares any spelling with `other`; used to detect duplicate registration.
    pub fn conflicts_with(&self, other: &OptionName) -> bool {
        self.long_bodies.iter().any(|b| other.long_bodies.contains(b))
            || self.short_single.iter().any(|c| other.short_single.contains(c))
            || self.short_multi.iter().any(|b| other.short_multi.contains(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_long_and_short() {
        let settings = Settings::common_unix();
        let name = OptionName::new(&settings, &["--foo", "-f"]).unwrap();
        assert_eq!(name.canonical(), "--foo");
        assert_eq!(name.long_bodies(), &["foo".to_owned()]);
        assert_eq!(name.short_single_forms(), &['f']);
    }

    #[test]
    fn canonical_prefers_long() {
        let settings = Settings::common_unix();
        let name = OptionName::new(&settings, &["-f", "--foo"]).unwrap();
        assert_eq!(name.canonical(), "--foo");
    }

    #[test]
    fn canonical_falls_back_to_lexicographically_first_short() {
        let settings = Settings::common_unix();
        let name = OptionName::new(&settings, &["-z", "-a"]).unwrap();
        assert_eq!(name.canonical(), "-a");
    }

    #[test]
    fn multi_char_short_classified_separately() {
        let settings = Settings::common_unix();
        let name = OptionName::new(&settings, &["-fo"]).unwrap();
        assert_eq!(name.short_multi_bodies(), &["fo".to_owned()]);
        assert!(name.short_single_forms().is_empty());
    }

    #[test]
    fn missing_prefix_is_a_spec_error() {
        let settings = Settings::common_unix();
        assert_eq!(
            OptionName::new(&settings, &["foo"]),
            Err(SpecError::MissingPrefix("foo".to_owned())),
        );
    }

    #[test]
    fn long_form_cannot_contain_delimiter() {
        let settings = Settings::common_unix();
        assert_eq!(
            OptionName::new(&settings, &["--fo=o"]),
            Err(SpecError::ReservedCharacter("--fo=o".to_owned())),
        );
    }
}

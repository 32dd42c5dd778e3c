// Copyright 2017 Lyndon Brown
//
// This file is part of the `adaptargs` command-line argument parsing library.
//
// Licensed under the MIT license or the Apache license (version 2.0), at your option. You may not
// copy, modify, or distribute this file except in compliance with said license. You can find copies
// of these licenses either in the LICENSE-MIT and LICENSE-APACHE files, or alternatively at
// <http://opensource.org/licenses/MIT> and <http://www.apache.org/licenses/LICENSE-2.0>
// respectively.

//! End-to-end parsing scenarios, exercising the [`Parser`] against realistic combinations of
//! options, positionals and validators, rather than the isolated unit tests found alongside each
//! component.

use std::cell::RefCell;
use std::rc::Rc;

use adaptargs::error::{HandlerResult, ParseError};
use adaptargs::option_name::OptionName;
use adaptargs::quantifier::Quantifier;
use adaptargs::parser::Parser;
use adaptargs::settings::Settings;
use adaptargs::spec::{OptionSpec, PositionalSpec};
use adaptargs::validator::Validator;

fn args(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// A small but realistic command: `--verbose`/`-v` (repeatable flag), `--output`/`-o` (required
/// value), a single mandatory `input` positional, and a trailing `extra` positional list.
struct Fixture {
    parser: Parser<'static>,
    verbose_count: Rc<RefCell<u32>>,
    output: Rc<RefCell<Option<String>>>,
    input: Rc<RefCell<Option<String>>>,
    extras: Rc<RefCell<Vec<String>>>,
}

fn build_fixture() -> Fixture {
    let settings = Settings::common_unix();
    let mut parser = Parser::new(settings.clone());

    let verbose_count = Rc::new(RefCell::new(0u32));
    let verbose_clone = verbose_count.clone();
    let verbose_name = OptionName::new(&settings, &["--verbose", "-v"]).unwrap();
    parser
        .add_option(OptionSpec::none(verbose_name, Quantifier::ZERO_OR_MORE_TIMES, move || -> HandlerResult {
            *verbose_clone.borrow_mut() += 1;
            Ok(())
        }))
        .unwrap();

    let output = Rc::new(RefCell::new(None));
    let output_clone = output.clone();
    let output_name = OptionName::new(&settings, &["--output", "-o"]).unwrap();
    parser
        .add_option(OptionSpec::required(output_name, Quantifier::NEVER_OR_ONCE, move |value: &str| -> HandlerResult {
            *output_clone.borrow_mut() = Some(value.to_owned());
            Ok(())
        }))
        .unwrap();

    let input = Rc::new(RefCell::new(None));
    let input_clone = input.clone();
    parser.add_positional(PositionalSpec::new("input", Quantifier::ONCE, move |_, value: &str| -> HandlerResult {
        *input_clone.borrow_mut() = Some(value.to_owned());
        Ok(())
    }));

    let extras = Rc::new(RefCell::new(Vec::new()));
    let extras_clone = extras.clone();
    parser.add_positional(PositionalSpec::new(
        "extra",
        Quantifier::ZERO_OR_MORE_TIMES,
        move |_, value: &str| -> HandlerResult {
            extras_clone.borrow_mut().push(value.to_owned());
            Ok(())
        },
    ));

    Fixture { parser, verbose_count, output, input, extras }
}

#[test]
fn options_and_positionals_interleave_freely() {
    let mut fx = build_fixture();
    fx.parser.parse(&args(&["-v", "in.txt", "--verbose", "-o", "out.txt", "a", "b"])).unwrap();

    assert_eq!(*fx.verbose_count.borrow(), 2);
    assert_eq!(fx.output.borrow().as_deref(), Some("out.txt"));
    assert_eq!(fx.input.borrow().as_deref(), Some("in.txt"));
    assert_eq!(*fx.extras.borrow(), vec!["a".to_owned(), "b".to_owned()]);
}

#[test]
fn option_stop_protects_a_leading_dash_positional() {
    let mut fx = build_fixture();
    fx.parser.parse(&args(&["--", "-v"])).unwrap();
    assert_eq!(*fx.verbose_count.borrow(), 0);
    assert_eq!(fx.input.borrow().as_deref(), Some("-v"));
}

#[test]
fn missing_mandatory_positional_is_a_validation_error() {
    let mut fx = build_fixture();
    let err = fx.parser.parse(&args(&["-v"])).unwrap_err();
    match err {
        ParseError::ValidationError(_) => {},
        other => panic!("expected ValidationError, got {:?}", other),
    }
}

#[test]
fn unrecognized_long_option_offers_a_suggestion() {
    let mut fx = build_fixture();
    let err = fx.parser.parse(&args(&["--verbos", "in.txt"])).unwrap_err();
    match err {
        ParseError::UnrecognizedOption(ref name) => {
            assert_eq!(name, "--verbos");
            #[cfg(feature = "suggestions")]
            assert_eq!(fx.parser.suggest(name), Some("--verbose".to_owned()));
        },
        other => panic!("expected UnrecognizedOption, got {:?}", other),
    }
}

#[test]
fn ambiguous_abbreviation_across_two_long_options() {
    let settings = Settings::common_unix();
    let mut parser: Parser<'_> = Parser::new(settings.clone());
    let foobar = OptionName::new(&settings, &["--foobar"]).unwrap();
    parser.add_option(OptionSpec::none(foobar, Quantifier::ZERO_OR_MORE_TIMES, || -> HandlerResult { Ok(()) })).unwrap();
    let foorab = OptionName::new(&settings, &["--foorab"]).unwrap();
    parser.add_option(OptionSpec::none(foorab, Quantifier::ZERO_OR_MORE_TIMES, || -> HandlerResult { Ok(()) })).unwrap();

    let err = parser.parse(&args(&["--fo"])).unwrap_err();
    assert_eq!(
        err,
        ParseError::AmbiguousOption {
            used: "--fo".to_owned(),
            candidates: vec!["--foobar".to_owned(), "--foorab".to_owned()],
        },
    );
}

#[test]
fn extra_positional_beyond_every_slots_maximum_is_reported() {
    let settings = Settings::common_unix();
    let mut parser: Parser<'_> = Parser::new(settings);
    parser.add_positional(PositionalSpec::new("only", Quantifier::ONCE, |_, _: &str| -> HandlerResult { Ok(()) }));

    let err = parser.parse(&args(&["a", "b"])).unwrap_err();
    assert_eq!(err, ParseError::ExtraPositional("b".to_owned()));
}

#[test]
fn validator_combination_requires_exactly_one_of_two_modes() {
    let settings = Settings::common_unix();
    let mut parser: Parser<'_> = Parser::new(settings.clone());
    let encode = OptionName::new(&settings, &["--encode"]).unwrap();
    parser.add_option(OptionSpec::none(encode, Quantifier::NEVER_OR_ONCE, || -> HandlerResult { Ok(()) })).unwrap();
    let decode = OptionName::new(&settings, &["--decode"]).unwrap();
    parser.add_option(OptionSpec::none(decode, Quantifier::NEVER_OR_ONCE, || -> HandlerResult { Ok(()) })).unwrap();
    parser
        .add_validator_described(
            Validator::xor(vec![Validator::required("--encode"), Validator::required("--decode")]),
            "exactly one of --encode or --decode is required",
        )
        .unwrap();

    let err = parser.parse(&args(&["--encode", "--decode"])).unwrap_err();
    assert_eq!(
        err,
        ParseError::ValidationError("exactly one of --encode or --decode is required".to_owned()),
    );
    parser.parse(&args(&["--encode"])).unwrap();
}

#[test]
fn validator_naming_an_unregistered_option_is_a_spec_error() {
    use adaptargs::error::SpecError;

    let settings = Settings::common_unix();
    let mut parser: Parser<'_> = Parser::new(settings);
    let err = parser
        .add_validator_described(Validator::required("--nonexistent"), "must be given")
        .unwrap_err();
    assert_eq!(err, SpecError::UnknownName("--nonexistent".to_owned()));
}

// Copyright 2017 Lyndon Brown
//
// This file is part of the `adaptargs` command-line argument parsing library.
//
// Licensed under the MIT license or the Apache license (version 2.0), at your option. You may not
// copy, modify, or distribute this file except in compliance with said license. You can find copies
// of these licenses either in the LICENSE-MIT and LICENSE-APACHE files, or alternatively at
// <http://opensource.org/licenses/MIT> and <http://www.apache.org/licenses/LICENSE-2.0>
// respectively.

//! Positional-partitioning example for the `adaptargs` library.
//!
//! Demonstrates a sequence of three quantified positional slots sharing one argument list: a
//! mandatory `source`, an optional `destination`, and a trailing `extra` slot that soaks up
//! anything left over. Also demonstrates a validator spanning two mutually exclusive options.

extern crate adaptargs;

use std::cell::RefCell;

use adaptargs::error::HandlerResult;
use adaptargs::option_name::OptionName;
use adaptargs::parser::Parser;
use adaptargs::quantifier::Quantifier;
use adaptargs::settings::Settings;
use adaptargs::spec::{OptionSpec, PositionalSpec};
use adaptargs::validator::Validator;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let settings = Settings::common_unix();
    let mut parser = Parser::new(settings.clone());

    let force_name = OptionName::new(&settings, &["--force", "-f"]).unwrap();
    parser
        .add_option(OptionSpec::none(force_name, Quantifier::NEVER_OR_ONCE, || -> HandlerResult { Ok(()) }))
        .unwrap();
    let dry_run_name = OptionName::new(&settings, &["--dry-run", "-n"]).unwrap();
    parser
        .add_option(OptionSpec::none(dry_run_name, Quantifier::NEVER_OR_ONCE, || -> HandlerResult { Ok(()) }))
        .unwrap();
    parser
        .add_validator_described(
            Validator::and(vec![Validator::required("--force"), Validator::required("--dry-run")]).negate(),
            "--force and --dry-run cannot both be given",
        )
        .unwrap();

    let source = RefCell::new(None::<String>);
    parser.add_positional(PositionalSpec::new("source", Quantifier::ONCE, |_, value: &str| -> HandlerResult {
        *source.borrow_mut() = Some(value.to_owned());
        Ok(())
    }));

    let destination = RefCell::new(None::<String>);
    parser.add_positional(PositionalSpec::new(
        "destination",
        Quantifier::NEVER_OR_ONCE,
        |_, value: &str| -> HandlerResult {
            *destination.borrow_mut() = Some(value.to_owned());
            Ok(())
        },
    ));

    let extra = RefCell::new(Vec::<String>::new());
    parser.add_positional(PositionalSpec::new(
        "extra",
        Quantifier::ZERO_OR_MORE_TIMES,
        |_, value: &str| -> HandlerResult {
            extra.borrow_mut().push(value.to_owned());
            Ok(())
        },
    ));

    match parser.parse(&args) {
        Ok(()) => {
            println!("source: {:?}", source.borrow());
            println!("destination: {:?}", destination.borrow());
            println!("extra: {:?}", extra.borrow());
        },
        Err(err) => eprintln!("Error: {}", err),
    }
}

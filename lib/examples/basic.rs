// Copyright 2017 Lyndon Brown
//
// This file is part of the `adaptargs` command-line argument parsing library.
//
// Licensed under the MIT license or the Apache license (version 2.0), at your option. You may not
// copy, modify, or distribute this file except in compliance with said license. You can find copies
// of these licenses either in the LICENSE-MIT and LICENSE-APACHE files, or alternatively at
// <http://opensource.org/licenses/MIT> and <http://www.apache.org/licenses/LICENSE-2.0>
// respectively.

//! Basic example for the `adaptargs` library.
//!
//! Demonstrates use of:
//!
//!  - A flag option (`-h`/`--help`) and a repeatable one (`-v`/`--verbose`)
//!  - A single mandatory positional
//!  - Reacting to a handler-reported exit request without inspecting any result object, since
//!    handlers run as the tokens that trigger them are encountered

extern crate adaptargs;

use std::cell::{Cell, RefCell};

use adaptargs::error::HandlerResult;
use adaptargs::option_name::OptionName;
use adaptargs::parser::Parser;
use adaptargs::quantifier::Quantifier;
use adaptargs::settings::Settings;
use adaptargs::spec::{OptionSpec, PositionalSpec};

static HELP_TEXT: &str = "\
Basic example for the `adaptargs` argument parser.

USAGE:
    basic [-v|--verbose] <name>

OPTIONS:
    -h, --help      Outputs this usage info.
    -v, --verbose   Enables verbose output; may be given more than once.";

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let settings = Settings::common_unix();
    let mut parser = Parser::new(settings.clone());

    let help_requested = Cell::new(false);
    let help_name = OptionName::new(&settings, &["--help", "-h"]).unwrap();
    parser
        .add_option(OptionSpec::none(help_name, Quantifier::NEVER_OR_ONCE, || -> HandlerResult {
            help_requested.set(true);
            Ok(())
        }))
        .unwrap();

    let verbosity = Cell::new(0u32);
    let verbose_name = OptionName::new(&settings, &["--verbose", "-v"]).unwrap();
    parser
        .add_option(OptionSpec::none(verbose_name, Quantifier::ZERO_OR_MORE_TIMES, || -> HandlerResult {
            verbosity.set(verbosity.get() + 1);
            Ok(())
        }))
        .unwrap();

    let name = RefCell::new(None::<String>);
    parser.add_positional(PositionalSpec::new("name", Quantifier::NEVER_OR_ONCE, |_, value: &str| -> HandlerResult {
        *name.borrow_mut() = Some(value.to_owned());
        Ok(())
    }));

    match parser.parse(&args) {
        Ok(()) if help_requested.get() => println!("{}", HELP_TEXT),
        Ok(()) => {
            if verbosity.get() > 0 {
                eprintln!("(verbosity level: {})", verbosity.get());
            }
            match name.borrow().as_deref() {
                Some(name) => println!("Hello, {}!", name),
                None => println!("Hello, World!"),
            }
        },
        Err(err) => eprintln!("Error: {}", err),
    }
}

// Copyright 2017 Lyndon Brown
//
// This file is part of the `adaptargs` command-line argument parsing library.
//
// Licensed under the MIT license or the Apache license (version 2.0), at your option. You may not
// copy, modify, or distribute this file except in compliance with said license. You can find copies
// of these licenses either in the LICENSE-APACHE and LICENSE-MIT files, or alternatively at
// <http://opensource.org/licenses/MIT> and <http://www.apache.org/licenses/LICENSE-2.0>
// respectively.

//! Demonstrator program for the `adaptargs` library.
//!
//! Takes user-supplied command arguments, parses them against a small sample specification, and
//! prints a description of what was observed. Output is colored where the `color` feature is
//! enabled and the terminal supports it.

extern crate adaptargs;
extern crate term_ctrl;

use std::cell::RefCell;
use std::rc::Rc;

use term_ctrl::predefined::*;

use adaptargs::error::HandlerResult;
use adaptargs::option_name::OptionName;
use adaptargs::parser::Parser;
use adaptargs::quantifier::Quantifier;
use adaptargs::settings::Settings;
use adaptargs::spec::{OptionSpec, PositionalSpec};
use adaptargs::validator::Validator;

const COL_HEADER: &str = color1_bold::MAGENTA;
const COL_OK: &str = color1::GREEN;
const COL_ERR: &str = color1::RED;
const COL_DATA: &str = color2::YELLOW;

/// Holds state of stdout formatting support, set up once.
mod config {
    use std::sync::Once;
    use term_ctrl::use_fmt_stdout;

    static mut FORMATTED_STDOUT: bool = false;
    static INIT: Once = Once::new();

    pub fn init() {
        unsafe {
            INIT.call_once(|| {
                FORMATTED_STDOUT = use_fmt_stdout(cfg!(feature = "color"));
            });
        }
    }

    pub fn formatted_stdout() -> bool {
        unsafe { FORMATTED_STDOUT }
    }
}

// Color? Filter the provided 'formatted-stdout-ctrl-seq' string.
macro_rules! c {
    ( $code:expr ) => { if config::formatted_stdout() { $code } else { "" } };
}

fn main() {
    config::init();

    let settings = Settings::common_unix().with_allow_abbreviation(!cfg!(feature = "no_opt_abbreviations"));
    let mut parser = Parser::new(settings.clone());

    let help = Rc::new(RefCell::new(false));
    let help_clone = help.clone();
    let help_name = OptionName::new(&settings, &["--help", "-h"]).unwrap();
    parser
        .add_option(OptionSpec::none(help_name, Quantifier::NEVER_OR_ONCE, move || -> HandlerResult {
            *help_clone.borrow_mut() = true;
            Ok(())
        }))
        .unwrap();

    let verbose = Rc::new(RefCell::new(0u32));
    let verbose_clone = verbose.clone();
    let verbose_name = OptionName::new(&settings, &["--verbose", "-v"]).unwrap();
    parser
        .add_option(OptionSpec::none(verbose_name, Quantifier::ZERO_OR_MORE_TIMES, move || -> HandlerResult {
            *verbose_clone.borrow_mut() += 1;
            Ok(())
        }))
        .unwrap();

    let output = Rc::new(RefCell::new(None::<String>));
    let output_clone = output.clone();
    let output_name = OptionName::new(&settings, &["--output", "-o"]).unwrap();
    parser
        .add_option(OptionSpec::required(output_name, Quantifier::NEVER_OR_ONCE, move |value: &str| -> HandlerResult {
            *output_clone.borrow_mut() = Some(value.to_owned());
            Ok(())
        }))
        .unwrap();

    let encode = Rc::new(RefCell::new(false));
    let encode_clone = encode.clone();
    let encode_name = OptionName::new(&settings, &["--encode"]).unwrap();
    parser
        .add_option(OptionSpec::none(encode_name, Quantifier::NEVER_OR_ONCE, move || -> HandlerResult {
            *encode_clone.borrow_mut() = true;
            Ok(())
        }))
        .unwrap();

    let decode = Rc::new(RefCell::new(false));
    let decode_clone = decode.clone();
    let decode_name = OptionName::new(&settings, &["--decode"]).unwrap();
    parser
        .add_option(OptionSpec::none(decode_name, Quantifier::NEVER_OR_ONCE, move || -> HandlerResult {
            *decode_clone.borrow_mut() = true;
            Ok(())
        }))
        .unwrap();
    parser
        .add_validator_described(
            Validator::and(vec![Validator::required("--encode"), Validator::required("--decode")]).negate(),
            "at most one of --encode or --decode may be given",
        )
        .unwrap();

    let input = Rc::new(RefCell::new(None::<String>));
    let input_clone = input.clone();
    parser.add_positional(PositionalSpec::new("input", Quantifier::NEVER_OR_ONCE, move |_, value: &str| -> HandlerResult {
        *input_clone.borrow_mut() = Some(value.to_owned());
        Ok(())
    }));

    let extras = Rc::new(RefCell::new(Vec::<String>::new()));
    let extras_clone = extras.clone();
    parser.add_positional(PositionalSpec::new(
        "extra",
        Quantifier::ZERO_OR_MORE_TIMES,
        move |_, value: &str| -> HandlerResult {
            extras_clone.borrow_mut().push(value.to_owned());
            Ok(())
        },
    ));

    println!("\n[ {}Available options for test{} ]\n", c!(COL_HEADER), c!(RESET));
    println!("LONG --help, SHORT -h");
    println!("LONG --verbose, SHORT -v  (repeatable)");
    println!("LONG --output, SHORT -o {}[expects data!]{}", c!(COL_DATA), c!(RESET));
    println!("LONG --encode");
    println!("LONG --decode");
    println!("POSITIONAL input (optional)");
    println!("POSITIONAL extra (zero or more)");

    let args: Vec<String> = std::env::args().skip(1).collect();

    println!("\n[ {}Your input arguments{} ]\n", c!(COL_HEADER), c!(RESET));
    match args.len() {
        0 => println!("None!"),
        _ => for (i, arg) in args.iter().enumerate() {
            println!("[{}]: {}", i, arg);
        },
    }

    println!("\n[ {}Analysis{} ]\n", c!(COL_HEADER), c!(RESET));

    match parser.parse(&args) {
        Ok(()) => {
            println!("Result: {}ok{}\n", c!(COL_OK), c!(RESET));
            println!("help requested: {}", *help.borrow());
            println!("verbose count: {}", *verbose.borrow());
            println!("output: {:?}", *output.borrow());
            println!("encode: {}, decode: {}", *encode.borrow(), *decode.borrow());
            println!("input: {:?}", *input.borrow());
            println!("extra: {:?}", *extras.borrow());
        },
        Err(err) => {
            println!("Result: {}error{}\n", c!(COL_ERR), c!(RESET));
            println!("{}{}{}", c!(COL_ERR), err, c!(RESET));
            if let adaptargs::error::ParseError::UnrecognizedOption(ref name) = err {
                if let Some(suggestion) = parser.suggest(name) {
                    println!("\ndid you mean `{}`?", suggestion);
                }
            }
        },
    }
}

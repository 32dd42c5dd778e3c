// Copyright 2017 Lyndon Brown
//
// This file is part of the `adaptargs` command-line argument parsing library.
//
// Licensed under the MIT license or the Apache license (version 2.0), at your option. You may not
// copy, modify, or distribute this file except in compliance with said license. You can find copies
// of these licenses either in the LICENSE-MIT and LICENSE-APACHE files, or alternatively at
// <http://opensource.org/licenses/MIT> and <http://www.apache.org/licenses/LICENSE-2.0>
// respectively.

//! Extended documentation (the “book”)
//!
//! The following modules are dedicated solely to providing additional documentation not provided
//! or suitable to include within other modules. Think of this as the crate “book”.

pub mod ch1_overview;
pub mod ch3_options;
pub mod ch4_positionals;

/*
 *   Copyright (c) 2026 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

//! # cprint_printer
//!
//! Printers that send normal, error and debug messages to a sink, with optional
//! timestamps and debug level filtering.
//!
//! | Printer            | Normal output | Error output | Formatting                        |
//! |--------------------|---------------|--------------|-----------------------------------|
//! | [TerminalPrinter]  | stdout        | stderr       | plain text                        |
//! | [ColoredPrinter]   | stdout        | stderr       | ANSI codes via `cprint_ansi_color` |
//! | [FilePrinter]      | log file      | log file     | plain text, `[ level ] ` on debug |
//!
//! All of them implement [Printer], so you can hold any one of them in a
//! `Box<dyn Printer + Send>`, which is what [PrinterBuilder::build()] returns.
//!
//! Every output operation returns a [miette::Result]. Failures are [PrinterError]s.
//!
//! # Debug levels
//!
//! [DebugLevel::Off] hides all debug output, [DebugLevel::All] shows all of it, and
//! [DebugLevel::UpTo] shows messages whose level is at most the given one.
//!
//! # Example usage:
//!
//! ```rust
//! use cprint_ansi_color::{Attribute, NamedColor};
//! use cprint_printer::*;
//! use cprint_test_fixtures::StdoutMock;
//!
//! let stdout = StdoutMock::new();
//! let mut printer = ColoredPrinter::new_with_writers(
//!     PrinterConfig::default().with_level(DebugLevel::UpTo(1)),
//!     Attribute::Foreground(NamedColor::Green),
//!     stdout.clone(),
//!     std::io::sink(),
//! );
//!
//! printer.print("ok").unwrap();
//! printer.debug_print_at(" shown", 1).unwrap();
//! printer.debug_print_at(" hidden", 2).unwrap();
//!
//! assert_eq!(stdout.get_copy_of_buffer_as_string_strip_ansi(), "ok shown");
//! ```

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![warn(clippy::all)]
#![warn(rust_2018_idioms)]
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod colored_printer;
pub mod date_format;
pub mod debug_level;
pub mod file_printer;
pub mod log_file_registry;
pub mod printer_api;
pub mod printer_builder;
pub mod printer_config;
pub mod printer_error;
pub mod terminal_printer;

// Re-export.
pub use colored_printer::*;
pub use date_format::*;
pub use debug_level::*;
pub use file_printer::*;
pub use log_file_registry::*;
pub use printer_api::*;
pub use printer_builder::*;
pub use printer_config::*;
pub use printer_error::*;
pub use terminal_printer::*;

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

//! # cprint_ansi_color
//!
//! Generate ANSI SGR escape codes from a list of [Attribute]s and wrap arbitrary text in
//! them without "bleeding" the format across lines.
//!
//! There are three pieces:
//! 1. [Attribute] - one formatting directive (an effect like [Attribute::Bold], a named
//!    color, an 8-bit palette color, or a truecolor) and its numeric fragment.
//! 2. [generate_code()] - joins the fragments of many attributes into one escape code,
//!    skipping [Attribute::None], eg: `[Bold, Foreground(Cyan)]` becomes `ESC[1;36m`.
//! 3. [colorize()] - wraps every line of a text in `code ... ESC[0m` so that a colored
//!    background on one line never extends into the next one.
//!
//! Everything here is a pure function over immutable values. There is no global state
//! and no I/O, so it is safe to call from any thread. Writing the result somewhere is
//! up to the caller (eg: the printers in `cprint_printer`).
//!
//! # Example usage:
//!
//! ```rust
//! use cprint_ansi_color::*;
//!
//! // Generate a code, then apply it.
//! let code = generate_code(&[Attribute::Bold, Attribute::Foreground(NamedColor::Cyan)]);
//! assert_eq!(code, "\x1b[1;36m");
//! assert_eq!(colorize("hi", &code), "\x1b[1;36mhi\x1b[0m");
//!
//! // Truecolor and 8-bit colors are validated when built from wider integers.
//! let salmon = text_color_rgb(255, 160, 122).unwrap();
//! assert_eq!(salmon.code(), "38;2;255;160;122");
//! assert!(text_color_rgb(256, 0, 0).is_err());
//!
//! // Reusable formats.
//! let format = AnsiFormat::from([salmon, Attribute::Underline]);
//! assert_eq!(format.format("hi"), "\x1b[38;2;255;160;122;4mhi\x1b[0m");
//!
//! // Or straight from a string slice.
//! assert_eq!("hi".colorize(&[Attribute::Dim]), "\x1b[2mhi\x1b[0m");
//! ```

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![warn(clippy::all)]
#![warn(rust_2018_idioms)]
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod ansi_escape_codes;
pub mod ansi_styled_text;
pub mod attribute;
pub mod colorize;
pub mod error;

// Re-export.
pub use ansi_escape_codes::*;
pub use ansi_styled_text::*;
pub use attribute::*;
pub use colorize::*;
pub use error::*;

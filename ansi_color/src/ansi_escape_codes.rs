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

//! Assembly of ANSI SGR (Select Graphic Rendition) escape sequences from an ordered
//! list of [Attribute]s.
//!
//! More info:
//! - <https://doc.rust-lang.org/reference/tokens.html#ascii-escapes>
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#SGR_(Select_Graphic_Rendition)_parameters>

use std::fmt::{Display, Formatter, Result, Write as _};

use crate::Attribute;

pub mod sgr_code_impl {
    /// ASCII 27, starts every escape sequence.
    pub const ESC: char = '\x1b';

    /// Every escape code begins with this (aka CSI, control sequence introducer).
    pub const PREFIX: &str = "\x1b[";

    /// Two fragments in one escape code are separated by this.
    pub const SEPARATOR: &str = ";";

    /// Every SGR escape code ends with this.
    pub const POSTFIX: &str = "m";

    /// Restores the terminal's default format. Same as `PREFIX + "0" + POSTFIX`.
    pub const RESET: &str = "\x1b[0m";

    #[cfg(windows)]
    pub const LINE_SEPARATOR: &str = "\r\n";

    #[cfg(not(windows))]
    pub const LINE_SEPARATOR: &str = "\n";
}
pub use sgr_code_impl::*;

/// Builds one SGR escape code out of `attributes`, in the given order.
///
/// Attributes that contribute no fragment (eg: [Attribute::None]) are skipped without
/// emitting a separator for them, and the result never ends in [SEPARATOR] right before
/// [POSTFIX]. No attributes at all yields `PREFIX + POSTFIX`.
///
/// The order is kept verbatim. When two attributes conflict (eg: two background colors)
/// the terminal applies the last one.
///
/// ```rust
/// use cprint_ansi_color::{Attribute, NamedColor, generate_code};
///
/// let code = generate_code(&[Attribute::Bold, Attribute::Foreground(NamedColor::Cyan)]);
/// assert_eq!(code, "\x1b[1;36m");
/// ```
pub fn generate_code<'a>(attributes: impl IntoIterator<Item = &'a Attribute>) -> String {
    let mut acc = String::from(PREFIX);

    for attribute in attributes {
        let len_before = acc.len();
        // Writing to a `String` can't fail.
        _ = write!(acc, "{attribute}");
        if acc.len() == len_before {
            continue;
        }
        acc.push_str(SEPARATOR);
    }

    if acc.ends_with(SEPARATOR) {
        acc.truncate(acc.len() - SEPARATOR.len());
    }
    acc.push_str(POSTFIX);
    acc
}

/// Terminal commands. Unlike [Attribute]s these are not SGR codes, so they are never
/// joined with other fragments and carry no [POSTFIX].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    /// Moves the cursor home and clears the whole screen, like the `clear` command.
    ClearScreen,
}

mod command_impl {
    use super::*;

    impl Display for Command {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            match self {
                Command::ClearScreen => write!(f, "H{ESC}[2J"),
            }
        }
    }
}

/// Produces `PREFIX + command` with no [POSTFIX].
pub fn generate_command_code(command: Command) -> String { format!("{PREFIX}{command}") }

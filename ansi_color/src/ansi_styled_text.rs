/*
 *   Copyright (c) 2023-2026 R3BL LLC
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

use std::fmt::{Display, Formatter, Result};

use smallvec::SmallVec;

use crate::{Attribute, colorize, generate_code};

/// A named, reusable list of [Attribute]s. Build it once and format as many messages as
/// you like with it. It is an immutable value; [AnsiFormat::with()] returns a new one.
///
/// # Example usage:
///
/// ```rust
/// use cprint_ansi_color::*;
///
/// let warning = AnsiFormat::from([Attribute::Bold, Attribute::Foreground(NamedColor::Yellow)]);
/// assert_eq!(warning.code(), "\x1b[1;33m");
/// assert_eq!(warning.format("careful"), "\x1b[1;33mcareful\x1b[0m");
///
/// let loud_warning = warning.with(Attribute::Background(NamedColor::Red));
/// assert_eq!(loud_warning.code(), "\x1b[1;33;41m");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct AnsiFormat {
    attributes: sizing::InlineVecAttributes,
}

pub mod sizing {
    use super::*;

    /// Most formats combine an effect with a foreground and a background color.
    pub const MAX_INLINE_ATTRIBUTES: usize = 4;
    pub type InlineVecAttributes = SmallVec<[Attribute; MAX_INLINE_ATTRIBUTES]>;
}

mod ansi_format_impl {
    use super::*;

    impl AnsiFormat {
        pub fn new(attributes: impl IntoIterator<Item = Attribute>) -> Self {
            Self {
                attributes: attributes.into_iter().collect(),
            }
        }

        pub fn attributes(&self) -> &[Attribute] { &self.attributes }

        pub fn is_empty(&self) -> bool { self.attributes.is_empty() }

        /// The escape code for all the attributes, see [crate::generate_code()].
        pub fn code(&self) -> String { generate_code(self.attributes()) }

        /// Colorizes `text` line by line, see [crate::colorize()].
        pub fn format(&self, text: &str) -> String { colorize(text, &self.code()) }

        #[must_use]
        pub fn with(&self, attribute: Attribute) -> Self {
            let mut attributes = self.attributes.clone();
            attributes.push(attribute);
            Self { attributes }
        }

        pub fn styled<'a>(&self, text: &'a str) -> AnsiStyledText<'a> {
            AnsiStyledText {
                text,
                format: self.clone(),
            }
        }
    }

    impl From<&[Attribute]> for AnsiFormat {
        fn from(attributes: &[Attribute]) -> Self { Self::new(attributes.iter().copied()) }
    }

    impl<const N: usize> From<[Attribute; N]> for AnsiFormat {
        fn from(attributes: [Attribute; N]) -> Self { Self::new(attributes) }
    }

    impl From<Vec<Attribute>> for AnsiFormat {
        fn from(attributes: Vec<Attribute>) -> Self { Self::new(attributes) }
    }

    impl From<Attribute> for AnsiFormat {
        fn from(attribute: Attribute) -> Self { Self::new([attribute]) }
    }

    impl FromIterator<Attribute> for AnsiFormat {
        fn from_iter<I: IntoIterator<Item = Attribute>>(iter: I) -> Self { Self::new(iter) }
    }

    /// Lists the attributes, eg: `[Bold, Foreground(Red)]`.
    impl Display for AnsiFormat {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            write!(f, "{:?}", self.attributes.as_slice())
        }
    }
}

/// Text paired with the [AnsiFormat] to render it in. Nothing is generated until it is
/// displayed, at which point the [Display] impl writes the same string as
/// [AnsiFormat::format()].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnsiStyledText<'a> {
    pub text: &'a str,
    pub format: AnsiFormat,
}

mod ansi_styled_text_impl {
    use super::*;

    impl AnsiStyledText<'_> {
        pub fn println(&self) {
            println!("{self}");
        }

        pub fn print(&self) {
            print!("{self}");
        }
    }

    impl Display for AnsiStyledText<'_> {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            f.write_str(&self.format.format(self.text))
        }
    }
}

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

//! Line-safe colorization. Every formatted line starts with the escape code that sets
//! the format and ends with [RESET], so the format never spills into the next line or
//! into unrelated output. This is most visible with a colored background, which would
//! otherwise extend across the empty tail of a line.

use crate::{AnsiFormat, Attribute, Command, LINE_SEPARATOR, RESET, generate_code,
            generate_command_code};

/// Wraps each line of `text` as `ansi_code + line + RESET` and joins them back with
/// [LINE_SEPARATOR].
///
/// - The number and position of separators in `text` is preserved, and [RESET] always
///   comes right before each separator.
/// - A trailing separator is kept after the last wrapped line. It does not produce an
///   extra colored empty line.
/// - Empty lines in the middle are kept, each wrapped on its own.
/// - Empty `text` degenerates to `ansi_code + RESET`.
///
/// ```rust
/// use cprint_ansi_color::{Attribute, NamedColor, colorize, generate_code};
///
/// let code = generate_code(&[Attribute::Background(NamedColor::Blue)]);
/// assert_eq!(
///     colorize("words without lines", &code),
///     "\x1b[44mwords without lines\x1b[0m"
/// );
/// ```
pub fn colorize(text: &str, ansi_code: &str) -> String {
    let (body, ended_with_separator) = match text.strip_suffix(LINE_SEPARATOR) {
        Some(body) => (body, true),
        None => (text, false),
    };

    let mut acc = String::with_capacity(text.len() + ansi_code.len() + RESET.len());
    for (index, line) in body.split(LINE_SEPARATOR).enumerate() {
        if index > 0 {
            acc.push_str(LINE_SEPARATOR);
        }
        acc.push_str(ansi_code);
        acc.push_str(line);
        acc.push_str(RESET);
    }

    if ended_with_separator {
        acc.push_str(LINE_SEPARATOR);
    }
    acc
}

/// Same as [colorize()], generating the code from `attributes` first. This is the entry
/// point printers use before writing a message to their sink.
pub fn colorize_with<'a>(
    text: &str,
    attributes: impl IntoIterator<Item = &'a Attribute>,
) -> String {
    colorize(text, &generate_code(attributes))
}

pub fn colorize_format(text: &str, format: &AnsiFormat) -> String {
    colorize(text, &format.code())
}

/// Commands aren't applied to text, so this is just [generate_command_code()].
pub fn colorize_command(command: Command) -> String { generate_command_code(command) }

/// Lets any string slice be colorized in place, eg: `"hi".colorize(&[Attribute::Bold])`.
pub trait ColorizeExt {
    fn colorize<'a>(&self, attributes: impl IntoIterator<Item = &'a Attribute>) -> String;

    fn colorize_with_code(&self, ansi_code: &str) -> String;
}

impl ColorizeExt for str {
    fn colorize<'a>(&self, attributes: impl IntoIterator<Item = &'a Attribute>) -> String {
        colorize_with(self, attributes)
    }

    fn colorize_with_code(&self, ansi_code: &str) -> String { colorize(self, ansi_code) }
}


#[cfg(test)]
mod properties {
    use proptest::prelude::*;

    use super::*;
    use crate::{POSTFIX, PREFIX, SEPARATOR};

    fn line() -> impl Strategy<Value = String> { "[a-zA-Z0-9 .,!?]{0,12}" }

    fn text() -> impl Strategy<Value = (Vec<String>, bool)> {
        (proptest::collection::vec(line(), 1..6), any::<bool>())
    }

    proptest! {
        #[test]
        fn no_trailing_separator(attributes in proptest::collection::vec(any::<Attribute>(), 0..8)) {
            let code = generate_code(&attributes);
            prop_assert!(code.starts_with(PREFIX));
            prop_assert!(code.ends_with(POSTFIX));
            let separator_before_postfix = format!("{SEPARATOR}{POSTFIX}");
            prop_assert!(!code.ends_with(&separator_before_postfix));
        }

        #[test]
        fn none_is_elided(attribute in any::<Attribute>()) {
            prop_assert_eq!(
                generate_code(&[Attribute::None, attribute, Attribute::None]),
                generate_code(&[attribute])
            );
        }

        #[test]
        fn fragments_round_trip(attributes in proptest::collection::vec(any::<Attribute>(), 0..8)) {
            let code = generate_code(&attributes);
            let body = &code[PREFIX.len()..code.len() - POSTFIX.len()];
            let parsed: Vec<&str> = if body.is_empty() {
                vec![]
            } else {
                body.split(SEPARATOR).collect()
            };

            let fragments: Vec<String> = attributes.iter().map(Attribute::code).collect();
            let expected: Vec<&str> = fragments
                .iter()
                .filter(|it| !it.is_empty())
                .flat_map(|it| it.split(SEPARATOR))
                .collect();

            prop_assert_eq!(parsed, expected);
        }

        #[test]
        fn line_safety((lines, trailing) in text(), attribute in any::<Attribute>()) {
            let mut input = lines.join(LINE_SEPARATOR);
            if trailing {
                input.push_str(LINE_SEPARATOR);
            }
            let separator_count = input.matches(LINE_SEPARATOR).count();

            let code = generate_code(&[attribute]);
            let it = colorize(&input, &code);

            let reset_then_separator = format!("{RESET}{LINE_SEPARATOR}");
            prop_assert_eq!(it.matches(&reset_then_separator).count(), separator_count);
            prop_assert_eq!(it.matches(LINE_SEPARATOR).count(), separator_count);
            prop_assert!(it.starts_with(&code));
            if input.ends_with(LINE_SEPARATOR) {
                prop_assert!(it.ends_with(&reset_then_separator));
            } else {
                prop_assert!(it.ends_with(RESET));
            }
        }
    }
}

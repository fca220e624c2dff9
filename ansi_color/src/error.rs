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

use crate::ColorChannel;

/// Raised while constructing an 8-bit or truecolor [crate::Attribute] from a value that
/// does not fit in `0..=255`. Nothing is clamped, so no escape code is ever built from
/// a bad color.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
#[error("🎨 Color {channel} must be inside range [0, 255], received: {value}")]
#[diagnostic(
    code(cprint_ansi_color::invalid_color),
    help("Use a value between 0 and 255 (both inclusive) for every color component")
)]
pub struct InvalidColorError {
    pub channel: ColorChannel,
    pub value: i64,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn message_names_channel_value_and_range() {
        let error = InvalidColorError {
            channel: ColorChannel::Green,
            value: 300,
        };
        assert_eq!(
            error.to_string(),
            "🎨 Color green must be inside range [0, 255], received: 300"
        );
    }

    #[test]
    fn converts_into_miette_report() {
        let report: miette::Report = InvalidColorError {
            channel: ColorChannel::Index,
            value: -1,
        }
        .into();
        assert!(report.to_string().contains("index"));
    }
}

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

//! More info:
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#SGR_(Select_Graphic_Rendition)_parameters>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#8-bit>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#24-bit>
//! - <https://stackoverflow.com/questions/4842424/list-of-ansi-color-escape-sequences>

use std::fmt::{Display, Formatter, Result};

use strum_macros::{EnumCount, EnumIter};

use crate::InvalidColorError;

/// One formatting directive. Every variant except [Attribute::None] maps to exactly one
/// numeric fragment of an SGR escape code, which is what the [Display] impl writes (eg:
/// `"1"`, `"31"`, `"38;5;200"`, `"38;2;10;20;30"`). [Attribute::None] writes nothing and
/// is skipped by [crate::generate_code()].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    None,
    /// Restores the terminal's default format.
    Clear,
    Bold,
    Dim,
    Italic,
    Underline,
    SlowBlink,
    RapidBlink,
    Reverse,
    Hidden,
    Strikethrough,
    Framed,
    Encircled,
    Overlined,
    Foreground(NamedColor),
    Background(NamedColor),
    ForegroundAnsi256(u8),
    BackgroundAnsi256(u8),
    ForegroundRgb(RgbColor),
    BackgroundRgb(RgbColor),
}

/// The 16 colors every ANSI terminal names. Their actual appearance depends on the
/// terminal's theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumCount, EnumIter)]
pub enum NamedColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RgbColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

/// Which part of a color was out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorChannel {
    Index,
    Red,
    Green,
    Blue,
}

mod attribute_impl {
    use super::*;

    impl Attribute {
        /// Alias of [Attribute::Bold].
        pub const SATURATED: Attribute = Attribute::Bold;

        /// Alias of [Attribute::Dim].
        pub const DESATURATED: Attribute = Attribute::Dim;

        /// The numeric fragment of this attribute, `""` for [Attribute::None].
        pub fn code(&self) -> String { self.to_string() }

        pub fn is_none(&self) -> bool { matches!(self, Attribute::None) }
    }

    impl Display for Attribute {
        #[rustfmt::skip]
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            match *self {
                Attribute::None                   => Ok(()),
                Attribute::Clear                  => f.write_str("0"),
                Attribute::Bold                   => f.write_str("1"),
                Attribute::Dim                    => f.write_str("2"),
                Attribute::Italic                 => f.write_str("3"),
                Attribute::Underline              => f.write_str("4"),
                Attribute::SlowBlink              => f.write_str("5"),
                Attribute::RapidBlink             => f.write_str("6"),
                Attribute::Reverse                => f.write_str("7"),
                Attribute::Hidden                 => f.write_str("8"),
                Attribute::Strikethrough          => f.write_str("9"),
                Attribute::Framed                 => f.write_str("51"),
                Attribute::Encircled              => f.write_str("52"),
                Attribute::Overlined              => f.write_str("53"),
                Attribute::Foreground(color)      => write!(f, "{}", color.foreground_code()),
                Attribute::Background(color)      => write!(f, "{}", color.background_code()),
                Attribute::ForegroundAnsi256(idx) => write!(f, "38;5;{idx}"),
                Attribute::BackgroundAnsi256(idx) => write!(f, "48;5;{idx}"),
                Attribute::ForegroundRgb(rgb)     => write!(f, "38;2;{rgb}"),
                Attribute::BackgroundRgb(rgb)     => write!(f, "48;2;{rgb}"),
            }
        }
    }
}

mod named_color_impl {
    use super::*;

    impl NamedColor {
        /// Standard colors are 30-37, bright ones 90-97.
        pub fn foreground_code(&self) -> u8 {
            let offset = *self as u8;
            if offset < 8 { 30 + offset } else { 90 + (offset - 8) }
        }

        /// Background codes sit 10 above their foreground counterparts.
        pub fn background_code(&self) -> u8 { self.foreground_code() + 10 }
    }
}

mod rgb_color_impl {
    use super::*;

    impl RgbColor {
        pub const fn new(red: u8, green: u8, blue: u8) -> Self { Self { red, green, blue } }
    }

    /// Writes `r;g;b`, the channel part of a truecolor fragment.
    impl Display for RgbColor {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            write!(f, "{};{};{}", self.red, self.green, self.blue)
        }
    }

    impl From<(u8, u8, u8)> for RgbColor {
        fn from((red, green, blue): (u8, u8, u8)) -> Self { Self { red, green, blue } }
    }

    impl TryFrom<(i64, i64, i64)> for RgbColor {
        type Error = InvalidColorError;

        fn try_from((red, green, blue): (i64, i64, i64)) -> std::result::Result<Self, Self::Error> {
            Ok(Self {
                red: channel_from(ColorChannel::Red, red)?,
                green: channel_from(ColorChannel::Green, green)?,
                blue: channel_from(ColorChannel::Blue, blue)?,
            })
        }
    }
}

mod color_channel_impl {
    use super::*;

    impl Display for ColorChannel {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            match self {
                ColorChannel::Index => f.write_str("index"),
                ColorChannel::Red => f.write_str("red"),
                ColorChannel::Green => f.write_str("green"),
                ColorChannel::Blue => f.write_str("blue"),
            }
        }
    }
}

fn channel_from(channel: ColorChannel, value: i64) -> std::result::Result<u8, InvalidColorError> {
    u8::try_from(value).map_err(|_| InvalidColorError { channel, value })
}

/// Foreground with an 8-bit palette color. Can't fail since [u8] already bounds the
/// index to `0..=255`.
pub fn text_color(index: u8) -> Attribute { Attribute::ForegroundAnsi256(index) }

/// Background with an 8-bit palette color.
pub fn back_color(index: u8) -> Attribute { Attribute::BackgroundAnsi256(index) }

/// Like [text_color()], for callers holding a wider integer. Values outside `0..=255`
/// are rejected, never clamped.
pub fn try_text_color(index: i64) -> std::result::Result<Attribute, InvalidColorError> {
    channel_from(ColorChannel::Index, index).map(Attribute::ForegroundAnsi256)
}

pub fn try_back_color(index: i64) -> std::result::Result<Attribute, InvalidColorError> {
    channel_from(ColorChannel::Index, index).map(Attribute::BackgroundAnsi256)
}

/// Foreground with a truecolor. The first channel outside `0..=255` is reported.
pub fn text_color_rgb(
    red: i64,
    green: i64,
    blue: i64,
) -> std::result::Result<Attribute, InvalidColorError> {
    RgbColor::try_from((red, green, blue)).map(Attribute::ForegroundRgb)
}

/// Background with a truecolor. The first channel outside `0..=255` is reported.
pub fn back_color_rgb(
    red: i64,
    green: i64,
    blue: i64,
) -> std::result::Result<Attribute, InvalidColorError> {
    RgbColor::try_from((red, green, blue)).map(Attribute::BackgroundRgb)
}

#[cfg(test)]
mod arbitrary_impl {
    use proptest::prelude::*;
    use strum::IntoEnumIterator;

    use super::*;

    fn named_color() -> impl Strategy<Value = NamedColor> {
        proptest::sample::select(NamedColor::iter().collect::<Vec<_>>())
    }

    fn rgb_color() -> impl Strategy<Value = RgbColor> {
        (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(RgbColor::from)
    }

    impl Arbitrary for Attribute {
        type Parameters = ();
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
            let simple = proptest::sample::select(vec![
                Attribute::None,
                Attribute::Clear,
                Attribute::Bold,
                Attribute::Dim,
                Attribute::Italic,
                Attribute::Underline,
                Attribute::SlowBlink,
                Attribute::RapidBlink,
                Attribute::Reverse,
                Attribute::Hidden,
                Attribute::Strikethrough,
                Attribute::Framed,
                Attribute::Encircled,
                Attribute::Overlined,
            ]);
            prop_oneof![
                simple,
                named_color().prop_map(Attribute::Foreground),
                named_color().prop_map(Attribute::Background),
                any::<u8>().prop_map(Attribute::ForegroundAnsi256),
                any::<u8>().prop_map(Attribute::BackgroundAnsi256),
                rgb_color().prop_map(Attribute::ForegroundRgb),
                rgb_color().prop_map(Attribute::BackgroundRgb),
            ]
            .boxed()
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use strum::{EnumCount, IntoEnumIterator};
    use test_case::test_case;

    use super::*;

    #[test_case(Attribute::None, "")]
    #[test_case(Attribute::Clear, "0")]
    #[test_case(Attribute::Bold, "1")]
    #[test_case(Attribute::Dim, "2")]
    #[test_case(Attribute::Italic, "3")]
    #[test_case(Attribute::Underline, "4")]
    #[test_case(Attribute::SlowBlink, "5")]
    #[test_case(Attribute::RapidBlink, "6")]
    #[test_case(Attribute::Reverse, "7")]
    #[test_case(Attribute::Hidden, "8")]
    #[test_case(Attribute::Strikethrough, "9")]
    #[test_case(Attribute::Framed, "51")]
    #[test_case(Attribute::Encircled, "52")]
    #[test_case(Attribute::Overlined, "53")]
    fn effect_fragment(attribute: Attribute, expected: &str) {
        assert_eq!(attribute.code(), expected);
    }

    #[test_case(NamedColor::Black, "30", "40")]
    #[test_case(NamedColor::Red, "31", "41")]
    #[test_case(NamedColor::Cyan, "36", "46")]
    #[test_case(NamedColor::White, "37", "47")]
    #[test_case(NamedColor::BrightBlack, "90", "100")]
    #[test_case(NamedColor::BrightYellow, "93", "103")]
    #[test_case(NamedColor::BrightWhite, "97", "107")]
    fn named_color_fragment(color: NamedColor, fg: &str, bg: &str) {
        assert_eq!(Attribute::Foreground(color).code(), fg);
        assert_eq!(Attribute::Background(color).code(), bg);
    }

    #[test]
    fn named_colors_cover_both_ranges() {
        assert_eq!(NamedColor::COUNT, 16);
        let fg: Vec<u8> = NamedColor::iter().map(|it| it.foreground_code()).collect();
        let expected: Vec<u8> = (30..=37).chain(90..=97).collect();
        assert_eq!(fg, expected);
    }

    #[test]
    fn aliases() {
        assert_eq!(Attribute::SATURATED, Attribute::Bold);
        assert_eq!(Attribute::DESATURATED, Attribute::Dim);
    }

    #[test]
    fn ansi256_fragments() {
        assert_eq!(text_color(200).code(), "38;5;200");
        assert_eq!(back_color(0).code(), "48;5;0");
        assert_eq!(text_color(255).code(), "38;5;255");
    }

    #[test]
    fn rgb_fragments() {
        let Ok(fg) = text_color_rgb(255, 160, 122) else {
            panic!("valid channels must be accepted");
        };
        assert_eq!(fg.code(), "38;2;255;160;122");

        let Ok(bg) = back_color_rgb(10, 20, 30) else {
            panic!("valid channels must be accepted");
        };
        assert_eq!(bg.code(), "48;2;10;20;30");
    }

    #[test]
    fn upper_bounds_are_accepted() {
        assert!(text_color_rgb(255, 255, 255).is_ok());
        assert!(try_text_color(255).is_ok());
        assert!(try_back_color(0).is_ok());
    }

    #[test_case(256, 0, 0, ColorChannel::Red, 256)]
    #[test_case(0, -1, 0, ColorChannel::Green, -1)]
    #[test_case(0, 0, 1000, ColorChannel::Blue, 1000)]
    #[test_case(-5, 300, 0, ColorChannel::Red, -5 ; "first bad channel wins")]
    fn rgb_out_of_range(r: i64, g: i64, b: i64, channel: ColorChannel, value: i64) {
        let expected = InvalidColorError { channel, value };
        assert_eq!(text_color_rgb(r, g, b), Err(expected.clone()));
        assert_eq!(back_color_rgb(r, g, b), Err(expected));
    }

    #[test_case(-1)]
    #[test_case(256)]
    fn ansi256_out_of_range(index: i64) {
        let expected = InvalidColorError {
            channel: ColorChannel::Index,
            value: index,
        };
        assert_eq!(try_text_color(index), Err(expected.clone()));
        assert_eq!(try_back_color(index), Err(expected));
    }

    #[test]
    fn rgb_color_from_tuple() {
        let rgb: RgbColor = (1, 2, 3).into();
        assert_eq!(rgb, RgbColor::new(1, 2, 3));
        assert_eq!(rgb.to_string(), "1;2;3");
    }
}

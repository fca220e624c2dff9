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

use cprint_ansi_color::{AnsiFormat,
                        Attribute,
                        ColorizeExt,
                        LINE_SEPARATOR,
                        NamedColor,
                        back_color,
                        back_color_rgb,
                        text_color,
                        text_color_rgb};
use strum::IntoEnumIterator;

fn main() -> miette::Result<()> {
    // Effects.
    {
        let effects = [
            Attribute::Bold,
            Attribute::Dim,
            Attribute::Italic,
            Attribute::Underline,
            Attribute::SlowBlink,
            Attribute::Reverse,
            Attribute::Strikethrough,
            Attribute::Framed,
            Attribute::Encircled,
            Attribute::Overlined,
        ];
        for effect in effects {
            print!("{} ", format!("{effect:?}").colorize(&[effect]));
        }
        println!();
    }

    // Named colors, foreground then background.
    {
        for color in NamedColor::iter() {
            print!("{}", "  fg  ".colorize(&[Attribute::Foreground(color)]));
        }
        println!();
        for color in NamedColor::iter() {
            print!("{}", "  bg  ".colorize(&[Attribute::Background(color)]));
        }
        println!();
    }

    // 8-bit palette.
    {
        for index in 16..=51_u8 {
            print!("{}", " ".colorize(&[back_color(index)]));
        }
        println!();
        println!("{}", "8-bit text color 208".colorize(&[text_color(208)]));
    }

    // Truecolor, validated.
    {
        let salmon = text_color_rgb(255, 160, 122)?;
        let night = back_color_rgb(25, 25, 60)?;
        println!("{}", "Salmon on night blue".colorize(&[salmon, night]));

        if let Err(error) = text_color_rgb(256, 0, 0) {
            println!("Rejected: {error}");
        }
    }

    // Multi-line text with a background never spills past the last character.
    {
        let format = AnsiFormat::from([
            Attribute::Bold,
            Attribute::Foreground(NamedColor::BrightWhite),
            Attribute::Background(NamedColor::Blue),
        ]);
        let text = ["First line", "", "Third line, after an empty one"].join(LINE_SEPARATOR);
        format.styled(&text).println();
        println!("This line is back to the default format.");
    }

    Ok(())
}

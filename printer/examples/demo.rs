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

use cprint_ansi_color::{AnsiFormat, Attribute, LINE_SEPARATOR, NamedColor, text_color_rgb};
use cprint_printer::{ColoredPrinter,
                     DebugLevel,
                     Printer,
                     PrinterBuilder,
                     PrinterKind,
                     open_log_file_count};
use tracing::Level;

/// Debug events show when log files are opened, shared and closed.
fn main() -> miette::Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::DEBUG).init();

    // Plain terminal output, timestamped by default.
    {
        let mut printer = PrinterBuilder::new(PrinterKind::Terminal)
            .level(DebugLevel::UpTo(1))
            .build()?;
        let description = printer.to_string();
        printer.println(&description)?;
        printer.debug_println_at("debug level 1 is shown", 1)?;
        printer.debug_println_at("debug level 2 is hidden", 2)?;
        printer.error_println("this one goes to stderr")?;
    }

    // Colored output. Each line resets on its own.
    {
        let format = AnsiFormat::from([
            Attribute::Bold,
            Attribute::Foreground(NamedColor::BrightWhite),
            Attribute::Background(NamedColor::Magenta),
        ]);
        let mut printer = PrinterBuilder::new(PrinterKind::Colored(format))
            .timestamping(false)
            .build()?;
        printer.println(&format!("first line{LINE_SEPARATOR}second line"))?;

        let salmon = AnsiFormat::from(text_color_rgb(255, 160, 122)?);
        let mut colored = ColoredPrinter::new(DebugLevel::All, salmon);
        colored.println("salmon, straight from the constructor")?;
        colored.debug_println_with("underlined debug", 0, &Attribute::Underline.into())?;
    }

    // Two printers sharing one log file.
    {
        let path = std::env::temp_dir().join("cprint_printer_demo.log");
        let mut first = PrinterBuilder::new(PrinterKind::File(path.clone())).build()?;
        let mut second = PrinterBuilder::new(PrinterKind::File(path.clone()))
            .timestamping(false)
            .build()?;
        first.println("from the first printer")?;
        second.debug_println_at("from the second printer", 3)?;
        println!("Open log files: {}", open_log_file_count());
        drop(first);
        drop(second);
        println!("Open log files: {}", open_log_file_count());
        println!("Wrote to {}", path.display());
    }

    Ok(())
}

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

use std::{fmt::{Display, Formatter, Result},
          io::Write};

use cprint_ansi_color::{AnsiFormat, LINE_SEPARATOR, colorize_format};

use crate::{Printer, PrinterConfig, TerminalPrinter};

/// A [TerminalPrinter] that wraps everything it prints in ANSI escape codes.
///
/// Each line of output (timestamp included) is colorized on its own and followed by a
/// reset, so the terminal is never left in a colored state. Messages use the default
/// [AnsiFormat] unless one of the `*_with` methods supplies another.
#[derive(Debug)]
pub struct ColoredPrinter {
    terminal: TerminalPrinter,
    format: AnsiFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Newline {
    Yes,
    No,
}

impl ColoredPrinter {
    pub fn new(config: impl Into<PrinterConfig>, format: impl Into<AnsiFormat>) -> Self {
        Self {
            terminal: TerminalPrinter::new(config),
            format: format.into(),
        }
    }

    pub fn new_with_writers(
        config: impl Into<PrinterConfig>,
        format: impl Into<AnsiFormat>,
        stdout: impl Write + Send + 'static,
        stderr: impl Write + Send + 'static,
    ) -> Self {
        Self {
            terminal: TerminalPrinter::new_with_writers(config, stdout, stderr),
            format: format.into(),
        }
    }

    pub fn format(&self) -> &AnsiFormat { &self.format }

    pub fn set_format(&mut self, format: impl Into<AnsiFormat>) { self.format = format.into(); }

    fn formatted(&self, msg: &str, format: &AnsiFormat, newline: Newline) -> String {
        let mut acc = self.terminal.config().timestamp_prefix();
        acc.push_str(msg);
        if newline == Newline::Yes {
            acc.push_str(LINE_SEPARATOR);
        }
        colorize_format(&acc, format)
    }

    pub fn print_with(&mut self, msg: &str, format: &AnsiFormat) -> miette::Result<()> {
        let text = self.formatted(msg, format, Newline::No);
        self.terminal.write_stdout(&text)
    }

    pub fn println_with(&mut self, msg: &str, format: &AnsiFormat) -> miette::Result<()> {
        let text = self.formatted(msg, format, Newline::Yes);
        self.terminal.write_stdout(&text)
    }

    pub fn error_print_with(
        &mut self,
        msg: &str,
        format: &AnsiFormat,
    ) -> miette::Result<()> {
        let text = self.formatted(msg, format, Newline::No);
        self.terminal.write_stderr(&text)
    }

    pub fn error_println_with(
        &mut self,
        msg: &str,
        format: &AnsiFormat,
    ) -> miette::Result<()> {
        let text = self.formatted(msg, format, Newline::Yes);
        self.terminal.write_stderr(&text)
    }

    /// Prints only if `level` passes the configured [crate::DebugLevel].
    pub fn debug_print_with(
        &mut self,
        msg: &str,
        level: u32,
        format: &AnsiFormat,
    ) -> miette::Result<()> {
        if self.config().level.can_print(level) {
            self.print_with(msg, format)?;
        }
        Ok(())
    }

    pub fn debug_println_with(
        &mut self,
        msg: &str,
        level: u32,
        format: &AnsiFormat,
    ) -> miette::Result<()> {
        if self.config().level.can_print(level) {
            self.println_with(msg, format)?;
        }
        Ok(())
    }
}

impl Printer for ColoredPrinter {
    fn config(&self) -> &PrinterConfig { self.terminal.config() }

    fn config_mut(&mut self) -> &mut PrinterConfig { self.terminal.config_mut() }

    fn print(&mut self, msg: &str) -> miette::Result<()> {
        let format = self.format.clone();
        self.print_with(msg, &format)
    }

    fn println(&mut self, msg: &str) -> miette::Result<()> {
        let format = self.format.clone();
        self.println_with(msg, &format)
    }

    fn error_print(&mut self, msg: &str) -> miette::Result<()> {
        let format = self.format.clone();
        self.error_print_with(msg, &format)
    }

    fn error_println(&mut self, msg: &str) -> miette::Result<()> {
        let format = self.format.clone();
        self.error_println_with(msg, &format)
    }

    fn print_timestamp(&mut self) -> miette::Result<()> {
        let text = self.format.format(&format!("{} ", self.date_formatted()));
        self.terminal.write_stdout(&text)
    }

    fn print_error_timestamp(&mut self) -> miette::Result<()> {
        let text = self.format.format(&format!("{} ", self.date_formatted()));
        self.terminal.write_stderr(&text)
    }
}

impl Display for ColoredPrinter {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "ColoredPrinter | level: {} | timestamping: {} | format: {}",
            self.config().level,
            self.config().timestamping,
            self.format
        )
    }
}

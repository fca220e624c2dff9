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

use std::{fmt::{Debug, Display, Formatter},
          io::{self, Write}};

use cprint_ansi_color::LINE_SEPARATOR;

use crate::{Printer, PrinterConfig, printer_api::write_and_flush};

pub type SafeWriter = Box<dyn Write + Send>;

/// Prints plain text. Normal output goes to stdout, error output to stderr.
///
/// Use [TerminalPrinter::new_with_writers()] to capture the output in tests.
pub struct TerminalPrinter {
    config: PrinterConfig,
    stdout: SafeWriter,
    stderr: SafeWriter,
}

impl TerminalPrinter {
    pub fn new(config: impl Into<PrinterConfig>) -> Self {
        Self::new_with_writers(config, io::stdout(), io::stderr())
    }

    pub fn new_with_writers(
        config: impl Into<PrinterConfig>,
        stdout: impl Write + Send + 'static,
        stderr: impl Write + Send + 'static,
    ) -> Self {
        Self {
            config: config.into(),
            stdout: Box::new(stdout),
            stderr: Box::new(stderr),
        }
    }

    pub(crate) fn write_stdout(&mut self, text: &str) -> miette::Result<()> {
        write_and_flush(&mut self.stdout, "stdout", text)
    }

    pub(crate) fn write_stderr(&mut self, text: &str) -> miette::Result<()> {
        write_and_flush(&mut self.stderr, "stderr", text)
    }
}

impl Default for TerminalPrinter {
    fn default() -> Self { Self::new(PrinterConfig::default()) }
}

impl Printer for TerminalPrinter {
    fn config(&self) -> &PrinterConfig { &self.config }

    fn config_mut(&mut self) -> &mut PrinterConfig { &mut self.config }

    fn print(&mut self, msg: &str) -> miette::Result<()> {
        let text = format!("{}{msg}", self.config.timestamp_prefix());
        self.write_stdout(&text)
    }

    fn println(&mut self, msg: &str) -> miette::Result<()> {
        let text = format!("{}{msg}{LINE_SEPARATOR}", self.config.timestamp_prefix());
        self.write_stdout(&text)
    }

    fn error_print(&mut self, msg: &str) -> miette::Result<()> {
        let text = format!("{}{msg}", self.config.timestamp_prefix());
        self.write_stderr(&text)
    }

    fn error_println(&mut self, msg: &str) -> miette::Result<()> {
        let text = format!("{}{msg}{LINE_SEPARATOR}", self.config.timestamp_prefix());
        self.write_stderr(&text)
    }

    fn print_timestamp(&mut self) -> miette::Result<()> {
        let text = format!("{} ", self.date_formatted());
        self.write_stdout(&text)
    }

    fn print_error_timestamp(&mut self) -> miette::Result<()> {
        let text = format!("{} ", self.date_formatted());
        self.write_stderr(&text)
    }
}

impl Display for TerminalPrinter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "TerminalPrinter | level: {} | timestamping: {}",
            self.config.level, self.config.timestamping
        )
    }
}

impl Debug for TerminalPrinter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TerminalPrinter")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use cprint_test_fixtures::StdoutMock;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{DateFormat, DebugLevel};

    fn fixture(config: PrinterConfig) -> (TerminalPrinter, StdoutMock, StdoutMock) {
        let stdout = StdoutMock::new();
        let stderr = StdoutMock::new();
        let printer = TerminalPrinter::new_with_writers(config, stdout.clone(), stderr.clone());
        (printer, stdout, stderr)
    }

    fn timestamped() -> PrinterConfig {
        PrinterConfig::default()
            .with_timestamping(true)
            .with_date_format(DateFormat::try_new("TS").unwrap())
    }

    #[test]
    fn normal_and_error_output_use_separate_sinks() {
        let (mut printer, stdout, stderr) = fixture(PrinterConfig::default());

        printer.print("a").unwrap();
        printer.println("b").unwrap();
        printer.error_print("c").unwrap();
        printer.error_println("d").unwrap();

        assert_eq!(
            stdout.get_copy_of_buffer_as_string(),
            format!("ab{LINE_SEPARATOR}")
        );
        assert_eq!(
            stderr.get_copy_of_buffer_as_string(),
            format!("cd{LINE_SEPARATOR}")
        );
    }

    #[test]
    fn timestamps_prefix_every_message() {
        let (mut printer, stdout, stderr) = fixture(timestamped());

        printer.println("hello").unwrap();
        printer.error_print("oops").unwrap();

        assert_eq!(
            stdout.get_copy_of_buffer_as_string(),
            format!("TS hello{LINE_SEPARATOR}")
        );
        assert_eq!(stderr.get_copy_of_buffer_as_string(), "TS oops");
    }

    #[test]
    fn explicit_timestamps_go_to_matching_sink() {
        let (mut printer, stdout, stderr) = fixture(timestamped().with_timestamping(false));

        printer.print_timestamp().unwrap();
        printer.print_error_timestamp().unwrap();

        assert_eq!(stdout.get_copy_of_buffer_as_string(), "TS ");
        assert_eq!(stderr.get_copy_of_buffer_as_string(), "TS ");
    }

    #[test]
    fn debug_output_is_filtered() {
        let (mut printer, stdout, _stderr) = fixture(DebugLevel::UpTo(1).into());

        printer.debug_print_at("one ", 1).unwrap();
        printer.debug_print_at("two ", 2).unwrap();
        printer.debug_print("any").unwrap();

        assert_eq!(stdout.get_copy_of_buffer_as_string(), "one any");
    }

    #[test]
    fn display() {
        let (printer, _, _) = fixture(DebugLevel::UpTo(3).into());
        assert_eq!(
            printer.to_string(),
            "TerminalPrinter | level: 3 | timestamping: false"
        );
    }
}

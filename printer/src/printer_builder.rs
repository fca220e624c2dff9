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

use std::path::PathBuf;

use cprint_ansi_color::AnsiFormat;

use crate::{ColoredPrinter, DateFormat, DebugLevel, FilePrinter, Printer, PrinterConfig,
            TerminalPrinter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrinterKind {
    Terminal,
    /// Uses the given format for every message.
    Colored(AnsiFormat),
    /// Appends to the file at this path.
    File(PathBuf),
}

/// Builds any printer behind a `Box<dyn Printer + Send>`.
///
/// Unlike the printer constructors, printers built here timestamp their output by
/// default, using [crate::BUILDER_DATE_FORMAT].
///
/// ```
/// use cprint_printer::{DebugLevel, PrinterBuilder, PrinterKind};
///
/// let printer = PrinterBuilder::new(PrinterKind::Terminal)
///     .level(DebugLevel::UpTo(2))
///     .timestamping(false)
///     .build()
///     .unwrap();
/// assert_eq!(printer.to_string(), "TerminalPrinter | level: 2 | timestamping: false");
/// ```
#[derive(Debug, Clone)]
pub struct PrinterBuilder {
    kind: PrinterKind,
    config: PrinterConfig,
}

impl PrinterBuilder {
    pub fn new(kind: PrinterKind) -> Self {
        Self {
            kind,
            config: PrinterConfig {
                level: DebugLevel::All,
                timestamping: true,
                date_format: DateFormat::builder_default(),
            },
        }
    }

    #[must_use]
    pub fn level(mut self, level: impl Into<DebugLevel>) -> Self {
        self.config.level = level.into();
        self
    }

    #[must_use]
    pub fn timestamping(mut self, timestamping: bool) -> Self {
        self.config.timestamping = timestamping;
        self
    }

    #[must_use]
    pub fn date_format(mut self, date_format: DateFormat) -> Self {
        self.config.date_format = date_format;
        self
    }

    /// Only [PrinterKind::File] can fail, if the file can't be opened.
    pub fn build(self) -> miette::Result<Box<dyn Printer + Send>> {
        Ok(match self.kind {
            PrinterKind::Terminal => Box::new(TerminalPrinter::new(self.config)),
            PrinterKind::Colored(format) => Box::new(ColoredPrinter::new(self.config, format)),
            PrinterKind::File(path) => Box::new(FilePrinter::try_new(path, self.config)?),
        })
    }
}

#[cfg(test)]
mod tests {
    use cprint_ansi_color::Attribute;
    use cprint_test_fixtures::create_temp_dir;
    use pretty_assertions::assert_eq;
    use serial_test::serial;

    use super::*;
    use crate::{BUILDER_DATE_FORMAT, PrinterError};

    #[test]
    fn defaults() {
        let printer = PrinterBuilder::new(PrinterKind::Terminal).build().unwrap();

        assert_eq!(printer.level(), DebugLevel::All);
        assert!(printer.is_logging_timestamps());
        assert_eq!(printer.config().date_format.pattern(), BUILDER_DATE_FORMAT);
    }

    #[test]
    fn colored() {
        let format = AnsiFormat::from(Attribute::Bold);
        let printer = PrinterBuilder::new(PrinterKind::Colored(format.clone()))
            .level(-1)
            .timestamping(false)
            .date_format(DateFormat::default())
            .build()
            .unwrap();

        assert_eq!(
            printer.to_string(),
            format!("ColoredPrinter | level: -1 | timestamping: false | format: {format}")
        );
        assert_eq!(printer.config().date_format, DateFormat::default());
    }

    #[serial]
    #[test]
    fn file() {
        let temp_dir = create_temp_dir().unwrap();
        let path = temp_dir.join("built.log");

        let mut printer = PrinterBuilder::new(PrinterKind::File(path.clone()))
            .timestamping(false)
            .build()
            .unwrap();
        printer.print("hello").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello");
        assert!(printer.to_string().starts_with("FilePrinter | level: 0"));
    }

    #[test]
    fn built_printer_is_debug() {
        let result = PrinterBuilder::new(PrinterKind::Terminal).build();
        let Ok(printer) = result else {
            panic!("terminal printer must build");
        };
        assert!(format!("{printer:?}").starts_with("TerminalPrinter"));
    }

    #[serial]
    #[test]
    fn file_in_missing_folder_fails() {
        let temp_dir = create_temp_dir().unwrap();
        let path = temp_dir.join("nope").join("built.log");

        let report = PrinterBuilder::new(PrinterKind::File(path)).build().unwrap_err();

        assert!(matches!(
            report.downcast_ref::<PrinterError>(),
            Some(PrinterError::OpenLogFile { .. })
        ));
    }
}

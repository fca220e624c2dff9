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
          path::Path,
          sync::Arc};

use cprint_ansi_color::LINE_SEPARATOR;

use crate::{LogFileWriter, Printer, PrinterConfig, open_shared_writer};

/// Appends every message, normal or error, to a log file.
///
/// Leveled debug messages are tagged with their level, eg: `[ 2 ] msg`. Printers that
/// point at the same file share one writer (see [crate::log_file_registry]).
#[derive(Debug)]
pub struct FilePrinter {
    config: PrinterConfig,
    writer: Arc<LogFileWriter>,
}

impl FilePrinter {
    pub fn try_new(
        path: impl AsRef<Path>,
        config: impl Into<PrinterConfig>,
    ) -> miette::Result<Self> {
        Ok(Self {
            config: config.into(),
            writer: open_shared_writer(path)?,
        })
    }

    /// Canonical path of the log file.
    pub fn path(&self) -> &Path { self.writer.path() }

    fn append(&self, msg: &str, line_separator: &str) -> miette::Result<()> {
        let text = format!("{}{msg}{line_separator}", self.config.timestamp_prefix());
        self.writer.write_str(&text)
    }

    fn append_at(&self, msg: &str, level: u32, line_separator: &str) -> miette::Result<()> {
        let text = format!(
            "{}[ {level} ] {msg}{line_separator}",
            self.config.timestamp_prefix()
        );
        self.writer.write_str(&text)
    }
}

impl Printer for FilePrinter {
    fn config(&self) -> &PrinterConfig { &self.config }

    fn config_mut(&mut self) -> &mut PrinterConfig { &mut self.config }

    fn print(&mut self, msg: &str) -> miette::Result<()> { self.append(msg, "") }

    fn println(&mut self, msg: &str) -> miette::Result<()> { self.append(msg, LINE_SEPARATOR) }

    fn error_print(&mut self, msg: &str) -> miette::Result<()> { self.print(msg) }

    fn error_println(&mut self, msg: &str) -> miette::Result<()> { self.println(msg) }

    fn print_timestamp(&mut self) -> miette::Result<()> {
        let text = format!("{} ", self.date_formatted());
        self.writer.write_str(&text)
    }

    fn print_error_timestamp(&mut self) -> miette::Result<()> { self.print_timestamp() }

    fn debug_print_at(&mut self, msg: &str, level: u32) -> miette::Result<()> {
        if self.config.level.can_print(level) {
            self.append_at(msg, level, "")?;
        }
        Ok(())
    }

    fn debug_println_at(&mut self, msg: &str, level: u32) -> miette::Result<()> {
        if self.config.level.can_print(level) {
            self.append_at(msg, level, LINE_SEPARATOR)?;
        }
        Ok(())
    }
}

impl Display for FilePrinter {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "FilePrinter | level: {} | timestamping: {} | path: {}",
            self.config.level,
            self.config.timestamping,
            self.path().display()
        )
    }
}

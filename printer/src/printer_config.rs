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

use crate::{DateFormat, DebugLevel};

/// Settings shared by every [crate::Printer].
///
/// The printer constructors take an `impl Into<PrinterConfig>`, so you can pass any of
/// these:
///
/// ```
/// use cprint_printer::{DebugLevel, PrinterConfig};
///
/// let _: PrinterConfig = DebugLevel::UpTo(2).into();
/// let _: PrinterConfig = PrinterConfig::default().with_timestamping(true);
/// let _: PrinterConfig = PrinterConfig::default().with_level(3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PrinterConfig {
    pub level: DebugLevel,
    pub timestamping: bool,
    pub date_format: DateFormat,
}

impl PrinterConfig {
    #[must_use]
    pub fn with_level(mut self, level: impl Into<DebugLevel>) -> Self {
        self.level = level.into();
        self
    }

    #[must_use]
    pub fn with_timestamping(mut self, timestamping: bool) -> Self {
        self.timestamping = timestamping;
        self
    }

    #[must_use]
    pub fn with_date_format(mut self, date_format: DateFormat) -> Self {
        self.date_format = date_format;
        self
    }

    /// `"<time> "` when timestamping, otherwise empty.
    pub fn timestamp_prefix(&self) -> String {
        if self.timestamping {
            format!("{} ", self.date_format.now())
        } else {
            String::new()
        }
    }
}

impl From<DebugLevel> for PrinterConfig {
    fn from(level: DebugLevel) -> Self {
        Self {
            level,
            ..Default::default()
        }
    }
}

impl From<DateFormat> for PrinterConfig {
    fn from(date_format: DateFormat) -> Self {
        Self {
            date_format,
            ..Default::default()
        }
    }
}

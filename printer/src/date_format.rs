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

use std::fmt::{Display, Write as _};

use chrono::{DateTime,
             Local,
             TimeZone,
             Utc,
             format::{Item, StrftimeItems}};

use crate::PrinterError;

/// ISO 8601 like, used by printers built directly.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Used by [crate::PrinterBuilder] unless told otherwise.
pub const BUILDER_DATE_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// A [chrono] strftime pattern that is known to be valid, so formatting a timestamp with
/// it never fails.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DateFormat {
    pattern: String,
}

impl Default for DateFormat {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl DateFormat {
    pub fn try_new(pattern: impl Into<String>) -> Result<Self, PrinterError> {
        let pattern = pattern.into();
        let has_error = StrftimeItems::new(&pattern).any(|item| matches!(item, Item::Error));
        // Some specifiers parse fine but can only be used for parsing, eg: `%#z`.
        let can_format = write!(String::new(), "{}", Utc::now().format(&pattern)).is_ok();
        if has_error || !can_format {
            return Err(PrinterError::InvalidDateFormat { pattern });
        }
        Ok(Self { pattern })
    }

    pub fn builder_default() -> Self {
        Self {
            pattern: BUILDER_DATE_FORMAT.to_string(),
        }
    }

    pub fn pattern(&self) -> &str { &self.pattern }

    pub fn format<Tz>(&self, date_time: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let mut acc = String::new();
        // The pattern was checked in `try_new()`, so this write can't fail.
        _ = write!(acc, "{}", date_time.format(&self.pattern));
        acc
    }

    /// The current local time.
    pub fn now(&self) -> String { self.format(&Local::now()) }
}

impl TryFrom<&str> for DateFormat {
    type Error = PrinterError;

    fn try_from(pattern: &str) -> Result<Self, Self::Error> { Self::try_new(pattern) }
}

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

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum PrinterError {
    #[error("🕰️ Invalid date format pattern: '{pattern}'")]
    #[diagnostic(
        code(cprint_printer::invalid_date_format),
        help("Use chrono strftime specifiers, eg: \"%Y-%m-%d %H:%M:%S\"")
    )]
    InvalidDateFormat { pattern: String },

    #[error("📑 Could not open log file: '{path}'")]
    #[diagnostic(
        code(cprint_printer::open_log_file),
        help("Check that the parent folder exists and is writable")
    )]
    OpenLogFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("🖨️ Could not write to {sink}")]
    #[diagnostic(code(cprint_printer::write_failed))]
    WriteFailed {
        sink: String,
        #[source]
        source: std::io::Error,
    },

    #[error("🔒 Lock poisoned: {resource}")]
    #[diagnostic(
        code(cprint_printer::lock_poisoned),
        help("A prior thread panicked while holding this lock")
    )]
    LockPoisoned { resource: String },
}

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

use std::{fmt::{Debug, Display},
          io::Write};

use crate::{DebugLevel, PrinterConfig, PrinterError};

/// Common behavior of every printer: normal, error and debug output, plus the
/// [PrinterConfig] that drives timestamps and debug filtering.
///
/// Implementors only provide the sink specific operations. Debug output, level and
/// timestamp handling all have default implementations built on top of them.
pub trait Printer: Display + Debug {
    fn config(&self) -> &PrinterConfig;

    fn config_mut(&mut self) -> &mut PrinterConfig;

    fn print(&mut self, msg: &str) -> miette::Result<()>;

    fn println(&mut self, msg: &str) -> miette::Result<()>;

    fn error_print(&mut self, msg: &str) -> miette::Result<()>;

    fn error_println(&mut self, msg: &str) -> miette::Result<()>;

    /// Prints the current time followed by a single space.
    fn print_timestamp(&mut self) -> miette::Result<()>;

    /// Like [Printer::print_timestamp()], but on the error sink.
    fn print_error_timestamp(&mut self) -> miette::Result<()>;

    fn debug_print(&mut self, msg: &str) -> miette::Result<()> {
        if self.is_logging_debug() {
            self.print(msg)?;
        }
        Ok(())
    }

    fn debug_println(&mut self, msg: &str) -> miette::Result<()> {
        if self.is_logging_debug() {
            self.println(msg)?;
        }
        Ok(())
    }

    /// Prints only if `level` passes the configured [DebugLevel].
    fn debug_print_at(&mut self, msg: &str, level: u32) -> miette::Result<()> {
        if self.config().level.can_print(level) {
            self.print(msg)?;
        }
        Ok(())
    }

    fn debug_println_at(&mut self, msg: &str, level: u32) -> miette::Result<()> {
        if self.config().level.can_print(level) {
            self.println(msg)?;
        }
        Ok(())
    }

    fn level(&self) -> DebugLevel { self.config().level }

    fn set_level(&mut self, level: DebugLevel) { self.config_mut().level = level; }

    /// `true` is the same as [DebugLevel::All], `false` as [DebugLevel::Off].
    fn set_debugging(&mut self, debugging: bool) { self.set_level(debugging.into()); }

    fn is_logging_debug(&self) -> bool { self.config().level.is_logging_debug() }

    fn is_logging_timestamps(&self) -> bool { self.config().timestamping }

    fn set_timestamping(&mut self, timestamping: bool) {
        self.config_mut().timestamping = timestamping;
    }

    /// The current time rendered with the configured [crate::DateFormat].
    fn date_formatted(&self) -> String { self.config().date_format.now() }
}

/// Write all of `text` to `sink` and flush it, so output from different sinks
/// interleaves in call order.
pub(crate) fn write_and_flush(
    sink: &mut dyn Write,
    sink_name: &str,
    text: &str,
) -> miette::Result<()> {
    sink.write_all(text.as_bytes())
        .and_then(|()| sink.flush())
        .map_err(|source| PrinterError::WriteFailed {
            sink: sink_name.to_string(),
            source,
        })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::{fmt::{Formatter, Result},
              io};

    use pretty_assertions::assert_eq;

    use super::*;

    /// Records everything passed to the required methods.
    #[derive(Debug, Default)]
    struct RecordingPrinter {
        config: PrinterConfig,
        out: Vec<String>,
    }

    impl Display for RecordingPrinter {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result { write!(f, "RecordingPrinter") }
    }

    impl Printer for RecordingPrinter {
        fn config(&self) -> &PrinterConfig { &self.config }

        fn config_mut(&mut self) -> &mut PrinterConfig { &mut self.config }

        fn print(&mut self, msg: &str) -> miette::Result<()> {
            self.out.push(format!("print:{msg}"));
            Ok(())
        }

        fn println(&mut self, msg: &str) -> miette::Result<()> {
            self.out.push(format!("println:{msg}"));
            Ok(())
        }

        fn error_print(&mut self, msg: &str) -> miette::Result<()> {
            self.out.push(format!("error_print:{msg}"));
            Ok(())
        }

        fn error_println(&mut self, msg: &str) -> miette::Result<()> {
            self.out.push(format!("error_println:{msg}"));
            Ok(())
        }

        fn print_timestamp(&mut self) -> miette::Result<()> { Ok(()) }

        fn print_error_timestamp(&mut self) -> miette::Result<()> { Ok(()) }
    }

    #[test]
    fn debug_output_follows_level() {
        let mut printer = RecordingPrinter::default();

        printer.set_level(DebugLevel::UpTo(2));
        printer.debug_print("a").unwrap();
        printer.debug_println_at("b", 2).unwrap();
        printer.debug_print_at("c", 3).unwrap();

        printer.set_debugging(false);
        printer.debug_println("d").unwrap();
        printer.debug_print_at("e", 0).unwrap();

        assert_eq!(printer.out, vec!["print:a", "println:b"]);
    }

    #[test]
    fn level_and_timestamping_accessors() {
        let mut printer = RecordingPrinter::default();
        assert_eq!(printer.level(), DebugLevel::All);
        assert!(printer.is_logging_debug());
        assert!(!printer.is_logging_timestamps());

        printer.set_timestamping(true);
        printer.set_debugging(false);
        assert!(printer.is_logging_timestamps());
        assert!(!printer.is_logging_debug());
        assert_eq!(printer.level(), DebugLevel::Off);
    }

    #[test]
    fn write_and_flush_reports_sink() {
        struct BrokenPipe;
        impl Write for BrokenPipe {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::from(io::ErrorKind::BrokenPipe))
            }
            fn flush(&mut self) -> io::Result<()> { Ok(()) }
        }

        let report = write_and_flush(&mut BrokenPipe, "stdout", "hi").unwrap_err();
        assert_eq!(report.to_string(), "🖨️ Could not write to stdout");
    }
}

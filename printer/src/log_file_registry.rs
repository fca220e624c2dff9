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

//! Every [crate::FilePrinter] pointing at the same file shares one [LogFileWriter], so
//! their writes serialize on a single lock and never interleave mid-message. The file
//! is flushed and closed when the last printer using it is dropped.

use std::{collections::HashMap,
          fs::{File, OpenOptions},
          io::{BufWriter, Write},
          path::{Path, PathBuf},
          sync::{Arc, LazyLock, Mutex, Weak}};

use crate::PrinterError;

type Registry = HashMap<PathBuf, Weak<LogFileWriter>>;

/// Keyed by canonical path, so `./a.log` and `a.log` resolve to the same writer.
static LOG_FILE_REGISTRY: LazyLock<Mutex<Registry>> = LazyLock::new(Default::default);

#[derive(Debug)]
pub struct LogFileWriter {
    path: PathBuf,
    writer: Mutex<BufWriter<File>>,
}

impl LogFileWriter {
    pub fn path(&self) -> &Path { &self.path }

    /// Append `text` and flush it to disk.
    pub fn write_str(&self, text: &str) -> miette::Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| PrinterError::LockPoisoned {
                resource: self.path.display().to_string(),
            })?;
        writer
            .write_all(text.as_bytes())
            .and_then(|()| writer.flush())
            .map_err(|source| PrinterError::WriteFailed {
                sink: self.path.display().to_string(),
                source,
            })?;
        Ok(())
    }
}

impl Drop for LogFileWriter {
    fn drop(&mut self) {
        let path = self.path.display().to_string();
        match self.writer.get_mut() {
            Ok(writer) => {
                if let Err(error) = writer.flush() {
                    tracing::warn!(message = "Failed to flush log file on close", path, %error);
                }
            }
            Err(_) => {
                tracing::warn!(message = "Log file lock poisoned on close", path);
            }
        }
        tracing::debug!(message = "Closed log file", path);
    }
}

/// Get the writer for `path`, opening the file in append mode (creating it if needed)
/// unless another printer already holds it open.
pub fn open_shared_writer(path: impl AsRef<Path>) -> miette::Result<Arc<LogFileWriter>> {
    let path = path.as_ref();
    let open_error = |source| PrinterError::OpenLogFile {
        path: path.display().to_string(),
        source,
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(open_error)?;
    let canonical_path = path.canonicalize().map_err(open_error)?;

    let mut registry =
        LOG_FILE_REGISTRY
            .lock()
            .map_err(|_| PrinterError::LockPoisoned {
                resource: "log file registry".to_string(),
            })?;
    registry.retain(|_, weak| weak.strong_count() > 0);

    if let Some(existing) = registry.get(&canonical_path).and_then(Weak::upgrade) {
        tracing::debug!(
            message = "Sharing open log file",
            path = %canonical_path.display(),
            printers = Arc::strong_count(&existing)
        );
        return Ok(existing);
    }

    let writer = Arc::new(LogFileWriter {
        path: canonical_path.clone(),
        writer: Mutex::new(BufWriter::new(file)),
    });
    tracing::debug!(message = "Opened log file", path = %canonical_path.display());
    registry.insert(canonical_path, Arc::downgrade(&writer));

    Ok(writer)
}

/// How many log files are currently held open by live printers.
pub fn open_log_file_count() -> usize {
    LOG_FILE_REGISTRY
        .lock()
        .map(|registry| {
            registry
                .values()
                .filter(|weak| weak.strong_count() > 0)
                .count()
        })
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use cprint_test_fixtures::create_temp_dir;
    use pretty_assertions::assert_eq;
    use serial_test::serial;

    use super::*;

    #[serial]
    #[test]
    fn same_file_shares_one_writer() {
        let temp_dir = create_temp_dir().unwrap();
        let path = temp_dir.join("shared.log");

        let first = open_shared_writer(&path).unwrap();
        let second = open_shared_writer(temp_dir.path().join(".").join("shared.log")).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(open_log_file_count(), 1);

        first.write_str("a").unwrap();
        second.write_str("b").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "ab");
    }

    #[serial]
    #[test]
    fn file_closes_when_last_writer_drops() {
        let temp_dir = create_temp_dir().unwrap();
        let path = temp_dir.join("closing.log");

        let first = open_shared_writer(&path).unwrap();
        let second = open_shared_writer(&path).unwrap();
        assert_eq!(open_log_file_count(), 1);

        drop(first);
        assert_eq!(open_log_file_count(), 1);

        drop(second);
        assert_eq!(open_log_file_count(), 0);
    }

    #[serial]
    #[test]
    fn different_files_get_different_writers() {
        let temp_dir = create_temp_dir().unwrap();

        let first = open_shared_writer(temp_dir.join("one.log")).unwrap();
        let second = open_shared_writer(temp_dir.join("two.log")).unwrap();

        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(open_log_file_count(), 2);
        assert!(first.path().ends_with("one.log"));
    }

    #[serial]
    #[test]
    fn missing_folder_is_an_open_error() {
        let temp_dir = create_temp_dir().unwrap();
        let path = temp_dir.join("missing").join("x.log");

        let report = open_shared_writer(&path).unwrap_err();

        let error = report.downcast_ref::<PrinterError>().unwrap();
        assert!(matches!(error, PrinterError::OpenLogFile { .. }));
    }

    #[serial]
    #[test]
    fn appends_to_existing_content() {
        let temp_dir = create_temp_dir().unwrap();
        let path = temp_dir.join("existing.log");
        std::fs::write(&path, "old ").unwrap();

        let writer = open_shared_writer(&path).unwrap();
        writer.write_str("new").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "old new");
    }
}

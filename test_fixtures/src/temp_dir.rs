/*
 *   Copyright (c) 2024-2026 R3BL LLC
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

use std::path::{Path, PathBuf};

use miette::IntoDiagnostic;

/// A scratch directory which is removed (with its contents) when dropped.
#[derive(Debug)]
pub struct TempDir {
    inner: tempfile::TempDir,
}

impl TempDir {
    pub fn path(&self) -> &Path { self.inner.path() }

    pub fn join(&self, file_name: impl AsRef<Path>) -> PathBuf {
        self.inner.path().join(file_name)
    }
}

/// Create a temporary directory under the OS temp folder.
pub fn create_temp_dir() -> miette::Result<TempDir> {
    let inner = tempfile::Builder::new()
        .prefix("cprint_")
        .tempdir()
        .into_diagnostic()?;
    Ok(TempDir { inner })
}

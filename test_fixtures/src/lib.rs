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

//! Test fixtures shared by the `cprint_*` crates.
//!
//! - [StdoutMock] is a [std::io::Write] implementation that captures everything written
//!   to it, so printers can be pointed at it instead of the real `stdout` / `stderr`.
//! - [create_temp_dir()] creates a scratch directory that is removed when dropped.
//!
//! ```rust
//! use std::io::Write;
//!
//! use cprint_test_fixtures::StdoutMock;
//!
//! let mut stdout_mock = StdoutMock::default();
//! let stdout_mock_clone = stdout_mock.clone(); // Points to the same inner value as `stdout_mock`.
//!
//! stdout_mock.write_all(b"\x1b[31mhello world\x1b[0m").unwrap();
//! stdout_mock.flush().unwrap();
//!
//! pretty_assertions::assert_eq!(
//!     stdout_mock_clone.get_copy_of_buffer_as_string_strip_ansi(),
//!     "hello world"
//! );
//! ```

// Attach sources.
pub mod output_device_fixtures;
pub mod temp_dir;

// Re-export.
pub use output_device_fixtures::*;
pub use temp_dir::*;

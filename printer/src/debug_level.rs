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

use std::fmt::{Display, Formatter, Result};

/// Filters debug messages by their level.
///
/// As an integer (see [From<i32>] and [DebugLevel::as_i32()]):
/// - any negative number is [DebugLevel::Off],
/// - `0` is [DebugLevel::All],
/// - `n > 0` is [DebugLevel::UpTo], which prints messages with a level `<= n`.
///
/// `UpTo(0)` has the same integer form as [DebugLevel::All], so it filters the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DebugLevel {
    Off,
    #[default]
    All,
    UpTo(u32),
}

mod debug_level_impl {
    use super::*;

    impl DebugLevel {
        pub fn is_logging_debug(&self) -> bool { !matches!(self, DebugLevel::Off) }

        /// Whether a debug message tagged with `message_level` passes this filter.
        pub fn can_print(&self, message_level: u32) -> bool {
            match *self {
                DebugLevel::Off => false,
                DebugLevel::All | DebugLevel::UpTo(0) => true,
                DebugLevel::UpTo(max) => message_level <= max,
            }
        }

        pub fn as_i32(&self) -> i32 {
            match *self {
                DebugLevel::Off => -1,
                DebugLevel::All => 0,
                DebugLevel::UpTo(max) => i32::try_from(max).unwrap_or(i32::MAX),
            }
        }
    }

    impl From<i32> for DebugLevel {
        fn from(level: i32) -> Self {
            match u32::try_from(level) {
                Err(_) => DebugLevel::Off,
                Ok(0) => DebugLevel::All,
                Ok(max) => DebugLevel::UpTo(max),
            }
        }
    }

    impl From<bool> for DebugLevel {
        /// `true` prints every debug message, `false` none.
        fn from(debugging: bool) -> Self {
            if debugging { DebugLevel::All } else { DebugLevel::Off }
        }
    }

    impl Display for DebugLevel {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result { write!(f, "{}", self.as_i32()) }
    }
}

// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt;

/// The severity of a log message. Larger values are more severe.
///
/// The named levels follow the Android logcat numbering, but any integer is a
/// valid level and is passed through to filters and writers unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Level(i32);

impl Level {
    pub const VERBOSE: Level = Level(2);
    pub const DEBUG: Level = Level(3);
    pub const INFO: Level = Level(4);
    pub const WARN: Level = Level(5);
    pub const ERROR: Level = Level(6);
    pub const ASSERT: Level = Level(7);

    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Returns the raw integer severity.
    pub const fn value(self) -> i32 {
        self.0
    }

    /// Maps this level onto the `log` crate's levels. Levels at or below
    /// verbose become `Trace` and levels at or above error become `Error`.
    pub fn as_log_level(self) -> log::Level {
        match self.0 {
            i32::MIN..=2 => log::Level::Trace,
            3 => log::Level::Debug,
            4 => log::Level::Info,
            5 => log::Level::Warn,
            _ => log::Level::Error,
        }
    }
}

impl From<i32> for Level {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<Level> for i32 {
    fn from(level: Level) -> Self {
        level.0
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Level::VERBOSE => f.write_str("V"),
            Level::DEBUG => f.write_str("D"),
            Level::INFO => f.write_str("I"),
            Level::WARN => f.write_str("W"),
            Level::ERROR => f.write_str("E"),
            Level::ASSERT => f.write_str("A"),
            Level(other) => write!(f, "{other}"),
        }
    }
}

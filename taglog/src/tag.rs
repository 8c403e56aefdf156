// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::dispatcher::{dispatch, dispatch_value};
use crate::{Configuration, Level};

use core::any::Any;
use core::fmt;
use std::sync::Arc;

/// A logger bound to a single tag, usually obtained from `Dispatcher::tag` or
/// the global `tag` function.
///
/// A handle keeps using the configuration of the dispatcher which created it.
/// Reconfiguring the global dispatcher does not affect handles obtained
/// before the reconfiguration.
pub struct TagHandle {
    tag: String,
    config: Arc<Configuration>,
}

impl TagHandle {
    pub(crate) fn new(tag: &str, config: Arc<Configuration>) -> Self {
        Self {
            tag: tag.to_string(),
            config,
        }
    }

    pub fn name(&self) -> &str {
        &self.tag
    }

    pub fn log(&self, level: Level, message: &str) {
        dispatch(&self.config, level, &self.tag, message)
    }

    pub fn log_value(&self, level: Level, value: &dyn Any) {
        dispatch_value(&self.config, level, &self.tag, value)
    }

    /// Log with verbose level
    pub fn v(&self, message: &str) {
        self.log(Level::VERBOSE, message)
    }

    /// Log with debug level
    pub fn d(&self, message: &str) {
        self.log(Level::DEBUG, message)
    }

    /// Log with info level
    pub fn i(&self, message: &str) {
        self.log(Level::INFO, message)
    }

    /// Log with warn level
    pub fn w(&self, message: &str) {
        self.log(Level::WARN, message)
    }

    /// Log with error level
    pub fn e(&self, message: &str) {
        self.log(Level::ERROR, message)
    }

    /// Log with assert level
    pub fn a(&self, message: &str) {
        self.log(Level::ASSERT, message)
    }
}

impl fmt::Debug for TagHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TagHandle").field("tag", &self.tag).finish()
    }
}

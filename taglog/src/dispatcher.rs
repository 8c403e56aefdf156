// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::*;

use ahash::AHashMap;
use core::any::Any;
use parking_lot::RwLock;
use std::sync::Arc;

/// A logger which applies a `Configuration` to every log call.
///
/// The configuration is immutable, so a `Dispatcher` can be shared freely
/// between threads. The only mutable state is the cache of `TagHandle`s.
pub struct Dispatcher {
    config: Arc<Configuration>,
    tags: RwLock<AHashMap<String, Arc<TagHandle>>>,
}

impl Dispatcher {
    pub fn new(config: Configuration) -> Self {
        Self {
            config: Arc::new(config),
            tags: RwLock::new(AHashMap::new()),
        }
    }

    /// Construct a dispatcher by applying the provided function to a fresh
    /// `Builder`.
    pub fn build<F>(init: F) -> Self
    where
        F: FnOnce(Builder) -> Builder,
    {
        Self::new(init(Builder::new()).build())
    }

    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    /// Log a message. The message is passed to the writer exactly once if all
    /// filters accept it and the tag is not blocked. Nothing happens otherwise.
    pub fn log(&self, level: Level, tag: &str, message: &str) {
        dispatch(&self.config, level, tag, message)
    }

    /// Log an arbitrary value. The value is offered to every registered
    /// converter in order, and each converter which accepts it produces one
    /// call to `log` with the converted string. This means a value which
    /// matches several converters is logged several times. If no converter
    /// matches, nothing is logged.
    pub fn log_value(&self, level: Level, tag: &str, value: &dyn Any) {
        dispatch_value(&self.config, level, tag, value)
    }

    /// Returns the `TagHandle` for this tag, creating it on first use. Every
    /// call with the same tag returns the same handle.
    pub fn tag(&self, tag: &str) -> Arc<TagHandle> {
        if let Some(handle) = self.tags.read().get(tag) {
            return handle.clone();
        }

        let mut tags = self.tags.write();

        // another thread may have inserted the handle while we waited
        tags.entry(tag.to_string())
            .or_insert_with(|| {
                log::trace!("creating tag handle: {tag}");
                Arc::new(TagHandle::new(tag, self.config.clone()))
            })
            .clone()
    }
}

pub(crate) fn dispatch(config: &Configuration, level: Level, tag: &str, message: &str) {
    // no filters means nothing is written
    if config.filters.is_empty()
        || !config.filters.iter().all(|filter| filter(level, tag, message))
    {
        metrics! {
            LOG_FILTERED.increment();
        }
        return;
    }

    if !config.allowlist.contains(tag) && config.blocklist.contains(tag) {
        metrics! {
            LOG_BLOCKED.increment();
        }
        return;
    }

    metrics! {
        LOG_WRITE.increment();
    }

    (config.writer)(level, tag, message);
}

pub(crate) fn dispatch_value(config: &Configuration, level: Level, tag: &str, value: &dyn Any) {
    let mut converted = false;

    for converter in &config.converters {
        if let Some(message) = converter.convert(value) {
            converted = true;
            dispatch(config, level, tag, &message);
        }
    }

    if !converted {
        metrics! {
            LOG_UNCONVERTED.increment();
        }
    }
}

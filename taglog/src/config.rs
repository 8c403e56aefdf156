// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::writer::{self, Writer};
use crate::{Converter, Level};

use ahash::AHashSet;
use core::any::Any;
use core::fmt;
use std::sync::Arc;

pub(crate) type Filter = Box<dyn Fn(Level, &str, &str) -> bool + Send + Sync>;

/// The frozen logging policy used by a `Dispatcher`.
///
/// A `Configuration` can only be produced by a `Builder` and is never modified
/// once built.
pub struct Configuration {
    pub(crate) allowlist: AHashSet<String>,
    pub(crate) blocklist: AHashSet<String>,
    pub(crate) filters: Vec<Filter>,
    pub(crate) writer: Writer,
    pub(crate) converters: Vec<Converter>,
}

impl Configuration {
    pub fn builder() -> Builder {
        Builder::new()
    }

    /// Returns true if the tag is on the allowlist.
    pub fn is_allowed(&self, tag: &str) -> bool {
        self.allowlist.contains(tag)
    }

    /// Returns true if the tag is on the blocklist. Note that the allowlist
    /// takes precedence when deciding whether a tag is written.
    pub fn is_blocked(&self, tag: &str) -> bool {
        self.blocklist.contains(tag)
    }

    pub fn filter_count(&self) -> usize {
        self.filters.len()
    }

    pub fn converter_count(&self) -> usize {
        self.converters.len()
    }
}

impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("allowlist", &self.allowlist)
            .field("blocklist", &self.blocklist)
            .field("filters", &self.filters.len())
            .field("converters", &self.converters)
            .finish_non_exhaustive()
    }
}

/// A type to construct a `Configuration`.
///
/// The builder starts out with empty tag lists, no filters, no converters and
/// a writer which drops everything. Since a configuration without filters
/// rejects every message, at least one filter must be added for anything to
/// be written.
pub struct Builder {
    allowlist: AHashSet<String>,
    blocklist: AHashSet<String>,
    filters: Vec<Filter>,
    writer: Writer,
    converters: Vec<Converter>,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            allowlist: AHashSet::new(),
            blocklist: AHashSet::new(),
            filters: Vec::new(),
            writer: Arc::new(writer::nop()),
            converters: Vec::new(),
        }
    }
}

impl Builder {
    /// Create a new configuration builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Add tags which are always written, even if they are also blocklisted.
    pub fn allowlist<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowlist.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Add tags which are suppressed unless they are also allowlisted.
    pub fn blocklist<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.blocklist.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Append a predicate filter. Every filter must return true for a message
    /// to be written. Filters are evaluated in the order they are added and
    /// evaluation stops at the first rejection.
    pub fn filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(Level, &str, &str) -> bool + Send + Sync + 'static,
    {
        self.filters.push(Box::new(filter));
        self
    }

    /// Set the writer which receives every message that passes the filters.
    /// Only the most recently set writer is kept.
    pub fn writer<W>(mut self, writer: W) -> Self
    where
        W: Fn(Level, &str, &str) + Send + Sync + 'static,
    {
        self.writer = Arc::new(writer);
        self
    }

    /// Register a converter for values of exactly type `T`. Registering a
    /// second converter for the same type replaces the first.
    pub fn converter<T, F>(self, convert: F) -> Self
    where
        T: Any,
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        self.add_converter(Converter::of(convert))
    }

    /// Register a converter for a named family of types, for example all
    /// integer types or everything implementing some trait. The function
    /// returns `None` for values outside the family.
    pub fn converter_family<F>(self, name: &'static str, convert: F) -> Self
    where
        F: Fn(&dyn Any) -> Option<String> + Send + Sync + 'static,
    {
        self.add_converter(Converter::family(name, convert))
    }

    /// Register a converter. An existing converter with the same key is
    /// replaced in place, keeping its original evaluation order.
    pub fn add_converter(mut self, converter: Converter) -> Self {
        if let Some(existing) = self
            .converters
            .iter_mut()
            .find(|existing| existing.key() == converter.key())
        {
            *existing = converter;
        } else {
            self.converters.push(converter);
        }
        self
    }

    /// Use the `log` crate as the writer and append a filter which accepts
    /// every message.
    pub fn use_defaults(self) -> Self {
        self.writer(writer::platform()).filter(|_, _, _| true)
    }

    /// Consumes the builder and returns a `Configuration`.
    pub fn build(self) -> Configuration {
        Configuration {
            allowlist: self.allowlist,
            blocklist: self.blocklist,
            filters: self.filters,
            writer: self.writer,
            converters: self.converters,
        }
    }
}

// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The process-wide dispatcher and the shorthand functions which use it.

use crate::*;

use core::any::Any;
use parking_lot::{const_reentrant_mutex, const_rwlock, ReentrantMutex, RwLock};
use std::sync::Arc;

static INSTANCE: RwLock<Option<Arc<Dispatcher>>> = const_rwlock(None);

// serializes build + swap across threads; reentrant so a build closure may
// itself call `configure` or `default`, in which case the outer swap wins
static CONFIGURE: ReentrantMutex<()> = const_reentrant_mutex(());

/// Build a new `Configuration` by applying the provided function to a fresh
/// `Builder` and install a dispatcher using it as the process-wide logger.
///
/// Any previously installed dispatcher is replaced. `TagHandle`s obtained
/// from the previous dispatcher keep using the previous configuration.
pub fn configure<F>(init: F)
where
    F: FnOnce(Builder) -> Builder,
{
    let _guard = CONFIGURE.lock();

    let dispatcher = Arc::new(Dispatcher::build(init));

    log::debug!(
        "installing global dispatcher: {} filters, {} converters",
        dispatcher.configuration().filter_count(),
        dispatcher.configuration().converter_count()
    );

    *INSTANCE.write() = Some(dispatcher);

    metrics! {
        LOG_CONFIGURE.increment();
    }
}

/// Install a process-wide dispatcher which writes every message to the `log`
/// crate.
pub fn default() {
    configure(|builder| builder.use_defaults())
}

/// Returns the process-wide dispatcher, or an error if none has been
/// installed yet.
pub fn instance() -> Result<Arc<Dispatcher>, Error> {
    INSTANCE.read().clone().ok_or(Error::NotInitialized)
}

pub fn is_configured() -> bool {
    INSTANCE.read().is_some()
}

fn get() -> Arc<Dispatcher> {
    match instance() {
        Ok(dispatcher) => dispatcher,
        Err(err) => panic!("{err}"),
    }
}

/// Get a `TagHandle` from the process-wide dispatcher.
///
/// # Panics
/// This function will panic if no global dispatcher has been configured.
pub fn tag(tag: &str) -> Arc<TagHandle> {
    get().tag(tag)
}

/// Log a message with the process-wide dispatcher.
///
/// # Panics
/// This function will panic if no global dispatcher has been configured.
pub fn log(level: Level, tag: &str, message: &str) {
    get().log(level, tag, message)
}

/// Log a value with the process-wide dispatcher.
///
/// # Panics
/// This function will panic if no global dispatcher has been configured.
pub fn log_value(level: Level, tag: &str, value: &dyn Any) {
    get().log_value(level, tag, value)
}

/// Log with verbose level
pub fn v(tag: &str, message: &str) {
    log(Level::VERBOSE, tag, message)
}

/// Log with debug level
pub fn d(tag: &str, message: &str) {
    log(Level::DEBUG, tag, message)
}

/// Log with info level
pub fn i(tag: &str, message: &str) {
    log(Level::INFO, tag, message)
}

/// Log with warn level
pub fn w(tag: &str, message: &str) {
    log(Level::WARN, tag, message)
}

/// Log with error level
pub fn e(tag: &str, message: &str) {
    log(Level::ERROR, tag, message)
}

/// Log with assert level
pub fn a(tag: &str, message: &str) {
    log(Level::ASSERT, tag, message)
}

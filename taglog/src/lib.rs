// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! This crate provides a logging facade which centralizes the policy for
//! whether, how, and where a tagged log message is written.
//!
//! The core of this crate is the `Dispatcher` type, which is constructed from
//! an immutable `Configuration`. A configuration is assembled with a
//! `Builder` and carries:
//! * an allowlist and a blocklist of tags
//! * an ordered list of predicate filters, all of which must accept a message
//! * a single `Writer` which is the only side-effecting sink
//! * a list of converters which turn arbitrary values into strings
//!
//! A message is written if and only if every filter accepts it and the tag is
//! not rejected by the blocklist. The allowlist always wins over the
//! blocklist. A dispatcher with no filters writes nothing at all.
//!
//! ```
//! use taglog::{Dispatcher, Level};
//!
//! let logger = Dispatcher::build(|builder| {
//!     builder
//!         .blocklist(["noisy"])
//!         .filter(|level, _tag, _msg| level >= Level::INFO)
//!         .writer(taglog::writer::platform())
//! });
//!
//! logger.log(Level::WARN, "network", "connection reset");
//!
//! let tag = logger.tag("network");
//! tag.i("reconnected");
//! ```
//!
//! Applications which want a single logger for the whole process can install
//! one with `configure` (or `default`) and then use the shorthand functions
//! such as `d`, `i` and `e`. Calling a shorthand function before any global
//! dispatcher has been installed panics with `Error::NotInitialized`.

#[macro_use]
mod macros;

mod config;
mod convert;
mod dispatcher;
mod error;
mod global;
mod level;
mod tag;

pub mod writer;

pub use config::*;
pub use convert::*;
pub use dispatcher::*;
pub use error::*;
pub use global::*;
pub use level::*;
pub use tag::*;
pub use writer::{FormatFunction, Writer};

#[cfg(feature = "metrics")]
mod metrics;

#[cfg(feature = "metrics")]
use metrics::*;

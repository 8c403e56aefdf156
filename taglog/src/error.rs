// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use thiserror::Error;

/// Errors returned when accessing the process-wide dispatcher.
#[non_exhaustive]
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    #[error("logger not initialized, call `taglog::configure` or `taglog::default` first")]
    NotInitialized,
}

// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Writers are the sinks which receive every message that passes the
//! dispatcher's policy. A writer is any `Fn(Level, &str, &str)` which is
//! `Send + Sync`. This module provides a few common ones.

use crate::Level;

use parking_lot::Mutex;
use std::io::Write;
use std::sync::Arc;

/// The shared form of a writer as held by a `Configuration`.
pub type Writer = Arc<dyn Fn(Level, &str, &str) + Send + Sync>;

pub type FormatFunction = fn(
    write: &mut dyn std::io::Write,
    level: Level,
    tag: &str,
    message: &str,
) -> Result<(), std::io::Error>;

pub fn default_format(
    w: &mut dyn std::io::Write,
    level: Level,
    tag: &str,
    message: &str,
) -> Result<(), std::io::Error> {
    writeln!(w, "{} {}: {}", level, tag, message)
}

/// A writer which drops all messages.
pub fn nop() -> impl Fn(Level, &str, &str) + Send + Sync + 'static {
    |_level: Level, _tag: &str, _message: &str| {}
}

/// A writer which forwards to the `log` crate, using the tag as the record
/// target. Whatever logger has been registered with `log` decides where the
/// message finally ends up.
pub fn platform() -> impl Fn(Level, &str, &str) + Send + Sync + 'static {
    |level: Level, tag: &str, message: &str| {
        log::log!(target: tag, level.as_log_level(), "{}", message);
    }
}

/// A writer which formats each message with `default_format` and writes it to
/// the provided output.
pub fn stream<W>(output: W) -> impl Fn(Level, &str, &str) + Send + Sync + 'static
where
    W: Write + Send + 'static,
{
    stream_with_format(output, default_format)
}

/// A writer which formats each message with the provided `FormatFunction` and
/// writes it to the output. Writes are serialized through a mutex and any
/// errors returned by the output are counted, but otherwise discarded.
pub fn stream_with_format<W>(
    output: W,
    format: FormatFunction,
) -> impl Fn(Level, &str, &str) + Send + Sync + 'static
where
    W: Write + Send + 'static,
{
    let output = Mutex::new(output);
    move |level: Level, tag: &str, message: &str| {
        let mut output = output.lock();
        if format(&mut *output, level, tag, message).is_err() {
            metrics! {
                crate::LOG_WRITE_EX.increment();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Default)]
    struct Shared(Arc<Mutex<Vec<u8>>>);

    impl Write for Shared {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn stream_default_format() {
        let buffer = Shared::default();
        let writer = stream(buffer.clone());

        writer(Level::DEBUG, "quiet", "hello");
        writer(Level::new(12), "loud", "world");

        let output = String::from_utf8(buffer.0.lock().clone()).unwrap();
        assert_eq!(output, "D quiet: hello\n12 loud: world\n");
    }

    #[test]
    fn stream_custom_format() {
        fn bare(
            w: &mut dyn std::io::Write,
            _level: Level,
            _tag: &str,
            message: &str,
        ) -> Result<(), std::io::Error> {
            writeln!(w, "{}", message)
        }

        let buffer = Shared::default();
        let writer = stream_with_format(buffer.clone(), bare);
        writer(Level::INFO, "tag", "only the message");

        let output = String::from_utf8(buffer.0.lock().clone()).unwrap();
        assert_eq!(output, "only the message\n");
    }

    #[test]
    fn stream_output_errors_are_dropped() {
        struct Broken;

        impl Write for Broken {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::Other, "broken"))
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        #[cfg(feature = "metrics")]
        let before = crate::LOG_WRITE_EX.value();

        let writer = stream(Broken);
        writer(Level::ERROR, "tag", "lost");

        #[cfg(feature = "metrics")]
        assert!(crate::LOG_WRITE_EX.value() > before);
    }

    #[test]
    fn nop_and_platform_do_not_panic() {
        nop()(Level::ERROR, "tag", "dropped");
        platform()(Level::ASSERT, "tag", "forwarded");
    }
}

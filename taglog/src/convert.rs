// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::any::{Any, TypeId};
use core::fmt;
use std::sync::Arc;

type ConvertFunction = Arc<dyn Fn(&dyn Any) -> Option<String> + Send + Sync>;

/// Identifies a converter entry. Registering a second converter with the same
/// key replaces the first one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConverterKey {
    /// Matches values of exactly this type.
    Type(TypeId),
    /// Matches any value the family's converter accepts.
    Family(&'static str),
}

/// Turns a value into a string for logging.
///
/// A converter decides for itself whether a value is an instance of what it
/// converts: exact-type converters downcast, family converters may accept any
/// number of types. A value may therefore match several converters, and the
/// dispatcher logs it once per match.
#[derive(Clone)]
pub struct Converter {
    key: ConverterKey,
    convert: ConvertFunction,
}

impl Converter {
    /// Creates a converter for values of type `T`.
    pub fn of<T, F>(convert: F) -> Self
    where
        T: Any,
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        Self {
            key: ConverterKey::Type(TypeId::of::<T>()),
            convert: Arc::new(move |value: &dyn Any| value.downcast_ref::<T>().map(&convert)),
        }
    }

    /// Creates a converter for a named family of types. The function returns
    /// `None` for values which are not members of the family.
    pub fn family<F>(name: &'static str, convert: F) -> Self
    where
        F: Fn(&dyn Any) -> Option<String> + Send + Sync + 'static,
    {
        Self {
            key: ConverterKey::Family(name),
            convert: Arc::new(convert),
        }
    }

    pub fn key(&self) -> ConverterKey {
        self.key
    }

    /// Returns the string form of the value, or `None` if this converter does
    /// not apply to it.
    pub fn convert(&self, value: &dyn Any) -> Option<String> {
        (self.convert)(value)
    }
}

impl fmt::Debug for Converter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Converter").field("key", &self.key).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_type() {
        let converter = Converter::of(|value: &u32| format!("u32:{value}"));
        assert_eq!(converter.convert(&7_u32), Some("u32:7".to_string()));
        assert_eq!(converter.convert(&7_u64), None);
        assert_eq!(converter.convert(&"7"), None);
        assert_eq!(converter.key(), ConverterKey::Type(TypeId::of::<u32>()));
    }

    #[test]
    fn family() {
        let converter = Converter::family("integer", |value| {
            if let Some(v) = value.downcast_ref::<u32>() {
                Some(v.to_string())
            } else {
                value.downcast_ref::<i64>().map(|v| v.to_string())
            }
        });

        assert_eq!(converter.convert(&1_u32), Some("1".to_string()));
        assert_eq!(converter.convert(&-1_i64), Some("-1".to_string()));
        assert_eq!(converter.convert(&1.0_f64), None);
        assert_eq!(converter.key(), ConverterKey::Family("integer"));
    }
}

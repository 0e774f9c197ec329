// Author: Dustin Pilgrim
// License: MIT

//! The boundary between [`GenericValue`] and byte streams.
//!
//! A [`Format`] reads or writes exactly one value at a time. The typed
//! wrappers in [`FormatExt`] compose it with the [`Encoder`] of a native
//! type, so callers never need to touch `GenericValue` directly:
//!
//! ```
//! use tagged_value::format::{FormatExt, json::JsonFormat};
//!
//! let format = JsonFormat::new();
//! let bytes = format.to_vec(&vec![1u8, 2, 3])?;
//! let back: Vec<u8> = format.from_slice(&bytes)?;
//! assert_eq!(back, vec![1, 2, 3]);
//! # Ok::<(), tagged_value::FormatError>(())
//! ```

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use crate::encoder::Encoder;
use crate::{FormatError, GenericValue};

pub mod json;

/// A wire syntax for [`GenericValue`].
///
/// Implementations that cannot represent every tag distinction (signed vs
/// unsigned, char vs string) must document how they canonicalize.
pub trait Format {
    /// Consume exactly one complete value from `input`.
    fn read_value(&self, input: &mut dyn Read) -> Result<GenericValue, FormatError>;

    /// Serialize one value. On `Err` the output must be treated as not
    /// having been written cleanly.
    fn write_value(&self, value: &GenericValue, output: &mut dyn Write) -> Result<(), FormatError>;

    /// Bytes allowed to follow a value in a complete buffer. None by default.
    fn is_padding(&self, _byte: u8) -> bool {
        false
    }
}

/// Typed reads and writes for every [`Format`].
pub trait FormatExt: Format {
    fn read<T: Encoder>(&self, input: &mut dyn Read) -> Result<T, FormatError> {
        let value = self.read_value(input)?;
        Ok(T::decode(&value)?)
    }

    fn write<T: Encoder>(&self, value: &T, output: &mut dyn Write) -> Result<(), FormatError> {
        self.write_value(&value.encode(), output)
    }

    fn to_vec<T: Encoder>(&self, value: &T) -> Result<Vec<u8>, FormatError> {
        let mut out = Vec::new();
        self.write(value, &mut out)?;
        Ok(out)
    }

    /// Decode a buffer holding exactly one value.
    ///
    /// # Errors
    /// Anything other than padding after the value is a syntax error.
    fn from_slice<T: Encoder>(&self, bytes: &[u8]) -> Result<T, FormatError> {
        let mut cursor = bytes;
        let value = self.read_value(&mut cursor)?;
        if let Some(pos) = cursor.iter().position(|b| !self.is_padding(*b)) {
            let offset = bytes.len() - cursor.len() + pos;
            return Err(FormatError::Syntax {
                message: format!("trailing bytes after value at offset {}", offset),
                line: 0,
                column: offset,
                code: Some(502),
            });
        }
        Ok(T::decode(&value)?)
    }
}

impl<F: Format + ?Sized> FormatExt for F {}

/// Output settings shared by the bundled formats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    /// Indent nested arrays and objects.
    pub pretty: bool,
    /// Terminate every written value with `\n`.
    pub trailing_newline: bool,
    /// Write NaN and infinities as `null` instead of failing.
    pub allow_non_finite: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            pretty: false,
            trailing_newline: true,
            allow_non_finite: false,
        }
    }
}

impl FormatOptions {
    /// Load options from a JSON document. Missing fields keep their defaults.
    ///
    /// # Examples
    /// ```
    /// use tagged_value::format::FormatOptions;
    ///
    /// let opts = FormatOptions::from_json_str(r#"{ "pretty": true }"#)?;
    /// assert!(opts.pretty);
    /// assert!(opts.trailing_newline);
    /// # Ok::<(), tagged_value::FormatError>(())
    /// ```
    pub fn from_json_str(content: &str) -> Result<Self, FormatError> {
        Ok(serde_json::from_str(content)?)
    }
}

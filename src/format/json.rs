// Author: Dustin Pilgrim
// License: MIT

use std::io::{self, Read, Write};

use serde::Deserialize;

use super::{Format, FormatOptions};
use crate::{FormatError, GenericValue};

/// JSON wire format backed by `serde_json`.
///
/// JSON cannot carry every tag distinction, so values are canonicalized:
/// - `Char` is written as a one-character string and reads back as `String`.
/// - Integers read back as `Unsigned` when non-negative, `Signed` otherwise.
/// - `Double` always keeps a fractional or exponent form and reads back as
///   `Double`.
/// - NaN and infinities are rejected unless
///   [`FormatOptions::allow_non_finite`] is set, in which case they become
///   `null`.
///
/// Reading stops right after the last byte of an object, array, string or
/// `true`/`false`/`null` literal. A top-level number is only terminated by
/// the byte that follows it, and that byte is consumed as well, so
/// `write_value` always follows a top-level number with `\n`, even when
/// `trailing_newline` is off.
#[derive(Debug, Clone, Default)]
pub struct JsonFormat {
    options: FormatOptions,
}

impl JsonFormat {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: FormatOptions) -> Self {
        Self { options }
    }

    pub fn pretty() -> Self {
        Self::with_options(FormatOptions {
            pretty: true,
            ..FormatOptions::default()
        })
    }

    pub fn options(&self) -> &FormatOptions {
        &self.options
    }
}

fn is_json_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r')
}

/// First byte that is not JSON whitespace, or `None` at end of input.
fn next_significant(input: &mut dyn Read) -> io::Result<Option<u8>> {
    let mut byte = [0u8];
    loop {
        match input.read(&mut byte) {
            Ok(0) => return Ok(None),
            Ok(_) if is_json_whitespace(byte[0]) => continue,
            Ok(_) => return Ok(Some(byte[0])),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
}

fn find_non_finite(value: &GenericValue) -> Option<f64> {
    match value {
        GenericValue::Double(d) if !d.is_finite() => Some(*d),
        GenericValue::Array(items) => items.iter().find_map(find_non_finite),
        GenericValue::Object(fields) => fields.values().find_map(find_non_finite),
        _ => None,
    }
}

impl Format for JsonFormat {
    fn read_value(&self, input: &mut dyn Read) -> Result<GenericValue, FormatError> {
        let Some(first) = next_significant(input)? else {
            return Err(FormatError::Syntax {
                message: "EOF while parsing a value".into(),
                line: 0,
                column: 0,
                code: Some(501),
            });
        };
        let lead = [first];
        // Deserializing one value directly never peeks past a closing
        // delimiter or literal, unlike a stream deserializer.
        let mut de = serde_json::Deserializer::from_reader((&lead[..]).chain(input));
        Ok(GenericValue::deserialize(&mut de)?)
    }

    fn write_value(&self, value: &GenericValue, output: &mut dyn Write) -> Result<(), FormatError> {
        if !self.options.allow_non_finite {
            if let Some(d) = find_non_finite(value) {
                return Err(FormatError::unsupported(format!(
                    "JSON has no representation for {}",
                    d
                )));
            }
        }

        if self.options.pretty {
            serde_json::to_writer_pretty(&mut *output, value)?;
        } else {
            serde_json::to_writer(&mut *output, value)?;
        }
        if self.options.trailing_newline || value.is_number() {
            output.write_all(b"\n")?;
        }
        output.flush()?;
        Ok(())
    }

    fn is_padding(&self, byte: u8) -> bool {
        is_json_whitespace(byte)
    }
}

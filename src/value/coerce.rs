// Author: Dustin Pilgrim
// License: MIT

//! Cross-tag scalar coercion.
//!
//! Two families live here. The `get_*` getters never fail: a mismatched tag
//! yields the zero sentinel, and scalar conversions follow `as` casts. The
//! `try_*` accessors report every lossy or impossible conversion instead.

use super::{GenericValue, Tag};
use crate::ValueError;

impl GenericValue {
    /// Integer sources truncate to their low byte, so `42` reads as `'*'`.
    pub fn get_char(&self) -> char {
        match self {
            GenericValue::Char(c) => *c,
            GenericValue::Bool(b) => char::from(*b as u8),
            GenericValue::Signed(n) => char::from(*n as u8),
            GenericValue::Unsigned(n) => char::from(*n as u8),
            GenericValue::Double(d) => char::from(*d as u8),
            GenericValue::String(_) => self.try_char().unwrap_or('\0'),
            _ => '\0',
        }
    }

    pub fn get_bool(&self) -> bool {
        match self {
            GenericValue::Char(c) => *c != '\0',
            GenericValue::Bool(b) => *b,
            GenericValue::Signed(n) => *n != 0,
            GenericValue::Unsigned(n) => *n != 0,
            GenericValue::Double(d) => *d != 0.0,
            GenericValue::String(_) => self.try_bool().unwrap_or(false),
            _ => false,
        }
    }

    /// Doubles truncate toward zero (saturating, NaN reads as 0) and
    /// negative signed values wrap.
    pub fn get_unsigned(&self) -> u64 {
        match self {
            GenericValue::Char(c) => *c as u64,
            GenericValue::Bool(b) => *b as u64,
            GenericValue::Signed(n) => *n as u64,
            GenericValue::Unsigned(n) => *n,
            GenericValue::Double(d) => *d as u64,
            GenericValue::String(_) => self.try_unsigned().unwrap_or(0),
            _ => 0,
        }
    }

    pub fn get_signed(&self) -> i64 {
        match self {
            GenericValue::Char(c) => *c as i64,
            GenericValue::Bool(b) => *b as i64,
            GenericValue::Signed(n) => *n,
            GenericValue::Unsigned(n) => *n as i64,
            GenericValue::Double(d) => *d as i64,
            GenericValue::String(_) => self.try_signed().unwrap_or(0),
            _ => 0,
        }
    }

    pub fn get_double(&self) -> f64 {
        match self {
            GenericValue::Char(c) => *c as u32 as f64,
            GenericValue::Bool(b) => *b as u8 as f64,
            GenericValue::Signed(n) => *n as f64,
            GenericValue::Unsigned(n) => *n as f64,
            GenericValue::Double(d) => *d,
            GenericValue::String(_) => self.try_double().unwrap_or(0.0),
            _ => 0.0,
        }
    }

    // ===== Checked =====

    pub fn try_char(&self) -> Result<char, ValueError> {
        match self {
            GenericValue::Char(c) => Ok(*c),
            GenericValue::Bool(b) => Ok(char::from(*b as u8)),
            GenericValue::Signed(_) | GenericValue::Unsigned(_) | GenericValue::Double(_) => {
                let code = self.try_unsigned()?;
                u32::try_from(code)
                    .ok()
                    .and_then(char::from_u32)
                    .ok_or_else(|| {
                        ValueError::out_of_range(
                            format!("{} is not a valid code point", code),
                            "char",
                        )
                    })
            }
            GenericValue::String(s) => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(c),
                    _ => Err(ValueError::parse(s, "char")),
                }
            }
            _ => Err(ValueError::type_mismatch(Tag::Char, self.tag())),
        }
    }

    /// Strings accept `true`/`false` in any ASCII case, or any number.
    pub fn try_bool(&self) -> Result<bool, ValueError> {
        match self {
            GenericValue::String(s) => {
                let text = s.trim();
                if text.eq_ignore_ascii_case("true") {
                    Ok(true)
                } else if text.eq_ignore_ascii_case("false") {
                    Ok(false)
                } else {
                    parse_double(text)
                        .map(|d| d != 0.0)
                        .map_err(|_| ValueError::parse(s, "bool"))
                }
            }
            GenericValue::Null | GenericValue::Array(_) | GenericValue::Object(_) => {
                Err(ValueError::type_mismatch(Tag::Bool, self.tag()))
            }
            _ => Ok(self.get_bool()),
        }
    }

    pub fn try_unsigned(&self) -> Result<u64, ValueError> {
        match self {
            GenericValue::Char(c) => Ok(*c as u64),
            GenericValue::Bool(b) => Ok(*b as u64),
            GenericValue::Signed(n) => u64::try_from(*n)
                .map_err(|_| ValueError::out_of_range(format!("{} is negative", n), "u64")),
            GenericValue::Unsigned(n) => Ok(*n),
            GenericValue::Double(d) => double_to_unsigned(*d),
            GenericValue::String(s) => {
                let text = s.trim();
                match text.parse::<u64>() {
                    Ok(n) => Ok(n),
                    Err(_) => match parse_double(text) {
                        Ok(d) if d.fract() == 0.0 => double_to_unsigned(d),
                        _ => Err(ValueError::parse(s, "u64")),
                    },
                }
            }
            _ => Err(ValueError::type_mismatch(Tag::Unsigned, self.tag())),
        }
    }

    pub fn try_signed(&self) -> Result<i64, ValueError> {
        match self {
            GenericValue::Char(c) => Ok(*c as i64),
            GenericValue::Bool(b) => Ok(*b as i64),
            GenericValue::Signed(n) => Ok(*n),
            GenericValue::Unsigned(n) => i64::try_from(*n)
                .map_err(|_| ValueError::out_of_range(format!("{} exceeds i64::MAX", n), "i64")),
            GenericValue::Double(d) => double_to_signed(*d),
            GenericValue::String(s) => {
                let text = s.trim();
                match text.parse::<i64>() {
                    Ok(n) => Ok(n),
                    Err(_) => match parse_double(text) {
                        Ok(d) if d.fract() == 0.0 => double_to_signed(d),
                        _ => Err(ValueError::parse(s, "i64")),
                    },
                }
            }
            _ => Err(ValueError::type_mismatch(Tag::Signed, self.tag())),
        }
    }

    pub fn try_double(&self) -> Result<f64, ValueError> {
        match self {
            GenericValue::String(s) => {
                parse_double(s.trim()).map_err(|_| ValueError::parse(s, "f64"))
            }
            GenericValue::Null | GenericValue::Array(_) | GenericValue::Object(_) => {
                Err(ValueError::type_mismatch(Tag::Double, self.tag()))
            }
            _ => Ok(self.get_double()),
        }
    }
}

fn parse_double(text: &str) -> Result<f64, std::num::ParseFloatError> {
    text.parse::<f64>()
}

// 2^64 and 2^63 are exact in f64; anything at or past them does not fit.
const U64_LIMIT: f64 = 18_446_744_073_709_551_616.0;
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

fn double_to_unsigned(d: f64) -> Result<u64, ValueError> {
    let t = d.trunc();
    if t.is_finite() && t >= 0.0 && t < U64_LIMIT {
        Ok(t as u64)
    } else {
        Err(ValueError::out_of_range(format!("{} does not fit", d), "u64"))
    }
}

fn double_to_signed(d: f64) -> Result<i64, ValueError> {
    let t = d.trunc();
    if t.is_finite() && t >= -I64_LIMIT && t < I64_LIMIT {
        Ok(t as i64)
    } else {
        Err(ValueError::out_of_range(format!("{} does not fit", d), "i64"))
    }
}

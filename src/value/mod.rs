// Author: Dustin Pilgrim
// License: MIT

use std::fmt;
use std::mem;

use indexmap::IndexMap;

mod access;
mod coerce;
mod serde_impl;

/// Ordered sequence payload of an `Array` value.
pub type GenericArray = Vec<GenericValue>;

/// Insertion-ordered mapping payload of an `Object` value. Keys are unique.
pub type GenericObject = IndexMap<String, GenericValue>;

/// Discriminant of a [`GenericValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Null,
    Char,
    Bool,
    Signed,
    Unsigned,
    Double,
    String,
    Array,
    Object,
}

impl Tag {
    pub fn as_str(self) -> &'static str {
        match self {
            Tag::Null => "null",
            Tag::Char => "char",
            Tag::Bool => "bool",
            Tag::Signed => "signed",
            Tag::Unsigned => "unsigned",
            Tag::Double => "double",
            Tag::String => "string",
            Tag::Array => "array",
            Tag::Object => "object",
        }
    }

    /// `true` for the tags whose payload lives on the heap.
    pub fn is_heap(self) -> bool {
        matches!(self, Tag::String | Tag::Array | Tag::Object)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A dynamically-tagged value: null, a scalar, a string, an array or an object.
///
/// Integer and floating point inputs are canonicalized on construction: every
/// unsigned width becomes [`GenericValue::Unsigned`], every signed width
/// [`GenericValue::Signed`] and both float widths [`GenericValue::Double`].
/// Narrowing back to a concrete width is the job of the
/// [`Encoder`](crate::Encoder) for that type.
///
/// Heap payloads are owned by exactly one value. `clone` is a deep copy and
/// [`take`](GenericValue::take) moves the content out, leaving `Null` behind.
#[derive(Debug, PartialEq, Default)]
pub enum GenericValue {
    #[default]
    Null,
    Char(char),
    Bool(bool),
    Signed(i64),
    Unsigned(u64),
    Double(f64),
    String(String),
    Array(GenericArray),
    Object(GenericObject),
}

pub(crate) static NULL: GenericValue = GenericValue::Null;

impl GenericValue {
    pub fn tag(&self) -> Tag {
        match self {
            GenericValue::Null => Tag::Null,
            GenericValue::Char(_) => Tag::Char,
            GenericValue::Bool(_) => Tag::Bool,
            GenericValue::Signed(_) => Tag::Signed,
            GenericValue::Unsigned(_) => Tag::Unsigned,
            GenericValue::Double(_) => Tag::Double,
            GenericValue::String(_) => Tag::String,
            GenericValue::Array(_) => Tag::Array,
            GenericValue::Object(_) => Tag::Object,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, GenericValue::Null)
    }

    pub fn is_char(&self) -> bool {
        matches!(self, GenericValue::Char(_))
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, GenericValue::Bool(_))
    }

    pub fn is_signed(&self) -> bool {
        matches!(self, GenericValue::Signed(_))
    }

    pub fn is_unsigned(&self) -> bool {
        matches!(self, GenericValue::Unsigned(_))
    }

    pub fn is_double(&self) -> bool {
        matches!(self, GenericValue::Double(_))
    }

    /// Signed, Unsigned or Double.
    pub fn is_number(&self) -> bool {
        matches!(
            self,
            GenericValue::Signed(_) | GenericValue::Unsigned(_) | GenericValue::Double(_)
        )
    }

    pub fn is_string(&self) -> bool {
        matches!(self, GenericValue::String(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, GenericValue::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, GenericValue::Object(_))
    }

    // ===== Transitions =====

    /// Drop any payload and become `Null`.
    pub fn set_null(&mut self) {
        *self = GenericValue::Null;
    }

    pub fn set_char(&mut self, value: char) -> &mut char {
        match self {
            GenericValue::Char(c) => {
                *c = value;
                c
            }
            other => {
                *other = GenericValue::Char(value);
                other.set_char(value)
            }
        }
    }

    pub fn set_bool(&mut self, value: bool) -> &mut bool {
        match self {
            GenericValue::Bool(b) => {
                *b = value;
                b
            }
            other => {
                *other = GenericValue::Bool(value);
                other.set_bool(value)
            }
        }
    }

    pub fn set_signed(&mut self, value: i64) -> &mut i64 {
        match self {
            GenericValue::Signed(n) => {
                *n = value;
                n
            }
            other => {
                *other = GenericValue::Signed(value);
                other.set_signed(value)
            }
        }
    }

    pub fn set_unsigned(&mut self, value: u64) -> &mut u64 {
        match self {
            GenericValue::Unsigned(n) => {
                *n = value;
                n
            }
            other => {
                *other = GenericValue::Unsigned(value);
                other.set_unsigned(value)
            }
        }
    }

    pub fn set_double(&mut self, value: f64) -> &mut f64 {
        match self {
            GenericValue::Double(d) => {
                *d = value;
                d
            }
            other => {
                *other = GenericValue::Double(value);
                other.set_double(value)
            }
        }
    }

    /// Become an empty `String`.
    ///
    /// An existing String payload is cleared in place so its buffer is reused.
    pub fn set_string(&mut self) -> &mut String {
        match self {
            GenericValue::String(s) => {
                s.clear();
                s
            }
            other => {
                *other = GenericValue::String(String::new());
                other.set_string()
            }
        }
    }

    /// Become an empty `Array`, reusing an existing Array allocation.
    pub fn set_array(&mut self) -> &mut GenericArray {
        match self {
            GenericValue::Array(items) => {
                items.clear();
                items
            }
            other => {
                *other = GenericValue::Array(GenericArray::new());
                other.set_array()
            }
        }
    }

    /// Become an empty `Object`, reusing an existing Object allocation.
    pub fn set_object(&mut self) -> &mut GenericObject {
        match self {
            GenericValue::Object(fields) => {
                fields.clear();
                fields
            }
            other => {
                *other = GenericValue::Object(GenericObject::new());
                other.set_object()
            }
        }
    }

    // ===== Ownership =====

    /// Move the content out, leaving `Null` in its place.
    pub fn take(&mut self) -> GenericValue {
        mem::take(self)
    }

    /// Store `value` and return what was there before.
    pub fn replace(&mut self, value: GenericValue) -> GenericValue {
        mem::replace(self, value)
    }

    pub fn into_string(self) -> Option<String> {
        match self {
            GenericValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn into_array(self) -> Option<GenericArray> {
        match self {
            GenericValue::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn into_object(self) -> Option<GenericObject> {
        match self {
            GenericValue::Object(fields) => Some(fields),
            _ => None,
        }
    }
}

impl Clone for GenericValue {
    fn clone(&self) -> Self {
        match self {
            GenericValue::Null => GenericValue::Null,
            GenericValue::Char(c) => GenericValue::Char(*c),
            GenericValue::Bool(b) => GenericValue::Bool(*b),
            GenericValue::Signed(n) => GenericValue::Signed(*n),
            GenericValue::Unsigned(n) => GenericValue::Unsigned(*n),
            GenericValue::Double(d) => GenericValue::Double(*d),
            GenericValue::String(s) => GenericValue::String(s.clone()),
            GenericValue::Array(items) => GenericValue::Array(items.clone()),
            GenericValue::Object(fields) => GenericValue::Object(fields.clone()),
        }
    }

    /// Deep copy that keeps the destination's buffer when both sides hold
    /// the same heap kind.
    fn clone_from(&mut self, source: &Self) {
        match (self, source) {
            (GenericValue::String(dst), GenericValue::String(src)) => dst.clone_from(src),
            (GenericValue::Array(dst), GenericValue::Array(src)) => dst.clone_from(src),
            (GenericValue::Object(dst), GenericValue::Object(src)) => dst.clone_from(src),
            (dst, src) => *dst = src.clone(),
        }
    }
}

// ===== Construction =====

macro_rules! from_unsigned {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for GenericValue {
                fn from(value: $ty) -> Self {
                    GenericValue::Unsigned(value as u64)
                }
            }
        )*
    };
}

macro_rules! from_signed {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for GenericValue {
                fn from(value: $ty) -> Self {
                    GenericValue::Signed(value as i64)
                }
            }
        )*
    };
}

from_unsigned!(u8, u16, u32, u64, usize);
from_signed!(i8, i16, i32, i64, isize);

impl From<f32> for GenericValue {
    fn from(value: f32) -> Self {
        GenericValue::Double(value as f64)
    }
}

impl From<f64> for GenericValue {
    fn from(value: f64) -> Self {
        GenericValue::Double(value)
    }
}

impl From<char> for GenericValue {
    fn from(value: char) -> Self {
        GenericValue::Char(value)
    }
}

impl From<bool> for GenericValue {
    fn from(value: bool) -> Self {
        GenericValue::Bool(value)
    }
}

impl From<()> for GenericValue {
    fn from(_: ()) -> Self {
        GenericValue::Null
    }
}

impl From<&str> for GenericValue {
    fn from(value: &str) -> Self {
        GenericValue::String(value.to_string())
    }
}

impl From<String> for GenericValue {
    fn from(value: String) -> Self {
        GenericValue::String(value)
    }
}

impl From<GenericArray> for GenericValue {
    fn from(value: GenericArray) -> Self {
        GenericValue::Array(value)
    }
}

impl From<GenericObject> for GenericValue {
    fn from(value: GenericObject) -> Self {
        GenericValue::Object(value)
    }
}

impl FromIterator<GenericValue> for GenericValue {
    fn from_iter<I: IntoIterator<Item = GenericValue>>(iter: I) -> Self {
        GenericValue::Array(iter.into_iter().collect())
    }
}

impl<K: Into<String>> FromIterator<(K, GenericValue)> for GenericValue {
    fn from_iter<I: IntoIterator<Item = (K, GenericValue)>>(iter: I) -> Self {
        GenericValue::Object(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

// ===== Display =====

/// Compact JSON-like rendering for diagnostics. Not a wire format.
impl fmt::Display for GenericValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenericValue::Null => f.write_str("null"),
            GenericValue::Char(c) => write!(f, "{:?}", c),
            GenericValue::Bool(b) => write!(f, "{}", b),
            GenericValue::Signed(n) => write!(f, "{}", n),
            GenericValue::Unsigned(n) => write!(f, "{}", n),
            GenericValue::Double(d) => write!(f, "{:?}", d),
            GenericValue::String(s) => write!(f, "{:?}", s),
            GenericValue::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            GenericValue::Object(fields) => {
                f.write_str("{")?;
                for (i, (key, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{:?}: {}", key, value)?;
                }
                f.write_str("}")
            }
        }
    }
}

#[cfg(test)]
mod tests;

// Author: Dustin Pilgrim
// License: MIT

//! Compile-time conversion between native types and [`GenericValue`].
//!
//! Each supported type implements [`Encoder`] once. Containers are generic
//! over any element type that is itself an `Encoder`, so supporting a new
//! type never requires touching the value model or a format.
//!
//! # Examples
//! ```
//! use tagged_value::{decode, encode, GenericValue};
//!
//! let value = encode(&vec![1i32, -2, 3]);
//! assert!(value.is_array());
//! assert_eq!(value[1], GenericValue::Signed(-2));
//!
//! let back: Vec<i32> = decode(&value)?;
//! assert_eq!(back, vec![1, -2, 3]);
//! # Ok::<(), tagged_value::ValueError>(())
//! ```

use crate::{GenericValue, ValueError};

mod containers;
mod scalars;

/// A native type with a fixed mapping to and from [`GenericValue`].
pub trait Encoder: Sized {
    fn encode(&self) -> GenericValue;

    /// # Errors
    /// Returns a [`ValueError`] when `value` cannot be represented as `Self`.
    fn decode(value: &GenericValue) -> Result<Self, ValueError>;
}

pub fn encode<T: Encoder>(value: &T) -> GenericValue {
    value.encode()
}

pub fn decode<T: Encoder>(value: &GenericValue) -> Result<T, ValueError> {
    T::decode(value)
}

impl Encoder for GenericValue {
    fn encode(&self) -> GenericValue {
        self.clone()
    }

    fn decode(value: &GenericValue) -> Result<Self, ValueError> {
        Ok(value.clone())
    }
}

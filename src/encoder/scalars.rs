// Author: Dustin Pilgrim
// License: MIT

use super::Encoder;
use crate::{GenericValue, Tag, ValueError};

impl Encoder for char {
    fn encode(&self) -> GenericValue {
        GenericValue::Char(*self)
    }

    fn decode(value: &GenericValue) -> Result<Self, ValueError> {
        value.try_char()
    }
}

impl Encoder for bool {
    fn encode(&self) -> GenericValue {
        GenericValue::Bool(*self)
    }

    fn decode(value: &GenericValue) -> Result<Self, ValueError> {
        value.try_bool()
    }
}

// Every unsigned width shares the Unsigned tag and narrows on the way out.
macro_rules! unsigned_encoder {
    ($($ty:ty),*) => {
        $(
            impl Encoder for $ty {
                fn encode(&self) -> GenericValue {
                    GenericValue::Unsigned(*self as u64)
                }

                fn decode(value: &GenericValue) -> Result<Self, ValueError> {
                    let n = value.try_unsigned()?;
                    <$ty>::try_from(n).map_err(|_| {
                        ValueError::out_of_range(
                            format!("{} out of range for {}", n, stringify!($ty)),
                            stringify!($ty),
                        )
                    })
                }
            }
        )*
    };
}

macro_rules! signed_encoder {
    ($($ty:ty),*) => {
        $(
            impl Encoder for $ty {
                fn encode(&self) -> GenericValue {
                    GenericValue::Signed(*self as i64)
                }

                fn decode(value: &GenericValue) -> Result<Self, ValueError> {
                    let n = value.try_signed()?;
                    <$ty>::try_from(n).map_err(|_| {
                        ValueError::out_of_range(
                            format!("{} out of range for {}", n, stringify!($ty)),
                            stringify!($ty),
                        )
                    })
                }
            }
        )*
    };
}

unsigned_encoder!(u8, u16, u32, u64, usize);
signed_encoder!(i8, i16, i32, i64, isize);

impl Encoder for f64 {
    fn encode(&self) -> GenericValue {
        GenericValue::Double(*self)
    }

    fn decode(value: &GenericValue) -> Result<Self, ValueError> {
        value.try_double()
    }
}

impl Encoder for f32 {
    fn encode(&self) -> GenericValue {
        GenericValue::Double(*self as f64)
    }

    fn decode(value: &GenericValue) -> Result<Self, ValueError> {
        value.try_double().map(|d| d as f32)
    }
}

/// Scalars render as text; `Null`, arrays and objects are rejected.
impl Encoder for String {
    fn encode(&self) -> GenericValue {
        GenericValue::String(self.clone())
    }

    fn decode(value: &GenericValue) -> Result<Self, ValueError> {
        match value {
            GenericValue::String(s) => Ok(s.clone()),
            GenericValue::Char(c) => Ok(c.to_string()),
            GenericValue::Bool(b) => Ok(b.to_string()),
            GenericValue::Signed(n) => Ok(n.to_string()),
            GenericValue::Unsigned(n) => Ok(n.to_string()),
            GenericValue::Double(d) => Ok(d.to_string()),
            _ => Err(ValueError::type_mismatch(Tag::String, value.tag())),
        }
    }
}

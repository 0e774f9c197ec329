use std::fmt;

use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use super::{GenericArray, GenericObject, GenericValue};

impl Serialize for GenericValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            GenericValue::Null => serializer.serialize_unit(),
            GenericValue::Char(c) => serializer.serialize_char(*c),
            GenericValue::Bool(b) => serializer.serialize_bool(*b),
            GenericValue::Signed(n) => serializer.serialize_i64(*n),
            GenericValue::Unsigned(n) => serializer.serialize_u64(*n),
            GenericValue::Double(d) => serializer.serialize_f64(*d),
            GenericValue::String(s) => serializer.serialize_str(s),
            GenericValue::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            GenericValue::Object(fields) => {
                let mut map = serializer.serialize_map(Some(fields.len()))?;
                for (key, value) in fields {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

struct GenericValueVisitor;

impl<'de> Visitor<'de> for GenericValueVisitor {
    type Value = GenericValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any value")
    }

    fn visit_unit<E: de::Error>(self) -> Result<GenericValue, E> {
        Ok(GenericValue::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<GenericValue, E> {
        Ok(GenericValue::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<GenericValue, D::Error> {
        GenericValue::deserialize(deserializer)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<GenericValue, E> {
        Ok(GenericValue::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<GenericValue, E> {
        Ok(GenericValue::Signed(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<GenericValue, E> {
        Ok(GenericValue::Unsigned(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<GenericValue, E> {
        Ok(GenericValue::Double(v))
    }

    fn visit_char<E: de::Error>(self, v: char) -> Result<GenericValue, E> {
        Ok(GenericValue::Char(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<GenericValue, E> {
        Ok(GenericValue::String(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<GenericValue, E> {
        Ok(GenericValue::String(v))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<GenericValue, A::Error> {
        let mut items = GenericArray::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(GenericValue::Array(items))
    }

    /// Duplicate keys keep their first position and the last value.
    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<GenericValue, A::Error> {
        let mut fields = GenericObject::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((key, value)) = map.next_entry::<String, GenericValue>()? {
            fields.insert(key, value);
        }
        Ok(GenericValue::Object(fields))
    }
}

impl<'de> Deserialize<'de> for GenericValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<GenericValue, D::Error> {
        deserializer.deserialize_any(GenericValueVisitor)
    }
}

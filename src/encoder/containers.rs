use std::collections::{BTreeMap, HashMap, VecDeque};
use std::hash::BuildHasher;

use indexmap::IndexMap;

use super::Encoder;
use crate::{GenericObject, GenericValue, Tag, ValueError};

fn encode_seq<'a, T, I>(items: I) -> GenericValue
where
    T: Encoder + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut value = GenericValue::Null;
    let array = value.set_array();
    array.extend(items.into_iter().map(T::encode));
    value
}

/// Decodes an Array element by element. Any other tag reads as empty.
fn decode_seq<T, C>(value: &GenericValue) -> Result<C, ValueError>
where
    T: Encoder,
    C: Default + Extend<T>,
{
    let mut container = C::default();
    if let GenericValue::Array(items) = value {
        for (index, item) in items.iter().enumerate() {
            let decoded = T::decode(item).map_err(|e| e.at_element(index))?;
            container.extend(Some(decoded));
        }
    }
    Ok(container)
}

impl<T: Encoder> Encoder for Vec<T> {
    fn encode(&self) -> GenericValue {
        encode_seq(self)
    }

    fn decode(value: &GenericValue) -> Result<Self, ValueError> {
        decode_seq::<T, Vec<T>>(value)
    }
}

impl<T: Encoder> Encoder for VecDeque<T> {
    fn encode(&self) -> GenericValue {
        encode_seq(self)
    }

    fn decode(value: &GenericValue) -> Result<Self, ValueError> {
        decode_seq::<T, VecDeque<T>>(value)
    }
}

/// `None` is `Null`.
impl<T: Encoder> Encoder for Option<T> {
    fn encode(&self) -> GenericValue {
        match self {
            Some(inner) => inner.encode(),
            None => GenericValue::Null,
        }
    }

    fn decode(value: &GenericValue) -> Result<Self, ValueError> {
        match value {
            GenericValue::Null => Ok(None),
            v => Ok(Some(T::decode(v)?)),
        }
    }
}

impl<T: Encoder> Encoder for Box<T> {
    fn encode(&self) -> GenericValue {
        (**self).encode()
    }

    fn decode(value: &GenericValue) -> Result<Self, ValueError> {
        T::decode(value).map(Box::new)
    }
}

// ===== Mappings =====

fn encode_map<'a, T, I>(entries: I) -> GenericValue
where
    T: Encoder + 'a,
    I: IntoIterator<Item = (&'a String, &'a T)>,
{
    let mut value = GenericValue::Null;
    let fields = value.set_object();
    for (key, item) in entries {
        fields.insert(key.clone(), item.encode());
    }
    value
}

fn decode_map<T, M>(value: &GenericValue) -> Result<M, ValueError>
where
    T: Encoder,
    M: Default + Extend<(String, T)>,
{
    let fields: &GenericObject = value
        .as_object()
        .ok_or_else(|| ValueError::type_mismatch(Tag::Object, value.tag()))?;
    let mut out = M::default();
    for (key, item) in fields {
        let decoded = T::decode(item).map_err(|e| e.at_field(key))?;
        out.extend(Some((key.clone(), decoded)));
    }
    Ok(out)
}

impl<T: Encoder> Encoder for IndexMap<String, T> {
    fn encode(&self) -> GenericValue {
        encode_map(self)
    }

    fn decode(value: &GenericValue) -> Result<Self, ValueError> {
        decode_map::<T, IndexMap<String, T>>(value)
    }
}

impl<T: Encoder> Encoder for BTreeMap<String, T> {
    fn encode(&self) -> GenericValue {
        encode_map(self)
    }

    fn decode(value: &GenericValue) -> Result<Self, ValueError> {
        decode_map::<T, BTreeMap<String, T>>(value)
    }
}

impl<T, S> Encoder for HashMap<String, T, S>
where
    T: Encoder,
    S: BuildHasher + Default,
{
    fn encode(&self) -> GenericValue {
        encode_map(self)
    }

    fn decode(value: &GenericValue) -> Result<Self, ValueError> {
        decode_map::<T, HashMap<String, T, S>>(value)
    }
}

use std::ops::Index;

use super::{GenericArray, GenericObject, GenericValue, NULL, Tag};
use crate::ValueError;

impl GenericValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            GenericValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_string_mut(&mut self) -> Option<&mut String> {
        match self {
            GenericValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&GenericArray> {
        match self {
            GenericValue::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut GenericArray> {
        match self {
            GenericValue::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&GenericObject> {
        match self {
            GenericValue::Object(fields) => Some(fields),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut GenericObject> {
        match self {
            GenericValue::Object(fields) => Some(fields),
            _ => None,
        }
    }

    /// Number of elements, entries or characters. Scalars and `Null` are 0.
    pub fn len(&self) -> usize {
        match self {
            GenericValue::String(s) => s.chars().count(),
            GenericValue::Array(items) => items.len(),
            GenericValue::Object(fields) => fields.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // ===== Element access =====

    pub fn get(&self, index: usize) -> Option<&GenericValue> {
        self.as_array().and_then(|items| items.get(index))
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut GenericValue> {
        self.as_array_mut().and_then(|items| items.get_mut(index))
    }

    pub fn get_key(&self, key: &str) -> Option<&GenericValue> {
        self.as_object().and_then(|fields| fields.get(key))
    }

    pub fn get_key_mut(&mut self, key: &str) -> Option<&mut GenericValue> {
        self.as_object_mut().and_then(|fields| fields.get_mut(key))
    }

    /// Checked array access.
    ///
    /// # Errors
    /// `TypeMismatch` if this is not an Array, `IndexOutOfBounds` past the end.
    pub fn at(&self, index: usize) -> Result<&GenericValue, ValueError> {
        let items = self
            .as_array()
            .ok_or_else(|| ValueError::type_mismatch(Tag::Array, self.tag()))?;
        items.get(index).ok_or(ValueError::IndexOutOfBounds {
            index,
            len: items.len(),
            code: Some(420),
        })
    }

    pub fn at_mut(&mut self, index: usize) -> Result<&mut GenericValue, ValueError> {
        let tag = self.tag();
        let items = self
            .as_array_mut()
            .ok_or_else(|| ValueError::type_mismatch(Tag::Array, tag))?;
        let len = items.len();
        items.get_mut(index).ok_or(ValueError::IndexOutOfBounds {
            index,
            len,
            code: Some(420),
        })
    }

    /// Checked object access.
    ///
    /// # Errors
    /// `TypeMismatch` if this is not an Object, `MissingKey` if absent.
    pub fn at_key(&self, key: &str) -> Result<&GenericValue, ValueError> {
        self.as_object()
            .ok_or_else(|| ValueError::type_mismatch(Tag::Object, self.tag()))?
            .get(key)
            .ok_or_else(|| ValueError::MissingKey {
                key: key.to_string(),
                code: Some(421),
            })
    }

    pub fn at_key_mut(&mut self, key: &str) -> Result<&mut GenericValue, ValueError> {
        let tag = self.tag();
        self.as_object_mut()
            .ok_or_else(|| ValueError::type_mismatch(Tag::Object, tag))?
            .get_mut(key)
            .ok_or_else(|| ValueError::MissingKey {
                key: key.to_string(),
                code: Some(421),
            })
    }

    /// Append to an Array.
    pub fn push(&mut self, value: impl Into<GenericValue>) -> Result<(), ValueError> {
        let tag = self.tag();
        let items = self
            .as_array_mut()
            .ok_or_else(|| ValueError::type_mismatch(Tag::Array, tag))?;
        items.push(value.into());
        Ok(())
    }

    /// Insert into an Object, returning the value previously under `key`.
    ///
    /// A replaced key keeps its original position.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<GenericValue>,
    ) -> Result<Option<GenericValue>, ValueError> {
        let tag = self.tag();
        let fields = self
            .as_object_mut()
            .ok_or_else(|| ValueError::type_mismatch(Tag::Object, tag))?;
        Ok(fields.insert(key.into(), value.into()))
    }
}

/// Misses (wrong tag or out of range) yield `Null` rather than panicking.
impl Index<usize> for GenericValue {
    type Output = GenericValue;

    fn index(&self, index: usize) -> &GenericValue {
        self.get(index).unwrap_or(&NULL)
    }
}

impl Index<&str> for GenericValue {
    type Output = GenericValue;

    fn index(&self, key: &str) -> &GenericValue {
        self.get_key(key).unwrap_or(&NULL)
    }
}

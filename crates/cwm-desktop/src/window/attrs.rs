//! Key-value attribute stores attached to a window

use std::collections::HashMap;
use serde::{Deserialize, Serialize};
use crate::math::Vec2;

/// Value stored under a window attribute
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum AttrValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Point(Vec2),
}

impl AttrValue {
    /// Get the point payload, if this is a point
    pub fn as_point(&self) -> Option<Vec2> {
        match self {
            AttrValue::Point(p) => Some(*p),
            _ => None,
        }
    }
}

impl From<bool> for AttrValue {
    fn from(v: bool) -> Self {
        AttrValue::Bool(v)
    }
}

impl From<i64> for AttrValue {
    fn from(v: i64) -> Self {
        AttrValue::Int(v)
    }
}

impl From<f64> for AttrValue {
    fn from(v: f64) -> Self {
        AttrValue::Float(v)
    }
}

impl From<&str> for AttrValue {
    fn from(v: &str) -> Self {
        AttrValue::Text(v.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(v: String) -> Self {
        AttrValue::Text(v)
    }
}

impl From<Vec2> for AttrValue {
    fn from(v: Vec2) -> Self {
        AttrValue::Point(v)
    }
}

/// A string-keyed attribute map
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AttrStore {
    values: HashMap<String, AttrValue>,
}

impl AttrStore {
    /// Look up an attribute
    #[inline]
    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.values.get(name)
    }

    /// Store an attribute, replacing any previous value
    pub fn set(&mut self, name: impl Into<String>, value: AttrValue) {
        self.values.insert(name.into(), value);
    }

    /// Drop every attribute
    #[inline]
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Number of stored attributes
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the store holds nothing
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

//! Attribute bags attached to nodes and edges.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A scalar attribute value.
///
/// Surface-adjacency data carries strings (`type`, `angular_type`), booleans
/// (`cavity`) and occasionally integer counts, so the value type is a small
/// tagged variant rather than a free-form dynamic value. The untagged serde
/// representation maps plain JSON scalars straight onto the variants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    /// Boolean flag, e.g. `cavity`.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// String label, e.g. `type` or `angular_type`.
    Str(String),
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Str(s) => write!(f, "{s}"),
        }
    }
}

/// An insertion-ordered mapping from attribute name to scalar value.
///
/// Lookups are permissive: a missing attribute is reported as `None`, a
/// distinct "absent" value, never an error. Compatibility predicates rely on
/// this to compare bags that do not declare the same attribute set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes {
    entries: IndexMap<String, AttrValue>,
}

impl Attributes {
    /// Creates an empty attribute bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up an attribute by name, `None` if absent.
    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.entries.get(name)
    }

    /// Returns true if the attribute is present.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Inserts an attribute, returning the previous value if any.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<AttrValue>,
    ) -> Option<AttrValue> {
        self.entries.insert(name.into(), value.into())
    }

    /// Chaining form of [`Attributes::insert`], for building bags inline.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Number of attributes in the bag.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the bag holds no attributes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<AttrValue>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

//! Ordered key-value tree used as the external item representation
//!
//! A `ConfigNode` behaves like one section of a YAML document: keys keep
//! their insertion order, values are scalars, lists or child sections.
//! The scalar getters are lenient in the same way hand-edited configs need
//! them to be (numbers written as text, booleans written as "true").

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single value stored under a key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<ConfigValue>),
    Section(ConfigNode),
}

impl ConfigValue {
    /// Returns the value as text, if it is a scalar
    ///
    /// Numbers and booleans are rendered the way they would appear in a file.
    pub fn as_text(&self) -> Option<String> {
        match self {
            ConfigValue::Text(s) => Some(s.clone()),
            ConfigValue::Int(i) => Some(i.to_string()),
            ConfigValue::Float(f) => Some(f.to_string()),
            ConfigValue::Bool(b) => Some(b.to_string()),
            ConfigValue::List(_) | ConfigValue::Section(_) => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            ConfigValue::Int(i) => Some(*i),
            ConfigValue::Float(f) => Some(*f as i64),
            ConfigValue::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Returns the value as a finite float
    ///
    /// NaN and infinities are rejected: JSON has no spelling for them.
    pub fn as_float(&self) -> Option<f64> {
        let value = match self {
            ConfigValue::Float(f) => *f,
            ConfigValue::Int(i) => *i as f64,
            ConfigValue::Text(s) => s.trim().parse().ok()?,
            _ => return None,
        };
        Some(value).filter(|f| f.is_finite())
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConfigValue::Bool(b) => Some(*b),
            ConfigValue::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn as_section(&self) -> Option<&ConfigNode> {
        match self {
            ConfigValue::Section(node) => Some(node),
            _ => None,
        }
    }

    /// Turns the value into an empty section unless it already is one
    fn make_section(&mut self) -> &mut ConfigNode {
        match self {
            ConfigValue::Section(node) => node,
            other => {
                *other = ConfigValue::Section(ConfigNode::new());
                other.make_section()
            }
        }
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        ConfigValue::Bool(value)
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        ConfigValue::Int(value)
    }
}

impl From<i32> for ConfigValue {
    fn from(value: i32) -> Self {
        ConfigValue::Int(value.into())
    }
}

impl From<u32> for ConfigValue {
    fn from(value: u32) -> Self {
        ConfigValue::Int(value.into())
    }
}

impl From<u8> for ConfigValue {
    fn from(value: u8) -> Self {
        ConfigValue::Int(value.into())
    }
}

impl From<f64> for ConfigValue {
    fn from(value: f64) -> Self {
        ConfigValue::Float(value)
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        ConfigValue::Text(value.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        ConfigValue::Text(value)
    }
}

impl From<Vec<String>> for ConfigValue {
    fn from(value: Vec<String>) -> Self {
        ConfigValue::List(value.into_iter().map(ConfigValue::Text).collect())
    }
}

impl From<ConfigNode> for ConfigValue {
    fn from(value: ConfigNode) -> Self {
        ConfigValue::Section(value)
    }
}

/// An ordered, string-keyed tree node
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigNode {
    entries: IndexMap<String, ConfigValue>,
}

impl ConfigNode {
    /// Creates an empty node
    pub fn new() -> Self {
        ConfigNode {
            entries: IndexMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if a value of any type is stored under `key`
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.entries.get(key)
    }

    /// Stores a value, replacing whatever was under `key` before
    ///
    /// A replaced key keeps its original position.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<ConfigValue>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<ConfigValue> {
        self.entries.shift_remove(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn get_str(&self, key: &str) -> Option<String> {
        self.get(key)?.as_text()
    }

    pub fn get_int(&self, key: &str) -> Option<i64> {
        self.get(key)?.as_int()
    }

    pub fn get_float(&self, key: &str) -> Option<f64> {
        self.get(key)?.as_float()
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key)?.as_bool()
    }

    /// Reads a list of strings
    ///
    /// A single scalar is accepted as a one-element list, so that
    /// `flags: ALL` and `flags: [ALL]` read the same way.
    pub fn get_string_list(&self, key: &str) -> Option<Vec<String>> {
        match self.get(key)? {
            ConfigValue::List(values) => {
                Some(values.iter().filter_map(ConfigValue::as_text).collect())
            }
            ConfigValue::Section(_) => None,
            scalar => scalar.as_text().map(|s| vec![s]),
        }
    }

    /// Returns the child section stored under `key`
    pub fn section(&self, key: &str) -> Option<&ConfigNode> {
        self.get(key)?.as_section()
    }

    /// Returns the child section under `key`, creating it if needed
    ///
    /// A non-section value stored under `key` is replaced.
    pub fn section_mut(&mut self, key: &str) -> &mut ConfigNode {
        self.entries
            .entry(key.to_string())
            .or_insert_with(|| ConfigValue::Section(ConfigNode::new()))
            .make_section()
    }

    /// Iterates the child sections in key order, skipping scalar entries
    pub fn sections(&self) -> impl Iterator<Item = (&str, &ConfigNode)> {
        self.entries
            .iter()
            .filter_map(|(k, v)| v.as_section().map(|node| (k.as_str(), node)))
    }

    /// Reads a value by dotted path, e.g. `book.title`
    pub fn lookup(&self, path: &str) -> Option<&ConfigValue> {
        let mut parts = path.split('.');
        let mut current = self.get(parts.next()?)?;

        for part in parts {
            current = current.as_section()?.get(part)?;
        }

        Some(current)
    }

    /// Serializes the tree to pretty-printed JSON
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

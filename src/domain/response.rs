use std::fmt;
use std::slice;

use serde::ser::{Serialize, SerializeMap, Serializer};

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
/// Value of one response key.
///
/// A key reported once is [`Value::Single`]; a key reported two or more times
/// (batch sends return one `ID` per message) is [`Value::Multiple`] in the
/// order the gateway sent the lines.
pub enum Value {
    Single(String),
    Multiple(Vec<String>),
}

impl Value {
    /// The value when the key occurred exactly once.
    pub fn as_single(&self) -> Option<&str> {
        match self {
            Self::Single(value) => Some(value),
            Self::Multiple(_) => None,
        }
    }

    /// All occurrences, whether the key was seen once or many times.
    pub fn as_slice(&self) -> &[String] {
        match self {
            Self::Single(value) => slice::from_ref(value),
            Self::Multiple(values) => values,
        }
    }

    /// First occurrence.
    pub fn first(&self) -> &str {
        match self {
            Self::Single(value) => value,
            Self::Multiple(values) => values.first().map(String::as_str).unwrap_or_default(),
        }
    }

    /// Number of occurrences.
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_multiple(&self) -> bool {
        matches!(self, Self::Multiple(_))
    }

    fn push(&mut self, value: String) {
        match self {
            Self::Single(existing) => {
                let first = std::mem::take(existing);
                *self = Self::Multiple(vec![first, value]);
            }
            Self::Multiple(values) => values.push(value),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Successful gateway response: keys in order of first appearance.
pub struct ParsedResponse {
    entries: Vec<(String, Value)>,
}

impl ParsedResponse {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Record one `Key: Value` line, collapsing repeats into [`Value::Multiple`].
    pub(crate) fn push(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| existing.as_str() == key) {
            Some((_, existing)) => existing.push(value),
            None => self.entries.push((key.to_owned(), Value::Single(value))),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(existing, _)| existing.as_str() == key)
            .map(|(_, value)| value)
    }

    /// Value of `key` if it occurred exactly once.
    pub fn single(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_single)
    }

    /// Every occurrence of `key`; empty if the key is absent.
    pub fn all(&self, key: &str) -> &[String] {
        self.get(key).map(Value::as_slice).unwrap_or_default()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Take the ordered entries out of the response.
    pub fn into_inner(self) -> Vec<(String, Value)> {
        self.entries
    }
}

impl IntoIterator for ParsedResponse {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for ParsedResponse {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Failure reported by the gateway through an `ERR` line.
///
/// Most endpoints answer `ERR: <code>, <description>`; some (route coverage)
/// send a bare description, in which case `code` is `None`.
pub struct GatewayError {
    pub code: Option<String>,
    pub message: String,
}

impl GatewayError {
    /// Split the value of an `ERR` line at its first comma.
    pub fn from_err_value(value: &str) -> Self {
        match value.split_once(',') {
            Some((code, message)) => {
                let code = code.trim();
                Self {
                    code: (!code.is_empty()).then(|| code.to_owned()),
                    message: message.trim().to_owned(),
                }
            }
            None => Self {
                code: None,
                message: value.trim().to_owned(),
            },
        }
    }
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.code {
            Some(code) => write!(f, "{} (code {code})", self.message),
            None => f.write_str(&self.message),
        }
    }
}

impl std::error::Error for GatewayError {}

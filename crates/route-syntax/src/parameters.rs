//! Parameter table extracted from a route pattern.

use indexmap::IndexMap;
use rowan::TextRange;
use serde::Serialize;

use crate::diagnostics::serialize_range;

/// A route parameter as the router would register it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteParameter {
    pub name: String,
    /// `false` only for `{**name}` catch-alls.
    pub encode_slashes: bool,
    /// `Some("")` for `{name=}`.
    pub default_value: Option<String>,
    pub is_optional: bool,
    pub is_catch_all: bool,
    /// Policy references in source order, e.g. `["int", "min(1)"]`.
    pub policies: Vec<String>,
    /// Span of the whole `{...}` in the original source.
    #[serde(serialize_with = "serialize_range")]
    pub range: TextRange,
}

/// Parameters keyed by case-insensitive name, in pattern order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterTable {
    entries: IndexMap<String, RouteParameter>,
}

fn key(name: &str) -> String {
    name.to_lowercase()
}

impl ParameterTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `parameter` unless a parameter with the same name (ignoring case) exists.
    /// Returns `false` in that case and keeps the existing entry.
    pub fn insert(&mut self, parameter: RouteParameter) -> bool {
        let key = key(&parameter.name);
        if self.entries.contains_key(&key) {
            return false;
        }
        self.entries.insert(key, parameter);
        true
    }

    pub fn get(&self, name: &str) -> Option<&RouteParameter> {
        self.entries.get(&key(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&key(name))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RouteParameter> + '_ {
        self.entries.values()
    }
}

impl<'a> IntoIterator for &'a ParameterTable {
    type Item = &'a RouteParameter;
    type IntoIter = indexmap::map::Values<'a, String, RouteParameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}

impl Serialize for ParameterTable {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.collect_seq(self.entries.values())
    }
}

//! The entry table: raw values keyed by entry name, as scanned from a file.
//!
//! Values stay as text until the binder asks for a typed field. A top-level
//! key holds either a single scalar string or a group (sub-key → sub-value).
//! Re-inserting a key replaces the old value wholesale and produces a
//! [`Diagnostic`]; groups are never merged.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// The sub-key → sub-value mapping of a bracketed group entry.
pub type Group = BTreeMap<String, String>;

/// A raw entry value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum EntryValue {
    /// `key = value`
    Scalar(String),
    /// `key = [sub: value, ...]`
    Group(Group),
}

impl EntryValue {
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            EntryValue::Scalar(s) => Some(s),
            EntryValue::Group(_) => None,
        }
    }

    pub fn as_group(&self) -> Option<&Group> {
        match self {
            EntryValue::Scalar(_) => None,
            EntryValue::Group(g) => Some(g),
        }
    }
}

/// An advisory notice produced while scanning or binding.
///
/// None of these abort a load. They are logged, optionally echoed to stdout,
/// and returned to the caller in a [`LoadReport`](crate::LoadReport).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// A top-level key appeared more than once; the later value was kept.
    DuplicateEntry { key: String },
    /// A sub-key appeared more than once inside one group.
    DuplicateSubKey { key: String, sub_key: String },
    /// A bound field had no entry and fell back to its declared default.
    DefaultUsed { key: String },
    /// A bound field had no entry and no default; it keeps its zero value.
    MissingEntry { key: String },
}

impl Diagnostic {
    /// Whether this notice means a field was left at its zero value.
    pub fn is_unset_field(&self) -> bool {
        matches!(self, Diagnostic::MissingEntry { .. })
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::DuplicateEntry { key } => {
                write!(f, "Duplicate entry found for '{key}'.")
            }
            Diagnostic::DuplicateSubKey { key, sub_key } => {
                write!(f, "Replacing value for '{key}.{sub_key}'.")
            }
            Diagnostic::DefaultUsed { key } => {
                write!(f, "Can't find config entry '{key}', using its default.")
            }
            Diagnostic::MissingEntry { key } => {
                write!(f, "Can't find config entry '{key}', leaving it unset.")
            }
        }
    }
}

/// Scanned entries, built once per load and dropped after binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryTable {
    entries: BTreeMap<String, EntryValue>,
}

impl EntryTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an entry. Replacing reports a duplicate.
    pub fn insert(&mut self, key: String, value: EntryValue, diagnostics: &mut Vec<Diagnostic>) {
        if self.entries.contains_key(&key) {
            diagnostics.push(Diagnostic::DuplicateEntry { key: key.clone() });
        }
        self.entries.insert(key, value);
    }

    pub fn get(&self, key: &str) -> Option<&EntryValue> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &EntryValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Insert a sub-value into a group, reporting a repeated sub-key.
pub(crate) fn insert_sub(
    group: &mut Group,
    key: &str,
    sub_key: String,
    sub_value: String,
    diagnostics: &mut Vec<Diagnostic>,
) {
    if group.contains_key(&sub_key) {
        diagnostics.push(Diagnostic::DuplicateSubKey {
            key: key.to_string(),
            sub_key: sub_key.clone(),
        });
    }
    group.insert(sub_key, sub_value);
}

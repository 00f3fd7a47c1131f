//! Per-host site settings as pushed on `site-settings-updated`
//!
//! Each host pattern maps to a bag of per-site fields. Permission fields carry
//! a tri-state decision: `true` (always allow), `false` (always deny) or absent.
//! Other per-site fields (zoom level, per-site shields overrides, ...) are
//! kept opaque so an entry's emptiness can still be judged on the whole bag.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::PermissionName;

/// Decisions and other fields recorded for one host pattern
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub struct SiteSettingEntry {
    decisions: BTreeMap<PermissionName, bool>,
    other: BTreeMap<String, Value>,
}

impl SiteSettingEntry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder used by tests and bootstrap fixtures
    pub fn with_decision(mut self, name: PermissionName, granted: bool) -> Self {
        self.decisions.insert(name, granted);
        self
    }

    /// Explicit decision for `name`, `None` when no decision was recorded
    pub fn decision(&self, name: PermissionName) -> Option<bool> {
        self.decisions.get(&name).copied()
    }

    pub fn has_any_decision(&self) -> bool {
        !self.decisions.is_empty()
    }

    /// True when the host carries no fields at all
    pub fn is_empty(&self) -> bool {
        self.decisions.is_empty() && self.other.is_empty()
    }

    /// Number of fields on this entry, permission or not
    pub fn len(&self) -> usize {
        self.decisions.len() + self.other.len()
    }
}

/// A host whose value is not an object carries no fields
impl From<Value> for SiteSettingEntry {
    fn from(raw: Value) -> Self {
        let mut entry = Self::new();
        let Value::Object(fields) = raw else {
            return entry;
        };
        for (field, value) in fields {
            match field.parse::<PermissionName>() {
                Ok(name) => {
                    // null (or any non-boolean) means "no decision"
                    if let Value::Bool(granted) = value {
                        entry.decisions.insert(name, granted);
                    }
                }
                Err(_) => {
                    if !value.is_null() {
                        entry.other.insert(field, value);
                    }
                }
            }
        }
        entry
    }
}

impl Serialize for SiteSettingEntry {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut raw = Map::new();
        for (field, value) in &self.other {
            raw.insert(field.clone(), value.clone());
        }
        for (name, granted) in &self.decisions {
            raw.insert(name.as_str().to_string(), Value::Bool(*granted));
        }
        raw.serialize(serializer)
    }
}

/// Full site-settings snapshot keyed by host pattern
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SiteSettings(BTreeMap<String, SiteSettingEntry>);

impl SiteSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, host_pattern: impl Into<String>, entry: SiteSettingEntry) -> Self {
        self.0.insert(host_pattern.into(), entry);
        self
    }

    pub fn get(&self, host_pattern: &str) -> Option<&SiteSettingEntry> {
        self.0.get(host_pattern)
    }

    /// Entries in host-pattern order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SiteSettingEntry)> {
        self.0.iter().map(|(host, entry)| (host.as_str(), entry))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

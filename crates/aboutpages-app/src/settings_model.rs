//! Local read model of the browser's settings store
//!
//! The page keeps its own copy of the last settings snapshot so it can
//! render immediately and apply edits optimistically. The browser stays the
//! source of truth: every inbound snapshot replaces the model wholesale.

use aboutpages_core::{SettingKey, SettingValue, SettingsSnapshot, UpstreamCommand};
use serde::Deserialize;

/// Owned settings snapshot with get-with-fallback reads
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsReadModel {
    snapshot: SettingsSnapshot,
}

impl SettingsReadModel {
    pub fn new(snapshot: SettingsSnapshot) -> Self {
        Self { snapshot }
    }

    /// Current value for `key`, or `fallback` when the snapshot has none
    pub fn get(&self, key: SettingKey, fallback: impl Into<SettingValue>) -> SettingValue {
        self.snapshot
            .get(key)
            .cloned()
            .unwrap_or_else(|| fallback.into())
    }

    /// Current value, falling back to the key's documented default
    pub fn value_or_default(&self, key: SettingKey) -> Option<SettingValue> {
        self.snapshot.get(key).cloned().or_else(|| key.default_value())
    }

    /// Boolean view used by checkboxes. Non-boolean values read as unchecked.
    pub fn is_enabled(&self, key: SettingKey) -> bool {
        self.value_or_default(key)
            .and_then(|value| value.as_bool())
            .unwrap_or(false)
    }

    /// Apply an edit locally and return the command that persists it.
    ///
    /// The local write is unconditional; there is no acknowledgment to wait
    /// for, and a later snapshot may overwrite it.
    pub fn set(&mut self, key: SettingKey, value: SettingValue) -> UpstreamCommand {
        self.snapshot.insert(key, value.clone());
        UpstreamCommand::ChangeSetting { key, value }
    }

    /// Replace everything with an inbound snapshot
    pub fn replace(&mut self, snapshot: SettingsSnapshot) {
        self.snapshot = snapshot;
    }

    pub fn snapshot(&self) -> &SettingsSnapshot {
        &self.snapshot
    }
}

/// Declared type of a select box whose option values are numeric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    Number,
    Float,
}

/// A raw edit coming from a form control, before it becomes a setting value
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum InputEvent {
    Checkbox {
        checked: bool,
    },
    Text {
        value: String,
    },
    Select {
        value: String,
        #[serde(default, rename = "valueType")]
        value_type: Option<ValueType>,
    },
    Number {
        value: String,
        min: i64,
        max: i64,
    },
}

impl InputEvent {
    /// Convert to a setting value; `None` means the edit is discarded
    pub fn into_value(self) -> Option<SettingValue> {
        match self {
            Self::Checkbox { checked } => Some(SettingValue::Bool(checked)),
            Self::Text { value } => Some(SettingValue::String(value)),
            Self::Select { value, value_type } => match value_type {
                None => Some(SettingValue::String(value)),
                Some(ValueType::Number) => parse_leading_int(&value).map(SettingValue::Number),
                Some(ValueType::Float) => value.trim().parse::<f64>().ok().map(SettingValue::Float),
            },
            Self::Number { value, min, max } => {
                parse_digits(&value).map(|n| SettingValue::Number(clamp(n, min, max)))
            }
        }
    }
}

/// Keep only the digits of a numeric field and parse them.
///
/// Signs and decimal points are stripped along with everything else, so
/// `"-5"` reads as `5` and `"12.7"` as `127`. Values past `i64::MAX`
/// saturate so the clamp still applies.
fn parse_digits(raw: &str) -> Option<i64> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    Some(digits.parse().unwrap_or(i64::MAX))
}

/// Integer prefix of `raw`, ignoring leading whitespace: `"20 tabs"` is 20
fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (sign, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];
    if digits.is_empty() {
        return None;
    }
    Some(sign * digits.parse::<i64>().unwrap_or(i64::MAX))
}

/// `max(value, min)` then `min(.., max)`; an inverted range yields `max`
fn clamp(value: i64, min: i64, max: i64) -> i64 {
    value.max(min).min(max)
}

//! Setting keys, values and the settings snapshot pushed by the browser
//!
//! The key namespace is closed: every preference the page can show or edit
//! has a [`SettingKey`] variant. Snapshot payloads may carry keys this page
//! does not know about; those are dropped when the snapshot is built.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Error;

/// A single preference key
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub enum SettingKey {
    // General
    #[serde(rename = "general.language")]
    Language,
    #[serde(rename = "general.startup-mode")]
    StartupMode,
    #[serde(rename = "general.homepage")]
    Homepage,
    #[serde(rename = "general.show-home-button")]
    ShowHomeButton,
    #[serde(rename = "general.autohide-menu")]
    AutoHideMenu,
    #[serde(rename = "general.disable-title-mode")]
    DisableTitleMode,

    // Bookmarks toolbar
    #[serde(rename = "bookmarks.toolbar.show")]
    ShowBookmarksToolbar,
    #[serde(rename = "bookmarks.toolbar.showFavicon")]
    ShowBookmarksToolbarFavicon,
    #[serde(rename = "bookmarks.toolbar.showOnlyFavicon")]
    ShowBookmarksToolbarOnlyFavicon,

    // Search
    #[serde(rename = "search.default-search-engine")]
    DefaultSearchEngine,
    #[serde(rename = "search.suggestions.history")]
    HistorySuggestions,
    #[serde(rename = "search.suggestions.bookmarks")]
    BookmarkSuggestions,
    #[serde(rename = "search.suggestions.opened-tabs")]
    OpenedTabSuggestions,

    // Tabs
    #[serde(rename = "tabs.switch-to-new-tabs")]
    SwitchToNewTabs,
    #[serde(rename = "tabs.paint-tabs")]
    PaintTabs,
    #[serde(rename = "tabs.tabs-per-page")]
    TabsPerPage,
    #[serde(rename = "tabs.show-tab-previews")]
    ShowTabPreviews,

    // Security
    #[serde(rename = "security.passwords.manager-enabled")]
    PasswordManagerEnabled,
    #[serde(rename = "security.passwords.one-password-enabled")]
    OnePasswordEnabled,
    #[serde(rename = "security.passwords.dashlane-enabled")]
    DashlaneEnabled,

    // Privacy
    #[serde(rename = "privacy.do-not-track")]
    DoNotTrack,
    #[serde(rename = "privacy.block-canvas-fingerprinting")]
    BlockCanvasFingerprinting,
}

impl SettingKey {
    pub const ALL: [SettingKey; 22] = [
        Self::Language,
        Self::StartupMode,
        Self::Homepage,
        Self::ShowHomeButton,
        Self::AutoHideMenu,
        Self::DisableTitleMode,
        Self::ShowBookmarksToolbar,
        Self::ShowBookmarksToolbarFavicon,
        Self::ShowBookmarksToolbarOnlyFavicon,
        Self::DefaultSearchEngine,
        Self::HistorySuggestions,
        Self::BookmarkSuggestions,
        Self::OpenedTabSuggestions,
        Self::SwitchToNewTabs,
        Self::PaintTabs,
        Self::TabsPerPage,
        Self::ShowTabPreviews,
        Self::PasswordManagerEnabled,
        Self::OnePasswordEnabled,
        Self::DashlaneEnabled,
        Self::DoNotTrack,
        Self::BlockCanvasFingerprinting,
    ];

    /// Wire name used by the browser's settings store
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Language => "general.language",
            Self::StartupMode => "general.startup-mode",
            Self::Homepage => "general.homepage",
            Self::ShowHomeButton => "general.show-home-button",
            Self::AutoHideMenu => "general.autohide-menu",
            Self::DisableTitleMode => "general.disable-title-mode",
            Self::ShowBookmarksToolbar => "bookmarks.toolbar.show",
            Self::ShowBookmarksToolbarFavicon => "bookmarks.toolbar.showFavicon",
            Self::ShowBookmarksToolbarOnlyFavicon => "bookmarks.toolbar.showOnlyFavicon",
            Self::DefaultSearchEngine => "search.default-search-engine",
            Self::HistorySuggestions => "search.suggestions.history",
            Self::BookmarkSuggestions => "search.suggestions.bookmarks",
            Self::OpenedTabSuggestions => "search.suggestions.opened-tabs",
            Self::SwitchToNewTabs => "tabs.switch-to-new-tabs",
            Self::PaintTabs => "tabs.paint-tabs",
            Self::TabsPerPage => "tabs.tabs-per-page",
            Self::ShowTabPreviews => "tabs.show-tab-previews",
            Self::PasswordManagerEnabled => "security.passwords.manager-enabled",
            Self::OnePasswordEnabled => "security.passwords.one-password-enabled",
            Self::DashlaneEnabled => "security.passwords.dashlane-enabled",
            Self::DoNotTrack => "privacy.do-not-track",
            Self::BlockCanvasFingerprinting => "privacy.block-canvas-fingerprinting",
        }
    }

    /// Documented default, used when the current snapshot has no value.
    ///
    /// `Language` has no static default; it is derived from the available
    /// language codes and the navigator language at render time.
    pub fn default_value(&self) -> Option<SettingValue> {
        let value = match self {
            Self::Language => return None,
            Self::StartupMode => SettingValue::from("lastTime"),
            Self::Homepage => SettingValue::from("https://www.brave.com"),
            Self::ShowHomeButton => SettingValue::Bool(false),
            Self::AutoHideMenu => SettingValue::Bool(true),
            Self::DisableTitleMode => SettingValue::Bool(false),
            Self::ShowBookmarksToolbar => SettingValue::Bool(false),
            Self::ShowBookmarksToolbarFavicon => SettingValue::Bool(false),
            Self::ShowBookmarksToolbarOnlyFavicon => SettingValue::Bool(false),
            Self::DefaultSearchEngine => SettingValue::from("content/search/google.xml"),
            Self::HistorySuggestions => SettingValue::Bool(true),
            Self::BookmarkSuggestions => SettingValue::Bool(true),
            Self::OpenedTabSuggestions => SettingValue::Bool(true),
            Self::SwitchToNewTabs => SettingValue::Bool(false),
            Self::PaintTabs => SettingValue::Bool(true),
            Self::TabsPerPage => SettingValue::Number(10),
            Self::ShowTabPreviews => SettingValue::Bool(true),
            Self::PasswordManagerEnabled => SettingValue::Bool(true),
            Self::OnePasswordEnabled => SettingValue::Bool(false),
            Self::DashlaneEnabled => SettingValue::Bool(false),
            Self::DoNotTrack => SettingValue::Bool(false),
            Self::BlockCanvasFingerprinting => SettingValue::Bool(false),
        };
        Some(value)
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SettingKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| Error::protocol(format!("unknown setting key '{}'", s)))
    }
}

/// A setting value as stored upstream
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum SettingValue {
    Bool(bool),
    Number(i64),
    Float(f64),
    String(String),
}

impl SettingValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn display(&self) -> String {
        match self {
            Self::Bool(b) => if *b { "true" } else { "false" }.to_string(),
            Self::Number(n) => n.to_string(),
            Self::Float(f) => f.to_string(),
            Self::String(s) => s.clone(),
        }
    }

    /// Convert a raw JSON value. Arrays, objects and null have no setting
    /// representation.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(Self::Bool(*b)),
            Value::Number(n) => n
                .as_i64()
                .map(Self::Number)
                .or_else(|| n.as_f64().map(Self::Float)),
            Value::String(s) => Some(Self::String(s.clone())),
            _ => None,
        }
    }
}

impl From<bool> for SettingValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for SettingValue {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<f64> for SettingValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

/// Full settings snapshot as pushed on `settings-updated`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(from = "BTreeMap<String, Value>")]
pub struct SettingsSnapshot(BTreeMap<SettingKey, SettingValue>);

impl SettingsSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: SettingKey) -> Option<&SettingValue> {
        self.0.get(&key)
    }

    pub fn insert(&mut self, key: SettingKey, value: SettingValue) -> Option<SettingValue> {
        self.0.insert(key, value)
    }

    pub fn contains(&self, key: SettingKey) -> bool {
        self.0.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SettingKey, &SettingValue)> {
        self.0.iter()
    }
}

impl From<BTreeMap<String, Value>> for SettingsSnapshot {
    fn from(raw: BTreeMap<String, Value>) -> Self {
        let mut snapshot = Self::new();
        for (name, value) in raw {
            let Ok(key) = name.parse::<SettingKey>() else {
                tracing::trace!("Ignoring unknown setting key '{}'", name);
                continue;
            };
            match SettingValue::from_json(&value) {
                Some(value) => {
                    snapshot.insert(key, value);
                }
                None => {
                    tracing::trace!("Ignoring non-scalar value for setting '{}'", name);
                }
            }
        }
        snapshot
    }
}

impl FromIterator<(SettingKey, SettingValue)> for SettingsSnapshot {
    fn from_iter<I: IntoIterator<Item = (SettingKey, SettingValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

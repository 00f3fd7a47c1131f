//! Configuration types for the about pages

use serde::{Deserialize, Serialize};

/// Number of helpful hints shipped with the localization bundle
pub const DEFAULT_HINT_COUNT: u32 = 3;

/// Feedback link shown below the helpful hints
pub const DEFAULT_CONTACT_URL: &str = "mailto:support+laptop@brave.com";

/// Host platform, used to hide controls that do not apply
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Darwin,
    #[default]
    Linux,
    Windows,
}

impl Platform {
    /// The platform this binary was compiled for
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Self::Darwin
        } else if cfg!(target_os = "windows") {
            Self::Windows
        } else {
            Self::Linux
        }
    }

    /// macOS always shows the menu bar, so the auto-hide option is omitted
    pub fn supports_menu_autohide(&self) -> bool {
        !matches!(self, Self::Darwin)
    }
}

/// Page settings (`config.toml`)
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PageConfig {
    /// How many `hint{N}` strings exist; always at least 1
    #[serde(default = "default_hint_count")]
    pub hint_count: u32,

    /// Languages offered in the language select
    #[serde(default = "default_language_codes")]
    pub language_codes: Vec<String>,

    /// Browser UI language, used to pick the default language entry
    #[serde(default = "default_navigator_language")]
    pub navigator_language: String,

    #[serde(default = "Platform::current")]
    pub platform: Platform,

    #[serde(default = "default_contact_url")]
    pub contact_url: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            hint_count: default_hint_count(),
            language_codes: default_language_codes(),
            navigator_language: default_navigator_language(),
            platform: Platform::current(),
            contact_url: default_contact_url(),
        }
    }
}

impl PageConfig {
    /// Hint count clamped to a usable range
    pub fn effective_hint_count(&self) -> u32 {
        self.hint_count.max(1)
    }
}

fn default_hint_count() -> u32 {
    DEFAULT_HINT_COUNT
}

fn default_language_codes() -> Vec<String> {
    vec!["en-US".to_string()]
}

fn default_navigator_language() -> String {
    "en-US".to_string()
}

fn default_contact_url() -> String {
    DEFAULT_CONTACT_URL.to_string()
}

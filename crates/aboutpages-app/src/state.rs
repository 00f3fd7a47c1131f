//! Page state (the Model in TEA)

use std::fmt;
use std::str::FromStr;

use aboutpages_core::prelude::*;
use aboutpages_core::{BraveryDefaults, SiteSettings};
use serde::{Deserialize, Serialize};

use crate::bootstrap::Bootstrap;
use crate::cert_error::CertErrorState;
use crate::config::PageConfig;
use crate::hints::HintRotation;
use crate::ledger::LedgerState;
use crate::navigation::NavigationState;
use crate::permissions::PermissionView;
use crate::settings_model::SettingsReadModel;

/// Language used when nothing better matches
pub const FALLBACK_LANGUAGE: &str = "en-US";

/// Which internal page this instance renders
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    #[default]
    Preferences,
    CertError,
}

impl Page {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Preferences => "preferences",
            Self::CertError => "cert-error",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Page {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "preferences" => Ok(Self::Preferences),
            "cert-error" | "certerror" => Ok(Self::CertError),
            other => Err(Error::config(format!("unknown page '{}'", other))),
        }
    }
}

/// Lifecycle of the page controller
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// How the page is being opened
#[derive(Debug, Clone, Default)]
pub struct StartupOptions {
    pub page: Page,
    /// Full page location; its fragment picks the initial tab
    pub location: Option<String>,
    /// Seed for hint selection, for reproducible runs
    pub seed: Option<u64>,
}

/// Everything the preferences page mirrors from the browser, plus local UI state
#[derive(Debug)]
pub struct PreferencesState {
    pub navigation: NavigationState,
    pub hints: HintRotation,
    pub settings: SettingsReadModel,
    pub site_settings: SiteSettings,
    pub bravery_defaults: BraveryDefaults,
    pub flash_installed: bool,
    pub ledger: LedgerState,
    pub language_codes: Vec<String>,
}

impl PreferencesState {
    pub fn permissions(&self) -> PermissionView<'_> {
        PermissionView::new(&self.site_settings)
    }

    /// First available language code containing `navigator`, else en-US
    pub fn default_language(&self, navigator: &str) -> String {
        self.language_codes
            .iter()
            .find(|code| code.contains(navigator))
            .cloned()
            .unwrap_or_else(|| FALLBACK_LANGUAGE.to_string())
    }
}

/// Complete page state
#[derive(Debug)]
pub struct AppState {
    pub config: PageConfig,
    pub page: Page,
    pub preferences: PreferencesState,
    pub cert_error: CertErrorState,
    pub phase: AppPhase,

    /// Bumped by every handler that changes something visible
    revision: u64,
}

impl AppState {
    pub fn new(config: PageConfig, bootstrap: Bootstrap, options: StartupOptions) -> Self {
        let language_codes = bootstrap
            .language_codes
            .unwrap_or_else(|| config.language_codes.clone());

        let preferences = PreferencesState {
            navigation: NavigationState::from_location(options.location.as_deref()),
            hints: HintRotation::seeded(config.effective_hint_count(), options.seed),
            settings: SettingsReadModel::new(bootstrap.init_settings.unwrap_or_default()),
            site_settings: bootstrap.init_site_settings.unwrap_or_default(),
            bravery_defaults: bootstrap.init_bravery_defaults.unwrap_or_default(),
            flash_installed: false,
            ledger: LedgerState::default(),
            language_codes,
        };

        Self {
            config,
            page: options.page,
            preferences,
            cert_error: CertErrorState::new(bootstrap.cert_error.unwrap_or_default()),
            phase: AppPhase::Running,
            revision: 0,
        }
    }

    /// Preferences page with defaults everywhere (for tests)
    pub fn preferences() -> Self {
        Self::new(
            PageConfig::default(),
            Bootstrap::default(),
            StartupOptions {
                seed: Some(0),
                ..Default::default()
            },
        )
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Mark the state changed so the next render is emitted
    pub fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// Language shown in the select when the user never picked one
    pub fn default_language(&self) -> String {
        self.preferences
            .default_language(&self.config.navigator_language)
    }
}

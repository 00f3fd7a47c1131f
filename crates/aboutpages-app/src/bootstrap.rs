//! Initial page snapshot injected by the host before the first push

use std::path::Path;

use aboutpages_core::prelude::*;
use aboutpages_core::{BraveryDefaults, SettingsSnapshot, SiteSettings};
use serde::Deserialize;

/// Certificate error details handed to the cert-error page
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CertErrorInfo {
    pub url: Option<String>,
    pub error: Option<String>,
    pub previous_location: Option<String>,
    pub frame_key: Option<i64>,
}

/// Everything the host may seed the page with. Absent fields are empty.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Bootstrap {
    pub init_settings: Option<SettingsSnapshot>,
    pub init_site_settings: Option<SiteSettings>,
    pub init_bravery_defaults: Option<BraveryDefaults>,
    pub language_codes: Option<Vec<String>>,
    pub cert_error: Option<CertErrorInfo>,
}

impl Bootstrap {
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| Error::bootstrap(e.to_string()))
    }

    /// Read a bootstrap snapshot from disk. Unlike config, a bad bootstrap is
    /// an error: the host asked for specific initial state.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::bootstrap(format!("failed to read {:?}: {}", path, e)))?;
        let bootstrap = Self::from_json(&content)?;
        debug!("Loaded bootstrap snapshot from {:?}", path);
        Ok(bootstrap)
    }
}

//! Fixed enumerations shared with the browser process
//!
//! Defines:
//! - `PreferenceTab` - The eight sections of the preferences page
//! - `PermissionName` - Site permissions that can carry an allow/deny decision
//! - `ResourceName` - Feature toggles enforced by the browser's resource engine
//! - `AdControl` / `CookieControl` - Shields modes chosen from select boxes

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A section of the preferences page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PreferenceTab {
    #[default]
    General,
    Search,
    Tabs,
    Security,
    Shields,
    Payments,
    Sync,
    Advanced,
}

impl PreferenceTab {
    pub const ALL: [PreferenceTab; 8] = [
        Self::General,
        Self::Search,
        Self::Tabs,
        Self::Security,
        Self::Shields,
        Self::Payments,
        Self::Sync,
        Self::Advanced,
    ];

    /// Identifier as it appears in a `#fragment`
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Search => "search",
            Self::Tabs => "tabs",
            Self::Security => "security",
            Self::Shields => "shields",
            Self::Payments => "payments",
            Self::Sync => "sync",
            Self::Advanced => "advanced",
        }
    }

    /// Localization id of the navigation button label
    pub fn l10n_id(&self) -> &'static str {
        match self {
            Self::Payments => "publishers",
            other => other.as_str(),
        }
    }

    /// Icon class for the navigation button
    pub fn icon(&self) -> &'static str {
        match self {
            Self::General => "fa-list-alt",
            Self::Search => "fa-search",
            Self::Tabs => "fa-bookmark-o",
            Self::Security => "fa-lock",
            Self::Shields => "fa-user",
            Self::Payments => "fa-bitcoin",
            Self::Sync => "fa-refresh",
            Self::Advanced => "fa-server",
        }
    }

    /// Case-insensitive lookup by section name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|tab| tab.as_str().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for PreferenceTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A site permission that can be always-allowed or always-denied per host
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub enum PermissionName {
    #[serde(rename = "mediaPermission")]
    Media,
    #[serde(rename = "geolocationPermission")]
    Geolocation,
    #[serde(rename = "notificationsPermission")]
    Notifications,
    #[serde(rename = "midiSysexPermission")]
    MidiSysex,
    #[serde(rename = "pointerLockPermission")]
    PointerLock,
    #[serde(rename = "fullscreenPermission")]
    Fullscreen,
    #[serde(rename = "openExternalPermission")]
    OpenExternal,
}

impl PermissionName {
    /// Display order of the permission list
    pub const ALL: [PermissionName; 7] = [
        Self::Media,
        Self::Geolocation,
        Self::Notifications,
        Self::MidiSysex,
        Self::PointerLock,
        Self::Fullscreen,
        Self::OpenExternal,
    ];

    /// Site-settings field name; doubles as the localization id
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Media => "mediaPermission",
            Self::Geolocation => "geolocationPermission",
            Self::Notifications => "notificationsPermission",
            Self::MidiSysex => "midiSysexPermission",
            Self::PointerLock => "pointerLockPermission",
            Self::Fullscreen => "fullscreenPermission",
            Self::OpenExternal => "openExternalPermission",
        }
    }
}

impl fmt::Display for PermissionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PermissionName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| Error::protocol(format!("unknown permission '{}'", s)))
    }
}

/// A resource the browser can enable or disable globally
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum ResourceName {
    #[serde(rename = "adblock")]
    AdBlock,
    #[serde(rename = "cookieblock")]
    CookieBlock,
    #[serde(rename = "adInsertion")]
    AdInsertion,
    #[serde(rename = "trackingProtection")]
    TrackingProtection,
    #[serde(rename = "httpsEverywhere")]
    HttpsEverywhere,
    #[serde(rename = "safeBrowsing")]
    SafeBrowsing,
    #[serde(rename = "noScript")]
    NoScript,
    #[serde(rename = "flash")]
    Flash,
}

impl ResourceName {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AdBlock => "adblock",
            Self::CookieBlock => "cookieblock",
            Self::AdInsertion => "adInsertion",
            Self::TrackingProtection => "trackingProtection",
            Self::HttpsEverywhere => "httpsEverywhere",
            Self::SafeBrowsing => "safeBrowsing",
            Self::NoScript => "noScript",
            Self::Flash => "flash",
        }
    }
}

impl fmt::Display for ResourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ad handling mode on the Shields tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AdControl {
    ShowBraveAds,
    BlockAds,
    AllowAdsAndTracking,
}

impl AdControl {
    pub const ALL: [AdControl; 3] = [Self::ShowBraveAds, Self::BlockAds, Self::AllowAdsAndTracking];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ShowBraveAds => "showBraveAds",
            Self::BlockAds => "blockAds",
            Self::AllowAdsAndTracking => "allowAdsAndTracking",
        }
    }

    /// Resource states implied by this mode:
    /// (adblock, trackingProtection, adInsertion)
    pub fn resource_states(&self) -> [(ResourceName, bool); 3] {
        let (block, insert) = match self {
            Self::ShowBraveAds => (true, true),
            Self::BlockAds => (true, false),
            Self::AllowAdsAndTracking => (false, false),
        };
        [
            (ResourceName::AdBlock, block),
            (ResourceName::TrackingProtection, block),
            (ResourceName::AdInsertion, insert),
        ]
    }
}

/// Cookie handling mode on the Shields tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum CookieControl {
    #[serde(rename = "block3rdPartyCookie")]
    Block3rdPartyCookie,
    #[serde(rename = "allowAllCookies")]
    AllowAllCookies,
}

impl CookieControl {
    pub const ALL: [CookieControl; 2] = [Self::Block3rdPartyCookie, Self::AllowAllCookies];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Block3rdPartyCookie => "block3rdPartyCookie",
            Self::AllowAllCookies => "allowAllCookies",
        }
    }

    pub fn blocks_cookies(&self) -> bool {
        matches!(self, Self::Block3rdPartyCookie)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preference_tab_from_name_is_case_insensitive() {
        assert_eq!(
            PreferenceTab::from_name("shields"),
            Some(PreferenceTab::Shields)
        );
        assert_eq!(
            PreferenceTab::from_name("SHIELDS"),
            Some(PreferenceTab::Shields)
        );
        assert_eq!(
            PreferenceTab::from_name("Payments"),
            Some(PreferenceTab::Payments)
        );
        assert_eq!(PreferenceTab::from_name("bogus"), None);
        assert_eq!(PreferenceTab::from_name(""), None);
    }

    #[test]
    fn test_preference_tab_labels() {
        assert_eq!(PreferenceTab::Payments.l10n_id(), "publishers");
        assert_eq!(PreferenceTab::General.l10n_id(), "general");
        assert_eq!(PreferenceTab::Advanced.icon(), "fa-server");
    }

    #[test]
    fn test_permission_name_wire_names() {
        for name in PermissionName::ALL {
            let json = serde_json::to_string(&name).unwrap();
            assert_eq!(json, format!("\"{}\"", name.as_str()));
            assert_eq!(name.as_str().parse::<PermissionName>().unwrap(), name);
        }
    }

    #[test]
    fn test_ad_control_resource_states() {
        assert_eq!(
            AdControl::ShowBraveAds.resource_states(),
            [
                (ResourceName::AdBlock, true),
                (ResourceName::TrackingProtection, true),
                (ResourceName::AdInsertion, true),
            ]
        );
        assert_eq!(
            AdControl::BlockAds.resource_states(),
            [
                (ResourceName::AdBlock, true),
                (ResourceName::TrackingProtection, true),
                (ResourceName::AdInsertion, false),
            ]
        );
        assert!(AdControl::AllowAdsAndTracking
            .resource_states()
            .iter()
            .all(|(_, enabled)| !enabled));
    }

    #[test]
    fn test_cookie_control_deserialize() {
        let mode: CookieControl = serde_json::from_str("\"block3rdPartyCookie\"").unwrap();
        assert!(mode.blocks_cookies());
        let mode: CookieControl = serde_json::from_str("\"allowAllCookies\"").unwrap();
        assert!(!mode.blocks_cookies());
    }
}

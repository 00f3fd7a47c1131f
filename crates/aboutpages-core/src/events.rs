//! Inbound push events from the browser process
//!
//! Every push carries a full replacement for one slice of page state. The
//! wire shape is `{"channel": "<name>", "detail": <payload>}`; a missing or
//! `null` detail means "reset this slice to empty".

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::bravery::BraveryDefaults;
use crate::error::{Error, Result};
use crate::ledger::{LedgerEntry, LedgerSynopsis};
use crate::settings::SettingsSnapshot;
use crate::site_settings::SiteSettings;

pub const SETTINGS_UPDATED: &str = "settings-updated";
pub const SITE_SETTINGS_UPDATED: &str = "site-settings-updated";
pub const BRAVERY_DEFAULTS_UPDATED: &str = "bravery-defaults-updated";
pub const FLASH_INSTALLED_UPDATED: &str = "flash-installed-updated";
pub const LEDGER_UPDATED: &str = "ledger-updated";

/// A push event as it arrives on the wire, before payload validation
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RawPushEvent {
    pub channel: String,
    #[serde(default)]
    pub detail: Value,
}

impl RawPushEvent {
    pub fn new(channel: impl Into<String>, detail: Value) -> Self {
        Self {
            channel: channel.into(),
            detail,
        }
    }

    /// Validate the payload against the channel's slice type
    pub fn into_event(self) -> Result<PushEvent> {
        PushEvent::parse(&self.channel, self.detail)
    }
}

/// A validated, typed push event
#[derive(Debug, Clone, PartialEq)]
pub enum PushEvent {
    Settings(SettingsSnapshot),
    SiteSettings(SiteSettings),
    BraveryDefaults(BraveryDefaults),
    FlashInstalled(bool),
    Ledger(Vec<LedgerEntry>),
}

impl PushEvent {
    /// Parse a payload received on `channel`
    pub fn parse(channel: &str, detail: Value) -> Result<Self> {
        match channel {
            SETTINGS_UPDATED => slice(channel, detail).map(Self::Settings),
            SITE_SETTINGS_UPDATED => slice(channel, detail).map(Self::SiteSettings),
            BRAVERY_DEFAULTS_UPDATED => slice(channel, detail).map(Self::BraveryDefaults),
            FLASH_INSTALLED_UPDATED => slice(channel, detail).map(Self::FlashInstalled),
            LEDGER_UPDATED => {
                slice::<LedgerSynopsis>(channel, detail).map(|ledger| Self::Ledger(ledger.synopsis))
            }
            other => Err(Error::unknown_channel(other)),
        }
    }

    /// Channel name this event was delivered on
    pub fn channel(&self) -> &'static str {
        match self {
            Self::Settings(_) => SETTINGS_UPDATED,
            Self::SiteSettings(_) => SITE_SETTINGS_UPDATED,
            Self::BraveryDefaults(_) => BRAVERY_DEFAULTS_UPDATED,
            Self::FlashInstalled(_) => FLASH_INSTALLED_UPDATED,
            Self::Ledger(_) => LEDGER_UPDATED,
        }
    }
}

/// Deserialize an optional slice payload, treating null as empty
fn slice<T: DeserializeOwned + Default>(channel: &str, detail: Value) -> Result<T> {
    serde_json::from_value::<Option<T>>(detail)
        .map(Option::unwrap_or_default)
        .map_err(|e| Error::payload(channel, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{SettingKey, SettingValue};
    use crate::types::{AdControl, PermissionName};
    use serde_json::json;

    #[test]
    fn test_settings_push_parses_snapshot() {
        let event = PushEvent::parse(
            SETTINGS_UPDATED,
            json!({ "general.startup-mode": "lastTime" }),
        )
        .unwrap();

        match event {
            PushEvent::Settings(snapshot) => {
                assert_eq!(
                    snapshot.get(SettingKey::StartupMode),
                    Some(&SettingValue::from("lastTime"))
                );
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn test_null_detail_resets_every_slice() {
        assert_eq!(
            PushEvent::parse(SETTINGS_UPDATED, Value::Null).unwrap(),
            PushEvent::Settings(SettingsSnapshot::default())
        );
        assert_eq!(
            PushEvent::parse(SITE_SETTINGS_UPDATED, Value::Null).unwrap(),
            PushEvent::SiteSettings(SiteSettings::default())
        );
        assert_eq!(
            PushEvent::parse(BRAVERY_DEFAULTS_UPDATED, Value::Null).unwrap(),
            PushEvent::BraveryDefaults(BraveryDefaults::default())
        );
        assert_eq!(
            PushEvent::parse(FLASH_INSTALLED_UPDATED, Value::Null).unwrap(),
            PushEvent::FlashInstalled(false)
        );
        assert_eq!(
            PushEvent::parse(LEDGER_UPDATED, Value::Null).unwrap(),
            PushEvent::Ledger(Vec::new())
        );
    }

    #[test]
    fn test_raw_event_without_detail_field() {
        let raw: RawPushEvent = serde_json::from_str(r#"{"channel":"settings-updated"}"#).unwrap();
        assert_eq!(raw.detail, Value::Null);
        assert_eq!(
            raw.into_event().unwrap(),
            PushEvent::Settings(SettingsSnapshot::default())
        );
    }

    #[test]
    fn test_unknown_channel_is_rejected() {
        let err = PushEvent::parse("downloads-updated", json!({})).unwrap_err();
        assert!(matches!(err, Error::UnknownChannel { .. }));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_malformed_payload_is_rejected() {
        let err = PushEvent::parse(FLASH_INSTALLED_UPDATED, json!("yes")).unwrap_err();
        assert!(matches!(err, Error::Payload { .. }));

        let err = PushEvent::parse(BRAVERY_DEFAULTS_UPDATED, json!(["blockAds"])).unwrap_err();
        assert!(matches!(err, Error::Payload { .. }));
    }

    #[test]
    fn test_unknown_shields_mode_keeps_rest_of_push() {
        let event = PushEvent::parse(
            BRAVERY_DEFAULTS_UPDATED,
            json!({ "adControl": "showBraveAdsV2", "httpsEverywhere": false }),
        )
        .unwrap();
        assert_eq!(
            event,
            PushEvent::BraveryDefaults(BraveryDefaults {
                https_everywhere: Some(false),
                ..Default::default()
            })
        );
    }

    #[test]
    fn test_null_host_does_not_drop_other_hosts() {
        let event = PushEvent::parse(
            SITE_SETTINGS_UPDATED,
            json!({ "a.com": null, "b.com": { "mediaPermission": true } }),
        )
        .unwrap();
        let PushEvent::SiteSettings(sites) = event else {
            panic!("expected site settings");
        };
        assert_eq!(sites.len(), 2);
        assert_eq!(
            sites.get("b.com").and_then(|e| e.decision(PermissionName::Media)),
            Some(true)
        );
    }

    #[test]
    fn test_site_settings_and_bravery_pushes() {
        let event = PushEvent::parse(
            SITE_SETTINGS_UPDATED,
            json!({ "example.com": { "geolocationPermission": true } }),
        )
        .unwrap();
        let PushEvent::SiteSettings(sites) = event else {
            panic!("expected site settings");
        };
        assert_eq!(
            sites
                .get("example.com")
                .and_then(|e| e.decision(PermissionName::Geolocation)),
            Some(true)
        );

        let event =
            PushEvent::parse(BRAVERY_DEFAULTS_UPDATED, json!({ "adControl": "showBraveAds" }))
                .unwrap();
        assert_eq!(event.channel(), BRAVERY_DEFAULTS_UPDATED);
        let PushEvent::BraveryDefaults(defaults) = event else {
            panic!("expected bravery defaults");
        };
        assert_eq!(defaults.ad_control, Some(AdControl::ShowBraveAds));
    }

    #[test]
    fn test_ledger_push_unwraps_synopsis() {
        let event = PushEvent::parse(
            LEDGER_UPDATED,
            json!({ "synopsis": [{ "rank": 1, "site": "a.com" }, { "rank": 2, "site": "b.com" }] }),
        )
        .unwrap();
        let PushEvent::Ledger(rows) = event else {
            panic!("expected ledger");
        };
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].site, "b.com");
    }
}

//! Tests for handler module

use super::*;
use crate::bootstrap::{Bootstrap, CertErrorInfo};
use crate::config::PageConfig;
use crate::ledger::{LedgerColumn, SortDirection};
use crate::message::Message;
use crate::settings_model::{InputEvent, ValueType};
use crate::state::{AppPhase, AppState, Page, StartupOptions};
use aboutpages_core::{
    BraveryDefaults, LedgerEntry, PermissionName, PreferenceTab, PushEvent, ResourceName,
    SettingKey, SettingValue, SettingsSnapshot, SiteSettingEntry, SiteSettings, UpstreamCommand,
};
use serde_json::json;

fn cert_error_state() -> AppState {
    let bootstrap = Bootstrap {
        cert_error: Some(CertErrorInfo {
            url: Some("https://expired.test/".to_string()),
            error: Some("net::ERR_CERT_DATE_INVALID".to_string()),
            previous_location: Some("https://start.test/".to_string()),
            frame_key: Some(2),
        }),
        ..Default::default()
    };
    AppState::new(
        PageConfig::default(),
        bootstrap,
        StartupOptions {
            page: Page::CertError,
            seed: Some(0),
            ..Default::default()
        },
    )
}

fn number_input(value: &str, min: i64, max: i64) -> InputEvent {
    InputEvent::Number {
        value: value.to_string(),
        min,
        max,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Lifecycle
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_quit_message_sets_quitting_phase() {
    let mut state = AppState::preferences();
    assert_ne!(state.phase, AppPhase::Quitting);

    update(&mut state, Message::Quit);

    assert_eq!(state.phase, AppPhase::Quitting);
    assert!(state.should_quit());
}

// ─────────────────────────────────────────────────────────────────────────────
// Settings
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_startup_mode_scenario() {
    let mut state = AppState::preferences();
    update(
        &mut state,
        Message::Push(PushEvent::Settings(
            [(SettingKey::StartupMode, SettingValue::from("lastTime"))]
                .into_iter()
                .collect(),
        )),
    );

    let settings = &state.preferences.settings;
    assert_eq!(
        settings.get(SettingKey::StartupMode, "homePage"),
        SettingValue::from("lastTime")
    );
    assert_eq!(
        settings.get(SettingKey::TabsPerPage, 10_i64),
        SettingValue::Number(10)
    );

    let result = update(
        &mut state,
        Message::ChangeSetting {
            key: SettingKey::TabsPerPage,
            input: InputEvent::Select {
                value: "8".to_string(),
                value_type: Some(ValueType::Number),
            },
        },
    );

    assert_eq!(
        result.commands(),
        &[UpstreamCommand::change_setting(SettingKey::TabsPerPage, 8)]
    );
    assert_eq!(
        state
            .preferences
            .settings
            .get(SettingKey::TabsPerPage, 10_i64),
        SettingValue::Number(8)
    );
}

#[test]
fn test_inbound_snapshot_overwrites_optimistic_edit() {
    let mut state = AppState::preferences();
    update(
        &mut state,
        Message::ChangeSetting {
            key: SettingKey::DoNotTrack,
            input: InputEvent::Checkbox { checked: true },
        },
    );
    assert!(state.preferences.settings.is_enabled(SettingKey::DoNotTrack));

    update(
        &mut state,
        Message::Push(PushEvent::Settings(SettingsSnapshot::default())),
    );
    assert!(!state.preferences.settings.is_enabled(SettingKey::DoNotTrack));
}

#[test]
fn test_numeric_input_is_clamped() {
    let mut state = AppState::preferences();
    let result = update(
        &mut state,
        Message::ChangeSetting {
            key: SettingKey::TabsPerPage,
            input: number_input("50", 6, 20),
        },
    );

    assert_eq!(
        result.commands(),
        &[UpstreamCommand::change_setting(SettingKey::TabsPerPage, 20)]
    );
}

#[test]
fn test_non_numeric_input_is_noop() {
    let mut state = AppState::preferences();
    let revision = state.revision();

    let result = update(
        &mut state,
        Message::ChangeSetting {
            key: SettingKey::TabsPerPage,
            input: number_input("abc", 6, 20),
        },
    );

    assert!(result.action.is_none());
    assert_eq!(state.revision(), revision);
    assert!(state
        .preferences
        .settings
        .snapshot()
        .get(SettingKey::TabsPerPage)
        .is_none());
}

#[test]
fn test_text_input_passes_raw_value() {
    let mut state = AppState::preferences();
    let result = update(
        &mut state,
        Message::ChangeSetting {
            key: SettingKey::Homepage,
            input: InputEvent::Text {
                value: "https://example.com".to_string(),
            },
        },
    );
    assert_eq!(
        result.commands(),
        &[UpstreamCommand::change_setting(
            SettingKey::Homepage,
            "https://example.com"
        )]
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// Push Events
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_pushes_replace_each_slice() {
    let mut state = AppState::preferences();

    let sites = SiteSettings::new().with_entry(
        "example.com",
        SiteSettingEntry::new().with_decision(PermissionName::Geolocation, true),
    );
    update(&mut state, Message::Push(PushEvent::SiteSettings(sites.clone())));
    assert_eq!(state.preferences.site_settings, sites);

    let defaults: BraveryDefaults =
        serde_json::from_value(json!({ "httpsEverywhere": true })).unwrap();
    update(
        &mut state,
        Message::Push(PushEvent::BraveryDefaults(defaults.clone())),
    );
    assert_eq!(state.preferences.bravery_defaults, defaults);

    update(&mut state, Message::Push(PushEvent::FlashInstalled(true)));
    assert!(state.preferences.flash_installed);

    update(
        &mut state,
        Message::Push(PushEvent::Ledger(vec![LedgerEntry {
            rank: 1,
            site: "a.com".to_string(),
            ..Default::default()
        }])),
    );
    assert_eq!(state.preferences.ledger.len(), 1);

    assert_eq!(state.revision(), 4);
}

#[test]
fn test_empty_push_resets_slice() {
    let mut state = AppState::preferences();
    update(
        &mut state,
        Message::Push(PushEvent::SiteSettings(SiteSettings::new().with_entry(
            "a.com",
            SiteSettingEntry::new().with_decision(PermissionName::Media, false),
        ))),
    );
    assert!(state.preferences.permissions().is_non_empty());

    update(
        &mut state,
        Message::Push(PushEvent::SiteSettings(SiteSettings::default())),
    );
    assert!(!state.preferences.permissions().is_non_empty());
}

// ─────────────────────────────────────────────────────────────────────────────
// Navigation
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_change_tab_is_idempotent() {
    let mut state = AppState::preferences();
    update(
        &mut state,
        Message::ChangeTab {
            tab: PreferenceTab::Shields,
        },
    );
    update(
        &mut state,
        Message::ChangeTab {
            tab: PreferenceTab::Shields,
        },
    );
    assert_eq!(
        state.preferences.navigation.active(),
        PreferenceTab::Shields
    );
}

#[test]
fn test_refresh_hint_stays_in_range() {
    let mut state = AppState::preferences();
    for _ in 0..20 {
        update(&mut state, Message::RefreshHint);
        assert!(state.preferences.hints.current() < 3);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Shields
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_ad_control_modes() {
    let expect = |adblock, insertion| {
        vec![
            UpstreamCommand::set_resource_enabled(ResourceName::AdBlock, adblock),
            UpstreamCommand::set_resource_enabled(ResourceName::TrackingProtection, adblock),
            UpstreamCommand::set_resource_enabled(ResourceName::AdInsertion, insertion),
        ]
    };

    let mut state = AppState::preferences();
    for (value, commands) in [
        ("showBraveAds", expect(true, true)),
        ("blockAds", expect(true, false)),
        ("allowAdsAndTracking", expect(false, false)),
        ("somethingElse", expect(false, false)),
    ] {
        let result = update(
            &mut state,
            Message::ChangeAdControl {
                value: value.to_string(),
            },
        );
        assert_eq!(result.commands(), commands.as_slice(), "mode {}", value);
    }

    // Feature defaults wait for the browser
    assert_eq!(state.preferences.bravery_defaults, BraveryDefaults::default());
}

#[test]
fn test_cookie_control() {
    let mut state = AppState::preferences();
    let result = update(
        &mut state,
        Message::ChangeCookieControl {
            value: "block3rdPartyCookie".to_string(),
        },
    );
    assert_eq!(
        result.commands(),
        &[UpstreamCommand::set_resource_enabled(
            ResourceName::CookieBlock,
            true
        )]
    );

    let result = update(
        &mut state,
        Message::ChangeCookieControl {
            value: "allowAllCookies".to_string(),
        },
    );
    assert_eq!(
        result.commands(),
        &[UpstreamCommand::set_resource_enabled(
            ResourceName::CookieBlock,
            false
        )]
    );
}

#[test]
fn test_toggle_resource() {
    let mut state = AppState::preferences();
    let result = update(
        &mut state,
        Message::ToggleResource {
            resource: ResourceName::NoScript,
            enabled: true,
        },
    );
    assert_eq!(
        result.commands(),
        &[UpstreamCommand::set_resource_enabled(
            ResourceName::NoScript,
            true
        )]
    );
    assert_eq!(state.preferences.bravery_defaults.no_script, None);
}

#[test]
fn test_flash_toggle_requires_flash_installed() {
    let mut state = AppState::preferences();
    let toggle = Message::ToggleResource {
        resource: ResourceName::Flash,
        enabled: true,
    };

    assert!(update(&mut state, toggle.clone()).action.is_none());

    update(&mut state, Message::Push(PushEvent::FlashInstalled(true)));
    assert_eq!(update(&mut state, toggle).commands().len(), 1);
}

#[test]
fn test_delete_permission_has_no_local_effect() {
    let mut state = AppState::preferences();
    let sites = SiteSettings::new()
        .with_entry(
            "example.com",
            SiteSettingEntry::new().with_decision(PermissionName::Geolocation, true),
        )
        .with_entry("foo.com", SiteSettingEntry::new());
    update(&mut state, Message::Push(PushEvent::SiteSettings(sites.clone())));
    let revision = state.revision();

    let result = update(
        &mut state,
        Message::DeletePermission {
            permission: PermissionName::Geolocation,
            host_pattern: "example.com".to_string(),
        },
    );

    assert_eq!(
        result.commands(),
        &[UpstreamCommand::clear_site_setting(
            "example.com",
            PermissionName::Geolocation
        )]
    );
    assert_eq!(state.preferences.site_settings, sites);
    assert_eq!(state.revision(), revision);
}

// ─────────────────────────────────────────────────────────────────────────────
// Security / Payments
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_manage_passwords_opens_foreground_frame() {
    let mut state = AppState::preferences();
    let result = update(&mut state, Message::ManagePasswords);
    assert_eq!(
        result.commands(),
        &[UpstreamCommand::new_frame("about:passwords", true)]
    );
}

#[test]
fn test_ledger_overlay_and_sort() {
    let mut state = AppState::preferences();

    update(&mut state, Message::ShowLedgerLog);
    assert!(state.preferences.ledger.overlay_visible());
    let revision = state.revision();
    update(&mut state, Message::ShowLedgerLog);
    assert_eq!(state.revision(), revision);
    update(&mut state, Message::HideLedgerLog);
    assert!(!state.preferences.ledger.overlay_visible());

    update(
        &mut state,
        Message::SortLedger {
            column: LedgerColumn::Views,
        },
    );
    update(
        &mut state,
        Message::SortLedger {
            column: LedgerColumn::Views,
        },
    );
    assert_eq!(
        state.preferences.ledger.sort().map(|s| s.direction),
        Some(SortDirection::Descending)
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// Certificate Error Page
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_cert_error_accept_flow() {
    let mut state = cert_error_state();

    // Accept is not offered before "advanced"
    assert!(update(&mut state, Message::CertErrorAccept).action.is_none());

    update(&mut state, Message::CertErrorAdvanced);
    assert!(state.cert_error.advanced);

    let result = update(&mut state, Message::CertErrorAccept);
    assert_eq!(
        result.commands(),
        &[
            UpstreamCommand::AcceptCertError {
                url: "https://expired.test/".to_string()
            },
            UpstreamCommand::set_url("https://expired.test/", Some(2)),
        ]
    );
}

#[test]
fn test_cert_error_safety() {
    let mut state = cert_error_state();
    let result = update(&mut state, Message::CertErrorSafety);
    assert_eq!(
        result.commands(),
        &[UpstreamCommand::set_url("https://start.test/", Some(2))]
    );
}

#[test]
fn test_actions_for_other_page_are_ignored() {
    let mut state = cert_error_state();
    let result = update(&mut state, Message::ManagePasswords);
    assert!(result.action.is_none());

    let mut state = AppState::preferences();
    let result = update(&mut state, Message::CertErrorSafety);
    assert!(result.action.is_none());
}

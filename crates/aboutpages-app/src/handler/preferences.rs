//! Preferences page handlers

use aboutpages_core::prelude::*;
use aboutpages_core::{
    AdControl, CookieControl, PermissionName, PreferenceTab, ResourceName, SettingKey,
    UpstreamCommand,
};

use crate::ledger::LedgerColumn;
use crate::permissions;
use crate::settings_model::InputEvent;
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

/// Frame opened by the "manage passwords" link
pub const PASSWORDS_LOCATION: &str = "about:passwords";

// ─────────────────────────────────────────────────────────────────────────────
// Navigation
// ─────────────────────────────────────────────────────────────────────────────

pub fn handle_change_tab(state: &mut AppState, tab: PreferenceTab) -> UpdateResult {
    state.preferences.navigation.change_tab(tab);
    state.touch();
    UpdateResult::none()
}

pub fn handle_refresh_hint(state: &mut AppState) -> UpdateResult {
    let hint = state.preferences.hints.refresh();
    trace!("Showing hint {}", hint);
    state.touch();
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────────────────────────
// Settings
// ─────────────────────────────────────────────────────────────────────────────

/// Convert the raw control value and apply it optimistically.
/// Unparsable numeric input is dropped without touching state.
pub fn handle_change_setting(
    state: &mut AppState,
    key: SettingKey,
    input: InputEvent,
) -> UpdateResult {
    let Some(value) = input.into_value() else {
        debug!("Discarding unparsable input for {}", key);
        return UpdateResult::none();
    };

    let command = state.preferences.settings.set(key, value);
    state.touch();
    UpdateResult::dispatch(command)
}

// ─────────────────────────────────────────────────────────────────────────────
// Shields
// ─────────────────────────────────────────────────────────────────────────────

/// Ad control maps onto three resources. Unrecognized values disable all of
/// them, same as `allowAdsAndTracking`.
pub fn handle_ad_control(value: &str) -> UpdateResult {
    let mode = AdControl::ALL
        .iter()
        .copied()
        .find(|mode| mode.as_str() == value)
        .unwrap_or(AdControl::AllowAdsAndTracking);

    let commands = mode
        .resource_states()
        .iter()
        .map(|(resource, enabled)| UpstreamCommand::set_resource_enabled(*resource, *enabled))
        .collect();
    UpdateResult::action(UpdateAction::Dispatch(commands))
}

pub fn handle_cookie_control(value: &str) -> UpdateResult {
    let blocked = value == CookieControl::Block3rdPartyCookie.as_str();
    UpdateResult::dispatch(UpstreamCommand::set_resource_enabled(
        ResourceName::CookieBlock,
        blocked,
    ))
}

/// Feature-default checkboxes. The local defaults are not touched; the
/// browser pushes new ones once the change is applied.
pub fn handle_toggle_resource(
    state: &AppState,
    resource: ResourceName,
    enabled: bool,
) -> UpdateResult {
    if resource == ResourceName::Flash && !state.preferences.flash_installed {
        debug!("Ignoring flash toggle, flash is not installed");
        return UpdateResult::none();
    }
    UpdateResult::dispatch(UpstreamCommand::set_resource_enabled(resource, enabled))
}

pub fn handle_delete_permission(permission: PermissionName, host_pattern: &str) -> UpdateResult {
    UpdateResult::dispatch(permissions::delete_permission(permission, host_pattern))
}

// ─────────────────────────────────────────────────────────────────────────────
// Security / Payments
// ─────────────────────────────────────────────────────────────────────────────

pub fn handle_manage_passwords() -> UpdateResult {
    UpdateResult::dispatch(UpstreamCommand::new_frame(PASSWORDS_LOCATION, true))
}

pub fn handle_ledger_overlay(state: &mut AppState, visible: bool) -> UpdateResult {
    let ledger = &mut state.preferences.ledger;
    if ledger.overlay_visible() == visible {
        return UpdateResult::none();
    }
    if visible {
        ledger.show_overlay();
    } else {
        ledger.hide_overlay();
    }
    state.touch();
    UpdateResult::none()
}

pub fn handle_sort_ledger(state: &mut AppState, column: LedgerColumn) -> UpdateResult {
    state.preferences.ledger.sort_by(column);
    state.touch();
    UpdateResult::none()
}

//! Main update function - handles state transitions (TEA pattern)

use aboutpages_core::prelude::*;

use crate::message::Message;
use crate::state::{AppPhase, AppState, Page};

use super::{cert_error, preferences, push, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Push(event) => push::handle_push(state, event),

        // ─────────────────────────────────────────────────────────
        // Certificate Error Page
        // ─────────────────────────────────────────────────────────
        Message::CertErrorAdvanced if on_page(state, Page::CertError) => {
            cert_error::handle_advanced(state)
        }
        Message::CertErrorAccept if on_page(state, Page::CertError) => {
            cert_error::handle_accept(state)
        }
        Message::CertErrorSafety if on_page(state, Page::CertError) => {
            cert_error::handle_safety(state)
        }
        Message::CertErrorAdvanced | Message::CertErrorAccept | Message::CertErrorSafety => {
            debug!("Ignoring certificate error action on the {} page", state.page);
            UpdateResult::none()
        }

        // Everything else belongs to the preferences page
        msg if !on_page(state, Page::Preferences) => {
            debug!("Ignoring preferences action on the {} page: {:?}", state.page, msg);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        Message::ChangeTab { tab } => preferences::handle_change_tab(state, tab),
        Message::RefreshHint => preferences::handle_refresh_hint(state),

        // ─────────────────────────────────────────────────────────
        // Settings
        // ─────────────────────────────────────────────────────────
        Message::ChangeSetting { key, input } => {
            preferences::handle_change_setting(state, key, input)
        }

        // ─────────────────────────────────────────────────────────
        // Shields
        // ─────────────────────────────────────────────────────────
        Message::ChangeAdControl { value } => preferences::handle_ad_control(&value),
        Message::ChangeCookieControl { value } => preferences::handle_cookie_control(&value),
        Message::ToggleResource { resource, enabled } => {
            preferences::handle_toggle_resource(state, resource, enabled)
        }
        Message::DeletePermission {
            permission,
            host_pattern,
        } => preferences::handle_delete_permission(permission, &host_pattern),

        // ─────────────────────────────────────────────────────────
        // Security / Payments
        // ─────────────────────────────────────────────────────────
        Message::ManagePasswords => preferences::handle_manage_passwords(),
        Message::ShowLedgerLog => preferences::handle_ledger_overlay(state, true),
        Message::HideLedgerLog => preferences::handle_ledger_overlay(state, false),
        Message::SortLedger { column } => preferences::handle_sort_ledger(state, column),
    }
}

fn on_page(state: &AppState, page: Page) -> bool {
    state.page == page
}

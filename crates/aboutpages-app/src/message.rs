//! Message types for the page controller (TEA pattern)
//!
//! User interactions deserialize from `{"action": "<kebab-name>", ...}`.
//! Push events are built by the caller after validating the payload.

use aboutpages_core::{PermissionName, PreferenceTab, PushEvent, ResourceName, SettingKey};
use serde::Deserialize;

use crate::ledger::LedgerColumn;
use crate::settings_model::InputEvent;

/// All possible messages/actions handled by [`crate::handler::update`]
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum Message {
    /// Inbound slice replacement from the browser process
    #[serde(skip)]
    Push(PushEvent),

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────
    ChangeTab {
        tab: PreferenceTab,
    },

    RefreshHint,

    // ─────────────────────────────────────────────────────────
    // Settings Edits
    // ─────────────────────────────────────────────────────────
    /// A form control bound to `key` changed
    ChangeSetting {
        key: SettingKey,
        input: InputEvent,
    },

    // ─────────────────────────────────────────────────────────
    // Shields
    // ─────────────────────────────────────────────────────────
    /// Ad control select changed; the raw option value
    ChangeAdControl {
        value: String,
    },

    /// Cookie control select changed; the raw option value
    ChangeCookieControl {
        value: String,
    },

    /// A feature-default checkbox changed
    ToggleResource {
        resource: ResourceName,
        enabled: bool,
    },

    DeletePermission {
        permission: PermissionName,
        #[serde(rename = "hostPattern")]
        host_pattern: String,
    },

    // ─────────────────────────────────────────────────────────
    // Security / Payments
    // ─────────────────────────────────────────────────────────
    ManagePasswords,

    ShowLedgerLog,

    HideLedgerLog,

    SortLedger {
        column: LedgerColumn,
    },

    // ─────────────────────────────────────────────────────────
    // Certificate Error Page
    // ─────────────────────────────────────────────────────────
    CertErrorAdvanced,

    CertErrorAccept,

    CertErrorSafety,

    /// Stop the controller (stdin closed, signal, or explicit request)
    Quit,
}

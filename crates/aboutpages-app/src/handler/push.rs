//! Inbound push handlers
//!
//! Every push replaces exactly one slice, unconditionally. Optimistic local
//! edits are overwritten by whatever the browser sends.

use aboutpages_core::prelude::*;
use aboutpages_core::PushEvent;

use crate::state::AppState;

use super::UpdateResult;

pub fn handle_push(state: &mut AppState, event: PushEvent) -> UpdateResult {
    let prefs = &mut state.preferences;
    match event {
        PushEvent::Settings(snapshot) => {
            debug!("Replacing settings snapshot ({} keys)", snapshot.len());
            prefs.settings.replace(snapshot);
        }
        PushEvent::SiteSettings(sites) => {
            debug!("Replacing site settings ({} hosts)", sites.len());
            prefs.site_settings = sites;
        }
        PushEvent::BraveryDefaults(defaults) => {
            debug!("Replacing bravery defaults");
            prefs.bravery_defaults = defaults;
        }
        PushEvent::FlashInstalled(installed) => {
            debug!("Flash installed: {}", installed);
            prefs.flash_installed = installed;
        }
        PushEvent::Ledger(entries) => {
            debug!("Replacing ledger synopsis ({} rows)", entries.len());
            prefs.ledger.replace(entries);
        }
    }
    state.touch();
    UpdateResult::none()
}

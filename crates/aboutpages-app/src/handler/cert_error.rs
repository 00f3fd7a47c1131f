//! Certificate error page handlers

use aboutpages_core::prelude::*;

use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

pub fn handle_advanced(state: &mut AppState) -> UpdateResult {
    if state.cert_error.show_advanced() {
        state.touch();
    } else {
        debug!("Advanced options not available");
    }
    UpdateResult::none()
}

pub fn handle_accept(state: &mut AppState) -> UpdateResult {
    let commands = state.cert_error.accept();
    if commands.is_empty() {
        debug!("Accept is not offered yet, ignoring");
        return UpdateResult::none();
    }
    info!("Accepting certificate error for {:?}", state.cert_error.url);
    UpdateResult::action(UpdateAction::Dispatch(commands))
}

pub fn handle_safety(state: &mut AppState) -> UpdateResult {
    match state.cert_error.back_to_safety() {
        Some(command) => UpdateResult::dispatch(command),
        None => {
            debug!("No previous location to return to");
            UpdateResult::none()
        }
    }
}

//! Message processing: run update() to completion and dispatch its actions

use crate::channel::CommandSender;
use crate::handler::{self, UpdateAction};
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function, following any
/// follow-up messages until the chain ends
pub fn process_message(state: &mut AppState, message: Message, commands: &CommandSender) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, commands);
        }

        // Continue with follow-up message
        msg = result.message;
    }
}

/// Perform an action requested by update()
pub fn handle_action(action: UpdateAction, commands: &CommandSender) {
    match action {
        UpdateAction::Dispatch(batch) => commands.dispatch(batch),
    }
}

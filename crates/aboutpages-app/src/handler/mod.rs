//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `push`: Inbound slice replacements from the browser process
//! - `preferences`: Preferences page interactions (tabs, settings, shields, ledger)
//! - `cert_error`: Certificate error page interactions

pub(crate) mod cert_error;
pub(crate) mod preferences;
pub(crate) mod push;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use aboutpages_core::UpstreamCommand;

use crate::message::Message;

// Re-export main entry point
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    /// Send commands to the browser process, in order, without waiting
    Dispatch(Vec<UpstreamCommand>),
}

impl UpdateAction {
    pub fn dispatch_one(command: UpstreamCommand) -> Self {
        Self::Dispatch(vec![command])
    }
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }

    /// Shorthand for a single outbound command
    pub fn dispatch(command: UpstreamCommand) -> Self {
        Self::action(UpdateAction::dispatch_one(command))
    }

    /// Commands emitted by this result, if any
    pub fn commands(&self) -> &[UpstreamCommand] {
        match &self.action {
            Some(UpdateAction::Dispatch(commands)) => commands,
            None => &[],
        }
    }
}

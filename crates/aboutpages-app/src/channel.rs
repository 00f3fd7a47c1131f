//! Outbound command channel to the browser process
//!
//! Commands are fire-and-forget. Nothing waits for a reply; the browser
//! answers, if at all, with a later push event.

use aboutpages_core::prelude::*;
use aboutpages_core::UpstreamCommand;
use tokio::sync::mpsc;

/// Sending half of the outbound command channel
#[derive(Clone)]
pub struct CommandSender {
    tx: mpsc::UnboundedSender<UpstreamCommand>,
}

impl std::fmt::Debug for CommandSender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandSender")
            .field("tx", &"<channel>")
            .finish()
    }
}

impl CommandSender {
    /// Create a sender and the receiver the transport drains
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<UpstreamCommand>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Queue one command
    pub fn send(&self, command: UpstreamCommand) -> Result<()> {
        debug!("Sending {}", command.verb());
        self.tx
            .send(command)
            .map_err(|e| Error::channel_send(format!("{} dropped: receiver closed", e.0.verb())))
    }

    /// Queue commands in order. Failures are logged and skipped; there is no
    /// retry.
    pub fn dispatch(&self, commands: Vec<UpstreamCommand>) {
        for command in commands {
            if let Err(e) = self.send(command) {
                warn!("Failed to dispatch command: {}", e);
            }
        }
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

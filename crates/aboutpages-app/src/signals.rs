//! OS signal handling: a termination signal ends the page session

use aboutpages_core::prelude::*;
use tokio::sync::mpsc;

use crate::message::Message;

/// Spawn a task that posts [`Message::Quit`] on SIGINT/SIGTERM (Ctrl+C on Windows)
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        match wait_for_signal().await {
            Ok(name) => {
                info!("Received {}, quitting", name);
                if tx.send(Message::Quit).await.is_err() {
                    debug!("Message channel already closed");
                }
            }
            Err(e) => error!("Signal handler error: {}", e),
        }
    });
}

/// Resolve with the name of the first termination signal received
async fn wait_for_signal() -> Result<&'static str> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let listen = |kind: SignalKind, name: &str| {
            signal(kind).map_err(|e| Error::startup(format!("cannot listen for {}: {}", name, e)))
        };
        let mut sigint = listen(SignalKind::interrupt(), "SIGINT")?;
        let mut sigterm = listen(SignalKind::terminate(), "SIGTERM")?;

        let name = tokio::select! {
            _ = sigint.recv() => "SIGINT",
            _ = sigterm.recv() => "SIGTERM",
        };
        Ok(name)
    }

    #[cfg(windows)]
    {
        tokio::signal::ctrl_c()
            .await
            .map_err(|e| Error::startup(format!("cannot listen for Ctrl+C: {}", e)))?;
        Ok("Ctrl+C")
    }
}

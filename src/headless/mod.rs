//! Headless mode - NDJSON protocol between the page and its host
//!
//! The host writes one JSON object per line on stdin: either a push event
//! (`{"channel": ..., "detail": ...}`) or a user interaction
//! (`{"action": ..., ...}`). The page answers on stdout with one event per
//! line.
//!
//! # Example Output
//!
//! ```json
//! {"event":"render","revision":0,"view":{"page":"preferences",...},"timestamp":1704700001000}
//! {"event":"command","command":{"verb":"check-flash-installed"},"timestamp":1704700001001}
//! {"event":"error","message":"Unknown push channel: downloads-updated","fatal":false,"timestamp":1704700002000}
//! ```

pub mod input;
pub mod runner;
pub mod session;

use aboutpages_app::PageView;
use aboutpages_core::UpstreamCommand;
use chrono::Utc;
use serde::Serialize;
use std::io::{self, Write};
use tracing::error;

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// Outbound command for the browser process
    Command {
        command: UpstreamCommand,
        timestamp: i64,
    },

    /// Full page view after a state change
    Render {
        revision: u64,
        view: Box<PageView>,
        timestamp: i64,
    },

    /// Rejected input or runtime failure
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Emit this event to stdout as one NDJSON line
    pub fn emit(&self) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", json) {
            error!("Failed to write headless event to stdout: {}", e);
            return;
        }

        if let Err(e) = stdout.flush() {
            error!("Failed to flush headless stdout: {}", e);
        }
    }

    /// Current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    pub fn command(command: UpstreamCommand) -> Self {
        Self::Command {
            command,
            timestamp: Self::now(),
        }
    }

    pub fn render(revision: u64, view: Box<PageView>) -> Self {
        Self::Render {
            revision,
            view,
            timestamp: Self::now(),
        }
    }

    pub fn error(message: String, fatal: bool) -> Self {
        Self::Error {
            message,
            fatal,
            timestamp: Self::now(),
        }
    }

    /// Event name as it appears in the `event` field
    pub fn name(&self) -> &'static str {
        match self {
            Self::Command { .. } => "command",
            Self::Render { .. } => "render",
            Self::Error { .. } => "error",
        }
    }
}

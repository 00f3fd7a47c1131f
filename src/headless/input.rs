//! Parsing of stdin lines into page input

use aboutpages_app::Message;
use aboutpages_core::prelude::*;
use aboutpages_core::RawPushEvent;
use serde_json::Value;

/// One parsed line of host input
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    /// A push event or user interaction for the engine
    Message(Message),

    /// The line could not be turned into a message; the reason is reported
    /// back to the host
    Rejected(String),

    /// The host asked the page to close
    Quit,
}

/// Parse a single NDJSON line.
///
/// Returns `None` for blank lines. Objects with a `channel` field are push
/// events; everything else must be an `action`.
pub fn parse_line(line: &str) -> Option<Input> {
    let trimmed = line.trim();
    match trimmed {
        "" => None,
        "q" | "quit" => Some(Input::Quit),
        _ => Some(match parse_message(trimmed) {
            Ok(msg) => Input::Message(msg),
            Err(e) => {
                warn!("Rejected input line: {}", e);
                Input::Rejected(e.to_string())
            }
        }),
    }
}

fn parse_message(line: &str) -> Result<Message> {
    let value: Value = serde_json::from_str(line)?;

    if value.get("channel").is_some() {
        let raw: RawPushEvent = serde_json::from_value(value)?;
        return raw.into_event().map(Message::Push);
    }

    if value.get("action").is_none() {
        return Err(Error::protocol(
            "expected a \"channel\" or \"action\" field",
        ));
    }
    Ok(serde_json::from_value(value)?)
}

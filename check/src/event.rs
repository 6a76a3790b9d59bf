//! Sensu event input
//!
//! The agent pipes the triggering event on stdin. Only its annotations are
//! used, to override the configured address and proxy.

use sensu_tor_check_common::protocol::Event;
use sensu_tor_check_common::CheckError;
use std::io::{self, IsTerminal, Read};
use tracing::debug;

/// Read the event from stdin when it is not a terminal
pub fn read_stdin_event() -> Result<Option<Event>, CheckError> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(None);
    }
    debug!("using stdin");
    read_event(stdin.lock())
}

/// Read an event from `reader`
///
/// Empty input means no event. Anything else must be a valid Sensu event.
pub fn read_event<R: Read>(mut reader: R) -> Result<Option<Event>, CheckError> {
    let mut raw = String::new();
    reader
        .read_to_string(&mut raw)
        .map_err(|e| CheckError::Event(e.to_string()))?;

    if raw.trim().is_empty() {
        debug!("stdin is empty, no event");
        return Ok(None);
    }

    let event: Event =
        serde_json::from_str(&raw).map_err(|e| CheckError::Event(e.to_string()))?;
    event.validate()?;
    Ok(Some(event))
}

//! Verdict reporting
//!
//! Writes the verdict message as a single line and maps the health state to
//! the Sensu/Nagios exit code convention.

use sensu_tor_check_common::{HealthState, HealthVerdict};
use std::io::Write;
use std::process::ExitCode;
use tracing::warn;

/// Exit code for a health state
pub fn exit_code(state: HealthState) -> u8 {
    match state {
        HealthState::Ok => 0,
        HealthState::Warning => 1,
        HealthState::Critical => 2,
        HealthState::Unknown => 3,
    }
}

/// Write the verdict to `out` and return the process exit code
pub fn emit<W: Write>(out: &mut W, verdict: &HealthVerdict) -> ExitCode {
    let line = verdict.message.replace(['\r', '\n'], " ");
    if let Err(e) = writeln!(out, "{}", line).and_then(|_| out.flush()) {
        warn!(error = %e, "Failed to write check output");
    }
    ExitCode::from(exit_code(verdict.state))
}

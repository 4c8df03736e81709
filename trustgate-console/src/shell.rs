//! The simulator loop: read a command, apply it, print a snapshot.

use std::io::{BufRead, Write};

use serde_json::json;
use tracing::{debug, warn};
use trustgate_core::{DashboardSnapshot, SessionScope};

use crate::command::{parse_line, Command};
use crate::error::ConsoleError;

/// Name used when `login` is given no name, as on the dashboard's login form.
pub const FALLBACK_USER_NAME: &str = "Demo User";

/// What a dispatched command produced.
#[derive(Debug)]
pub enum Outcome {
    /// The dashboard state after the command.
    Snapshot(Box<DashboardSnapshot>),
    /// The user asked to leave.
    Quit,
}

/// Drives a [`SessionScope`] from text commands.
#[derive(Debug)]
pub struct Console {
    scope: SessionScope,
}

impl Console {
    /// Wraps a scope. The scope is normally mounted already.
    #[must_use]
    pub fn new(scope: SessionScope) -> Self {
        Self { scope }
    }

    /// The scope being driven.
    #[must_use]
    pub fn scope(&self) -> &SessionScope {
        &self.scope
    }

    /// Applies one command to the mounted session.
    ///
    /// # Errors
    /// Returns [`ConsoleError::Core`] wrapping
    /// [`trustgate_core::CoreError::Configuration`] if no session is mounted.
    pub fn dispatch(&mut self, command: Command) -> Result<Outcome, ConsoleError> {
        let session = self.scope.session_mut()?;
        match command {
            Command::Login(name) if name.is_empty() => session.login(FALLBACK_USER_NAME),
            Command::Login(name) => session.login(&name),
            Command::Logout => session.logout(),
            Command::Simulator(enabled) => session.set_simulator_mode(enabled),
            Command::Stress(level) => session.set_stress_level(level),
            Command::Speed(speed) => session.set_action_speed(speed),
            Command::Device(context) => session.set_device_context(context),
            Command::Time(time) => session.set_time_of_day(time),
            Command::Elevate => session.request_elevated_access(),
            Command::CloseAccess => session.close_access_modal(),
            Command::Explain => session.open_explainability(),
            Command::CloseExplain => session.close_explainability(),
            Command::Show => {}
            Command::Quit => return Ok(Outcome::Quit),
        }
        Ok(Outcome::Snapshot(Box::new(session.snapshot())))
    }

    /// Reads commands until EOF or `quit`, writing one JSON line per command.
    ///
    /// Malformed lines produce an `{"error": ..}` line and the loop continues.
    ///
    /// # Errors
    /// Returns the first fatal [`ConsoleError`] (see [`ConsoleError::is_fatal`]).
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut out: W) -> Result<(), ConsoleError> {
        let mut buf = Vec::new();
        for idx in 0usize.. {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let result = decode_line(&buf).and_then(parse_line).and_then(|cmd| match cmd {
                Some(cmd) => self.dispatch(cmd).map(Some),
                None => Ok(None),
            });

            match result {
                Ok(None) => {}
                Ok(Some(Outcome::Quit)) => {
                    debug!(line = idx + 1, "quit requested");
                    break;
                }
                Ok(Some(Outcome::Snapshot(snapshot))) => {
                    serde_json::to_writer(&mut out, &snapshot)?;
                    writeln!(out)?;
                }
                Err(e) if !e.is_fatal() => {
                    warn!(line = idx + 1, error = %e, "rejected input");
                    serde_json::to_writer(&mut out, &json!({ "error": e.to_string() }))?;
                    writeln!(out)?;
                }
                Err(e) => return Err(e),
            }
        }
        out.flush()?;
        Ok(())
    }
}

/// Strips the line terminator. Non-UTF-8 bytes are bad input, not I/O failure.
fn decode_line(raw: &[u8]) -> Result<&str, ConsoleError> {
    let line = std::str::from_utf8(raw)
        .map_err(|e| ConsoleError::InvalidCommand(format!("line is not valid UTF-8: {e}")))?;
    Ok(line.trim_end_matches(['\n', '\r']))
}

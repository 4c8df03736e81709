//! Console front-end for the TrustGate reliability dashboard.
//!
//! Reads simulator commands line by line, applies them to a mounted
//! [`trustgate_core::TrustEvaluator`], and prints a JSON
//! [`trustgate_core::DashboardSnapshot`] after each one.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod command;
pub mod error;
pub mod settings;
pub mod shell;

pub use command::{parse_line, Command};
pub use error::ConsoleError;
pub use shell::{Console, Outcome, FALLBACK_USER_NAME};

//! Parsing of simulator command lines.

use std::str::FromStr;

use trustgate_core::{ActionSpeed, DeviceContext, TimeOfDay};

use crate::error::ConsoleError;

/// One simulator action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `login [name]`
    Login(String),
    /// `logout`
    Logout,
    /// `simulator on|off`
    Simulator(bool),
    /// `stress <n>`
    Stress(u32),
    /// `speed normal|rapid|very-rapid`
    Speed(ActionSpeed),
    /// `device known|new|suspicious`
    Device(DeviceContext),
    /// `time working-hours|off-hours`
    Time(TimeOfDay),
    /// `elevate`
    Elevate,
    /// `close-access`
    CloseAccess,
    /// `explain`
    Explain,
    /// `close-explain`
    CloseExplain,
    /// `show`
    Show,
    /// `quit`
    Quit,
}

impl FromStr for Command {
    type Err = ConsoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let command = match verb {
            "login" => Command::Login(rest.to_owned()),
            "logout" => no_args(verb, rest, Command::Logout)?,
            "simulator" => match rest {
                "on" => Command::Simulator(true),
                "off" => Command::Simulator(false),
                other => {
                    return Err(ConsoleError::InvalidCommand(format!(
                        "simulator expects 'on' or 'off', got '{other}'"
                    )))
                }
            },
            "stress" => Command::Stress(rest.parse().map_err(|_| {
                ConsoleError::InvalidCommand(format!("stress expects an integer, got '{rest}'"))
            })?),
            "speed" => Command::Speed(rest.parse()?),
            "device" => Command::Device(rest.parse()?),
            "time" => Command::Time(rest.parse()?),
            "elevate" => no_args(verb, rest, Command::Elevate)?,
            "close-access" => no_args(verb, rest, Command::CloseAccess)?,
            "explain" => no_args(verb, rest, Command::Explain)?,
            "close-explain" => no_args(verb, rest, Command::CloseExplain)?,
            "show" => no_args(verb, rest, Command::Show)?,
            "quit" | "exit" => no_args(verb, rest, Command::Quit)?,
            other => return Err(ConsoleError::InvalidCommand(format!("unknown command '{other}'"))),
        };
        Ok(command)
    }
}

fn no_args(verb: &str, rest: &str, command: Command) -> Result<Command, ConsoleError> {
    if rest.is_empty() {
        Ok(command)
    } else {
        Err(ConsoleError::InvalidCommand(format!("'{verb}' takes no arguments")))
    }
}

/// Parses one input line. Blank lines and `#` comments yield `None`.
///
/// # Errors
/// Returns [`ConsoleError::InvalidCommand`] or a wrapped
/// [`trustgate_core::CoreError::UnknownSignalValue`] for malformed input.
pub fn parse_line(line: &str) -> Result<Option<Command>, ConsoleError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }
    trimmed.parse().map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Command {
        match parse_line(line) {
            Ok(Some(c)) => c,
            other => panic!("expected a command for {line:?}, got {other:?}"),
        }
    }

    #[test]
    fn signal_commands_parse_wire_names() {
        assert_eq!(parse("stress 80"), Command::Stress(80));
        assert_eq!(parse("speed very-rapid"), Command::Speed(ActionSpeed::VeryRapid));
        assert_eq!(parse("device  suspicious"), Command::Device(DeviceContext::Suspicious));
        assert_eq!(parse("time off-hours"), Command::Time(TimeOfDay::OffHours));
    }

    #[test]
    fn login_keeps_multi_word_names() {
        assert_eq!(parse("login Ada Lovelace"), Command::Login("Ada Lovelace".to_owned()));
        assert_eq!(parse("login"), Command::Login(String::new()));
    }

    #[test]
    fn blank_and_comment_lines_are_skipped() {
        assert!(matches!(parse_line("   "), Ok(None)));
        assert!(matches!(parse_line("# scenario C"), Ok(None)));
    }

    #[test]
    fn bad_input_is_rejected() {
        assert!(matches!(parse_line("stress high"), Err(ConsoleError::InvalidCommand(_))));
        assert!(matches!(parse_line("fly"), Err(ConsoleError::InvalidCommand(_))));
        assert!(matches!(parse_line("logout now"), Err(ConsoleError::InvalidCommand(_))));
        assert!(matches!(parse_line("speed warp"), Err(ConsoleError::Core(_))));
    }

    #[test]
    fn simulator_toggle_parses_on_off() {
        assert_eq!(parse("simulator on"), Command::Simulator(true));
        assert_eq!(parse("simulator off"), Command::Simulator(false));
        assert!(parse_line("simulator maybe").is_err());
    }
}

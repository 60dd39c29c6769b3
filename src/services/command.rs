//! Stdin line parsing.
//!
//! Lines starting with `/` are commands; anything else is chat.

#[cfg(test)]
#[path = "command_test.rs"]
mod command_test;

use canvas::color::{Color, ColorError};
use canvas::tool::Tool;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Join,
    Tool(Tool),
    Color(Color),
    Width(f64),
    Quit,
    Chat(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("unknown command `/{0}`; try /join, /tool, /color, /width or /quit")]
    Unknown(String),
    #[error("/{0} needs an argument")]
    MissingArg(&'static str),
    #[error("unknown tool `{0}`; expected brush or eraser")]
    UnknownTool(String),
    #[error("bad color: {0}")]
    BadColor(#[from] ColorError),
    #[error("bad width `{0}`; expected a positive number")]
    BadWidth(String),
}

/// Parse one input line.
///
/// # Errors
///
/// Returns [`CommandError`] for unknown commands or malformed arguments.
pub fn parse(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    let Some(rest) = line.strip_prefix('/') else {
        return Ok(Command::Chat(line.to_string()));
    };

    let (name, arg) = match rest.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (rest, ""),
    };

    match name.to_ascii_lowercase().as_str() {
        "join" => Ok(Command::Join),
        "quit" | "exit" => Ok(Command::Quit),
        "tool" => {
            let arg = required(arg, "tool")?;
            Tool::from_name(arg).map(Command::Tool).ok_or_else(|| CommandError::UnknownTool(arg.to_string()))
        }
        "color" => Ok(Command::Color(Color::parse_hex(required(arg, "color")?)?)),
        "width" => {
            let arg = required(arg, "width")?;
            match arg.parse::<f64>() {
                Ok(width) if width.is_finite() && width > 0.0 => Ok(Command::Width(width)),
                _ => Err(CommandError::BadWidth(arg.to_string())),
            }
        }
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

fn required<'a>(arg: &'a str, command: &'static str) -> Result<&'a str, CommandError> {
    if arg.is_empty() { Err(CommandError::MissingArg(command)) } else { Ok(arg) }
}

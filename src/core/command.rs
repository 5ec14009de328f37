use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::error::CommandError;

/// A button tap, as data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    Increment,
    Decrement,
    Reset,
}

impl Command {
    pub fn to_bytes(&self) -> Result<Vec<u8>, CommandError> {
        let bytes = serde_json::to_vec(self)?;
        debug!("Serialized command: {:?}", self);
        Ok(bytes)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CommandError> {
        let command = serde_json::from_slice(bytes)?;
        debug!("Deserialized command: {:?}", command);
        Ok(command)
    }
}

impl FromStr for Command {
    type Err = CommandError;

    /// Accepts the names and button labels a user would type:
    /// `increment`/`inc`/`+`, `decrement`/`dec`/`-` and `reset`/`0`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        match token.to_ascii_lowercase().as_str() {
            "increment" | "inc" | "+" => Ok(Command::Increment),
            "decrement" | "dec" | "-" => Ok(Command::Decrement),
            "reset" | "0" => Ok(Command::Reset),
            _ => Err(CommandError::Unknown(token.to_string())),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Command::Increment => "increment",
            Command::Decrement => "decrement",
            Command::Reset => "reset",
        };
        f.write_str(name)
    }
}

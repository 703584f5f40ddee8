//! Item-code commands typed at the main prompt.

use std::str::FromStr;

use menu::ItemKind;
use thiserror::Error;

/// A command entered at the item-code prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Stop ordering and print the receipt.
    Done,

    /// Order the `index`th catalog entry of `kind` (`P0`, `D1`, `S0`, ...).
    Select { kind: ItemKind, index: usize },
}

/// Why an item code could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Empty item code")]
    Empty,

    #[error("Unknown item type '{0}'")]
    UnknownKind(char),

    #[error("Invalid item index '{0}'")]
    InvalidIndex(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "done" {
            return Ok(Command::Done);
        }

        let mut chars = s.chars();
        let code = chars.next().ok_or(CommandError::Empty)?;
        let kind = ItemKind::from_code(code).ok_or(CommandError::UnknownKind(code))?;

        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CommandError::InvalidIndex(digits.to_string()));
        }
        let index = digits
            .parse()
            .map_err(|_| CommandError::InvalidIndex(digits.to_string()))?;

        Ok(Command::Select { kind, index })
    }
}

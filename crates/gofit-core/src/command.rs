//! Tokenización de líneas de comando fuera de un wizard.
//!
//! Toda línea debe empezar por el token `gofit`; el segundo token es la
//! acción y el resto son argumentos posicionales.

use thiserror::Error;

use crate::constants::COMMAND_PREFIX;

/// Comando parseado de una línea. Se consume en el dispatcher y se descarta.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub action: String,
    pub args: Vec<String>,
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ParseError {
    #[error("commands must start with 'gofit'")]
    MissingPrefix,
    #[error("Incomplete command.")]
    Incomplete,
}

/// Tokeniza una línea no vacía. La línea llega ya recortada; las líneas en
/// blanco nunca alcanzan el parser (la sesión las descarta en silencio).
pub fn parse_line(line: &str) -> Result<Command, ParseError> {
    let mut parts = line.split_whitespace();
    match parts.next() {
        Some(prefix) if prefix == COMMAND_PREFIX => {}
        _ => return Err(ParseError::MissingPrefix),
    }
    let action = parts.next().ok_or(ParseError::Incomplete)?;
    Ok(Command { action: action.to_string(),
                 args: parts.map(str::to_string).collect() })
}

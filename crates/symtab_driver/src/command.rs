//! The line-oriented command protocol.
//!
//! One command per line: `I <name> <base-type> [params…]` inserts,
//! `L <name>` looks up, `D <name>` deletes, `S`/`E` enter and exit scopes,
//! `P A`/`P C` print all or the current scope, `Q` quits.

use thiserror::Error;

/// One decoded protocol command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `I <name> <base-type> [params…]`. The base type and raw parameter
    /// text still need descriptor formatting before they reach the core.
    Insert {
        name: String,
        base_type: String,
        params: String,
    },
    /// `L <name>`
    Lookup { name: String },
    /// `D <name>`
    Delete { name: String },
    /// `S`
    EnterScope,
    /// `E`
    ExitScope,
    /// `P A`
    PrintAll,
    /// `P C`
    PrintCurrent,
    /// `Q`
    Quit,
}

/// A line that could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command in line '{0}'")]
    Unknown(String),
    #[error("missing operand in line '{0}'")]
    MissingOperand(String),
}

/// Split off the first whitespace-delimited word, returning it and the
/// trimmed remainder.
fn split_word(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.find(char::is_whitespace) {
        Some(i) => (&s[..i], s[i..].trim_start()),
        None => (s, ""),
    }
}

impl Command {
    /// Decode one input line. Blank lines decode to `None`.
    pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let missing = || CommandError::MissingOperand(line.to_string());

        let (op, rest) = split_word(line);
        let cmd = match op {
            "I" => {
                let (name, rest) = split_word(rest);
                let (base_type, params) = split_word(rest);
                if name.is_empty() || base_type.is_empty() {
                    return Err(missing());
                }
                Command::Insert {
                    name: name.to_string(),
                    base_type: base_type.to_string(),
                    params: params.to_string(),
                }
            }
            "L" | "D" => {
                let (name, _) = split_word(rest);
                if name.is_empty() {
                    return Err(missing());
                }
                if op == "L" {
                    Command::Lookup {
                        name: name.to_string(),
                    }
                } else {
                    Command::Delete {
                        name: name.to_string(),
                    }
                }
            }
            "S" => Command::EnterScope,
            "E" => Command::ExitScope,
            "P" => {
                let (mode, _) = split_word(rest);
                match mode {
                    "" => return Err(missing()),
                    "C" => Command::PrintCurrent,
                    _ => Command::PrintAll,
                }
            }
            "Q" => Command::Quit,
            _ => return Err(CommandError::Unknown(line.to_string())),
        };
        Ok(Some(cmd))
    }
}

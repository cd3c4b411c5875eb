use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{FsstressError, Result};

/// A single line of the command stream
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Command {
    Open { file: String },
    Read { fd: u64, len: u64 },
    Write { fd: u64, payload: String },
    Close { fd: u64 },
}

impl Command {
    /// Descriptor the command refers to, `None` for `open`
    pub fn fd(&self) -> Option<u64> {
        match self {
            Command::Open { .. } => None,
            Command::Read { fd, .. } | Command::Write { fd, .. } | Command::Close { fd } => {
                Some(*fd)
            }
        }
    }

    pub fn verb(&self) -> &'static str {
        match self {
            Command::Open { .. } => "open",
            Command::Read { .. } => "read",
            Command::Write { .. } => "write",
            Command::Close { .. } => "close",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Open { file } => write!(f, "open {file}"),
            Command::Read { fd, len } => write!(f, "read {fd} {len}"),
            Command::Write { fd, payload } => write!(f, "write {fd} {payload}"),
            Command::Close { fd } => write!(f, "close {fd}"),
        }
    }
}

impl FromStr for Command {
    type Err = FsstressError;

    /// Decode one rendered line
    ///
    /// The `write` payload is everything after the descriptor and its
    /// separating space, taken verbatim.
    fn from_str(line: &str) -> Result<Self> {
        let fail = |reason: &str| FsstressError::CommandParse {
            line: line.to_string(),
            reason: reason.to_string(),
        };

        let (verb, rest) = line.split_once(' ').ok_or_else(|| fail("missing operands"))?;

        match verb {
            "open" => {
                if rest.is_empty() || rest.contains(char::is_whitespace) {
                    return Err(fail("open takes exactly one filename"));
                }
                Ok(Command::Open {
                    file: rest.to_string(),
                })
            }
            "read" => {
                let mut fields = rest.split(' ');
                let (Some(fd), Some(len), None) = (fields.next(), fields.next(), fields.next())
                else {
                    return Err(fail("read takes a descriptor and a length"));
                };
                Ok(Command::Read {
                    fd: parse_number(fd).ok_or_else(|| fail("invalid descriptor"))?,
                    len: parse_number(len).ok_or_else(|| fail("invalid length"))?,
                })
            }
            "write" => {
                let (fd, payload) = rest
                    .split_once(' ')
                    .ok_or_else(|| fail("write takes a descriptor and a payload"))?;
                Ok(Command::Write {
                    fd: parse_number(fd).ok_or_else(|| fail("invalid descriptor"))?,
                    payload: payload.to_string(),
                })
            }
            "close" => Ok(Command::Close {
                fd: parse_number(rest).ok_or_else(|| fail("invalid descriptor"))?,
            }),
            _ => Err(fail("unknown verb")),
        }
    }
}

/// Plain decimal only; `u64::from_str` would also accept a leading `+`
fn parse_number(field: &str) -> Option<u64> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

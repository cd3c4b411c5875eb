use std::io::Write;

use super::command::Command;
use crate::config::OutputFormat;
use crate::config::consts::command::READ_ALL_LEN;
use crate::error::Result;

/// One open/read/write/close cycle against a single file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub file: String,
    pub fd: u64,
    pub payload: String,
}

impl Block {
    pub fn new(identifier: &str, file: impl Into<String>, fd: u64) -> Self {
        Self {
            file: file.into(),
            fd,
            payload: format!("{identifier}-{fd}_"),
        }
    }

    /// The block's commands, in emission order
    pub fn commands(&self) -> [Command; 4] {
        [
            Command::Open {
                file: self.file.clone(),
            },
            Command::Read {
                fd: self.fd,
                len: READ_ALL_LEN,
            },
            Command::Write {
                fd: self.fd,
                payload: self.payload.clone(),
            },
            Command::Close { fd: self.fd },
        ]
    }

    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W, format: OutputFormat) -> Result<()> {
        for command in self.commands() {
            match format {
                OutputFormat::Text => writeln!(out, "{command}")?,
                OutputFormat::Json => {
                    serde_json::to_writer(&mut *out, &command)?;
                    writeln!(out)?;
                }
            }
        }
        Ok(())
    }
}

/// Write the four text lines for `filename` opened as `descriptor`
pub fn emit_block<W: Write + ?Sized>(
    out: &mut W,
    identifier: &str,
    filename: &str,
    descriptor: u64,
) -> Result<()> {
    Block::new(identifier, filename, descriptor).write_to(out, OutputFormat::Text)
}

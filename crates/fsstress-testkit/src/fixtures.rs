//! Fixtures and output decoding for tests

use fsstress_core::workload::{Block, Command};
use std::path::{Path, PathBuf};

/// Write `content` as `fsstress.toml` inside `dir` and return its path
pub fn write_config(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("fsstress.toml");
    std::fs::write(&path, content).expect("Failed to write config fixture");
    path
}

/// Decode text-format output into commands
///
/// # Panics
///
/// Panics on the first line that does not decode, naming the line number.
pub fn parse_commands(output: &str) -> Vec<Command> {
    output
        .lines()
        .enumerate()
        .map(|(n, line)| {
            line.parse()
                .unwrap_or_else(|e| panic!("line {} does not decode: {}", n + 1, e))
        })
        .collect()
}

/// Regroup decoded output into blocks
///
/// # Panics
///
/// Panics unless the output is a whole number of open/read/write/close
/// groups sharing one descriptor each.
pub fn parse_blocks(output: &str) -> Vec<Block> {
    let commands = parse_commands(output);
    assert_eq!(
        commands.len() % 4,
        0,
        "output is not a whole number of blocks"
    );

    commands
        .chunks(4)
        .map(|chunk| match chunk {
            [
                Command::Open { file },
                Command::Read { fd, .. },
                Command::Write {
                    fd: write_fd,
                    payload,
                },
                Command::Close { fd: close_fd },
            ] if fd == write_fd && fd == close_fd => Block {
                file: file.clone(),
                fd: *fd,
                payload: payload.clone(),
            },
            other => panic!("malformed block: {:?}", other),
        })
        .collect()
}

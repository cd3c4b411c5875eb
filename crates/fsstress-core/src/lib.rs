//! Synthetic file workload generation for fsstress.
//!
//! This crate produces the deterministic `open` / `read` / `write` / `close`
//! command stream consumed by external file-system stress harnesses.
//!
//! # Architecture
//!
//! - [`workload`]: filenames, blocks, the command codec and the generator
//! - [`config`]: workload configuration model and TOML loading
//! - [`error`]: error taxonomy shared by the library and the CLI
//!
//! # Example
//!
//! ```
//! use fsstress_core::workload::{filenames, run};
//!
//! # fn main() -> fsstress_core::Result<()> {
//! let files: Vec<String> = filenames(2).collect();
//! let mut out = Vec::new();
//! let summary = run(&mut out, "A", &files, 1)?;
//!
//! assert_eq!(summary.blocks, 2);
//! assert!(String::from_utf8_lossy(&out).starts_with("open test_0\nread 0 9999999999\n"));
//! # Ok(())
//! # }
//! ```

// Core modules
pub mod config;
pub mod error;
pub mod workload;

// Re-export commonly used types
pub use config::{Config, OutputFormat};
pub use error::{FsstressError, Result};
pub use workload::{Block, Command, Generator, RunSummary};

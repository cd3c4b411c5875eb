//! Synthetic workload generation
//!
//! A run walks the file list `iters` times. Every visit to a file allocates
//! the next descriptor and produces a [`Block`]: four commands that open the
//! file, read it, write a payload tagged with the run identifier and close it.
//!
//! ```text
//! open test_0
//! read 0 9999999999
//! write 0 A-0_
//! close 0
//! ```
//!
//! Descriptors are never reused within a run, even though filenames repeat
//! on every pass.

mod block;
mod command;
mod filenames;
mod generator;

pub use block::{Block, emit_block};
pub use command::Command;
pub use filenames::filenames;
pub use generator::{Generator, RunSummary, run};

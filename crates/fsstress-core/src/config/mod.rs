//! Workload configuration

pub mod consts;
mod model;

pub use model::{Config, OutputConfig, OutputFormat, WorkloadConfig};

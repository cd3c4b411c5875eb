//! Constants shared by the generator and the CLI

/// Workload shape defaults
pub mod workload {
    /// Number of distinct synthetic files
    pub const DEFAULT_FILES: usize = 5;

    /// Number of passes over the file list
    pub const DEFAULT_ITERS: usize = 5;

    /// Prefix of every synthetic filename
    pub const FILE_PREFIX: &str = "test_";
}

/// Command line rendering
pub mod command {
    /// Length field of every `read` command.
    ///
    /// Consumers treat it as "read everything"; the value is kept verbatim.
    pub const READ_ALL_LEN: u64 = 9_999_999_999;
}

/// Environment variable consulted for the log filter
pub const LOG_ENV: &str = "FSSTRESS_LOG";

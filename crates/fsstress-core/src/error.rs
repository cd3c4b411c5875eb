use thiserror::Error;

#[derive(Error, Debug)]
pub enum FsstressError {
    // Argument errors
    #[error("INVALID_ARGUMENT: {0}")]
    InvalidArgument(String),

    // Config errors
    #[error("CONFIG_PARSE_ERROR: {0}")]
    ConfigParseError(String),

    #[error("CONFIG_INVALID: failed to parse workload config: {0}")]
    ConfigInvalid(String),

    // Codec errors
    #[error("COMMAND_PARSE_ERROR: '{line}': {reason}")]
    CommandParse { line: String, reason: String },

    // IO errors
    #[error("IO_ERROR: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<serde_json::Error> for FsstressError {
    fn from(err: serde_json::Error) -> Self {
        // serde_json keeps the underlying io::Error for writer failures
        FsstressError::IoError(err.into())
    }
}

impl FsstressError {
    /// Process exit code for this error
    ///
    /// Argument errors use `2`, matching the usage-error convention of the
    /// argument parser. Everything else is a runtime failure and uses `1`.
    pub fn exit_code(&self) -> i32 {
        match self {
            FsstressError::InvalidArgument(_) => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, FsstressError>;

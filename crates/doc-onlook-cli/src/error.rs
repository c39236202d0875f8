//! Error types for the doc-onlook CLI.
//!
//! CliError wraps CoreError from the shared library and adds CLI-specific variants.

use doc_onlook_core::error::CoreError;
use doc_onlook_core::DeviceError;
use thiserror::Error;

/// Exit codes for the CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const NETWORK_ERROR: i32 = 2;
    pub const RECEIVER_ERROR: i32 = 3;
    pub const INVALID_ARGS: i32 = 4;
    pub const PARTIAL_FAILURE: i32 = 5;
}

/// Main error type for the CLI
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Core error: {0}")]
    Core(#[from] CoreError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Receiver {address} reported an error: {message}")]
    Receiver { address: String, message: String },

    #[error("Partial failure: {succeeded} succeeded, {failed} failed")]
    PartialFailure { succeeded: usize, failed: usize },
}

impl CliError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Core(e) => match e {
                CoreError::Device(DeviceError::Transport { .. }) => exit_codes::NETWORK_ERROR,
                CoreError::Device(DeviceError::TransportUnavailable | DeviceError::NoRuntime) => {
                    exit_codes::GENERAL_ERROR
                }
                CoreError::Other(_) => exit_codes::GENERAL_ERROR,
            },
            CliError::Io(_) => exit_codes::GENERAL_ERROR,
            CliError::InvalidArgument(_) => exit_codes::INVALID_ARGS,
            CliError::Receiver { .. } => exit_codes::RECEIVER_ERROR,
            CliError::PartialFailure { .. } => exit_codes::PARTIAL_FAILURE,
        }
    }
}

impl From<DeviceError> for CliError {
    fn from(e: DeviceError) -> Self {
        CliError::Core(CoreError::Device(e))
    }
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

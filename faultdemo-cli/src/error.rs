//! CLI-specific error types and exit code mapping

use faultdemo_core::error::FaultDemoError;

/// CLI-specific error type.
///
/// Scenario faults never surface here; they are caught inside each scenario.
/// The `exit_code()` method maps errors to process exit codes.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration loading or validation failure.
    #[error("configuration error: {0}")]
    Config(String),

    /// Startup step failed (e.g. tracing initialisation).
    #[error("{0}")]
    Command(String),

    /// JSON serialisation failed during output rendering.
    #[error("json output error: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    /// IO error (config read, stdout write, etc.).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map the error to a process exit code.
    ///
    /// | Code | Meaning                 |
    /// |------|-------------------------|
    /// | 0    | Success                 |
    /// | 1    | General / command error |
    /// | 2    | Configuration error     |
    /// | 10   | IO error                |
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => 2,
            Self::Io(_) => 10,
            Self::JsonSerialize(_) | Self::Command(_) => 1,
        }
    }
}

impl From<FaultDemoError> for CliError {
    fn from(e: FaultDemoError) -> Self {
        match e {
            FaultDemoError::Config(inner) => Self::Config(inner.to_string()),
            FaultDemoError::Io(inner) => Self::Io(inner),
        }
    }
}

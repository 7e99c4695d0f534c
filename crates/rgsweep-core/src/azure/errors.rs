use crate::errors::RgSweepError;

#[derive(Debug, thiserror::Error)]
pub enum AzureError {
    #[error("Azure CLI not found: '{path}'. Install it or pass --az-path")]
    CliNotFound { path: String },

    #[error("Failed to run '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{command}' failed ({status}): {stderr}")]
    CommandFailed {
        command: String,
        status: String,
        stderr: String,
    },

    #[error("Unexpected output from '{command}': {message}")]
    InvalidOutput { command: String, message: String },
}

impl RgSweepError for AzureError {
    fn error_code(&self) -> &'static str {
        match self {
            AzureError::CliNotFound { .. } => "AZURE_CLI_NOT_FOUND",
            AzureError::SpawnFailed { .. } => "AZURE_SPAWN_FAILED",
            AzureError::CommandFailed { .. } => "AZURE_COMMAND_FAILED",
            AzureError::InvalidOutput { .. } => "AZURE_INVALID_OUTPUT",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, AzureError::CliNotFound { .. })
    }
}

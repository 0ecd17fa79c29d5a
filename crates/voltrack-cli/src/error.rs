use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] voltrack_core::ValidationError),

    #[error(transparent)]
    Core(#[from] voltrack_core::CoreError),

    #[error("command error: {0}")]
    Command(String),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) | Self::Core(_) => 2,
            Self::Command(_) | Self::Serialization(_) | Self::Io(_) => 10,
        }
    }
}

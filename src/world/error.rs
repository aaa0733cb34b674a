use thiserror::Error;

use super::validator::ValidationError;

/// Anything that stops a world from being built. All of these are fatal at startup.
#[derive(Debug, Error)]
pub enum WorldError {
    #[error("invalid world description: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("duplicate room key '{0}'")]
    DuplicateRoom(String),

    #[error("{context} references unknown room '{key}'")]
    UnknownRoom { context: String, key: String },

    #[error("item in room '{0}' has an empty name")]
    EmptyItemName(String),

    #[error("world failed validation: {}", join_messages(.0))]
    Invalid(Vec<ValidationError>),
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

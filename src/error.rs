use thiserror::Error;

/// Descriptor-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read descriptor file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse descriptor: {0}")]
    Parse(#[source] toml::de::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no node named '{0}' in descriptor")]
    NodeNotFound(String),

    #[error("more than one node is labelled '{0}'")]
    DuplicateNode(String),
}

pub type Result<T> = std::result::Result<T, Error>;

// crates/shared-kernel/src/error.rs
use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum TagGrouperError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<TagGrouperError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

pub type Result<T> = std::result::Result<T, TagGrouperError>;

/// Domain-layer specific errors.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Record #{index} is missing required field '{field}'")]
    MissingField { index: usize, field: &'static str },

    #[error("Record #{index} is invalid: {reason}")]
    InvalidRecord { index: usize, reason: String },

    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },
}

impl DomainError {
    /// Position of the offending record in the input, when the error concerns one.
    pub fn record_index(&self) -> Option<usize> {
        match self {
            Self::MissingField { index, .. } | Self::InvalidRecord { index, .. } => Some(*index),
            Self::InvalidConfiguration { .. } => None,
        }
    }
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Application-layer errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Failed to load records: {reason}")]
    SourceFailed {
        reason: String,
        #[source]
        source: Option<Box<TagGrouperError>>,
    },
}

pub type ApplicationResult<T> = std::result::Result<T, ApplicationError>;

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Failed to parse {format} input: {details}")]
    SerializationError { format: String, details: String },

    #[error("Failed to format {format} output: {details}")]
    FormatError { format: String, details: String },
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

impl From<serde_json::Error> for InfrastructureError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            format: "JSON".to_string(),
            details: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for TagGrouperError {
    fn from(err: serde_json::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

impl From<std::fmt::Error> for InfrastructureError {
    fn from(err: std::fmt::Error) -> Self {
        Self::FormatError {
            format: "dump".to_string(),
            details: err.to_string(),
        }
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<TagGrouperError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| TagGrouperError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| TagGrouperError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}

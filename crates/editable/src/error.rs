use crate::host::HostRef;
use thiserror::Error;

type BoxError = Box<dyn std::error::Error + 'static>;

/// Failure reported by a value transform. Aborts the commit it belongs to.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct TransformError {
    message: String,
    #[source]
    source: Option<BoxError>,
}

impl TransformError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(message: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Debug, Error)]
pub enum EditError {
    /// The transform rejected; state and surface are left as they were.
    #[error("value transform rejected the edit: {0}")]
    TransformRejected(#[from] TransformError),

    /// The surface handle no longer resolves to a mounted node.
    #[error("surface {0} is not mounted")]
    Detached(HostRef),

    /// The surface does not have the shape the adapter reads and restores against.
    #[error("surface {surface} has an unexpected structure: {detail}")]
    StructuralMismatch {
        surface: HostRef,
        detail: &'static str,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid editable options: {0}")]
    Toml(#[from] toml::de::Error),
}

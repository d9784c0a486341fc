use std::path::PathBuf;

use thiserror::Error;

/// Which kind of resource file a lookup was for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    CultureMatrix,
    FocusDocument,
    Framework,
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ResourceKind::CultureMatrix => "culture matrix",
            ResourceKind::FocusDocument => "focus document",
            ResourceKind::Framework => "framework prompt",
        };
        f.write_str(name)
    }
}

/// Errors raised by the prompt assembly engine.
///
/// Every variant carries the key (scale, level, org or path) that caused it so
/// callers can build a user-facing message without re-deriving context.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("{kind} not found for '{key}' ({})", path.display())]
    ResourceNotFound {
        kind: ResourceKind,
        key: String,
        path: PathBuf,
    },

    #[error("No culture data found for scale={scale}, level={level}")]
    InvalidLevel { scale: String, level: String },

    #[error("Malformed resource {}: {reason}", path.display())]
    MalformedResource { path: PathBuf, reason: String },

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error(
        "Scale '{scale}' attributes differ from '{baseline}': missing {missing:?}, extra {extra:?}"
    )]
    InconsistentCatalog {
        scale: String,
        baseline: String,
        missing: Vec<String>,
        extra: Vec<String>,
    },
}

impl EngineError {
    /// True when the failure indicates a bad request rather than a broken deployment.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            EngineError::ResourceNotFound { .. } | EngineError::InvalidLevel { .. }
        )
    }
}

pub type EngineResult<T> = Result<T, EngineError>;

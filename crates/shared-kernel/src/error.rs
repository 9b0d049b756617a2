// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum PomVersionError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<PomVersionError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("Presentation error: {0}")]
    Presentation(#[from] PresentationError),
}

impl PomVersionError {
    /// Walks through any `Context` wrappers and returns the innermost error.
    pub fn root(&self) -> &PomVersionError {
        match self {
            Self::Context { source, .. } => source.root(),
            other => other,
        }
    }

    /// Process exit status for this error: usage problems map to 2, everything else to 1.
    pub fn exit_code(&self) -> u8 {
        match self.root() {
            Self::Presentation(_) => 2,
            _ => 1,
        }
    }

    pub fn is_structure_error(&self) -> bool {
        matches!(self.root(), Self::Domain(_))
    }

    pub fn is_parse_error(&self) -> bool {
        matches!(self.root(), Self::Infrastructure(InfrastructureError::Parse { .. }))
    }

    pub fn is_io_error(&self) -> bool {
        matches!(
            self.root(),
            Self::Infrastructure(
                InfrastructureError::FileRead { .. }
                    | InfrastructureError::FileWrite { .. }
                    | InfrastructureError::FileLock { .. }
            )
        )
    }
}

pub type Result<T> = std::result::Result<T, PomVersionError>;

/// Domain-layer errors: the document parsed but does not have the expected shape.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("expected root element <{expected}>, found <{found}>")]
    UnexpectedRoot { expected: String, found: String },

    #[error("no <{child}> element under <{parent}>")]
    MissingElement { parent: String, child: String },

    #[error("<{child}> appears {count} times under <{parent}>")]
    DuplicateElement {
        parent: String,
        child: String,
        count: usize,
    },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to lock '{path}': {source}")]
    FileLock {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed XML at byte {position}: {details}")]
    Parse { position: u64, details: String },

    #[error("Failed to serialize XML: {details}")]
    Serialization { details: String },

    #[error("Store finished '{path}' without applying the update")]
    UpdateNotApplied { path: PathBuf },
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

/// Presentation-layer errors.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("missing required argument <{argument}>")]
    MissingArgument { argument: String },
}

pub type PresentationResult<T> = std::result::Result<T, PresentationError>;

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<PomVersionError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| PomVersionError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| PomVersionError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}

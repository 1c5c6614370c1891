use thiserror::Error;

#[derive(Error, Debug)]
pub enum GhesError {
    #[error("Missing required environment variable {0}")]
    MissingEnv(&'static str),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("GitHub API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("GitHub request failed: {0}")]
    GitHub(String),

    #[error("Unexpected API response: {0}")]
    InvalidResponse(String),

    #[error("Organization at position {index} has no `login` field")]
    MissingLogin { index: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<octocrab::Error> for GhesError {
    fn from(err: octocrab::Error) -> Self {
        match err {
            octocrab::Error::GitHub { source, .. } => GhesError::Api {
                status: source.status_code.as_u16(),
                message: source.message,
            },
            octocrab::Error::Serde { source, .. } => GhesError::InvalidResponse(source.to_string()),
            octocrab::Error::Json { source, .. } => GhesError::InvalidResponse(source.to_string()),
            other => GhesError::GitHub(other.to_string()),
        }
    }
}

impl From<tempfile::PersistError> for GhesError {
    fn from(err: tempfile::PersistError) -> Self {
        GhesError::Io(err.error)
    }
}

pub type Result<T> = std::result::Result<T, GhesError>;

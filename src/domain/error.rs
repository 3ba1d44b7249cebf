// src/domain/error.rs
use thiserror::Error;

use crate::domain::bookmark::BookmarkBuilderError;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid bookmark ID: {0}")]
    InvalidBookmarkId(String),

    #[error("Bookmark operation failed: {0}")]
    BookmarkOperationFailed(String),

    #[error("Trash operation failed: {0}")]
    TrashOperationFailed(String),

    #[error("Remote service error: {0}")]
    RemoteService(String),

    #[error("Failed to deserialize server response: {0}")]
    Deserialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Other error: {0}")]
    Other(String),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl DomainError {
    pub fn context<C: Into<String>>(self, context: C) -> Self {
        match self {
            DomainError::Other(msg) => DomainError::Other(format!("{}: {}", context.into(), msg)),
            DomainError::RemoteService(msg) => {
                DomainError::RemoteService(format!("{}: {}", context.into(), msg))
            }
            DomainError::TrashOperationFailed(msg) => {
                DomainError::TrashOperationFailed(format!("{}: {}", context.into(), msg))
            }
            err => DomainError::Other(format!("{}: {}", context.into(), err)),
        }
    }
}

impl From<BookmarkBuilderError> for DomainError {
    fn from(e: BookmarkBuilderError) -> Self {
        DomainError::BookmarkOperationFailed(e.to_string())
    }
}

// src/infrastructure/error.rs
use thiserror::Error;

use crate::domain::error::DomainError;

#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(error: InfrastructureError) -> Self {
        match error {
            InfrastructureError::Network(msg) => DomainError::RemoteService(msg),
            InfrastructureError::Serialization(msg) => DomainError::Deserialization(msg),
            InfrastructureError::InvalidEndpoint(msg) => DomainError::InvalidUrl(msg),
        }
    }
}

impl From<InfrastructureError> for crate::application::error::ApplicationError {
    fn from(error: InfrastructureError) -> Self {
        crate::application::error::ApplicationError::Domain(error.into())
    }
}

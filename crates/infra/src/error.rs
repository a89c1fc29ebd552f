// crates/infra/src/error.rs
use thiserror::Error;

use gitver_domain::DomainError;

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Git operation failed: {operation} - {details}")]
    GitError { operation: String, details: String },

    #[error(transparent)]
    Domain(#[from] DomainError),
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

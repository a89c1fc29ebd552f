// crates/domain/src/error.rs
use thiserror::Error;

use crate::value_objects::BaseVersion;

/// Domain-layer errors for version derivation.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid version '{input}': {details}")]
    InvalidVersion { input: String, details: String },

    #[error("Unparsable describe output '{output}': {details}")]
    UnparsableDescribe { output: String, details: String },

    #[error(
        "Version mismatch: tag '{tag}' carries {actual} but the declared version is {declared}"
    )]
    VersionMismatch {
        tag: String,
        actual: BaseVersion,
        declared: BaseVersion,
    },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

//! # Domain
//!
//! Pure version-derivation model for `gitver`:
//!
//! - [`value_objects`]: `BaseVersion` and `TagName`
//! - [`model`]: the resolved [`VersionDescriptor`] and the observed [`RepoSnapshot`]
//! - [`describe`]: `git describe` output grammar
//! - [`resolve`]: the policy turning a snapshot into a descriptor
//!
//! Nothing in this crate performs I/O; the git adapter lives in `gitver_infra`.

// crates/domain/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod describe;
pub mod error;
pub mod model;
pub mod options;
pub mod resolve;
pub mod value_objects;

pub use describe::DescribeOutput;
pub use error::{DomainError, DomainResult};
pub use model::{RepoSnapshot, VersionDescriptor};
pub use options::ResolveOptions;
pub use resolve::resolve;
pub use value_objects::{BaseVersion, TagName};

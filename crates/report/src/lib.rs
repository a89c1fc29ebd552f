//! # Report
//!
//! The basic example application: reconstructs the version descriptor the
//! build script baked in and prints the fixed report to stdout.

// crates/report/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod report;

use gitver_domain::{BaseVersion, DomainError, DomainResult, VersionDescriptor};

// Captured by build.rs from the enclosing work tree.
const MAJOR: &str = env!("GITVER_REPORT_MAJOR");
const MINOR: &str = env!("GITVER_REPORT_MINOR");
const PATCH: &str = env!("GITVER_REPORT_PATCH");
const FULL_VERSION: &str = env!("GITVER_REPORT_FULL_VERSION");

/// Rebuilds the descriptor baked in at build time.
///
/// Constructed explicitly at startup and handed to the reporter, rather
/// than having the reporter read global version symbols itself.
pub fn baked_descriptor() -> DomainResult<VersionDescriptor> {
    let base = BaseVersion::new(
        component("major", MAJOR)?,
        component("minor", MINOR)?,
        component("patch", PATCH)?,
    );
    Ok(VersionDescriptor::baked(base, FULL_VERSION))
}

fn component(name: &str, value: &str) -> DomainResult<u32> {
    value.parse().map_err(|_| DomainError::InvalidVersion {
        input: value.to_string(),
        details: format!("baked {name} component is not a non-negative integer"),
    })
}

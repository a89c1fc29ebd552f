// crates/domain/src/resolve.rs
use crate::error::{DomainError, DomainResult};
use crate::model::{RepoSnapshot, VersionDescriptor};
use crate::options::ResolveOptions;

/// Turns an observed work-tree snapshot into a version descriptor.
///
/// Pure policy: the only failure path is a declared-version mismatch when
/// [`ResolveOptions::with_fail_on_mismatch`] is set. Missing repositories,
/// missing tags and version-less tags all degrade to the default version.
pub fn resolve(
    options: &ResolveOptions,
    snapshot: &RepoSnapshot,
) -> DomainResult<VersionDescriptor> {
    match snapshot {
        RepoSnapshot::Described {
            tag,
            commits_since,
            commit_hash,
            dirty,
        } => match tag.version(options.prefix()) {
            Some(base) => {
                if options.fail_on_mismatch() && base != options.default_version() {
                    return Err(DomainError::VersionMismatch {
                        tag: tag.to_string(),
                        actual: base,
                        declared: options.default_version(),
                    });
                }
                if *commits_since == 0 {
                    Ok(VersionDescriptor::tagged(base, tag.clone(), *dirty))
                } else {
                    Ok(VersionDescriptor::development(
                        base,
                        tag.clone(),
                        *commits_since,
                        commit_hash.clone(),
                        *dirty,
                    ))
                }
            }
            // A tag with no version number is no better than no tag.
            None => Ok(VersionDescriptor::untagged(
                options.default_version(),
                commit_hash.clone(),
                *dirty,
            )),
        },
        RepoSnapshot::Untagged { commit_hash, dirty } => Ok(VersionDescriptor::untagged(
            options.default_version(),
            Some(commit_hash.clone()),
            *dirty,
        )),
        RepoSnapshot::Unavailable => Ok(VersionDescriptor::fallback(options.default_version())),
    }
}

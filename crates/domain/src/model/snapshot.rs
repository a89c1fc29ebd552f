// crates/domain/src/model/snapshot.rs
use crate::value_objects::TagName;

/// Observed state of a work tree, as reported by an infrastructure probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoSnapshot {
    /// `git describe` found a tag reachable from HEAD.
    Described {
        tag: TagName,
        /// Commits between the tag and HEAD; 0 means HEAD is on the tag.
        commits_since: u32,
        /// Abbreviated HEAD hash. Absent when HEAD sits exactly on the tag.
        commit_hash: Option<String>,
        dirty: bool,
    },
    /// Commits exist but no tag is reachable.
    Untagged { commit_hash: String, dirty: bool },
    /// Not a repository, no commits yet, or no usable git at all.
    Unavailable,
}

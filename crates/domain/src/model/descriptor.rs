// crates/domain/src/model/descriptor.rs
use serde::Serialize;

use crate::value_objects::{BaseVersion, TagName};

/// 解決済みバージョンの不変レコード
///
/// Constructed once and never mutated. The display string is always derived
/// from the numeric components, so the two can never drift apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionDescriptor {
    base: BaseVersion,
    display: String,
    full: String,
    tag: Option<TagName>,
    commit_hash: Option<String>,
    commits_since_tag: u32,
    dirty: bool,
}

impl VersionDescriptor {
    fn with_full(
        base: BaseVersion,
        full: String,
        tag: Option<TagName>,
        commit_hash: Option<String>,
        commits_since_tag: u32,
        dirty: bool,
    ) -> Self {
        Self {
            display: base.to_string(),
            base,
            full,
            tag,
            commit_hash,
            commits_since_tag,
            dirty,
        }
    }

    /// HEAD sits exactly on a version tag.
    pub fn tagged(base: BaseVersion, tag: TagName, dirty: bool) -> Self {
        let full = if dirty {
            format!("{base}-dirty")
        } else {
            base.to_string()
        };
        Self::with_full(base, full, Some(tag), None, 0, dirty)
    }

    /// Commits exist after the latest version tag.
    pub fn development(
        base: BaseVersion,
        tag: TagName,
        commits_since_tag: u32,
        commit_hash: Option<String>,
        dirty: bool,
    ) -> Self {
        let mut full = format!("{base}-dev.{commits_since_tag}");
        match &commit_hash {
            Some(hash) => {
                full.push('+');
                full.push_str(hash);
                if dirty {
                    full.push_str(".dirty");
                }
            }
            None if dirty => full.push_str("-dirty"),
            None => {}
        }
        Self::with_full(base, full, Some(tag), commit_hash, commits_since_tag, dirty)
    }

    /// History exists but carries no version tag; `base` is the fallback.
    pub fn untagged(base: BaseVersion, commit_hash: Option<String>, dirty: bool) -> Self {
        let mut full = base.to_string();
        match &commit_hash {
            Some(hash) => {
                full.push('+');
                full.push_str(hash);
                if dirty {
                    full.push_str(".dirty");
                }
            }
            None if dirty => full.push_str("-dirty"),
            None => {}
        }
        Self::with_full(base, full, None, commit_hash, 0, dirty)
    }

    /// No repository state was observable at all.
    pub fn fallback(base: BaseVersion) -> Self {
        let full = base.to_string();
        Self::with_full(base, full, None, None, 0, false)
    }

    /// Reconstructs a descriptor captured by an earlier resolution,
    /// e.g. one baked into a binary at build time.
    pub fn baked(base: BaseVersion, full: impl Into<String>) -> Self {
        Self::with_full(base, full.into(), None, None, 0, false)
    }

    #[inline]
    pub fn base(&self) -> BaseVersion {
        self.base
    }

    /// `"{major}.{minor}.{patch}"`, always consistent with [`Self::base`].
    #[inline]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// The extended version string, including any development or
    /// work-tree suffixes.
    #[inline]
    pub fn full_version(&self) -> &str {
        &self.full
    }

    #[inline]
    pub fn tag(&self) -> Option<&TagName> {
        self.tag.as_ref()
    }

    #[inline]
    pub fn commit_hash(&self) -> Option<&str> {
        self.commit_hash.as_deref()
    }

    #[inline]
    pub fn commits_since_tag(&self) -> u32 {
        self.commits_since_tag
    }

    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// HEAD is exactly on a version tag; work-tree state does not matter.
    #[inline]
    pub fn is_tagged(&self) -> bool {
        self.tag.is_some() && self.commits_since_tag == 0
    }

    /// Commits were made after the latest version tag.
    #[inline]
    pub fn is_development(&self) -> bool {
        self.tag.is_some() && self.commits_since_tag > 0
    }
}

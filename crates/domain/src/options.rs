// crates/domain/src/options.rs
use crate::value_objects::BaseVersion;

/// Options controlling version resolution.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    prefix: Option<String>,
    default_version: BaseVersion,
    fail_on_mismatch: bool,
}

impl ResolveOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// タグ接頭辞 (例: `v`)
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// タグが無い場合に採用する既定バージョン
    #[must_use]
    pub fn with_default_version(mut self, version: BaseVersion) -> Self {
        self.default_version = version;
        self
    }

    /// Treat a tag version that differs from the declared default as an error.
    #[must_use]
    pub fn with_fail_on_mismatch(mut self, fail: bool) -> Self {
        self.fail_on_mismatch = fail;
        self
    }

    #[inline]
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    #[inline]
    pub fn default_version(&self) -> BaseVersion {
        self.default_version
    }

    #[inline]
    pub fn fail_on_mismatch(&self) -> bool {
        self.fail_on_mismatch
    }
}

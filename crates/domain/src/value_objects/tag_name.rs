// crates/domain/src/value_objects/tag_name.rs
use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::value_objects::BaseVersion;

/// git タグ名
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagName(String);

impl TagName {
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Extracts the version the tag carries, if any.
    ///
    /// A configured prefix (e.g. `v`) is stripped first when present;
    /// tags without the prefix are still searched, since the original
    /// behavior tolerates prefixed and bare tags interchangeably.
    pub fn version(&self, prefix: Option<&str>) -> Option<BaseVersion> {
        let name = match prefix {
            Some(p) if !p.is_empty() => self.0.strip_prefix(p).unwrap_or(&self.0),
            _ => &self.0,
        };
        BaseVersion::extract(name)
    }
}

impl Display for TagName {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for TagName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl From<&str> for TagName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

// crates/domain/src/value_objects/base_version.rs
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// 3成分のベースバージョン (major.minor.patch)
///
/// Components are unsigned, so negative values are unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BaseVersion {
    major: u32,
    minor: u32,
    patch: u32,
}

impl BaseVersion {
    pub const ZERO: Self = Self::new(0, 0, 0);

    #[inline]
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    #[inline]
    pub const fn major(self) -> u32 {
        self.major
    }

    #[inline]
    pub const fn minor(self) -> u32 {
        self.minor
    }

    #[inline]
    pub const fn patch(self) -> u32 {
        self.patch
    }

    /// Finds the first version number embedded in arbitrary text.
    ///
    /// Trailing junk after the dotted-decimal core is ignored, so
    /// `1.2.3.4`, `1.2.3rc1` and `1.0.0-alpha.1` all yield `1.2.3` /
    /// `1.0.0`. Missing minor or patch components default to zero.
    /// Text without any digit sequence yields `None`.
    pub fn extract(text: &str) -> Option<Self> {
        let caps = embedded_re().captures(text)?;
        Some(Self::new(
            parse_component(caps.get(1)?.as_str()).ok()?,
            caps.get(2).map_or(Ok(0), |m| parse_component(m.as_str())).ok()?,
            caps.get(3).map_or(Ok(0), |m| parse_component(m.as_str())).ok()?,
        ))
    }
}

impl Display for BaseVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl Default for BaseVersion {
    fn default() -> Self {
        Self::ZERO
    }
}

impl FromStr for BaseVersion {
    type Err = DomainError;

    /// Strict form: `X`, `X.Y` or `X.Y.Z`, nothing else.
    fn from_str(input: &str) -> DomainResult<Self> {
        let caps = strict_re()
            .captures(input)
            .ok_or_else(|| DomainError::InvalidVersion {
                input: input.to_string(),
                details: "expected dotted-decimal form X.Y.Z".to_string(),
            })?;

        let component = |index: usize| -> DomainResult<u32> {
            caps.get(index).map_or(Ok(0), |m| {
                parse_component(m.as_str()).map_err(|details| DomainError::InvalidVersion {
                    input: input.to_string(),
                    details,
                })
            })
        };

        Ok(Self::new(component(1)?, component(2)?, component(3)?))
    }
}

fn parse_component(digits: &str) -> Result<u32, String> {
    digits
        .parse()
        .map_err(|_| format!("component '{digits}' exceeds the supported range"))
}

fn strict_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d+)(?:\.(\d+))?(?:\.(\d+))?$").unwrap())
}

fn embedded_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d+)(?:\.(\d+))?(?:\.(\d+))?").unwrap())
}

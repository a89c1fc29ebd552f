// crates/domain/src/describe.rs
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{DomainError, DomainResult};
use crate::value_objects::TagName;

/// Parsed `git describe --tags` output.
///
/// The grammar is either `TAG` alone (HEAD is on the tag) or
/// `TAG-N-gHASH`. The suffix is matched from the right, so tags that
/// themselves contain hyphens (`v1.0.0-alpha.1`) stay intact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescribeOutput {
    pub tag: TagName,
    pub commits_since: u32,
    pub commit_hash: Option<String>,
}

impl FromStr for DescribeOutput {
    type Err = DomainError;

    fn from_str(output: &str) -> DomainResult<Self> {
        let trimmed = output.trim();
        if trimmed.is_empty() {
            return Err(DomainError::UnparsableDescribe {
                output: output.to_string(),
                details: "empty output".to_string(),
            });
        }

        if let Some(caps) = suffix_re().captures(trimmed) {
            let commits_since = caps[2].parse().map_err(|_| DomainError::UnparsableDescribe {
                output: output.to_string(),
                details: "commit distance exceeds the supported range".to_string(),
            })?;
            return Ok(Self {
                tag: caps[1].into(),
                commits_since,
                commit_hash: Some(caps[3].to_string()),
            });
        }

        Ok(Self {
            tag: trimmed.into(),
            commits_since: 0,
            commit_hash: None,
        })
    }
}

fn suffix_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Greedy leading group keeps the rightmost -N-gHASH as the suffix.
    RE.get_or_init(|| Regex::new(r"^(.+)-(\d+)-g([0-9a-f]+)$").unwrap())
}

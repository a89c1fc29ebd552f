// crates/infra/src/git.rs
use std::io;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use gitver_domain::{DescribeOutput, RepoSnapshot};

use crate::error::{InfraResult, InfrastructureError};

/// Observes a git work tree and reports it as a [`RepoSnapshot`].
///
/// Probes degrade rather than fail: a missing `git` binary, a directory
/// that is no repository, or a repository without commits all yield
/// [`RepoSnapshot::Unavailable`] so version derivation can fall back to
/// its default version.
#[derive(Debug, Clone)]
pub struct GitWorkTree {
    dir: PathBuf,
}

impl GitWorkTree {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn snapshot(&self) -> InfraResult<RepoSnapshot> {
        let Some(describe) = self.git_stdout("describe", &["describe", "--tags", "--abbrev=7"])?
        else {
            return self.snapshot_without_tags();
        };
        if describe.is_empty() {
            return self.snapshot_without_tags();
        }

        let parsed: DescribeOutput = describe.parse().map_err(InfrastructureError::from)?;
        Ok(RepoSnapshot::Described {
            tag: parsed.tag,
            commits_since: parsed.commits_since,
            commit_hash: parsed.commit_hash,
            dirty: self.is_dirty()?,
        })
    }

    fn snapshot_without_tags(&self) -> InfraResult<RepoSnapshot> {
        match self.git_stdout("rev-parse", &["rev-parse", "--short=7", "HEAD"])? {
            Some(hash) if !hash.is_empty() => Ok(RepoSnapshot::Untagged {
                commit_hash: hash,
                dirty: self.is_dirty()?,
            }),
            _ => Ok(RepoSnapshot::Unavailable),
        }
    }

    /// A status probe that fails on an otherwise readable repository is
    /// treated as a clean work tree.
    fn is_dirty(&self) -> InfraResult<bool> {
        Ok(self
            .git_stdout("status", &["status", "--porcelain"])?
            .is_some_and(|status| !status.is_empty()))
    }

    /// Runs git and captures trimmed stdout. `Ok(None)` covers the
    /// expected failures: non-zero exit or no git binary on the PATH.
    fn git_stdout(&self, operation: &str, args: &[&str]) -> InfraResult<Option<String>> {
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.dir)
            .stdin(Stdio::null())
            .output();

        let output = match output {
            Ok(output) => output,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(InfrastructureError::GitError {
                    operation: operation.to_string(),
                    details: err.to_string(),
                });
            }
        };

        if !output.status.success() {
            return Ok(None);
        }
        Ok(Some(
            String::from_utf8_lossy(&output.stdout).trim().to_string(),
        ))
    }
}

// crates/cli/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod args;
pub mod config;
pub mod error;
pub mod options;
pub mod presentation;

use gitver_domain::{ResolveOptions, resolve};
use gitver_infra::GitWorkTree;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Resolves the version of the requested work tree and prints it.
pub fn run(args: &args::Args) -> error::Result<()> {
    let options = ResolveOptions::from(args);
    let snapshot = GitWorkTree::new(&args.source_dir).snapshot()?;
    let descriptor = resolve(&options, &snapshot)?;
    presentation::print_descriptor(&descriptor, args)?;
    Ok(())
}

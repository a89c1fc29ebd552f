// crates/report/build.rs
use std::env;

use anyhow::{Context, Result};
use gitver_domain::{BaseVersion, RepoSnapshot, ResolveOptions, resolve};
use gitver_infra::GitWorkTree;

/// Derives the version descriptor from the enclosing work tree and bakes
/// it into the binary. Without usable git state the version falls back to
/// this crate's manifest version.
fn main() -> Result<()> {
    println!("cargo:rerun-if-changed=../../.git/HEAD");
    println!("cargo:rerun-if-changed=../../.git/refs");

    let manifest_dir = env::var("CARGO_MANIFEST_DIR").context("CARGO_MANIFEST_DIR is unset")?;
    let manifest_version: BaseVersion = env::var("CARGO_PKG_VERSION")
        .context("CARGO_PKG_VERSION is unset")?
        .parse()
        .context("manifest version is not dotted-decimal")?;

    let options = ResolveOptions::new()
        .with_prefix("v")
        .with_default_version(manifest_version);
    let snapshot = GitWorkTree::new(&manifest_dir)
        .snapshot()
        .unwrap_or(RepoSnapshot::Unavailable);
    let descriptor = resolve(&options, &snapshot)?;

    println!("cargo:rustc-env=GITVER_REPORT_VERSION={}", descriptor.display());
    println!(
        "cargo:rustc-env=GITVER_REPORT_FULL_VERSION={}",
        descriptor.full_version()
    );
    println!("cargo:rustc-env=GITVER_REPORT_MAJOR={}", descriptor.base().major());
    println!("cargo:rustc-env=GITVER_REPORT_MINOR={}", descriptor.base().minor());
    println!("cargo:rustc-env=GITVER_REPORT_PATCH={}", descriptor.base().patch());
    Ok(())
}

// crates/cli/src/presentation.rs
use serde::Serialize;

use gitver_domain::VersionDescriptor;

use crate::args::Args;
use crate::error::Result;
use crate::options::OutputFormat;

/// Machine-facing projection of a descriptor, flags included.
#[derive(Debug, Serialize)]
struct VersionReport<'a> {
    version: &'a str,
    full_version: &'a str,
    major: u32,
    minor: u32,
    patch: u32,
    tag: Option<&'a str>,
    commit: Option<&'a str>,
    commits_since_tag: u32,
    dirty: bool,
    tagged: bool,
    development: bool,
}

impl<'a> From<&'a VersionDescriptor> for VersionReport<'a> {
    fn from(descriptor: &'a VersionDescriptor) -> Self {
        Self {
            version: descriptor.display(),
            full_version: descriptor.full_version(),
            major: descriptor.base().major(),
            minor: descriptor.base().minor(),
            patch: descriptor.base().patch(),
            tag: descriptor.tag().map(|t| t.as_str()),
            commit: descriptor.commit_hash(),
            commits_since_tag: descriptor.commits_since_tag(),
            dirty: descriptor.is_dirty(),
            tagged: descriptor.is_tagged(),
            development: descriptor.is_development(),
        }
    }
}

pub fn print_descriptor(descriptor: &VersionDescriptor, args: &Args) -> Result<()> {
    if args.quiet {
        println!("{}", descriptor.full_version());
        return Ok(());
    }
    match args.format {
        OutputFormat::Table => print_table(descriptor),
        OutputFormat::Json => print_json(descriptor)?,
        OutputFormat::Env => print_env(descriptor),
    }
    Ok(())
}

fn print_table(descriptor: &VersionDescriptor) {
    println!("gitver v{}", crate::VERSION);
    println!();
    println!("Version:      {}", descriptor.display());
    println!("Full version: {}", descriptor.full_version());
    println!("State:        {}", state_label(descriptor));
    if let Some(tag) = descriptor.tag() {
        println!("Tag:          {tag}");
    }
    if descriptor.commits_since_tag() > 0 {
        println!("Commits:      {}", descriptor.commits_since_tag());
    }
    if let Some(commit) = descriptor.commit_hash() {
        println!("Commit:       {commit}");
    }
}

fn state_label(descriptor: &VersionDescriptor) -> String {
    let state = if descriptor.is_tagged() {
        "tagged"
    } else if descriptor.is_development() {
        "development"
    } else {
        "untagged"
    };
    if descriptor.is_dirty() {
        format!("{state} (dirty)")
    } else {
        state.to_string()
    }
}

fn print_json(descriptor: &VersionDescriptor) -> Result<()> {
    let report = VersionReport::from(descriptor);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// `cargo:rustc-env` directives, for forwarding from any build script.
fn print_env(descriptor: &VersionDescriptor) {
    println!("cargo:rustc-env=GITVER_VERSION={}", descriptor.display());
    println!(
        "cargo:rustc-env=GITVER_FULL_VERSION={}",
        descriptor.full_version()
    );
    println!("cargo:rustc-env=GITVER_MAJOR={}", descriptor.base().major());
    println!("cargo:rustc-env=GITVER_MINOR={}", descriptor.base().minor());
    println!("cargo:rustc-env=GITVER_PATCH={}", descriptor.base().patch());
}

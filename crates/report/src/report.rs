// crates/report/src/report.rs
use std::io::{self, Write};

use gitver_domain::VersionDescriptor;

const TITLE: &str = "Basic Example Application";
const SEPARATOR: &str = "------------------------";

/// Writes the six-line version report.
///
/// The output is a fixed literal structure; rendering the same descriptor
/// twice produces byte-identical output.
pub fn render(descriptor: &VersionDescriptor, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{TITLE}")?;
    writeln!(out, "{SEPARATOR}")?;
    writeln!(out, "Version: {}", descriptor.display())?;
    writeln!(out, "Major: {}", descriptor.base().major())?;
    writeln!(out, "Minor: {}", descriptor.base().minor())?;
    writeln!(out, "Patch: {}", descriptor.base().patch())?;
    Ok(())
}

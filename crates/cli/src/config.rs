// crates/cli/src/config.rs
use gitver_domain::ResolveOptions;

use crate::args::Args;

impl From<&Args> for ResolveOptions {
    fn from(args: &Args) -> Self {
        let mut options = ResolveOptions::new()
            .with_default_version(args.default_version)
            .with_fail_on_mismatch(args.fail_on_mismatch);
        if let Some(prefix) = &args.prefix {
            options = options.with_prefix(prefix.clone());
        }
        options
    }
}

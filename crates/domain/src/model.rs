// crates/domain/src/model.rs
pub mod descriptor;
pub mod snapshot;

pub use descriptor::VersionDescriptor;
pub use snapshot::RepoSnapshot;

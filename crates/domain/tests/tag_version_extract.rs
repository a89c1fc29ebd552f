// crates/domain/tests/tag_version_extract.rs
use gitver_domain::{BaseVersion, TagName};

#[test]
fn bare_version_tag() {
    let tag = TagName::from("1.2.3");
    assert_eq!(tag.version(None), Some(BaseVersion::new(1, 2, 3)));
}

#[test]
fn prefixed_tag_with_configured_prefix() {
    let tag = TagName::from("v1.2.3");
    assert_eq!(tag.version(Some("v")), Some(BaseVersion::new(1, 2, 3)));
}

#[test]
fn prefixed_tag_without_configured_prefix() {
    // Bare and prefixed tags are interchangeable by default.
    let tag = TagName::from("v1.2.3");
    assert_eq!(tag.version(None), Some(BaseVersion::new(1, 2, 3)));
}

#[test]
fn prefix_absent_from_tag_is_not_required() {
    let tag = TagName::from("1.2.3");
    assert_eq!(tag.version(Some("v")), Some(BaseVersion::new(1, 2, 3)));
}

#[test]
fn partial_tag() {
    let tag = TagName::from("1.2");
    assert_eq!(tag.version(None), Some(BaseVersion::new(1, 2, 0)));
}

#[test]
fn extra_components_are_ignored() {
    let tag = TagName::from("1.2.3.4");
    assert_eq!(tag.version(None), Some(BaseVersion::new(1, 2, 3)));
}

#[test]
fn alphanumeric_suffix_is_ignored() {
    let tag = TagName::from("1.2.3rc1");
    assert_eq!(tag.version(None), Some(BaseVersion::new(1, 2, 3)));
}

#[test]
fn prerelease_tag_keeps_base_version() {
    let tag = TagName::from("1.0.0-alpha.1");
    assert_eq!(tag.version(None), Some(BaseVersion::new(1, 0, 0)));
}

#[test]
fn versionless_tag_yields_nothing() {
    let tag = TagName::from("version-abc");
    assert_eq!(tag.version(None), None);
    assert_eq!(tag.version(Some("v")), None);
}

// crates/domain/tests/version_props.rs
use gitver_domain::{BaseVersion, TagName};
use proptest::prelude::*;

proptest! {
    #[test]
    fn display_then_parse_roundtrips(major in 0u32..=u32::MAX, minor in 0u32..=u32::MAX, patch in 0u32..=u32::MAX) {
        let version = BaseVersion::new(major, minor, patch);
        let reparsed: BaseVersion = version.to_string().parse().unwrap();
        prop_assert_eq!(version, reparsed);
    }

    #[test]
    fn any_prefixed_tag_extracts_its_version(major in 0u32..10_000, minor in 0u32..10_000, patch in 0u32..10_000) {
        let tag = TagName::from(format!("v{major}.{minor}.{patch}"));
        prop_assert_eq!(tag.version(Some("v")), Some(BaseVersion::new(major, minor, patch)));
    }

    #[test]
    fn digit_free_tags_never_extract(name in "[a-z-]{1,20}") {
        let tag = TagName::from(name);
        prop_assert_eq!(tag.version(None), None);
    }
}

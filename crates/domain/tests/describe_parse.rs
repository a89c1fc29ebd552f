// crates/domain/tests/describe_parse.rs
use gitver_domain::{DescribeOutput, DomainError, TagName};

#[test]
fn exact_tag() {
    let parsed: DescribeOutput = "1.2.3".parse().unwrap();
    assert_eq!(parsed.tag, TagName::from("1.2.3"));
    assert_eq!(parsed.commits_since, 0);
    assert_eq!(parsed.commit_hash, None);
}

#[test]
fn development_output() {
    let parsed: DescribeOutput = "v1.2.3-4-gdeadbee".parse().unwrap();
    assert_eq!(parsed.tag, TagName::from("v1.2.3"));
    assert_eq!(parsed.commits_since, 4);
    assert_eq!(parsed.commit_hash.as_deref(), Some("deadbee"));
}

#[test]
fn hyphenated_tag_keeps_its_hyphens() {
    let parsed: DescribeOutput = "v1.0.0-alpha.1-12-gabc1234".parse().unwrap();
    assert_eq!(parsed.tag, TagName::from("v1.0.0-alpha.1"));
    assert_eq!(parsed.commits_since, 12);
    assert_eq!(parsed.commit_hash.as_deref(), Some("abc1234"));
}

#[test]
fn tag_that_merely_looks_like_a_suffix() {
    // No -N-gHASH suffix here: "g" is followed by non-hex characters.
    let parsed: DescribeOutput = "release-2-great".parse().unwrap();
    assert_eq!(parsed.tag, TagName::from("release-2-great"));
    assert_eq!(parsed.commits_since, 0);
}

#[test]
fn surrounding_whitespace_is_trimmed() {
    let parsed: DescribeOutput = "1.2.3-1-gffffff0\n".parse().unwrap();
    assert_eq!(parsed.tag, TagName::from("1.2.3"));
    assert_eq!(parsed.commits_since, 1);
}

#[test]
fn empty_output_is_rejected() {
    let err = "   ".parse::<DescribeOutput>().unwrap_err();
    assert!(matches!(err, DomainError::UnparsableDescribe { .. }));
}

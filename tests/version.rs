use std::cmp::Ordering;

use rstest::rstest;
use strict_semver::{Component, Version, VersionError};

#[rstest]
#[case("0.0.4")]
#[case("1.2.3")]
#[case("1.1.2-prerelease+meta")]
#[case("1.1.2+meta-valid")]
#[case("1.0.0-alpha.beta.1")]
#[case("1.0.0-alpha0.valid")]
#[case("1.0.0-alpha.0valid")]
#[case("1.0.0-rc.1+build.1")]
#[case("1.2.3-SNAPSHOT-123")]
#[case("2.0.0+build.1848")]
#[case("2.0.1-alpha.1227")]
#[case("1.2.3----R-S.12.9.1--.12+meta")]
#[case("1.2.3----RC-SNAPSHOT.12.9.1--.12")]
#[case("1.0.0-0A.is.legal")]
fn parse_accepts_valid_versions(#[case] input: &str) {
    let version = Version::parse(input).unwrap();

    assert_eq!(version.to_string(), input);
    assert_eq!(Version::try_parse(input).unwrap(), Some(version));
}

#[rstest]
#[case("v1.2.3")]
#[case(" 1.2.3")]
#[case("1.2.3 ")]
#[case("1")]
#[case("a")]
#[case("1.2")]
#[case("1.2.3-0123")]
#[case("1.2.3-0123.0123")]
#[case("1.1.2+.123")]
#[case("+invalid")]
#[case("-invalid")]
#[case("-invalid+invalid")]
#[case("-invalid.01")]
#[case("alpha")]
#[case("alpha.beta")]
#[case("alpha.1")]
#[case("alpha+beta")]
#[case("alpha_beta")]
#[case("alpha.")]
#[case("alpha..")]
#[case("1.0.0-alpha_beta")]
#[case("-alpha.")]
#[case("1.0.0-alpha..")]
#[case("1.0.0-alpha..1")]
#[case("1.0.0-alpha...1")]
#[case("01.1.1")]
#[case("1.01.1")]
#[case("1.1.01")]
#[case("1.2.3.DEV")]
#[case("1.2-SNAPSHOT")]
#[case("1.2.31.2.3----RC-SNAPSHOT.12.09.1--..12+788")]
#[case("1.2-RC-SNAPSHOT")]
#[case("-1.0.3-gamma+b7718")]
#[case("+justmeta")]
#[case("9.8.7+meta+meta")]
#[case("9.8.7-whatever+meta+meta")]
#[case(
    "99999999999999999999999.999999999999999999.99999999999999999----RC-SNAPSHOT.12.09.1--------------------------------..12"
)]
fn parse_rejects_invalid_versions(#[case] input: &str) {
    assert_eq!(
        Version::parse(input),
        Err(VersionError::InvalidFormat(input.to_string()))
    );
    assert_eq!(Version::try_parse(input), Ok(None));
}

#[test]
fn overflow_propagates_from_both_parse_entry_points() {
    let input = "99999999999999999999999.999999999999999999.99999999999999999";
    let expected = VersionError::NumericOverflow {
        component: Component::Major,
        text: "99999999999999999999999".to_string(),
    };

    assert_eq!(Version::parse(input), Err(expected.clone()));
    assert_eq!(Version::try_parse(input), Err(expected));
}

#[test]
fn precedence_follows_semver_example_chain() {
    let chain = [
        "1.0.0-alpha",
        "1.0.0-alpha.1",
        "1.0.0-alpha.beta",
        "1.0.0-beta",
        "1.0.0-beta.2",
        "1.0.0-beta.11",
        "1.0.0-rc.1",
        "1.0.0",
    ]
    .map(|s| Version::parse(s).unwrap());

    for pair in chain.windows(2) {
        assert_eq!(pair[0].cmp(&pair[1]), Ordering::Less, "{} < {}", pair[0], pair[1]);
        assert_eq!(pair[1].cmp(&pair[0]), Ordering::Greater);
    }

    let mut shuffled = chain.clone();
    shuffled.reverse();
    shuffled.sort();
    assert_eq!(shuffled, chain);
}

#[test]
fn oversized_numeric_pre_release_identifiers_compare_as_text() {
    let smaller = Version::new(1, 0, 0, Some("111.99999999999999999999998"), None).unwrap();
    let larger = Version::new(1, 0, 0, Some("111.99999999999999999999999"), None).unwrap();

    assert!(smaller < larger);
    assert!(larger > smaller);
}

#[test]
fn build_metadata_participates_in_equality_only() {
    let xyz = Version::new(1, 0, 0, Some("alpha"), Some("xyz")).unwrap();
    let abc = Version::new(1, 0, 0, Some("alpha"), Some("abc")).unwrap();

    assert_eq!(xyz.cmp_precedence(&abc), Ordering::Equal);
    assert_ne!(xyz, abc);
}

#[test]
fn major_only_version_renders_with_zero_minor_and_patch() {
    let version = Version::from_major(432).unwrap();

    assert_eq!(version.to_string(), "432.0.0");
    assert_eq!(Version::parse("432.0.0").unwrap(), version);
}

#[test]
fn next_major_drops_pre_release_and_build_metadata() {
    let version = Version::new(1, 3, 5, Some("pre"), Some("meta")).unwrap();
    let next = version.next_major().unwrap();

    assert_eq!(next, Version::new(2, 0, 0, None, None).unwrap());
    assert_eq!(next.pre_release(), None);
    assert_eq!(next.build_metadata(), None);
}

#[test]
fn versions_are_shareable_across_threads() {
    let version = std::sync::Arc::new(Version::parse("1.2.3-rc.1").unwrap());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let version = std::sync::Arc::clone(&version);
            std::thread::spawn(move || Version::parse(&version.to_string()).unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), *version);
    }
}

//! Matching rules for the textual version grammar
//!
//! Patterns are compiled on first use and shared read-only afterwards.
//! Digit classes are spelled `[0-9]` because `\d` is Unicode-aware in `regex`.

use std::sync::LazyLock;

use regex::Regex;

/// A single pre-release identifier: `0`, a number without leading zeros,
/// or an alphanumeric run containing at least one letter or hyphen.
const PRE_RELEASE_IDENTIFIER: &str = r"(?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*)";

const BUILD_IDENTIFIER: &str = r"[0-9a-zA-Z-]+";

const NUMERIC_COMPONENT: &str = r"(0|[1-9][0-9]*)";

static PRE_RELEASE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^{id}(?:\.{id})*$",
        id = PRE_RELEASE_IDENTIFIER
    ))
    .expect("pre-release pattern is valid")
});

static BUILD_METADATA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^{id}(?:\.{id})*$", id = BUILD_IDENTIFIER))
        .expect("build metadata pattern is valid")
});

static FULL_VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^{num}\.{num}\.{num}(?:-({pre}(?:\.{pre})*))?(?:\+({build}(?:\.{build})*))?$",
        num = NUMERIC_COMPONENT,
        pre = PRE_RELEASE_IDENTIFIER,
        build = BUILD_IDENTIFIER,
    ))
    .expect("full version pattern is valid")
});

/// Borrowed pieces of a version string that matched the full grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct VersionParts<'a> {
    pub major: &'a str,
    pub minor: &'a str,
    pub patch: &'a str,
    pub pre_release: Option<&'a str>,
    pub build_metadata: Option<&'a str>,
}

/// Check that the whole input is a valid pre-release string
pub(crate) fn is_pre_release(input: &str) -> bool {
    PRE_RELEASE_RE.is_match(input)
}

/// Check that the whole input is a valid build metadata string
pub(crate) fn is_build_metadata(input: &str) -> bool {
    BUILD_METADATA_RE.is_match(input)
}

/// Check whether a pre-release identifier consists only of ASCII digits
pub(crate) fn is_numeric_identifier(identifier: &str) -> bool {
    !identifier.is_empty() && identifier.bytes().all(|b| b.is_ascii_digit())
}

/// Split a version string into its components.
///
/// Returns `None` unless the entire input matches the full grammar.
pub(crate) fn split_version(input: &str) -> Option<VersionParts<'_>> {
    let caps = FULL_VERSION_RE.captures(input)?;
    let group = |index: usize| caps.get(index).map(|m| m.as_str());

    Some(VersionParts {
        major: group(1)?,
        minor: group(2)?,
        patch: group(3)?,
        pre_release: group(4),
        build_metadata: group(5),
    })
}

//! Semantic Versioning 2.0.0 value type
//!
//! [`Version`] owns validation, canonical formatting and precedence
//! comparison. Every instance is checked on construction, so an invalid
//! version cannot be observed.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::{Component, VersionError};
use crate::grammar;

/// Version number in [Semantic Versioning 2.0.0](https://semver.org/spec/v2.0.0.html).
///
/// Numeric components are `i64`. Text that does not fit is rejected with
/// [`VersionError::NumericOverflow`] rather than wrapped.
///
/// # Equality and ordering
///
/// Equality and hashing cover all five fields, build metadata included.
/// Ordering follows SemVer precedence, which never looks at build metadata.
/// Two versions that differ only in build metadata therefore compare as
/// [`Ordering::Equal`] while not being `==`:
///
/// ```
/// use std::cmp::Ordering;
/// use strict_semver::Version;
///
/// let a = Version::new(1, 0, 0, Some("alpha"), Some("xyz")).unwrap();
/// let b = Version::new(1, 0, 0, Some("alpha"), Some("abc")).unwrap();
/// assert_eq!(a.cmp(&b), Ordering::Equal);
/// assert_ne!(a, b);
/// ```
///
/// Keep this in mind before using `Version` as a key in ordered collections:
/// a `BTreeSet` keeps only one of `a` and `b` above.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    major: i64,
    minor: i64,
    patch: i64,
    pre_release: Option<String>,
    build_metadata: Option<String>,
}

impl Version {
    /// Create a version, validating every component.
    ///
    /// # Errors
    /// Returns [`VersionError::InvalidArgument`] naming the first component
    /// that is negative or does not match its grammar.
    pub fn new(
        major: i64,
        minor: i64,
        patch: i64,
        pre_release: Option<&str>,
        build_metadata: Option<&str>,
    ) -> Result<Self, VersionError> {
        for (component, value) in [
            (Component::Major, major),
            (Component::Minor, minor),
            (Component::Patch, patch),
        ] {
            if value < 0 {
                return Err(VersionError::invalid_argument(component, value));
            }
        }

        if let Some(pre) = pre_release
            && !grammar::is_pre_release(pre)
        {
            return Err(VersionError::invalid_argument(Component::PreRelease, pre));
        }

        if let Some(build) = build_metadata
            && !grammar::is_build_metadata(build)
        {
            return Err(VersionError::invalid_argument(
                Component::BuildMetadata,
                build,
            ));
        }

        Ok(Self {
            major,
            minor,
            patch,
            pre_release: pre_release.map(str::to_string),
            build_metadata: build_metadata.map(str::to_string),
        })
    }

    /// Create `major.0.0`
    pub fn from_major(major: i64) -> Result<Self, VersionError> {
        Self::new(major, 0, 0, None, None)
    }

    /// Create a normal version without pre-release or build metadata
    pub fn release(major: i64, minor: i64, patch: i64) -> Result<Self, VersionError> {
        Self::new(major, minor, patch, None, None)
    }

    /// Parse a version string.
    ///
    /// The whole input must match; surrounding whitespace, a `v` prefix or
    /// partial versions such as `1.2` are rejected.
    ///
    /// # Errors
    /// - [`VersionError::InvalidFormat`] if the input does not match the grammar
    /// - [`VersionError::NumericOverflow`] if a numeric component exceeds `i64`
    pub fn parse(input: &str) -> Result<Self, VersionError> {
        let parts = grammar::split_version(input)
            .ok_or_else(|| VersionError::InvalidFormat(input.to_string()))?;

        Self::new(
            parse_component(Component::Major, parts.major)?,
            parse_component(Component::Minor, parts.minor)?,
            parse_component(Component::Patch, parts.patch)?,
            parts.pre_release,
            parts.build_metadata,
        )
    }

    /// Parse a version string, returning `Ok(None)` for malformed input.
    ///
    /// Numeric overflow is not treated as malformed input and is still
    /// returned as an error.
    pub fn try_parse(input: &str) -> Result<Option<Self>, VersionError> {
        match Self::parse(input) {
            Ok(version) => Ok(Some(version)),
            Err(e) if e.is_overflow() => Err(e),
            Err(_) => Ok(None),
        }
    }

    pub fn major(&self) -> i64 {
        self.major
    }

    pub fn minor(&self) -> i64 {
        self.minor
    }

    pub fn patch(&self) -> i64 {
        self.patch
    }

    pub fn pre_release(&self) -> Option<&str> {
        self.pre_release.as_deref()
    }

    pub fn build_metadata(&self) -> Option<&str> {
        self.build_metadata.as_deref()
    }

    /// Check the version is in initial development (`0.y.z`).
    pub fn is_initial_development_phase(&self) -> bool {
        self.major == 0
    }

    /// Next major version: `x.y.z` -> `(x+1).0.0`
    pub fn next_major(&self) -> Result<Self, VersionError> {
        let major = increment(Component::Major, self.major)?;
        Self::release(major, 0, 0)
    }

    /// Next minor version: `x.y.z` -> `x.(y+1).0`
    pub fn next_minor(&self) -> Result<Self, VersionError> {
        let minor = increment(Component::Minor, self.minor)?;
        Self::release(self.major, minor, 0)
    }

    /// Next patch version: `x.y.z` -> `x.y.(z+1)`
    pub fn next_patch(&self) -> Result<Self, VersionError> {
        let patch = increment(Component::Patch, self.patch)?;
        Self::release(self.major, self.minor, patch)
    }

    /// Compare by SemVer precedence, ignoring build metadata.
    pub fn cmp_precedence(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.patch.cmp(&other.patch))
            .then_with(|| match (self.pre_release(), other.pre_release()) {
                (None, None) => Ordering::Equal,
                // A pre-release has lower precedence than the normal version
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (Some(pre), Some(other_pre)) => compare_pre_release(pre, other_pre),
            })
    }
}

fn parse_component(component: Component, text: &str) -> Result<i64, VersionError> {
    // The grammar only lets ASCII digits through, so failure means overflow
    text.parse::<i64>()
        .map_err(|_| VersionError::overflow(component, text))
}

fn increment(component: Component, value: i64) -> Result<i64, VersionError> {
    value.checked_add(1).ok_or_else(|| {
        VersionError::overflow(component, format!("{value} + 1"))
    })
}

fn compare_pre_release(pre: &str, other: &str) -> Ordering {
    let mut parts = pre.split('.');
    let mut other_parts = other.split('.');

    loop {
        match (parts.next(), other_parts.next()) {
            (Some(part), Some(other_part)) => {
                if part == other_part {
                    continue;
                }
                return compare_identifier(part, other_part);
            }
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (None, None) => return Ordering::Equal,
        }
    }
}

fn compare_identifier(part: &str, other: &str) -> Ordering {
    match (
        grammar::is_numeric_identifier(part),
        grammar::is_numeric_identifier(other),
    ) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => part.cmp(other),
        (true, true) => match (part.parse::<i64>(), other.parse::<i64>()) {
            (Ok(a), Ok(b)) => a.cmp(&b),
            // Too wide for i64: compare the digit text instead
            _ => part.cmp(other),
        },
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_precedence(other)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(pre) = &self.pre_release {
            write!(f, "-{pre}")?;
        }
        if let Some(build) = &self.build_metadata {
            write!(f, "+{build}")?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Version {
    type Error = VersionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

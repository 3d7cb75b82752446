//! Conversions between [`Version`] and [`semver::Version`]

use semver::{BuildMetadata, Prerelease};

use crate::error::{Component, VersionError};
use crate::version::Version;

impl TryFrom<&Version> for semver::Version {
    type Error = semver::Error;

    fn try_from(version: &Version) -> Result<Self, Self::Error> {
        let pre = match version.pre_release() {
            Some(pre) => Prerelease::new(pre)?,
            None => Prerelease::EMPTY,
        };
        let build = match version.build_metadata() {
            Some(build) => BuildMetadata::new(build)?,
            None => BuildMetadata::EMPTY,
        };

        // Components are never negative, so unsigned_abs is exact
        Ok(semver::Version {
            major: version.major().unsigned_abs(),
            minor: version.minor().unsigned_abs(),
            patch: version.patch().unsigned_abs(),
            pre,
            build,
        })
    }
}

impl TryFrom<&semver::Version> for Version {
    type Error = VersionError;

    fn try_from(version: &semver::Version) -> Result<Self, Self::Error> {
        let component = |component: Component, value: u64| {
            i64::try_from(value).map_err(|_| VersionError::overflow(component, value))
        };

        Version::new(
            component(Component::Major, version.major)?,
            component(Component::Minor, version.minor)?,
            component(Component::Patch, version.patch)?,
            (!version.pre.is_empty()).then(|| version.pre.as_str()),
            (!version.build.is_empty()).then(|| version.build.as_str()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1.2.3")]
    #[case("1.0.0-01s.alpha")]
    #[case("2.0.0-rc.1+build.123")]
    #[case("1.0.0+0.build.1-rc.10000aaa-kk-0.1")]
    fn converts_both_ways(#[case] input: &str) {
        let version = Version::parse(input).unwrap();

        let external = semver::Version::try_from(&version).unwrap();
        assert_eq!(external.to_string(), input);
        assert_eq!(Version::try_from(&external).unwrap(), version);
    }

    #[test]
    fn rejects_components_wider_than_i64() {
        let external = semver::Version::new(u64::MAX, 0, 0);

        assert_eq!(
            Version::try_from(&external),
            Err(VersionError::NumericOverflow {
                component: Component::Major,
                text: u64::MAX.to_string(),
            })
        );
    }

    #[test]
    fn precedence_agrees_with_semver_without_build_metadata() {
        let inputs = [
            "1.0.0-alpha",
            "1.0.0-alpha.1",
            "1.0.0-alpha.beta",
            "1.0.0-beta",
            "1.0.0-beta.2",
            "1.0.0-beta.11",
            "1.0.0-rc.1",
            "1.0.0",
            "1.0.1",
            "1.10.0",
            "2.0.0-0",
        ];

        for a in inputs {
            for b in inputs {
                let (ours_a, ours_b) = (Version::parse(a).unwrap(), Version::parse(b).unwrap());
                let (theirs_a, theirs_b) = (
                    semver::Version::parse(a).unwrap(),
                    semver::Version::parse(b).unwrap(),
                );
                assert_eq!(ours_a.cmp(&ours_b), theirs_a.cmp(&theirs_b), "{a} vs {b}");
            }
        }
    }
}

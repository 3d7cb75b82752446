//! String-based serialization for [`Version`]
//!
//! Versions are encoded as their canonical string and decoded through
//! [`Version::parse`].

use std::fmt;

use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::ser::{Serialize, Serializer};

use crate::error::SerializationError;
use crate::version::Version;

/// Encode a version as its canonical string
pub fn encode(version: &Version) -> String {
    version.to_string()
}

/// Decode a version string, keeping the parse failure as the error source
pub fn decode(input: &str) -> Result<Version, SerializationError> {
    Version::parse(input).map_err(SerializationError::Decode)
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct VersionVisitor;

        impl Visitor<'_> for VersionVisitor {
            type Value = Version;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a semantic version string")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                decode(v).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(VersionVisitor)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;
    use crate::error::VersionError;

    #[test]
    fn encode_uses_canonical_form() {
        let version = Version::new(2, 0, 0, Some("rc.1"), Some("build.123")).unwrap();
        assert_eq!(encode(&version), "2.0.0-rc.1+build.123");
    }

    #[test]
    fn decode_keeps_format_error_as_source() {
        let err = decode("1.1.2+.123").unwrap_err();

        let source = err
            .source()
            .and_then(|e| e.downcast_ref::<VersionError>())
            .unwrap();
        assert_eq!(source, &VersionError::InvalidFormat("1.1.2+.123".to_string()));
    }

    #[test]
    fn decode_keeps_overflow_error_as_source() {
        let SerializationError::Decode(source) =
            decode("99999999999999999999999.999999999999999999.99999999999999999").unwrap_err();
        assert!(source.is_overflow());
    }
}

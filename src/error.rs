use std::fmt;

use thiserror::Error;

/// Component of a version that failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Major,
    Minor,
    Patch,
    PreRelease,
    BuildMetadata,
}

impl Component {
    /// Returns the string representation of the component
    pub fn as_str(&self) -> &'static str {
        match self {
            Component::Major => "major",
            Component::Minor => "minor",
            Component::Patch => "patch",
            Component::PreRelease => "pre-release",
            Component::BuildMetadata => "build metadata",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    #[error("Invalid {component} version: {value}")]
    InvalidArgument { component: Component, value: String },

    #[error("Invalid version string [{0}]")]
    InvalidFormat(String),

    #[error("Numeric overflow in {component} version: {text}")]
    NumericOverflow { component: Component, text: String },
}

impl VersionError {
    pub(crate) fn invalid_argument(component: Component, value: impl ToString) -> Self {
        VersionError::InvalidArgument {
            component,
            value: value.to_string(),
        }
    }

    pub(crate) fn overflow(component: Component, text: impl ToString) -> Self {
        VersionError::NumericOverflow {
            component,
            text: text.to_string(),
        }
    }

    /// Whether this error is a numeric overflow.
    ///
    /// Overflow is the only failure that [`Version::try_parse`](crate::Version::try_parse)
    /// does not turn into `Ok(None)`.
    pub fn is_overflow(&self) -> bool {
        matches!(self, VersionError::NumericOverflow { .. })
    }
}

#[derive(Debug, Error)]
pub enum SerializationError {
    #[error("Failed to decode version: {0}")]
    Decode(#[source] VersionError),
}

//! Error types for DSN parsing.

use thiserror::Error;

/// Result type for DSN operations.
pub type DsnResult<T> = Result<T, DsnError>;

/// Errors that can occur while parsing or validating a DSN.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DsnError {
    /// The input is not a syntactically valid URL.
    #[error("malformed DSN: {0}")]
    MalformedDsn(#[from] url::ParseError),

    /// A duration-valued option could not be parsed.
    #[error("invalid duration for '{key}': {value:?}")]
    InvalidDuration {
        /// The query key carrying the duration.
        key: String,
        /// The raw value as it appeared in the DSN.
        value: String,
    },

    /// The `location` option does not name a known timezone.
    #[error("unknown time zone: {value:?}")]
    UnknownTimezone {
        /// The raw value as it appeared in the DSN.
        value: String,
    },

    /// The `debug` option is not a recognized boolean spelling.
    #[error("invalid boolean: {value:?}")]
    InvalidBoolean {
        /// The raw value as it appeared in the DSN.
        value: String,
    },

    /// The key is present but explicitly unsupported.
    #[error("unknown option '{key}'")]
    UnknownOption {
        /// The rejected query key.
        key: String,
    },

    /// A passthrough parameter uses a key reserved for a typed field.
    #[error("parameter '{key}' is reserved")]
    ReservedParam {
        /// The reserved key found in the parameter map.
        key: String,
    },
}

impl DsnError {
    /// Create an invalid duration error.
    pub fn invalid_duration(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidDuration {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Create an unknown timezone error.
    pub fn unknown_timezone(value: impl Into<String>) -> Self {
        Self::UnknownTimezone {
            value: value.into(),
        }
    }

    /// Create an invalid boolean error.
    pub fn invalid_boolean(value: impl Into<String>) -> Self {
        Self::InvalidBoolean {
            value: value.into(),
        }
    }

    /// Create an unknown option error.
    pub fn unknown_option(key: impl Into<String>) -> Self {
        Self::UnknownOption { key: key.into() }
    }

    /// Create a reserved parameter error.
    pub fn reserved_param(key: impl Into<String>) -> Self {
        Self::ReservedParam { key: key.into() }
    }

    /// The query key the error refers to, if any.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::InvalidDuration { key, .. }
            | Self::UnknownOption { key }
            | Self::ReservedParam { key } => Some(key),
            Self::UnknownTimezone { .. } => Some("location"),
            Self::InvalidBoolean { .. } => Some("debug"),
            Self::MalformedDsn(_) => None,
        }
    }

    /// Check if the error comes from URL syntax rather than an option value.
    #[must_use]
    pub fn is_syntax_error(&self) -> bool {
        matches!(self, Self::MalformedDsn(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DsnError::invalid_duration("timeout", "5 parsecs");
        assert_eq!(err.to_string(), "invalid duration for 'timeout': \"5 parsecs\"");

        let err = DsnError::unknown_option("query");
        assert_eq!(err.to_string(), "unknown option 'query'");
    }

    #[test]
    fn test_error_key() {
        assert_eq!(DsnError::invalid_duration("read_timeout", "x").key(), Some("read_timeout"));
        assert_eq!(DsnError::unknown_timezone("Mars/Base").key(), Some("location"));
        assert_eq!(DsnError::invalid_boolean("yes").key(), Some("debug"));
        assert_eq!(DsnError::reserved_param("debug").key(), Some("debug"));
        assert_eq!(
            DsnError::from(url::ParseError::RelativeUrlWithoutBase).key(),
            None
        );
    }

    #[test]
    fn test_error_syntax() {
        assert!(DsnError::from(url::ParseError::EmptyHost).is_syntax_error());
        assert!(!DsnError::unknown_option("database").is_syntax_error());
    }
}

//! Core error types for vitrine.
//!
//! All errors are explicit and typed. None of them is ever shown to a site
//! visitor: callers treat them as the reason a feature stays inert.

use thiserror::Error;

/// Why a configuration document was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("failed to parse configuration: {reason}")]
    ParseFailed { reason: String },

    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl ConfigError {
    /// Create a parse error.
    pub fn parse_failed(reason: impl Into<String>) -> Self {
        Self::ParseFailed {
            reason: reason.into(),
        }
    }

    /// Create an invalid value error for the named field.
    pub fn invalid_value(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            reason: reason.into(),
        }
    }
}

/// Why a carousel container could not be brought to life.
///
/// Every variant leaves the markup inert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CarouselError {
    #[error("carousel has no slides")]
    NoSlides,

    #[error("carousel has no previous control")]
    MissingPrevControl,

    #[error("carousel has no next control")]
    MissingNextControl,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::invalid_value("carousel.cooldown_ms", "must be greater than zero");
        assert_eq!(
            err.to_string(),
            "invalid value for 'carousel.cooldown_ms': must be greater than zero"
        );

        let err = ConfigError::parse_failed("expected value at line 1 column 1");
        assert!(err.to_string().starts_with("failed to parse configuration"));
    }

    #[test]
    fn test_carousel_error_display() {
        assert_eq!(CarouselError::NoSlides.to_string(), "carousel has no slides");
        assert_eq!(
            CarouselError::MissingNextControl.to_string(),
            "carousel has no next control"
        );
    }
}

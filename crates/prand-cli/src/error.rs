//! prand CLI — error types.

use prand_core::RangeError;
use thiserror::Error;

/// Startup and runtime errors for the `prand` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// The configured bounds do not form a usable range.
    #[error("range error: {0}")]
    Range(#[from] RangeError),

    /// Writing drawn values failed.
    #[error("output error: {0}")]
    Output(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = CliError::Config("PRAND_COUNT must be a valid usize".into());
        assert_eq!(
            err.to_string(),
            "configuration error: PRAND_COUNT must be a valid usize"
        );
    }

    #[test]
    fn test_range_error_converts_and_displays() {
        let err: CliError = RangeError::Unsigned { min: 3, max: 1 }.into();
        assert!(matches!(err, CliError::Range(_)));
        assert_eq!(
            err.to_string(),
            "range error: empty unsigned range: max (1) must be greater than min (3)"
        );
    }
}

use std::io;
use thiserror::Error;

/// Result type for estimation operations
pub type EstimateResult<T> = Result<T, EstimateError>;

/// Errors raised while estimating or reporting HLS output
#[derive(Error, Debug)]
pub enum EstimateError {
    /// Size or duration was zero, negative, NaN or infinite
    #[error("Invalid input: {field} must be a positive finite number, got {value}")]
    InvalidInput {
        /// Name of the offending input
        field: &'static str,
        /// The rejected value
        value: f64,
    },

    /// Duration too long for its segment counts to be represented
    #[error("Out of range: {duration_seconds} seconds of video yields too many segments to count")]
    OutOfRange {
        /// Duration that was being segmented
        duration_seconds: f64,
    },

    /// Quality tier name not in the ladder
    #[error("Unknown quality tier: {0}")]
    UnknownQuality(String),

    /// IO error while writing a report
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON rendering failed
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for EstimateError {
    fn from(err: serde_json::Error) -> Self {
        match err.classify() {
            serde_json::error::Category::Io => EstimateError::Io(io::Error::from(err)),
            _ => EstimateError::Serialization(err.to_string()),
        }
    }
}

/// Reject anything that is not a strictly positive, finite number.
pub(crate) fn ensure_positive(field: &'static str, value: f64) -> EstimateResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(EstimateError::InvalidInput { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_positive_accepts_positive() {
        assert_eq!(ensure_positive("file_size_gb", 2.5).unwrap(), 2.5);
    }

    #[test]
    fn test_ensure_positive_rejects_bad_values() {
        for value in [0.0, -1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = ensure_positive("video_duration_minutes", value).unwrap_err();
            assert!(matches!(
                err,
                EstimateError::InvalidInput {
                    field: "video_duration_minutes",
                    ..
                }
            ));
        }
    }

    #[test]
    fn test_out_of_range_message() {
        let err = EstimateError::OutOfRange {
            duration_seconds: f64::INFINITY,
        };
        assert_eq!(
            err.to_string(),
            "Out of range: inf seconds of video yields too many segments to count"
        );
    }

    #[test]
    fn test_invalid_input_message() {
        let err = EstimateError::InvalidInput {
            field: "file_size_gb",
            value: -3.0,
        };
        assert_eq!(
            err.to_string(),
            "Invalid input: file_size_gb must be a positive finite number, got -3"
        );
    }
}

//! Error types for timecode operations.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for timecode operations.
pub type Result<T> = std::result::Result<T, TimecodeError>;

/// Errors that can occur during timecode operations.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum TimecodeError {
    /// A timecode string (or rendered component tuple) is not shaped like
    /// `HH:MM:SS:FF` with legal separators and field ranges.
    #[error("Invalid timecode format: {text}")]
    InvalidTimecodeFormat {
        /// The offending timecode text.
        text: String,
    },

    /// A well-formed timecode string names a frame that does not exist at
    /// the given frame rate, such as a dropped frame number.
    #[error("Invalid timecode: {text} ({reason})")]
    InvalidTimecode {
        /// The offending timecode text.
        text: String,
        /// Why the timecode is not valid at the given rate.
        reason: String,
    },

    /// A numeric construction was given a negative frame count.
    #[error("Negative frame count: {value}")]
    NegativeFrameCount {
        /// The negative value that was provided.
        value: i64,
    },

    /// A floating point rate matched no catalog frame rate.
    #[error("Unsupported frame rate: {fps}")]
    UnsupportedFrameRate {
        /// String representation of the rejected rate.
        fps: String,
    },

    /// Drop-frame was requested for a rate that has no drop-frame variant.
    #[error("Drop-frame is only defined for 29.97 and 59.94 fps, got {frame_rate}")]
    IncompatibleDropFrame {
        /// String representation of the rejected frame rate.
        frame_rate: String,
    },

    /// Arithmetic between timecodes with different frame rates.
    #[error("Frame rate mismatch: {left} vs {right}")]
    FrameRateMismatch {
        /// String representation of the expected frame rate.
        left: String,
        /// String representation of the mismatching frame rate.
        right: String,
    },
}

impl TimecodeError {
    /// Create an invalid format error.
    pub fn invalid_format(text: impl Into<String>) -> Self {
        Self::InvalidTimecodeFormat { text: text.into() }
    }

    /// Create an invalid timecode error.
    pub fn invalid_timecode(text: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidTimecode {
            text: text.into(),
            reason: reason.into(),
        }
    }

    /// Create a negative frame count error.
    pub fn negative_frame_count(value: i64) -> Self {
        Self::NegativeFrameCount { value }
    }

    /// Create an unsupported frame rate error.
    pub fn unsupported_frame_rate(fps: f64) -> Self {
        Self::UnsupportedFrameRate {
            fps: fps.to_string(),
        }
    }

    /// Create an incompatible drop-frame error.
    pub fn incompatible_drop_frame(frame_rate: impl Into<String>) -> Self {
        Self::IncompatibleDropFrame {
            frame_rate: frame_rate.into(),
        }
    }

    /// Create a frame rate mismatch error.
    pub fn frame_rate_mismatch(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self::FrameRateMismatch {
            left: left.into(),
            right: right.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TimecodeError::invalid_format("99:00:00:00");
        assert_eq!(err.to_string(), "Invalid timecode format: 99:00:00:00");

        let err = TimecodeError::invalid_timecode("00:01:00;00", "dropped frame number");
        assert_eq!(
            err.to_string(),
            "Invalid timecode: 00:01:00;00 (dropped frame number)"
        );

        let err = TimecodeError::negative_frame_count(-1);
        assert_eq!(err.to_string(), "Negative frame count: -1");

        let err = TimecodeError::unsupported_frame_rate(26.0);
        assert_eq!(err.to_string(), "Unsupported frame rate: 26");

        let err = TimecodeError::incompatible_drop_frame("24");
        assert_eq!(
            err.to_string(),
            "Drop-frame is only defined for 29.97 and 59.94 fps, got 24"
        );

        let err = TimecodeError::frame_rate_mismatch("29.97", "25");
        assert_eq!(err.to_string(), "Frame rate mismatch: 29.97 vs 25");
    }

    #[test]
    fn test_error_serialization() {
        let err = TimecodeError::invalid_timecode("00:01:00;01", "dropped frame number");
        let json = serde_json::to_string(&err).unwrap();
        let decoded: TimecodeError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, decoded);
    }
}

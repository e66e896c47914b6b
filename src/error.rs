// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Error types for the form evaluation library.

use std::fmt;

/// Result type alias for form evaluation operations.
pub type Result<T> = std::result::Result<T, CoachError>;

/// Main error type for the form evaluation library.
///
/// Missing landmarks and degenerate geometry are not errors: rules fail open and
/// simply report fewer issues. Only caller-supplied inputs that cannot be
/// interpreted at all end up here.
#[derive(Debug)]
pub enum CoachError {
    /// Exercise name that has no rule set.
    UnsupportedExercise(String),
    /// Landmark data that cannot form a frame.
    InvalidFrame(String),
    /// Invalid configuration provided.
    ConfigError(String),
    /// IO error with context (file not found, permission denied, etc.).
    IoError(String),
    /// Wrapped `std::io::Error`
    Io(std::io::Error),
    /// Malformed JSON input.
    ParseError(String),
    /// Error reading or writing images.
    ImageError(String),
}

impl fmt::Display for CoachError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedExercise(msg) => write!(f, "Unsupported exercise: {msg}"),
            Self::InvalidFrame(msg) => write!(f, "Invalid frame: {msg}"),
            Self::ConfigError(msg) => write!(f, "Config error: {msg}"),
            Self::IoError(msg) => write!(f, "IO error: {msg}"),
            Self::Io(err) => write!(f, "IO error: {err}"),
            Self::ParseError(msg) => write!(f, "Parse error: {msg}"),
            Self::ImageError(msg) => write!(f, "Image error: {msg}"),
        }
    }
}

impl std::error::Error for CoachError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CoachError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for CoachError {
    fn from(err: serde_json::Error) -> Self {
        Self::ParseError(err.to_string())
    }
}

impl From<crate::exercise::ExerciseParseError> for CoachError {
    fn from(err: crate::exercise::ExerciseParseError) -> Self {
        Self::UnsupportedExercise(err.name().to_string())
    }
}

#[cfg(feature = "annotate")]
impl From<image::ImageError> for CoachError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoachError::UnsupportedExercise("lunges".to_string());
        assert_eq!(err.to_string(), "Unsupported exercise: lunges");

        let err = CoachError::InvalidFrame("34 landmarks".to_string());
        assert_eq!(err.to_string(), "Invalid frame: 34 landmarks");
    }

    #[test]
    fn test_io_error_source() {
        use std::error::Error;

        let err = CoachError::from(std::io::Error::other("disk"));
        assert!(err.source().is_some());
        assert!(CoachError::ConfigError("x".into()).source().is_none());
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<Vec<f32>>("not json").unwrap_err();
        let err = CoachError::from(json_err);
        assert!(matches!(err, CoachError::ParseError(_)));
    }
}

//! Error types for the touch overlay

use thiserror::Error;

/// Main error type for the overlay
#[derive(Error, Debug)]
pub enum OverlayError {
    /// A control's visual element was not supplied at construction
    #[error("Missing element: {0}")]
    MissingElement(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Unknown save type: {0}")]
    UnknownSaveType(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<toml::de::Error> for OverlayError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for OverlayError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type alias for overlay operations
pub type Result<T> = std::result::Result<T, OverlayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = OverlayError::MissingElement("btn-a".to_string());
        assert_eq!(format!("{}", err), "Missing element: btn-a");

        let err = OverlayError::UnknownSaveType("flash-16m".to_string());
        assert_eq!(format!("{}", err), "Unknown save type: flash-16m");
    }

    #[test]
    fn test_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: OverlayError = io_err.into();
        assert!(matches!(err, OverlayError::Io(_)));

        let toml_err = toml::from_str::<toml::Value>("= broken").unwrap_err();
        let err: OverlayError = toml_err.into();
        assert!(matches!(err, OverlayError::Config(_)));
    }
}

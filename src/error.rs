//! Error types for unarticle library.

use std::io;
use thiserror::Error;

/// Result type alias for unarticle operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during article extraction.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The content list could not be decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The input is neither a JSON content list nor JSON Lines.
    #[error("Unknown input format: expected a JSON content list or JSON Lines")]
    UnknownFormat,

    /// The block stream lacks the heading structure extraction depends on.
    #[error("Structure error: {0}")]
    Structure(#[from] StructureError),

    /// The title text is too short or ambiguous to infer a language.
    #[error("Language detection failed: {0}")]
    LanguageDetection(String),

    /// A table image path could not be resolved against the output directory.
    #[error("Cannot resolve path {path:?}: {reason}")]
    PathResolution { path: String, reason: String },

    /// Error during serialization of the document record.
    #[error("Rendering error: {0}")]
    Render(String),
}

/// Missing heading structure. Always fatal for the affected document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StructureError {
    /// No level-1 heading survived normalization.
    #[error("no top-level heading found")]
    NoTopLevelHeading,

    /// Abstract resolution needs a second top-level heading.
    #[error("expected at least two top-level headings, found {found}")]
    MissingSecondHeading { found: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Structure(StructureError::NoTopLevelHeading);
        assert_eq!(err.to_string(), "Structure error: no top-level heading found");

        let err = Error::Structure(StructureError::MissingSecondHeading { found: 1 });
        assert_eq!(
            err.to_string(),
            "Structure error: expected at least two top-level headings, found 1"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_path_resolution_display() {
        let err = Error::PathResolution {
            path: "a.jpg".into(),
            reason: "joined path is not valid UTF-8".into(),
        };
        assert_eq!(
            err.to_string(),
            "Cannot resolve path \"a.jpg\": joined path is not valid UTF-8"
        );
    }
}

//! Extraction options and configuration.

use std::path::{Path, PathBuf};

/// Base name used when no file name is configured.
pub const DEFAULT_FILE_NAME: &str = "document";

/// Options for extracting an article from a block stream.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// How to treat a document with a single top-level heading
    pub error_mode: ErrorMode,

    /// Directory table image paths are resolved against, and where the
    /// artifact is written
    pub output_dir: PathBuf,

    /// Base name of the output artifact
    pub file_name: Option<String>,

    /// Artifact naming scheme
    pub naming: OutputNaming,

    /// Tag sections by heading wording
    pub classify_sections: bool,

    /// NFC-normalize emitted strings (off: strings pass through unchanged)
    pub normalize_unicode: bool,

    /// Language detections below this confidence count as inconclusive
    pub min_language_confidence: f64,

    /// Whether batch extraction runs documents in parallel
    pub parallel: bool,
}

impl ExtractOptions {
    /// Create new extraction options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept documents with a single top-level heading.
    pub fn lenient(mut self) -> Self {
        self.error_mode = ErrorMode::Lenient;
        self
    }

    /// Set the output directory.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Set the artifact base name.
    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = Some(name.into());
        self
    }

    /// Set the artifact naming scheme.
    pub fn with_naming(mut self, naming: OutputNaming) -> Self {
        self.naming = naming;
        self
    }

    /// Enable or disable section classification.
    pub fn with_section_classification(mut self, classify: bool) -> Self {
        self.classify_sections = classify;
        self
    }

    /// Enable or disable Unicode normalization of the output.
    pub fn with_unicode_normalization(mut self, normalize: bool) -> Self {
        self.normalize_unicode = normalize;
        self
    }

    /// Set the minimum language detection confidence (0.0 - 1.0).
    pub fn with_min_language_confidence(mut self, confidence: f64) -> Self {
        self.min_language_confidence = confidence.clamp(0.0, 1.0);
        self
    }

    /// Enable or disable parallel batch processing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel batch processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Artifact base name, falling back to [`DEFAULT_FILE_NAME`].
    pub fn file_name(&self) -> &str {
        self.file_name.as_deref().unwrap_or(DEFAULT_FILE_NAME)
    }

    /// Full path of the output artifact.
    pub fn output_path(&self) -> PathBuf {
        self.naming.path_in(&self.output_dir, self.file_name())
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            error_mode: ErrorMode::Strict,
            output_dir: PathBuf::new(),
            file_name: None,
            naming: OutputNaming::Prefixed,
            classify_sections: false,
            normalize_unicode: false,
            min_language_confidence: 0.0,
            parallel: true,
        }
    }
}

/// Error handling mode for missing heading structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Require at least two top-level headings
    #[default]
    Strict,
    /// Accept a single top-level heading
    Lenient,
}

/// How the output artifact is named.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputNaming {
    /// `extract_<name>.json`
    #[default]
    Prefixed,
    /// `<name>.json`
    Plain,
}

impl OutputNaming {
    /// File name of the artifact for a document name.
    pub fn file_name(&self, name: &str) -> String {
        match self {
            OutputNaming::Prefixed => format!("extract_{}.json", name),
            OutputNaming::Plain => format!("{}.json", name),
        }
    }

    /// Artifact path inside a directory.
    pub fn path_in(&self, dir: &Path, name: &str) -> PathBuf {
        dir.join(self.file_name(name))
    }
}

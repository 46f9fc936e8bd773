//! Extraction statistics and recoverable warnings.

use serde::Serialize;
use std::fmt;

/// Everything noteworthy about one extraction run besides the article itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExtractionReport {
    /// Counters
    pub stats: ExtractionStats,

    /// Recovered problems, in the order they were found
    pub warnings: Vec<ExtractionWarning>,
}

impl ExtractionReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a warning and log it.
    pub fn warn(&mut self, warning: ExtractionWarning) {
        match warning {
            ExtractionWarning::MissingYear { .. } => log::debug!("{}", warning),
            _ => log::warn!("{}", warning),
        }
        self.warnings.push(warning);
    }

    /// Whether any warning was recorded.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Whether a field was reported missing.
    pub fn is_missing(&self, field: Field) -> bool {
        self.warnings
            .iter()
            .any(|w| matches!(w, ExtractionWarning::MissingField { field: f } if *f == field))
    }
}

/// Statistics collected during extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractionStats {
    /// Number of input blocks
    pub block_count: u32,

    /// Number of top-level headings after normalization
    pub top_level_heading_count: u32,

    /// Number of level-1 headings demoted to subsections
    pub demoted_heading_count: u32,

    /// Number of sections, abstract entry included
    pub section_count: u32,

    /// Number of references
    pub reference_count: u32,

    /// Number of references with a year
    pub references_with_year: u32,

    /// Number of figures
    pub figure_count: u32,

    /// Number of image blocks across all figures
    pub image_count: u32,

    /// Number of tables emitted
    pub table_count: u32,

    /// Number of table blocks skipped
    pub skipped_table_count: u32,
}

impl ExtractionStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Share of references with a year, 0.0 when there are none.
    pub fn year_coverage(&self) -> f64 {
        if self.reference_count == 0 {
            0.0
        } else {
            self.references_with_year as f64 / self.reference_count as f64
        }
    }
}

/// Optional fields that may be absent from the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Keywords,
    Abstract,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Keywords => f.write_str("keywords"),
            Field::Abstract => f.write_str("abstract"),
        }
    }
}

/// A problem that was recovered from without aborting extraction.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExtractionWarning {
    /// An optional field was not found
    MissingField { field: Field },

    /// A reference carries no recognizable year
    MissingYear { reference_id: u32 },

    /// The title language could not be inferred
    LanguageUndetected { title: String, reason: String },

    /// A table was skipped because its image path could not be resolved
    UnresolvedTablePath { block_index: usize, reason: String },
}

impl fmt::Display for ExtractionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractionWarning::MissingField { field } => write!(f, "{} not found", field),
            ExtractionWarning::MissingYear { reference_id } => {
                write!(f, "no year in reference {}", reference_id)
            }
            ExtractionWarning::LanguageUndetected { title, reason } => {
                write!(f, "language of {:?} undetected: {}", title, reason)
            }
            ExtractionWarning::UnresolvedTablePath {
                block_index,
                reason,
            } => write!(f, "table at block {} skipped: {}", block_index, reason),
        }
    }
}

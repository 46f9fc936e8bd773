//! Document-level types.

use super::{Figure, Reference, Section, Table};
use serde::{Deserialize, Serialize};

/// Language tag used when the title language cannot be inferred.
pub const UNKNOWN_LANGUAGE: &str = "unknown";

/// Structured content of one scientific article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    /// Article title (first top-level heading)
    pub title: String,

    /// Abstract text
    #[serde(rename = "abstract")]
    pub abstract_text: Option<String>,

    /// Author keywords
    pub keywords: Option<Vec<String>>,

    /// ISO-639 language code of the title, or `"unknown"`
    pub language: String,

    /// Sections in reading order; the abstract entry comes first
    pub sections: Vec<Section>,

    /// Bibliography
    pub references: Vec<Reference>,

    /// Figures
    pub figures: Vec<Figure>,

    /// Tables
    pub tables: Vec<Table>,
}

impl Article {
    /// Create an article with only a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            abstract_text: None,
            keywords: None,
            language: UNKNOWN_LANGUAGE.to_string(),
            sections: Vec::new(),
            references: Vec::new(),
            figures: Vec::new(),
            tables: Vec::new(),
        }
    }

    /// Whether a language was detected.
    pub fn has_language(&self) -> bool {
        self.language != UNKNOWN_LANGUAGE
    }

    /// Sections after the abstract entry.
    pub fn body_sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter().filter(|s| !s.is_abstract())
    }

    /// Find a section by its heading text (case-insensitive).
    pub fn section(&self, title: &str) -> Option<&Section> {
        let wanted = title.to_lowercase();
        self.sections
            .iter()
            .find(|s| s.title.to_lowercase() == wanted)
    }
}

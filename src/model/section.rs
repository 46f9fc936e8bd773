//! Article sections.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// A titled span of body text between two top-level headings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Heading text
    pub title: String,

    /// Concatenated body text, one line per contributing block
    pub text: Option<String>,

    /// Section role, when known
    #[serde(rename = "type")]
    pub section_type: Option<SectionType>,

    /// Page of the heading
    pub page_start: u32,

    /// Page of the last block before the next heading
    pub page_end: u32,
}

impl Section {
    /// Create an untagged section starting at the given page.
    pub fn new(title: impl Into<String>, page_start: u32) -> Self {
        Self {
            title: title.into(),
            text: Some(String::new()),
            section_type: None,
            page_start,
            page_end: page_start,
        }
    }

    /// Whether this is the abstract entry.
    pub fn is_abstract(&self) -> bool {
        self.section_type == Some(SectionType::Abstract)
    }

    /// Body text, empty when absent.
    pub fn text_or_empty(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }
}

/// Conventional roles of sections in a research article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionType {
    Abstract,
    Introduction,
    Methods,
    Results,
    Discussion,
    Conclusion,
}

static SECTION_PATTERNS: Lazy<Vec<(SectionType, Regex)>> = Lazy::new(|| {
    [
        (SectionType::Abstract, r"(?i)^\W*(abstract|аннотация|резюме)\b"),
        (SectionType::Introduction, r"(?i)\b(introduction|введение)\b"),
        (
            SectionType::Methods,
            r"(?i)\b(methods?|methodology|materials|experimental\s+setup|методы|методика|материалы)\b",
        ),
        (SectionType::Results, r"(?i)\b(results|результаты)\b"),
        (SectionType::Discussion, r"(?i)\b(discussion|обсуждение)\b"),
        (
            SectionType::Conclusion,
            r"(?i)\b(conclusions?|concluding\s+remarks|заключение|выводы)\b",
        ),
    ]
    .into_iter()
    .map(|(ty, pattern)| (ty, Regex::new(pattern).expect("valid section pattern")))
    .collect()
});

impl SectionType {
    /// Classify a heading by its wording. First matching role wins.
    pub fn from_heading(title: &str) -> Option<Self> {
        SECTION_PATTERNS
            .iter()
            .find(|(_, re)| re.is_match(title))
            .map(|(ty, _)| *ty)
    }

    /// Lowercase name used in serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionType::Abstract => "abstract",
            SectionType::Introduction => "introduction",
            SectionType::Methods => "methods",
            SectionType::Results => "results",
            SectionType::Discussion => "discussion",
            SectionType::Conclusion => "conclusion",
        }
    }
}

impl std::fmt::Display for SectionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Bibliography entries.

use serde::{Deserialize, Serialize};

/// One entry of the reference list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    /// Position in the reference list (1-indexed)
    pub id: u32,

    /// Raw entry text
    pub text: String,

    /// Author names; not parsed yet, always `None`
    pub authors: Option<Vec<String>>,

    /// Four-digit publication year, if one was found
    pub year: Option<String>,
}

impl Reference {
    /// Create a reference without parsed metadata.
    pub fn new(id: u32, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            authors: None,
            year: None,
        }
    }

    /// Set the publication year.
    pub fn with_year(mut self, year: Option<String>) -> Self {
        self.year = year;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_with_year() {
        let r = Reference::new(1, "Smith J. (2019).").with_year(Some("2019".into()));
        assert_eq!(r.year.as_deref(), Some("2019"));
        assert!(r.authors.is_none());

        let r = Reference::new(2, "No year.").with_year(None);
        assert_eq!(r.year, None);
    }

    #[test]
    fn test_reference_serializes_nulls() {
        let json = serde_json::to_value(Reference::new(1, "x")).unwrap();
        assert!(json["authors"].is_null());
        assert!(json["year"].is_null());
        assert_eq!(json["id"], 1);
    }
}

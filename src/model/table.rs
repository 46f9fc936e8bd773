//! Tables extracted from table blocks.

use serde::{Deserialize, Serialize};

/// A table with its caption lines and rendered image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Table number in reading order (1-indexed)
    pub id: u32,

    /// Always `"table"`
    #[serde(rename = "type")]
    pub kind: String,

    /// Caption lines followed by footnote lines
    pub caption: Vec<String>,

    /// Table markup (HTML) as recognized upstream
    pub table_body: Option<String>,

    /// Table image path, joined with the output directory
    pub image_path: String,

    /// Source page
    pub page: u32,
}

impl Table {
    /// Create a table entry.
    pub fn new(id: u32, image_path: impl Into<String>, page: u32) -> Self {
        Self {
            id,
            kind: "table".to_string(),
            caption: Vec::new(),
            table_body: None,
            image_path: image_path.into(),
            page,
        }
    }

    /// Caption and footnote lines joined by spaces.
    pub fn caption_text(&self) -> String {
        self.caption.join(" ")
    }

    /// Whether the upstream parser recognized the table content.
    pub fn has_body(&self) -> bool {
        self.table_body.as_deref().is_some_and(|b| !b.trim().is_empty())
    }
}

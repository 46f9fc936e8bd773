//! Figures assembled from one or more image blocks.

use serde::{Deserialize, Serialize};

/// A logical figure; multi-panel figures list every panel image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Figure {
    /// Figure number in reading order (1-indexed)
    pub id: u32,

    /// Always `"image"`
    #[serde(rename = "type")]
    pub kind: String,

    /// Caption shared by all panels
    pub caption: Option<String>,

    /// Panel image paths in reading order (never empty)
    pub image_paths: Vec<String>,

    /// Page of the first panel
    pub page: u32,
}

impl Figure {
    /// Start a figure from its first panel.
    pub fn new(id: u32, first_path: impl Into<String>, page: u32) -> Self {
        Self {
            id,
            kind: "image".to_string(),
            caption: None,
            image_paths: vec![first_path.into()],
            page,
        }
    }

    /// Number of panels.
    pub fn panel_count(&self) -> usize {
        self.image_paths.len()
    }

    /// Whether the figure spans several image blocks.
    pub fn is_multi_panel(&self) -> bool {
        self.image_paths.len() > 1
    }
}

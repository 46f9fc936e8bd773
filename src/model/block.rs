//! Content blocks emitted by the upstream document parser.
//!
//! The parser flattens an article into a reading-order list of loosely typed
//! JSON objects. Each object is decoded into a [`ContentBlock`] whose
//! [`BlockKind`] is a closed sum type, so every extraction pass matches
//! exhaustively instead of probing optional attributes.

use serde::{Deserialize, Deserializer, Serialize};

/// One element of the parsed document stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawBlock", into = "RawBlock")]
pub struct ContentBlock {
    /// Zero-based index of the source page
    pub page_index: u32,

    /// Block payload
    pub kind: BlockKind,
}

/// Payload of a content block.
#[derive(Debug, Clone, PartialEq)]
pub enum BlockKind {
    /// Body paragraph
    Text { text: String },

    /// Heading; level 1 is a chapter, 2 and deeper are subsections
    Heading { text: String, level: u8 },

    /// Several lines bundled into one block
    List { kind: ListKind, items: Vec<String> },

    /// Single bibliography entry
    ReferenceText { text: String },

    /// Display equation, usually LaTeX
    Equation { text: String },

    /// Code listing or algorithm
    Code { body: String },

    /// Image with an optional caption (empty when the parser found none)
    Image {
        path: Option<String>,
        caption: String,
    },

    /// Table with caption and footnote lines
    Table {
        body: Option<String>,
        caption: Vec<String>,
        footnote: Vec<String>,
        image_path: Option<String>,
    },

    /// Block type no pass understands (page headers, footers, asides, ...)
    Other {
        type_name: String,
        text: Option<String>,
    },
}

/// What the lines of a [`BlockKind::List`] hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListKind {
    /// Ordinary list text, part of the section body
    Text,
    /// Bibliography entries
    Reference,
    /// Any other list flavour
    Other(String),
}

impl ListKind {
    fn as_sub_type(&self) -> Option<String> {
        match self {
            ListKind::Text => Some("text".to_string()),
            ListKind::Reference => Some("ref_text".to_string()),
            ListKind::Other(s) if s.is_empty() => None,
            ListKind::Other(s) => Some(s.clone()),
        }
    }
}

impl ContentBlock {
    /// Create a block from its payload.
    pub fn new(kind: BlockKind, page_index: u32) -> Self {
        Self { page_index, kind }
    }

    /// Create a body paragraph.
    pub fn paragraph(text: impl Into<String>, page_index: u32) -> Self {
        Self::new(BlockKind::Text { text: text.into() }, page_index)
    }

    /// Create a heading.
    pub fn heading(text: impl Into<String>, level: u8, page_index: u32) -> Self {
        Self::new(
            BlockKind::Heading {
                text: text.into(),
                level,
            },
            page_index,
        )
    }

    /// Create a display equation.
    pub fn equation(text: impl Into<String>, page_index: u32) -> Self {
        Self::new(BlockKind::Equation { text: text.into() }, page_index)
    }

    /// Create a code block.
    pub fn code(body: impl Into<String>, page_index: u32) -> Self {
        Self::new(BlockKind::Code { body: body.into() }, page_index)
    }

    /// Create a list of body text lines.
    pub fn text_list(items: Vec<String>, page_index: u32) -> Self {
        Self::new(
            BlockKind::List {
                kind: ListKind::Text,
                items,
            },
            page_index,
        )
    }

    /// Create a single bibliography entry.
    pub fn reference(text: impl Into<String>, page_index: u32) -> Self {
        Self::new(BlockKind::ReferenceText { text: text.into() }, page_index)
    }

    /// Create a block bundling several bibliography entries.
    pub fn reference_list(items: Vec<String>, page_index: u32) -> Self {
        Self::new(
            BlockKind::List {
                kind: ListKind::Reference,
                items,
            },
            page_index,
        )
    }

    /// Create an image block.
    pub fn image(path: impl Into<String>, caption: impl Into<String>, page_index: u32) -> Self {
        Self::new(
            BlockKind::Image {
                path: Some(path.into()),
                caption: caption.into(),
            },
            page_index,
        )
    }

    /// Create a table block.
    pub fn table(
        body: Option<String>,
        caption: Vec<String>,
        footnote: Vec<String>,
        image_path: Option<String>,
        page_index: u32,
    ) -> Self {
        Self::new(
            BlockKind::Table {
                body,
                caption,
                footnote,
                image_path,
            },
            page_index,
        )
    }

    /// The plain `text` payload, for the block kinds that carry one.
    pub fn text(&self) -> Option<&str> {
        match &self.kind {
            BlockKind::Text { text }
            | BlockKind::Heading { text, .. }
            | BlockKind::ReferenceText { text }
            | BlockKind::Equation { text } => Some(text),
            BlockKind::Other { text, .. } => text.as_deref(),
            BlockKind::List { .. }
            | BlockKind::Code { .. }
            | BlockKind::Image { .. }
            | BlockKind::Table { .. } => None,
        }
    }

    /// Heading level as reported by the parser.
    pub fn heading_level(&self) -> Option<u8> {
        match self.kind {
            BlockKind::Heading { level, .. } => Some(level),
            _ => None,
        }
    }

    /// Whether this is a heading of any level.
    pub fn is_heading(&self) -> bool {
        matches!(self.kind, BlockKind::Heading { .. })
    }

    /// Upstream type name of the block.
    pub fn type_name(&self) -> &str {
        match &self.kind {
            BlockKind::Text { .. } | BlockKind::Heading { .. } => "text",
            BlockKind::List { .. } => "list",
            BlockKind::ReferenceText { .. } => "ref_text",
            BlockKind::Equation { .. } => "equation",
            BlockKind::Code { .. } => "code",
            BlockKind::Image { .. } => "image",
            BlockKind::Table { .. } => "table",
            BlockKind::Other { type_name, .. } => type_name,
        }
    }
}

/// Wire shape of a block as written by the upstream parser.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct RawBlock {
    #[serde(rename = "type")]
    block_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,

    #[serde(default, alias = "heading_level", skip_serializing_if = "Option::is_none")]
    text_level: Option<i64>,

    #[serde(default, alias = "page_index")]
    page_idx: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    list_items: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    sub_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    code_body: Option<String>,

    #[serde(default, alias = "image_path", skip_serializing_if = "Option::is_none")]
    img_path: Option<String>,

    #[serde(
        default,
        deserialize_with = "one_or_many",
        skip_serializing_if = "Vec::is_empty"
    )]
    image_caption: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    table_body: Option<String>,

    #[serde(
        default,
        deserialize_with = "one_or_many",
        skip_serializing_if = "Vec::is_empty"
    )]
    table_caption: Vec<String>,

    #[serde(
        default,
        deserialize_with = "one_or_many",
        skip_serializing_if = "Vec::is_empty"
    )]
    table_footnote: Vec<String>,
}

/// Captions arrive either as a string or as a list of lines.
fn one_or_many<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(OneOrMany::One(s)) if s.is_empty() => Vec::new(),
        Some(OneOrMany::One(s)) => vec![s],
        Some(OneOrMany::Many(v)) => v,
    })
}

fn clamp_level(level: i64) -> u8 {
    u8::try_from(level).unwrap_or(u8::MAX)
}

impl From<RawBlock> for ContentBlock {
    fn from(raw: RawBlock) -> Self {
        let page_index = raw.page_idx;
        let level = raw.text_level.filter(|l| *l > 0).map(clamp_level);

        let kind = match raw.block_type.as_str() {
            "text" => {
                let text = raw.text.unwrap_or_default();
                match level {
                    Some(level) => BlockKind::Heading { text, level },
                    None => BlockKind::Text { text },
                }
            }
            "heading" | "title" => BlockKind::Heading {
                text: raw.text.unwrap_or_default(),
                level: level.unwrap_or(1),
            },
            "equation" | "interline_equation" => BlockKind::Equation {
                text: raw.text.unwrap_or_default(),
            },
            "code" => BlockKind::Code {
                body: raw.code_body.unwrap_or_default(),
            },
            "image" => BlockKind::Image {
                path: raw.img_path,
                caption: raw.image_caption.join(" "),
            },
            "table" => BlockKind::Table {
                body: raw.table_body,
                caption: raw.table_caption,
                footnote: raw.table_footnote,
                image_path: raw.img_path,
            },
            "ref_text" => BlockKind::ReferenceText {
                text: raw.text.unwrap_or_default(),
            },
            other => match raw.sub_type.as_deref() {
                Some("ref_text") => BlockKind::List {
                    kind: ListKind::Reference,
                    items: raw.list_items.unwrap_or_default(),
                },
                Some("text") => BlockKind::List {
                    kind: ListKind::Text,
                    items: raw.list_items.unwrap_or_default(),
                },
                sub_type if other == "list" => BlockKind::List {
                    kind: ListKind::Other(sub_type.unwrap_or_default().to_string()),
                    items: raw.list_items.unwrap_or_default(),
                },
                _ => BlockKind::Other {
                    type_name: other.to_string(),
                    text: raw.text,
                },
            },
        };

        ContentBlock { page_index, kind }
    }
}

impl From<ContentBlock> for RawBlock {
    fn from(block: ContentBlock) -> Self {
        let mut raw = RawBlock {
            block_type: block.type_name().to_string(),
            page_idx: block.page_index,
            ..Default::default()
        };

        match block.kind {
            BlockKind::Text { text }
            | BlockKind::ReferenceText { text }
            | BlockKind::Equation { text } => raw.text = Some(text),
            BlockKind::Heading { text, level } => {
                raw.text = Some(text);
                raw.text_level = Some(i64::from(level));
            }
            BlockKind::List { kind, items } => {
                raw.sub_type = kind.as_sub_type();
                raw.list_items = Some(items);
            }
            BlockKind::Code { body } => raw.code_body = Some(body),
            BlockKind::Image { path, caption } => {
                raw.img_path = path;
                if !caption.is_empty() {
                    raw.image_caption = vec![caption];
                }
            }
            BlockKind::Table {
                body,
                caption,
                footnote,
                image_path,
            } => {
                raw.table_body = body;
                raw.table_caption = caption;
                raw.table_footnote = footnote;
                raw.img_path = image_path;
            }
            BlockKind::Other { text, .. } => raw.text = text,
        }

        raw
    }
}

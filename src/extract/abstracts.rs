//! Abstract resolution.
//!
//! The abstract is either its own chapter (second top-level heading reads
//! "Abstract"), a labelled sub-heading followed by its paragraph, or an inline
//! labelled paragraph.

use super::headings::TitleRef;
use crate::model::{BlockKind, ContentBlock, ListKind, Section, SectionType};
use once_cell::sync::Lazy;
use regex::Regex;

static ABSTRACT_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)аннотация|abstract").unwrap());

/// Title of the abstract entry in the section list.
pub const ABSTRACT_TITLE: &str = "Abstract";

/// Outcome of abstract resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct AbstractResolution {
    /// Abstract entry, always first in the section list
    pub section: Section,

    /// Index into the top-level headings where body sections begin
    pub first_section: usize,
}

impl AbstractResolution {
    /// Abstract text, if found.
    pub fn text(&self) -> Option<&str> {
        self.section.text.as_deref()
    }
}

/// Resolve the abstract from the top-level headings or an inline block.
pub fn resolve_abstract(blocks: &[ContentBlock], titles: &[TitleRef<'_>]) -> AbstractResolution {
    let mut section = Section {
        title: ABSTRACT_TITLE.to_string(),
        text: None,
        section_type: Some(SectionType::Abstract),
        page_start: 0,
        page_end: 0,
    };

    if let Some(heading) = titles.get(1).filter(|t| ABSTRACT_LABEL.is_match(t.text)) {
        if let Some(block) = blocks.get(heading.index + 1) {
            section.text = block_text(block);
            section.page_start = block.page_index;
            section.page_end = block.page_index;
        }
        log::debug!("Abstract is a chapter at block {}", heading.index);
        return AbstractResolution {
            section,
            first_section: 2,
        };
    }

    let inline = blocks
        .iter()
        .enumerate()
        .find_map(|(idx, block)| match &block.kind {
            BlockKind::Text { text } if ABSTRACT_LABEL.is_match(text) => Some((idx, block)),
            // lower-level heading: the abstract is the next block
            BlockKind::Heading { text, level } if *level > 1 && ABSTRACT_LABEL.is_match(text) => {
                Some((idx, blocks.get(idx + 1)?))
            }
            _ => None,
        });
    if let Some((idx, block)) = inline {
        section.text = block_text(block);
        section.page_start = block.page_index;
        section.page_end = block.page_index;
        log::debug!("Inline abstract at block {}", idx);
    }

    AbstractResolution {
        section,
        first_section: 1,
    }
}

fn block_text(block: &ContentBlock) -> Option<String> {
    let text = match &block.kind {
        BlockKind::List {
            kind: ListKind::Text,
            items,
        } => items.join("\n"),
        _ => block.text()?.to_string(),
    };
    (!text.trim().is_empty()).then_some(text)
}

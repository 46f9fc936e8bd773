//! Section segmentation between consecutive top-level headings.

use super::headings::TitleRef;
use crate::model::{BlockKind, ContentBlock, ListKind, Section, SectionType};

/// Build body sections from the top-level headings.
///
/// Headings from `first` up to the second-to-last one each open a section
/// that runs until the next heading; the last heading opens the bibliography
/// and produces no section. Images, tables and reference entries are skipped.
pub fn segment_sections(
    blocks: &[ContentBlock],
    titles: &[TitleRef<'_>],
    first: usize,
    classify: bool,
) -> Vec<Section> {
    let last = titles.len().saturating_sub(1);
    if first >= last {
        return Vec::new();
    }

    titles[first..=last]
        .windows(2)
        .map(|pair| {
            let (current, next) = (pair[0], pair[1]);
            let mut section = Section::new(current.text, blocks[current.index].page_index);

            let mut text = String::new();
            for block in &blocks[current.index + 1..next.index] {
                append_body(&mut text, block);
            }
            section.text = Some(text);
            section.page_end = blocks[next.index - 1].page_index;

            if classify {
                section.section_type = SectionType::from_heading(current.text)
                    .filter(|ty| *ty != SectionType::Abstract);
            }
            section
        })
        .collect()
}

/// Append the body contribution of one block, one line per item.
pub fn append_body(text: &mut String, block: &ContentBlock) {
    match &block.kind {
        BlockKind::Text { text: line }
        | BlockKind::Equation { text: line }
        | BlockKind::Heading { text: line, .. } => push_line(text, line),
        BlockKind::List {
            kind: ListKind::Text,
            items,
        } => {
            for item in items {
                push_line(text, item);
            }
        }
        BlockKind::Code { body } => push_line(text, body),
        BlockKind::List { .. }
        | BlockKind::ReferenceText { .. }
        | BlockKind::Image { .. }
        | BlockKind::Table { .. }
        | BlockKind::Other { .. } => {}
    }
}

fn push_line(text: &mut String, line: &str) {
    text.push_str(line);
    text.push('\n');
}

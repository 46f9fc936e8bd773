//! Keyword block detection and splitting.

use crate::model::{BlockKind, ContentBlock, ListKind};
use once_cell::sync::Lazy;
use regex::Regex;

static KEYWORDS_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(key\s?words|ключевые\s+слова)\s*[:：.—–-]?").unwrap());

static SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"[,;]").unwrap());

/// Find the keyword block and split it into keywords.
///
/// Either the label shares a block with the keywords ("Keywords: a, b; c"),
/// or the label is a heading and the keywords are in the next block. Only
/// the first labelled block is considered.
pub fn extract_keywords(blocks: &[ContentBlock]) -> Option<Vec<String>> {
    let (idx, block, text) = blocks.iter().enumerate().find_map(|(idx, block)| {
        let text = label_candidate(block)?;
        KEYWORDS_LABEL.is_match(text).then_some((idx, block, text))
    })?;

    let raw = if block.is_heading() {
        following_text(blocks.get(idx + 1)?)?
    } else {
        KEYWORDS_LABEL.replace_all(text, "").into_owned()
    };

    let keywords = split_keywords(&raw);
    log::debug!("Keywords at block {}: {:?}", idx, keywords);
    (!keywords.is_empty()).then_some(keywords)
}

/// Split a keyword line on commas and semicolons.
pub fn split_keywords(raw: &str) -> Vec<String> {
    let trimmed = raw.trim_matches(|c: char| c.is_whitespace() || matches!(c, '.' | ':'));
    SEPARATOR
        .split(trimmed)
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}

fn label_candidate(block: &ContentBlock) -> Option<&str> {
    match &block.kind {
        BlockKind::Text { text } | BlockKind::Heading { text, .. } => Some(text),
        BlockKind::Other { text, .. } => text.as_deref(),
        BlockKind::List { .. }
        | BlockKind::ReferenceText { .. }
        | BlockKind::Equation { .. }
        | BlockKind::Code { .. }
        | BlockKind::Image { .. }
        | BlockKind::Table { .. } => None,
    }
}

fn following_text(block: &ContentBlock) -> Option<String> {
    match &block.kind {
        BlockKind::List {
            kind: ListKind::Text,
            items,
        } => Some(items.join("; ")),
        _ => block.text().map(str::to_string),
    }
}

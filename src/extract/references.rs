//! Reference list parsing.

use crate::model::{BlockKind, ContentBlock, ListKind, Reference};
use once_cell::sync::Lazy;
use regex::Regex;

// A year is bounded by slash, whitespace or "(" on the left and by
// punctuation, ")" or whitespace on the right.
static YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"[/\s(](\d{4})[.,;)\s]").unwrap());

/// Collect bibliography entries from `tail_start` to the end of the stream.
///
/// Entry ids are assigned 1-based in collection order.
pub fn parse_references(blocks: &[ContentBlock], tail_start: usize) -> Vec<Reference> {
    let tail = blocks.get(tail_start..).unwrap_or(&[]);

    let lines = tail.iter().flat_map(reference_lines);

    let references: Vec<Reference> = lines
        .enumerate()
        .map(|(idx, line)| Reference::new(idx as u32 + 1, line).with_year(extract_year(line)))
        .collect();

    log::debug!(
        "Parsed {} references from block {}",
        references.len(),
        tail_start
    );
    references
}

fn reference_lines(block: &ContentBlock) -> Vec<&str> {
    match &block.kind {
        BlockKind::List {
            kind: ListKind::Reference,
            items,
        } => items.iter().map(String::as_str).collect(),
        BlockKind::ReferenceText { text } => vec![text.as_str()],
        BlockKind::Text { .. }
        | BlockKind::Heading { .. }
        | BlockKind::List { .. }
        | BlockKind::Equation { .. }
        | BlockKind::Code { .. }
        | BlockKind::Image { .. }
        | BlockKind::Table { .. }
        | BlockKind::Other { .. } => Vec::new(),
    }
}

/// Find the first delimited four-digit year in a reference.
pub fn extract_year(text: &str) -> Option<String> {
    YEAR.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_year() {
        assert_eq!(
            extract_year("Smith J. (2019). Some title."),
            Some("2019".to_string())
        );
        assert_eq!(
            extract_year("Smith, J. 2020. Paper X."),
            Some("2020".to_string())
        );
        assert_eq!(
            extract_year("Proc. ACL, vol. 12/2021, pp. 1-9"),
            Some("2021".to_string())
        );
        assert_eq!(extract_year("No year present here."), None);
    }

    #[test]
    fn test_year_needs_delimiters() {
        // not bounded on the left
        assert_eq!(extract_year("2019. Starts with year"), None);
        // five digits are not a year
        assert_eq!(extract_year("doi 12345."), None);
        // page range suffix
        assert_eq!(extract_year("pp. 1999-2004"), None);
    }

    #[test]
    fn test_first_year_wins() {
        assert_eq!(
            extract_year("Doe (2001) reprinted 2015."),
            Some("2001".to_string())
        );
    }

    #[test]
    fn test_parse_references_from_tail() {
        let blocks = vec![
            ContentBlock::heading("Paper", 1, 0),
            ContentBlock::reference("Not in tail 1999.", 0),
            ContentBlock::heading("References", 1, 5),
            ContentBlock::reference_list(
                vec!["[1] A. Author. 2018. T1.".into(), "[2] B. Author. T2.".into()],
                5,
            ),
            ContentBlock::paragraph("Stray paragraph 2017.", 5),
            ContentBlock::reference("[3] C. Author (2020) T3.", 6),
        ];

        let refs = parse_references(&blocks, 2);
        assert_eq!(refs.len(), 3);

        let ids: Vec<u32> = refs.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        assert_eq!(refs[0].year.as_deref(), Some("2018"));
        assert_eq!(refs[1].year, None);
        assert_eq!(refs[2].text, "[3] C. Author (2020) T3.");
        assert_eq!(refs[2].year.as_deref(), Some("2020"));
        assert!(refs.iter().all(|r| r.authors.is_none()));
    }

    #[test]
    fn test_tail_past_end() {
        let blocks = vec![ContentBlock::heading("Paper", 1, 0)];
        assert!(parse_references(&blocks, 5).is_empty());
    }
}

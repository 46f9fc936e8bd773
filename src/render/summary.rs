//! Plain-text digest of an extraction.

use crate::extract::{Extraction, Field};

/// Render a short human-readable summary: title, language, counts, section
/// outline and warnings.
pub fn to_summary(extraction: &Extraction) -> String {
    let article = &extraction.article;
    let report = &extraction.report;
    let stats = &report.stats;
    let mut out = String::new();

    out.push_str(&format!("Title: {}\n", article.title));
    if article.has_language() {
        out.push_str(&format!("Language: {}\n", article.language));
    } else {
        out.push_str(&format!("Language: {} (not detected)\n", article.language));
    }

    match article.keywords {
        Some(ref keywords) => out.push_str(&format!("Keywords: {}\n", keywords.join(", "))),
        None if report.is_missing(Field::Keywords) => out.push_str("Keywords: missing\n"),
        None => {}
    }
    match article.abstract_text {
        Some(ref text) => out.push_str(&format!("Abstract: {} chars\n", text.chars().count())),
        None => out.push_str("Abstract: missing\n"),
    }

    out.push_str(&format!(
        "Sections: {} ({} body)\n",
        article.sections.len(),
        article.body_sections().count()
    ));
    for section in &article.sections {
        let tag = section
            .section_type
            .map(|t| format!(" [{}]", t))
            .unwrap_or_default();
        out.push_str(&format!(
            "  - {}{} (pages {}-{})\n",
            section.title, tag, section.page_start, section.page_end
        ));
    }

    out.push_str(&format!(
        "References: {} ({} with year)\n",
        stats.reference_count, stats.references_with_year
    ));

    let multi_panel = article.figures.iter().filter(|f| f.is_multi_panel()).count();
    out.push_str(&format!(
        "Figures: {} ({} images, {} multi-panel)\n",
        stats.figure_count, stats.image_count, multi_panel
    ));

    out.push_str(&format!("Tables: {}\n", stats.table_count));
    for table in &article.tables {
        let caption = table.caption_text();
        let caption = if caption.is_empty() {
            "(no caption)".to_string()
        } else {
            caption
        };
        let marker = if table.has_body() { "" } else { " [no body]" };
        out.push_str(&format!("  - Table {}: {}{}\n", table.id, caption, marker));
    }

    if report.has_warnings() {
        out.push_str(&format!("Warnings: {}\n", report.warnings.len()));
        for warning in &report.warnings {
            out.push_str(&format!("  - {}\n", warning));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::{ExtractOptions, Extractor};
    use crate::model::ContentBlock;

    #[test]
    fn test_summary_lists_sections_and_warnings() {
        let blocks = vec![
            ContentBlock::heading("My Paper", 1, 0),
            ContentBlock::heading("Introduction", 1, 0),
            ContentBlock::paragraph("Text.", 0),
            ContentBlock::heading("References", 1, 1),
            ContentBlock::reference("Untitled reference", 1),
        ];
        let extraction = Extractor::default().extract(&blocks).unwrap();
        let summary = to_summary(&extraction);

        assert!(summary.contains("Title: My Paper"));
        assert!(summary.contains("Language: unknown (not detected)"));
        assert!(summary.contains("Keywords: missing"));
        assert!(summary.contains("Abstract: missing"));
        assert!(summary.contains("Sections: 2 (1 body)"));
        assert!(summary.contains("  - Abstract [abstract] (pages 0-0)"));
        assert!(summary.contains("  - Introduction (pages 0-0)"));
        assert!(summary.contains("References: 1 (0 with year)"));
        assert!(summary.contains("no year in reference 1"));
    }

    #[test]
    fn test_summary_lists_tables_and_panels() {
        let blocks = vec![
            ContentBlock::heading("A Study of Parsing", 1, 0),
            ContentBlock::heading("Results", 1, 0),
            ContentBlock::image("images/1a.jpg", "", 0),
            ContentBlock::image("images/1b.jpg", "Figure 1. Panels", 0),
            ContentBlock::table(
                Some("<table><tr><td>1</td></tr></table>".into()),
                vec!["Table 1. Scores".into()],
                vec!["n = 10".into()],
                Some("images/t1.jpg".into()),
                0,
            ),
            ContentBlock::table(None, vec![], vec![], Some("images/t2.jpg".into()), 1),
        ];
        let options = ExtractOptions::new().with_output_dir("out");
        let extraction = Extractor::new(options).extract(&blocks).unwrap();
        let summary = to_summary(&extraction);

        assert!(summary.contains("Figures: 1 (2 images, 1 multi-panel)"));
        assert!(summary.contains("Tables: 2"));
        assert!(summary.contains("  - Table 1: Table 1. Scores n = 10\n"));
        assert!(summary.contains("  - Table 2: (no caption) [no body]"));
    }
}

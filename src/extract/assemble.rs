//! Final merge of the pass results into an [`Article`].

use crate::model::{Article, Figure, Reference, Section, Table};
use unicode_normalization::UnicodeNormalization;

/// Results of the individual passes, ready to be merged.
#[derive(Debug, Clone, Default)]
pub struct ArticleParts {
    pub title: String,
    pub language: String,
    pub keywords: Option<Vec<String>>,
    pub abstract_section: Option<Section>,
    pub body_sections: Vec<Section>,
    pub references: Vec<Reference>,
    pub figures: Vec<Figure>,
    pub tables: Vec<Table>,
}

/// Merge pass results into the document record.
///
/// The abstract entry heads the section list and its text doubles as the
/// record's `abstract` field.
pub fn assemble(parts: ArticleParts, normalize_unicode: bool) -> Article {
    let abstract_text = parts
        .abstract_section
        .as_ref()
        .and_then(|s| s.text.clone());

    let mut sections = Vec::with_capacity(parts.body_sections.len() + 1);
    sections.extend(parts.abstract_section);
    sections.extend(parts.body_sections);

    let mut article = Article {
        title: parts.title,
        abstract_text,
        keywords: parts.keywords,
        language: parts.language,
        sections,
        references: parts.references,
        figures: parts.figures,
        tables: parts.tables,
    };

    if normalize_unicode {
        normalize_article(&mut article);
    }
    article
}

fn nfc(s: &mut String) {
    if !unicode_normalization::is_nfc(s.as_str()) {
        *s = s.nfc().collect();
    }
}

/// NFC-normalize every free-text field.
fn normalize_article(article: &mut Article) {
    nfc(&mut article.title);
    article.abstract_text.iter_mut().for_each(nfc);
    article.keywords.iter_mut().flatten().for_each(nfc);

    for section in &mut article.sections {
        nfc(&mut section.title);
        section.text.iter_mut().for_each(nfc);
    }
    for reference in &mut article.references {
        nfc(&mut reference.text);
    }
    for figure in &mut article.figures {
        figure.caption.iter_mut().for_each(nfc);
    }
    for table in &mut article.tables {
        table.caption.iter_mut().for_each(nfc);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SectionType;

    fn abstract_section(text: Option<&str>) -> Section {
        Section {
            title: "Abstract".into(),
            text: text.map(str::to_string),
            section_type: Some(SectionType::Abstract),
            page_start: 0,
            page_end: 0,
        }
    }

    #[test]
    fn test_abstract_first() {
        let parts = ArticleParts {
            title: "Paper".into(),
            language: "en".into(),
            abstract_section: Some(abstract_section(Some("Summary."))),
            body_sections: vec![Section::new("Introduction", 1)],
            ..Default::default()
        };
        let article = assemble(parts, false);

        assert_eq!(article.abstract_text.as_deref(), Some("Summary."));
        assert_eq!(article.sections.len(), 2);
        assert!(article.sections[0].is_abstract());
        assert_eq!(article.sections[1].title, "Introduction");
    }

    #[test]
    fn test_missing_abstract_text() {
        let parts = ArticleParts {
            title: "Paper".into(),
            abstract_section: Some(abstract_section(None)),
            ..Default::default()
        };
        let article = assemble(parts, true);
        assert_eq!(article.abstract_text, None);
        assert_eq!(article.sections.len(), 1);
    }

    #[test]
    fn test_nfc_normalization() {
        // "й" written as и + combining breve
        let decomposed = "Краткии\u{306} обзор";
        let parts = ArticleParts {
            title: decomposed.into(),
            keywords: Some(vec![decomposed.into()]),
            ..Default::default()
        };

        let article = assemble(parts.clone(), true);
        assert_eq!(article.title, "Краткий обзор");
        assert_eq!(article.keywords.unwrap()[0], "Краткий обзор");

        let raw = assemble(parts, false);
        assert_eq!(raw.title, decomposed);
    }
}

//! Block-stream to article extraction pipeline.
//!
//! Passes run in a fixed order over one immutable block list:
//!
//! 1. [`headings`]: demote mis-leveled subsections, collect top-level headings
//! 2. [`language`]: title language
//! 3. [`keywords`]: keyword block
//! 4. [`abstracts`]: abstract chapter or inline abstract
//! 5. [`sections`]: body sections between top-level headings
//! 6. [`references`]: bibliography after the last top-level heading
//! 7. [`visuals`]: figures and tables
//! 8. [`assemble`]: merge into an [`Article`]
//!
//! Each pass returns its own result; only [`assemble`](assemble::assemble)
//! combines them. All state lives in a single [`Extractor::extract`] call, so
//! one extractor can serve any number of documents, from any thread.

pub mod abstracts;
pub mod assemble;
pub mod headings;
pub mod keywords;
pub mod language;
mod options;
pub mod references;
mod report;
pub mod sections;
pub mod visuals;

pub use options::{ErrorMode, ExtractOptions, OutputNaming, DEFAULT_FILE_NAME};
pub use report::{ExtractionReport, ExtractionStats, ExtractionWarning, Field};

use crate::error::{Result, StructureError};
use crate::model::{Article, ContentBlock, UNKNOWN_LANGUAGE};
use assemble::ArticleParts;
use headings::Outline;

/// Result of extracting one document.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    /// The document record
    pub article: Article,

    /// Statistics and recovered warnings
    pub report: ExtractionReport,
}

/// Article extractor.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    options: ExtractOptions,
}

impl Extractor {
    /// Create an extractor with the given options.
    pub fn new(options: ExtractOptions) -> Self {
        Self { options }
    }

    /// Get the extraction options.
    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Extract the article structure from a block stream.
    ///
    /// Fails only when the heading structure is missing: no top-level
    /// heading at all, or (in strict mode) fewer than two.
    pub fn extract(&self, blocks: &[ContentBlock]) -> Result<Extraction> {
        let outline = Outline::build(blocks);
        let title = outline.title()?;
        let titles = outline.titles();

        if titles.len() < 2 && self.options.error_mode == ErrorMode::Strict {
            return Err(StructureError::MissingSecondHeading {
                found: titles.len(),
            }
            .into());
        }

        let mut report = ExtractionReport::new();

        let language = match language::detect_language(
            title.text,
            self.options.min_language_confidence,
        ) {
            Ok(lang) => lang,
            Err(e) => {
                report.warn(ExtractionWarning::LanguageUndetected {
                    title: title.text.to_string(),
                    reason: e.to_string(),
                });
                UNKNOWN_LANGUAGE.to_string()
            }
        };

        let keywords = keywords::extract_keywords(blocks);
        if keywords.is_none() {
            report.warn(ExtractionWarning::MissingField {
                field: Field::Keywords,
            });
        }

        let resolved = abstracts::resolve_abstract(blocks, titles);
        if resolved.text().is_none() {
            report.warn(ExtractionWarning::MissingField {
                field: Field::Abstract,
            });
        }

        let body_sections = sections::segment_sections(
            blocks,
            titles,
            resolved.first_section,
            self.options.classify_sections,
        );

        let references = outline
            .tail_start()
            .map(|start| references::parse_references(blocks, start))
            .unwrap_or_default();
        for reference in references.iter().filter(|r| r.year.is_none()) {
            report.warn(ExtractionWarning::MissingYear {
                reference_id: reference.id,
            });
        }

        let figures = visuals::collect_figures(blocks);
        let tables = visuals::collect_tables(blocks, &self.options.output_dir);
        report.warnings.extend(tables.skipped.iter().cloned());

        report.stats = ExtractionStats {
            block_count: blocks.len() as u32,
            top_level_heading_count: titles.len() as u32,
            demoted_heading_count: outline.demoted_count() as u32,
            section_count: body_sections.len() as u32 + 1,
            reference_count: references.len() as u32,
            references_with_year: references.iter().filter(|r| r.year.is_some()).count() as u32,
            figure_count: figures.len() as u32,
            image_count: figures.iter().map(|f| f.panel_count()).sum::<usize>() as u32,
            table_count: tables.tables.len() as u32,
            skipped_table_count: tables.skipped.len() as u32,
        };

        let article = assemble::assemble(
            ArticleParts {
                title: title.text.to_string(),
                language,
                keywords,
                abstract_section: Some(resolved.section),
                body_sections,
                references,
                figures,
                tables: tables.tables,
            },
            self.options.normalize_unicode,
        );

        log::debug!(
            "Extracted {:?}: {} sections, {} references, {} figures, {} tables",
            article.title,
            article.sections.len(),
            article.references.len(),
            article.figures.len(),
            article.tables.len()
        );

        Ok(Extraction { article, report })
    }
}

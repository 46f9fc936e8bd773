//! Heading normalization and title resolution.
//!
//! The upstream parser sometimes reports numbered subsections ("2.1 Related
//! Work") as top-level headings. [`Outline::build`] computes corrected levels
//! alongside the block list, leaving the input untouched, and collects the
//! top-level headings every later pass indexes into.

use crate::error::StructureError;
use crate::model::ContentBlock;
use once_cell::sync::Lazy;
use regex::Regex;

static SUBSECTION_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.\d+").unwrap());

/// A top-level heading and its position in the block list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TitleRef<'a> {
    /// Index of the heading block
    pub index: usize,
    /// Heading text
    pub text: &'a str,
}

/// Corrected heading structure of a block list.
#[derive(Debug, Clone)]
pub struct Outline<'a> {
    titles: Vec<TitleRef<'a>>,
    demoted: usize,
}

impl<'a> Outline<'a> {
    /// Normalize heading levels and collect top-level headings in order.
    pub fn build(blocks: &'a [ContentBlock]) -> Self {
        let mut demoted = 0;
        let levels: Vec<Option<u8>> = blocks
            .iter()
            .map(|block| {
                let level = block.heading_level()?;
                if level == 1 && is_numbered_subsection(block.text().unwrap_or("")) {
                    demoted += 1;
                    Some(2)
                } else {
                    Some(level)
                }
            })
            .collect();

        let titles: Vec<TitleRef<'a>> = blocks
            .iter()
            .zip(&levels)
            .enumerate()
            .filter(|(_, (_, level))| **level == Some(1))
            .map(|(index, (block, _))| TitleRef {
                index,
                text: block.text().unwrap_or(""),
            })
            .collect();

        let outline = Self { titles, demoted };
        log::debug!(
            "Outline: {} headings demoted, {} top-level headings",
            outline.demoted,
            outline.titles.len()
        );
        outline
    }

    /// Top-level headings in reading order.
    pub fn titles(&self) -> &[TitleRef<'a>] {
        &self.titles
    }

    /// Number of headings moved from level 1 to level 2.
    pub fn demoted_count(&self) -> usize {
        self.demoted
    }

    /// The document title: the first top-level heading.
    pub fn title(&self) -> Result<TitleRef<'a>, StructureError> {
        self.titles
            .first()
            .copied()
            .ok_or(StructureError::NoTopLevelHeading)
    }

    /// Start of the bibliography region: the last top-level heading.
    pub fn tail_start(&self) -> Option<usize> {
        self.titles.last().map(|t| t.index)
    }
}

/// Whether heading text starts with a dotted subsection number such as "2.1".
pub fn is_numbered_subsection(text: &str) -> bool {
    SUBSECTION_NUMBER.is_match(text)
}

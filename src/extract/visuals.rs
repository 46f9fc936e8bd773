//! Figure grouping and table collection.
//!
//! The two scans are independent: image blocks only ever become figures and
//! table blocks only ever become tables.

use super::report::ExtractionWarning;
use crate::error::{Error, Result};
use crate::model::{BlockKind, ContentBlock, Figure, Table};
use std::path::Path;

/// Group image blocks into figures.
///
/// An image with a caption is a figure on its own. An uncaptioned image
/// starts a multi-panel figure that absorbs the following image blocks up to
/// and including the first captioned one, whose caption the figure takes. A
/// non-image block closes the group without a caption. Scanning resumes right
/// after the last absorbed block.
pub fn collect_figures(blocks: &[ContentBlock]) -> Vec<Figure> {
    let mut figures = Vec::new();
    let mut idx = 0;

    while idx < blocks.len() {
        let block = &blocks[idx];
        idx += 1;

        let BlockKind::Image { path, caption } = &block.kind else {
            continue;
        };

        let mut figure = Figure::new(
            figures.len() as u32 + 1,
            path.clone().unwrap_or_default(),
            block.page_index,
        );

        if caption.is_empty() {
            while let Some(BlockKind::Image { path, caption }) = blocks.get(idx).map(|b| &b.kind) {
                figure.image_paths.push(path.clone().unwrap_or_default());
                idx += 1;
                if !caption.is_empty() {
                    figure.caption = Some(caption.clone());
                    break;
                }
            }
        } else {
            figure.caption = Some(caption.clone());
        }

        figures.push(figure);
    }

    log::debug!("Collected {} figures", figures.len());
    figures
}

/// Tables collected from a block stream.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableCollection {
    /// Tables with resolved image paths, numbered densely
    pub tables: Vec<Table>,

    /// One warning per skipped table block
    pub skipped: Vec<ExtractionWarning>,
}

/// Collect every table block, resolving image paths against `output_dir`.
///
/// A table whose image path cannot be resolved is skipped.
pub fn collect_tables(blocks: &[ContentBlock], output_dir: &Path) -> TableCollection {
    let mut collection = TableCollection::default();

    for (idx, block) in blocks.iter().enumerate() {
        let BlockKind::Table {
            body,
            caption,
            footnote,
            image_path,
        } = &block.kind
        else {
            continue;
        };

        let resolved = match resolve_image_path(output_dir, image_path.as_deref()) {
            Ok(path) => path,
            Err(e) => {
                log::warn!("Skipping table at block {}: {}", idx, e);
                collection
                    .skipped
                    .push(ExtractionWarning::UnresolvedTablePath {
                        block_index: idx,
                        reason: e.to_string(),
                    });
                continue;
            }
        };

        let mut table = Table::new(
            collection.tables.len() as u32 + 1,
            resolved,
            block.page_index,
        );
        table.caption = caption.iter().chain(footnote).cloned().collect();
        table.table_body = body.clone();
        collection.tables.push(table);
    }

    log::debug!(
        "Collected {} tables, skipped {}",
        collection.tables.len(),
        collection.skipped.len()
    );
    collection
}

/// Join a block's relative image path onto the output directory.
pub fn resolve_image_path(output_dir: &Path, raw: Option<&str>) -> Result<String> {
    let raw = raw.map(str::trim).unwrap_or("");
    if raw.is_empty() {
        return Err(Error::PathResolution {
            path: String::new(),
            reason: "block has no image path".to_string(),
        });
    }

    let joined = output_dir.join(raw);
    joined
        .to_str()
        .map(str::to_string)
        .ok_or_else(|| Error::PathResolution {
            path: raw.to_string(),
            reason: "joined path is not valid UTF-8".to_string(),
        })
}

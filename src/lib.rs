//! # unarticle
//!
//! Structured metadata extraction for scientific articles.
//!
//! This library takes the block stream produced by a PDF layout parser
//! (headings, paragraphs, lists, equations, images, tables) and recovers the
//! article structure: title, language, keywords, abstract, sections,
//! references, figures and tables. The result serializes to JSON.
//!
//! ## Quick Start
//!
//! ```no_run
//! use unarticle::{extract_file, render};
//!
//! fn main() -> unarticle::Result<()> {
//!     // Extract from a content list
//!     let extraction = extract_file("paper_content_list.json")?;
//!
//!     // Serialize the article
//!     let json = render::to_json(&extraction.article, render::JsonFormat::Pretty)?;
//!     println!("{}", json);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Heading repair**: Numbered subsections mis-tagged as chapters are demoted
//! - **Bilingual vocabulary**: English and Russian abstract and keyword labels
//! - **Language detection**: Statistical detection on the title
//! - **Figure grouping**: Multi-panel figures merged under one caption
//! - **Recoverable warnings**: Missing fields are reported, not fatal
//! - **Parallel processing**: Uses Rayon for batches of documents

pub mod detect;
pub mod error;
pub mod extract;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use detect::{detect_format_from_bytes, detect_format_from_path, InputFormat};
pub use error::{Error, Result, StructureError};
pub use extract::{
    ErrorMode, ExtractOptions, Extraction, ExtractionReport, ExtractionStats, ExtractionWarning,
    Extractor, OutputNaming,
};
pub use model::{
    Article, BlockKind, ContentBlock, Figure, ListKind, Reference, Section, SectionType, Table,
};
pub use render::JsonFormat;

use rayon::prelude::*;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Suffix the upstream parser appends to content list file names.
const CONTENT_LIST_SUFFIX: &str = "_content_list";

/// Parse a block stream from bytes.
///
/// Accepts a JSON array of blocks or JSON Lines. A UTF-8 byte order mark is
/// ignored.
///
/// # Example
///
/// ```
/// use unarticle::parse_blocks_bytes;
///
/// let blocks = parse_blocks_bytes(br#"[{"type": "text", "text": "Hi", "page_idx": 0}]"#).unwrap();
/// assert_eq!(blocks.len(), 1);
/// ```
pub fn parse_blocks_bytes(data: &[u8]) -> Result<Vec<ContentBlock>> {
    let data = detect::strip_bom(data);
    match detect_format_from_bytes(data)? {
        InputFormat::ContentList => Ok(serde_json::from_slice(data)?),
        InputFormat::JsonLines => serde_json::Deserializer::from_slice(data)
            .into_iter::<ContentBlock>()
            .map(|block| block.map_err(Error::from))
            .collect(),
    }
}

/// Parse a block stream from a string.
pub fn parse_blocks_str(data: &str) -> Result<Vec<ContentBlock>> {
    parse_blocks_bytes(data.as_bytes())
}

/// Parse a block stream from a reader.
///
/// # Example
///
/// ```no_run
/// use unarticle::parse_blocks_reader;
/// use std::fs::File;
///
/// let file = File::open("paper_content_list.json").unwrap();
/// let blocks = parse_blocks_reader(file).unwrap();
/// ```
pub fn parse_blocks_reader<R: Read>(mut reader: R) -> Result<Vec<ContentBlock>> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    parse_blocks_bytes(&data)
}

/// Parse a block stream from a file.
pub fn parse_blocks_file<P: AsRef<Path>>(path: P) -> Result<Vec<ContentBlock>> {
    let path = path.as_ref();
    let data = std::fs::read(path)?;
    log::debug!("Loaded {} ({} bytes)", path.display(), data.len());
    parse_blocks_bytes(&data)
}

/// Extract an article from an in-memory block stream.
///
/// # Example
///
/// ```
/// use unarticle::{extract_blocks, ContentBlock};
///
/// let blocks = vec![
///     ContentBlock::heading("My Paper", 1, 0),
///     ContentBlock::heading("Introduction", 1, 0),
///     ContentBlock::paragraph("Intro text.", 0),
/// ];
/// let extraction = extract_blocks(&blocks).unwrap();
/// assert_eq!(extraction.article.title, "My Paper");
/// ```
pub fn extract_blocks(blocks: &[ContentBlock]) -> Result<Extraction> {
    Extractor::default().extract(blocks)
}

/// Extract an article from a block stream with custom options.
pub fn extract_blocks_with_options(
    blocks: &[ContentBlock],
    options: ExtractOptions,
) -> Result<Extraction> {
    Extractor::new(options).extract(blocks)
}

/// Extract an article from a JSON string.
pub fn extract_str(json: &str) -> Result<Extraction> {
    extract_str_with_options(json, ExtractOptions::default())
}

/// Extract an article from a JSON string with custom options.
pub fn extract_str_with_options(json: &str, options: ExtractOptions) -> Result<Extraction> {
    let blocks = parse_blocks_str(json)?;
    Extractor::new(options).extract(&blocks)
}

/// Extract an article from a content list file.
///
/// Table image paths are resolved against the file's directory.
///
/// # Example
///
/// ```no_run
/// use unarticle::extract_file;
///
/// let extraction = extract_file("paper_content_list.json").unwrap();
/// println!("Sections: {}", extraction.article.sections.len());
/// ```
pub fn extract_file<P: AsRef<Path>>(path: P) -> Result<Extraction> {
    extract_file_with_options(path, ExtractOptions::default())
}

/// Extract an article from a content list file with custom options.
///
/// # Example
///
/// ```no_run
/// use unarticle::{extract_file_with_options, ExtractOptions};
///
/// let options = ExtractOptions::new()
///     .lenient()
///     .with_section_classification(true);
/// let extraction = extract_file_with_options("paper_content_list.json", options).unwrap();
/// ```
pub fn extract_file_with_options<P: AsRef<Path>>(
    path: P,
    options: ExtractOptions,
) -> Result<Extraction> {
    let path = path.as_ref();
    let options = options_for_path(path, options);
    let blocks = parse_blocks_file(path)?;
    Extractor::new(options).extract(&blocks)
}

/// Derive the artifact base name from an input path.
///
/// The file stem is used, minus the `_content_list` suffix the upstream
/// parser appends.
///
/// # Example
///
/// ```
/// use unarticle::document_name_from_path;
///
/// assert_eq!(document_name_from_path("out/paper_content_list.json"), "paper");
/// assert_eq!(document_name_from_path("notes.jsonl"), "notes");
/// ```
pub fn document_name_from_path<P: AsRef<Path>>(path: P) -> String {
    let stem = path
        .as_ref()
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    let name = stem.strip_suffix(CONTENT_LIST_SUFFIX).unwrap_or(stem);

    if name.is_empty() {
        extract::DEFAULT_FILE_NAME.to_string()
    } else {
        name.to_string()
    }
}

/// Fill in the output directory and file name from the input path when the
/// options leave them unset.
fn options_for_path(path: &Path, mut options: ExtractOptions) -> ExtractOptions {
    if options.output_dir.as_os_str().is_empty() {
        if let Some(parent) = path.parent() {
            options.output_dir = parent.to_path_buf();
        }
    }
    if options.file_name.is_none() {
        options.file_name = Some(document_name_from_path(path));
    }
    options
}

/// Write an article to `options.output_path()`, creating the output
/// directory if needed.
pub fn write_article(article: &Article, options: &ExtractOptions) -> Result<PathBuf> {
    if !options.output_dir.as_os_str().is_empty() {
        std::fs::create_dir_all(&options.output_dir)?;
    }
    let path = options.output_path();
    render::write_json(article, &path, JsonFormat::Pretty)?;
    Ok(path)
}

/// Outcome of one document in a batch.
#[derive(Debug)]
pub struct BatchOutcome {
    /// Input file
    pub input: PathBuf,

    /// Extraction and the written artifact path, or the failure
    pub result: Result<(Extraction, PathBuf)>,
}

impl BatchOutcome {
    /// Whether the document was extracted and written.
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Extract and write several documents.
///
/// Each document gets its own extractor and an artifact named after its
/// input file. Documents run on the rayon pool unless `options.parallel` is
/// off. A failing document does not affect the others; outcomes keep the
/// input order.
///
/// # Example
///
/// ```no_run
/// use unarticle::{extract_batch, ExtractOptions};
///
/// let outcomes = extract_batch(&["a_content_list.json", "b_content_list.json"], &ExtractOptions::new());
/// for outcome in outcomes {
///     if let Err(e) = outcome.result {
///         eprintln!("{}: {}", outcome.input.display(), e);
///     }
/// }
/// ```
pub fn extract_batch<P>(paths: &[P], options: &ExtractOptions) -> Vec<BatchOutcome>
where
    P: AsRef<Path> + Sync,
{
    let run = |path: &P| {
        let input = path.as_ref().to_path_buf();
        let mut job_options = options.clone();
        job_options.file_name = None;
        let job_options = options_for_path(&input, job_options);
        let result = extract_and_write(&input, job_options);
        BatchOutcome { input, result }
    };

    if options.parallel {
        paths.par_iter().map(run).collect()
    } else {
        paths.iter().map(run).collect()
    }
}

fn extract_and_write(path: &Path, options: ExtractOptions) -> Result<(Extraction, PathBuf)> {
    let blocks = parse_blocks_file(path)?;
    let extraction = Extractor::new(options.clone()).extract(&blocks)?;
    let written = write_article(&extraction.article, &options)?;
    Ok((extraction, written))
}

/// Builder for extracting and writing articles.
///
/// # Example
///
/// ```no_run
/// use unarticle::Unarticle;
///
/// let path = Unarticle::new()
///     .lenient()
///     .classify_sections()
///     .with_output_dir("./out")
///     .extract_file("paper_content_list.json")?
///     .write()?;
/// # Ok::<(), unarticle::Error>(())
/// ```
pub struct Unarticle {
    options: ExtractOptions,
}

impl Unarticle {
    /// Create a new Unarticle builder.
    pub fn new() -> Self {
        Self {
            options: ExtractOptions::default(),
        }
    }

    /// Accept documents with a single top-level heading.
    pub fn lenient(mut self) -> Self {
        self.options = self.options.lenient();
        self
    }

    /// Set the output directory.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.options = self.options.with_output_dir(dir);
        self
    }

    /// Set the artifact base name.
    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.options = self.options.with_file_name(name);
        self
    }

    /// Write `<name>.json` instead of `extract_<name>.json`.
    pub fn plain_name(mut self) -> Self {
        self.options = self.options.with_naming(OutputNaming::Plain);
        self
    }

    /// Tag sections by heading wording.
    pub fn classify_sections(mut self) -> Self {
        self.options = self.options.with_section_classification(true);
        self
    }

    /// NFC-normalize emitted strings.
    pub fn normalize(mut self) -> Self {
        self.options = self.options.with_unicode_normalization(true);
        self
    }

    /// Set the minimum language detection confidence.
    pub fn with_min_language_confidence(mut self, confidence: f64) -> Self {
        self.options = self.options.with_min_language_confidence(confidence);
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.options = self.options.sequential();
        self
    }

    /// Extract from a content list file.
    pub fn extract_file<P: AsRef<Path>>(self, path: P) -> Result<UnarticleResult> {
        let path = path.as_ref();
        let options = options_for_path(path, self.options);
        let blocks = parse_blocks_file(path)?;
        let extraction = Extractor::new(options.clone()).extract(&blocks)?;
        Ok(UnarticleResult {
            extraction,
            options,
        })
    }

    /// Extract from an in-memory block stream.
    pub fn extract_blocks(self, blocks: &[ContentBlock]) -> Result<UnarticleResult> {
        let extraction = Extractor::new(self.options.clone()).extract(blocks)?;
        Ok(UnarticleResult {
            extraction,
            options: self.options,
        })
    }

    /// Extract from a JSON string.
    pub fn extract_str(self, json: &str) -> Result<UnarticleResult> {
        let blocks = parse_blocks_str(json)?;
        self.extract_blocks(&blocks)
    }

    /// Extract and write several documents.
    pub fn extract_batch<P>(self, paths: &[P]) -> Vec<BatchOutcome>
    where
        P: AsRef<Path> + Sync,
    {
        extract_batch(paths, &self.options)
    }
}

impl Default for Unarticle {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of extracting one article.
pub struct UnarticleResult {
    /// The extraction
    pub extraction: Extraction,
    /// Options the extraction ran with
    options: ExtractOptions,
}

impl UnarticleResult {
    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.extraction.article, format)
    }

    /// Write the pretty JSON artifact and return its path.
    pub fn write(&self) -> Result<PathBuf> {
        write_article(&self.extraction.article, &self.options)
    }

    /// Path [`write`](Self::write) targets.
    pub fn output_path(&self) -> PathBuf {
        self.options.output_path()
    }

    /// Human-readable summary.
    pub fn summary(&self) -> String {
        render::to_summary(&self.extraction)
    }

    /// Get the article.
    pub fn article(&self) -> &Article {
        &self.extraction.article
    }

    /// Get the extraction report.
    pub fn report(&self) -> &ExtractionReport {
        &self.extraction.report
    }
}

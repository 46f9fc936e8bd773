//! Input format detection for block streams.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Serialization of a block stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// A single JSON array of block objects
    ContentList,
    /// One JSON block object per line
    JsonLines,
}

impl std::fmt::Display for InputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputFormat::ContentList => f.write_str("JSON content list"),
            InputFormat::JsonLines => f.write_str("JSON Lines"),
        }
    }
}

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";
const SNIFF_LEN: usize = 512;

/// Detect the input format from a file path.
///
/// # Example
/// ```no_run
/// use unarticle::detect::detect_format_from_path;
///
/// let format = detect_format_from_path("paper_content_list.json").unwrap();
/// println!("{}", format);
/// ```
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<InputFormat> {
    let file = File::open(path)?;
    let mut head = Vec::with_capacity(SNIFF_LEN);
    BufReader::new(file)
        .take(SNIFF_LEN as u64)
        .read_to_end(&mut head)?;
    detect_format_from_bytes(&head)
}

/// Detect the input format from the leading bytes of the data.
///
/// Leading whitespace and a UTF-8 byte order mark are skipped.
pub fn detect_format_from_bytes(data: &[u8]) -> Result<InputFormat> {
    let data = data.strip_prefix(UTF8_BOM).unwrap_or(data);
    match data.iter().find(|b| !b.is_ascii_whitespace()) {
        Some(b'[') => Ok(InputFormat::ContentList),
        Some(b'{') => Ok(InputFormat::JsonLines),
        _ => Err(Error::UnknownFormat),
    }
}

/// Strip a UTF-8 byte order mark, if any.
pub(crate) fn strip_bom(data: &[u8]) -> &[u8] {
    data.strip_prefix(UTF8_BOM).unwrap_or(data)
}

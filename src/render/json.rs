//! JSON rendering for extracted articles.

use crate::error::{Error, Result};
use crate::model::Article;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with four-space indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

const INDENT: &[u8] = b"    ";

/// Convert an article to JSON. Non-ASCII text is written as-is.
pub fn to_json(article: &Article, format: JsonFormat) -> Result<String> {
    let mut buf = Vec::new();
    write_to(&mut buf, article, format)?;
    String::from_utf8(buf).map_err(|e| Error::Render(format!("JSON is not UTF-8: {}", e)))
}

/// Serialize an article into any writer.
pub fn write_to<W: Write>(writer: W, article: &Article, format: JsonFormat) -> Result<()> {
    let result = match format {
        JsonFormat::Pretty => {
            let mut ser = Serializer::with_formatter(writer, PrettyFormatter::with_indent(INDENT));
            article.serialize(&mut ser)
        }
        JsonFormat::Compact => serde_json::to_writer(writer, article),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

/// Write an article to a file, creating or truncating it.
pub fn write_json(article: &Article, path: &Path, format: JsonFormat) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_to(&mut writer, article, format)?;
    writer.flush()?;
    log::debug!("Wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Reference;

    fn article() -> Article {
        let mut article = Article::new("Анализ структуры");
        article.language = "ru".to_string();
        article.references.push(Reference::new(1, "Иванов И. 2020."));
        article
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&article(), JsonFormat::Pretty).unwrap();
        assert!(json.contains("\n    \"title\": \"Анализ структуры\""));
        assert!(json.contains("\"abstract\": null"));
        assert!(!json.contains("\\u"));
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&article(), JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));
        assert!(json.contains("\"language\":\"ru\""));
    }

    #[test]
    fn test_json_parses_back() {
        let json = to_json(&article(), JsonFormat::Pretty).unwrap();
        let back: Article = serde_json::from_str(&json).unwrap();
        assert_eq!(back, article());
    }
}

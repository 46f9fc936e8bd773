//! Title language detection.

use crate::error::{Error, Result};

/// Infer the ISO-639 language code of a short text.
///
/// Common languages get their two-letter ISO-639-1 code, others the
/// three-letter ISO-639-3 code. Fails with [`Error::LanguageDetection`] when
/// the text carries no letters, no language scores, the detector flags its
/// best guess as unreliable, or the confidence is below `min_confidence`.
pub fn detect_language(text: &str, min_confidence: f64) -> Result<String> {
    if !text.chars().any(char::is_alphabetic) {
        return Err(Error::LanguageDetection("text has no letters".to_string()));
    }

    let info = whatlang::detect(text)
        .ok_or_else(|| Error::LanguageDetection("no language scored".to_string()))?;

    if !info.is_reliable() {
        return Err(Error::LanguageDetection(format!(
            "unreliable guess {} (confidence {:.2})",
            info.lang().code(),
            info.confidence()
        )));
    }

    if info.confidence() < min_confidence {
        return Err(Error::LanguageDetection(format!(
            "confidence {:.2} below {:.2}",
            info.confidence(),
            min_confidence
        )));
    }

    Ok(iso_639_1(info.lang().code()).to_string())
}

fn iso_639_1(code: &str) -> &str {
    match code {
        "eng" => "en",
        "rus" => "ru",
        "ukr" => "uk",
        "bel" => "be",
        "bul" => "bg",
        "deu" => "de",
        "fra" => "fr",
        "spa" => "es",
        "por" => "pt",
        "ita" => "it",
        "nld" => "nl",
        "pol" => "pl",
        "ces" => "cs",
        "tur" => "tr",
        "ara" => "ar",
        "cmn" => "zh",
        "jpn" => "ja",
        "kor" => "ko",
        other => other,
    }
}

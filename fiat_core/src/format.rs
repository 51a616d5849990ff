//! Bilingual text rendering.
//!
//! Combined modes pair Latin and English line-by-line; the pair separator
//! is reserved for this purpose and never appears in authored text.

use crate::types::{BilingualText, LanguageMode};
use crate::{Error, Result};

/// Token placed between the paired lines of a combined rendering
pub const PAIR_SEPARATOR: &str = "|||";

/// Resolve a bilingual text into a single renderable string
///
/// Single-language modes return that side unchanged. Combined modes pair
/// lines 1:1 by index, primary language first on each line. Unequal line
/// counts are a content-authoring defect and yield an error rather than a
/// truncated or padded rendering.
pub fn formatted(text: &BilingualText, mode: LanguageMode) -> Result<String> {
    match mode {
        LanguageMode::Latin => Ok(text.latin.clone()),
        LanguageMode::English => Ok(text.english.clone()),
        LanguageMode::LatinEnglish | LanguageMode::EnglishLatin => {
            let latin: Vec<&str> = text.latin.lines().collect();
            let english: Vec<&str> = text.english.lines().collect();

            if latin.len() != english.len() {
                return Err(Error::LineMismatch {
                    latin: latin.len(),
                    english: english.len(),
                });
            }

            let lines: Vec<String> = latin
                .iter()
                .zip(english.iter())
                .map(|(la, en)| match mode {
                    LanguageMode::EnglishLatin => format!("{} {} {}", en, PAIR_SEPARATOR, la),
                    _ => format!("{} {} {}", la, PAIR_SEPARATOR, en),
                })
                .collect();

            Ok(lines.join("\n"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_line_text() -> BilingualText {
        BilingualText::new("Ave, maris stella,\nDei Mater alma,", "Hail, star of the sea,\nloving Mother of God,")
    }

    #[test]
    fn test_latin_only_unchanged() {
        let text = two_line_text();
        let out = formatted(&text, LanguageMode::Latin).unwrap();
        assert_eq!(out, text.latin);
    }

    #[test]
    fn test_english_only_unchanged() {
        let text = two_line_text();
        let out = formatted(&text, LanguageMode::English).unwrap();
        assert_eq!(out, text.english);
    }

    #[test]
    fn test_combined_pairs_lines() {
        // Two lines per side pair into two output lines
        let text = two_line_text();
        let out = formatted(&text, LanguageMode::LatinEnglish).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Ave, maris stella, ||| Hail, star of the sea,");
        assert_eq!(lines[1], "Dei Mater alma, ||| loving Mother of God,");
    }

    #[test]
    fn test_combined_english_primary() {
        let text = two_line_text();
        let out = formatted(&text, LanguageMode::EnglishLatin).unwrap();
        assert!(out.starts_with("Hail, star of the sea, ||| Ave, maris stella,"));
    }

    #[test]
    fn test_mismatched_line_counts_error() {
        // 2 vs 3 lines: an error, never partial output
        let text = BilingualText::new("a\nb", "x\ny\nz");
        let err = formatted(&text, LanguageMode::LatinEnglish).unwrap_err();
        assert!(matches!(
            err,
            Error::LineMismatch {
                latin: 2,
                english: 3
            }
        ));
    }

    #[test]
    fn test_single_language_tolerates_mismatch() {
        // The defect only matters when pairing is requested
        let text = BilingualText::new("a\nb", "x\ny\nz");
        assert!(formatted(&text, LanguageMode::Latin).is_ok());
        assert!(formatted(&text, LanguageMode::English).is_ok());
    }

    #[test]
    fn test_single_line_combined() {
        let text = BilingualText::new("Amen.", "Amen.");
        let out = formatted(&text, LanguageMode::LatinEnglish).unwrap();
        assert_eq!(out, "Amen. ||| Amen.");
    }
}

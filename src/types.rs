//! Core data types shared across the matching pipeline.
//!
//! Everything here is transient: [`SearchHit`] and [`ConfidentMatch`] live
//! for a single call, and [`VerseReference`] is the only value that crosses
//! the component boundary.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::chapters::CHAPTER_COUNT;

/// A single verse identified by chapter and verse number.
///
/// Canonically serialized as `"chapter:verse"`, the identifier format used
/// by the search service. Parsing enforces chapter ∈ 1..=114 and verse ≥ 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VerseKey {
    pub chapter: u16,
    pub verse: u16,
}

impl VerseKey {
    /// Parses a `"chapter:verse"` identifier.
    ///
    /// Returns `None` for anything malformed or out of range; callers drop
    /// such entries rather than failing, since the raw keys come from an
    /// external service.
    pub fn parse(raw: &str) -> Option<Self> {
        let (chapter, verse) = raw.trim().split_once(':')?;
        let chapter: u16 = chapter.parse().ok()?;
        let verse: u16 = verse.parse().ok()?;
        if chapter == 0 || chapter > CHAPTER_COUNT || verse == 0 {
            return None;
        }
        Some(Self { chapter, verse })
    }
}

impl fmt::Display for VerseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.chapter, self.verse)
    }
}

/// Token class reported by the search service for each verse word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharType {
    /// An actual word of the verse text.
    Word,
    /// Pause marks, verse-end glyphs, and any tag added by the service
    /// later; these never count toward scoring.
    #[serde(other)]
    Other,
}

/// One token of a verse as returned by the search service.
#[derive(Debug, Clone, Deserialize)]
pub struct Word {
    pub char_type: CharType,
    /// Set when the search engine judged this token as matching the query;
    /// absent or null otherwise.
    #[serde(default)]
    pub highlighted: Option<bool>,
}

impl Word {
    pub fn is_word(&self) -> bool {
        self.char_type == CharType::Word
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlighted.unwrap_or(false)
    }
}

/// One candidate result from the search gateway, in relevance order.
///
/// The verse key is kept as the raw service string; it is only parsed at
/// aggregation time so that malformed entries can be dropped individually.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchHit {
    pub verse_key: String,
    /// Full verse text; carried for logging, not used by scoring.
    #[serde(default)]
    pub text: String,
    pub words: Vec<Word>,
}

/// A search hit that cleared the per-hit confidence floor, reduced to what
/// the range aggregator needs.
#[derive(Debug, Clone)]
pub struct ConfidentMatch {
    pub verse_key: String,
    pub confidence: f64,
}

/// The citation handed back to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerseReference {
    /// Human-readable citation, e.g. `"Al-Kahf 18:10-11"`.
    pub reference: String,
    /// `"chapter:verse"` for a single verse, `"chapter:start-end"` for a
    /// contiguous range.
    pub verse_key: String,
    /// Highest per-hit confidence observed during the call, in [0, 1].
    pub confidence: f64,
    /// Consecutive highlight run length recorded alongside that confidence.
    pub longest_consecutive_run: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_keys() {
        assert_eq!(
            VerseKey::parse("2:255"),
            Some(VerseKey {
                chapter: 2,
                verse: 255
            })
        );
        assert_eq!(
            VerseKey::parse(" 114:6 "),
            Some(VerseKey {
                chapter: 114,
                verse: 6
            })
        );
    }

    #[test]
    fn rejects_out_of_range_keys() {
        assert_eq!(VerseKey::parse("0:1"), None);
        assert_eq!(VerseKey::parse("115:1"), None);
        assert_eq!(VerseKey::parse("1:0"), None);
    }

    #[test]
    fn rejects_malformed_keys() {
        assert_eq!(VerseKey::parse(""), None);
        assert_eq!(VerseKey::parse("junk"), None);
        assert_eq!(VerseKey::parse("2-255"), None);
        assert_eq!(VerseKey::parse("2:255:1"), None);
        assert_eq!(VerseKey::parse("2:"), None);
    }

    #[test]
    fn display_round_trips() {
        let key = VerseKey::parse("18:10").unwrap();
        assert_eq!(key.to_string(), "18:10");
    }

    #[test]
    fn unknown_char_type_degrades_to_other() {
        let word: Word =
            serde_json::from_str(r#"{"char_type":"pause","highlighted":true}"#).unwrap();
        assert_eq!(word.char_type, CharType::Other);
        assert!(!word.is_word());
    }

    #[test]
    fn missing_highlight_flag_reads_as_not_highlighted() {
        let word: Word = serde_json::from_str(r#"{"char_type":"word"}"#).unwrap();
        assert!(word.is_word());
        assert!(!word.is_highlighted());
    }
}

//! Orchestration: gate the input, query the gateway, score every hit,
//! aggregate, and format the final citation.

use tracing::{debug, warn};

use crate::analyze::analyze_match;
use crate::chapters::chapter_name;
use crate::gateway::VerseSearch;
use crate::range::find_verse_range;
use crate::tokenize::count_arabic_words;
use crate::types::{ConfidentMatch, VerseReference};

/// Per-hit confidence floor for inclusion in range aggregation.
pub const MIN_HIT_CONFIDENCE: f64 = 0.35;
/// Best-hit confidence required before any citation is surfaced. A false
/// citation in religious content is worse than a missed one, so this bar
/// sits well above the per-hit floor.
pub const MIN_BEST_CONFIDENCE: f64 = 0.45;
/// Minimum Arabic tokens before the search service is queried.
pub const MIN_INPUT_WORDS: usize = 2;
/// Minimum trimmed input length, in characters.
pub const MIN_INPUT_CHARS: usize = 8;

/// Detects Quranic citations in live transcript fragments.
///
/// Generic over the search seam so callers can wire the production
/// [`QuranSearchClient`](crate::QuranSearchClient) or a synthetic gateway.
/// Each call is stateless and independent; the matcher never retries and
/// never surfaces gateway trouble to the caller.
pub struct VerseMatcher<S> {
    search: S,
}

impl<S: VerseSearch> VerseMatcher<S> {
    pub fn new(search: S) -> Self {
        Self { search }
    }

    /// Decides whether `text` recites one or more verses.
    ///
    /// Returns the citation when the scoring clears both confidence floors,
    /// otherwise `None`. Every failure mode (too little input, gateway
    /// failure, no confident hit, a degenerate 1:1 range) is the same
    /// `None`; callers must not distinguish "service unavailable" from
    /// "no verse detected".
    pub async fn find_verse_reference(&self, text: &str) -> Option<VerseReference> {
        let trimmed = text.trim();
        let input_word_count = count_arabic_words(trimmed);
        if input_word_count < MIN_INPUT_WORDS || trimmed.chars().count() < MIN_INPUT_CHARS {
            return None;
        }

        let hits = match self.search.search(trimmed).await {
            Ok(hits) => hits,
            Err(error) => {
                // A missing citation is a fully valid outcome; absorb the
                // failure here rather than making the caller handle it.
                warn!(error = %error, "verse_search_failed");
                return None;
            }
        };
        if hits.is_empty() {
            return None;
        }

        let mut best_confidence = 0.0_f64;
        let mut best_run = 0_usize;
        let mut confident = Vec::new();

        for (index, hit) in hits.iter().enumerate() {
            // The Fatihah's opening doubles as an everyday invocation and
            // is never a citation on its own.
            if hit.verse_key.trim() == "1:1" {
                continue;
            }
            let analysis = analyze_match(hit, input_word_count, index == 0);
            if analysis.confidence > best_confidence {
                best_confidence = analysis.confidence;
                best_run = analysis.longest_consecutive_run;
            }
            if analysis.confidence >= MIN_HIT_CONFIDENCE {
                confident.push(ConfidentMatch {
                    verse_key: hit.verse_key.clone(),
                    confidence: analysis.confidence,
                });
            }
        }

        if best_confidence < MIN_BEST_CONFIDENCE {
            debug!(best_confidence, "verse_match_below_floor");
            return None;
        }

        let range = find_verse_range(&confident)?;
        // Re-check the 1:1 exclusion after aggregation; key variants like
        // "01:001" parse to chapter 1 verse 1 without matching the raw skip.
        if range.chapter == 1 && range.start_verse == 1 && range.end_verse == 1 {
            return None;
        }

        let verse_key = if range.start_verse == range.end_verse {
            format!("{}:{}", range.chapter, range.start_verse)
        } else {
            format!("{}:{}-{}", range.chapter, range.start_verse, range.end_verse)
        };
        let reference = format!("{} {}", chapter_name(range.chapter), verse_key);
        debug!(%reference, best_confidence, best_run, "verse_match_found");

        Some(VerseReference {
            reference,
            verse_key,
            confidence: best_confidence,
            longest_consecutive_run: best_run,
        })
    }
}

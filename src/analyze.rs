//! Per-hit scoring: how strongly does one search hit look like an actual
//! recitation of that verse?
//!
//! The score is a sequence of explicit branches with fixed thresholds and
//! multiplicative boosts, tuned against live khutbah transcripts. The exact
//! constants are the behavior; they are deliberately not expressed as a
//! smooth formula so the documented cases stay bit-for-bit reproducible.

use crate::types::SearchHit;

/// Outcome of scoring one search hit against the transcript fragment.
///
/// Derived, never stored: computed once per hit and consumed immediately by
/// the orchestrator and range aggregator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchAnalysis {
    /// Confidence in [0, 1] that the fragment recites this verse.
    pub confidence: f64,
    /// Word tokens in the verse after dropping punctuation markers.
    pub verse_word_count: usize,
    /// Word tokens the search engine marked as matching the query.
    pub highlighted_count: usize,
    /// Longest unbroken run of highlighted words in reading order.
    pub longest_consecutive_run: usize,
}

/// Scores a single search hit.
///
/// `input_word_count` is the Arabic token count of the spoken fragment and
/// `is_top_result` marks the search service's first-ranked hit, whose own
/// relevance ranking is a weak independent signal worth reinforcing.
///
/// Short connective phrases shared with everyday religious speech produce
/// scattered single-word highlights; the gate and the verse-length tiers
/// exist to keep those at confidence zero while genuine recitation, which
/// shows long dense consecutive runs, scores high.
pub fn analyze_match(hit: &SearchHit, input_word_count: usize, is_top_result: bool) -> MatchAnalysis {
    let words: Vec<_> = hit.words.iter().filter(|w| w.is_word()).collect();
    let verse_word_count = words.len();
    let highlighted_count = words.iter().filter(|w| w.is_highlighted()).count();

    let mut analysis = MatchAnalysis {
        confidence: 0.0,
        verse_word_count,
        highlighted_count,
        longest_consecutive_run: 0,
    };

    if highlighted_count == 0 {
        return analysis;
    }

    let mut longest = 0usize;
    let mut current = 0usize;
    for word in &words {
        if word.is_highlighted() {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    analysis.longest_consecutive_run = longest;

    let verse_match_ratio = highlighted_count as f64 / verse_word_count as f64;
    let input_match_ratio = if input_word_count > 0 {
        highlighted_count as f64 / input_word_count as f64
    } else {
        0.0
    };

    // Isolated scattered overlaps must not trigger a citation: require a
    // consecutive pair, or a dense multi-word overlap of the input.
    let dense_overlap = highlighted_count >= 3 && input_match_ratio >= 0.5;
    if longest < 2 && !dense_overlap {
        return analysis;
    }

    // Tiered base confidence by verse length. Short verses are noisier
    // because a few shared words dominate the ratio.
    let mut confidence = if verse_word_count <= 5 {
        if verse_match_ratio < 0.5 || highlighted_count < 2 {
            return analysis;
        }
        verse_match_ratio * 0.9
    } else if verse_word_count <= 15 {
        if verse_match_ratio < 0.35 || highlighted_count < 3 {
            return analysis;
        }
        if longest >= 3 {
            verse_match_ratio * 1.15
        } else {
            verse_match_ratio
        }
    } else {
        if highlighted_count < 4 || verse_match_ratio < 0.2 {
            return analysis;
        }
        if longest >= 3 {
            verse_match_ratio * 1.2 * 1.1
        } else {
            verse_match_ratio * 1.2
        }
    };

    if longest >= 4 {
        confidence = (confidence * 1.15).min(1.0);
    }
    if longest >= 5 {
        confidence = (confidence * 1.1).min(1.0);
    }
    if is_top_result && confidence > 0.0 {
        confidence = (confidence * 1.2).min(1.0);
    }

    analysis.confidence = confidence.clamp(0.0, 1.0);
    analysis
}

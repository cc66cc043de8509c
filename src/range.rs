//! Aggregation of confident per-verse matches into one contiguous range.

use crate::types::{ConfidentMatch, VerseKey};

/// The best contiguous run of matched verse numbers within one chapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerseRange {
    pub chapter: u16,
    pub start_verse: u16,
    pub end_verse: u16,
}

/// Combines confident matches into a single chapter-and-verse range.
///
/// Groups matches by chapter (keys that fail to parse are malformed
/// service data and are dropped), picks the chapter with
/// the most matched verses (first chapter reaching the maximum wins ties),
/// then finds the longest run of consecutive verse numbers within it. Runs
/// are compared by span; ties keep the first run found.
///
/// Returns `None` when no chapter has a confident match.
pub fn find_verse_range(matches: &[ConfidentMatch]) -> Option<VerseRange> {
    // Encounter order matters for the tie-break, so no map here.
    let mut chapters: Vec<(u16, Vec<u16>)> = Vec::new();
    for m in matches {
        let Some(key) = VerseKey::parse(&m.verse_key) else {
            continue;
        };
        match chapters.iter_mut().find(|(c, _)| *c == key.chapter) {
            Some((_, verses)) => verses.push(key.verse),
            None => chapters.push((key.chapter, vec![key.verse])),
        }
    }

    let mut best: Option<(u16, Vec<u16>)> = None;
    for entry in chapters {
        let replace = match &best {
            Some((_, verses)) => entry.1.len() > verses.len(),
            None => true,
        };
        if replace {
            best = Some(entry);
        }
    }
    let (chapter, mut verses) = best?;

    verses.sort_unstable();
    verses.dedup();

    let mut start = verses[0];
    let mut end = verses[0];
    let mut best_start = start;
    let mut best_end = end;
    for &verse in &verses[1..] {
        if verse == end + 1 {
            end = verse;
        } else {
            start = verse;
            end = verse;
        }
        if end - start > best_end - best_start {
            best_start = start;
            best_end = end;
        }
    }

    Some(VerseRange {
        chapter,
        start_verse: best_start,
        end_verse: best_end,
    })
}

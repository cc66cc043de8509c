//! # verse-match
//!
//! Detects whether a live Arabic transcript fragment is a recitation of one
//! or more Quranic verses, and if so, which chapter and verse range.
//!
//! The input is noisy by nature: it comes from a speech-to-text pipeline
//! running over a live broadcast, and khutbah/lecture speech is full of
//! short Quranic-sounding idioms that are not recitation. The matcher is
//! therefore tuned for precision over recall: a missed citation is a
//! normal outcome, a wrong citation is the failure mode being managed.
//!
//! ## Pipeline
//!
//! 1. Gate the input (at least 2 Arabic tokens and 8 characters).
//! 2. Query the verse-search service ([`VerseSearch`]) for candidate hits.
//! 3. Score each hit ([`analyze_match`]): highlight density, coverage
//!    ratios, and the longest consecutive highlight run, with tiered
//!    thresholds by verse length.
//! 4. Aggregate confident hits into one contiguous verse range within the
//!    best chapter ([`find_verse_range`]).
//! 5. Format the citation with the canonical chapter name
//!    ([`chapter_name`]).
//!
//! Every stage short-circuits to `None`; the caller never sees an error,
//! only a citation or its absence.
//!
//! ## Example
//!
//! ```no_run
//! use verse_match::{QuranSearchClient, SearchConfig, VerseMatcher};
//!
//! # async fn demo() -> Result<(), verse_match::SearchError> {
//! let client = QuranSearchClient::new(SearchConfig::default())?;
//! let matcher = VerseMatcher::new(client);
//!
//! if let Some(citation) = matcher
//!     .find_verse_reference("قل هو الله احد الله الصمد")
//!     .await
//! {
//!     println!("{} (confidence {:.2})", citation.reference, citation.confidence);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Concurrency
//!
//! Each call is a single stateless unit of work: one outbound request, then
//! CPU-bound scoring over the in-memory result set. Calls for independent
//! fragments may run concurrently without coordination; there are no
//! retries, since a transcript fragment is ephemeral and will shortly be
//! superseded by a newer one.

pub mod analyze;
pub mod chapters;
pub mod gateway;
pub mod matcher;
pub mod range;
pub mod tokenize;
pub mod types;

pub use crate::analyze::{analyze_match, MatchAnalysis};
pub use crate::chapters::{chapter_name, CHAPTER_COUNT};
pub use crate::gateway::{QuranSearchClient, SearchConfig, SearchError, VerseSearch};
pub use crate::matcher::{
    VerseMatcher, MIN_BEST_CONFIDENCE, MIN_HIT_CONFIDENCE, MIN_INPUT_CHARS, MIN_INPUT_WORDS,
};
pub use crate::range::{find_verse_range, VerseRange};
pub use crate::tokenize::count_arabic_words;
pub use crate::types::{CharType, ConfidentMatch, SearchHit, VerseKey, VerseReference, Word};

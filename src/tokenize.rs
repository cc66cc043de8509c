//! Arabic token counting for input gating.

/// Counts whitespace-separated tokens containing at least one Arabic-script
/// code point (U+0600..=U+06FF).
///
/// Tokens without any Arabic scalar (latin fillers, digits, stray
/// punctuation from the transcription pipeline) are ignored, not rejected.
/// Pure and infallible.
pub fn count_arabic_words(text: &str) -> usize {
    text.split_whitespace()
        .filter(|token| token.chars().any(is_arabic))
        .count()
}

#[inline]
fn is_arabic(c: char) -> bool {
    ('\u{0600}'..='\u{06FF}').contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_arabic_tokens() {
        assert_eq!(count_arabic_words("بسم الله الرحمن الرحيم"), 4);
    }

    #[test]
    fn ignores_non_arabic_tokens() {
        assert_eq!(count_arabic_words("ok الله then الرحمن 42"), 2);
        assert_eq!(count_arabic_words("hello world"), 0);
    }

    #[test]
    fn mixed_script_token_still_counts() {
        // A single Arabic scalar inside a token is enough.
        assert_eq!(count_arabic_words("abcالد"), 1);
    }

    #[test]
    fn empty_and_whitespace_inputs() {
        assert_eq!(count_arabic_words(""), 0);
        assert_eq!(count_arabic_words("   \t\n  "), 0);
    }
}

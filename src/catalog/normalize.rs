//! Free-text canonicalization for titles, artists and albums.
//!
//! Catalogs disagree on capitalization, punctuation and how they bracket
//! featured artists. Every text value stored in
//! [`SearchParameters`](super::domain::SearchParameters) goes through
//! [`normalize`] so values from both sides become comparable and safe to
//! embed in a quoted query term.

/// Characters deleted outright (not replaced with a space).
const EXCLUDED_CHARS: &[char] = &[
    '&', '"', '#', '%', '\'', '*', '+', ',', '.', ':', ';', '<', '=', '>', '?', '@', '[', '\\',
    ']', '^', '_', '`', '{', '|', '}', '~', '(', ')', '/',
];

/// Words that open a featured-artist qualifier
const FEATURING_WORDS: &[&str] = &["with", "feat", "feat.", "ft", "ft.", "featuring"];

/// Canonicalize a free-text field.
///
/// Deletes symbol characters, collapses the whitespace left behind into single
/// spaces and lower-cases the result. Whitespace-only input yields `""`.
pub fn normalize(text: &str) -> String {
    let stripped: String = text.chars().filter(|c| !EXCLUDED_CHARS.contains(c)).collect();

    stripped
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Cut a title at its first featured-artist qualifier.
///
/// Matches ` (with `, ` [feat `, ` (featuring ` etc. case-sensitively, so
/// "Song (with Someone)" becomes "Song" while "With You" is untouched.
pub fn strip_featuring(title: &str) -> &str {
    let cut = FEATURING_WORDS
        .iter()
        .flat_map(|word| [format!(" ({} ", word), format!(" [{} ", word)])
        .filter_map(|pattern| title.find(&pattern))
        .min();

    match cut {
        Some(index) => &title[..index],
        None => title,
    }
}

/// Strip the qualifier, then normalize.
pub fn normalize_title(title: &str) -> String {
    normalize(strip_featuring(title))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_symbols_and_lowercases() {
        assert_eq!(normalize("Rock & Roll"), "rock roll");
        assert_eq!(normalize("AC/DC"), "acdc");
        assert_eq!(normalize("Don't Stop Me Now"), "dont stop me now");
        assert_eq!(normalize("Hello (Remastered)"), "hello remastered");
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \t "), "");
    }

    #[test]
    fn test_strip_featuring_variants() {
        assert_eq!(strip_featuring("Song (with Someone)"), "Song");
        assert_eq!(strip_featuring("Song (feat. Someone)"), "Song");
        assert_eq!(strip_featuring("Song [ft Someone]"), "Song");
        assert_eq!(strip_featuring("Song (featuring A & B)"), "Song");
        assert_eq!(strip_featuring("Song - Live (with Band) (feat X)"), "Song - Live");
    }

    #[test]
    fn test_strip_featuring_is_case_sensitive() {
        assert_eq!(strip_featuring("Song (With Someone)"), "Song (With Someone)");
        assert_eq!(strip_featuring("With You"), "With You");
    }

    #[test]
    fn test_title_scenario() {
        assert_eq!(normalize_title("Song (with Someone)"), "song");
        assert_eq!(normalize_title("Bad Habits [feat Ed]"), "bad habits");
    }
}

/// Property-based tests using proptest
#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Titles mixing letters, accents, digits, whitespace and excluded symbols
    fn messy_title() -> impl Strategy<Value = String> {
        prop::string::string_regex("[a-zA-Z0-9éÉüÜøß \t&\"#%'*+,.:;<=>?@\\[\\]^_`{|}~()/\\\\-]{0,40}")
            .unwrap()
    }

    proptest! {
        /// Normalizing twice changes nothing
        #[test]
        fn normalize_is_idempotent(input in messy_title()) {
            let once = normalize(&input);
            prop_assert_eq!(normalize(&once), once);
        }

        /// Same input, same output
        #[test]
        fn normalize_is_deterministic(input in messy_title()) {
            prop_assert_eq!(normalize(&input), normalize(&input));
        }

        /// No excluded character or double space survives
        #[test]
        fn normalize_output_is_clean(input in messy_title()) {
            let output = normalize(&input);
            prop_assert!(!output.contains("  "), "double space in: {:?}", output);
            for c in EXCLUDED_CHARS {
                prop_assert!(!output.contains(*c), "found {} in: {:?}", c, output);
            }
        }
    }
}

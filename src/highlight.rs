//! Match highlighting
//!
//! Splits text into plain and emphasized segments by scanning for
//! case-insensitive occurrences of a keyword. The keyword is compared
//! literally, character by character, so punctuation in it has no
//! special meaning.

/// A piece of text and whether it should be rendered with emphasis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub emphasized: bool,
}

impl Segment {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasized: false,
        }
    }

    pub fn emphasized(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasized: true,
        }
    }
}

/// Split `text` around every case-insensitive occurrence of `keyword`.
///
/// An empty keyword yields the whole text as one plain segment. Otherwise
/// empty pieces are dropped, and the concatenated segment texts always equal
/// `text`. Matches never overlap: scanning resumes at the end of the
/// previous match.
pub fn highlight(text: &str, keyword: &str) -> Vec<Segment> {
    if keyword.is_empty() {
        return vec![Segment::plain(text)];
    }

    let needle = fold(keyword);
    let mut segments = Vec::new();
    let mut plain_start = 0;
    let mut pos = 0;

    while pos < text.len() {
        if let Some(len) = match_len_at(&text[pos..], &needle) {
            if plain_start < pos {
                segments.push(Segment::plain(&text[plain_start..pos]));
            }
            segments.push(Segment::emphasized(&text[pos..pos + len]));
            pos += len;
            plain_start = pos;
        } else {
            // Advance one whole character
            pos += text[pos..].chars().next().map_or(1, char::len_utf8);
        }
    }

    if plain_start < text.len() {
        segments.push(Segment::plain(&text[plain_start..]));
    }

    segments
}

/// Lower-case one character for comparison. Final sigma folds to `σ`.
fn fold_char(ch: char) -> impl Iterator<Item = char> {
    ch.to_lowercase().map(|c| if c == 'ς' { 'σ' } else { c })
}

/// Case-folded chars of `text`, as compared by [`highlight`] and [`contains`]
pub fn fold(text: &str) -> Vec<char> {
    text.chars().flat_map(fold_char).collect()
}

/// Whether `text` contains the folded `needle` starting on a character
/// boundary, exactly where [`highlight`] would emphasize it
pub fn contains(text: &str, needle: &[char]) -> bool {
    needle.is_empty()
        || text
            .char_indices()
            .any(|(idx, _)| match_len_at(&text[idx..], needle).is_some())
}

/// Byte length of the prefix of `haystack` that lower-cases to `needle`.
///
/// The match must cover whole characters: a character whose lower-case form
/// expands to several chars only matches if all of them are consumed.
fn match_len_at(haystack: &str, needle: &[char]) -> Option<usize> {
    let mut want = needle.iter();

    for (idx, ch) in haystack.char_indices() {
        for lower in fold_char(ch) {
            match want.next() {
                Some(&w) if w == lower => {}
                _ => return None,
            }
        }
        if want.len() == 0 {
            return Some(idx + ch.len_utf8());
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn joined(segments: &[Segment]) -> String {
        segments.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn test_empty_keyword() {
        let segments = highlight("The cat sat", "");
        assert_eq!(segments, vec![Segment::plain("The cat sat")]);
    }

    #[test]
    fn test_single_match() {
        let segments = highlight("The cat sat", "cat");
        assert_eq!(
            segments,
            vec![
                Segment::plain("The "),
                Segment::emphasized("cat"),
                Segment::plain(" sat"),
            ]
        );
        assert_eq!(joined(&segments), "The cat sat");
    }

    #[test]
    fn test_case_insensitive_keeps_original_case() {
        let segments = highlight("Cat and CAT and cAt", "cat");
        let emphasized: Vec<&str> = segments
            .iter()
            .filter(|s| s.emphasized)
            .map(|s| s.text.as_str())
            .collect();
        assert_eq!(emphasized, vec!["Cat", "CAT", "cAt"]);
        assert_eq!(joined(&segments), "Cat and CAT and cAt");
    }

    #[test]
    fn test_adjacent_matches() {
        let segments = highlight("aaaa", "aa");
        assert_eq!(segments, vec![Segment::emphasized("aa"), Segment::emphasized("aa")]);
    }

    #[test]
    fn test_overlap_resumes_after_match() {
        let segments = highlight("aaa", "aa");
        assert_eq!(segments, vec![Segment::emphasized("aa"), Segment::plain("a")]);
    }

    #[test]
    fn test_match_at_edges() {
        let segments = highlight("4", "4");
        assert_eq!(segments, vec![Segment::emphasized("4")]);

        let segments = highlight("start middle start", "start");
        assert_eq!(
            segments,
            vec![
                Segment::emphasized("start"),
                Segment::plain(" middle "),
                Segment::emphasized("start"),
            ]
        );
    }

    #[test]
    fn test_no_match() {
        let segments = highlight("nothing here", "zzz");
        assert_eq!(segments, vec![Segment::plain("nothing here")]);
    }

    #[test]
    fn test_pattern_characters_are_literal() {
        let segments = highlight("What is 2+2? (a) or (b)", "2+2?");
        assert_eq!(
            segments,
            vec![
                Segment::plain("What is "),
                Segment::emphasized("2+2?"),
                Segment::plain(" (a) or (b)"),
            ]
        );

        let segments = highlight("a.c abc", ".");
        assert_eq!(
            segments,
            vec![Segment::plain("a"), Segment::emphasized("."), Segment::plain("c abc")]
        );

        let segments = highlight("x (y) z", "(");
        assert_eq!(joined(&segments), "x (y) z");
        assert_eq!(segments.iter().filter(|s| s.emphasized).count(), 1);
    }

    #[test]
    fn test_multibyte_text() {
        let segments = highlight("Ünïcödé ÜNÏ", "ünï");
        assert_eq!(
            segments,
            vec![
                Segment::emphasized("Ünï"),
                Segment::plain("cödé "),
                Segment::emphasized("ÜNÏ"),
            ]
        );
    }

    #[test]
    fn test_expanding_lowercase_needs_whole_char() {
        // 'İ' lower-cases to "i̇" (two chars); a lone "i" must not match half of it
        let segments = highlight("İx", "i");
        assert_eq!(segments, vec![Segment::plain("İx")]);
        assert_eq!(joined(&highlight("İstanbul", "i\u{307}s")), "İstanbul");
    }

    #[test]
    fn test_final_sigma_matches_either_form() {
        let segments = highlight("ΟΔΟΣ", "οδος");
        assert_eq!(segments, vec![Segment::emphasized("ΟΔΟΣ")]);
        let segments = highlight("οδός", "ΟΔΌΣ");
        assert_eq!(segments, vec![Segment::emphasized("οδός")]);
    }

    #[test]
    fn test_contains_agrees_with_highlight() {
        let samples = [
            ("ΟΔΟΣ", "οδος"),
            ("ΟΣΑ", "ΟΣ"),
            ("ΟΣΑ", "οσ"),
            ("İx", "i"),
            ("Mississippi", "SSI"),
            ("plain text", "zzz"),
        ];
        for (text, keyword) in samples {
            let emphasized = highlight(text, keyword).iter().any(|s| s.emphasized);
            assert_eq!(contains(text, &fold(keyword)), emphasized, "{:?} in {:?}", keyword, text);
        }
        assert!(contains("anything", &[]));
    }

    #[test]
    fn test_empty_text() {
        assert!(highlight("", "cat").is_empty());
        assert_eq!(highlight("", ""), vec![Segment::plain("")]);
    }

    #[test]
    fn test_round_trip() {
        let samples = [
            ("The quick brown fox", "o"),
            ("Mississippi", "ss"),
            ("Mississippi", "SSI"),
            ("ends with key", "key"),
            ("日本語のテキスト", "テキ"),
        ];
        for (text, keyword) in samples {
            assert_eq!(joined(&highlight(text, keyword)), text);
        }
    }
}

//! Splitting of text into segments short enough for a single utterance.
//!
//! CeVIO refuses to speak more than a fixed number of characters at once (see
//! [`EngineProfile::max_len`](crate::EngineProfile::max_len)). [`split_text`] cuts the text
//! right after punctuation and whitespace and packs as many of the resulting pieces as fit
//! into each segment.

/// Characters after which text may be split.
pub const DELIMITERS: &[char] = &[
    '、', '。', '，', '．', ',', '.', '・', '|', '\r', '\n', '\t', ' ', '\u{3000}',
];

/// Returns the atomic pieces of `text`: each piece runs up to and including one delimiter,
/// except possibly the last one, which holds whatever follows the final delimiter.
pub fn tokens(text: &str) -> Tokens<'_> {
    Tokens {
        rest: text,
    }
}

/// Iterator returned by [`tokens`].
#[derive(Debug, Clone)]
pub struct Tokens<'t> {
    rest: &'t str,
}

impl<'t> Iterator for Tokens<'t> {
    type Item = &'t str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        let end = self
            .rest
            .char_indices()
            .find(|(_, c)| DELIMITERS.contains(c))
            .map(|(idx, c)| idx + c.len_utf8())
            .unwrap_or(self.rest.len());
        let (token, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(token)
    }
}

/// Splits `text` into segments of at most `max_len` characters.
///
/// Segments only end at token boundaries (see [`tokens`]). A single token longer than
/// `max_len` is not cut; it becomes a segment of its own and exceeds the limit. The
/// segments always concatenate back to `text`, and there is always at least one segment,
/// even if it is empty.
pub fn split_text(text: &str, max_len: usize) -> Vec<String> {
    let mut segments = vec![String::new()];
    let mut current_len = 0;
    for token in tokens(text) {
        let token_len = token.chars().count();
        if current_len + token_len <= max_len {
            if let Some(last) = segments.last_mut() {
                last.push_str(token);
            }
            current_len += token_len;
        } else {
            segments.push(token.to_owned());
            current_len = token_len;
        }
    }
    log::debug!("split {} characters into {} segment(s)", text.chars().count(), segments.len());
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn char_len(s: &str) -> usize {
        s.chars().count()
    }

    #[test]
    fn tokens_end_after_delimiters() {
        let pieces: Vec<_> = tokens("こんにちは、世界。さようなら").collect();
        assert_eq!(pieces, ["こんにちは、", "世界。", "さようなら"]);
    }

    #[test]
    fn crlf_yields_separate_tokens() {
        let pieces: Vec<_> = tokens("a\r\nb").collect();
        assert_eq!(pieces, ["a\r", "\n", "b"]);
    }

    #[test]
    fn packs_greeting_within_ten_chars() {
        let text = "こんにちは、世界。さようなら";
        let segments = split_text(text, 10);
        assert_eq!(segments, ["こんにちは、世界。", "さようなら"]);
        assert!(segments.iter().all(|s| char_len(s) <= 10));
        assert_eq!(segments.concat(), text);
    }

    #[test]
    fn empty_input_yields_one_empty_segment() {
        assert_eq!(split_text("", 100), [""]);
    }

    #[test]
    fn text_that_fits_stays_whole() {
        assert_eq!(split_text("Hello, world.", 200), ["Hello, world."]);
    }

    #[test]
    fn oversized_token_is_passed_through() {
        let long = "あ".repeat(15);
        let text = format!("短い、{long}。終わり");
        let segments = split_text(&text, 10);
        assert_eq!(segments, ["短い、".to_string(), format!("{long}。"), "終わり".to_string()]);
        assert_eq!(segments.concat(), text);
    }

    #[test]
    fn oversized_first_token_leaves_leading_empty_segment() {
        let segments = split_text("abcdefghijkl", 5);
        assert_eq!(segments, ["", "abcdefghijkl"]);
    }

    #[test]
    fn round_trip_and_bound_hold_for_mixed_text() {
        let text = "吾輩は猫である。名前はまだ無い。\nどこで生れたかとんと見当がつかぬ、何でも薄暗い\
                    じめじめした所でニャーニャー泣いていた事だけは記憶している。 The quick brown \
                    fox jumps over the lazy dog,\tagain and again・and again.";
        for max_len in [1, 3, 7, 10, 25, 100, 200] {
            let segments = split_text(text, max_len);
            assert_eq!(segments.concat(), text, "max_len = {max_len}");
            for segment in &segments {
                let fits = char_len(segment) <= max_len;
                let single_token = tokens(segment).count() == 1;
                assert!(fits || single_token, "{segment:?} exceeds {max_len}");
            }
        }
    }
}

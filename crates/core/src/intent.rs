use unicode_segmentation::UnicodeSegmentation;

use crate::models::{PhraseRoute, Sentiment};
use crate::tables::{SentimentLexicon, BREAKUP_TRIGGERS, CAT_TRIGGERS, GOAL_TRIGGERS};

pub fn normalize_text(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Cuts `input` down to at most `max_graphemes` grapheme clusters.
pub fn cap_input(input: &str, max_graphemes: usize) -> &str {
    match input.grapheme_indices(true).nth(max_graphemes) {
        Some((byte_offset, _)) => &input[..byte_offset],
        None => input,
    }
}

/// Phrase-triggered routes, checked in priority order after screening.
pub fn classify_phrase_route(text: &str) -> Option<PhraseRoute> {
    if contains_any(text, BREAKUP_TRIGGERS) {
        return Some(PhraseRoute::Breakup);
    }

    if contains_any(text, CAT_TRIGGERS) {
        return Some(PhraseRoute::Cat);
    }

    if contains_any(text, GOAL_TRIGGERS) {
        return Some(PhraseRoute::Goal);
    }

    None
}

/// Word-list sentiment. Each lexicon word counts once if it appears anywhere
/// in the text.
pub fn analyze_sentiment(text: &str, lexicon: &SentimentLexicon) -> Sentiment {
    let positive = count_matches(text, lexicon.positive);
    let negative = count_matches(text, lexicon.negative);

    match positive.cmp(&negative) {
        std::cmp::Ordering::Greater => Sentiment::Positive,
        std::cmp::Ordering::Less => Sentiment::Negative,
        std::cmp::Ordering::Equal => Sentiment::Neutral,
    }
}

pub fn contains_any(input: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| input.contains(needle))
}

pub fn count_matches(input: &str, needles: &[&str]) -> usize {
    needles.iter().filter(|needle| input.contains(*needle)).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::SENTIMENT_LEXICON;

    #[test]
    fn caps_on_grapheme_boundaries() {
        assert_eq!(cap_input("心情低落", 2), "心情");
        assert_eq!(cap_input("short", 100), "short");
        assert_eq!(cap_input("e\u{301}e\u{301}", 1), "e\u{301}");
    }

    #[test]
    fn breakup_outranks_cat_and_goal() {
        assert_eq!(
            classify_phrase_route("分手後只剩我的貓和新目標"),
            Some(PhraseRoute::Breakup)
        );
        assert_eq!(classify_phrase_route("這隻貓好可愛"), Some(PhraseRoute::Cat));
        assert_eq!(classify_phrase_route("我的計畫"), Some(PhraseRoute::Goal));
        assert_eq!(classify_phrase_route("今天下雨"), None);
    }

    #[test]
    fn each_alternate_trigger_fires_on_its_own() {
        assert_eq!(classify_phrase_route("我被拋棄了"), Some(PhraseRoute::Breakup));
        assert_eq!(classify_phrase_route("好可愛"), Some(PhraseRoute::Cat));
        assert_eq!(classify_phrase_route("今年的目標"), Some(PhraseRoute::Goal));
    }

    #[test]
    fn sentiment_uses_substring_containment() {
        assert_eq!(
            analyze_sentiment("今天很開心", &SENTIMENT_LEXICON),
            Sentiment::Positive
        );
        assert_eq!(
            analyze_sentiment("我很難過也很傷心", &SENTIMENT_LEXICON),
            Sentiment::Negative
        );
        assert_eq!(
            analyze_sentiment("我好難過", &SENTIMENT_LEXICON),
            Sentiment::Neutral
        );
        assert_eq!(analyze_sentiment("", &SENTIMENT_LEXICON), Sentiment::Neutral);
    }

    #[test]
    fn overlapping_needles_count_independently() {
        assert_eq!(count_matches("心跳加速又緊張", &["心跳加速", "心跳", "緊張"]), 3);
    }

    #[test]
    fn collapses_whitespace() {
        assert_eq!(normalize_text("  我  很\t好 \n"), "我 很 好");
    }
}

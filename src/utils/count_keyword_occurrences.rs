use crate::types::{KeywordFrequency, Token, TokenRef};

/// Counts the occurrences of a keyword in the given token sequence.
///
/// The keyword is lowercased and matched against whole tokens first. Only when there is no exact
/// match and the keyword is made of several words (separated by spaces and/or hyphens) are the
/// tokens joined with single spaces and searched for the space-separated keyword as a substring.
///
/// Substring matches are not aligned to token boundaries, so `"ki anwendung"` is also found in
/// `"ki anwendungen"`. Matches are non-overlapping.
///
/// # Arguments
/// * `keyword` - Keyword as written in the taxonomy.
/// * `tokens` - Lowercase token sequence of one report.
///
/// # Returns
/// * The number of occurrences, `0` if there are none.
///
/// # Example
/// ```
/// use keyword_census::count_keyword;
///
/// let tokens: Vec<String> = vec!["internet", "technologie", "ist", "wichtig"]
///     .into_iter()
///     .map(String::from)
///     .collect();
/// assert_eq!(count_keyword("Internet-Technologie", &tokens), 1);
/// assert_eq!(count_keyword("Internet", &tokens), 1);
/// assert_eq!(count_keyword("Technik", &tokens), 0);
/// ```
pub fn count_keyword_occurrences(keyword: &str, tokens: &[Token]) -> KeywordFrequency {
    let keyword = keyword.to_lowercase();

    let exact_matches = tokens.iter().filter(|token| **token == keyword).count();
    if exact_matches > 0 {
        return exact_matches;
    }

    match multi_word_phrase(&keyword) {
        Some(phrase) => count_phrase_in_joined_tokens(&phrase, tokens),
        None => 0,
    }
}

/// Returns the space-separated form of a keyword if it spans more than one word.
fn multi_word_phrase(keyword: &TokenRef) -> Option<String> {
    let normalized = keyword.replace('-', " ");
    let words: Vec<&str> = normalized.split_whitespace().collect();

    if keyword.contains('-') || words.len() > 1 {
        Some(words.join(" "))
    } else {
        None
    }
}

fn count_phrase_in_joined_tokens(phrase: &str, tokens: &[Token]) -> KeywordFrequency {
    if phrase.is_empty() {
        return 0;
    }

    let joined = tokens.join(" ");
    joined.matches(phrase).count()
}

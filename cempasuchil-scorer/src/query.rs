//! Keyword extraction from free-text questions.

use crate::KeywordConfig;

/// Tokens up to this many characters long carry no search value.
const MAX_SHORT_TOKEN_CHARS: usize = 2;

/// Split a question into the keywords used for ranking.
///
/// The query is lowercased, literal `?` and `.` characters are removed and
/// the remainder is split on whitespace. Stopwords and tokens of two
/// characters or fewer are dropped. Order and repeats are kept.
///
/// # Examples
/// ```
/// use cempasuchil_scorer::{KeywordConfig, extract_keywords};
///
/// let keywords = extract_keywords("Where can I find X-Ray facilities?", &KeywordConfig::default());
/// assert_eq!(keywords, vec!["x-ray", "facilities"]);
/// ```
#[must_use]
pub fn extract_keywords(query: &str, config: &KeywordConfig) -> Vec<String> {
    query
        .to_lowercase()
        .replace(['?', '.'], "")
        .split_whitespace()
        .filter(|token| !config.is_stopword(token))
        .filter(|token| token.chars().count() > MAX_SHORT_TOKEN_CHARS)
        .map(str::to_owned)
        .collect()
}

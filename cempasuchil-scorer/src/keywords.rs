//! Vocabularies and limits shared by the relevance filter and desert scorer.

use std::collections::HashSet;

use crate::KeywordConfigError;

/// Tokens dropped from queries before scoring.
pub const DEFAULT_STOPWORDS: [&str; 20] = [
    "where", "can", "i", "find", "is", "the", "are", "a", "an", "of", "in", "to", "for", "with",
    "show", "me", "list", "hospital", "clinic", "center",
];

/// Specialty substrings that signal critical-care capability.
pub const CRITICAL_CARE_KEYWORDS: [&str; 4] = ["surgery", "emergency", "maternity", "radiology"];

/// Equipment substrings that signal diagnostic imaging.
pub const IMAGING_KEYWORDS: [&str; 2] = ["x-ray", "mri"];

/// Maximum rows returned by a ranked search.
pub const DEFAULT_RESULT_LIMIT: usize = 20;

/// Rows returned when a query holds no usable keywords.
pub const DEFAULT_FALLBACK_LIMIT: usize = 15;

/// Configurable vocabularies for scoring and ranking.
///
/// Entries are stored lowercased so matching stays case-insensitive.
///
/// # Examples
/// ```
/// use cempasuchil_scorer::KeywordConfig;
///
/// # fn main() -> Result<(), cempasuchil_scorer::KeywordConfigError> {
/// let config = KeywordConfig::default()
///     .with_stopwords(["near", "me"])?
///     .with_limits(10, 5)?;
/// assert!(config.is_stopword("near"));
/// assert!(!config.is_stopword("where"));
/// assert_eq!(config.result_limit(), 10);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordConfig {
    stopwords: HashSet<String>,
    critical_care: Vec<String>,
    imaging: Vec<String>,
    result_limit: usize,
    fallback_limit: usize,
}

impl KeywordConfig {
    /// Replace the stopword set.
    ///
    /// # Errors
    /// Returns [`KeywordConfigError::BlankKeyword`] for blank entries.
    pub fn with_stopwords<I, S>(mut self, stopwords: I) -> Result<Self, KeywordConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stopwords = normalise(stopwords, "stopwords")?.into_iter().collect();
        Ok(self)
    }

    /// Replace the critical-care specialty keywords.
    ///
    /// # Errors
    /// Returns [`KeywordConfigError::BlankKeyword`] for blank entries.
    pub fn with_critical_care<I, S>(mut self, keywords: I) -> Result<Self, KeywordConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.critical_care = normalise(keywords, "critical care keywords")?;
        Ok(self)
    }

    /// Replace the imaging equipment keywords.
    ///
    /// # Errors
    /// Returns [`KeywordConfigError::BlankKeyword`] for blank entries.
    pub fn with_imaging<I, S>(mut self, keywords: I) -> Result<Self, KeywordConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.imaging = normalise(keywords, "imaging keywords")?;
        Ok(self)
    }

    /// Set the ranked and fallback result limits.
    ///
    /// # Errors
    /// Returns [`KeywordConfigError::ZeroLimit`] when either limit is zero.
    pub fn with_limits(
        mut self,
        result_limit: usize,
        fallback_limit: usize,
    ) -> Result<Self, KeywordConfigError> {
        if result_limit == 0 {
            return Err(KeywordConfigError::ZeroLimit {
                limit: "result limit",
            });
        }
        if fallback_limit == 0 {
            return Err(KeywordConfigError::ZeroLimit {
                limit: "fallback limit",
            });
        }
        self.result_limit = result_limit;
        self.fallback_limit = fallback_limit;
        Ok(self)
    }

    /// Report whether `token` is a stopword. `token` must already be lowercase.
    #[must_use]
    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(token)
    }

    /// Critical-care specialty keywords.
    #[must_use]
    pub fn critical_care(&self) -> &[String] {
        &self.critical_care
    }

    /// Imaging equipment keywords.
    #[must_use]
    pub fn imaging(&self) -> &[String] {
        &self.imaging
    }

    /// Maximum rows returned by a ranked search.
    #[must_use]
    pub const fn result_limit(&self) -> usize {
        self.result_limit
    }

    /// Rows returned when a query holds no usable keywords.
    #[must_use]
    pub const fn fallback_limit(&self) -> usize {
        self.fallback_limit
    }
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            stopwords: DEFAULT_STOPWORDS.iter().map(|&word| word.to_owned()).collect(),
            critical_care: CRITICAL_CARE_KEYWORDS
                .iter()
                .map(|&word| word.to_owned())
                .collect(),
            imaging: IMAGING_KEYWORDS.iter().map(|&word| word.to_owned()).collect(),
            result_limit: DEFAULT_RESULT_LIMIT,
            fallback_limit: DEFAULT_FALLBACK_LIMIT,
        }
    }
}

fn normalise<I, S>(entries: I, vocabulary: &'static str) -> Result<Vec<String>, KeywordConfigError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    entries
        .into_iter()
        .map(|entry| {
            let word = entry.as_ref().trim().to_lowercase();
            if word.is_empty() {
                Err(KeywordConfigError::BlankKeyword { vocabulary })
            } else {
                Ok(word)
            }
        })
        .collect()
}

//! Error types raised while configuring scoring vocabularies.

use thiserror::Error;

/// Errors returned when building a [`KeywordConfig`](crate::KeywordConfig).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeywordConfigError {
    /// A result limit of zero would hide every match.
    #[error("{limit} must be greater than zero")]
    ZeroLimit {
        /// Name of the offending limit.
        limit: &'static str,
    },
    /// A vocabulary entry was empty or whitespace.
    #[error("{vocabulary} entries must not be blank")]
    BlankKeyword {
        /// Name of the vocabulary holding the blank entry.
        vocabulary: &'static str,
    },
}

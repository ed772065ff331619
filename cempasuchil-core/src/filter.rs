//! Query-driven selections over a [`Dataset`].
//!
//! A [`Selection`] borrows the rows it returns, so callers can always map a
//! hit back to the source dataset through [`Hit::index`].

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{Dataset, FacilityRecord};

/// How a selection was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(rename_all = "snake_case"))]
pub enum SelectionMode {
    /// The dataset was empty or the query blank; nothing was selected.
    Blank,
    /// The query held no usable keywords; the largest facilities were chosen.
    DefaultView,
    /// Keywords were extracted but no row mentioned them.
    NoMatches,
    /// Rows ranked by keyword relevance.
    Ranked,
}

impl SelectionMode {
    /// Return the mode as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blank => "blank",
            Self::DefaultView => "default_view",
            Self::NoMatches => "no_matches",
            Self::Ranked => "ranked",
        }
    }
}

impl std::fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One selected row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit<'a> {
    /// Position of the row in the source dataset.
    pub index: usize,
    /// The row itself.
    pub facility: &'a FacilityRecord,
    /// Keyword relevance; `None` for rows chosen without scoring.
    pub relevance: Option<u32>,
}

/// Ordered rows chosen from a dataset for a query.
///
/// # Examples
/// ```
/// use cempasuchil_core::{Selection, SelectionMode};
///
/// let selection = Selection::blank();
/// assert!(selection.is_empty());
/// assert_eq!(selection.mode(), SelectionMode::Blank);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Selection<'a> {
    mode: SelectionMode,
    hits: Vec<Hit<'a>>,
}

impl<'a> Selection<'a> {
    /// Nothing selected because there was no dataset or no query.
    #[must_use]
    pub const fn blank() -> Self {
        Self {
            mode: SelectionMode::Blank,
            hits: Vec::new(),
        }
    }

    /// Nothing selected because no row matched the keywords.
    #[must_use]
    pub const fn no_matches() -> Self {
        Self {
            mode: SelectionMode::NoMatches,
            hits: Vec::new(),
        }
    }

    /// Rows chosen without keyword scoring.
    #[must_use]
    pub const fn default_view(hits: Vec<Hit<'a>>) -> Self {
        Self {
            mode: SelectionMode::DefaultView,
            hits,
        }
    }

    /// Rows ranked by relevance, highest first.
    #[must_use]
    pub const fn ranked(hits: Vec<Hit<'a>>) -> Self {
        Self {
            mode: SelectionMode::Ranked,
            hits,
        }
    }

    /// How the selection was produced.
    #[must_use]
    pub const fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Selected rows in display order.
    #[must_use]
    pub fn hits(&self) -> &[Hit<'a>] {
        &self.hits
    }

    /// Number of selected rows.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.hits.len()
    }

    /// Report whether no rows were selected.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// Source dataset indices in display order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.hits.iter().map(|hit| hit.index)
    }

    /// Consume the selection and return its rows.
    #[must_use]
    pub fn into_hits(self) -> Vec<Hit<'a>> {
        self.hits
    }
}

/// Select and rank rows of a dataset against a free-text query.
///
/// Implementations must be pure: the dataset is never modified and equal
/// inputs produce equal selections.
pub trait FacilityFilter: Send + Sync {
    /// Return the rows of `dataset` relevant to `query`.
    fn select<'a>(&self, dataset: &'a Dataset, query: &str) -> Selection<'a>;
}

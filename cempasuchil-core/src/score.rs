//! Bounded desert scores and the marker size derived from them.

#[cfg(feature = "serde")]
use serde::Serialize;

/// Heuristic estimate, in `0..=10`, of how underserved a facility's area is.
///
/// # Examples
/// ```
/// use cempasuchil_core::DesertScore;
///
/// assert_eq!(DesertScore::saturating(14).value(), 10);
/// assert_eq!(DesertScore::saturating(0).map_size(), 2);
/// assert_eq!(DesertScore::saturating(6).map_size(), 12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(transparent))]
pub struct DesertScore(u8);

impl DesertScore {
    /// Lowest possible score.
    pub const MIN: Self = Self(0);
    /// Highest possible score.
    pub const MAX: Self = Self(10);

    /// Build a score from accumulated points, capping at [`Self::MAX`].
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "points are capped at 10 before narrowing"
    )]
    pub const fn saturating(points: u32) -> Self {
        if points >= Self::MAX.0 as u32 {
            Self::MAX
        } else {
            Self(points as u8)
        }
    }

    /// Numeric score.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Marker size for map display.
    ///
    /// Twice the score, with zero treated as one so markers stay visible.
    #[must_use]
    pub const fn map_size(self) -> u8 {
        let base = if self.0 == 0 { 1 } else { self.0 };
        base * 2
    }
}

impl std::fmt::Display for DesertScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

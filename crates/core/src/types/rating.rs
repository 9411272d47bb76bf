//! Product rating on the backend's fixed zero-to-five scale.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Highest rating the backend can report.
pub const MAX_RATING: u8 = 5;

/// Error constructing a [`Rating`] from an out-of-range value.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("rating {0} is out of range (expected 0..={MAX_RATING})")]
pub struct RatingError(pub u8);

/// An aggregate product rating, an integer from 0 to 5 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    /// Create a rating, rejecting values above [`MAX_RATING`].
    ///
    /// # Errors
    ///
    /// Returns [`RatingError`] if `value > 5`.
    pub const fn new(value: u8) -> Result<Self, RatingError> {
        if value > MAX_RATING {
            Err(RatingError(value))
        } else {
            Ok(Self(value))
        }
    }

    /// Get the rating as a plain integer.
    #[must_use]
    pub const fn as_u8(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = RatingError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{MAX_RATING}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_in_range() {
        assert_eq!(Rating::new(0).unwrap().as_u8(), 0);
        assert_eq!(Rating::new(5).unwrap().as_u8(), 5);
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(Rating::new(6), Err(RatingError(6)));
    }

    #[test]
    fn test_serde_rejects_out_of_range() {
        let ok: Rating = serde_json::from_str("4").unwrap();
        assert_eq!(ok.as_u8(), 4);
        assert!(serde_json::from_str::<Rating>("9").is_err());
    }
}

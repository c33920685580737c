//! Solution checking for player-submitted arrangements.
//!
//! A candidate is accepted only if it is positionally identical to the
//! target. A permutation of the target with the right multiset but a
//! different order is rejected, even when both orders are ascending.

use serde::{Deserialize, Serialize};

/// Outcome of comparing a candidate arrangement to its target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationReport {
    /// Same length, same value at every index.
    Match,
    /// The candidate has a different number of elements.
    LengthMismatch { candidate: usize, target: usize },
    /// First index at which the two sequences differ.
    Mismatch { index: usize, expected: i64, found: i64 },
}

impl ValidationReport {
    /// Returns true if the candidate was accepted.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Match)
    }

    /// First index the player got wrong, if any.
    #[must_use]
    pub const fn first_wrong_index(&self) -> Option<usize> {
        match self {
            Self::Mismatch { index, .. } => Some(*index),
            Self::Match | Self::LengthMismatch { .. } => None,
        }
    }
}

/// Compare `candidate` to `target` and describe the first difference.
pub fn validate_report(candidate: &[i64], target: &[i64]) -> ValidationReport {
    if candidate.len() != target.len() {
        return ValidationReport::LengthMismatch {
            candidate: candidate.len(),
            target: target.len(),
        };
    }

    candidate
        .iter()
        .zip(target)
        .position(|(c, t)| c != t)
        .map_or(ValidationReport::Match, |index| ValidationReport::Mismatch {
            index,
            expected: target[index],
            found: candidate[index],
        })
}

/// Returns true iff `candidate` equals `target` at every index.
pub fn validate(candidate: &[i64], target: &[i64]) -> bool {
    validate_report(candidate, target).is_valid()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_is_valid() {
        assert!(validate(&[1, 2, 5, 6, 9], &[1, 2, 5, 6, 9]));
        assert!(validate(&[], &[]));
    }

    #[test]
    fn test_permutation_is_invalid() {
        assert!(!validate(&[2, 1, 5, 6, 9], &[1, 2, 5, 6, 9]));
        assert_eq!(
            validate_report(&[2, 1, 5, 6, 9], &[1, 2, 5, 6, 9]),
            ValidationReport::Mismatch { index: 0, expected: 1, found: 2 }
        );
    }

    #[test]
    fn test_length_mismatch() {
        let report = validate_report(&[1, 2], &[1, 2, 3]);
        assert_eq!(
            report,
            ValidationReport::LengthMismatch { candidate: 2, target: 3 }
        );
        assert!(!report.is_valid());
        assert_eq!(report.first_wrong_index(), None);
    }

    #[test]
    fn test_first_wrong_index() {
        let report = validate_report(&[1, 2, 9, 5], &[1, 2, 5, 9]);
        assert_eq!(report.first_wrong_index(), Some(2));
    }
}

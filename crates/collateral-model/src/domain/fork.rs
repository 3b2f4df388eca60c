//! Fork combinatorics
//!
//! How many mutually exclusive quorum-certified branches can an adversary
//! of weight `f` produce in a committee of weight `n` with quorum `q`?
//! The adversary votes on every branch; the honest weight `n - f` splits
//! across branches, each of which still needs `q - f` honest weight:
//!
//! ```text
//! max_branches(n, q, f) = floor((n - f) / (q - f))
//! ```
//!
//! The inverse relation gives the smallest adversary able to certify `a`
//! conflicting branches:
//!
//! ```text
//! min_adversary(a, n, q) = floor((a*q - n) / (a - 1))
//! ```
//!
//! Feeding `max_branches` output back through `min_adversary` never
//! overshoots the original weight (round-trip bound, covered by the
//! property tests).

use crate::error::{AnalysisError, AnalysisResult};

/// Maximum number of conflicting branches an adversary of weight `f` can
/// simultaneously certify.
///
/// A result of 1 means the adversary cannot equivocate at all; callers
/// must treat it as terminal rather than size an attack with it.
pub fn max_branches(n: f64, q: f64, f: f64) -> AnalysisResult<u64> {
    if q == f {
        return Err(AnalysisError::DegenerateQuorum { q });
    }
    let bound = ((n - f) / (q - f)).floor();
    if bound < 1.0 {
        return Err(AnalysisError::NoAchievableBranch {
            bound: bound as i64,
        });
    }
    Ok(bound as u64)
}

/// Minimum adversary weight capable of certifying `a` conflicting branches.
///
/// Requires `a >= 2`: a single branch is honest behavior and has no
/// meaningful adversary minimum.
pub fn min_adversary_for_branches(a: u64, n: f64, q: f64) -> AnalysisResult<u64> {
    if a < 2 {
        return Err(AnalysisError::TooFewBranches { branches: a });
    }
    let a = a as f64;
    let f = ((a * q - n) / (a - 1.0)).floor();
    Ok(f.max(0.0) as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branch_bound_n100_q67_f66() {
        // One honest vote short of quorum on each branch: 34 branches.
        assert_eq!(max_branches(100.0, 67.0, 66.0).unwrap(), 34);
    }

    #[test]
    fn test_branch_bound_small_adversary() {
        // f = 10 leaves (100 - 10) / (67 - 10) = 1: no equivocation.
        assert_eq!(max_branches(100.0, 67.0, 10.0).unwrap(), 1);
    }

    #[test]
    fn test_branch_bound_degenerate_quorum() {
        assert_eq!(
            max_branches(100.0, 67.0, 67.0),
            Err(AnalysisError::DegenerateQuorum { q: 67.0 })
        );
    }

    #[test]
    fn test_branch_bound_below_one() {
        // Quorum above committee size: no branch achievable.
        assert!(matches!(
            max_branches(5.0, 6.0, 0.0),
            Err(AnalysisError::NoAchievableBranch { .. })
        ));
    }

    #[test]
    fn test_min_adversary_a34_n100_q67() {
        // Inverse of the 34-branch bound: (34*67 - 100) / 33 = 66.
        assert_eq!(min_adversary_for_branches(34, 100.0, 67.0).unwrap(), 66);
    }

    #[test]
    fn test_min_adversary_two_branches() {
        // (2*67 - 100) / 1 = 34.
        assert_eq!(min_adversary_for_branches(2, 100.0, 67.0).unwrap(), 34);
    }

    #[test]
    fn test_min_adversary_rejects_single_branch() {
        assert_eq!(
            min_adversary_for_branches(1, 100.0, 67.0),
            Err(AnalysisError::TooFewBranches { branches: 1 })
        );
        assert_eq!(
            min_adversary_for_branches(0, 100.0, 67.0),
            Err(AnalysisError::TooFewBranches { branches: 0 })
        );
    }

    #[test]
    fn test_round_trip_is_consistent() {
        // The minimum adversary for the achieved branch count never exceeds
        // the weight that achieved it.
        for f in [34.0, 40.0, 50.0, 60.0, 66.0] {
            let a = max_branches(100.0, 67.0, f).unwrap();
            assert!(a >= 2);
            let f_min = min_adversary_for_branches(a, 100.0, 67.0).unwrap();
            assert!(
                (f_min as f64) <= f,
                "round trip overshot: f = {f}, f_min = {f_min}"
            );
        }
    }
}

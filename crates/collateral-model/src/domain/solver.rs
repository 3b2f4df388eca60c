//! Incentive-compatibility solvers
//!
//! Four ways of reading the break-even point of the expected-loss model,
//! one per protocol parameter a subnet operator may want recommended:
//!
//! - [`max_safe_spend`] — largest attacker balance that stays loss-making
//!   with the collateral and delays fixed;
//! - [`min_finalization_delay`] — smallest `omega` that deters a given
//!   balance with the collateral fixed;
//! - [`min_collateral`] — smallest slashable stake that deters a given
//!   balance with the delays fixed;
//! - [`max_tolerable_adversary`] — largest adversary weight whose best
//!   attack is still deterred.
//!
//! Setting the expected loss to zero and solving for `m` gives the closed
//! form all four build on:
//!
//! ```text
//! m* = C * cdf(w) / ((a - 1) * (1 - cdf(omega)))
//! ```

use super::distribution::DelayDistribution;
use super::fork::{max_branches, min_adversary_for_branches};
use crate::error::{AnalysisError, AnalysisResult};
use crate::types::CommitteeSpec;

/// Supremum attacker balance for which an `a`-branch equivocation is still
/// loss-making in expectation.
///
/// Scales linearly in collateral and inversely in branch count: the same
/// stake deters less per branch as the adversary splits across more
/// branches. Non-decreasing in the unstaking delay `w`.
pub fn max_safe_spend(
    a: u64,
    collateral: f64,
    unstaking: f64,
    finalization: f64,
    dist: &dyn DelayDistribution,
) -> AnalysisResult<f64> {
    if a < 2 {
        return Err(AnalysisError::TooFewBranches { branches: a });
    }
    let survival = 1.0 - dist.cdf(finalization);
    if survival == 0.0 {
        return Err(AnalysisError::EmptyAttackWindow {
            omega: finalization,
        });
    }
    Ok(collateral * dist.cdf(unstaking) / ((a as f64 - 1.0) * survival))
}

/// Smallest finalization delay `omega >= 0` that makes an attacker with
/// `balance` unable to profit from an `a`-branch equivocation.
///
/// Solves `cdf(omega)` out of the break-even equation:
///
/// ```text
/// target = (m*(a-1) - C*cdf(w)) / (m*(a-1))
/// ```
///
/// A non-positive target means the collateral already covers the exposure
/// and immediate finality is safe; the defined result is then 0.
pub fn min_finalization_delay(
    a: u64,
    collateral: f64,
    unstaking: f64,
    balance: f64,
    dist: &dyn DelayDistribution,
) -> AnalysisResult<f64> {
    if a < 2 {
        return Err(AnalysisError::TooFewBranches { branches: a });
    }
    if balance <= 0.0 {
        return Err(AnalysisError::ZeroAttackerBalance);
    }
    let exposure = balance * (a as f64 - 1.0);
    let target = (exposure - collateral * dist.cdf(unstaking)) / exposure;
    if target <= 0.0 {
        return Ok(0.0);
    }
    dist.inverse_cdf(target)
}

/// Smallest slashable collateral that deters an attacker with `balance`
/// from an `a`-branch equivocation; the inverse of [`max_safe_spend`] in
/// the collateral.
pub fn min_collateral(
    a: u64,
    unstaking: f64,
    finalization: f64,
    balance: f64,
    dist: &dyn DelayDistribution,
) -> AnalysisResult<f64> {
    if a < 2 {
        return Err(AnalysisError::TooFewBranches { branches: a });
    }
    let detection = dist.cdf(unstaking);
    if detection == 0.0 {
        return Err(AnalysisError::UndetectableSlash { w: unstaking });
    }
    Ok((a as f64 - 1.0) * balance * (1.0 - dist.cdf(finalization)) / detection)
}

/// Largest rational adversary weight whose best equivocation is still
/// deterred by the current per-member collateral and delays.
///
/// Scans integer weights downward from `q - 2` to `2q - n` (the smallest
/// weight that can certify two branches), sizing each candidate's best
/// attack and checking its safe-spend bound against `balance`. Falls back
/// to `ceil(n/3) - 1` when no scanned weight qualifies.
pub fn max_tolerable_adversary(
    committee: &CommitteeSpec,
    per_member_collateral: f64,
    unstaking: f64,
    finalization: f64,
    balance: f64,
    dist: &dyn DelayDistribution,
) -> AnalysisResult<u64> {
    let lo = (2.0 * committee.q - committee.n) as i64;
    let hi = (committee.q - 1.0).floor() as i64 - 1;

    for candidate in (lo..=hi).rev() {
        let a = match max_branches(committee.n, committee.q, candidate as f64) {
            Ok(a) if a >= 2 => a,
            _ => continue,
        };
        let slashable =
            min_adversary_for_branches(a, committee.n, committee.q)? as f64 * per_member_collateral;
        let bound = max_safe_spend(a, slashable, unstaking, finalization, dist)?;
        if bound >= balance {
            return Ok(candidate.max(0) as u64);
        }
    }

    Ok(((committee.n / 3.0).ceil() as u64).saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::distribution::LogNormalDelay;
    use crate::domain::loss::expected_total_loss;
    use approx::assert_relative_eq;

    fn dist() -> LogNormalDelay {
        LogNormalDelay::new(-1.0, 1.0).unwrap()
    }

    #[test]
    fn test_safe_spend_34_branches_330_collateral() {
        // 330 * cdf(3) / 33 with immediate finality.
        let bound = max_safe_spend(34, 330.0, 3.0, 0.0, &dist()).unwrap();
        assert_relative_eq!(bound, 9.820_744_538_996_566, epsilon = 1e-6);
    }

    #[test]
    fn test_safe_spend_is_break_even() {
        let d = dist();
        let bound = max_safe_spend(34, 330.0, 3.0, 0.5, &d).unwrap();
        let loss = expected_total_loss(34, 330.0, bound, 3.0, 0.5, &d).unwrap();
        assert_relative_eq!(loss, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_safe_spend_rejects_single_branch() {
        assert_eq!(
            max_safe_spend(1, 330.0, 3.0, 0.0, &dist()),
            Err(AnalysisError::TooFewBranches { branches: 1 })
        );
    }

    #[test]
    fn test_safe_spend_rejects_saturated_finalization() {
        // A finalization delay in the far tail leaves no attack window.
        assert!(matches!(
            max_safe_spend(34, 330.0, 1e15, 1e12, &dist()),
            Err(AnalysisError::EmptyAttackWindow { .. })
        ));
    }

    #[test]
    fn test_delay_zero_when_collateral_covers_exposure() {
        // 330 * cdf(3) ~ 324.08 >= 5 * 33 = 165.
        let delay = min_finalization_delay(34, 330.0, 3.0, 5.0, &dist()).unwrap();
        assert_eq!(delay, 0.0);
    }

    #[test]
    fn test_delay_positive_when_exposure_exceeds_collateral() {
        // m = 20: target = (660 - 324.08) / 660 ~ 0.50896.
        let d = dist();
        let delay = min_finalization_delay(34, 330.0, 3.0, 20.0, &d).unwrap();
        assert_relative_eq!(delay, 0.376_238_597_363_373_4, epsilon = 1e-6);
        // The delay satisfies the inverse-CDF relation exactly.
        let target = (20.0 * 33.0 - 330.0 * d.cdf(3.0)) / (20.0 * 33.0);
        assert_relative_eq!(d.cdf(delay), target, epsilon = 1e-9);
    }

    #[test]
    fn test_delay_rejects_zero_balance() {
        assert_eq!(
            min_finalization_delay(34, 330.0, 3.0, 0.0, &dist()),
            Err(AnalysisError::ZeroAttackerBalance)
        );
    }

    #[test]
    fn test_min_collateral_inverts_safe_spend() {
        let d = dist();
        let required = min_collateral(34, 3.0, 0.0, 20.0, &d).unwrap();
        assert_relative_eq!(required, 672.046_806_002_588, epsilon = 1e-6);
        // Staking exactly that much makes 20 coins the safe-spend bound.
        let bound = max_safe_spend(34, required, 3.0, 0.0, &d).unwrap();
        assert_relative_eq!(bound, 20.0, epsilon = 1e-9);
    }

    #[test]
    fn test_min_collateral_rejects_zero_detection() {
        // w = 0 means the collateral is always released before detection.
        assert_eq!(
            min_collateral(34, 0.0, 0.0, 20.0, &dist()),
            Err(AnalysisError::UndetectableSlash { w: 0.0 })
        );
    }

    #[test]
    fn test_tolerable_adversary_scan() {
        let committee = CommitteeSpec {
            n: 100.0,
            q: 67.0,
            f: 66.0,
        };
        let d = dist();
        // 3.3 coins per member, w = 3, immediate finality.
        let weight = max_tolerable_adversary(&committee, 3.3, 3.0, 0.0, 5.0, &d).unwrap();
        assert_eq!(weight, 65);
        let weight = max_tolerable_adversary(&committee, 3.3, 3.0, 0.0, 20.0, &d).unwrap();
        assert_eq!(weight, 63);
    }

    #[test]
    fn test_tolerable_adversary_falls_back_to_third() {
        let committee = CommitteeSpec {
            n: 100.0,
            q: 67.0,
            f: 66.0,
        };
        // No scanned weight tolerates a 1000-coin balance.
        let weight = max_tolerable_adversary(&committee, 3.3, 3.0, 0.0, 1000.0, &dist()).unwrap();
        assert_eq!(weight, 33);
    }
}

//! Adversary expected-loss model
//!
//! An adversary holding slashable collateral `C` equivocates into `a`
//! branches, spending balance `m` on each extra branch. Whether the attack
//! pays depends on when the equivocating message lands relative to two
//! deadlines: the finalization delay `omega` (before it, the conflicting
//! spend is caught and the attack fails) and the unstaking delay `w` (after
//! it, the collateral has been released and nothing can be slashed).
//!
//! ```text
//! p_late   = 1 - cdf(w)             arrives after unstaking: collateral
//!                                   escapes slashing, spends succeed
//! p_window = cdf(w) - cdf(omega)    arrives inside the window: spends
//!                                   succeed but collateral is slashed
//! loss     = C + p_late*(m*(1 - a) - C) - (a - 1)*p_window*m
//! ```
//!
//! Positive loss means a rational adversary stays honest; negative means
//! the attack is profitable in expectation.

use super::distribution::DelayDistribution;
use crate::error::{AnalysisError, AnalysisResult};

/// Expected loss of an `a`-branch equivocation, in coins.
///
/// `collateral` is the slashable stake at risk, `balance` the amount spent
/// per extra branch, `unstaking`/`finalization` the `w`/`omega` delays in
/// distribution time units.
pub fn expected_total_loss(
    a: u64,
    collateral: f64,
    balance: f64,
    unstaking: f64,
    finalization: f64,
    dist: &dyn DelayDistribution,
) -> AnalysisResult<f64> {
    if a < 2 {
        return Err(AnalysisError::TooFewBranches { branches: a });
    }
    let a = a as f64;
    let p_late = 1.0 - dist.cdf(unstaking);
    let p_window = dist.cdf(unstaking) - dist.cdf(finalization);
    Ok(collateral + p_late * (balance * (1.0 - a) - collateral) - (a - 1.0) * p_window * balance)
}

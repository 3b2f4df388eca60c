//! Error types for collateral analysis
//!
//! Two kinds of failure exist: domain errors (an input violates a
//! mathematical precondition of a formula) and configuration errors (a
//! caller-supplied parameter set is internally inconsistent). Both abort the
//! current computation; nothing is retried or clamped.

use thiserror::Error;

/// Errors that can occur during a collateral analysis run
#[derive(Clone, Debug, Error, PartialEq)]
pub enum AnalysisError {
    // ---- Domain: mathematical preconditions ----
    /// Quorum equals the adversary threshold; the branch bound divides by zero
    #[error("quorum equals adversary threshold (q = f = {q}); branch bound is undefined")]
    DegenerateQuorum { q: f64 },

    /// The branch formula produced a bound below one
    #[error("no quorum-certified branch is achievable (computed bound {bound})")]
    NoAchievableBranch { bound: i64 },

    /// The adversary can certify exactly one branch, so it cannot equivocate
    #[error("adversary of weight {f} cannot equivocate given quorum {q} of {n}")]
    AdversaryCannotEquivocate { n: f64, q: f64, f: f64 },

    /// An equivocation attack needs at least two conflicting branches
    #[error("equivocation needs at least 2 branches, got {branches}")]
    TooFewBranches { branches: u64 },

    /// The minimum adversary weight for this branch count floors to zero
    #[error("minimum adversary weight for {branches} branches floors to zero members")]
    DegenerateAdversaryFloor { branches: u64 },

    /// Inverse-CDF argument outside the unit interval
    #[error("probability {p} outside [0, 1]")]
    ProbabilityOutOfRange { p: f64 },

    /// Log-normal scale parameter must be positive and finite
    #[error("invalid log-normal sigma {sigma} (must be positive and finite)")]
    InvalidSigma { sigma: f64 },

    /// Log-normal location parameter must be finite
    #[error("invalid log-normal mu {mu} (must be finite)")]
    InvalidMu { mu: f64 },

    /// The finalization delay leaves no probability mass for the attack
    #[error("finalization delay {omega} absorbs the whole delay distribution (cdf = 1)")]
    EmptyAttackWindow { omega: f64 },

    /// The unstaking delay leaves no probability of slashing the attacker
    #[error("unstaking delay {w} leaves no slashable probability mass (cdf = 0)")]
    UndetectableSlash { w: f64 },

    /// Solving for a finalization delay needs a positive attacker balance
    #[error("attacker balance must be positive to solve for a finalization delay")]
    ZeroAttackerBalance,

    // ---- Configuration: caller-level inconsistency ----
    /// Committee parameters outside the valid ranges
    #[error("invalid committee n = {n}, q = {q}, f = {f} (need n > 0, n/2 < q <= n, 0 <= f < q)")]
    InvalidCommittee { n: f64, q: f64, f: f64 },

    /// Delay parameters outside the valid ranges
    #[error("invalid delays: unstaking = {unstaking} blocks, finalization = {finalization} blocks, block time = {block_time} (need 0 <= finalization <= unstaking, block time > 0)")]
    InvalidDelays {
        unstaking: f64,
        finalization: f64,
        block_time: f64,
    },

    /// Neither a committee total nor a per-member collateral minimum was given
    #[error("no collateral bound given: the committee total or the per-member minimum must be positive")]
    MissingCollateral,

    /// Collateral bounds cannot be negative
    #[error("negative collateral bound: total = {total}, per member = {per_member}")]
    NegativeCollateral { total: f64, per_member: f64 },
}

/// Result type for analysis operations
pub type AnalysisResult<T> = Result<T, AnalysisError>;

//! Domain layer - pure economic model
//!
//! This layer contains:
//! - Delay distribution abstraction (log-normal variant)
//! - Fork combinatorics (branch bounds)
//! - Collateral bound derivation
//! - Adversary expected-loss model
//! - Incentive-compatibility solvers
//!
//! RULES:
//! - No I/O operations
//! - No global state
//! - Pure, terminating numeric evaluation only

pub mod collateral;
pub mod distribution;
pub mod fork;
pub mod loss;
pub mod solver;

pub use collateral::effective_collateral;
pub use distribution::{DelayDistribution, LogNormalDelay, DEFAULT_MU, DEFAULT_SIGMA};
pub use fork::{max_branches, min_adversary_for_branches};
pub use loss::expected_total_loss;
pub use solver::{
    max_safe_spend, max_tolerable_adversary, min_collateral, min_finalization_delay,
};

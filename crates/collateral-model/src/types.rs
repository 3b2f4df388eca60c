//! Value objects and analysis configuration
//!
//! Every type here is constructed once per analysis run and never mutated.
//! The front end (flag parsing, prompts) builds one [`AnalysisConfig`] and
//! passes it by value into [`crate::service::AnalysisService`]; the core
//! never reads ambient global state.

use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, AnalysisResult};

/// Committee shape: size, quorum threshold and assumed rational adversary.
///
/// Weights are real-valued so the same model covers weighted committees;
/// for flat committees they are simply member counts.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CommitteeSpec {
    /// Committee size (total weight), `n > 0`
    pub n: f64,
    /// Quorum weight required to certify a branch, `n/2 < q <= n`
    pub q: f64,
    /// Rational adversary weight, `0 <= f < q`
    pub f: f64,
}

impl CommitteeSpec {
    /// Range checks for the committee invariants.
    pub fn validate(&self) -> AnalysisResult<()> {
        let ok = self.n > 0.0
            && self.q > self.n / 2.0
            && self.q <= self.n
            && self.f >= 0.0
            && self.f < self.q;
        if ok {
            Ok(())
        } else {
            Err(AnalysisError::InvalidCommittee {
                n: self.n,
                q: self.q,
                f: self.f,
            })
        }
    }
}

/// Declared collateral bounds: committee aggregate and per-member minimum.
///
/// At most one of the two is independently authoritative; the effective
/// figure is derived by
/// [`effective_collateral`](crate::domain::collateral::effective_collateral).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CollateralSpec {
    /// Minimum total collateral staked by the committee, `>= 0`
    pub total: f64,
    /// Minimum collateral per committee member, `>= 0`
    pub per_member: f64,
}

/// A sized equivocation attack.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AttackSpec {
    /// Number of conflicting branches the adversary certifies, `>= 2`
    pub branches: u64,
    /// Attacker balance risked in the attack, `>= 0`
    pub balance: f64,
}

/// Delay parameters in the same time unit as the delay distribution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DelayParams {
    /// Time between an unstaking request and collateral release (`w`)
    pub unstaking: f64,
    /// Time after which a transaction is treated as final (`omega`)
    pub finalization: f64,
}

/// The parameter the analysis should recommend.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum ReportMode {
    /// Maximum attacker balance the collateral regime tolerates
    SafeSpend,
    /// Minimum finalization delay that deters an attacker with this balance
    FinalizationDelay { attacker_balance: f64 },
    /// Largest rational adversary the current parameters tolerate
    TolerableAdversary { attacker_balance: f64 },
    /// Minimum collateral that deters an attacker with this balance
    RequiredCollateral { attacker_balance: f64 },
}

impl ReportMode {
    /// Whether this mode consumes the declared collateral bounds.
    /// `RequiredCollateral` solves for collateral instead of reading it.
    pub fn needs_collateral(&self) -> bool {
        !matches!(self, ReportMode::RequiredCollateral { .. })
    }
}

/// Immutable input for one analysis run.
///
/// Delays are block-denominated here; the service converts them to time
/// units (`blocks * block_time`) before touching the delay distribution and
/// converts the finalization-delay result back to a block count.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Committee shape
    pub committee: CommitteeSpec,
    /// Declared collateral bounds
    pub collateral: CollateralSpec,
    /// Branch-count override; derived from the committee when `None`
    pub branches: Option<u64>,
    /// Unstaking delay in blocks (`w`)
    pub unstaking_blocks: f64,
    /// Transaction finalization delay in blocks (`omega`)
    pub finalization_blocks: f64,
    /// Block production time (seconds per block)
    pub block_time: f64,
    /// Which parameter to recommend
    pub mode: ReportMode,
}

impl AnalysisConfig {
    /// Validate the parameter set before any computation runs.
    pub fn validate(&self) -> AnalysisResult<()> {
        self.committee.validate()?;

        let delays_ok = self.block_time > 0.0
            && self.unstaking_blocks >= 0.0
            && self.finalization_blocks >= 0.0
            && self.finalization_blocks <= self.unstaking_blocks;
        if !delays_ok {
            return Err(AnalysisError::InvalidDelays {
                unstaking: self.unstaking_blocks,
                finalization: self.finalization_blocks,
                block_time: self.block_time,
            });
        }

        if self.collateral.total < 0.0 || self.collateral.per_member < 0.0 {
            return Err(AnalysisError::NegativeCollateral {
                total: self.collateral.total,
                per_member: self.collateral.per_member,
            });
        }
        if self.mode.needs_collateral()
            && self.collateral.total == 0.0
            && self.collateral.per_member == 0.0
        {
            return Err(AnalysisError::MissingCollateral);
        }

        Ok(())
    }
}

/// Scalar recommendation produced by one analysis run.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub enum Recommendation {
    /// The subnet deters multiple-spends up to this balance (coins)
    SafeSpend { coins: f64 },
    /// Applications should delay finalization by this much
    FinalizationDelay {
        /// Delay in distribution time units
        delay: f64,
        /// Delay rounded up to whole blocks
        blocks: u64,
    },
    /// The parameters tolerate a rational adversary up to this weight
    TolerableAdversary {
        /// Adversary weight (committee members)
        weight: u64,
        /// Weight as a fraction of the committee
        committee_fraction: f64,
    },
    /// Collateral required to deter the given attacker balance
    RequiredCollateral {
        /// Committee-wide total (coins)
        total: f64,
        /// Minimum per committee member (coins)
        per_member: f64,
    },
}

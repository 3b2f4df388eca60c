//! Analysis service - pipeline orchestration
//!
//! Runs the strictly sequential pipeline over a validated configuration:
//! fork sizing, then the collateral bound, then the slashable stake, then
//! the selected solver. Each stage feeds the next; nothing here is
//! reorderable. Block-denominated delays are converted to distribution
//! time units on the way in and finalization-delay results are converted
//! back to whole blocks on the way out.

use crate::domain::{
    effective_collateral, max_branches, max_safe_spend, max_tolerable_adversary,
    min_adversary_for_branches, min_collateral, min_finalization_delay, DelayDistribution,
    LogNormalDelay,
};
use crate::error::{AnalysisError, AnalysisResult};
use crate::types::{AnalysisConfig, AttackSpec, DelayParams, Recommendation, ReportMode};

/// One-shot analysis runner over an immutable configuration.
pub struct AnalysisService {
    config: AnalysisConfig,
    dist: Box<dyn DelayDistribution>,
}

impl AnalysisService {
    /// Build a service over the default log-normal delay law.
    ///
    /// Validates the configuration; a service is only ever constructed
    /// around a coherent parameter set.
    pub fn new(config: AnalysisConfig) -> AnalysisResult<Self> {
        let dist = LogNormalDelay::default_network()?;
        Self::with_distribution(config, Box::new(dist))
    }

    /// Build a service over a caller-supplied delay law.
    pub fn with_distribution(
        config: AnalysisConfig,
        dist: Box<dyn DelayDistribution>,
    ) -> AnalysisResult<Self> {
        config.validate()?;
        Ok(Self { config, dist })
    }

    /// Execute the configured analysis and return its recommendation.
    pub fn run(&self) -> AnalysisResult<Recommendation> {
        let committee = self.config.committee;
        let delays = DelayParams {
            unstaking: self.config.unstaking_blocks * self.config.block_time,
            finalization: self.config.finalization_blocks * self.config.block_time,
        };

        match self.config.mode {
            ReportMode::SafeSpend => {
                let branches = self.sized_branches()?;
                let slashable = self.slashable_stake(branches)?;
                let coins = max_safe_spend(
                    branches,
                    slashable,
                    delays.unstaking,
                    delays.finalization,
                    self.dist.as_ref(),
                )?;
                tracing::debug!(branches, slashable, coins, "safe-spend bound computed");
                Ok(Recommendation::SafeSpend { coins })
            }
            ReportMode::FinalizationDelay { attacker_balance } => {
                let attack = AttackSpec {
                    branches: self.sized_branches()?,
                    balance: attacker_balance,
                };
                let slashable = self.slashable_stake(attack.branches)?;
                let delay = min_finalization_delay(
                    attack.branches,
                    slashable,
                    delays.unstaking,
                    attack.balance,
                    self.dist.as_ref(),
                )?;
                let blocks = (delay / self.config.block_time).ceil() as u64;
                tracing::debug!(
                    branches = attack.branches,
                    slashable,
                    delay,
                    blocks,
                    "minimum finalization delay computed"
                );
                Ok(Recommendation::FinalizationDelay { delay, blocks })
            }
            ReportMode::TolerableAdversary { attacker_balance } => {
                let effective = self.effective_total();
                let per_member = effective / committee.n;
                let weight = max_tolerable_adversary(
                    &committee,
                    per_member,
                    delays.unstaking,
                    delays.finalization,
                    attacker_balance,
                    self.dist.as_ref(),
                )?;
                tracing::debug!(weight, per_member, "tolerable adversary computed");
                Ok(Recommendation::TolerableAdversary {
                    weight,
                    committee_fraction: weight as f64 / committee.n,
                })
            }
            ReportMode::RequiredCollateral { attacker_balance } => {
                let attack = AttackSpec {
                    branches: self.sized_branches()?,
                    balance: attacker_balance,
                };
                let slashable = min_collateral(
                    attack.branches,
                    delays.unstaking,
                    delays.finalization,
                    attack.balance,
                    self.dist.as_ref(),
                )?;
                let adversary =
                    min_adversary_for_branches(attack.branches, committee.n, committee.q)?;
                if adversary == 0 {
                    return Err(AnalysisError::DegenerateAdversaryFloor {
                        branches: attack.branches,
                    });
                }
                // Only the adversary's members are slashed; scale the
                // slashable requirement up to a committee-wide floor.
                let per_member = slashable / adversary as f64;
                let total = per_member * committee.n;
                tracing::debug!(
                    branches = attack.branches,
                    slashable,
                    per_member,
                    total,
                    "required collateral computed"
                );
                Ok(Recommendation::RequiredCollateral { total, per_member })
            }
        }
    }

    /// Branch count for the attack: the configured override, or the bound
    /// achievable by the configured adversary.
    fn sized_branches(&self) -> AnalysisResult<u64> {
        let committee = self.config.committee;
        match self.config.branches {
            Some(a) => Ok(a),
            None => {
                let a = max_branches(committee.n, committee.q, committee.f)?;
                if a < 2 {
                    tracing::warn!(
                        f = committee.f,
                        q = committee.q,
                        "adversary cannot equivocate at this quorum"
                    );
                    return Err(AnalysisError::AdversaryCannotEquivocate {
                        n: committee.n,
                        q: committee.q,
                        f: committee.f,
                    });
                }
                Ok(a)
            }
        }
    }

    /// Effective committee-wide collateral from the declared bounds.
    fn effective_total(&self) -> f64 {
        effective_collateral(
            self.config.collateral.total,
            self.config.collateral.per_member,
            self.config.committee.n,
        )
    }

    /// Collateral actually at risk in an `a`-branch attack: the minimum
    /// adversary able to mount it, times the per-member stake.
    fn slashable_stake(&self, branches: u64) -> AnalysisResult<f64> {
        let committee = self.config.committee;
        let per_member = self.effective_total() / committee.n;
        let adversary = min_adversary_for_branches(branches, committee.n, committee.q)?;
        Ok(adversary as f64 * per_member)
    }
}

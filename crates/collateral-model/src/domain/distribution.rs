//! Message-delay distributions
//!
//! The economic model only ever asks two questions of the delay law: "what
//! is the probability a message arrives within `x`?" (CDF) and "before which
//! time does probability mass `p` arrive?" (inverse CDF / quantile). The
//! [`DelayDistribution`] trait captures exactly that capability set, so a
//! new delay family plugs in without touching any solver.
//!
//! The one required family is log-normal: `ln(x)` is normal with mean `mu`
//! and standard deviation `sigma`. The defaults come from libp2p gossip
//! delay measurements.

use statrs::distribution::{ContinuousCDF, LogNormal};

use crate::error::{AnalysisError, AnalysisResult};

/// Default log-normal location (libp2p delay measurements)
pub const DEFAULT_MU: f64 = -1.0;

/// Default log-normal scale (libp2p delay measurements)
pub const DEFAULT_SIGMA: f64 = 1.0;

/// Capability set the solvers need from a delay law.
///
/// Implementations must be pure: no internal mutable state, both methods
/// deterministic in their inputs.
pub trait DelayDistribution {
    /// Probability that the delay is at most `x`.
    ///
    /// Delays are non-negative, so `cdf(x) == 0` for all `x < 0`.
    /// Monotonically non-decreasing with range `[0, 1]`.
    fn cdf(&self, x: f64) -> f64;

    /// Quantile: the smallest delay `x` with `cdf(x) >= p`.
    ///
    /// Defined for `p` in `[0, 1]`; anything else is a domain error. Exact
    /// inverse of [`cdf`](Self::cdf) wherever the CDF is strictly
    /// increasing.
    fn inverse_cdf(&self, p: f64) -> AnalysisResult<f64>;
}

/// Log-normal message-delay law.
#[derive(Clone, Debug)]
pub struct LogNormalDelay {
    mu: f64,
    sigma: f64,
    inner: LogNormal,
}

impl LogNormalDelay {
    /// Build a log-normal delay law with location `mu` and scale `sigma`.
    ///
    /// Fails for non-finite `mu` and for `sigma` that is not strictly
    /// positive and finite.
    pub fn new(mu: f64, sigma: f64) -> AnalysisResult<Self> {
        if !mu.is_finite() {
            return Err(AnalysisError::InvalidMu { mu });
        }
        if !sigma.is_finite() || sigma <= 0.0 {
            return Err(AnalysisError::InvalidSigma { sigma });
        }
        let inner = LogNormal::new(mu, sigma)
            .map_err(|_| AnalysisError::InvalidSigma { sigma })?;
        Ok(Self { mu, sigma, inner })
    }

    /// The default law measured on libp2p gossip networks.
    pub fn default_network() -> AnalysisResult<Self> {
        Self::new(DEFAULT_MU, DEFAULT_SIGMA)
    }

    /// Location parameter `mu`.
    pub fn mu(&self) -> f64 {
        self.mu
    }

    /// Scale parameter `sigma`.
    pub fn sigma(&self) -> f64 {
        self.sigma
    }
}

impl DelayDistribution for LogNormalDelay {
    fn cdf(&self, x: f64) -> f64 {
        if x < 0.0 {
            return 0.0;
        }
        self.inner.cdf(x)
    }

    fn inverse_cdf(&self, p: f64) -> AnalysisResult<f64> {
        // NaN fails the range check as well.
        if !(0.0..=1.0).contains(&p) {
            return Err(AnalysisError::ProbabilityOutOfRange { p });
        }
        Ok(self.inner.inverse_cdf(p))
    }
}

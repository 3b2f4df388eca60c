//! # collateral-model
//!
//! Economic-security thresholds for committee-based subnets that stake
//! collateral as a deterrent against equivocation (multiple-spend) attacks.
//!
//! ## Overview
//!
//! An adversary controlling weight `f` in a committee of weight `n` with
//! quorum `q` can certify at most `floor((n - f) / (q - f))` conflicting
//! branches. Whether splitting a balance across those branches pays depends
//! on when the equivocating message lands relative to the transaction
//! finalization delay (`omega`) and the collateral unstaking delay (`w`),
//! under an assumed message-delay distribution. This crate models that
//! trade-off and solves it for whichever parameter an operator wants
//! recommended:
//!
//! - the maximum balance the current collateral safely tolerates,
//! - the minimum finalization delay that deters a given balance,
//! - the minimum collateral that deters a given balance,
//! - the largest rational adversary the current parameters tolerate.
//!
//! ```text
//! AnalysisConfig ──→ fork sizing ──→ collateral bound ──→ slashable stake
//!                                                              │
//!                                 Recommendation ←── solver ←──┘
//! ```
//!
//! All computation is synchronous, pure and terminating; the only failure
//! mode is an out-of-domain input. Front-end concerns (flags, prompts,
//! exit codes) live outside this crate: callers build one validated
//! [`types::AnalysisConfig`] and pass it by value.
//!
//! ## Example
//!
//! ```rust
//! use collateral_model::service::AnalysisService;
//! use collateral_model::types::{
//!     AnalysisConfig, CollateralSpec, CommitteeSpec, Recommendation, ReportMode,
//! };
//!
//! let config = AnalysisConfig {
//!     committee: CommitteeSpec { n: 100.0, q: 67.0, f: 66.0 },
//!     collateral: CollateralSpec { total: 330.0, per_member: 0.0 },
//!     branches: None,
//!     unstaking_blocks: 3.0,
//!     finalization_blocks: 0.0,
//!     block_time: 1.0,
//!     mode: ReportMode::SafeSpend,
//! };
//!
//! let service = AnalysisService::new(config).unwrap();
//! match service.run().unwrap() {
//!     Recommendation::SafeSpend { coins } => assert!(coins > 0.0),
//!     other => panic!("unexpected recommendation: {other:?}"),
//! }
//! ```

pub mod domain;
pub mod error;
pub mod service;
pub mod types;

pub use domain::{DelayDistribution, LogNormalDelay};
pub use error::{AnalysisError, AnalysisResult};
pub use service::AnalysisService;
pub use types::{AnalysisConfig, Recommendation, ReportMode};

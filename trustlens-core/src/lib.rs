//! TrustLens Core - Signal types and domain model for content trust scoring
//!
//! This crate provides the foundational primitives:
//! - Signals with explicit availability state (missing is never zero)
//! - Per-domain scoring profiles: weights, normalization rules, thresholds
//! - The analysis result model returned to callers

pub mod profile;
pub mod result;
pub mod signal;

pub use profile::*;
pub use result::*;
pub use signal::*;

/// Neutral score returned when no signal is available
pub const NEUTRAL_SCORE: u8 = 50;

/// Verdict label for the all-signals-unavailable case
pub const INDETERMINATE_VERDICT: &str = "Indeterminate";

/// Warning emitted alongside the neutral score
pub const INSUFFICIENT_DATA_WARNING: &str = "insufficient data";

/// Tolerance when checking that base weights sum to 1.0
pub const WEIGHT_TOLERANCE: f64 = 1e-6;

/// Saturation cap for the domain age signal, in days (~10 years)
pub const DOMAIN_AGE_CAP_DAYS: f64 = 3650.0;

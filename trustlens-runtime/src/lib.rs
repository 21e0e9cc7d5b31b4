//! TrustLens Runtime - concurrent probe harness
//!
//! Collaborator probes (WHOIS, TLS, DNS, NLP, EXIF) are independent and
//! I/O-bound. This crate runs them concurrently, each under an individual
//! timeout budget, and assembles whatever subset completed into a signal
//! set for the synchronous engine. A probe that times out contributes an
//! unavailable signal instead of stalling the computation.

pub mod analyzer;
pub mod collector;
pub mod probe;
pub mod subject;

pub use analyzer::Analyzer;
pub use collector::{CollectorConfig, SignalCollector};
pub use probe::{Probe, ProbeError, StaticProbe};
pub use subject::Subject;

/// Default per-probe timeout budget in milliseconds
pub const DEFAULT_PROBE_TIMEOUT_MS: u64 = 5_000;

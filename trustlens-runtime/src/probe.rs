//! Probe trait - the seam where signal-producing collaborators plug in

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use trustlens_core::{ErrorKind, RawValue, SignalCategory};

use crate::Subject;

/// Errors a probe may surface instead of a measurement
#[derive(Debug, Clone, Error)]
pub enum ProbeError {
    #[error("probe timed out")]
    Timeout,

    #[error("network error: {0}")]
    Network(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("not applicable to this subject")]
    NotApplicable,

    #[error("probe fault: {0}")]
    Fault(String),
}

impl ProbeError {
    /// Signal-level failure detail carried on the excluded signal
    pub fn error_kind(&self) -> ErrorKind {
        match self {
            ProbeError::Timeout => ErrorKind::Timeout,
            ProbeError::Network(_) => ErrorKind::Network,
            ProbeError::Parse(_) => ErrorKind::Parse,
            ProbeError::NotApplicable => ErrorKind::NotApplicable,
            ProbeError::Fault(_) => ErrorKind::Fault,
        }
    }

    /// Whether this failure is an unexpected fault (logged with detail)
    /// rather than an expected could-not-produce case
    pub fn is_fault(&self) -> bool {
        matches!(self, ProbeError::Fault(_))
    }
}

/// A collaborator that produces one raw signal value for a subject.
///
/// Implementations are expected to be I/O-bound and independent; the
/// collector runs them concurrently and enforces the timeout budget, so a
/// probe does not need its own deadline handling.
#[async_trait]
pub trait Probe: Send + Sync {
    /// Signal name exactly as the profile declares it
    fn signal_name(&self) -> &str;

    /// What the produced signal measures
    fn category(&self) -> SignalCategory;

    /// Take the measurement
    async fn measure(&self, subject: &Subject) -> Result<RawValue, ProbeError>;
}

/// A probe that replays a canned outcome, optionally after a simulated
/// delay. Backs offline replay of recorded probe runs and tests.
pub struct StaticProbe {
    name: String,
    category: SignalCategory,
    outcome: Result<RawValue, ProbeError>,
    delay: Option<Duration>,
}

impl StaticProbe {
    /// A probe that yields a value
    pub fn value(name: &str, category: SignalCategory, value: impl Into<RawValue>) -> Self {
        Self {
            name: name.to_string(),
            category,
            outcome: Ok(value.into()),
            delay: None,
        }
    }

    /// A probe that fails with the given error
    pub fn failing(name: &str, category: SignalCategory, error: ProbeError) -> Self {
        Self {
            name: name.to_string(),
            category,
            outcome: Err(error),
            delay: None,
        }
    }

    /// Simulate the original probe's latency
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

#[async_trait]
impl Probe for StaticProbe {
    fn signal_name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> SignalCategory {
        self.category
    }

    async fn measure(&self, _subject: &Subject) -> Result<RawValue, ProbeError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.outcome.clone()
    }
}

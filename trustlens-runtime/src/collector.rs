//! Signal collection - concurrent probe execution under timeout budgets
//!
//! Every probe runs as an independent timed task. Whatever completes
//! within its budget contributes an available signal; everything else is
//! folded into an unavailable or errored signal. Collection never blocks
//! aggregation and never raises on probe failure.

use std::time::Duration;

use futures::future::join_all;
use tokio::time::timeout;
use tracing::{debug, warn};

use trustlens_core::{ErrorKind, Signal};

use crate::{Probe, Subject, DEFAULT_PROBE_TIMEOUT_MS};

/// Collector configuration
#[derive(Debug, Clone)]
pub struct CollectorConfig {
    /// Individual timeout budget per probe
    pub probe_timeout: Duration,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            probe_timeout: Duration::from_millis(DEFAULT_PROBE_TIMEOUT_MS),
        }
    }
}

/// Runs probes concurrently and assembles their outcomes into signals
pub struct SignalCollector {
    config: CollectorConfig,
}

impl SignalCollector {
    pub fn new(config: CollectorConfig) -> Self {
        Self { config }
    }

    /// Run every probe against the subject; one signal per probe, in
    /// probe order. Failures degrade to unavailable/errored signals.
    pub async fn collect(&self, probes: &[Box<dyn Probe>], subject: &Subject) -> Vec<Signal> {
        let budget = self.config.probe_timeout;

        let tasks = probes.iter().map(|probe| async move {
            let name = probe.signal_name();
            let category = probe.category();

            match timeout(budget, probe.measure(subject)).await {
                Ok(Ok(value)) => {
                    debug!(signal = name, "probe completed");
                    Signal::available(name, category, value)
                }
                Ok(Err(error)) if error.is_fault() => {
                    warn!(signal = name, %error, "probe fault");
                    Signal::errored(name, category, error.error_kind())
                }
                Ok(Err(error)) => {
                    debug!(signal = name, %error, "probe could not produce a value");
                    Signal::unavailable(name, category, error.error_kind())
                }
                Err(_) => {
                    warn!(signal = name, budget_ms = budget.as_millis() as u64, "probe timed out");
                    Signal::unavailable(name, category, ErrorKind::Timeout)
                }
            }
        });

        join_all(tasks).await
    }
}

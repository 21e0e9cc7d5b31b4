//! Analyzer - collects signals and feeds the synchronous scoring engine

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use trustlens_core::{AnalysisResult, Profile};

use crate::{CollectorConfig, Probe, SignalCollector, Subject};

/// Owns a probe set and drives collect -> score for each request
pub struct Analyzer {
    collector: SignalCollector,
    probes: Vec<Box<dyn Probe>>,
}

impl Analyzer {
    pub fn new(config: CollectorConfig) -> Self {
        Self {
            collector: SignalCollector::new(config),
            probes: Vec::new(),
        }
    }

    /// Register a probe; one probe per expected signal name
    pub fn with_probe(mut self, probe: impl Probe + 'static) -> Self {
        self.probes.push(Box::new(probe));
        self
    }

    /// Analyze a subject against its domain's built-in profile
    pub async fn run(&self, subject: &Subject) -> AnalysisResult {
        self.run_with_profile(subject, subject.domain().profile()).await
    }

    /// Analyze a subject against an explicit (already validated) profile
    pub async fn run_with_profile(&self, subject: &Subject, profile: &Profile) -> AnalysisResult {
        let request_id = Uuid::new_v4();
        let started = Utc::now();
        info!(
            %request_id,
            subject = %subject.reference(),
            domain = ?profile.domain(),
            probes = self.probes.len(),
            "starting analysis"
        );

        let signals = self.collector.collect(&self.probes, subject).await;
        let result = trustlens_engine::analyze(&signals, profile);

        let elapsed_ms = (Utc::now() - started).num_milliseconds();
        info!(
            %request_id,
            score = result.trust_score,
            verdict = %result.verdict,
            warnings = result.warnings.len(),
            elapsed_ms,
            "analysis complete"
        );

        result
    }
}

//! TrustLens Engine - pure scoring pipeline
//!
//! Reduces a set of independently-fallible signals to a bounded trust
//! score, a categorical verdict and a ranked explanation:
//! normalize -> aggregate (with weight redistribution) -> classify ->
//! explain.
//!
//! The engine is synchronous, stateless per call and performs no I/O;
//! concurrency and timeouts belong to the collaborators that produce the
//! signals (see `trustlens-runtime`).

pub mod aggregate;
pub mod explain;
pub mod normalize;
pub mod verdict;

pub use aggregate::{aggregate, Aggregation, Contribution, Exclusion, ExclusionReason};
pub use explain::explain;
pub use normalize::normalize;
pub use verdict::classify;

use trustlens_core::{
    AnalysisResult, Profile, Signal, INDETERMINATE_VERDICT, INSUFFICIENT_DATA_WARNING,
};

/// Run the full scoring pipeline for one signal set against a profile.
///
/// Never fails on missing or partial data: weight redistribution is the
/// sole recovery mechanism, and the all-signals-unavailable case degrades
/// to a neutral score with an "Indeterminate" verdict.
pub fn analyze(signals: &[Signal], profile: &Profile) -> AnalysisResult {
    let aggregation = aggregate(signals, profile);

    if aggregation.is_degenerate() {
        return AnalysisResult {
            trust_score: aggregation.score,
            verdict: INDETERMINATE_VERDICT.to_string(),
            breakdown: explain(&aggregation),
            warnings: vec![INSUFFICIENT_DATA_WARNING.to_string()],
        };
    }

    let verdict = classify(aggregation.score, profile).to_string();
    let warnings = aggregation.excluded.iter().map(Exclusion::warning).collect();

    AnalysisResult {
        trust_score: aggregation.score,
        verdict,
        breakdown: explain(&aggregation),
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trustlens_core::{
        ContentDomain, ErrorKind, NormalizationRule, Profile, SignalCategory, NEUTRAL_SCORE,
    };

    fn url_signals_full() -> Vec<Signal> {
        vec![
            Signal::available("domain_age", SignalCategory::Reputation, 3650.0),
            Signal::available("https_valid", SignalCategory::Security, true),
            Signal::available("security_headers_score", SignalCategory::Security, 80.0),
            Signal::available("dns_security_score", SignalCategory::Reputation, 40.0),
            Signal::available("tracking_privacy_score", SignalCategory::Privacy, 90.0),
            Signal::available("backlink_ratio", SignalCategory::Reputation, 0.75),
        ]
    }

    // Scenario: established URL with full signal coverage.
    #[test]
    fn test_url_full_data() {
        let result = analyze(&url_signals_full(), ContentDomain::Url.profile());

        // 0.2*1.0 + 0.2*1.0 + 0.2*0.8 + 0.15*0.4 + 0.15*0.9 + 0.1*0.75
        assert_eq!(result.trust_score, 83);
        assert_eq!(result.verdict, "Trustworthy");
        assert!(result.warnings.is_empty());
        assert_eq!(result.breakdown.len(), 6);
        assert!(result.breakdown.iter().all(|e| e.available));
    }

    // Scenario: DNS probe failed; its weight redistributes instead of
    // zero-filling, so the score rises relative to the full set.
    #[test]
    fn test_url_missing_dns_redistributes() {
        let full = analyze(&url_signals_full(), ContentDomain::Url.profile());

        let mut signals = url_signals_full();
        signals.retain(|s| s.name != "dns_security_score");
        let partial = analyze(&signals, ContentDomain::Url.profile());

        assert!(partial.trust_score > full.trust_score);
        assert_eq!(partial.trust_score, 91);
        assert_eq!(partial.verdict, "Highly Trustworthy");
        assert_eq!(partial.warnings, vec!["dns_security_score: unavailable".to_string()]);

        let excluded: Vec<_> = partial.breakdown.iter().filter(|e| !e.available).collect();
        assert_eq!(excluded.len(), 1);
        assert_eq!(excluded[0].name, "dns_security_score");
    }

    // Scenario: every text signal failed - neutral score, never an error.
    #[test]
    fn test_text_all_unavailable() {
        let profile = ContentDomain::Text.profile();
        let signals: Vec<Signal> = profile
            .signal_specs()
            .iter()
            .map(|spec| {
                Signal::unavailable(&spec.name, SignalCategory::Linguistic, ErrorKind::Timeout)
            })
            .collect();

        let result = analyze(&signals, profile);
        assert_eq!(result.trust_score, NEUTRAL_SCORE);
        assert_eq!(result.verdict, "Indeterminate");
        assert_eq!(result.warnings, vec!["insufficient data".to_string()]);
        assert!(result.breakdown.iter().all(|e| !e.available));

        // An entirely empty input set degrades identically.
        let empty = analyze(&[], profile);
        assert_eq!(empty.trust_score, NEUTRAL_SCORE);
        assert_eq!(empty.verdict, "Indeterminate");
    }

    // Scenario: image score lands exactly on a tier floor - the boundary
    // belongs to the higher tier.
    #[test]
    fn test_image_borderline_score() {
        let profile = Profile::builder(ContentDomain::Image)
            .signal("metadata_consistency", 0.5, NormalizationRule::Unit)
            .signal("artifact_score", 0.5, NormalizationRule::Unit)
            .threshold(70, "Trustworthy")
            .threshold(40, "Caution")
            .threshold(0, "Untrustworthy")
            .build()
            .unwrap();

        let signals = vec![
            Signal::available("metadata_consistency", SignalCategory::Authenticity, 0.7),
            Signal::available("artifact_score", SignalCategory::Authenticity, 0.7),
        ];

        let result = analyze(&signals, &profile);
        assert_eq!(result.trust_score, 70);
        assert_eq!(result.verdict, "Trustworthy");
    }

    #[test]
    fn test_score_bounded_for_arbitrary_subsets() {
        let profile = ContentDomain::Url.profile();
        let full = url_signals_full();

        // Every subset of the six signals stays within [0,100].
        for mask in 0u32..(1 << full.len()) {
            let subset: Vec<Signal> = full
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, s)| s.clone())
                .collect();
            let result = analyze(&subset, profile);
            assert!(result.trust_score <= 100);
        }
    }

    #[test]
    fn test_monotonicity_in_single_signal() {
        let profile = ContentDomain::Url.profile();
        let mut previous = 0;
        for backlink in [0.0, 0.25, 0.5, 0.75, 1.0] {
            let mut signals = url_signals_full();
            for signal in &mut signals {
                if signal.name == "backlink_ratio" {
                    signal.raw_value = Some(backlink.into());
                }
            }
            let score = analyze(&signals, profile).trust_score;
            assert!(score >= previous);
            previous = score;
        }
    }

    #[test]
    fn test_idempotence() {
        let signals = url_signals_full();
        let profile = ContentDomain::Url.profile();
        let first = analyze(&signals, profile);
        let second = analyze(&signals, profile);
        assert_eq!(first, second);
    }

    #[test]
    fn test_text_profile_inverts_ai_likelihood() {
        let profile = ContentDomain::Text.profile();
        let human = vec![Signal::available(
            "ai_likelihood",
            SignalCategory::Linguistic,
            0.05,
        )];
        let machine = vec![Signal::available(
            "ai_likelihood",
            SignalCategory::Linguistic,
            0.95,
        )];
        let human_score = analyze(&human, profile).trust_score;
        let machine_score = analyze(&machine, profile).trust_score;
        assert!(human_score > machine_score);
        assert_eq!(human_score, 95);
        assert_eq!(machine_score, 5);
    }
}

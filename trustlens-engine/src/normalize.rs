//! Normalization - mapping raw signal values onto the common [0,1] scale

use trustlens_core::{NormalizationRule, RawValue, Signal};

/// Map an available signal onto [0,1] under the profile's declared rule.
///
/// Returns `None` when the signal is not available, carries no raw value,
/// or carries a value whose type does not match the rule. A `None` is the
/// seam the aggregator uses to redistribute weight; this function never
/// fabricates a value.
pub fn normalize(signal: &Signal, rule: &NormalizationRule) -> Option<f64> {
    if !signal.is_available() {
        return None;
    }
    let raw = signal.raw_value.as_ref()?;

    match (rule, raw) {
        (NormalizationRule::Presence, RawValue::Flag(flag)) => {
            Some(if *flag { 1.0 } else { 0.0 })
        }
        (NormalizationRule::Percent, RawValue::Number(n)) => {
            finite(*n).map(|n| (n / 100.0).clamp(0.0, 1.0))
        }
        (NormalizationRule::LogScaled { cap }, RawValue::Number(n)) => {
            finite(*n).map(|n| log_scaled(n, *cap))
        }
        (NormalizationRule::Unit, RawValue::Number(n)) => finite(*n).map(|n| n.clamp(0.0, 1.0)),
        (NormalizationRule::UnitInverted, RawValue::Number(n)) => {
            finite(*n).map(|n| 1.0 - n.clamp(0.0, 1.0))
        }
        (NormalizationRule::Polarity, RawValue::Number(n)) => {
            finite(*n).map(|n| (n.clamp(-1.0, 1.0) + 1.0) / 2.0)
        }
        // Type mismatch between the collaborator's value and the declared
        // rule; excluded from the round rather than coerced.
        _ => None,
    }
}

fn finite(n: f64) -> Option<f64> {
    n.is_finite().then_some(n)
}

/// Saturating logarithmic map: `min(1, ln(1 + raw) / ln(1 + cap))`.
/// Keeps very large magnitudes (e.g. decade-old domains) from dominating
/// linearly.
fn log_scaled(raw: f64, cap: f64) -> f64 {
    if raw <= 0.0 || cap <= 0.0 {
        return 0.0;
    }
    ((1.0 + raw).ln() / (1.0 + cap).ln()).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use trustlens_core::{ErrorKind, SignalCategory};

    fn number(name: &str, value: f64) -> Signal {
        Signal::available(name, SignalCategory::Reputation, value)
    }

    #[test]
    fn test_presence_maps_bool() {
        let on = Signal::available("https_valid", SignalCategory::Security, true);
        let off = Signal::available("https_valid", SignalCategory::Security, false);
        assert_eq!(normalize(&on, &NormalizationRule::Presence), Some(1.0));
        assert_eq!(normalize(&off, &NormalizationRule::Presence), Some(0.0));
    }

    #[test]
    fn test_percent_divides_and_clamps() {
        assert_eq!(
            normalize(&number("security_headers_score", 80.0), &NormalizationRule::Percent),
            Some(0.8)
        );
        assert_eq!(
            normalize(&number("security_headers_score", 140.0), &NormalizationRule::Percent),
            Some(1.0)
        );
        assert_eq!(
            normalize(&number("security_headers_score", -20.0), &NormalizationRule::Percent),
            Some(0.0)
        );
    }

    #[test]
    fn test_log_scaled_saturates_at_cap() {
        let rule = NormalizationRule::LogScaled { cap: 3650.0 };
        let at_cap = normalize(&number("domain_age", 3650.0), &rule).unwrap();
        assert!((at_cap - 1.0).abs() < 1e-12);

        let past_cap = normalize(&number("domain_age", 36500.0), &rule).unwrap();
        assert_eq!(past_cap, 1.0);

        let young = normalize(&number("domain_age", 30.0), &rule).unwrap();
        let older = normalize(&number("domain_age", 365.0), &rule).unwrap();
        assert!(young < older && older < 1.0);

        assert_eq!(normalize(&number("domain_age", 0.0), &rule), Some(0.0));
    }

    #[test]
    fn test_polarity_remaps_from_signed_range() {
        let rule = NormalizationRule::Polarity;
        assert_eq!(normalize(&number("sentiment_confidence", -1.0), &rule), Some(0.0));
        assert_eq!(normalize(&number("sentiment_confidence", 0.0), &rule), Some(0.5));
        assert_eq!(normalize(&number("sentiment_confidence", 1.0), &rule), Some(1.0));
    }

    #[test]
    fn test_unit_inverted() {
        let rule = NormalizationRule::UnitInverted;
        let likely_ai = normalize(&number("ai_likelihood", 0.9), &rule).unwrap();
        assert!((likely_ai - 0.1).abs() < 1e-12);
        assert_eq!(normalize(&number("ai_likelihood", 0.0), &rule), Some(1.0));
    }

    #[test]
    fn test_unavailable_is_never_fabricated() {
        let signal =
            Signal::unavailable("dns_security_score", SignalCategory::Reputation, ErrorKind::Timeout);
        assert_eq!(normalize(&signal, &NormalizationRule::Percent), None);

        let errored =
            Signal::errored("dns_security_score", SignalCategory::Reputation, ErrorKind::Fault);
        assert_eq!(normalize(&errored, &NormalizationRule::Percent), None);
    }

    #[test]
    fn test_type_mismatch_excluded() {
        let flag_for_percent = Signal::available("dns_security_score", SignalCategory::Reputation, true);
        assert_eq!(normalize(&flag_for_percent, &NormalizationRule::Percent), None);

        let label = Signal::available("https_valid", SignalCategory::Security, "yes");
        assert_eq!(normalize(&label, &NormalizationRule::Presence), None);
    }

    #[test]
    fn test_non_finite_excluded() {
        assert_eq!(
            normalize(&number("backlink_ratio", f64::NAN), &NormalizationRule::Unit),
            None
        );
        assert_eq!(
            normalize(&number("backlink_ratio", f64::INFINITY), &NormalizationRule::Unit),
            None
        );
    }
}

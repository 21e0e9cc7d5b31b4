//! Scoring profiles - per-domain configuration of expected signals,
//! weights, normalization rules and verdict thresholds
//!
//! A profile is constructed once, validated eagerly (malformed weights or
//! thresholds are programming errors, not runtime data problems) and then
//! shared read-only across concurrent analyses of its domain.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{DOMAIN_AGE_CAP_DAYS, WEIGHT_TOLERANCE};

/// Content domain an analysis subject belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentDomain {
    Url,
    Image,
    Text,
}

impl ContentDomain {
    /// The built-in profile for this domain
    pub fn profile(&self) -> &'static Profile {
        match self {
            ContentDomain::Url => &URL_PROFILE,
            ContentDomain::Image => &IMAGE_PROFILE,
            ContentDomain::Text => &TEXT_PROFILE,
        }
    }
}

/// How a raw signal value maps onto the common [0,1] scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NormalizationRule {
    /// Boolean presence: `true` -> 1.0, `false` -> 0.0
    Presence,
    /// Score already expressed 0-100, divided by 100 and clamped
    Percent,
    /// Unbounded magnitude, saturating log map:
    /// `min(1, ln(1 + raw) / ln(1 + cap))`
    LogScaled { cap: f64 },
    /// Already in [0,1]; clamped
    Unit,
    /// In [0,1] but higher raw means lower trust; contributes `1 - raw`
    UnitInverted,
    /// Polarity in [-1,1], remapped via `(raw + 1) / 2`
    Polarity,
}

/// One expected signal: its name, base weight and normalization rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalSpec {
    pub name: String,
    pub base_weight: f64,
    pub rule: NormalizationRule,
}

/// One verdict tier: scores at or above `min_score` earn `label`,
/// unless a higher tier claims them first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerdictThreshold {
    pub min_score: u8,
    pub label: String,
}

/// Profile validation failures - these fail fast at construction time
#[derive(Debug, Error, PartialEq)]
pub enum ProfileError {
    #[error("profile declares no signals")]
    NoSignals,

    #[error("duplicate signal spec: {0}")]
    DuplicateSignal(String),

    #[error("negative base weight for signal {0}")]
    NegativeWeight(String),

    #[error("base weights sum to {0}, expected 1.0")]
    WeightSum(f64),

    #[error("profile declares no verdict thresholds")]
    NoThresholds,

    #[error("verdict thresholds must be strictly decreasing (at min_score {0})")]
    ThresholdOrder(u8),

    #[error("final verdict threshold must have min_score 0, got {0}")]
    MissingZeroFloor(u8),
}

/// Validated, immutable scoring configuration for one content domain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ProfileBuilder")]
pub struct Profile {
    domain: ContentDomain,
    #[serde(rename = "signals")]
    signal_specs: Vec<SignalSpec>,
    #[serde(rename = "thresholds")]
    verdict_thresholds: Vec<VerdictThreshold>,
}

impl Profile {
    /// Start building a profile for a domain
    pub fn builder(domain: ContentDomain) -> ProfileBuilder {
        ProfileBuilder {
            domain,
            signals: Vec::new(),
            thresholds: Vec::new(),
        }
    }

    pub fn domain(&self) -> ContentDomain {
        self.domain
    }

    /// Expected signals in declaration order
    pub fn signal_specs(&self) -> &[SignalSpec] {
        &self.signal_specs
    }

    /// Verdict tiers ordered from highest `min_score` to the zero floor
    pub fn verdict_thresholds(&self) -> &[VerdictThreshold] {
        &self.verdict_thresholds
    }

    /// Look up a spec by signal name, with its declaration index
    pub fn spec(&self, name: &str) -> Option<(usize, &SignalSpec)> {
        self.signal_specs
            .iter()
            .enumerate()
            .find(|(_, spec)| spec.name == name)
    }
}

/// Builder for profiles; `build` performs the fail-fast validation
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileBuilder {
    domain: ContentDomain,
    signals: Vec<SignalSpec>,
    thresholds: Vec<VerdictThreshold>,
}

impl ProfileBuilder {
    /// Declare an expected signal with its base weight and rule
    pub fn signal(mut self, name: &str, base_weight: f64, rule: NormalizationRule) -> Self {
        self.signals.push(SignalSpec {
            name: name.to_string(),
            base_weight,
            rule,
        });
        self
    }

    /// Declare a verdict tier; call in descending `min_score` order
    pub fn threshold(mut self, min_score: u8, label: &str) -> Self {
        self.thresholds.push(VerdictThreshold {
            min_score,
            label: label.to_string(),
        });
        self
    }

    /// Validate and freeze the profile
    pub fn build(self) -> Result<Profile, ProfileError> {
        if self.signals.is_empty() {
            return Err(ProfileError::NoSignals);
        }

        let mut seen: Vec<&str> = Vec::with_capacity(self.signals.len());
        for spec in &self.signals {
            if seen.contains(&spec.name.as_str()) {
                return Err(ProfileError::DuplicateSignal(spec.name.clone()));
            }
            seen.push(&spec.name);

            if spec.base_weight < 0.0 || !spec.base_weight.is_finite() {
                return Err(ProfileError::NegativeWeight(spec.name.clone()));
            }
        }

        let weight_sum: f64 = self.signals.iter().map(|s| s.base_weight).sum();
        if (weight_sum - 1.0).abs() > WEIGHT_TOLERANCE {
            return Err(ProfileError::WeightSum(weight_sum));
        }

        if self.thresholds.is_empty() {
            return Err(ProfileError::NoThresholds);
        }
        for pair in self.thresholds.windows(2) {
            if pair[1].min_score >= pair[0].min_score {
                return Err(ProfileError::ThresholdOrder(pair[1].min_score));
            }
        }
        let floor = self.thresholds.last().map(|t| t.min_score).unwrap_or(0);
        if floor != 0 {
            return Err(ProfileError::MissingZeroFloor(floor));
        }

        Ok(Profile {
            domain: self.domain,
            signal_specs: self.signals,
            verdict_thresholds: self.thresholds,
        })
    }
}

impl TryFrom<ProfileBuilder> for Profile {
    type Error = ProfileError;

    fn try_from(builder: ProfileBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}

static URL_PROFILE: LazyLock<Profile> = LazyLock::new(|| {
    Profile::builder(ContentDomain::Url)
        .signal(
            "domain_age",
            0.20,
            NormalizationRule::LogScaled {
                cap: DOMAIN_AGE_CAP_DAYS,
            },
        )
        .signal("https_valid", 0.20, NormalizationRule::Presence)
        .signal("security_headers_score", 0.20, NormalizationRule::Percent)
        .signal("dns_security_score", 0.15, NormalizationRule::Percent)
        .signal("tracking_privacy_score", 0.15, NormalizationRule::Percent)
        .signal("backlink_ratio", 0.10, NormalizationRule::Unit)
        .threshold(90, "Highly Trustworthy")
        .threshold(70, "Trustworthy")
        .threshold(40, "Caution")
        .threshold(0, "Untrustworthy")
        .build()
        .expect("built-in URL profile is valid")
});

static IMAGE_PROFILE: LazyLock<Profile> = LazyLock::new(|| {
    Profile::builder(ContentDomain::Image)
        .signal("metadata_consistency", 0.30, NormalizationRule::Unit)
        .signal("compression_quality", 0.25, NormalizationRule::Percent)
        .signal("artifact_score", 0.30, NormalizationRule::Unit)
        .signal("format_validity", 0.15, NormalizationRule::Presence)
        .threshold(85, "Authentic")
        .threshold(60, "Likely Authentic")
        .threshold(35, "Possibly Manipulated")
        .threshold(0, "Likely Manipulated")
        .build()
        .expect("built-in image profile is valid")
});

// bias_score is oriented high-is-good (freedom from detected bias);
// ai_likelihood is the only inverted signal.
static TEXT_PROFILE: LazyLock<Profile> = LazyLock::new(|| {
    Profile::builder(ContentDomain::Text)
        .signal("sentiment_confidence", 0.15, NormalizationRule::Polarity)
        .signal("bias_score", 0.20, NormalizationRule::Unit)
        .signal("readability_quality", 0.20, NormalizationRule::Percent)
        .signal("ai_likelihood", 0.25, NormalizationRule::UnitInverted)
        .signal("fact_check_score", 0.20, NormalizationRule::Percent)
        .threshold(85, "Highly Credible")
        .threshold(65, "Credible")
        .threshold(40, "Questionable")
        .threshold(0, "Untrustworthy")
        .build()
        .expect("built-in text profile is valid")
});

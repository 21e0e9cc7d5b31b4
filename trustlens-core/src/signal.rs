//! Trust signals - named, typed measurements about a piece of content
//!
//! Each signal is produced by exactly one collaborator (WHOIS lookup, TLS
//! inspection, header scrape, NLP scoring, EXIF parse) and is immutable
//! once produced. Availability is explicit: a collaborator that fails hands
//! the engine an `Unavailable` or `Errored` signal instead of a fabricated
//! value, so "missing" and "zero" can never be confused.

use serde::{Deserialize, Serialize};

/// Broad grouping of what a signal measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalCategory {
    /// Transport and certificate security (HTTPS, security headers)
    Security,
    /// Domain standing and history (age, backlinks, DNS posture)
    Reputation,
    /// Tracking and data-collection posture
    Privacy,
    /// Media integrity (metadata, compression, artifacts)
    Authenticity,
    /// Language-level measurements (sentiment, bias, readability)
    Linguistic,
}

/// Raw measurement carried by an available signal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    /// Boolean presence indicator (e.g. "has valid HTTPS")
    Flag(bool),
    /// Numeric measurement on whatever scale the collaborator uses
    Number(f64),
    /// Free-form label; never scored, carried for diagnostics only
    Label(String),
}

impl From<bool> for RawValue {
    fn from(flag: bool) -> Self {
        RawValue::Flag(flag)
    }
}

impl From<f64> for RawValue {
    fn from(number: f64) -> Self {
        RawValue::Number(number)
    }
}

impl From<&str> for RawValue {
    fn from(label: &str) -> Self {
        RawValue::Label(label.to_string())
    }
}

/// Availability state of a signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SignalState {
    /// The collaborator produced a usable raw value
    #[default]
    Available,
    /// The collaborator could not produce a value (network failure, parse
    /// failure, not applicable to the subject)
    Unavailable,
    /// The collaborator raised an unexpected fault; scored like
    /// `Unavailable` but logged with detail for diagnostics
    Errored,
}

/// Why a collaborator failed to produce a value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Probe exceeded its timeout budget
    Timeout,
    /// Network-level failure reaching the subject
    Network,
    /// Response received but could not be parsed
    Parse,
    /// Measurement does not apply to this subject
    NotApplicable,
    /// Unexpected fault inside the collaborator
    Fault,
}

/// A single named measurement with availability state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    /// Name under the profile contract (e.g. `domain_age`)
    pub name: String,

    /// What this signal measures
    pub category: SignalCategory,

    /// Raw measurement; present only for available signals
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_value: Option<RawValue>,

    /// Availability state
    #[serde(default)]
    pub state: SignalState,

    /// Failure detail for unavailable/errored signals
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<ErrorKind>,
}

impl Signal {
    /// An available signal carrying a raw measurement
    pub fn available(name: &str, category: SignalCategory, value: impl Into<RawValue>) -> Self {
        Self {
            name: name.to_string(),
            category,
            raw_value: Some(value.into()),
            state: SignalState::Available,
            error_kind: None,
        }
    }

    /// A signal the collaborator could not produce
    pub fn unavailable(name: &str, category: SignalCategory, kind: ErrorKind) -> Self {
        Self {
            name: name.to_string(),
            category,
            raw_value: None,
            state: SignalState::Unavailable,
            error_kind: Some(kind),
        }
    }

    /// A signal whose collaborator raised an unexpected fault
    pub fn errored(name: &str, category: SignalCategory, kind: ErrorKind) -> Self {
        Self {
            name: name.to_string(),
            category,
            raw_value: None,
            state: SignalState::Errored,
            error_kind: Some(kind),
        }
    }

    pub fn is_available(&self) -> bool {
        self.state == SignalState::Available
    }
}

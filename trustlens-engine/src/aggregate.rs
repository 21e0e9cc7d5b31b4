//! Weighted aggregation with weight redistribution over available signals
//!
//! Missing signals never pull the score toward zero: the base weights of
//! the available subset are renormalized so effective weights sum to 1.

use std::collections::HashMap;

use tracing::debug;

use trustlens_core::{NormalizedSignal, Profile, Signal, SignalState, NEUTRAL_SCORE};

use crate::normalize::normalize;

/// Why an expected signal was excluded from a scoring round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExclusionReason {
    /// Absent from the input set, or marked unavailable by its collaborator
    Unavailable,
    /// Collaborator fault, or an available value the rule could not use
    Errored,
}

/// An expected signal that did not participate in scoring
#[derive(Debug, Clone, PartialEq)]
pub struct Exclusion {
    pub name: String,
    /// Declaration index in the profile, for stable ordering
    pub order: usize,
    pub reason: ExclusionReason,
}

impl Exclusion {
    /// Warning line surfaced to the caller
    pub fn warning(&self) -> String {
        match self.reason {
            ExclusionReason::Unavailable => format!("{}: unavailable", self.name),
            ExclusionReason::Errored => format!("{}: errored", self.name),
        }
    }
}

/// One signal's share of the final score
#[derive(Debug, Clone, PartialEq)]
pub struct Contribution {
    pub signal: NormalizedSignal,
    /// Base weight divided by the total weight of the available subset
    pub effective_weight: f64,
    /// `normalized * effective_weight * 100`
    pub contribution: f64,
    /// Declaration index in the profile, for stable ordering
    pub order: usize,
}

/// Outcome of one aggregation round, before verdict classification
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregation {
    /// Trust score in [0,100]; `NEUTRAL_SCORE` when degenerate
    pub score: u8,
    /// Signals that participated, in declaration order
    pub included: Vec<Contribution>,
    /// Expected signals that did not, in declaration order
    pub excluded: Vec<Exclusion>,
}

impl Aggregation {
    /// True when no expected signal could be scored - the explicit
    /// insufficient-data case, not an error
    pub fn is_degenerate(&self) -> bool {
        self.included.is_empty()
    }
}

/// Combine normalized signals into a 0-100 score per the profile.
///
/// Pure and deterministic: identical inputs produce identical output.
pub fn aggregate(signals: &[Signal], profile: &Profile) -> Aggregation {
    let by_name: HashMap<&str, &Signal> = signals.iter().map(|s| (s.name.as_str(), s)).collect();

    for signal in signals {
        if profile.spec(&signal.name).is_none() {
            debug!(signal = %signal.name, "ignoring signal not declared by profile");
        }
    }

    let mut normalized: Vec<(usize, f64, f64, String)> = Vec::new();
    let mut excluded: Vec<Exclusion> = Vec::new();

    for (order, spec) in profile.signal_specs().iter().enumerate() {
        match by_name.get(spec.name.as_str()) {
            None => excluded.push(Exclusion {
                name: spec.name.clone(),
                order,
                reason: ExclusionReason::Unavailable,
            }),
            Some(signal) => match normalize(signal, &spec.rule) {
                Some(value) => {
                    normalized.push((order, value, spec.base_weight, spec.name.clone()))
                }
                None => {
                    let reason = match signal.state {
                        SignalState::Unavailable => ExclusionReason::Unavailable,
                        // An available value the rule rejected counts as a
                        // collaborator fault, same as an explicit error.
                        SignalState::Errored | SignalState::Available => ExclusionReason::Errored,
                    };
                    excluded.push(Exclusion {
                        name: spec.name.clone(),
                        order,
                        reason,
                    });
                }
            },
        }
    }

    let total_weight: f64 = normalized.iter().map(|(_, _, weight, _)| weight).sum();
    if total_weight <= 0.0 {
        return Aggregation {
            score: NEUTRAL_SCORE,
            included: Vec::new(),
            excluded,
        };
    }

    let mut included = Vec::with_capacity(normalized.len());
    let mut weighted_sum = 0.0;
    for (order, value, base_weight, name) in normalized {
        let effective_weight = base_weight / total_weight;
        weighted_sum += value * effective_weight;
        included.push(Contribution {
            signal: NormalizedSignal {
                name,
                value,
                weight: base_weight,
            },
            effective_weight,
            contribution: value * effective_weight * 100.0,
            order,
        });
    }

    let score = (weighted_sum * 100.0).round().clamp(0.0, 100.0) as u8;

    Aggregation {
        score,
        included,
        excluded,
    }
}

//! Explanation building - ranking signals by weighted impact
//!
//! Scored signals are ordered by absolute contribution, largest first,
//! with ties broken by declaration order in the profile so the output is
//! stable and deterministic. Excluded signals are appended afterwards so
//! callers can render "this judgment excluded: ..." transparency notes.

use std::cmp::Ordering;

use trustlens_core::BreakdownEntry;

use crate::aggregate::Aggregation;

/// Build the ordered breakdown for an aggregation round.
pub fn explain(aggregation: &Aggregation) -> Vec<BreakdownEntry> {
    let mut ranked: Vec<_> = aggregation.included.iter().collect();
    ranked.sort_by(|a, b| {
        b.contribution
            .abs()
            .partial_cmp(&a.contribution.abs())
            .unwrap_or(Ordering::Equal)
            .then(a.order.cmp(&b.order))
    });

    let mut entries: Vec<BreakdownEntry> = ranked
        .into_iter()
        .map(|c| BreakdownEntry::scored(&c.signal.name, c.contribution))
        .collect();

    // Exclusions are already in declaration order.
    entries.extend(
        aggregation
            .excluded
            .iter()
            .map(|e| BreakdownEntry::excluded(&e.name)),
    );

    entries
}

//! Verdict classification - mapping a score to a categorical label

use trustlens_core::{Profile, INDETERMINATE_VERDICT};

/// Pick the first threshold, scanning high to low, whose floor the score
/// meets. Boundary scores belong to the higher tier: a score of exactly 70
/// against a 70-floor tier earns that tier's label.
pub fn classify<'a>(score: u8, profile: &'a Profile) -> &'a str {
    profile
        .verdict_thresholds()
        .iter()
        .find(|tier| tier.min_score <= score)
        .map(|tier| tier.label.as_str())
        // Unreachable for a validated profile (zero floor is enforced),
        // but never panic in the scoring path.
        .unwrap_or(INDETERMINATE_VERDICT)
}

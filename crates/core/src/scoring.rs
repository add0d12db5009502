//! Scoring module - line-clear score and speed-up
//!
//! Each cleared row is worth one point and makes gravity one frame faster,
//! down to `MIN_SPEED_THRESHOLD`.

use crate::types::MIN_SPEED_THRESHOLD;

/// Result of applying a batch of cleared rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineClearResult {
    pub score: u32,
    pub speed_threshold: u32,
}

/// Base speed threshold after clearing `lines` rows
pub fn speed_after_clears(threshold: u32, lines: u32) -> u32 {
    threshold.saturating_sub(lines).max(MIN_SPEED_THRESHOLD.min(threshold))
}

/// Score and base speed threshold after clearing `lines` rows
pub fn apply_line_clears(score: u32, threshold: u32, lines: u32) -> LineClearResult {
    LineClearResult {
        score: score.saturating_add(lines),
        speed_threshold: speed_after_clears(threshold, lines),
    }
}

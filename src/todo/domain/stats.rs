//! Completion statistics derived from scoped counts.

use serde::{Deserialize, Serialize};

/// Raw counts gathered for one owner scope.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    /// Every todo in scope, whatever its status.
    pub total: u64,
    /// Todos with status `pending`.
    pub pending: u64,
    /// Todos with status `underprocess`.
    pub underprocess: u64,
    /// Todos with status `completed`.
    pub completed: u64,
}

/// Completion summary for one owner scope.
///
/// `total` may exceed the sum of the three known counts when todos carry
/// other status values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoStats {
    /// Every todo in scope.
    pub total: u64,
    /// Todos with status `pending`.
    pub pending: u64,
    /// Todos with status `underprocess`.
    pub underprocess: u64,
    /// Todos with status `completed`.
    pub completed: u64,
    /// Share of completed todos, in whole percent.
    pub percentage: u64,
}

impl TodoStats {
    /// Derives the summary, including the completion percentage.
    #[must_use]
    pub const fn from_counts(counts: StatusCounts) -> Self {
        Self {
            total: counts.total,
            pending: counts.pending,
            underprocess: counts.underprocess,
            completed: counts.completed,
            percentage: completion_percentage(counts.completed, counts.total),
        }
    }
}

/// Returns `round(100 * completed / total)` with ties rounded up, or `0`
/// for an empty scope.
const fn completion_percentage(completed: u64, total: u64) -> u64 {
    // round(x / y) == floor((2x + y) / 2y) for non-negative integers.
    let numerator = completed.saturating_mul(200).saturating_add(total);
    let denominator = total.saturating_mul(2);
    match numerator.checked_div(denominator) {
        Some(percentage) => percentage,
        None => 0,
    }
}

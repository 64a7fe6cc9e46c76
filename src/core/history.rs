//! Tier change history tracking.
//!
//! Every state replacement on a user is recorded as a [`TierChange`]. The
//! history is append-only: `record` returns a new history and leaves the
//! original untouched.

use super::tier::Tier;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record of a single state replacement.
///
/// `dropped_subscribers` counts the registrations that belonged to the
/// replaced state. They are not carried over to the new one.
///
/// # Example
///
/// ```rust
/// use tierfeed::core::{Tier, TierChange};
/// use chrono::Utc;
///
/// let change = TierChange {
///     from: Tier::Regular,
///     to: Tier::Premium,
///     timestamp: Utc::now(),
///     dropped_subscribers: 1,
/// };
/// assert_eq!(change.dropped_subscribers, 1);
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct TierChange {
    /// Tier of the replaced state
    pub from: Tier,
    /// Tier of the new state
    pub to: Tier,
    /// When the replacement happened
    pub timestamp: DateTime<Utc>,
    /// Subscribers registered on the replaced state
    pub dropped_subscribers: usize,
}

/// Ordered history of tier changes.
///
/// # Example
///
/// ```rust
/// use tierfeed::core::{Tier, TierChange, TierHistory};
/// use chrono::Utc;
///
/// let history = TierHistory::new();
/// let history = history.record(TierChange {
///     from: Tier::Regular,
///     to: Tier::Premium,
///     timestamp: Utc::now(),
///     dropped_subscribers: 0,
/// });
///
/// assert_eq!(history.get_path(), vec![Tier::Regular, Tier::Premium]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TierHistory {
    changes: Vec<TierChange>,
}

impl TierHistory {
    pub fn new() -> Self {
        Self {
            changes: Vec::new(),
        }
    }

    /// Record a change, returning a new history.
    ///
    /// The existing history is not modified.
    pub fn record(&self, change: TierChange) -> Self {
        let mut changes = self.changes.clone();
        changes.push(change);
        Self { changes }
    }

    /// Tiers traversed, starting with the first change's `from`.
    ///
    /// Empty when nothing has been recorded.
    pub fn get_path(&self) -> Vec<Tier> {
        let mut path = Vec::new();
        if let Some(first) = self.changes.first() {
            path.push(first.from);
        }
        for change in &self.changes {
            path.push(change.to);
        }
        path
    }

    /// Total subscriber registrations lost across all changes.
    pub fn total_dropped(&self) -> usize {
        self.changes.iter().map(|c| c.dropped_subscribers).sum()
    }

    pub fn changes(&self) -> &[TierChange] {
        &self.changes
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}

//! Exportable snapshots of a user.
//!
//! A snapshot captures a user's name, active tier and tier history. It does
//! NOT capture subscribers: they are live capabilities, and a restored user
//! always starts with an empty subscriber list.

use crate::core::{Tier, TierHistory, UserState};
use crate::user::User;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod error;

pub use error::SnapshotError;

/// Version identifier for snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serializable snapshot of a user.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use tierfeed::core::{RecordingSubscriber, Tier, UserState};
/// use tierfeed::snapshot::UserSnapshot;
/// use tierfeed::User;
///
/// let mut alice = User::new("Alice", UserState::regular());
/// alice.subscribe(Arc::new(RecordingSubscriber::new("Bob")));
/// alice.set_state(UserState::premium());
///
/// let json = UserSnapshot::capture(&alice).to_json().unwrap();
/// let restored = UserSnapshot::from_json(&json).unwrap().restore().unwrap();
///
/// assert_eq!(restored.name(), "Alice");
/// assert_eq!(restored.tier(), Tier::Premium);
/// assert_eq!(restored.history().changes().len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserSnapshot {
    /// Snapshot format version
    pub version: u32,

    /// Unique snapshot identifier
    pub id: String,

    /// When the snapshot was taken
    pub taken_at: DateTime<Utc>,

    /// User name
    pub name: String,

    /// Tier of the active state
    pub tier: Tier,

    /// Subscribers registered at capture time (informational only)
    pub subscriber_count: usize,

    /// Complete tier change history
    pub history: TierHistory,
}

impl UserSnapshot {
    /// Capture the current user.
    pub fn capture(user: &User) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            id: uuid::Uuid::new_v4().to_string(),
            taken_at: Utc::now(),
            name: user.name().to_string(),
            tier: user.tier(),
            subscriber_count: user.subscriber_count(),
            history: user.history().clone(),
        }
    }

    /// Rebuild a user from this snapshot with a fresh, empty state.
    pub fn restore(self) -> Result<User, SnapshotError> {
        self.validate()?;
        Ok(User::with_history(
            self.name,
            UserState::new(self.tier),
            self.history,
        ))
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(input: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_str(input)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    pub fn to_binary(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    pub fn from_binary(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let snapshot: Self = bincode::deserialize(bytes)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Reject snapshots that would restore into an inconsistent user.
    ///
    /// The name must be non-blank, and when history is present its last
    /// change must land on the snapshot's tier.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            });
        }

        if self.name.trim().is_empty() {
            return Err(SnapshotError::ValidationFailed(
                "user name must not be blank".to_string(),
            ));
        }

        if let Some(last) = self.history.changes().last() {
            if last.to != self.tier {
                return Err(SnapshotError::ValidationFailed(format!(
                    "tier {} does not match last history entry {}",
                    self.tier, last.to
                )));
            }
        }

        Ok(())
    }
}

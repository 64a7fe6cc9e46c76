//! The user context that delegates to its active state.

use crate::core::{
    FeedError, Publication, Subscriber, SubscriberRef, Tier, TierChange, TierHistory, UserState,
};
use chrono::Utc;
use log::{info, warn};
use std::sync::Arc;

/// A named user whose behavior depends on the state it currently holds.
///
/// Every behavioral call is forwarded to the active [`UserState`].
/// Replacing the state with [`User::set_state`] discards the old state's
/// subscribers.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use tierfeed::core::{RecordingSubscriber, UserState};
/// use tierfeed::User;
///
/// let bob = Arc::new(RecordingSubscriber::new("Bob"));
/// let mut alice = User::new("Alice", UserState::regular());
/// alice.subscribe(bob.clone());
///
/// assert_eq!(alice.post("Hello World").content, "Hello World");
/// assert_eq!(bob.count(), 1);
///
/// alice.set_state(UserState::premium());
/// let publication = alice.post("Hello World");
/// assert_eq!(publication.content, "HELLO WORLD");
/// assert_eq!(publication.notified, 0);
/// assert_eq!(bob.count(), 1);
/// ```
#[derive(Debug)]
pub struct User {
    name: String,
    state: UserState,
    history: TierHistory,
}

impl User {
    pub fn new(name: impl Into<String>, state: UserState) -> Self {
        Self {
            name: name.into(),
            state,
            history: TierHistory::new(),
        }
    }

    pub(crate) fn with_history(name: String, state: UserState, history: TierHistory) -> Self {
        Self {
            name,
            state,
            history,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The active state.
    pub fn state(&self) -> &UserState {
        &self.state
    }

    /// Tier of the active state.
    pub fn tier(&self) -> Tier {
        self.state.tier()
    }

    pub fn subscriber_count(&self) -> usize {
        self.state.subscriber_count()
    }

    /// Every state replacement so far.
    pub fn history(&self) -> &TierHistory {
        &self.history
    }

    /// Replace the active state wholesale.
    ///
    /// Subscribers of the old state are not migrated. Returns the replaced
    /// state so a caller can inspect what was dropped.
    pub fn set_state(&mut self, state: UserState) -> UserState {
        let previous = std::mem::replace(&mut self.state, state);
        let dropped = previous.subscriber_count();

        if dropped > 0 {
            warn!(
                "{}: switching {} -> {} drops {} subscriber(s)",
                self.name,
                previous.tier(),
                self.state.tier(),
                dropped
            );
        } else {
            info!(
                "{}: switching {} -> {}",
                self.name,
                previous.tier(),
                self.state.tier()
            );
        }

        self.history = self.history.record(TierChange {
            from: previous.tier(),
            to: self.state.tier(),
            timestamp: Utc::now(),
            dropped_subscribers: dropped,
        });
        previous
    }

    pub fn post(&mut self, content: &str) -> Publication {
        self.state.post(content)
    }

    pub fn comment(&mut self, content: &str) -> Publication {
        self.state.comment(content)
    }

    pub fn subscribe(&mut self, target: SubscriberRef) {
        self.state.subscribe(target);
    }

    pub fn unsubscribe<T: Subscriber + ?Sized>(
        &mut self,
        target: &Arc<T>,
    ) -> Result<(), FeedError> {
        self.state.unsubscribe(target)
    }
}

//! State variants that carry a user's posting behavior.
//!
//! A [`UserState`] is a tagged variant: its [`Tier`] selects the content
//! transform and its subscriber list is owned exclusively by this instance.
//! Constructing a new state always starts with no subscribers.

use super::error::FeedError;
use super::subscriber::{same_subscriber, ActivityKind, Subscriber, SubscriberRef};
use super::tier::Tier;
use log::{debug, info};
use std::fmt;
use std::sync::Arc;

/// Outcome of a post or comment.
///
/// Displays as the announcement line, e.g. `"Regular user posted: Hello"`.
///
/// # Example
///
/// ```rust
/// use tierfeed::core::UserState;
///
/// let mut state = UserState::premium();
/// let publication = state.post("Hello World");
///
/// assert_eq!(publication.content, "HELLO WORLD");
/// assert_eq!(publication.notified, 0);
/// assert_eq!(publication.to_string(), "Premium user posted: HELLO WORLD");
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Publication {
    /// Whether this was a post or a comment
    pub kind: ActivityKind,
    /// Tier that was active when the content was published
    pub tier: Tier,
    /// Content after the tier's transform
    pub content: String,
    /// How many subscribers were notified
    pub notified: usize,
}

impl fmt::Display for Publication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} user {}: {}",
            self.tier.name(),
            self.kind.verb(),
            self.content
        )
    }
}

/// A behavior variant together with the subscribers registered on it.
///
/// Subscribers are kept in subscription order. Duplicates are allowed.
pub struct UserState {
    tier: Tier,
    subscribers: Vec<SubscriberRef>,
}

impl UserState {
    /// Create a fresh state of the given tier with no subscribers.
    pub fn new(tier: Tier) -> Self {
        Self {
            tier,
            subscribers: Vec::new(),
        }
    }

    /// Fresh regular state.
    pub fn regular() -> Self {
        Self::new(Tier::Regular)
    }

    /// Fresh premium state.
    pub fn premium() -> Self {
        Self::new(Tier::Premium)
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Publish a post, notifying every subscriber with the transformed content.
    pub fn post(&mut self, content: &str) -> Publication {
        self.publish(ActivityKind::Post, content)
    }

    /// Publish a comment, notifying every subscriber with the transformed content.
    pub fn comment(&mut self, content: &str) -> Publication {
        self.publish(ActivityKind::Comment, content)
    }

    /// Append a subscriber to the end of the list.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::sync::Arc;
    /// use tierfeed::core::{RecordingSubscriber, UserState};
    ///
    /// let bob = Arc::new(RecordingSubscriber::new("Bob"));
    /// let mut state = UserState::regular();
    /// state.subscribe(bob.clone());
    ///
    /// state.post("Hello World");
    /// assert_eq!(bob.received()[0].content, "Hello World");
    /// ```
    pub fn subscribe(&mut self, target: SubscriberRef) {
        debug!(
            "{} state: subscribing '{}' ({} already registered)",
            self.tier,
            target.name(),
            self.subscribers.len()
        );
        self.subscribers.push(target);
    }

    /// Remove the first registration of `target`.
    ///
    /// Matching is by handle identity: two distinct subscribers that share a
    /// name are different targets.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::sync::Arc;
    /// use tierfeed::core::{FeedError, RecordingSubscriber, UserState};
    ///
    /// let bob = Arc::new(RecordingSubscriber::new("Bob"));
    /// let mut state = UserState::regular();
    ///
    /// let err = state.unsubscribe(&bob).unwrap_err();
    /// assert_eq!(err, FeedError::SubscriberNotFound { name: "Bob".to_string() });
    /// ```
    pub fn unsubscribe<T: Subscriber + ?Sized>(
        &mut self,
        target: &Arc<T>,
    ) -> Result<(), FeedError> {
        let position = self
            .subscribers
            .iter()
            .position(|entry| same_subscriber(entry, target))
            .ok_or_else(|| FeedError::SubscriberNotFound {
                name: target.name().to_string(),
            })?;

        self.subscribers.remove(position);
        debug!(
            "{} state: unsubscribed '{}' ({} remaining)",
            self.tier,
            target.name(),
            self.subscribers.len()
        );
        Ok(())
    }

    fn publish(&mut self, kind: ActivityKind, content: &str) -> Publication {
        let content = self.tier.transform(content);
        for subscriber in &self.subscribers {
            match kind {
                ActivityKind::Post => subscriber.notify_post(&content),
                ActivityKind::Comment => subscriber.notify_comment(&content),
            }
        }

        let publication = Publication {
            kind,
            tier: self.tier,
            content,
            notified: self.subscribers.len(),
        };
        info!("{} (notified {})", publication, publication.notified);
        publication
    }
}

impl fmt::Debug for UserState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.subscribers.iter().map(|s| s.name()).collect();
        f.debug_struct("UserState")
            .field("tier", &self.tier)
            .field("subscribers", &names)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::subscriber::RecordingSubscriber;

    #[test]
    fn new_state_has_no_subscribers() {
        assert_eq!(UserState::regular().subscriber_count(), 0);
        assert_eq!(UserState::premium().subscriber_count(), 0);
        assert_eq!(UserState::new(Tier::Premium).tier(), Tier::Premium);
    }

    #[test]
    fn regular_post_notifies_with_original_content() {
        let bob = Arc::new(RecordingSubscriber::new("Bob"));
        let mut state = UserState::regular();
        state.subscribe(bob.clone());

        let publication = state.post("Hello World");

        assert_eq!(publication.content, "Hello World");
        assert_eq!(publication.notified, 1);
        assert_eq!(publication.to_string(), "Regular user posted: Hello World");
        let received = bob.received();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].kind, ActivityKind::Post);
        assert_eq!(received[0].content, "Hello World");
    }

    #[test]
    fn premium_comment_notifies_with_uppercase_content() {
        let bob = Arc::new(RecordingSubscriber::new("Bob"));
        let mut state = UserState::premium();
        state.subscribe(bob.clone());

        let publication = state.comment("Nice post!");

        assert_eq!(publication.content, "NICE POST!");
        assert_eq!(publication.to_string(), "Premium user commented: NICE POST!");
        assert_eq!(bob.received()[0].kind, ActivityKind::Comment);
        assert_eq!(bob.received()[0].content, "NICE POST!");
    }

    #[test]
    fn subscribers_are_notified_in_subscription_order() {
        let log = Arc::new(std::sync::Mutex::new(Vec::new()));

        struct Ordered {
            name: String,
            log: Arc<std::sync::Mutex<Vec<String>>>,
        }

        impl Subscriber for Ordered {
            fn name(&self) -> &str {
                &self.name
            }

            fn notify_post(&self, _content: &str) {
                self.log.lock().unwrap().push(self.name.clone());
            }

            fn notify_comment(&self, _content: &str) {}
        }

        let mut state = UserState::regular();
        for name in ["first", "second", "third"] {
            state.subscribe(Arc::new(Ordered {
                name: name.to_string(),
                log: log.clone(),
            }));
        }

        state.post("hi");

        assert_eq!(*log.lock().unwrap(), vec!["first", "second", "third"]);
    }

    #[test]
    fn duplicate_subscription_notifies_twice() {
        let bob = Arc::new(RecordingSubscriber::new("Bob"));
        let mut state = UserState::regular();
        state.subscribe(bob.clone());
        state.subscribe(bob.clone());

        let publication = state.post("twice");

        assert_eq!(publication.notified, 2);
        assert_eq!(bob.count(), 2);
    }

    #[test]
    fn unsubscribe_removes_only_first_occurrence() {
        let bob = Arc::new(RecordingSubscriber::new("Bob"));
        let mut state = UserState::regular();
        state.subscribe(bob.clone());
        state.subscribe(bob.clone());

        state.unsubscribe(&bob).unwrap();

        assert_eq!(state.subscriber_count(), 1);
        state.post("still here");
        assert_eq!(bob.count(), 1);
    }

    #[test]
    fn unsubscribe_missing_target_fails() {
        let bob = Arc::new(RecordingSubscriber::new("Bob"));
        let other_bob = Arc::new(RecordingSubscriber::new("Bob"));
        let mut state = UserState::regular();
        state.subscribe(other_bob);

        let result = state.unsubscribe(&bob);

        assert_eq!(
            result,
            Err(FeedError::SubscriberNotFound {
                name: "Bob".to_string()
            })
        );
        assert_eq!(state.subscriber_count(), 1);
    }

    #[test]
    fn unsubscribe_accepts_trait_object_handle() {
        let bob: SubscriberRef = Arc::new(RecordingSubscriber::new("Bob"));
        let mut state = UserState::premium();
        state.subscribe(bob.clone());

        assert!(state.unsubscribe(&bob).is_ok());
        assert_eq!(state.subscriber_count(), 0);
    }

    #[test]
    fn debug_lists_subscriber_names() {
        let mut state = UserState::regular();
        state.subscribe(Arc::new(RecordingSubscriber::new("Bob")));

        let rendered = format!("{:?}", state);
        assert!(rendered.contains("Regular"));
        assert!(rendered.contains("Bob"));
    }
}

//! Subscriber capability and the stock implementations.
//!
//! A subscriber is notified by the active state variant whenever its user
//! posts or comments. It always receives content that has already been
//! transformed by the active tier.

use std::sync::{Arc, Mutex};

/// Notification target registered with a user's active state.
///
/// # Example
///
/// ```rust
/// use tierfeed::core::Subscriber;
///
/// struct Counter;
///
/// impl Subscriber for Counter {
///     fn name(&self) -> &str {
///         "counter"
///     }
///
///     fn notify_post(&self, _content: &str) {}
///
///     fn notify_comment(&self, _content: &str) {}
/// }
///
/// assert_eq!(Counter.name(), "counter");
/// ```
pub trait Subscriber: Send + Sync {
    /// Display name, used in output lines and error messages.
    fn name(&self) -> &str;

    /// Called once per post with the transformed content.
    fn notify_post(&self, content: &str);

    /// Called once per comment with the transformed content.
    fn notify_comment(&self, content: &str);
}

/// Shared handle to a subscriber.
///
/// The caller keeps a clone of the handle to unsubscribe later; removal
/// matches on the shared allocation, not on the name.
pub type SubscriberRef = Arc<dyn Subscriber>;

/// Whether a subscriber handle points at the same allocation as `target`.
pub(crate) fn same_subscriber<T: Subscriber + ?Sized>(
    entry: &SubscriberRef,
    target: &Arc<T>,
) -> bool {
    Arc::as_ptr(entry).cast::<()>() == Arc::as_ptr(target).cast::<()>()
}

/// Kind of content event a subscriber is told about.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ActivityKind {
    Post,
    Comment,
}

impl ActivityKind {
    /// Past-tense verb used in output lines.
    pub fn verb(&self) -> &'static str {
        match self {
            Self::Post => "posted",
            Self::Comment => "commented",
        }
    }

    /// Noun used in notification lines.
    pub fn noun(&self) -> &'static str {
        match self {
            Self::Post => "post",
            Self::Comment => "comment",
        }
    }
}

/// Subscriber that prints every notification to stdout.
///
/// Lines take the form `"<name> notified of post: <content>"`.
#[derive(Clone, Debug)]
pub struct ConsoleSubscriber {
    name: String,
}

impl ConsoleSubscriber {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Render the line printed for a notification.
    pub fn line(&self, kind: ActivityKind, content: &str) -> String {
        format!("{} notified of {}: {}", self.name, kind.noun(), content)
    }
}

impl Subscriber for ConsoleSubscriber {
    fn name(&self) -> &str {
        &self.name
    }

    fn notify_post(&self, content: &str) {
        println!("{}", self.line(ActivityKind::Post, content));
    }

    fn notify_comment(&self, content: &str) {
        println!("{}", self.line(ActivityKind::Comment, content));
    }
}

/// A notification as received by a [`RecordingSubscriber`].
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Notification {
    pub kind: ActivityKind,
    pub content: String,
}

/// Subscriber that keeps every notification it receives, in order.
///
/// # Example
///
/// ```rust
/// use tierfeed::core::{ActivityKind, RecordingSubscriber, Subscriber};
///
/// let bob = RecordingSubscriber::new("Bob");
/// bob.notify_post("Hello");
/// bob.notify_comment("Nice");
///
/// let received = bob.received();
/// assert_eq!(received.len(), 2);
/// assert_eq!(received[0].kind, ActivityKind::Post);
/// assert_eq!(received[1].content, "Nice");
/// ```
#[derive(Debug, Default)]
pub struct RecordingSubscriber {
    name: String,
    received: Mutex<Vec<Notification>>,
}

impl RecordingSubscriber {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            received: Mutex::new(Vec::new()),
        }
    }

    /// Copy of everything received so far.
    pub fn received(&self) -> Vec<Notification> {
        match self.received.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Number of notifications received so far.
    pub fn count(&self) -> usize {
        match self.received.lock() {
            Ok(guard) => guard.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    fn record(&self, kind: ActivityKind, content: &str) {
        let notification = Notification {
            kind,
            content: content.to_string(),
        };
        match self.received.lock() {
            Ok(mut guard) => guard.push(notification),
            Err(poisoned) => poisoned.into_inner().push(notification),
        }
    }
}

impl Subscriber for RecordingSubscriber {
    fn name(&self) -> &str {
        &self.name
    }

    fn notify_post(&self, content: &str) {
        self.record(ActivityKind::Post, content);
    }

    fn notify_comment(&self, content: &str) {
        self.record(ActivityKind::Comment, content);
    }
}

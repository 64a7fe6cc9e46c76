//! Errors raised by state variants.

use thiserror::Error;

/// Errors that can occur while managing a state's subscribers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FeedError {
    /// The subscriber is not registered with the active state
    #[error("Subscriber '{name}' is not subscribed")]
    SubscriberNotFound { name: String },
}

//! Core posting model.
//!
//! This module contains the State-pattern pieces:
//! - [`Tier`]: the tag selecting a state variant's content transform
//! - [`UserState`]: a variant together with its subscriber list
//! - [`Subscriber`]: the notification capability
//! - [`TierHistory`]: record of state replacements

mod error;
mod history;
mod state;
mod subscriber;
mod tier;

pub use error::FeedError;
pub use history::{TierChange, TierHistory};
pub use state::{Publication, UserState};
pub use subscriber::{
    ActivityKind, ConsoleSubscriber, Notification, RecordingSubscriber, Subscriber, SubscriberRef,
};
pub use tier::Tier;

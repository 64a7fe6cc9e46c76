//! Tierfeed: tiered posting and subscriptions via the State pattern
//!
//! A [`User`] delegates every behavioral call to the state it currently
//! holds. The state's [`Tier`](crate::core::Tier) decides how content is
//! transformed, and the state owns the subscribers that get notified.
//!
//! # Core Concepts
//!
//! - **Tier**: Regular publishes content as written, Premium in uppercase
//! - **UserState**: a tier plus its ordered subscriber list
//! - **Subscriber**: notification capability called on every post or comment
//! - **History**: record of state replacements and the subscribers they dropped
//!
//! Replacing a user's state does not migrate subscribers.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use tierfeed::core::{RecordingSubscriber, UserState};
//! use tierfeed::User;
//!
//! let bob = Arc::new(RecordingSubscriber::new("Bob"));
//! let mut alice = User::new("Alice", UserState::regular());
//! alice.subscribe(bob.clone());
//!
//! let publication = alice.post("Hello World");
//! assert_eq!(publication.to_string(), "Regular user posted: Hello World");
//! assert_eq!(bob.received()[0].content, "Hello World");
//!
//! alice.set_state(UserState::premium());
//! assert_eq!(alice.post("Hello World").notified, 0);
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod snapshot;
mod user;

// Re-export commonly used types
pub use crate::core::{FeedError, Publication, Subscriber, Tier, UserState};
pub use user::User;

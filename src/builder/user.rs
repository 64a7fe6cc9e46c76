//! Builder for constructing users.

use crate::builder::error::BuildError;
use crate::core::{SubscriberRef, Tier, UserState};
use crate::user::User;

/// Builder for constructing users with a fluent API.
pub struct UserBuilder {
    name: Option<String>,
    tier: Tier,
    subscribers: Vec<SubscriberRef>,
}

impl UserBuilder {
    /// Create a new builder. The tier defaults to Regular.
    pub fn new() -> Self {
        Self {
            name: None,
            tier: Tier::default(),
            subscribers: Vec::new(),
        }
    }

    /// Set the user name (required).
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the tier of the initial state.
    pub fn tier(mut self, tier: Tier) -> Self {
        self.tier = tier;
        self
    }

    /// Register a subscriber on the initial state.
    pub fn subscriber(mut self, subscriber: SubscriberRef) -> Self {
        self.subscribers.push(subscriber);
        self
    }

    /// Build the user.
    /// Returns an error if the name is missing or blank.
    pub fn build(self) -> Result<User, BuildError> {
        let name = self.name.ok_or(BuildError::MissingName)?;
        if name.trim().is_empty() {
            return Err(BuildError::EmptyName);
        }

        let mut state = UserState::new(self.tier);
        for subscriber in self.subscribers {
            state.subscribe(subscriber);
        }

        Ok(User::new(name, state))
    }
}

impl Default for UserBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//! Declarative user configuration.

use crate::builder::{BuildError, UserBuilder};
use crate::core::Tier;
use crate::user::User;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while loading a user configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The input was not valid configuration JSON
    #[error("Failed to parse user config: {0}")]
    Parse(String),

    /// The parsed configuration did not describe a valid user
    #[error(transparent)]
    Build(#[from] BuildError),
}

/// Serializable description of a user to create.
///
/// # Example
///
/// ```rust
/// use tierfeed::config::UserConfig;
/// use tierfeed::core::Tier;
///
/// let config = UserConfig::from_json(r#"{ "name": "Alice", "tier": "premium" }"#).unwrap();
/// assert_eq!(config.tier, Tier::Premium);
///
/// let alice = config.into_user().unwrap();
/// assert_eq!(alice.name(), "Alice");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserConfig {
    pub name: String,
    #[serde(default)]
    pub tier: Tier,
}

impl UserConfig {
    pub fn new(name: impl Into<String>, tier: Tier) -> Self {
        Self {
            name: name.into(),
            tier,
        }
    }

    /// Parse a configuration from JSON. A missing `tier` means Regular.
    pub fn from_json(input: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(input).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Build a user with a fresh state of the configured tier.
    pub fn into_user(self) -> Result<User, ConfigError> {
        let user = UserBuilder::new().name(self.name).tier(self.tier).build()?;
        Ok(user)
    }
}

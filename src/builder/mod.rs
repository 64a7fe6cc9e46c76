//! Builder API for ergonomic user construction.

pub mod error;
pub mod user;

pub use error::BuildError;
pub use user::UserBuilder;

use crate::core::Tier;
use crate::user::User;

/// Create a user with a fresh regular state.
///
/// # Example
///
/// ```
/// use tierfeed::builder::regular_user;
/// use tierfeed::core::Tier;
///
/// let alice = regular_user("Alice").unwrap();
/// assert_eq!(alice.tier(), Tier::Regular);
/// ```
pub fn regular_user(name: impl Into<String>) -> Result<User, BuildError> {
    UserBuilder::new().name(name).tier(Tier::Regular).build()
}

/// Create a user with a fresh premium state.
///
/// # Example
///
/// ```
/// use tierfeed::builder::premium_user;
///
/// let mut alice = premium_user("Alice").unwrap();
/// assert_eq!(alice.post("hi").content, "HI");
/// ```
pub fn premium_user(name: impl Into<String>) -> Result<User, BuildError> {
    UserBuilder::new().name(name).tier(Tier::Premium).build()
}

//! The two behavioral tiers a user can be in.
//!
//! A tier is the tag of the active state variant. It owns the pure part of
//! that variant's behavior: its display name and its content transform.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tag identifying which state variant is active for a user.
///
/// # Example
///
/// ```rust
/// use tierfeed::core::Tier;
///
/// assert_eq!(Tier::Regular.transform("Hello World"), "Hello World");
/// assert_eq!(Tier::Premium.transform("Hello World"), "HELLO WORLD");
/// assert_eq!(Tier::Premium.name(), "Premium");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Content is published as written.
    #[default]
    Regular,
    /// Content is published in uppercase.
    Premium,
}

impl Tier {
    /// Display name used in announcement lines.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Regular => "Regular",
            Self::Premium => "Premium",
        }
    }

    /// Apply this tier's content transform.
    ///
    /// Pure: the output depends only on the tier and the input.
    pub fn transform(&self, content: &str) -> String {
        match self {
            Self::Regular => content.to_string(),
            Self::Premium => content.to_uppercase(),
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

//! Build errors for the user builder.

use thiserror::Error;

/// Errors that can occur when building a user.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("User name not specified. Call .name(name) before .build()")]
    MissingName,

    #[error("User name must not be blank")]
    EmptyName,
}

//! Output views for the various functions within Roster.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

mod user;
pub use user::*;

/// A short confirmation returned by the mutating endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct InfoResponse {
    pub info: String,
}

impl InfoResponse {
    pub fn new(info: impl Into<String>) -> Self {
        Self { info: info.into() }
    }
}

/// An error response for an API endpoint. This is used to return errors to the
/// client in a consistent format.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ApiErrorResponse {
    /// An optional error code that can be used to identify the type of error
    /// that occurred.
    pub code: Option<String>,

    /// A human-readable message describing the error that occurred.
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

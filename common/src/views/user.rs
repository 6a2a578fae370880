use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The public-safe view of a user. It never carries the password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// The user's given name.
    pub first_name: String,

    /// The user's family name.
    pub last_name: String,

    /// The user's email address.
    pub email: String,
}

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The full user record as accepted by the create and replace endpoints.
#[derive(Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserParams {
    /// The user's given name.
    pub first_name: String,

    /// The user's family name.
    pub last_name: String,

    /// The user's email address. This is the identity of the record and is
    /// unique across the collection.
    pub email: String,

    /// Stored exactly as provided.
    pub password: String,
}

impl fmt::Debug for UserParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserParams")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

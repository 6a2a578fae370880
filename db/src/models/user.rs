use std::fmt::{self, Display};

use mongodb::bson::oid::ObjectId;
use roster_common::{params::UserParams, views::User};
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DbUser {
    /// Assigned by the store on insert. Never exposed through the API.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

impl fmt::Debug for DbUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbUser")
            .field("id", &self.id)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

impl Display for DbUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DbUser {{ id: {:?}, first_name: {}, last_name: {}, email: {} }}",
            self.id, self.first_name, self.last_name, self.email
        )
    }
}

impl From<UserParams> for DbUser {
    fn from(value: UserParams) -> Self {
        Self {
            id: None,
            first_name: value.first_name,
            last_name: value.last_name,
            email: value.email,
            password: value.password,
        }
    }
}

impl From<DbUser> for User {
    fn from(value: DbUser) -> Self {
        Self {
            first_name: value.first_name,
            last_name: value.last_name,
            email: value.email,
        }
    }
}

use std::time::Duration;

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    Client, Collection, Database, IndexModel,
    bson::doc,
    error::{ErrorKind, WriteFailure},
    options::{ClientOptions, IndexOptions},
};
use tracing::{debug, instrument, warn};

use crate::{
    models::DbUser,
    storage::{Storage, StoreError, UserStore},
};

pub const MONGODB_DEFAULT_DATABASE: &str = "data";
pub const MONGODB_COLLECTION_USERS: &str = "users";
pub const MONGODB_INDEX_USERS_EMAIL: &str = "email_unique";

/// Server-selection timeout applied when the caller does not pick one.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_millis(5000);

const DUPLICATE_KEY_CODE: i32 = 11000;

/// MongoDB-backed storage. The wrapped [`Client`] is a connection pool and is
/// meant to be created once per process and shared.
#[derive(Debug, Clone)]
pub struct MongoDBStorage(Client);

impl MongoDBStorage {
    /// Build the client. No connection is made until the first operation.
    pub async fn new(uri: &str, connect_timeout: Duration) -> Result<Self, StoreError> {
        let mut options = ClientOptions::parse(uri).await?;
        options.server_selection_timeout = Some(connect_timeout);
        options.app_name = Some(env!("CARGO_PKG_NAME").into());

        let client = Client::with_options(options)?;
        Ok(Self(client))
    }

    fn get_db(&self) -> Database {
        self.0
            .default_database()
            .unwrap_or_else(|| self.0.database(MONGODB_DEFAULT_DATABASE))
    }

    /// Ping the server, then hand out the users collection.
    async fn users(&self) -> Result<Collection<DbUser>, StoreError> {
        self.ping().await?;
        Ok(self.get_db().collection::<DbUser>(MONGODB_COLLECTION_USERS))
    }

    /// Create the unique index on `email` that backs conflict detection.
    #[instrument(skip(self))]
    pub async fn ensure_indexes(&self) -> Result<(), StoreError> {
        let index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .name(MONGODB_INDEX_USERS_EMAIL.to_string())
                    .unique(true)
                    .build(),
            )
            .build();

        let created = self.users().await?.create_index(index).await?;
        debug!(index = %created.index_name, "Ensured users index");
        Ok(())
    }

    /// Close every pooled connection. In-flight operations are allowed to
    /// finish first.
    pub async fn shutdown(self) {
        self.0.shutdown().await;
    }
}

impl From<mongodb::error::Error> for StoreError {
    fn from(err: mongodb::error::Error) -> Self {
        match err.kind.as_ref() {
            ErrorKind::ServerSelection { .. } => {
                warn!("Server selection failed: {err}");
                StoreError::Unavailable
            }
            _ => StoreError::MongoDB(err),
        }
    }
}

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    matches!(
        err.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(e)) if e.code == DUPLICATE_KEY_CODE
    )
}

#[async_trait]
impl Storage for MongoDBStorage {
    async fn ping(&self) -> Result<(), StoreError> {
        self.get_db().run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}

#[async_trait]
impl UserStore for MongoDBStorage {
    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<DbUser>, StoreError> {
        let users: Vec<DbUser> = self
            .users()
            .await?
            .find(doc! {})
            .await?
            .try_collect()
            .await?;

        debug!(count = users.len(), "Listed users");
        Ok(users)
    }

    #[instrument(skip(self))]
    async fn get(&self, email: &str) -> Result<DbUser, StoreError> {
        self.users()
            .await?
            .find_one(doc! { "email": email })
            .await?
            .ok_or_else(|| StoreError::not_found(email))
    }

    #[instrument(skip(self, user), fields(email = %user.email))]
    async fn replace(&self, user: DbUser) -> Result<(), StoreError> {
        let result = self
            .users()
            .await?
            .replace_one(doc! { "email": user.email.as_str() }, &user)
            .await?;

        debug!(
            matched = result.matched_count,
            modified = result.modified_count,
            "Replaced user"
        );

        if result.matched_count == 0 {
            return Err(StoreError::not_found(user.email));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, email: &str) -> Result<(), StoreError> {
        let result = self
            .users()
            .await?
            .delete_one(doc! { "email": email })
            .await?;

        if result.deleted_count == 0 {
            return Err(StoreError::not_found(email));
        }

        debug!("Deleted user");
        Ok(())
    }

    #[instrument(skip(self, user), fields(email = %user.email))]
    async fn create(&self, mut user: DbUser) -> Result<DbUser, StoreError> {
        let users = self.users().await?;
        let result = match users.insert_one(&user).await {
            Ok(result) => result,
            Err(err) if is_duplicate_key(&err) => return Err(StoreError::conflict(user.email)),
            Err(err) => return Err(err.into()),
        };

        user.id = result.inserted_id.as_object_id();
        debug!(id = ?user.id, "Created user");

        Ok(user)
    }
}

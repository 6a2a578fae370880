use roster_db::storage::mongodb::{MONGODB_INDEX_USERS_EMAIL, MongoDBStorage};

/// Provision the unique `email` index the API relies on to detect duplicate
/// users. Safe to run repeatedly.
pub async fn ensure_indexes(stg: &MongoDBStorage) -> anyhow::Result<()> {
    stg.ensure_indexes().await?;

    println!("Ensured unique index {MONGODB_INDEX_USERS_EMAIL} on users.email");

    Ok(())
}

//! Storage tests that need no running server. Tests against a live MongoDB
//! are in `mongodb_live.rs`.

use std::time::Duration;

use roster_db::{
    models::DbUser,
    storage::{Storage, StoreError, UserStore, mongodb::MongoDBStorage},
};

const UNREACHABLE_URI: &str = "mongodb://127.0.0.1:1/roster_test";

async fn unreachable() -> MongoDBStorage {
    MongoDBStorage::new(UNREACHABLE_URI, Duration::from_millis(200))
        .await
        .unwrap()
}

fn user(email: &str) -> DbUser {
    DbUser {
        id: None,
        first_name: "A".into(),
        last_name: "B".into(),
        email: email.into(),
        password: "x".into(),
    }
}

#[tokio::test]
async fn test_ping_unreachable_is_unavailable() {
    let storage = unreachable().await;

    assert!(matches!(storage.ping().await, Err(StoreError::Unavailable)));
}

#[tokio::test]
async fn test_every_operation_unreachable_is_unavailable() {
    let storage = unreachable().await;

    assert!(matches!(storage.list().await, Err(StoreError::Unavailable)));
    assert!(matches!(
        storage.get("a@b.com").await,
        Err(StoreError::Unavailable)
    ));
    assert!(matches!(
        storage.replace(user("a@b.com")).await,
        Err(StoreError::Unavailable)
    ));
    assert!(matches!(
        storage.delete("a@b.com").await,
        Err(StoreError::Unavailable)
    ));
    assert!(matches!(
        storage.create(user("a@b.com")).await,
        Err(StoreError::Unavailable)
    ));
}

#[tokio::test]
async fn test_invalid_uri_is_rejected() {
    let result = MongoDBStorage::new("not-a-uri", Duration::from_millis(200)).await;

    assert!(matches!(result, Err(StoreError::MongoDB(_))));
}

use std::{
    collections::BTreeMap,
    sync::{
        Arc, Mutex,
        atomic::{AtomicBool, Ordering},
    },
};

use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use clap::Parser;
use roster_api::{config::ApiConfig, server};
use roster_db::{
    models::DbUser,
    storage::{Storage, StoreError, UserStore},
};
use serde_json::Value;
use tower::ServiceExt;

/// In-memory stand-in for the MongoDB storage, keyed by email like the
/// unique index. `set_reachable(false)` makes every operation fail the
/// liveness check.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    users: Mutex<BTreeMap<String, DbUser>>,
    unreachable: AtomicBool,
}

impl MemoryStorage {
    pub fn set_reachable(&self, reachable: bool) {
        self.unreachable.store(!reachable, Ordering::SeqCst);
    }

    pub fn snapshot(&self) -> BTreeMap<String, DbUser> {
        self.users.lock().unwrap().clone()
    }

    fn check_reachable(&self) -> Result<(), StoreError> {
        if self.unreachable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable);
        }
        Ok(())
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn ping(&self) -> Result<(), StoreError> {
        self.check_reachable()
    }
}

#[async_trait]
impl UserStore for MemoryStorage {
    async fn list(&self) -> Result<Vec<DbUser>, StoreError> {
        self.check_reachable()?;
        Ok(self.users.lock().unwrap().values().cloned().collect())
    }

    async fn get(&self, email: &str) -> Result<DbUser, StoreError> {
        self.check_reachable()?;
        self.users
            .lock()
            .unwrap()
            .get(email)
            .cloned()
            .ok_or_else(|| StoreError::not_found(email))
    }

    async fn replace(&self, user: DbUser) -> Result<(), StoreError> {
        self.check_reachable()?;
        let mut users = self.users.lock().unwrap();
        match users.get_mut(&user.email) {
            Some(existing) => {
                *existing = DbUser {
                    id: existing.id,
                    ..user
                };
                Ok(())
            }
            None => Err(StoreError::not_found(user.email)),
        }
    }

    async fn delete(&self, email: &str) -> Result<(), StoreError> {
        self.check_reachable()?;
        self.users
            .lock()
            .unwrap()
            .remove(email)
            .map(|_| ())
            .ok_or_else(|| StoreError::not_found(email))
    }

    async fn create(&self, mut user: DbUser) -> Result<DbUser, StoreError> {
        self.check_reachable()?;
        let mut users = self.users.lock().unwrap();
        if users.contains_key(&user.email) {
            return Err(StoreError::conflict(user.email));
        }
        user.id = Some(mongodb::bson::oid::ObjectId::new());
        users.insert(user.email.clone(), user.clone());
        Ok(user)
    }
}

pub fn app() -> (Router, Arc<MemoryStorage>) {
    let storage = Arc::new(MemoryStorage::default());
    let config = ApiConfig::parse_from(["roster-api"]);
    let (router, _) = server::make(config, storage.clone());
    (router, storage)
}

pub async fn send(
    router: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };

    (status, value)
}

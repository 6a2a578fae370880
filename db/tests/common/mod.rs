use std::time::Duration;

use anyhow::Result;
use roster_db::storage::mongodb::MongoDBStorage;
use testcontainers::{ContainerAsync, runners::AsyncRunner};
use testcontainers_modules::mongo::Mongo;

const MONGODB_PORT: u16 = 27017;

/// A storage handle over a throwaway MongoDB container. The container is
/// removed when this is dropped.
pub struct MongoUnderTest {
    pub storage: MongoDBStorage,
    _container: ContainerAsync<Mongo>,
}

pub async fn bring_up_mongodb() -> Result<MongoUnderTest> {
    let container = Mongo::default().start().await?;
    let port = container.get_host_port_ipv4(MONGODB_PORT).await?;

    let uri = format!("mongodb://127.0.0.1:{port}/roster_test");
    let storage = MongoDBStorage::new(&uri, Duration::from_secs(10)).await?;
    storage.ensure_indexes().await?;

    Ok(MongoUnderTest {
        storage,
        _container: container,
    })
}

use std::sync::Arc;

use roster_db::storage::Storage;

#[derive(Debug, Clone)]
pub struct ApiContext {
    pub _config: crate::config::ApiConfig,
    pub db: Arc<dyn Storage>,
}

impl ApiContext {
    pub fn new(config: crate::config::ApiConfig, db: Arc<dyn Storage>) -> Self {
        Self {
            _config: config,
            db,
        }
    }
}

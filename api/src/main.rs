use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use roster_api::{config::ApiConfig, server};
use roster_db::storage::mongodb::MongoDBStorage;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ApiConfig::parse();

    if !config.dump_openapi {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or("roster_api=info,roster_db=info,tower_http=info".into()),
            )
            .pretty()
            .init();
    }

    let storage = MongoDBStorage::new(&config.mongodb_uri, config.connect_timeout())
        .await
        .context("Failed to configure MongoDB client")?;

    let (router, api) = server::make(config.clone(), Arc::new(storage.clone()));

    if config.dump_openapi {
        let json = api.to_pretty_json()?;
        print!("{}", json);
        return Ok(());
    }

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_addr))?;

    info!("Listening on http://{:?}", config.bind_addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Failed to start server")?;

    info!("Server stopped, closing database connections");
    storage.shutdown().await;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}

use clap::Parser;
use roster_db::storage::mongodb::DEFAULT_CONNECT_TIMEOUT;
use std::{net::SocketAddr, time::Duration};

#[derive(Clone, Debug, Parser)]
#[command(version, about = "HTTP service over the Roster user collection")]
pub struct ApiConfig {
    #[clap(
        short,
        long,
        env = "ROSTER_API_BIND_ADDR",
        default_value = "0.0.0.0:8000"
    )]
    pub bind_addr: SocketAddr,

    /// Origin allowed by CORS.
    #[clap(
        long,
        env = "ROSTER_API_PUBLIC_URL",
        default_value = "http://localhost:8000"
    )]
    pub public_url: String,

    #[clap(long, default_value_t = false)]
    pub dump_openapi: bool,

    /// Connection string for the backing store. The database named in the
    /// path holds the `users` collection.
    #[clap(
        long,
        env = "ROSTER_API_MONGODB_URI",
        default_value = "mongodb://localhost:27017/data"
    )]
    pub mongodb_uri: String,

    /// How long an operation waits for a reachable server before the
    /// request fails with 503.
    #[clap(
        long,
        env = "ROSTER_API_CONNECT_TIMEOUT_MS",
        default_value_t = DEFAULT_CONNECT_TIMEOUT.as_millis() as u64
    )]
    pub connect_timeout_ms: u64,
}

impl ApiConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }
}

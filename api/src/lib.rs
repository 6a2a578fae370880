//! Roster API service.
//!
//! Exposes create, read, replace and delete endpoints over the user
//! collection. See [`config::ApiConfig`] for configuration options and
//! [`server::make`] for the router.

pub mod config;
pub mod server;

pub(crate) mod context;
pub(crate) mod error;
pub(crate) mod handlers;

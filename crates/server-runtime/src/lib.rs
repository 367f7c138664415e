//! # Dataplane Server Runtime
//!
//! The host application around the ingestion core:
//!
//! - `config` - runtime configuration with env overrides and validation
//! - `adapters` - production port implementations (reqwest data-lake
//!   client, file-backed block store)
//! - `routes` - the axum HTTP surface

pub mod adapters;
pub mod config;
pub mod routes;

pub use adapters::{FileBackedBlockStore, HttpDataLakeClient};
pub use config::ServerConfig;

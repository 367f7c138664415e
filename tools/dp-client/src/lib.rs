//! DP-Client: Dataplane command-line client.
//!
//! A thin HTTP client over the data server's three endpoints, with the
//! `Content-MD5` digest computed locally before each push.

pub mod api;

pub use api::{ApiError, DataServerClient};

//! API client module for talking to the data server's HTTP surface.

mod client;

pub use client::{ApiError, DataServerClient};

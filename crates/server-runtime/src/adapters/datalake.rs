//! Data-lake client over a shared, connection-pooled HTTP client.
//!
//! One `reqwest::Client` is built at startup with explicit connect and
//! total timeouts and injected into the relay sink. Per-call client
//! construction is deliberately absent: the pool lives as long as the
//! process.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use dp_ingestion::{DataLakeClient, RelayError};

/// Production data-lake client.
pub struct HttpDataLakeClient {
    client: Client,
    endpoint: String,
}

impl HttpDataLakeClient {
    /// Build the long-lived client.
    ///
    /// `request_timeout` bounds the whole exchange; a hung downstream
    /// resolves as [`RelayError::Timeout`] instead of pinning a relay
    /// worker forever.
    pub fn new(
        endpoint: impl Into<String>,
        connect_timeout: Duration,
        request_timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(request_timeout)
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl DataLakeClient for HttpDataLakeClient {
    async fn push(&self, payload: &[u8]) -> Result<u16, RelayError> {
        let response = self
            .client
            .post(&self.endpoint)
            .body(payload.to_vec())
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    RelayError::Timeout
                } else if e.is_connect() {
                    RelayError::Connect(format!("cannot connect to {}", self.endpoint))
                } else {
                    RelayError::Other(e.to_string())
                }
            })?;

        Ok(response.status().as_u16())
    }
}

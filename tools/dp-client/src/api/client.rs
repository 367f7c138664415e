//! HTTP client for the data server endpoints.

use std::str::FromStr;
use std::time::Duration;

use md5::{Digest, Md5};
use reqwest::Client;
use thiserror::Error;

use shared_types::{BlockType, DataBody, DataEnvelope, DataHeader};

/// Errors that can occur when talking to the data server.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Connection failed: {0}")]
    Connection(String),
    #[error("Failed to parse response: {0}")]
    Parse(String),
    #[error("Invalid block type: {0}")]
    InvalidBlockType(String),
    #[error("Server rejected request: HTTP {0}")]
    Status(u16),
}

/// Client for a running data server.
pub struct DataServerClient {
    client: Client,
    base_url: String,
}

impl DataServerClient {
    /// Create a client against `base_url` (e.g. `http://127.0.0.1:8080`).
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(5))
            .connect_timeout(Duration::from_secs(2))
            .build()
            .map_err(ApiError::Http)?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Push one data block. Computes the MD5 digest of the body and sends
    /// it in the `Content-MD5` header. Returns the server's verdict.
    pub async fn push_data(
        &self,
        name: &str,
        block_type: &str,
        body: &str,
    ) -> Result<bool, ApiError> {
        let block_type = BlockType::from_str(block_type)
            .map_err(|e| ApiError::InvalidBlockType(e.to_string()))?;
        let envelope = DataEnvelope::new(
            DataHeader::new(name, block_type),
            DataBody::new(body),
        );
        let digest = hex::encode(Md5::digest(body.as_bytes()));

        let response = self
            .client
            .post(format!("{}/dataserver/pushdata", self.base_url))
            .header("Content-MD5", digest)
            .json(&envelope)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        Self::decode_bool(response).await
    }

    /// Fetch every envelope stored under `block_type`.
    pub async fn get_data(&self, block_type: &str) -> Result<Vec<DataEnvelope>, ApiError> {
        let response = self
            .client
            .get(format!("{}/dataserver/data/{}", self.base_url, block_type))
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status().as_u16()));
        }
        response
            .json::<Vec<DataEnvelope>>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// Reclassify the block named `name` to `new_block_type`. Returns
    /// whether any record was updated.
    pub async fn update_data(&self, name: &str, new_block_type: &str) -> Result<bool, ApiError> {
        let response = self
            .client
            .get(format!(
                "{}/dataserver/update/{}/{}",
                self.base_url, name, new_block_type
            ))
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        Self::decode_bool(response).await
    }

    fn classify(&self, e: reqwest::Error) -> ApiError {
        if e.is_connect() {
            ApiError::Connection(format!("Cannot connect to {}", self.base_url))
        } else {
            ApiError::Http(e)
        }
    }

    async fn decode_bool(response: reqwest::Response) -> Result<bool, ApiError> {
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status().as_u16()));
        }
        response
            .json::<bool>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
}

//! Error taxonomy for the ingestion subsystem.
//!
//! Only two failures cross the crate boundary as errors: a storage engine
//! failure and an invalid block type on reclassification. Checksum
//! mismatch and not-found are expected business states and are modeled as
//! ordinary `false` / empty results, never as errors.

use shared_types::BlockTypeParseError;
use thiserror::Error;

/// Storage engine failure. Propagated as-is; this crate attempts no
/// recovery and leaves retry policy to the caller.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("store I/O error: {message}")]
    Io { message: String },

    #[error("record encoding error: {message}")]
    Codec { message: String },
}

/// Errors surfaced by the ingestion API.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Caller supplied a block type name outside the closed enum where a
    /// valid member is required.
    #[error(transparent)]
    InvalidBlockType(#[from] BlockTypeParseError),

    #[error(transparent)]
    Storage(#[from] StoreError),
}

/// Transport-level relay failure, as reported by the data-lake client.
///
/// Remote failures (downstream 4xx/5xx) are not errors at this seam: the
/// client returns the status code and the sink classifies it.
#[derive(Debug, Clone, Error)]
pub enum RelayError {
    #[error("connect failed: {0}")]
    Connect(String),

    #[error("request timed out")]
    Timeout,

    #[error("transport failure: {0}")]
    Other(String),
}

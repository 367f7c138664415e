//! # Inbound Ports (Driving Ports)
//!
//! The primary API of the ingestion subsystem, consumed by the HTTP layer
//! and the test suite.

use shared_types::DataEnvelope;

use crate::domain::errors::IngestError;

/// Primary API for block ingestion and lookup.
///
/// Implementations must uphold the pipeline ordering: verify before
/// persist, persist before relay dispatch, and never await the relay on
/// the caller's path.
pub trait IngestionApi: Send + Sync {
    /// Ingest one data block.
    ///
    /// Returns `Ok(true)` when the supplied checksum matches the body and
    /// the record was persisted; the relay of the accepted payload is
    /// dispatched after persistence and its outcome never affects this
    /// result. Returns `Ok(false)` on checksum mismatch, in which case
    /// nothing is persisted and nothing is relayed.
    ///
    /// ## Errors
    ///
    /// - `Storage`: the persistence engine failed the write.
    fn ingest(&self, envelope: &DataEnvelope, supplied_checksum: &str)
        -> Result<bool, IngestError>;

    /// Return all blocks of the given logical type.
    ///
    /// A type name outside the closed enum matches nothing and yields an
    /// empty list, not an error.
    fn query_by_type(&self, block_type: &str) -> Result<Vec<DataEnvelope>, IngestError>;

    /// Change the logical type of the block with the given name.
    ///
    /// Returns `Ok(false)` when no block has that name (no write is
    /// performed). When several records share the name, only the first
    /// match is affected.
    ///
    /// ## Errors
    ///
    /// - `InvalidBlockType`: `new_block_type` is not a member of the
    ///   closed enum; the store is left untouched.
    /// - `Storage`: the persistence engine failed the lookup or write.
    fn reclassify(&self, name: &str, new_block_type: &str) -> Result<bool, IngestError>;
}

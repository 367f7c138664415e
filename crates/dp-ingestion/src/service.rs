//! # Ingestion Service
//!
//! The application service implementing [`IngestionApi`].
//!
//! ## Pipeline per ingestion
//!
//! 1. **Received** - compute the MD5 digest over the body bytes.
//! 2. Checksum mismatch - **Rejected**: no persistence, no relay, caller
//!    gets `false`.
//! 3. Checksum pass - map the envelope to a record and persist it
//!    (blocking) - **Accepted**: caller gets `true` before the relay
//!    completes.
//! 4. On Accepted, dispatch the relay of the body bytes through the
//!    [`RelaySink`]; its outcome never alters the already-returned result.
//!
//! ## Thread Safety
//!
//! The service is shared across request tasks via `Arc`; the store adapter
//! carries its own interior locking.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::{debug, info};

use shared_types::{BlockType, DataEnvelope, Timestamp};

use crate::domain::checksum::verify_checksum;
use crate::domain::errors::IngestError;
use crate::domain::mapping::{envelope_to_record, record_to_envelope};
use crate::ports::inbound::IngestionApi;
use crate::ports::outbound::{BlockStore, DataLakeClient};
use crate::relay::RelaySink;

/// Ingestion service, generic over its two driven ports.
///
/// - `S: BlockStore` - persistence of block records
/// - `L: DataLakeClient` - downstream bulk-storage exchange
pub struct IngestionService<S, L>
where
    S: BlockStore,
    L: DataLakeClient + 'static,
{
    store: Arc<S>,
    relay: RelaySink<L>,
}

impl<S, L> IngestionService<S, L>
where
    S: BlockStore,
    L: DataLakeClient + 'static,
{
    pub fn new(store: Arc<S>, relay: RelaySink<L>) -> Self {
        Self { store, relay }
    }

    /// Current timestamp in seconds since epoch.
    fn now_secs() -> Timestamp {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    }
}

impl<S, L> IngestionApi for IngestionService<S, L>
where
    S: BlockStore,
    L: DataLakeClient + 'static,
{
    fn ingest(
        &self,
        envelope: &DataEnvelope,
        supplied_checksum: &str,
    ) -> Result<bool, IngestError> {
        let name = envelope.data_header.name.as_str();

        if !verify_checksum(envelope.data_body.as_bytes(), supplied_checksum) {
            info!(name, "checksum mismatch, block rejected");
            return Ok(false);
        }

        let record = envelope_to_record(envelope, Self::now_secs());
        self.store.save(record)?;
        info!(name, "block persisted");

        // Persistence happens-before relay dispatch; the handle is dropped,
        // the worker logs its own outcome.
        let _ = self
            .relay
            .forward(envelope.data_body.as_bytes().to_vec());

        Ok(true)
    }

    fn query_by_type(&self, block_type: &str) -> Result<Vec<DataEnvelope>, IngestError> {
        debug!(block_type, "querying blocks by type");

        // An unknown type name matches nothing; only a real member reaches
        // the store.
        let Ok(parsed) = block_type.parse::<BlockType>() else {
            return Ok(Vec::new());
        };

        let records = self.store.find_by_type(parsed)?;
        Ok(records.iter().map(record_to_envelope).collect())
    }

    fn reclassify(&self, name: &str, new_block_type: &str) -> Result<bool, IngestError> {
        info!(name, new_block_type, "reclassifying block");

        // Parse failure is a caller contract violation: fail before any
        // store access.
        let parsed: BlockType = new_block_type.parse()?;

        let matches = self.store.find_by_name(name)?;
        let Some(first) = matches.into_iter().next() else {
            return Ok(false);
        };

        let mut updated = first;
        updated.header.block_type = parsed;
        self.store.save(updated)?;
        Ok(true)
    }
}

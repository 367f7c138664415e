//! # Outbound Ports (Driven Ports)
//!
//! Dependencies the ingestion service requires the host application to
//! provide: a block store and a data-lake client.

use async_trait::async_trait;
use parking_lot::RwLock;
use shared_types::{BlockRecord, BlockType};

use crate::domain::errors::{RelayError, StoreError};

/// Abstract interface for block record persistence.
///
/// Production: `FileBackedBlockStore` (server-runtime/src/adapters/store.rs)
/// Testing: `InMemoryBlockStore` (below)
///
/// Operations are synchronous and block until the engine acknowledges.
/// The store enforces no business rules; it does enforce `name`
/// uniqueness by treating `save` as an upsert keyed on the record name.
pub trait BlockStore: Send + Sync {
    /// Upsert a record, keyed on `header.name`.
    fn save(&self, record: BlockRecord) -> Result<(), StoreError>;

    /// All records whose header matches `block_type`, in insertion order.
    /// Empty when nothing matches.
    fn find_by_type(&self, block_type: BlockType) -> Result<Vec<BlockRecord>, StoreError>;

    /// Records matching the exact name. The domain expects at most one,
    /// but the contract allows a permissive store to return several.
    fn find_by_name(&self, name: &str) -> Result<Vec<BlockRecord>, StoreError>;
}

/// Abstract interface for the downstream bulk-storage endpoint.
///
/// Production: `HttpDataLakeClient` (server-runtime/src/adapters/datalake.rs)
/// over a single long-lived, connection-pooled HTTP client.
///
/// Returns the remote status code on any completed exchange; only
/// transport-level failures (connect, timeout) are errors at this seam.
#[async_trait]
pub trait DataLakeClient: Send + Sync {
    async fn push(&self, payload: &[u8]) -> Result<u16, RelayError>;
}

/// In-memory block store for unit tests and default wiring.
///
/// Insertion-ordered; `save` replaces in place when the name already
/// exists, so duplicates cannot arise from this store.
#[derive(Default)]
pub struct InMemoryBlockStore {
    records: RwLock<Vec<BlockRecord>>,
}

impl InMemoryBlockStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

impl BlockStore for InMemoryBlockStore {
    fn save(&self, record: BlockRecord) -> Result<(), StoreError> {
        let mut records = self.records.write();
        match records.iter_mut().find(|r| r.header.name == record.header.name) {
            Some(existing) => *existing = record,
            None => records.push(record),
        }
        Ok(())
    }

    fn find_by_type(&self, block_type: BlockType) -> Result<Vec<BlockRecord>, StoreError> {
        Ok(self
            .records
            .read()
            .iter()
            .filter(|r| r.header.block_type == block_type)
            .cloned()
            .collect())
    }

    fn find_by_name(&self, name: &str) -> Result<Vec<BlockRecord>, StoreError> {
        Ok(self
            .records
            .read()
            .iter()
            .filter(|r| r.header.name == name)
            .cloned()
            .collect())
    }
}

//! File-backed block store.
//!
//! Records are held in memory and snapshotted to a bincode file on every
//! write, via a temp-file rename so a crash mid-write never corrupts the
//! previous snapshot. Suitable for the single-writer scale of this
//! service; the engine provides per-write atomicity, nothing more.

use std::io::Write;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use tracing::info;

use dp_ingestion::{BlockStore, StoreError};
use shared_types::{BlockRecord, BlockType};

/// Durable block store keyed on record name.
#[derive(Debug)]
pub struct FileBackedBlockStore {
    records: RwLock<Vec<BlockRecord>>,
    path: PathBuf,
}

impl FileBackedBlockStore {
    /// Open the store, loading any existing snapshot.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        let records = match std::fs::read(&path) {
            Ok(bytes) => bincode::deserialize::<Vec<BlockRecord>>(&bytes).map_err(|e| {
                StoreError::Codec {
                    message: e.to_string(),
                }
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                return Err(StoreError::Io {
                    message: e.to_string(),
                })
            }
        };

        if records.is_empty() {
            info!(path = %path.display(), "block store starting empty");
        } else {
            info!(path = %path.display(), count = records.len(), "block store loaded");
        }

        Ok(Self {
            records: RwLock::new(records),
            path,
        })
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    /// Snapshot the current records, atomically via temp-file rename.
    fn persist(&self, records: &[BlockRecord]) -> Result<(), StoreError> {
        let bytes = bincode::serialize(records).map_err(|e| StoreError::Codec {
            message: e.to_string(),
        })?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(io_err)?;
            }
        }

        let temp_path = self.path.with_extension("tmp");
        let mut file = std::fs::File::create(&temp_path).map_err(io_err)?;
        file.write_all(&bytes).map_err(io_err)?;
        file.sync_all().map_err(io_err)?;
        std::fs::rename(&temp_path, &self.path).map_err(io_err)?;

        Ok(())
    }
}

fn io_err(e: std::io::Error) -> StoreError {
    StoreError::Io {
        message: e.to_string(),
    }
}

impl BlockStore for FileBackedBlockStore {
    fn save(&self, record: BlockRecord) -> Result<(), StoreError> {
        let mut records = self.records.write();
        match records
            .iter_mut()
            .find(|r| r.header.name == record.header.name)
        {
            Some(existing) => *existing = record,
            None => records.push(record),
        }
        self.persist(&records)
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

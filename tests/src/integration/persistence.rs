//! # Persistence Across Restarts
//!
//! Ingests through the service into the production file-backed store,
//! drops everything, reopens from the same path, and reads back.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;

    use dp_ingestion::{
        md5_hex, DataLakeClient, IngestionApi, IngestionService, RelayError, RelaySink,
    };
    use server_runtime::FileBackedBlockStore;
    use shared_types::{BlockType, DataBody, DataEnvelope, DataHeader};

    struct NullLake;

    #[async_trait]
    impl DataLakeClient for NullLake {
        async fn push(&self, _payload: &[u8]) -> Result<u16, RelayError> {
            Ok(200)
        }
    }

    fn envelope(name: &str, block_type: BlockType, body: &str) -> DataEnvelope {
        DataEnvelope::new(DataHeader::new(name, block_type), DataBody::new(body))
    }

    #[tokio::test]
    async fn test_blocks_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blocks.bin");

        {
            let store = Arc::new(FileBackedBlockStore::open(&path).unwrap());
            let service =
                IngestionService::new(store, RelaySink::new(Arc::new(NullLake), 2));

            service
                .ingest(
                    &envelope("block1", BlockType::BlockTypeA, "hello"),
                    &md5_hex(b"hello"),
                )
                .unwrap();
            service
                .ingest(
                    &envelope("block2", BlockType::BlockTypeB, "world"),
                    &md5_hex(b"world"),
                )
                .unwrap();
        }

        // Fresh process view over the same file.
        let store = Arc::new(FileBackedBlockStore::open(&path).unwrap());
        assert_eq!(store.len(), 2);
        let service = IngestionService::new(store, RelaySink::new(Arc::new(NullLake), 2));

        let type_a = service.query_by_type("BLOCKTYPEA").unwrap();
        assert_eq!(type_a.len(), 1);
        assert_eq!(type_a[0].data_header.name, "block1");
        assert_eq!(type_a[0].data_body.data, "hello");
    }

    #[tokio::test]
    async fn test_reclassification_is_durable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blocks.bin");

        {
            let store = Arc::new(FileBackedBlockStore::open(&path).unwrap());
            let service =
                IngestionService::new(store, RelaySink::new(Arc::new(NullLake), 2));
            service
                .ingest(
                    &envelope("block1", BlockType::BlockTypeA, "hello"),
                    &md5_hex(b"hello"),
                )
                .unwrap();
            assert!(service.reclassify("block1", "BLOCKTYPEB").unwrap());
        }

        let store = Arc::new(FileBackedBlockStore::open(&path).unwrap());
        let service = IngestionService::new(store, RelaySink::new(Arc::new(NullLake), 2));
        assert!(service.query_by_type("BLOCKTYPEA").unwrap().is_empty());
        assert_eq!(service.query_by_type("BLOCKTYPEB").unwrap().len(), 1);
    }
}

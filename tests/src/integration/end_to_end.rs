//! # End-to-End Ingestion Lifecycle
//!
//! Exercises the full block lifecycle through the application service:
//!
//! 1. Push a checksummed envelope and observe acceptance
//! 2. Query it back by type
//! 3. Reclassify it by name and observe the type move
//! 4. A failing relay sink never changes any of the above

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;

    use dp_ingestion::{
        md5_hex, DataLakeClient, IngestionApi, IngestionService, InMemoryBlockStore, RelayError,
        RelaySink,
    };
    use shared_types::{BlockType, DataBody, DataEnvelope, DataHeader};

    /// Sink that always reports a downstream server error.
    struct ServerErrorLake;

    #[async_trait]
    impl DataLakeClient for ServerErrorLake {
        async fn push(&self, _payload: &[u8]) -> Result<u16, RelayError> {
            Ok(500)
        }
    }

    /// Sink that always delivers.
    struct HealthyLake;

    #[async_trait]
    impl DataLakeClient for HealthyLake {
        async fn push(&self, _payload: &[u8]) -> Result<u16, RelayError> {
            Ok(200)
        }
    }

    fn envelope(name: &str, block_type: BlockType, body: &str) -> DataEnvelope {
        DataEnvelope::new(DataHeader::new(name, block_type), DataBody::new(body))
    }

    fn service_with<L: DataLakeClient + 'static>(
        lake: L,
    ) -> IngestionService<InMemoryBlockStore, L> {
        IngestionService::new(
            Arc::new(InMemoryBlockStore::new()),
            RelaySink::new(Arc::new(lake), 4),
        )
    }

    #[tokio::test]
    async fn test_full_block_lifecycle() {
        let service = service_with(HealthyLake);
        let envelope = envelope("block1", BlockType::BlockTypeA, "hello");

        // Known digest of b"hello".
        let accepted = service
            .ingest(&envelope, "5d41402abc4b2a76b9719d911017c592")
            .unwrap();
        assert!(accepted);

        // Query by original type.
        let type_a = service.query_by_type("BLOCKTYPEA").unwrap();
        assert_eq!(type_a.len(), 1);
        assert_eq!(type_a[0].data_header.name, "block1");
        assert_eq!(type_a[0].data_body.data, "hello");

        // Move it to the other type.
        let updated = service.reclassify("block1", "BLOCKTYPEB").unwrap();
        assert!(updated);

        // The record changed type, it did not duplicate.
        assert!(service.query_by_type("BLOCKTYPEA").unwrap().is_empty());
        let type_b = service.query_by_type("BLOCKTYPEB").unwrap();
        assert_eq!(type_b.len(), 1);
        assert_eq!(type_b[0].data_header.name, "block1");
    }

    #[tokio::test]
    async fn test_rejected_ingest_leaves_no_trace() {
        let service = service_with(HealthyLake);
        let envelope = envelope("block1", BlockType::BlockTypeA, "hello");

        let accepted = service
            .ingest(&envelope, "00000000000000000000000000000000")
            .unwrap();
        assert!(!accepted);

        assert!(service.query_by_type("BLOCKTYPEA").unwrap().is_empty());
        assert!(!service.reclassify("block1", "BLOCKTYPEB").unwrap());
    }

    #[tokio::test]
    async fn test_downstream_server_error_does_not_change_outcome() {
        let healthy = service_with(HealthyLake);
        let broken = service_with(ServerErrorLake);
        let envelope = envelope("block1", BlockType::BlockTypeA, "hello");
        let digest = md5_hex(b"hello");

        let a = healthy.ingest(&envelope, &digest).unwrap();
        let b = broken.ingest(&envelope, &digest).unwrap();
        assert_eq!(a, b);
        assert!(b);

        // Storage happened regardless of the relay verdict.
        assert_eq!(broken.query_by_type("BLOCKTYPEA").unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_reingest_same_name_replaces_record() {
        let service = service_with(HealthyLake);

        let first = envelope("block1", BlockType::BlockTypeA, "hello");
        service.ingest(&first, &md5_hex(b"hello")).unwrap();

        let second = envelope("block1", BlockType::BlockTypeA, "world");
        service.ingest(&second, &md5_hex(b"world")).unwrap();

        let type_a = service.query_by_type("BLOCKTYPEA").unwrap();
        assert_eq!(type_a.len(), 1);
        assert_eq!(type_a[0].data_body.data, "world");
    }
}

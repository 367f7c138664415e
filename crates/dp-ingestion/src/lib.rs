//! # Ingestion Core (dp-ingestion)
//!
//! The ingestion subsystem is the core of the Dataplane platform: it
//! verifies the integrity of incoming data blocks, persists accepted
//! records, and relays accepted payloads to the downstream bulk-storage
//! sink without ever blocking the caller on that relay.
//!
//! ## Pipeline
//!
//! ```text
//! caller ──ingest(envelope, checksum)──→ IngestionService
//!                                            │
//!                       checksum mismatch ←──┤──→ verify (MD5, pure)
//!                       Ok(false), no I/O    │
//!                                            ├──→ BlockStore::save (blocking)
//!                                            │
//!                                            └──→ RelaySink::forward (spawned,
//!                                                 never awaited by the caller)
//! ```
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Description |
//! |----|-----------|-------------|
//! | 1 | Verify-Before-Persist | A rejected checksum performs no store write and no relay |
//! | 2 | Persist-Before-Relay | Persistence happens-before relay dispatch |
//! | 3 | Relay Isolation | Relay failures are logged, never surfaced to the caller |
//! | 4 | Closed Classification | `block_type` is always a member of the closed enum |
//! | 5 | Immutable Body | Only `block_type` is mutable after creation |
//!
//! ## Crate Structure (Hexagonal Architecture)
//!
//! - `domain/` - Pure logic (checksum, envelope/record mapping, errors)
//! - `ports/` - Port traits (inbound API, outbound SPI) plus in-memory adapters
//! - `relay.rs` - Bounded fire-and-forget forwarder to the data lake
//! - `service.rs` - Application service implementing the API

pub mod domain;
pub mod ports;
pub mod relay;
pub mod service;

pub use domain::checksum::{md5_hex, verify_checksum};
pub use domain::errors::{IngestError, RelayError, StoreError};
pub use domain::mapping::{envelope_to_record, record_to_envelope};
pub use ports::inbound::IngestionApi;
pub use ports::outbound::{BlockStore, DataLakeClient, InMemoryBlockStore};
pub use relay::{RelayOutcome, RelaySink};
pub use service::IngestionService;

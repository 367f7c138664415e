//! # Shared Types Crate
//!
//! Cross-crate domain types for the Dataplane workspace.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: every type that crosses a crate seam
//!   (ingestion core, server runtime, CLI client) is defined here.
//! - **Closed Classification**: [`BlockType`] is a closed enum with a total
//!   parse function; an unknown name is a typed error, never a panic.
//! - **Wire vs. Persisted**: [`DataEnvelope`] is the transport shape,
//!   [`BlockRecord`] the persisted one. Mapping between them lives at the
//!   store boundary in the ingestion crate, not here.

pub mod entities;
pub mod errors;

pub use entities::{BlockHeader, BlockRecord, BlockType, DataBody, DataEnvelope, DataHeader};
pub use errors::BlockTypeParseError;

/// Seconds since the Unix epoch.
pub type Timestamp = u64;

//! Production implementations of the ingestion core's outbound ports.

pub mod datalake;
pub mod store;

pub use datalake::HttpDataLakeClient;
pub use store::FileBackedBlockStore;

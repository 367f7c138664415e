//! Port traits for the ingestion subsystem.

pub mod inbound;
pub mod outbound;

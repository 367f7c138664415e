//! Explicit mapping between the transport envelope and the persisted
//! record.
//!
//! The mapping is a pure function at the store boundary so it can be unit
//! tested without a storage engine. The caller supplies the creation
//! instant; this module touches no clock.

use shared_types::{
    BlockHeader, BlockRecord, DataBody, DataEnvelope, DataHeader, Timestamp,
};

/// Map a transport envelope to the persisted record.
///
/// The payload string is captured byte-exact; `created_at` is fixed here
/// and never changes for the lifetime of the record.
pub fn envelope_to_record(envelope: &DataEnvelope, created_at: Timestamp) -> BlockRecord {
    BlockRecord {
        header: BlockHeader {
            name: envelope.data_header.name.clone(),
            block_type: envelope.data_header.block_type,
            created_at,
        },
        body: envelope.data_body.as_bytes().to_vec(),
    }
}

/// Map a persisted record back to the transport shape.
///
/// The creation instant is a persistence detail and is dropped; the body
/// bytes are valid UTF-8 by construction (they arrived as a string), but a
/// lossy conversion keeps reads total if the store was written by an
/// earlier incompatible version.
pub fn record_to_envelope(record: &BlockRecord) -> DataEnvelope {
    DataEnvelope {
        data_header: DataHeader {
            name: record.header.name.clone(),
            block_type: record.header.block_type,
        },
        data_body: DataBody {
            data: String::from_utf8_lossy(&record.body).into_owned(),
        },
    }
}

//! Domain entities shared across the workspace.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::BlockTypeParseError;
use crate::Timestamp;

/// Logical classification of a data block.
///
/// A closed set: adding a member is a source-level change, and every parse
/// of an unknown name yields [`BlockTypeParseError`] rather than a silent
/// default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BlockType {
    BlockTypeA,
    BlockTypeB,
}

impl BlockType {
    /// Canonical wire name, uppercase.
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockType::BlockTypeA => "BLOCKTYPEA",
            BlockType::BlockTypeB => "BLOCKTYPEB",
        }
    }
}

impl FromStr for BlockType {
    type Err = BlockTypeParseError;

    /// Total parse against the closed set. Case-sensitive: the wire form
    /// is uppercase and nothing else is accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BLOCKTYPEA" => Ok(BlockType::BlockTypeA),
            "BLOCKTYPEB" => Ok(BlockType::BlockTypeB),
            other => Err(BlockTypeParseError::UnknownBlockType {
                name: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity and classification metadata of a block, as transported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataHeader {
    /// Unique block name (primary key across all blocks).
    pub name: String,
    /// Logical block type.
    #[serde(rename = "blockType")]
    pub block_type: BlockType,
}

impl DataHeader {
    pub fn new(name: impl Into<String>, block_type: BlockType) -> Self {
        Self {
            name: name.into(),
            block_type,
        }
    }
}

/// Block payload, as transported.
///
/// The payload travels as a text-safe string in JSON but is hashed and
/// persisted byte-exact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataBody {
    #[serde(rename = "dataBody")]
    pub data: String,
}

impl DataBody {
    pub fn new(data: impl Into<String>) -> Self {
        Self { data: data.into() }
    }

    /// Payload bytes for hashing and persistence.
    pub fn as_bytes(&self) -> &[u8] {
        self.data.as_bytes()
    }
}

/// Transport shape: a header paired with its body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataEnvelope {
    #[serde(rename = "dataHeader")]
    pub data_header: DataHeader,
    #[serde(rename = "dataBody")]
    pub data_body: DataBody,
}

impl DataEnvelope {
    pub fn new(data_header: DataHeader, data_body: DataBody) -> Self {
        Self {
            data_header,
            data_body,
        }
    }
}

/// Persisted header: transport identity plus the creation instant.
///
/// `created_at` is set once at ingestion and never mutated; only
/// `block_type` changes after creation (via reclassification).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockHeader {
    pub name: String,
    pub block_type: BlockType,
    pub created_at: Timestamp,
}

/// Persisted unit: header owns the body. A body cannot exist without its
/// header; the pair is written and read as one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockRecord {
    pub header: BlockHeader,
    /// Byte-exact payload. Immutable once persisted.
    pub body: Vec<u8>,
}

//! Error types shared across the workspace.

use thiserror::Error;

/// Failure to parse a block type name against the closed enum.
///
/// This is a caller contract violation wherever a valid member is required
/// (reclassification); at query time the same failure is tolerated and
/// simply matches nothing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlockTypeParseError {
    #[error("unknown block type: {name}")]
    UnknownBlockType { name: String },
}

//! Cross-crate integration flows.

pub mod end_to_end;
pub mod http_surface;
pub mod persistence;

//! Pure domain logic: no I/O, no clocks, no network.

pub mod checksum;
pub mod errors;
pub mod mapping;

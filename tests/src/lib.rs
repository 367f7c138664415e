//! # Dataplane Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/          # Cross-crate flows
//!     ├── end_to_end.rs     # Ingest → query → reclassify lifecycle
//!     ├── http_surface.rs   # Full router exercised over tower
//!     ├── relay_isolation.rs# Relay failures never surface to callers
//!     └── persistence.rs    # File-backed store survives reopen
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p dp-tests
//!
//! # By flow
//! cargo test -p dp-tests integration::end_to_end
//! ```

#![allow(unused_imports)]
#![allow(dead_code)]

pub mod integration;

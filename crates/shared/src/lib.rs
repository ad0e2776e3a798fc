//! # milvus-cli-shared
//!
//! Shared error handling for the milvus-cli workspace.
//!
//! - Error envelope (`ErrorEnvelope`, `ErrorCode`) used at every crate boundary
//! - `Validated<T>` proof wrapper returned by the request validators
//!
//! ## Design Principles
//!
//! 1. **No workspace dependencies** - This crate only depends on external crates
//! 2. **Serde-compatible** - Error types serialize for CLI JSON output

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod errors;
pub mod invariants;

pub use errors::{ErrorClass, ErrorCode, ErrorEnvelope, ErrorKind, ErrorMetadata};
pub use invariants::Validated;

/// Returns the shared crate version.
#[must_use]
pub const fn shared_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

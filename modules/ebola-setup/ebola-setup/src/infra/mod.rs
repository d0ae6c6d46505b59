//! In-process implementations of the host services.
//!
//! Used by the local dry-run host and by tests in place of a running EMR.

pub mod memory;

//! Tracing/logging setup shared by binaries and test harnesses.
//!
//! Domain crates only emit `tracing` events; installing a subscriber is the
//! caller's job.

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Tracing configuration (filters, layers).
pub mod tracing;

//! Process-wide logging setup shared by the server binary and tests.

/// Tracing subscriber configuration.
pub mod tracing;

/// Initialize structured JSON logging for the server process.
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Initialize human-readable logging captured by the test harness.
pub fn init_for_tests() {
    tracing::init_test();
}

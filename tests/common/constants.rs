//! Shared constants for end-to-end tests

// ============================================================================
// Test Server Configuration
// ============================================================================

/// Seed for the chord generator, keeps every run reproducible
pub const TEST_SEED: u64 = 42;

/// Build hash shown in the page footer
pub const TEST_BUILD_HASH: &str = "e2e-test";

/// Contents of the stylesheet placed in the temporary static directory
pub const TEST_STYLESHEET: &str = "body { margin: 0; }\n";

/// Cache age applied to static files (seconds)
pub const TEST_STATIC_CACHE_AGE_SEC: usize = 120;

// ============================================================================
// Test Timeouts
// ============================================================================

/// Maximum time to wait for server to become ready (milliseconds)
pub const SERVER_READY_TIMEOUT_MS: u64 = 5000;

/// Timeout for individual HTTP requests (seconds)
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Polling interval when waiting for server ready (milliseconds)
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 50;

//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 5000;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

// =============================================================================
// CONTEST DEFAULTS
// =============================================================================

/// Default contest duration when none is supplied (90 minutes)
pub const DEFAULT_DURATION_SECONDS: i64 = 5400;

/// Default number of problems per contest
pub const DEFAULT_NUM_PROBLEMS: u32 = 5;

/// Maximum number of problems per contest
pub const MAX_NUM_PROBLEMS: u32 = 26;

/// Length of the short opaque contest token
pub const CONTEST_ID_LENGTH: usize = 8;

// =============================================================================
// CATALOG DEFAULTS
// =============================================================================

/// Default problem catalog endpoint
pub const DEFAULT_CATALOG_URL: &str = "https://leetcode.com/api/problems/all/";

/// Default catalog request timeout in seconds
pub const DEFAULT_CATALOG_TIMEOUT_SECONDS: u64 = 10;

// =============================================================================
// CLIENT SYNC DEFAULTS
// =============================================================================

/// Countdown tick interval in milliseconds
pub const COUNTDOWN_TICK_MS: u64 = 1000;

/// Pre-start status poll interval in milliseconds
pub const STATUS_POLL_MS: u64 = 3000;

// =============================================================================
// DEBUG DEFAULTS
// =============================================================================

/// Maximum number of rows returned by the debug results endpoint
pub const DEBUG_RESULTS_LIMIT: i64 = 100;

//! API-wide constants.

/// Prefix for all API routes.
pub const API_PREFIX: &str = "/api";

/// Maximum accepted JSON body size. Orders carry metadata only, never file
/// bytes, so bodies stay small.
pub const MAX_JSON_BODY_BYTES: usize = 2 * 1024 * 1024;

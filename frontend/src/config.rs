//! Application configuration.
//!
//! Centralized configuration for the InstantID Studio frontend. The
//! personalization-service address can be overridden at build time; the
//! remaining values are product constants.

/// Fallback service address when no override is provided.
const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Personalization-service base address.
///
/// Read from the `PICKABOOK_API_URL` environment variable at build time
/// (trunk forwards it to the compiler), falling back to the local
/// development server.
pub fn api_url() -> &'static str {
    option_env!("PICKABOOK_API_URL").unwrap_or(DEFAULT_API_URL)
}

/// Application name shown in the header.
pub const APP_NAME: &str = "InstantID Studio";

/// Prompt pre-populated in the form.
pub const DEFAULT_PROMPT: &str = "make brighter picture";

/// Suggested filename for downloaded results.
pub const DOWNLOAD_FILENAME: &str = "instantid_result.png";

//! Configuration constants.
//!
//! This module defines all configuration constants used throughout the
//! application, including timeouts, analysis thresholds, and size limits.

// Network operation timeouts
/// Page fetch timeout in seconds.
/// Most pages respond in well under 10s; slower targets are treated as a
/// degraded fetch rather than holding the whole scan open.
pub const PAGE_FETCH_TIMEOUT_SECS: u64 = 10;
/// PageSpeed Insights request timeout in seconds.
/// The API runs a full Lighthouse pass server-side and routinely takes
/// 20-40s, so this is deliberately much longer than the page fetch timeout.
pub const PAGESPEED_TIMEOUT_SECS: u64 = 60;

/// Default User-Agent string for page fetches.
///
/// A descriptive bot UA: enough to pass basic bot filters while staying
/// honest about what is making the request. Overridable via `--user-agent`.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; SEOBot/1.0)";

/// Default PageSpeed Insights endpoint.
///
/// Overridable via `--pagespeed-endpoint` so tests can point the client at a
/// local mock server.
pub const DEFAULT_PAGESPEED_ENDPOINT: &str =
    "https://www.googleapis.com/pagespeedonline/v5/runPagespeed";

/// Environment variable holding the PageSpeed Insights API key.
pub const PAGESPEED_API_KEY_VAR: &str = "PAGESPEED_API_KEY";

/// Default bind address for the HTTP server.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

// URL handling
/// Maximum URL length (2048 characters), matching common browser and server
/// limits. Longer request URLs are rejected before any network call.
pub const MAX_URL_LENGTH: usize = 2048;

// Response size limits
/// Maximum page body size in bytes (2MB).
/// Pages advertising a larger body are treated as a degraded fetch.
pub const MAX_RESPONSE_BODY_SIZE: u64 = 2 * 1024 * 1024;

// Analysis thresholds.
// Fixed policy constants, not tunable at request time; the issue pipeline
// depends on these exact boundary values.
/// Lower bound (inclusive) of the meta description length range that
/// produces no length warning.
pub const META_DESCRIPTION_MIN_CHARS: usize = 120;
/// Upper bound (inclusive) of the meta description length range.
pub const META_DESCRIPTION_MAX_CHARS: usize = 160;
/// Lower bound (inclusive) of the title length range that produces no
/// length warning.
pub const TITLE_MIN_CHARS: usize = 30;
/// Upper bound (inclusive) of the title length range.
pub const TITLE_MAX_CHARS: usize = 60;
/// First-contentful-paint threshold in milliseconds above which a speed
/// warning is emitted.
pub const FCP_WARN_THRESHOLD_MS: f64 = 3000.0;
/// Largest-contentful-paint threshold in milliseconds above which a render
/// warning is emitted.
pub const LCP_WARN_THRESHOLD_MS: f64 = 4000.0;
/// Minimum word count below which a content volume warning is emitted.
pub const MIN_WORD_COUNT: usize = 300;

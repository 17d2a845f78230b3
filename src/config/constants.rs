//! Fixed constants for fetching, rule evaluation and scoring.

// Network
/// Request timeout in seconds for the single page fetch.
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Desktop browser identity sent with every fetch.
///
/// Some origins reject requests that do not look like they come from a browser,
/// so this mimics Chrome on Windows.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

// URL handling
/// Prefix added to targets supplied without a scheme.
pub const DEFAULT_SCHEME_PREFIX: &str = "https://";

// Rule thresholds
/// Titles shorter than this (in characters) are reported as too short.
pub const SHORT_TITLE_THRESHOLD: usize = 30;
/// Pages with more images than this are checked for missing ALT text.
pub const IMAGE_COUNT_THRESHOLD: usize = 10;

/// Finance terms that signal high-CPC advertising verticals.
pub const FINANCE_KEYWORDS: &[&str] = &["loan", "credit", "bank"];
/// Terms that signal a SaaS vertical with competitive bidding.
pub const SAAS_KEYWORDS: &[&str] = &["software", "saas"];
/// Substrings of iframe `src` values recognized as video embeds.
pub const VIDEO_EMBED_HOSTS: &[&str] = &["youtube", "vimeo"];

// Scoring
/// Score of a page with every fundamental present.
pub const BASE_SCORE: u32 = 85;
/// Deducted when there is no usable `<title>`.
pub const MISSING_TITLE_PENALTY: u32 = 10;
/// Deducted when there is no description meta tag.
pub const MISSING_DESCRIPTION_PENALTY: u32 = 10;
/// Deducted when there is no viewport meta tag.
pub const MISSING_VIEWPORT_PENALTY: u32 = 15;
/// Deducted when the page has no `<h1>`.
pub const MISSING_H1_PENALTY: u32 = 5;
/// Ceiling the improvement delta is measured against.
pub const MAX_SCORE: u32 = 100;
/// Upper bound on the reported improvement delta.
pub const IMPROVEMENT_CAP: u32 = 20;

// HTTP wiring
/// Default port for `serve`.
pub const DEFAULT_PORT: u16 = 3000;

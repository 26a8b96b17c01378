// Single source of truth for all default values.

// --- Verification ---
/// Canonical names of outlets treated as verified. Matched as
/// case-insensitive substrings of the reported outlet name.
pub const DEFAULT_VERIFIED_OUTLETS: &[&str] = &[
    "Reuters",
    "Associated Press",
    "AP News",
    "BBC",
    "The Guardian",
    "Bloomberg",
    "PTI",
    "Al Jazeera",
    "The New York Times",
    "The Washington Post",
    "The Hindu",
    "Hindustan Times",
    "The Times of India",
    "Indian Express",
    "NDTV",
    "NPR",
    "Financial Times",
    "The Wall Street Journal",
    "AFP",
    "CNN",
    "The Economist",
];

// --- Thresholds ---
pub const DEFAULT_CONFIRMED_MIN_SOURCES: u32 = 4;
pub const DEFAULT_CONFIRMED_MIN_VERIFIED: u32 = 2;
pub const DEFAULT_LOW_MIN_SOURCES_WITHOUT_PRIMARY: u32 = 3;
pub const DEFAULT_RECENCY_WINDOW_MINUTES: f64 = 30.0;
pub const DEFAULT_RECENCY_MIN_SOURCES: u32 = 2;
pub const DEFAULT_HIGH_MIN_VERIFIED_WITHOUT_PRIMARY: u32 = 3;

// --- Alerting ---
pub const DEFAULT_VERIFIED_ALERT_THRESHOLD: u32 = 3;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;

// --- Ledger ---
/// Material revisions inside this window mark the narrative unstable.
pub const DEFAULT_NARRATIVE_WINDOW_MINUTES: i64 = 360; // 6 hours
/// Upper bound accepted for the narrative window.
pub const MAX_NARRATIVE_WINDOW_MINUTES: i64 = 60 * 24 * 366 * 10; // ~10 years

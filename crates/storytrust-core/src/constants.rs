/// StoryTrust version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// A story with at most this many sources is single-source.
pub const SINGLE_SOURCE_MAX: u32 = 1;

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV_VAR: &str = "STORYTRUST_LOG";

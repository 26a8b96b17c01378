//! # storytrust-core
//!
//! Foundation crate for StoryTrust.
//! Defines the story observation model, engine input/output types, traits,
//! errors, config, and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::StoryTrustConfig;
pub use errors::{StoryTrustError, StoryTrustResult};
pub use models::{
    ConfidenceInput, ConfidenceLevel, ConfidenceResult, SourceObservation, StoryId, StoryState,
};

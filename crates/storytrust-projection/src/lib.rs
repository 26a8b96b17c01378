//! # storytrust-projection
//!
//! Everything downstream of the engine: the JSON shape served by the public
//! read API, the story timeline, the verified-source alert trigger, and the
//! presentation hints UI badges use. None of it feeds back into scoring.

pub mod alert;
pub mod presentation;
pub mod projector;
pub mod timeline;
pub mod view;

pub use alert::{AlertDecision, VerifiedSourceAlert};
pub use projector::StoryProjector;
pub use view::{ApiConfidence, StoryView};

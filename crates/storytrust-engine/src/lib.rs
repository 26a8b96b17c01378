//! # storytrust-engine
//!
//! Pure classification of a story's aggregate signals into a lifecycle
//! state and a confidence grade.
//!
//! ## Rules
//! Both classifiers are ordered rule lists; the first matching rule wins.
//! 1. **State**: contradicted → single-source → confirmed → developing
//! 2. **Confidence**: low → high → medium
//!
//! The engine reads no clock and holds no mutable state. Story age is
//! injected through `ConfidenceInput::age_minutes`.

pub mod engine;
pub mod rules;

pub use engine::ConfidenceEngine;
pub use rules::{Rule, RuleSet};

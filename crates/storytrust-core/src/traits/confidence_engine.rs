use crate::models::{ConfidenceInput, ConfidenceResult};

/// Turns aggregate story signals into a confidence grade and lifecycle state.
///
/// Implementations must be pure: no I/O, no clock, no shared mutable state.
pub trait IConfidenceEngine: Send + Sync {
    fn evaluate(&self, input: &ConfidenceInput) -> ConfidenceResult;
}

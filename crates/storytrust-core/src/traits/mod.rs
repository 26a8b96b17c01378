mod confidence_engine;
mod source_classifier;

pub use confidence_engine::IConfidenceEngine;
pub use source_classifier::ISourceClassifier;

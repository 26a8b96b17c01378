//! Span definitions for ledger aggregation and engine evaluation.

/// Create an aggregation span for one story's ledger.
#[macro_export]
macro_rules! aggregation_span {
    ($story_id:expr, $observation_count:expr) => {
        tracing::debug_span!(
            "storytrust.aggregation",
            story_id = %$story_id,
            observation_count = $observation_count
        )
    };
}

/// Create a batch evaluation span.
#[macro_export]
macro_rules! evaluation_span {
    ($batch_size:expr) => {
        tracing::info_span!("storytrust.evaluation", batch_size = $batch_size)
    };
}

/// Decides whether an outlet name counts as a verified source.
pub trait ISourceClassifier: Send + Sync {
    fn is_verified(&self, source_name: &str) -> bool;
}

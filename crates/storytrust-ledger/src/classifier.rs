//! Verified-source classification.
//!
//! Matching is a case-insensitive substring test so bylines such as
//! "Reuters via Yahoo News" still count as Reuters.

use storytrust_core::config::VerificationConfig;
use storytrust_core::traits::ISourceClassifier;

/// Allow-list classifier for trusted outlets.
#[derive(Debug, Clone)]
pub struct VerifiedSourceClassifier {
    /// Canonical names as configured.
    outlets: Vec<String>,
    /// Lowercased, trimmed needles. Blank entries are dropped so they
    /// cannot match every name.
    needles: Vec<String>,
}

impl VerifiedSourceClassifier {
    pub fn new<I, S>(outlets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let outlets: Vec<String> = outlets.into_iter().map(Into::into).collect();
        let needles = outlets
            .iter()
            .map(|o| o.trim().to_lowercase())
            .filter(|n| !n.is_empty())
            .collect();
        Self { outlets, needles }
    }

    pub fn from_config(config: &VerificationConfig) -> Self {
        Self::new(config.outlets.iter().cloned())
    }

    /// Build a classifier that also trusts `extra` outlets.
    pub fn extend<I, S>(&self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            self.outlets
                .iter()
                .cloned()
                .chain(extra.into_iter().map(Into::into)),
        )
    }

    /// True if `source_name` contains any canonical outlet name, ignoring case.
    pub fn is_verified(&self, source_name: &str) -> bool {
        if source_name.trim().is_empty() {
            return false;
        }
        let haystack = source_name.to_lowercase();
        self.needles.iter().any(|n| haystack.contains(n.as_str()))
    }

    /// The configured canonical outlet names.
    pub fn verified_outlets(&self) -> &[String] {
        &self.outlets
    }
}

impl Default for VerifiedSourceClassifier {
    fn default() -> Self {
        Self::from_config(&VerificationConfig::default())
    }
}

impl ISourceClassifier for VerifiedSourceClassifier {
    fn is_verified(&self, source_name: &str) -> bool {
        VerifiedSourceClassifier::is_verified(self, source_name)
    }
}

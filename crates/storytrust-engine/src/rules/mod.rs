//! Ordered first-match rule lists.
//!
//! A `RuleSet` is evaluated top to bottom and the first rule whose
//! predicate holds decides the outcome. When nothing matches the fallback
//! applies, so every input gets exactly one outcome.

pub mod confidence;
pub mod state;

use storytrust_core::models::ConfidenceInput;

pub use confidence::{confidence_rules, ConfidenceVerdict};
pub use state::state_rules;

type Predicate = Box<dyn Fn(&ConfidenceInput) -> bool + Send + Sync>;

/// One named `(predicate, outcome)` pair.
pub struct Rule<T> {
    name: &'static str,
    predicate: Predicate,
    outcome: T,
}

impl<T> Rule<T> {
    pub fn new<F>(name: &'static str, predicate: F, outcome: T) -> Self
    where
        F: Fn(&ConfidenceInput) -> bool + Send + Sync + 'static,
    {
        Self {
            name,
            predicate: Box::new(predicate),
            outcome,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn outcome(&self) -> &T {
        &self.outcome
    }

    pub fn matches(&self, input: &ConfidenceInput) -> bool {
        (self.predicate)(input)
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Rule<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("outcome", &self.outcome)
            .finish_non_exhaustive()
    }
}

/// Rules in precedence order plus the outcome used when none match.
#[derive(Debug)]
pub struct RuleSet<T> {
    rules: Vec<Rule<T>>,
    fallback_name: &'static str,
    fallback: T,
}

impl<T> RuleSet<T> {
    pub fn new(rules: Vec<Rule<T>>, fallback_name: &'static str, fallback: T) -> Self {
        Self {
            rules,
            fallback_name,
            fallback,
        }
    }

    /// First matching rule's name and outcome, or the fallback.
    pub fn evaluate(&self, input: &ConfidenceInput) -> (&'static str, &T) {
        self.rules
            .iter()
            .find(|rule| rule.matches(input))
            .map(|rule| (rule.name, &rule.outcome))
            .unwrap_or((self.fallback_name, &self.fallback))
    }

    /// Rules in precedence order, excluding the fallback.
    pub fn rules(&self) -> &[Rule<T>] {
        &self.rules
    }

    /// Rule names in precedence order, fallback last.
    pub fn names(&self) -> Vec<&'static str> {
        self.rules
            .iter()
            .map(|r| r.name)
            .chain(std::iter::once(self.fallback_name))
            .collect()
    }
}

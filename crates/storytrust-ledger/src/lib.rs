//! # storytrust-ledger
//!
//! The source ledger holds every outlet's observation of a story plus the
//! externally raised contradiction flags and headline revisions. This crate
//! turns a ledger into the `ConfidenceInput` the engine consumes.
//!
//! ## Pieces
//! - **Classifier**: case-insensitive substring match against a verified-outlet allow-list
//! - **Timing**: story age and chronological ordering from publish timestamps
//! - **Signals**: pluggable contradiction / narrative-stability derivation
//! - **Aggregator**: ledger → `ConfidenceInput`, rejecting empty ledgers
//! - **Store**: concurrent in-memory ledgers with per-story write serialization

pub mod aggregator;
pub mod classifier;
pub mod ledger;
pub mod signals;
pub mod store;
pub mod timing;

pub use aggregator::LedgerAggregator;
pub use classifier::VerifiedSourceClassifier;
pub use ledger::SourceLedger;
pub use signals::{FlaggedSignals, NarrativeSignals};
pub use store::LedgerStore;

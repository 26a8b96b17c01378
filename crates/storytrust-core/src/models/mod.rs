mod confidence_input;
mod confidence_result;
mod story;

pub use confidence_input::ConfidenceInput;
pub use confidence_result::{ConfidenceLevel, ConfidenceResult, StoryState};
pub use story::{ContradictionFlag, EditorialStatus, NarrativeRevision, SourceObservation, StoryId};

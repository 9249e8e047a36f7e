mod artifact;
mod operation;
mod operation_id;
mod operation_state;
mod status_vocabulary;

pub use artifact::{Artifact, ArtifactKind};
pub use operation::{Operation, TransitionError};
pub use operation_id::OperationId;
pub use operation_state::OperationState;
pub use status_vocabulary::StatusVocabulary;

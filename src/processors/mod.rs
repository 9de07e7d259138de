pub mod dispatcher;
pub mod submission;

pub use dispatcher::{ConversionOutcome, ConversionPolicy, RecordDispatcher, RejectedRecord};
pub use submission::{FieldGroup, SubmissionForm};

use thiserror::Error;

/// Validation failures surfaced to the user.
///
/// None of these are fatal. A failed commit leaves the collection, the intent
/// and the form text untouched so the user can correct and resubmit.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditError {
    #[error("Empty group name")]
    EmptyGroupName,
    #[error("This group name is taken")]
    DuplicateGroupName { name: String },
    #[error("Wrong group name")]
    UnknownGroup { name: String },
    #[error("Empty variation name")]
    EmptyVariationName,
    #[error("This variation name in this group is taken")]
    DuplicateVariationName { group: String, name: String },
    #[error("Incorrect number")]
    NotANumber { text: String },
    #[error("Probability number must be between 0 and 1")]
    ProbabilityOutOfRange { value: f64 },
    /// The requested commit does not match the open form.
    #[error("Nothing to confirm for '{intent}'")]
    IntentMismatch { intent: String },
    /// An edit was started while another form is still open.
    #[error("Finish editing '{intent}' first")]
    FormOpen { intent: String },
}

pub type Result<T> = std::result::Result<T, EditError>;

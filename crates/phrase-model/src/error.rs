use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("names must not be empty")]
    EmptyName,
    #[error("duplicate group name: {name}")]
    DuplicateGroup { name: String },
    #[error("duplicate variation name '{name}' in group '{group}'")]
    DuplicateVariation { group: String, name: String },
    #[error("variation '{name}' in group '{group}' has probability {probability} outside [0, 1]")]
    ProbabilityOutOfRange {
        group: String,
        name: String,
        probability: f64,
    },
}

pub type Result<T> = std::result::Result<T, ModelError>;

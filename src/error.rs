use thiserror::Error;

pub type Result<T> = std::result::Result<T, CategoryError>;

#[derive(Error, Debug)]
pub enum CategoryError {
    #[error("age group rule set must contain at least one age threshold")]
    EmptyThresholds,

    #[error("Unknown gender: '{0}'. Available: universal, male, female")]
    UnknownGender(String),
}

pub mod age_groups;
pub mod gender;

pub use age_groups::{AgeGroupKind, AgeGroups};
pub use gender::Gender;

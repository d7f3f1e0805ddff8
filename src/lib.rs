//! Competition age/gender categories for athletics scoring.
//!
//! Buckets an athlete into a category label such as `JF13` (Under 13
//! Girls), `MV40` (Men Over 40) or `FSEN` (Senior Women) from a date of
//! birth, a gender and the rule sets a competition defines. The date an
//! athlete's age is counted on may sit well away from the event itself, and
//! junior eligibility may hinge on a second date in a different calendar
//! year; see [`AgeGroups`] for how rule sets express that.

pub mod error;
pub mod models;
pub mod rulesets;
pub mod services;

pub use error::{CategoryError, Result};
pub use models::{AgeGroupKind, AgeGroups, Gender};
pub use services::categorization::{age_category, age_on_date, categorize, civil_date};

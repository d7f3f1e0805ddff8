use serde::{Deserialize, Serialize};

use crate::error::CategoryError;

/// The gender a category or rule set applies to.
///
/// `Universal` covers mixed events where a single rule set applies to every
/// entrant; its label code is empty, so a universal senior is just `SEN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Universal,
    Male,
    Female,
}

impl Gender {
    /// The fragment this gender contributes to a category label.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Universal => "",
            Self::Male => "M",
            Self::Female => "F",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Universal => "Universal",
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }

    fn parse_str(s: &str) -> Result<Self, CategoryError> {
        match s.to_lowercase().as_str() {
            "u" | "universal" | "mixed" => Ok(Self::Universal),
            "m" | "male" | "men" => Ok(Self::Male),
            "f" | "female" | "women" => Ok(Self::Female),
            _ => Err(CategoryError::UnknownGender(s.to_string())),
        }
    }
}

impl TryFrom<&str> for Gender {
    type Error = CategoryError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse_str(value)
    }
}

impl std::str::FromStr for Gender {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

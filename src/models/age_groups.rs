use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Gender;
use crate::error::{CategoryError, Result};

/// Whether a rule set bands athletes below its thresholds (juniors,
/// e.g. Under 15) or above them (masters, e.g. Over 40).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeGroupKind {
    Juniors,
    Masters,
}

impl AgeGroupKind {
    pub fn is_juniors(&self) -> bool {
        matches!(self, Self::Juniors)
    }
}

/// One gender-specific rule set mapping age thresholds to category labels.
///
/// Rule sets are defined per competition: a junior set like
/// `{13, 15, 17, 20}` places athletes in Under 13 through Under 20 bands,
/// a masters set like `{35, 40, ..., 75}` in Over 35 through Over 75 bands.
/// Build them once at configuration time; matching never mutates them, so a
/// single instance can serve concurrent categorization calls.
///
/// The operative date is the date an athlete's age is counted on, which the
/// competition rulebook may fix well away from the event itself. UKA, for
/// instance, decides junior membership on a 31st August at one end or the
/// other of its competition year depending on discipline.
#[derive(Debug, Clone)]
pub struct AgeGroups {
    gender: Gender,
    kind: AgeGroupKind,
    operative_date: NaiveDate,
    cut_off_date: Option<NaiveDate>,
    groups: Vec<i32>,
}

impl AgeGroups {
    /// Builds a rule set, sorting the thresholds ascending and collapsing
    /// duplicates. At least one threshold is required.
    ///
    /// # Examples
    ///
    /// ```
    /// use age_categories::{AgeGroupKind, AgeGroups, Gender};
    /// use chrono::NaiveDate;
    ///
    /// let operative_date = NaiveDate::from_ymd_opt(2020, 8, 31).unwrap();
    /// let groups = AgeGroups::new(
    ///     Gender::Female,
    ///     AgeGroupKind::Juniors,
    ///     operative_date,
    ///     None,
    ///     vec![20, 13, 17, 15],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(groups.groups(), &[13, 15, 17, 20]);
    /// ```
    pub fn new(
        gender: Gender,
        kind: AgeGroupKind,
        operative_date: NaiveDate,
        cut_off_date: Option<NaiveDate>,
        groups: Vec<i32>,
    ) -> Result<Self> {
        if groups.is_empty() {
            return Err(CategoryError::EmptyThresholds);
        }

        let mut groups = groups;
        groups.sort_unstable();
        groups.dedup();

        Ok(Self {
            gender,
            kind,
            operative_date,
            cut_off_date,
            groups,
        })
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn kind(&self) -> AgeGroupKind {
        self.kind
    }

    /// The date an athlete's age is computed on when picking their band.
    pub fn operative_date(&self) -> NaiveDate {
        self.operative_date
    }

    /// Secondary date bounding junior eligibility, where the rules split
    /// "still young enough to be a junior" from "which band". Certain
    /// competitions confine Under 20 events to athletes under 20 on a 31st
    /// December while banding everyone on a 31st August of a different
    /// calendar year. Ignored for masters rule sets.
    pub fn cut_off_date(&self) -> Option<NaiveDate> {
        self.cut_off_date
    }

    /// The age thresholds, ascending and deduplicated.
    pub fn groups(&self) -> &[i32] {
        &self.groups
    }
}

//! Preset rule sets for common competition schemes.
//!
//! The dates baked in here follow the UK Athletics supplement on age groups.
//! The competition year runs 1 October to 30 September for track and field
//! and race walking, and 1 September to 31 August for road running. Junior
//! membership is decided on a 31st August, under-20 eligibility on a 31st
//! December, and the two can fall in different calendar years.

use chrono::NaiveDate;

use crate::error::Result;
use crate::models::{AgeGroupKind, AgeGroups, Gender};

/// Junior thresholds used by UKA competitions, Under 13 through Under 20.
pub const UKA_JUNIOR_THRESHOLDS: &[i32] = &[13, 15, 17, 20];

/// Five-year veteran bands from Over 35 to Over 75.
pub const STANDARD_MASTERS_THRESHOLDS: &[i32] = &[35, 40, 45, 50, 55, 60, 65, 70, 75];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Discipline {
    TrackAndField,
    RaceWalking,
    RoadRunning,
}

/// A competition year under the UKA calendar, named by the calendar year it
/// starts in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompetitionYear {
    start_year: i32,
    discipline: Discipline,
}

impl CompetitionYear {
    pub fn new(start_year: i32, discipline: Discipline) -> Self {
        Self {
            start_year,
            discipline,
        }
    }

    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    pub fn discipline(&self) -> Discipline {
        self.discipline
    }

    /// The 31st August on which junior age-group membership is decided:
    /// the one ending the competition year for track and field and race
    /// walking, the one prior to its start for road running.
    pub fn junior_operative_date(&self) -> NaiveDate {
        let year = match self.discipline {
            Discipline::TrackAndField | Discipline::RaceWalking => self.start_year + 1,
            Discipline::RoadRunning => self.start_year,
        };

        NaiveDate::from_ymd_opt(year, 8, 31).unwrap()
    }

    /// The 31st December bounding under-20 eligibility.
    pub fn junior_cut_off_date(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.start_year, 12, 31).unwrap()
    }
}

/// UKA junior age groups for one gender in the given competition year.
pub fn uka_juniors(year: CompetitionYear, gender: Gender) -> Result<AgeGroups> {
    AgeGroups::new(
        gender,
        AgeGroupKind::Juniors,
        year.junior_operative_date(),
        Some(year.junior_cut_off_date()),
        UKA_JUNIOR_THRESHOLDS.to_vec(),
    )
}

/// Standard five-year masters bands for one gender, counted on the given
/// operative date.
pub fn standard_masters(operative_date: NaiveDate, gender: Gender) -> Result<AgeGroups> {
    AgeGroups::new(
        gender,
        AgeGroupKind::Masters,
        operative_date,
        None,
        STANDARD_MASTERS_THRESHOLDS.to_vec(),
    )
}

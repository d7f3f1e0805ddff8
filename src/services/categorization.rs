use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};
use tracing::trace;

use crate::models::{AgeGroupKind, AgeGroups, Gender};

/// Returns the age category label for an athlete with the given gender and
/// date of birth under the supplied rule sets.
///
/// Rule sets are tried in the order given and the first match wins, so the
/// caller controls precedence between schemes (juniors before masters, a
/// gender-asymmetric prize structure, and so on). When no rule set matches,
/// including when none are supplied, the athlete is classed as a senior.
///
/// # Examples
///
/// ```
/// use age_categories::{age_category, AgeGroupKind, AgeGroups, Gender};
/// use chrono::NaiveDate;
///
/// let juniors = AgeGroups::new(
///     Gender::Female,
///     AgeGroupKind::Juniors,
///     NaiveDate::from_ymd_opt(2020, 8, 31).unwrap(),
///     None,
///     vec![13, 15, 17, 20],
/// )
/// .unwrap();
///
/// let dob = NaiveDate::from_ymd_opt(2008, 3, 14).unwrap();
/// assert_eq!(age_category(Gender::Female, dob, &[juniors]), "JF13");
///
/// let dob = NaiveDate::from_ymd_opt(1984, 3, 14).unwrap();
/// assert_eq!(age_category(Gender::Female, dob, &[]), "FSEN");
/// ```
pub fn age_category(gender: Gender, date_of_birth: NaiveDate, groups: &[AgeGroups]) -> String {
    for group in groups {
        if let Some(label) = categorize(group, gender, date_of_birth) {
            trace!(%label, "age group matched");
            return label;
        }
    }

    let label = format!("{}SEN", gender.code());
    trace!(%label, "no age group matched, classing as senior");
    label
}

/// Applies a single rule set to an athlete. Returns `None` when the rule set
/// does not apply, leaving the caller to try the next one.
pub fn categorize(group: &AgeGroups, gender: Gender, date_of_birth: NaiveDate) -> Option<String> {
    if group.gender() != gender {
        return None;
    }

    match group.kind() {
        AgeGroupKind::Juniors => categorize_juniors(group, date_of_birth),
        AgeGroupKind::Masters => categorize_masters(group, date_of_birth),
    }
}

fn categorize_juniors(group: &AgeGroups, date_of_birth: NaiveDate) -> Option<String> {
    let max_age = *group.groups().last()?;

    if let Some(cut_off) = group.cut_off_date() {
        if age_on_date(cut_off, date_of_birth) >= max_age {
            return None;
        }
    }

    let age = age_on_date(group.operative_date(), date_of_birth);

    if age > max_age {
        return None;
    }

    // Under a separate cut-off date an athlete exactly at the top junior age
    // stays in the scheme, labelled by their literal age rather than the
    // next threshold up.
    if group.cut_off_date().is_some() && age == max_age {
        return Some(format!("J{}{}", group.gender().code(), age));
    }

    group
        .groups()
        .iter()
        .find(|&&threshold| age < threshold)
        .map(|threshold| format!("J{}{}", group.gender().code(), threshold))
}

fn categorize_masters(group: &AgeGroups, date_of_birth: NaiveDate) -> Option<String> {
    let age = age_on_date(group.operative_date(), date_of_birth);

    if age < *group.groups().first()? {
        return None;
    }

    group
        .groups()
        .iter()
        .rev()
        .find(|&&threshold| age >= threshold)
        .map(|threshold| format!("{}V{}", group.gender().code(), threshold))
}

/// Age in whole years on `on` for the given date of birth.
///
/// The year difference is reduced by one when the birthday has not yet
/// occurred in the reference year. Comparison is on calendar month and day
/// only, so the result is the same for any two inputs denoting the same
/// civil dates.
pub fn age_on_date(on: NaiveDate, date_of_birth: NaiveDate) -> i32 {
    let mut age = on.year() - date_of_birth.year();

    if (date_of_birth.month(), date_of_birth.day()) > (on.month(), on.day()) {
        age -= 1;
    }

    age
}

/// Normalizes a zoned timestamp to the calendar date observed in UTC.
///
/// Both operands of an age computation must pass through the same
/// normalization; two timestamps denoting the same instant produce the same
/// date here whatever offset they carry.
pub fn civil_date<Tz: TimeZone>(instant: &DateTime<Tz>) -> NaiveDate {
    instant.with_timezone(&Utc).date_naive()
}

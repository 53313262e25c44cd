//! Retirement date projection and work-medal eligibility.

use crate::models::career::CareerType;
use crate::tables::medals::work_medal;
use crate::utils::date::{days_between, full_years_between};
use chrono::{Datelike, Months, NaiveDate};

const MIN_LEGAL_AGE_MONTHS: i32 = 62 * 12;
const MAX_LEGAL_AGE_MONTHS: i32 = 64 * 12;
const FIRST_REFORMED_YEAR: i32 = 1961;
const LAST_REFORMED_YEAR: i32 = 1968;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetirementFacts {
    pub date: NaiveDate,
    pub days_remaining: i64,
    pub years_remaining: i32,
    pub years_retired: Option<i32>,
    pub years_worked: i32,
    pub work_medal: Option<&'static str>,
}

/// Legal retirement age in months for a birth year: 62 years up to 1961,
/// 64 years from 1968, linear in between (rounded to the nearest month).
pub fn legal_age_months(birth_year: i32) -> i32 {
    if birth_year <= FIRST_REFORMED_YEAR {
        return MIN_LEGAL_AGE_MONTHS;
    }
    if birth_year >= LAST_REFORMED_YEAR {
        return MAX_LEGAL_AGE_MONTHS;
    }

    let span_years = LAST_REFORMED_YEAR - FIRST_REFORMED_YEAR;
    let span_months = MAX_LEGAL_AGE_MONTHS - MIN_LEGAL_AGE_MONTHS;
    let step = (birth_year - FIRST_REFORMED_YEAR) * span_months;

    MIN_LEGAL_AGE_MONTHS + (2 * step + span_years) / (2 * span_years)
}

/// `anchor` shifted by `months`. The day is clamped to the last day of the
/// target month (31/01 + 3 months is 30/04).
fn shift_months(anchor: NaiveDate, months: i32) -> Option<NaiveDate> {
    let months = u32::try_from(months).ok()?;
    anchor.checked_add_months(Months::new(months))
}

/// Projected retirement date.
///
/// - With a birth date: birth date + legal age for that birth year,
///   clamped to the end of the month.
/// - Otherwise: career start + (legal age − assumed start age) for the
///   career profile, same month and day as the start date.
pub fn retirement_date(
    start: NaiveDate,
    birth: Option<NaiveDate>,
    career: CareerType,
) -> Option<NaiveDate> {
    match birth {
        Some(b) => shift_months(b, legal_age_months(b.year())),
        None => NaiveDate::from_ymd_opt(
            start.year() + career.years_to_retirement(),
            start.month(),
            start.day(),
        ),
    }
}

pub fn project(
    start: NaiveDate,
    birth: Option<NaiveDate>,
    penible: bool,
    career: CareerType,
    today: NaiveDate,
) -> Option<RetirementFacts> {
    let date = retirement_date(start, birth, career)?;

    let worked_until = today.min(date);
    let years_worked = full_years_between(start, worked_until).max(0);

    let (days_remaining, years_remaining, years_retired) = if date < today {
        (0, 0, Some(full_years_between(date, today)))
    } else {
        (days_between(today, date), full_years_between(today, date), None)
    };

    Some(RetirementFacts {
        date,
        days_remaining,
        years_remaining,
        years_retired,
        years_worked,
        work_medal: work_medal(years_worked, penible),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn career_profiles() {
        assert_eq!(
            retirement_date(d(2000, 9, 1), None, CareerType::Normale),
            Some(d(2045, 9, 1))
        );
        assert_eq!(
            retirement_date(d(2000, 9, 1), None, CareerType::Longue),
            Some(d(2043, 9, 1))
        );
    }

    #[test]
    fn legal_age_interpolation() {
        assert_eq!(legal_age_months(1955), 744);
        assert_eq!(legal_age_months(1961), 744);
        assert_eq!(legal_age_months(1962), 747);
        assert_eq!(legal_age_months(1965), 758);
        assert_eq!(legal_age_months(1968), 768);
        assert_eq!(legal_age_months(1990), 768);
        for y in 1961..1968 {
            assert!(legal_age_months(y) <= legal_age_months(y + 1));
        }
    }

    #[test]
    fn birth_date_takes_precedence() {
        assert_eq!(
            retirement_date(d(1980, 9, 1), Some(d(1962, 3, 10)), CareerType::Normale),
            Some(d(2024, 6, 10))
        );
        assert_eq!(
            retirement_date(d(1990, 9, 1), Some(d(1970, 5, 4)), CareerType::Longue),
            Some(d(2034, 5, 4))
        );
    }

    #[test]
    fn birth_at_month_end_clamps_to_last_day() {
        assert_eq!(
            retirement_date(d(1980, 9, 1), Some(d(1962, 1, 31)), CareerType::Normale),
            Some(d(2024, 4, 30))
        );
        let f = project(
            d(1980, 9, 1),
            Some(d(1962, 1, 31)),
            false,
            CareerType::Normale,
            d(2020, 1, 1),
        )
        .unwrap();
        assert_eq!(f.date, d(2024, 4, 30));
        assert_eq!(f.years_worked, 39);

        // 29/02 birth, 62 years later is not a leap year
        assert_eq!(
            retirement_date(d(1980, 9, 1), Some(d(1960, 2, 29)), CareerType::Normale),
            Some(d(2022, 2, 28))
        );
    }

    #[test]
    fn impossible_projection_is_none() {
        assert_eq!(
            retirement_date(d(2000, 2, 29), None, CareerType::Normale),
            None
        );
        assert!(project(d(2000, 2, 29), None, false, CareerType::Normale, d(2025, 1, 1)).is_none());
    }

    #[test]
    fn countdown_before_retirement() {
        let f = project(d(2000, 9, 1), None, false, CareerType::Normale, d(2025, 9, 1)).unwrap();
        assert_eq!(f.date, d(2045, 9, 1));
        assert_eq!(f.years_remaining, 20);
        assert_eq!(f.years_retired, None);
        assert_eq!(f.years_worked, 25);
        assert_eq!(f.work_medal, Some("Médaille d'Argent"));
        assert_eq!(f.days_remaining, days_between(d(2025, 9, 1), d(2045, 9, 1)));
    }

    #[test]
    fn already_retired() {
        let f = project(d(1970, 9, 1), None, true, CareerType::Longue, d(2025, 1, 1)).unwrap();
        assert_eq!(f.date, d(2013, 9, 1));
        assert_eq!(f.days_remaining, 0);
        assert_eq!(f.years_remaining, 0);
        assert_eq!(f.years_retired, Some(11));
        assert_eq!(f.years_worked, 43);
        assert_eq!(f.work_medal, Some("Médaille de Grand Or"));
    }
}

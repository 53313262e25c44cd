use chrono::{Datelike, NaiveDate};

/// Next yearly occurrence of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occurrence {
    pub date: NaiveDate,
    pub days_remaining: i64,
    pub years_elapsed: i32,
}

/// The event's month/day in `year`. A 29 February falls back to
/// 28 February on non-leap years.
pub fn occurrence_in_year(date: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, date.month(), date.day()).or_else(|| {
        if date.month() == 2 && date.day() == 29 {
            NaiveDate::from_ymd_opt(year, 2, 28)
        } else {
            None
        }
    })
}

/// Candidate in the current year, pushed to next year when strictly before
/// `today`. An occurrence on `today` itself counts as 0 days remaining.
pub fn next_occurrence(date: NaiveDate, today: NaiveDate) -> Option<Occurrence> {
    let mut candidate = occurrence_in_year(date, today.year())?;
    if candidate < today {
        candidate = occurrence_in_year(date, today.year() + 1)?;
    }

    Some(Occurrence {
        date: candidate,
        days_remaining: (candidate - today).num_days(),
        years_elapsed: candidate.year() - date.year(),
    })
}

//! French public holidays: fixed dates plus the Easter-based movable feasts.

use chrono::{Datelike, Duration, NaiveDate};

pub const NO_HOLIDAY: &str = "Aucun jour férié";

/// (month, day, name)
const FIXED_HOLIDAYS: &[(u32, u32, &str)] = &[
    (1, 1, "Jour de l'An"),
    (5, 1, "Fête du Travail"),
    (5, 8, "Victoire 1945"),
    (7, 14, "Fête Nationale"),
    (8, 15, "Assomption"),
    (11, 1, "Toussaint"),
    (11, 11, "Armistice 1918"),
    (12, 25, "Noël"),
];

/// (days after Easter Sunday, name)
const EASTER_HOLIDAYS: &[(i64, &str)] = &[
    (1, "Lundi de Pâques"),
    (39, "Ascension"),
    (50, "Lundi de Pentecôte"),
];

/// Easter Sunday for a Gregorian year (anonymous Gregorian algorithm).
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    if year < 1583 {
        return None;
    }

    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;

    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;

    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}

/// Name of the public holiday falling on `date`, if any.
pub fn public_holiday(date: NaiveDate) -> Option<&'static str> {
    if let Some((_, _, name)) = FIXED_HOLIDAYS
        .iter()
        .find(|(m, d, _)| *m == date.month() && *d == date.day())
    {
        return Some(*name);
    }

    let easter = easter_sunday(date.year())?;
    EASTER_HOLIDAYS
        .iter()
        .find(|(offset, _)| easter + Duration::days(*offset) == date)
        .map(|(_, name)| *name)
}

/// All holidays of a year, sorted by date.
pub fn holidays_of_year(year: i32) -> Vec<(NaiveDate, &'static str)> {
    let mut out: Vec<(NaiveDate, &'static str)> = FIXED_HOLIDAYS
        .iter()
        .filter_map(|(m, d, name)| NaiveDate::from_ymd_opt(year, *m, *d).map(|dt| (dt, *name)))
        .collect();

    if let Some(easter) = easter_sunday(year) {
        for (offset, name) in EASTER_HOLIDAYS {
            out.push((easter + Duration::days(*offset), *name));
        }
    }

    out.sort_by_key(|(d, _)| *d);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn easter_dates() {
        assert_eq!(easter_sunday(2024), Some(d(2024, 3, 31)));
        assert_eq!(easter_sunday(2025), Some(d(2025, 4, 20)));
        assert_eq!(easter_sunday(2026), Some(d(2026, 4, 5)));
        assert_eq!(easter_sunday(1500), None);
    }

    #[test]
    fn fixed_and_movable_holidays() {
        assert_eq!(public_holiday(d(2025, 7, 14)), Some("Fête Nationale"));
        assert_eq!(public_holiday(d(2025, 4, 21)), Some("Lundi de Pâques"));
        assert_eq!(public_holiday(d(2025, 5, 29)), Some("Ascension"));
        assert_eq!(public_holiday(d(2025, 6, 9)), Some("Lundi de Pentecôte"));
        assert_eq!(public_holiday(d(2025, 6, 10)), None);
    }

    #[test]
    fn year_listing_is_sorted() {
        let all = holidays_of_year(2025);
        assert_eq!(all.len(), 11);
        assert!(all.windows(2).all(|w| w[0].0 <= w[1].0));
        assert_eq!(all[0], (d(2025, 1, 1), "Jour de l'An"));
    }
}

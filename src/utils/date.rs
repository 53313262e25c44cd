use chrono::{Datelike, Duration, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

static DMY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{2}/\d{2}/\d{4}$").unwrap());

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Strict `DD/MM/YYYY` shape check, without calendar validation.
pub fn is_dmy_format(s: &str) -> bool {
    DMY_RE.is_match(s.trim())
}

/// Parse a `DD/MM/YYYY` string into a real calendar date.
/// Rejects wrong shapes and impossible dates (31/02, 29/02 on non-leap years).
pub fn parse_dmy(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if !is_dmy_format(s) {
        return None;
    }
    NaiveDate::parse_from_str(s, "%d/%m/%Y").ok()
}

pub fn format_dmy(d: NaiveDate) -> String {
    d.format("%d/%m/%Y").to_string()
}

/// Parse an ISO `YYYY-MM-DD` date (CLI options).
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Accept either `YYYY-MM-DD` or `DD/MM/YYYY`.
pub fn parse_any(s: &str) -> Option<NaiveDate> {
    parse_date(s).or_else(|| parse_dmy(s))
}

/// Whole years elapsed from `from` to `to`: the year difference, minus one
/// when `to`'s (month, day) comes before `from`'s.
pub fn full_years_between(from: NaiveDate, to: NaiveDate) -> i32 {
    let mut years = to.year() - from.year();
    if (to.month(), to.day()) < (from.month(), from.day()) {
        years -= 1;
    }
    years
}

pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

pub fn add_days(d: NaiveDate, days: i64) -> Option<NaiveDate> {
    d.checked_add_signed(Duration::days(days))
}

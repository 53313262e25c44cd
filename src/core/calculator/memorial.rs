use crate::utils::date::full_years_between;
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MemorialFacts {
    pub age_if_alive: i32,
    pub age_at_death: Option<i32>,
    pub years_since_death: Option<i32>,
}

/// Ages derived from a birth date and an optional death date. The age the
/// person would have today is computed even when the death date is known.
pub fn memorial_facts(birth: NaiveDate, death: Option<NaiveDate>, today: NaiveDate) -> MemorialFacts {
    MemorialFacts {
        age_if_alive: full_years_between(birth, today),
        age_at_death: death.map(|d| full_years_between(birth, d)),
        years_since_death: death.map(|d| full_years_between(d, today)),
    }
}

use super::memorial::memorial_facts;
use super::occurrence::next_occurrence;
use super::retirement::project;
use crate::models::countdown::CountdownResult;
use crate::models::event::{Event, EventKind};
use crate::models::record::EventRecord;
use crate::tables::age::age_category;
use crate::tables::wedding::wedding_label;
use crate::utils::date::full_years_between;
use chrono::NaiveDate;

/// Evaluate a raw record. Anything that does not validate (bad date,
/// unknown type, ...) yields the empty "no data" result.
pub fn compute(record: &EventRecord, today: NaiveDate) -> CountdownResult {
    match Event::from_record(record) {
        Ok(event) => compute_event(&event, today),
        Err(_) => CountdownResult::empty(),
    }
}

/// Evaluate a validated event.
pub fn compute_event(event: &Event, today: NaiveDate) -> CountdownResult {
    match &event.kind {
        EventKind::Retirement {
            start,
            birth,
            penible,
            career,
        } => {
            let Some(f) = project(*start, *birth, *penible, *career, today) else {
                return CountdownResult::empty();
            };
            CountdownResult {
                days_remaining: Some(f.days_remaining),
                years_elapsed: Some(f.years_worked),
                next_occurrence: Some(f.date),
                retirement_date: Some(f.date),
                years_remaining: Some(f.years_remaining),
                years_retired: f.years_retired,
                years_worked: Some(f.years_worked),
                work_medal: f.work_medal,
                ..Default::default()
            }
        }
        kind => {
            let anchor = kind.anchor_date();
            let Some(occ) = next_occurrence(anchor, today) else {
                return CountdownResult::empty();
            };

            let mut result = CountdownResult {
                days_remaining: Some(occ.days_remaining),
                years_elapsed: Some(occ.years_elapsed),
                next_occurrence: Some(occ.date),
                ..Default::default()
            };

            match kind {
                EventKind::Birthday { date } => {
                    let age = full_years_between(*date, today);
                    result.age = (age >= 0).then_some(age);
                    result.age_category = age_category(occ.years_elapsed);
                }
                EventKind::Anniversary { .. } => {
                    result.wedding_label = wedding_label(occ.years_elapsed);
                }
                EventKind::Memorial { birth, death } => {
                    let facts = memorial_facts(*birth, *death, today);
                    result.age_if_alive = Some(facts.age_if_alive);
                    result.age_at_death = facts.age_at_death;
                    result.years_since_death = facts.years_since_death;
                }
                _ => {}
            }

            result
        }
    }
}

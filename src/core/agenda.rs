use crate::core::calculator::compute_event;
use crate::errors::{AppError, AppResult};
use crate::models::countdown::CountdownResult;
use crate::models::event::Event;
use crate::models::record::EventRecord;
use chrono::NaiveDate;

/// One event shown in the agenda.
#[derive(Debug, Clone)]
pub struct AgendaEntry {
    pub date: NaiveDate,
    pub event: Event,
    pub result: CountdownResult,
}

impl AgendaEntry {
    /// "{prefix} - {label}", as in the overview title.
    pub fn summary(&self) -> String {
        format!("{} - {}", self.event.prefix(), self.event.event_type().label())
    }
}

/// Events whose next occurrence (seen from `today`) falls in `[from, to)`,
/// sorted by that date. Records that do not validate are skipped.
pub fn agenda(
    records: &[EventRecord],
    today: NaiveDate,
    from: NaiveDate,
    to: NaiveDate,
) -> AppResult<Vec<AgendaEntry>> {
    if to <= from {
        return Err(AppError::InvalidRange(format!(
            "{} is not before {}",
            from.format("%Y-%m-%d"),
            to.format("%Y-%m-%d")
        )));
    }

    let mut out: Vec<AgendaEntry> = records
        .iter()
        .filter_map(|r| Event::from_record(r).ok())
        .filter_map(|event| {
            let result = compute_event(&event, today);
            let date = result.next_occurrence?;
            (from <= date && date < to).then_some(AgendaEntry {
                date,
                event,
                result,
            })
        })
        .collect();

    out.sort_by_key(|e| (e.date, e.event.id));
    Ok(out)
}

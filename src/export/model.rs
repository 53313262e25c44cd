use crate::core::calculator::compute;
use crate::models::event::Event;
use crate::models::record::EventRecord;
use crate::utils::date::format_dmy;
use chrono::NaiveDate;
use serde::Serialize;

const FALLBACK_ICON: &str = "mdi:calendar";

/// Flat export row: one event with its countdown on a given day.
/// Unset facts stay empty in CSV and `null` in JSON.
#[derive(Serialize, Clone, Debug)]
pub struct EventExport {
    pub id: i64,
    pub sensor_id: String,
    pub friendly_name: String,
    pub icon: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub date: String,
    pub state: Option<i64>,
    pub years: Option<i32>,
    pub next_occurrence: Option<String>,
    pub age: Option<i32>,
    pub age_category: Option<String>,
    pub wedding_type: Option<String>,
    pub age_if_alive: Option<i32>,
    pub age_at_death: Option<i32>,
    pub years_since_death: Option<i32>,
    pub retirement_date: Option<String>,
    pub years_remaining: Option<i32>,
    pub years_retired: Option<i32>,
    pub years_worked: Option<i32>,
    pub work_medal: Option<String>,
}

impl EventExport {
    /// Records that no longer validate are exported with an empty countdown.
    pub fn from_record(rec: &EventRecord, today: NaiveDate) -> Self {
        let r = compute(rec, today);
        let (sensor_id, friendly_name, icon) = match Event::from_record(rec) {
            Ok(ev) => (ev.sensor_id(), ev.friendly_name(), ev.icon().to_string()),
            Err(_) => (String::new(), rec.prefix(), FALLBACK_ICON.to_string()),
        };

        Self {
            id: rec.id,
            sensor_id,
            friendly_name,
            icon,
            kind: rec.kind.clone(),
            date: rec.display_date().to_string(),
            state: r.days_remaining,
            years: r.years_elapsed,
            next_occurrence: r.next_occurrence.map(format_dmy),
            age: r.age,
            age_category: r.age_category.map(str::to_string),
            wedding_type: r.wedding_label.map(str::to_string),
            age_if_alive: r.age_if_alive,
            age_at_death: r.age_at_death,
            years_since_death: r.years_since_death,
            retirement_date: r.retirement_date.map(format_dmy),
            years_remaining: r.years_remaining,
            years_retired: r.years_retired,
            years_worked: r.years_worked,
            work_medal: r.work_medal.map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_record_exports_without_data() {
        let rec = EventRecord {
            id: 7,
            name: "Dupont".into(),
            kind: "birthday".into(),
            date: Some("31/02/1990".into()),
            ..Default::default()
        };
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let row = EventExport::from_record(&rec, today);
        assert_eq!(row.icon, "mdi:calendar");
        assert_eq!(row.friendly_name, "Dupont");
        assert_eq!(row.state, None);
        assert_eq!(row.date, "31/02/1990");
    }

    #[test]
    fn valid_record_carries_facts() {
        let rec = EventRecord {
            id: 1,
            name: "Dupont".into(),
            kind: "anniversary".into(),
            date: Some("10/06/2000".into()),
            ..Default::default()
        };
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let row = EventExport::from_record(&rec, today);
        assert_eq!(row.sensor_id, "anniversary_dupont_10062000");
        assert_eq!(row.state, Some(9));
        assert_eq!(row.years, Some(25));
        assert_eq!(row.wedding_type.as_deref(), Some("Noces d'Argent"));
        assert_eq!(row.next_occurrence.as_deref(), Some("10/06/2025"));
    }
}

use super::career::CareerType;
use super::event_type::EventType;
use super::record::{EventRecord, non_blank};
use crate::errors::{AppError, AppResult};
use crate::utils::date::{format_dmy, parse_dmy};
use chrono::NaiveDate;
use serde::Serialize;

/// Type-specific payload of an event. Each variant only carries the fields
/// that make sense for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventKind {
    Birthday {
        date: NaiveDate,
    },
    Anniversary {
        date: NaiveDate,
    },
    Memorial {
        birth: NaiveDate,
        death: Option<NaiveDate>,
    },
    Promotion {
        date: NaiveDate,
    },
    SpecialEvent {
        date: NaiveDate,
    },
    Retirement {
        start: NaiveDate,
        birth: Option<NaiveDate>,
        penible: bool,
        career: CareerType,
    },
}

/// A validated event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    pub id: i64,
    pub name: String,
    pub first_name: String,
    #[serde(flatten)]
    pub kind: EventKind,
}

fn required_date(value: &Option<String>, field: &'static str) -> AppResult<NaiveDate> {
    let raw = non_blank(value).ok_or(AppError::validation(field, "invalid_date_format"))?;
    parse_dmy(raw).ok_or(AppError::validation(field, "invalid_date_format"))
}

fn optional_date(
    value: &Option<String>,
    field: &'static str,
    code: &'static str,
) -> AppResult<Option<NaiveDate>> {
    match non_blank(value) {
        None => Ok(None),
        Some(raw) => parse_dmy(raw)
            .map(Some)
            .ok_or(AppError::validation(field, code)),
    }
}

impl EventKind {
    pub fn event_type(&self) -> EventType {
        match self {
            EventKind::Birthday { .. } => EventType::Birthday,
            EventKind::Anniversary { .. } => EventType::Anniversary,
            EventKind::Memorial { .. } => EventType::Memorial,
            EventKind::Promotion { .. } => EventType::Promotion,
            EventKind::SpecialEvent { .. } => EventType::SpecialEvent,
            EventKind::Retirement { .. } => EventType::Retirement,
        }
    }

    /// The date the countdown is anchored to: the event date, the birth
    /// date for memorials, the career start for retirement.
    pub fn anchor_date(&self) -> NaiveDate {
        match self {
            EventKind::Birthday { date }
            | EventKind::Anniversary { date }
            | EventKind::Promotion { date }
            | EventKind::SpecialEvent { date } => *date,
            EventKind::Memorial { birth, .. } => *birth,
            EventKind::Retirement { start, .. } => *start,
        }
    }
}

impl Event {
    /// Validate a raw record. Field errors carry the same codes the
    /// configuration forms report (`invalid_date_format`, ...).
    pub fn from_record(rec: &EventRecord) -> AppResult<Self> {
        let name = rec.name.trim();
        if name.is_empty() {
            return Err(AppError::validation("name", "name_required"));
        }

        let event_type = EventType::et_from_str(&rec.kind)
            .ok_or_else(|| AppError::InvalidEventType(rec.kind.clone()))?;

        let kind = match event_type {
            EventType::Retirement => {
                let start = required_date(&rec.start_date, "start_date")?;
                let birth = optional_date(&rec.birth_date, "birth_date", "invalid_date_format")?;
                let career = match non_blank(&rec.career_type) {
                    None => CareerType::default(),
                    Some(c) => CareerType::from_db_str(c)
                        .ok_or_else(|| AppError::InvalidCareerType(c.to_string()))?,
                };
                EventKind::Retirement {
                    start,
                    birth,
                    penible: rec.is_penible,
                    career,
                }
            }
            EventType::Memorial => {
                let birth = required_date(&rec.date, "date")?;
                let death = optional_date(&rec.death_date, "death_date", "invalid_memorial_date")?;
                if let Some(d) = death
                    && d < birth
                {
                    return Err(AppError::validation("death_date", "death_before_birth"));
                }
                EventKind::Memorial { birth, death }
            }
            EventType::Birthday => EventKind::Birthday {
                date: required_date(&rec.date, "date")?,
            },
            EventType::Anniversary => EventKind::Anniversary {
                date: required_date(&rec.date, "date")?,
            },
            EventType::Promotion => EventKind::Promotion {
                date: required_date(&rec.date, "date")?,
            },
            EventType::SpecialEvent => EventKind::SpecialEvent {
                date: required_date(&rec.date, "date")?,
            },
        };

        Ok(Self {
            id: rec.id,
            name: name.to_string(),
            first_name: rec.first_name.trim().to_string(),
            kind,
        })
    }

    /// Back to the storage shape. Fields irrelevant to the variant stay empty.
    pub fn to_record(&self) -> EventRecord {
        let mut rec = EventRecord {
            id: self.id,
            name: self.name.clone(),
            first_name: self.first_name.clone(),
            kind: self.event_type().to_db_str().to_string(),
            ..Default::default()
        };

        match &self.kind {
            EventKind::Birthday { date }
            | EventKind::Anniversary { date }
            | EventKind::Promotion { date }
            | EventKind::SpecialEvent { date } => {
                rec.date = Some(format_dmy(*date));
            }
            EventKind::Memorial { birth, death } => {
                rec.date = Some(format_dmy(*birth));
                rec.death_date = death.map(format_dmy);
            }
            EventKind::Retirement {
                start,
                birth,
                penible,
                career,
            } => {
                rec.start_date = Some(format_dmy(*start));
                rec.birth_date = birth.map(format_dmy);
                rec.is_penible = *penible;
                rec.career_type = Some(career.to_db_str().to_string());
            }
        }

        rec
    }

    pub fn event_type(&self) -> EventType {
        self.kind.event_type()
    }

    pub fn prefix(&self) -> String {
        if self.first_name.is_empty() {
            self.name.clone()
        } else {
            format!("{} {}", self.first_name, self.name)
        }
    }

    pub fn friendly_name(&self) -> String {
        let prefix = self.prefix();
        match self.event_type() {
            EventType::Birthday => format!("{prefix}'s birthday"),
            EventType::Anniversary => format!("{prefix}'s anniversary"),
            EventType::Memorial => format!("In memory of {prefix}"),
            EventType::Promotion => format!("{prefix}'s promotion"),
            EventType::SpecialEvent => format!("{prefix}'s special event"),
            EventType::Retirement => format!("{prefix}'s retirement"),
        }
    }

    /// Stable textual identifier: `{type}_{name}_{DDMMYYYY}`.
    pub fn sensor_id(&self) -> String {
        format!(
            "{}_{}_{}",
            self.event_type().to_db_str(),
            self.name.to_lowercase().replace(' ', "_"),
            self.kind.anchor_date().format("%d%m%Y")
        )
    }

    pub fn icon(&self) -> &'static str {
        self.event_type().icon()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(kind: &str) -> EventRecord {
        EventRecord {
            name: "Dupont".into(),
            first_name: "Marie".into(),
            kind: kind.into(),
            ..Default::default()
        }
    }

    #[test]
    fn birthday_requires_a_real_date() {
        let mut rec = record("birthday");
        rec.date = Some("31/02/2020".into());
        let err = Event::from_record(&rec).unwrap_err();
        assert!(matches!(
            err,
            AppError::Validation {
                field: "date",
                code: "invalid_date_format"
            }
        ));

        rec.date = Some("15/06/1990".into());
        let ev = Event::from_record(&rec).unwrap();
        assert_eq!(ev.friendly_name(), "Marie Dupont's birthday");
        assert_eq!(ev.sensor_id(), "birthday_dupont_15061990");
        assert_eq!(ev.icon(), "mdi:cake");
    }

    #[test]
    fn memorial_death_date_is_checked() {
        let mut rec = record("memorial");
        rec.date = Some("01/01/1950".into());
        rec.death_date = Some("32/01/2020".into());
        assert!(matches!(
            Event::from_record(&rec).unwrap_err(),
            AppError::Validation {
                field: "death_date",
                code: "invalid_memorial_date"
            }
        ));

        rec.death_date = Some("01/01/1940".into());
        assert!(matches!(
            Event::from_record(&rec).unwrap_err(),
            AppError::Validation {
                code: "death_before_birth",
                ..
            }
        ));

        rec.death_date = Some(String::new());
        let ev = Event::from_record(&rec).unwrap();
        assert_eq!(ev.friendly_name(), "In memory of Marie Dupont");
        assert!(matches!(ev.kind, EventKind::Memorial { death: None, .. }));
    }

    #[test]
    fn retirement_uses_start_date_and_defaults_career() {
        let mut rec = record("retirement");
        rec.date = Some("not a date".into());
        rec.start_date = Some("01/09/2000".into());
        let ev = Event::from_record(&rec).unwrap();
        match ev.kind {
            EventKind::Retirement {
                career, penible, ..
            } => {
                assert_eq!(career, CareerType::Normale);
                assert!(!penible);
            }
            other => panic!("unexpected kind {other:?}"),
        }

        rec.career_type = Some("partielle".into());
        assert!(matches!(
            Event::from_record(&rec).unwrap_err(),
            AppError::InvalidCareerType(_)
        ));
    }

    #[test]
    fn to_record_only_keeps_relevant_fields() {
        let mut rec = record("anniversary");
        rec.date = Some("20/05/2000".into());
        rec.death_date = Some("01/01/2001".into());
        rec.is_penible = true;

        let ev = Event::from_record(&rec).unwrap();
        let back = ev.to_record();
        assert_eq!(back.date.as_deref(), Some("20/05/2000"));
        assert_eq!(back.death_date, None);
        assert!(!back.is_penible);
        assert_eq!(back.kind, "anniversary");
    }

    #[test]
    fn unknown_type_and_blank_name_are_rejected() {
        let mut rec = record("wedding");
        rec.date = Some("20/05/2000".into());
        assert!(matches!(
            Event::from_record(&rec).unwrap_err(),
            AppError::InvalidEventType(_)
        ));

        let mut rec = record("birthday");
        rec.name = "   ".into();
        rec.date = Some("20/05/2000".into());
        assert!(matches!(
            Event::from_record(&rec).unwrap_err(),
            AppError::Validation { field: "name", .. }
        ));
    }
}

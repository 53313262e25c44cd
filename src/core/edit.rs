use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{load_event, update_event};
use crate::errors::AppResult;
use crate::models::career::CareerType;
use crate::models::event::Event;
use crate::models::event_type::EventType;
use crate::models::record::EventRecord;
use crate::ui::messages::warning;

/// Field overrides for an existing event. `None` keeps the stored value;
/// an empty string clears an optional date.
#[derive(Debug, Default, Clone)]
pub struct EventPatch {
    pub kind: Option<EventType>,
    pub name: Option<String>,
    pub first_name: Option<String>,
    pub date: Option<String>,
    pub death_date: Option<String>,
    pub start_date: Option<String>,
    pub birth_date: Option<String>,
    pub penible: Option<bool>,
    pub career: Option<CareerType>,
}

impl EventPatch {
    pub fn is_empty(&self) -> bool {
        self.kind.is_none()
            && self.name.is_none()
            && self.first_name.is_none()
            && self.date.is_none()
            && self.death_date.is_none()
            && self.start_date.is_none()
            && self.birth_date.is_none()
            && self.penible.is_none()
            && self.career.is_none()
    }

    pub fn apply_to(&self, rec: &mut EventRecord) {
        if let Some(k) = self.kind {
            rec.kind = k.to_db_str().to_string();
        }
        if let Some(v) = &self.name {
            rec.name = v.clone();
        }
        if let Some(v) = &self.first_name {
            rec.first_name = v.clone();
        }
        if let Some(v) = &self.date {
            rec.date = Some(v.clone());
        }
        if let Some(v) = &self.death_date {
            rec.death_date = Some(v.clone());
        }
        if let Some(v) = &self.start_date {
            rec.start_date = Some(v.clone());
        }
        if let Some(v) = &self.birth_date {
            rec.birth_date = Some(v.clone());
        }
        if let Some(p) = self.penible {
            rec.is_penible = p;
        }
        if let Some(c) = self.career {
            rec.career_type = Some(c.to_db_str().to_string());
        }
    }
}

pub struct EditLogic;

impl EditLogic {
    /// Merge `patch` onto the stored event `id`, re-validate and save.
    /// `default_career` applies when the event becomes a retirement without
    /// a career profile.
    pub fn apply(
        pool: &mut DbPool,
        id: i64,
        patch: &EventPatch,
        default_career: CareerType,
    ) -> AppResult<Event> {
        let mut rec = load_event(&pool.conn, id)?;
        patch.apply_to(&mut rec);
        rec.fill_default_career(default_career);

        let event = Event::from_record(&rec)?;
        update_event(&pool.conn, &event.to_record())?;

        if let Err(e) = ttlog(
            &pool.conn,
            "edit",
            &event.sensor_id(),
            &format!("Updated #{} {}", id, event.friendly_name()),
        ) {
            warning(format!("Failed to write internal log: {}", e));
        }

        Ok(event)
    }
}

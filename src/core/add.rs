use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::insert_event;
use crate::errors::AppResult;
use crate::models::event::Event;
use crate::models::record::EventRecord;

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Validate `rec`, store its normalized form and return the stored event
    /// with its generated id.
    pub fn apply(pool: &mut DbPool, rec: &EventRecord, source: &str) -> AppResult<Event> {
        let mut event = Event::from_record(rec)?;
        let id = insert_event(&pool.conn, &event.to_record(), source)?;
        event.id = id;

        if let Err(e) = ttlog(
            &pool.conn,
            "add",
            &event.sensor_id(),
            &format!("Added #{} {}", id, event.friendly_name()),
        ) {
            crate::ui::messages::warning(format!("Failed to write internal log: {}", e));
        }

        Ok(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::initialize::init_db;
    use crate::db::queries::load_event;
    use crate::errors::AppError;

    #[test]
    fn stores_normalized_record() {
        let mut pool = DbPool::in_memory().unwrap();
        init_db(&pool.conn).unwrap();

        let rec = EventRecord {
            name: "  Dupont ".into(),
            kind: "Birthday".into(),
            date: Some("15/06/1990".into()),
            death_date: Some("01/01/2000".into()),
            ..Default::default()
        };
        let ev = AddLogic::apply(&mut pool, &rec, "cli").unwrap();
        let stored = load_event(&pool.conn, ev.id).unwrap();
        assert_eq!(stored.name, "Dupont");
        assert_eq!(stored.kind, "birthday");
        assert_eq!(stored.death_date, None);
    }

    #[test]
    fn rejects_invalid_input_without_storing() {
        let mut pool = DbPool::in_memory().unwrap();
        init_db(&pool.conn).unwrap();

        let rec = EventRecord {
            name: "Dupont".into(),
            kind: "birthday".into(),
            date: Some("29/02/2023".into()),
            ..Default::default()
        };
        assert!(matches!(
            AddLogic::apply(&mut pool, &rec, "cli"),
            Err(AppError::Validation { field: "date", .. })
        ));
        assert_eq!(crate::db::queries::count_events(&pool.conn).unwrap(), 0);
    }
}

use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::event_type::EventType;
use crate::models::record::EventRecord;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const SELECT_EVENTS: &str = "SELECT id, name, first_name, kind, date, death_date, start_date,
                                    birth_date, is_penible, career_type
                             FROM events";

pub fn map_row(row: &Row) -> Result<EventRecord> {
    Ok(EventRecord {
        id: row.get("id")?,
        name: row.get("name")?,
        first_name: row.get("first_name")?,
        kind: row.get("kind")?,
        date: row.get("date")?,
        death_date: row.get("death_date")?,
        start_date: row.get("start_date")?,
        birth_date: row.get("birth_date")?,
        is_penible: row.get::<_, i64>("is_penible")? != 0,
        career_type: row.get("career_type")?,
    })
}

/// All events in insertion order.
pub fn load_events(pool: &mut DbPool) -> AppResult<Vec<EventRecord>> {
    let mut stmt = pool
        .conn
        .prepare(&format!("{SELECT_EVENTS} ORDER BY id ASC"))?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_events_by_type(pool: &mut DbPool, kind: EventType) -> AppResult<Vec<EventRecord>> {
    let mut stmt = pool
        .conn
        .prepare(&format!("{SELECT_EVENTS} WHERE kind = ?1 ORDER BY id ASC"))?;

    let rows = stmt.query_map([kind.to_db_str()], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_event(conn: &Connection, id: i64) -> AppResult<EventRecord> {
    let mut stmt = conn.prepare(&format!("{SELECT_EVENTS} WHERE id = ?1"))?;
    stmt.query_row([id], map_row)
        .optional()?
        .ok_or(AppError::EventNotFound(id))
}

/// Insert a new event and return its generated id.
pub fn insert_event(conn: &Connection, rec: &EventRecord, source: &str) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO events (name, first_name, kind, date, death_date, start_date,
                             birth_date, is_penible, career_type, source, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        params![
            rec.name,
            rec.first_name,
            rec.kind,
            rec.date,
            rec.death_date,
            rec.start_date,
            rec.birth_date,
            rec.is_penible as i64,
            rec.career_type,
            source,
            Local::now().to_rfc3339(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Update an event (all fields except id, source and created_at).
pub fn update_event(conn: &Connection, rec: &EventRecord) -> AppResult<()> {
    let changed = conn.execute(
        "UPDATE events
         SET name = ?1, first_name = ?2, kind = ?3,
             date = ?4, death_date = ?5, start_date = ?6, birth_date = ?7,
             is_penible = ?8, career_type = ?9, updated_at = ?10
         WHERE id = ?11",
        params![
            rec.name,
            rec.first_name,
            rec.kind,
            rec.date,
            rec.death_date,
            rec.start_date,
            rec.birth_date,
            rec.is_penible as i64,
            rec.career_type,
            Local::now().to_rfc3339(),
            rec.id,
        ],
    )?;

    if changed == 0 {
        return Err(AppError::EventNotFound(rec.id));
    }
    Ok(())
}

pub fn delete_event(conn: &Connection, id: i64) -> AppResult<()> {
    let changed = conn.execute("DELETE FROM events WHERE id = ?1", [id])?;
    if changed == 0 {
        return Err(AppError::EventNotFound(id));
    }
    Ok(())
}

pub fn count_events(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM events", [], |row| row.get(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::initialize::init_db;

    fn pool() -> DbPool {
        let pool = DbPool::in_memory().unwrap();
        init_db(&pool.conn).unwrap();
        pool
    }

    fn birthday(name: &str) -> EventRecord {
        EventRecord {
            name: name.into(),
            kind: "birthday".into(),
            date: Some("15/06/1990".into()),
            ..Default::default()
        }
    }

    #[test]
    fn ids_are_stable_across_deletes() {
        let mut pool = pool();
        let a = insert_event(&pool.conn, &birthday("A"), "cli").unwrap();
        let b = insert_event(&pool.conn, &birthday("B"), "cli").unwrap();
        let c = insert_event(&pool.conn, &birthday("C"), "cli").unwrap();

        delete_event(&pool.conn, a).unwrap();

        let events = load_events(&mut pool).unwrap();
        assert_eq!(events.iter().map(|e| e.id).collect::<Vec<_>>(), vec![b, c]);
        assert_eq!(load_event(&pool.conn, c).unwrap().name, "C");

        let d = insert_event(&pool.conn, &birthday("D"), "cli").unwrap();
        assert!(d > c);
    }

    #[test]
    fn update_and_missing_ids() {
        let mut pool = pool();
        let id = insert_event(&pool.conn, &birthday("A"), "cli").unwrap();

        let mut rec = load_event(&pool.conn, id).unwrap();
        rec.kind = "retirement".into();
        rec.date = None;
        rec.start_date = Some("01/09/2000".into());
        rec.is_penible = true;
        rec.career_type = Some("longue".into());
        update_event(&pool.conn, &rec).unwrap();

        let back = load_event(&pool.conn, id).unwrap();
        assert_eq!(back, rec);
        assert_eq!(load_events_by_type(&mut pool, EventType::Retirement).unwrap().len(), 1);
        assert!(load_events_by_type(&mut pool, EventType::Birthday).unwrap().is_empty());

        assert!(matches!(
            load_event(&pool.conn, 999),
            Err(AppError::EventNotFound(999))
        ));
        assert!(matches!(
            delete_event(&pool.conn, 999),
            Err(AppError::EventNotFound(999))
        ));
        assert_eq!(count_events(&pool.conn).unwrap(), 1);
    }
}

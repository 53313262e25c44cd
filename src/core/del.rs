use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_event, load_event};
use crate::errors::AppResult;
use crate::models::record::EventRecord;
use crate::ui::messages::warning;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete the event with the given id and return what was removed.
    pub fn apply(pool: &mut DbPool, id: i64) -> AppResult<EventRecord> {
        let rec = load_event(&pool.conn, id)?;
        delete_event(&pool.conn, id)?;

        if let Err(e) = ttlog(
            &pool.conn,
            "del",
            &format!("#{}", id),
            &format!("Deleted {} ({})", rec.prefix(), rec.kind),
        ) {
            warning(format!("Failed to write internal log: {}", e));
        }

        Ok(rec)
    }
}

use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::insert_event;
use crate::errors::{AppError, AppResult};
use crate::models::career::CareerType;
use crate::models::event::Event;
use crate::models::record::EventOptions;
use std::fs;
use std::path::Path;

/// Outcome of an import: stored events and rejected records.
#[derive(Debug, Default)]
pub struct ImportReport {
    pub imported: Vec<Event>,
    /// (position in the file, 1-based; label; error)
    pub rejected: Vec<(usize, String, AppError)>,
}

pub struct ImportLogic;

impl ImportLogic {
    pub fn read_options(path: &Path) -> AppResult<EventOptions> {
        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Import(format!("{}: {}", path.display(), e)))?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Validate every record and store the valid ones in one transaction.
    /// Retirement records without `career_type` get `default_career`.
    pub fn apply(
        pool: &mut DbPool,
        options: &EventOptions,
        default_career: CareerType,
    ) -> AppResult<ImportReport> {
        let mut report = ImportReport::default();
        let mut valid = Vec::new();

        for (i, rec) in options.events.iter().enumerate() {
            let mut rec = rec.clone();
            rec.fill_default_career(default_career);
            match Event::from_record(&rec) {
                Ok(ev) => valid.push(ev),
                Err(e) => report.rejected.push((i + 1, rec.prefix(), e)),
            }
        }

        report.imported = pool.with_conn(|conn| {
            let tx = conn.transaction()?;
            let mut stored = Vec::with_capacity(valid.len());
            for mut ev in valid {
                ev.id = insert_event(&tx, &ev.to_record(), "import")?;
                stored.push(ev);
            }
            ttlog(
                &tx,
                "import",
                "",
                &format!("Imported {} event(s)", stored.len()),
            )?;
            tx.commit()?;
            Ok(stored)
        })?;

        Ok(report)
    }
}

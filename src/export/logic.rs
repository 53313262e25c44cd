use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::load_events;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::EventExport;
use crate::ui::messages::warning;
use crate::utils::path::{expand_tilde, is_absolute};
use chrono::NaiveDate;

pub struct ExportLogic;

impl ExportLogic {
    /// Write every stored event with its countdown on `today`.
    /// `file` must be absolute once `~` is expanded. Returns the row count.
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        force: bool,
        today: NaiveDate,
    ) -> AppResult<usize> {
        if !is_absolute(file) {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        let path = expand_tilde(file);
        ensure_writable(&path, force)?;

        let rows: Vec<EventExport> = load_events(pool)?
            .iter()
            .map(|r| EventExport::from_record(r, today))
            .collect();

        if rows.is_empty() {
            warning("No events to export.");
            return Ok(0);
        }

        match format {
            ExportFormat::Csv => export_csv(&rows, &path)?,
            ExportFormat::Json => export_json(&rows, &path)?,
        }

        if let Err(e) = ttlog(
            &pool.conn,
            "export",
            format.as_str(),
            &format!("Exported {} event(s) to {}", rows.len(), path.display()),
        ) {
            warning(format!("Failed to write internal log: {}", e));
        }

        Ok(rows.len())
    }
}

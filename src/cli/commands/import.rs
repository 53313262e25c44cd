use crate::AppContext;
use crate::cli::parser::Commands;
use crate::core::import::ImportLogic;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{describe_field_error, info, success, warning};
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Import { file } = cmd {
        let path = expand_tilde(file);
        let options = ImportLogic::read_options(&path)?;

        if options.events.is_empty() {
            info("No events in file.");
            return Ok(());
        }

        let mut pool = super::open_pool(ctx)?;
        let report = ImportLogic::apply(&mut pool, &options, ctx.cfg.default_career)?;

        for ev in &report.imported {
            success(format!("#{} {}", ev.id, ev.friendly_name()));
        }

        for (pos, label, err) in &report.rejected {
            let reason = match err {
                AppError::Validation { field, code } => {
                    format!("{}: {}", field, describe_field_error(code))
                }
                other => other.to_string(),
            };
            warning(format!("Skipped record {} ({}): {}", pos, label, reason));
        }

        info(format!(
            "Imported {} event(s), skipped {}.",
            report.imported.len(),
            report.rejected.len()
        ));
    }

    Ok(())
}

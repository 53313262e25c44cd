use crate::AppContext;
use crate::cli::parser::Commands;
use crate::core::agenda::agenda;
use crate::db::queries::load_events;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{header, info};
use crate::utils::colors::{color_for_days, colorize_optional, paint};
use crate::utils::date::{add_days, format_dmy};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Agenda { from, to } = cmd {
        let from = super::date_or_today(from, ctx)?;
        let to = match to {
            Some(_) => super::date_or_today(to, ctx)?,
            None => add_days(from, ctx.cfg.agenda_days)
                .ok_or_else(|| AppError::InvalidRange(format!("{} + {} days", from, ctx.cfg.agenda_days)))?,
        };

        let mut pool = super::open_pool(ctx)?;
        let records = load_events(&mut pool)?;
        let entries = agenda(&records, ctx.today(), from, to)?;

        header(format!("Agenda {} → {}", format_dmy(from), format_dmy(to)));

        if entries.is_empty() {
            info("Nothing planned in this range.");
            return Ok(());
        }

        let mut table = Table::new(&["Date", "Jours", "Événement", "Années"], super::separator(ctx));
        for e in &entries {
            let days = e.result.days_remaining.unwrap_or_default();
            table.add_row(vec![
                format_dmy(e.date),
                paint(&days.to_string(), color_for_days(days)),
                e.summary(),
                colorize_optional(e.result.years_elapsed.map(|y| y.to_string())),
            ]);
        }

        print!("{}", table.render());
    }

    Ok(())
}

use crate::AppContext;
use crate::cli::parser::Commands;
use crate::errors::{AppError, AppResult};
use crate::tables::holidays::{NO_HOLIDAY, holidays_of_year, public_holiday};
use crate::ui::messages::header;
use crate::utils::date::format_dmy;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Holiday { date, year } = cmd {
        if let Some(y) = year {
            let days = holidays_of_year(*y);
            if days.is_empty() {
                return Err(AppError::InvalidDate(y.to_string()));
            }

            header(format!("Jours fériés {}", y));
            let mut table = Table::new(&["Date", "Jour férié"], super::separator(ctx));
            for (d, name) in days {
                table.add_row(vec![format_dmy(d), name.to_string()]);
            }
            print!("{}", table.render());
            return Ok(());
        }

        let day = super::date_or_today(date, ctx)?;
        println!(
            "📅 {} : {}",
            format_dmy(day),
            public_holiday(day).unwrap_or(NO_HOLIDAY)
        );
    }

    Ok(())
}

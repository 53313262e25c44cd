use crate::AppContext;
use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::tables::saints::saint_of_the_day;
use crate::utils::date::format_dmy;

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Saint { date } = cmd {
        let day = super::date_or_today(date, ctx)?;
        println!("🕯️  {} : {}", format_dmy(day), saint_of_the_day(day));
    }

    Ok(())
}

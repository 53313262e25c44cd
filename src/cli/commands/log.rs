use crate::AppContext;
use crate::cli::parser::Commands;
use crate::core::log::LogLogic;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let mut pool = super::open_pool(ctx)?;
        LogLogic::print_log(&mut pool)?;
    }

    Ok(())
}

use crate::AppContext;
use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let mut pool = super::open_pool(ctx)?;
        ExportLogic::export(&mut pool, *format, file, *force, ctx.today())?;
    }
    Ok(())
}

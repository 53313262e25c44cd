use crate::AppContext;
use crate::cli::parser::Commands;
use crate::core::edit::{EditLogic, EventPatch};
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Change fields of an existing event.
pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Edit {
        id,
        kind,
        name,
        first_name,
        date,
        death_date,
        start_date,
        birth_date,
        penible,
        not_penible,
        career,
    } = cmd
    {
        let patch = EventPatch {
            kind: *kind,
            name: name.clone(),
            first_name: first_name.clone(),
            date: date.clone(),
            death_date: death_date.clone(),
            start_date: start_date.clone(),
            birth_date: birth_date.clone(),
            penible: if *penible {
                Some(true)
            } else if *not_penible {
                Some(false)
            } else {
                None
            },
            career: *career,
        };

        if patch.is_empty() {
            warning("Nothing to change.");
            return Ok(());
        }

        let mut pool = super::open_pool(ctx)?;
        let event = EditLogic::apply(&mut pool, *id, &patch, ctx.cfg.default_career).map_err(super::explain)?;

        success(format!("Event #{} updated: {}", event.id, event.friendly_name()));
    }

    Ok(())
}

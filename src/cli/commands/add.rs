use crate::AppContext;
use crate::cli::parser::Commands;
use crate::core::add::AddLogic;
use crate::errors::AppResult;
use crate::models::record::EventRecord;
use crate::ui::messages::success;
use crate::core::calculator::compute_event;
use crate::utils::formatting::days2readable;

/// Add a new event.
pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Add {
        kind,
        name,
        first_name,
        date,
        death_date,
        start_date,
        birth_date,
        penible,
        career,
    } = cmd
    {
        let mut rec = EventRecord {
            id: 0,
            name: name.clone(),
            first_name: first_name.clone(),
            kind: kind.to_db_str().to_string(),
            date: date.clone(),
            death_date: death_date.clone(),
            start_date: start_date.clone(),
            birth_date: birth_date.clone(),
            is_penible: *penible,
            career_type: career.map(|c| c.to_db_str().to_string()),
        };
        rec.fill_default_career(ctx.cfg.default_career);

        let mut pool = super::open_pool(ctx)?;
        let event = AddLogic::apply(&mut pool, &rec, "cli").map_err(super::explain)?;

        success(format!("Event #{} added: {}", event.id, event.friendly_name()));

        let result = compute_event(&event, ctx.today());
        if let Some(days) = result.days_remaining {
            println!("⏳ {}", days2readable(days));
        }
    }

    Ok(())
}

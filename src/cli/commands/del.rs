use crate::AppContext;
use crate::cli::parser::Commands;
use crate::core::del::DeleteLogic;
use crate::db::queries::load_event;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let mut pool = super::open_pool(ctx)?;

        // fails with "No event with id" before prompting
        let rec = load_event(&pool.conn, *id)?;

        if !*yes {
            let prompt = format!(
                "Delete event #{} ({}, {})? This action is irreversible.",
                id,
                rec.prefix(),
                rec.kind
            );
            if !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        let removed = DeleteLogic::apply(&mut pool, *id)?;
        success(format!("Event #{} ({}) has been deleted.", id, removed.prefix()));
    }

    Ok(())
}

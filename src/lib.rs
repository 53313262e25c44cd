//! datecountdown library root.
//! Exposes the CLI parser, the high-level run() function and the internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod tables;
pub mod ui;
pub mod utils;

use chrono::NaiveDate;
use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::{AppError, AppResult};
use utils::clock::{Clock, FixedClock, SystemClock};

/// Everything a command needs: the effective configuration and the clock.
pub struct AppContext {
    pub cfg: Config,
    pub clock: Box<dyn Clock>,
}

impl AppContext {
    pub fn new(cfg: Config, clock: Box<dyn Clock>) -> Self {
        Self { cfg, clock }
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }
}

/// Central command dispatcher
pub fn dispatch(cli: &Cli, ctx: &AppContext) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, ctx),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, ctx),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, ctx),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, ctx),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, ctx),
        Commands::Edit { .. } => cli::commands::edit::handle(&cli.command, ctx),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, ctx),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, ctx),
        Commands::Show { .. } => cli::commands::show::handle(&cli.command, ctx),
        Commands::Agenda { .. } => cli::commands::agenda::handle(&cli.command, ctx),
        Commands::Saint { .. } => cli::commands::saint::handle(&cli.command, ctx),
        Commands::Holiday { .. } => cli::commands::holiday::handle(&cli.command, ctx),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, ctx),
        Commands::Import { .. } => cli::commands::import::handle(&cli.command, ctx),
    }
}

/// Build the clock: pinned by `--today`, otherwise the system date.
fn build_clock(today: Option<&str>) -> AppResult<Box<dyn Clock>> {
    match today {
        Some(s) => {
            let d = utils::date::parse_any(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?;
            Ok(Box::new(FixedClock(d)))
        }
        None => Ok(Box::new(SystemClock)),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // config is loaded once, then the --db override applies;
    // every command (init included) sees the same resolved path
    let mut cfg = Config::load()?;
    if let Some(custom_db) = &cli.db {
        cfg.database = utils::path::resolve(custom_db)?
            .to_string_lossy()
            .to_string();
    }

    let ctx = AppContext::new(cfg, build_clock(cli.today.as_deref())?);

    dispatch(&cli, &ctx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn today_flag_pins_the_clock() {
        let clock = build_clock(Some("2025-06-14")).unwrap();
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2025, 6, 14).unwrap());

        let clock = build_clock(Some("14/06/2025")).unwrap();
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2025, 6, 14).unwrap());

        assert!(matches!(
            build_clock(Some("tomorrow")),
            Err(AppError::InvalidDate(_))
        ));
    }
}

pub mod add;
pub mod agenda;
pub mod config;
pub mod db;
pub mod del;
pub mod edit;
pub mod export;
pub mod holiday;
pub mod import;
pub mod init;
pub mod list;
pub mod log;
pub mod saint;
pub mod show;

use crate::AppContext;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{describe_field_error, error};
use crate::utils::date::parse_any;
use chrono::NaiveDate;

/// Open the configured database, bringing its schema up to date.
pub(crate) fn open_pool(ctx: &AppContext) -> AppResult<DbPool> {
    let pool = DbPool::new(&ctx.cfg.database)?;
    init_db(&pool.conn)?;
    Ok(pool)
}

/// Optional date option, defaulting to today.
pub(crate) fn date_or_today(value: &Option<String>, ctx: &AppContext) -> AppResult<NaiveDate> {
    match value {
        Some(s) => parse_any(s).ok_or_else(|| AppError::InvalidDate(s.clone())),
        None => Ok(ctx.today()),
    }
}

/// Print the readable reason of a field error before it is propagated.
pub(crate) fn explain(err: AppError) -> AppError {
    if let AppError::Validation { field, code } = &err {
        error(format!("{}: {}", field, describe_field_error(code)));
    }
    err
}

/// First character of the configured separator, '-' when empty.
pub(crate) fn separator(ctx: &AppContext) -> char {
    ctx.cfg.separator_char.chars().next().unwrap_or('-')
}

use crate::db::migrate::{applied_versions, known_migrations};
use crate::db::pool::DbPool;
use crate::db::queries::count_events;
use crate::models::event_type::EventType;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) SCHEMA VERSION
    //
    let applied = applied_versions(&pool.conn)?;
    let latest = applied
        .last()
        .cloned()
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));
    println!(
        "{}• Migrations:{} {}/{} (latest: {})",
        CYAN,
        RESET,
        applied.len(),
        known_migrations(),
        latest
    );

    //
    // 3) TOTAL EVENTS, PER TYPE
    //
    let count = count_events(&pool.conn)?;
    println!(
        "{}• Total events:{} {}{}{}",
        CYAN, RESET, GREEN, count, RESET
    );

    for t in EventType::ALL {
        let n: i64 = pool.conn.query_row(
            "SELECT COUNT(*) FROM events WHERE kind = ?1",
            [t.to_db_str()],
            |row| row.get(0),
        )?;
        if n > 0 {
            println!("    {:<24} {}", t.label(), n);
        }
    }

    //
    // 4) CREATION RANGE
    //
    let first: Option<String> = pool
        .conn
        .query_row(
            "SELECT created_at FROM events ORDER BY id ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last: Option<String> = pool
        .conn
        .query_row(
            "SELECT created_at FROM events ORDER BY id DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    println!("{}• Created:{}", CYAN, RESET);
    println!(
        "    first: {}",
        first.unwrap_or_else(|| format!("{GREY}--{RESET}"))
    );
    println!(
        "    last:  {}",
        last.unwrap_or_else(|| format!("{GREY}--{RESET}"))
    );

    println!();
    Ok(())
}

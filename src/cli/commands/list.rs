use crate::AppContext;
use crate::cli::parser::Commands;
use crate::core::calculator::compute;
use crate::core::title::entry_title;
use crate::db::queries::{load_events, load_events_by_type};
use crate::errors::AppResult;
use crate::models::countdown::CountdownResult;
use crate::models::event_type::EventType;
use crate::tables::holidays::{NO_HOLIDAY, public_holiday};
use crate::tables::saints::saint_of_the_day;
use crate::ui::messages::{header, info};
use crate::utils::colors::{color_for_days, colorize_optional, paint};
use crate::utils::describe_type;
use crate::utils::table::Table;

/// Type-specific facts shown in the last column.
fn details(result: &CountdownResult) -> Option<String> {
    let parts: Vec<String> = result
        .attributes()
        .into_iter()
        .filter(|(k, _)| !matches!(*k, "years" | "next_occurrence"))
        .map(|(k, v)| format!("{k}: {v}"))
        .collect();

    (!parts.is_empty()).then(|| parts.join(", "))
}

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::List { kind } = cmd {
        let mut pool = super::open_pool(ctx)?;
        let today = ctx.today();

        let records = match kind {
            Some(k) => load_events_by_type(&mut pool, *k)?,
            None => load_events(&mut pool)?,
        };

        header(entry_title(&records));

        if ctx.cfg.show_saint {
            println!("🕯️  {}", saint_of_the_day(today));
        }
        if ctx.cfg.show_holiday {
            println!("📅 {}", public_holiday(today).unwrap_or(NO_HOLIDAY));
        }

        if records.is_empty() {
            info("No events found.");
            return Ok(());
        }

        let mut table = Table::new(
            &["ID", "Nom", "Type", "Date", "Jours", "Années", "Détails"],
            super::separator(ctx),
        );

        for rec in &records {
            let result = compute(rec, today);

            let type_cell = match EventType::et_from_str(&rec.kind) {
                Some(t) => {
                    let (label, color) = describe_type(t);
                    paint(label, color)
                }
                None => rec.kind.clone(),
            };

            let days_cell = match result.days_remaining {
                Some(d) => paint(&d.to_string(), color_for_days(d)),
                None => colorize_optional(None),
            };

            table.add_row(vec![
                rec.id.to_string(),
                rec.prefix(),
                type_cell,
                rec.display_date().to_string(),
                days_cell,
                colorize_optional(result.years_elapsed.map(|y| y.to_string())),
                colorize_optional(details(&result)),
            ]);
        }

        print!("{}", table.render());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn details_skip_generic_attributes() {
        let r = CountdownResult {
            days_remaining: Some(3),
            years_elapsed: Some(35),
            age: Some(34),
            age_category: Some("Adulte"),
            ..Default::default()
        };
        assert_eq!(details(&r).as_deref(), Some("age: 34, age_category: Adulte"));
        assert_eq!(details(&CountdownResult::empty()), None);
    }
}

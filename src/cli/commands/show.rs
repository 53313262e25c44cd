use crate::AppContext;
use crate::cli::parser::Commands;
use crate::core::calculator::compute_event;
use crate::db::queries::load_event;
use crate::errors::AppResult;
use crate::models::event::{Event, EventKind};
use crate::ui::messages::{header, warning};
use crate::utils::colors::{color_for_days, paint};
use crate::utils::formatting::{bold, days2readable, pad_right};

const LABEL_WIDTH: usize = 18;

fn line(label: &str, value: &str) {
    println!("{} {}", bold(&pad_right(label, LABEL_WIDTH)), value);
}

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Show { id } = cmd {
        let pool = super::open_pool(ctx)?;
        let rec = load_event(&pool.conn, *id)?;

        let event = match Event::from_record(&rec) {
            Ok(ev) => ev,
            Err(e) => {
                header(rec.prefix());
                line("id", &rec.id.to_string());
                line("type", &rec.kind);
                line("date", rec.display_date());
                warning(format!("No data: {}", e));
                return Ok(());
            }
        };

        let result = compute_event(&event, ctx.today());

        header(event.friendly_name());
        line("id", &event.id.to_string());
        line("sensor_id", &event.sensor_id());
        line("icon", event.icon());
        line("type", event.event_type().label());
        line("date", rec.display_date());

        match result.days_remaining {
            Some(d) => line(
                "state",
                &format!("{} ({})", paint(&d.to_string(), color_for_days(d)), days2readable(d)),
            ),
            None => line("state", "--"),
        }

        if result.is_empty() {
            warning("No data for today.");
            return Ok(());
        }

        for (key, value) in result.attributes() {
            line(key, &value);
        }

        if let EventKind::Retirement {
            career, penible, ..
        } = &event.kind
        {
            line("career", career.label());
            line("penible", if *penible { "oui" } else { "non" });
        }
    }

    Ok(())
}

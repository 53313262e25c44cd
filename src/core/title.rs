use crate::models::event_type::EventType;
use crate::models::record::EventRecord;

/// Overview title shown above the event list: empty marker, or the first two
/// events as "prefix - label", followed by "..." when there are more.
pub fn entry_title(records: &[EventRecord]) -> String {
    if records.is_empty() {
        return "Compte à rebours d'événements (vide)".to_string();
    }

    let parts: Vec<String> = records
        .iter()
        .take(2)
        .map(|r| {
            let label = EventType::et_from_str(&r.kind)
                .map(|t| t.label())
                .unwrap_or("Événement");
            format!("{} - {}", r.prefix(), label)
        })
        .collect();

    let mut title = parts.join(", ");
    if records.len() > 2 {
        title.push_str("...");
    }
    title
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(name: &str, kind: &str) -> EventRecord {
        EventRecord {
            name: name.into(),
            kind: kind.into(),
            ..Default::default()
        }
    }

    #[test]
    fn titles() {
        assert_eq!(entry_title(&[]), "Compte à rebours d'événements (vide)");

        let one = [rec("Dupont", "birthday")];
        assert_eq!(entry_title(&one), "Dupont - Anniversaire");

        let three = [
            rec("Dupont", "birthday"),
            rec("Martin", "memorial"),
            rec("Durand", "retirement"),
        ];
        assert_eq!(
            entry_title(&three),
            "Dupont - Anniversaire, Martin - Mémorial..."
        );
    }
}

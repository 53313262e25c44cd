use chrono::NaiveDate;
use serde::Serialize;

/// Derived facts for one event on one day. Recomputed on every read, never
/// stored. Every field is optional: the default value is the "no data"
/// result returned for records that cannot be evaluated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CountdownResult {
    pub days_remaining: Option<i64>,
    pub years_elapsed: Option<i32>,
    pub next_occurrence: Option<NaiveDate>,

    // birthday
    pub age: Option<i32>,
    pub age_category: Option<&'static str>,

    // anniversary
    pub wedding_label: Option<&'static str>,

    // memorial
    pub age_if_alive: Option<i32>,
    pub age_at_death: Option<i32>,
    pub years_since_death: Option<i32>,

    // retirement
    pub retirement_date: Option<NaiveDate>,
    pub years_remaining: Option<i32>,
    pub years_retired: Option<i32>,
    pub years_worked: Option<i32>,
    pub work_medal: Option<&'static str>,
}

impl CountdownResult {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Named auxiliary facts that are set, in display order.
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        fn push<T: ToString>(out: &mut Vec<(&'static str, String)>, key: &'static str, v: Option<T>) {
            if let Some(v) = v {
                out.push((key, v.to_string()));
            }
        }

        let mut out = Vec::new();
        push(&mut out, "years", self.years_elapsed);
        push(
            &mut out,
            "next_occurrence",
            self.next_occurrence.map(|d| d.format("%d/%m/%Y")),
        );
        push(&mut out, "age", self.age);
        push(&mut out, "age_category", self.age_category);
        push(&mut out, "wedding_type", self.wedding_label);
        push(&mut out, "age_if_alive", self.age_if_alive);
        push(&mut out, "age_at_death", self.age_at_death);
        push(&mut out, "years_since_death", self.years_since_death);
        push(
            &mut out,
            "retirement_date",
            self.retirement_date.map(|d| d.format("%d/%m/%Y")),
        );
        push(&mut out, "years_remaining", self.years_remaining);
        push(&mut out, "years_retired", self.years_retired);
        push(&mut out, "years_worked", self.years_worked);
        push(&mut out, "work_medal", self.work_medal);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_result_has_no_attributes() {
        let r = CountdownResult::empty();
        assert!(r.is_empty());
        assert!(r.attributes().is_empty());
    }

    #[test]
    fn attributes_skip_unset_fields() {
        let r = CountdownResult {
            days_remaining: Some(3),
            years_elapsed: Some(25),
            wedding_label: Some("Noces d'Argent"),
            ..Default::default()
        };
        let attrs = r.attributes();
        assert_eq!(
            attrs,
            vec![
                ("years", "25".to_string()),
                ("wedding_type", "Noces d'Argent".to_string())
            ]
        );
    }
}

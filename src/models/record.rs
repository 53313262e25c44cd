//! Raw, string-typed event record as stored in the `events` table or read
//! from an options JSON file (`{"events": [...]}`).

use super::career::CareerType;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    #[serde(skip)]
    pub id: i64, // ⇔ events.id (0 = not stored yet)

    pub name: String,

    #[serde(default)]
    pub first_name: String,

    #[serde(rename = "type")]
    pub kind: String, // ⇔ events.kind ('birthday', 'memorial', ...)

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>, // DD/MM/YYYY

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub death_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,

    #[serde(default)]
    pub is_penible: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub career_type: Option<String>,
}

/// Top-level shape of an options file.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct EventOptions {
    #[serde(default)]
    pub events: Vec<EventRecord>,
}

/// Treat blank strings like missing values (form defaults are `""`).
pub fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl EventRecord {
    /// The date shown next to the event: `date`, or `start_date` for retirement.
    pub fn display_date(&self) -> &str {
        non_blank(&self.date)
            .or_else(|| non_blank(&self.start_date))
            .unwrap_or("")
    }

    /// Give a retirement record without a career profile the configured one.
    pub fn fill_default_career(&mut self, career: CareerType) {
        if self.kind.trim() == "retirement" && non_blank(&self.career_type).is_none() {
            self.career_type = Some(career.to_db_str().to_string());
        }
    }

    /// "First Last" when a first name is set, otherwise just the name.
    pub fn prefix(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.name.trim())
            .trim()
            .to_string()
    }
}

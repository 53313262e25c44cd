use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Birthday,
    Anniversary,
    Memorial,
    Promotion,
    #[value(name = "special_event", alias = "special-event")]
    SpecialEvent,
    Retirement,
}

impl EventType {
    pub const ALL: [EventType; 6] = [
        EventType::Birthday,
        EventType::Anniversary,
        EventType::Memorial,
        EventType::Promotion,
        EventType::SpecialEvent,
        EventType::Retirement,
    ];

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            EventType::Birthday => "birthday",
            EventType::Anniversary => "anniversary",
            EventType::Memorial => "memorial",
            EventType::Promotion => "promotion",
            EventType::SpecialEvent => "special_event",
            EventType::Retirement => "retirement",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "birthday" => Some(EventType::Birthday),
            "anniversary" => Some(EventType::Anniversary),
            "memorial" => Some(EventType::Memorial),
            "promotion" => Some(EventType::Promotion),
            "special_event" => Some(EventType::SpecialEvent),
            "retirement" => Some(EventType::Retirement),
            _ => None,
        }
    }

    /// Lenient parser for user input (case-insensitive, `-` accepted for `_`).
    pub fn et_from_str(s: &str) -> Option<Self> {
        Self::from_db_str(&s.trim().to_lowercase().replace('-', "_"))
    }

    /// French label shown in titles and tables.
    pub fn label(&self) -> &'static str {
        match self {
            EventType::Birthday => "Anniversaire",
            EventType::Anniversary => "Anniversaire de mariage",
            EventType::Memorial => "Mémorial",
            EventType::Promotion => "Promotion",
            EventType::SpecialEvent => "Événement spécial",
            EventType::Retirement => "Retraite",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            EventType::Birthday => "mdi:cake",
            EventType::Anniversary => "mdi:ring",
            EventType::Memorial => "mdi:candle",
            EventType::Promotion => "mdi:briefcase",
            EventType::SpecialEvent => "mdi:star",
            EventType::Retirement => "mdi:account-clock",
        }
    }
}

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Career profile used by the retirement projection when no birth date is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CareerType {
    /// Started working at 18 or later.
    #[default]
    Normale,
    /// Started working before 18.
    Longue,
}

impl CareerType {
    /// Assumed age when the career started.
    pub fn start_age(&self) -> i32 {
        match self {
            CareerType::Longue => 17,
            CareerType::Normale => 19,
        }
    }

    /// Legal retirement age for this profile.
    pub fn retirement_age(&self) -> i32 {
        match self {
            CareerType::Longue => 60,
            CareerType::Normale => 64,
        }
    }

    pub fn years_to_retirement(&self) -> i32 {
        self.retirement_age() - self.start_age()
    }

    pub fn to_db_str(&self) -> &'static str {
        match self {
            CareerType::Normale => "normale",
            CareerType::Longue => "longue",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "normale" => Some(CareerType::Normale),
            "longue" => Some(CareerType::Longue),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CareerType::Longue => "Carrière longue (début avant 18 ans)",
            CareerType::Normale => "Carrière normale (début après 18 ans)",
        }
    }
}

// src/domain/locale/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Uk,
    En,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::Uk, Locale::En];

    pub fn code(&self) -> &'static str {
        match self {
            Locale::Uk => "uk",
            Locale::En => "en",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Locale::Uk => "🇺🇦 Українська",
            Locale::En => "🇬🇧 English",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "uk" => Ok(Locale::Uk),
            "en" => Ok(Locale::En),
            other => Err(DomainError::NotFound(format!("unknown locale '{other}'"))),
        }
    }
}

/// One entry of the locale switcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleOption {
    pub code: &'static str,
    pub label: &'static str,
}

impl From<Locale> for LocaleOption {
    fn from(locale: Locale) -> Self {
        Self {
            code: locale.code(),
            label: locale.label(),
        }
    }
}

pub fn parse_locale(code: &str) -> DomainResult<Locale> {
    code.parse()
}

//! The closed set of translation languages.
//!
//! Maps to the `language_code` Postgres enum. Spanish is the product's own
//! default language; a translation row only ever carries one of these codes.

use std::fmt;
use std::str::FromStr;

use rdj_core::error::CoreError;
use serde::{Deserialize, Serialize};

/// Supported translation language, in database declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "language_code", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Es,
    En,
}

/// All supported languages, in declaration order.
pub const ALL_LANGUAGES: &[Language] = &[Language::Es, Language::En];

impl Language {
    /// The two-letter language code stored in the database.
    pub fn as_str(self) -> &'static str {
        match self {
            Language::Es => "es",
            Language::En => "en",
        }
    }

    /// Human-readable name shown in administrative listings.
    pub fn display_name(self) -> &'static str {
        match self {
            Language::Es => "Español",
            Language::En => "English",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "es" => Ok(Language::Es),
            "en" => Ok(Language::En),
            other => Err(CoreError::Validation(format!(
                "Unknown language code: '{other}'. Valid codes: es, en"
            ))),
        }
    }
}

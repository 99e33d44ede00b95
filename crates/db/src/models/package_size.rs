//! The fixed vocabulary of package-size labels.
//!
//! Maps to the `package_size` Postgres enum. Labels are the exact strings
//! printed on the bottles ("250 ml", "1 L", ...) and are what the API
//! serializes; administrators pick from this set, never free text.

use std::fmt;
use std::str::FromStr;

use rdj_core::error::CoreError;
use serde::{Deserialize, Serialize};

/// A package size a product can be sold in, smallest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "package_size")]
pub enum PackageSize {
    #[sqlx(rename = "8 ml")]
    #[serde(rename = "8 ml")]
    Ml8,
    #[sqlx(rename = "10 ml")]
    #[serde(rename = "10 ml")]
    Ml10,
    #[sqlx(rename = "250 ml")]
    #[serde(rename = "250 ml")]
    Ml250,
    #[sqlx(rename = "500 ml")]
    #[serde(rename = "500 ml")]
    Ml500,
    #[sqlx(rename = "750 ml")]
    #[serde(rename = "750 ml")]
    Ml750,
    #[sqlx(rename = "1 L")]
    #[serde(rename = "1 L")]
    L1,
    #[sqlx(rename = "5 L")]
    #[serde(rename = "5 L")]
    L5,
    #[sqlx(rename = "10 L")]
    #[serde(rename = "10 L")]
    L10,
    #[sqlx(rename = "25 L")]
    #[serde(rename = "25 L")]
    L25,
}

/// All recognized package sizes, smallest first.
pub const ALL_PACKAGE_SIZES: &[PackageSize] = &[
    PackageSize::Ml8,
    PackageSize::Ml10,
    PackageSize::Ml250,
    PackageSize::Ml500,
    PackageSize::Ml750,
    PackageSize::L1,
    PackageSize::L5,
    PackageSize::L10,
    PackageSize::L25,
];

impl PackageSize {
    /// The label stored in the database and shown to customers.
    pub fn label(self) -> &'static str {
        match self {
            PackageSize::Ml8 => "8 ml",
            PackageSize::Ml10 => "10 ml",
            PackageSize::Ml250 => "250 ml",
            PackageSize::Ml500 => "500 ml",
            PackageSize::Ml750 => "750 ml",
            PackageSize::L1 => "1 L",
            PackageSize::L5 => "5 L",
            PackageSize::L10 => "10 L",
            PackageSize::L25 => "25 L",
        }
    }
}

impl fmt::Display for PackageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PackageSize {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_PACKAGE_SIZES
            .iter()
            .copied()
            .find(|size| size.label() == s)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Unknown package size: '{}'. Valid sizes: {}",
                    s,
                    ALL_PACKAGE_SIZES
                        .iter()
                        .map(|size| size.label())
                        .collect::<Vec<_>>()
                        .join(", ")
                ))
            })
    }
}

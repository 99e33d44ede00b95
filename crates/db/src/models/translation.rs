//! Product translation entity model and DTOs.

use rdj_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::language::Language;

/// A row from the `product_translations` table.
///
/// Logical identity is the `(product_id, language)` pair, enforced by the
/// `uq_product_translations_product_language` constraint; `id` is a
/// surrogate key per schema conventions.
#[derive(Debug, Clone, FromRow)]
pub struct ProductTranslation {
    pub id: DbId,
    pub product_id: DbId,
    pub language: Language,
    pub nombre: String,
    pub descripcion: String,
    pub fecha_creacion: Timestamp,
    pub fecha_actualizacion: Timestamp,
}

/// Wire shape of a translation inside a serialized product.
#[derive(Debug, Clone, Serialize)]
pub struct TranslationView {
    pub language: Language,
    pub language_display: &'static str,
    pub nombre: String,
    pub descripcion: String,
}

impl From<&ProductTranslation> for TranslationView {
    fn from(translation: &ProductTranslation) -> Self {
        Self {
            language: translation.language,
            language_display: translation.language.display_name(),
            nombre: translation.nombre.clone(),
            descripcion: translation.descripcion.clone(),
        }
    }
}

/// DTO for creating a translation for a product.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTranslation {
    pub product_id: DbId,
    pub language: Language,
    #[validate(length(min = 1, max = 200))]
    pub nombre: String,
    #[validate(length(min = 1))]
    pub descripcion: String,
}

/// DTO for updating a translation. Only non-`None` fields are applied.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateTranslation {
    #[validate(length(min = 1, max = 200))]
    pub nombre: Option<String>,
    #[validate(length(min = 1))]
    pub descripcion: Option<String>,
}

/// Which languages a product has translations for.
///
/// Derived, read-only view for the administrative listing; computed from
/// the loaded translation set, never stored.
#[derive(Debug, Clone, Serialize)]
pub struct TranslationStatus {
    pub product_id: DbId,
    pub nombre: String,
    pub languages: Vec<Language>,
}

impl TranslationStatus {
    /// Summarize which languages are covered, in declaration order.
    pub fn from_translations(
        product_id: DbId,
        nombre: &str,
        translations: &[ProductTranslation],
    ) -> Self {
        let mut languages: Vec<Language> = translations.iter().map(|t| t.language).collect();
        languages.sort();
        languages.dedup();

        Self {
            product_id,
            nombre: nombre.to_string(),
            languages,
        }
    }

    pub fn has_language(&self, language: Language) -> bool {
        self.languages.contains(&language)
    }
}

//! Product entity model, DTOs, and the translation resolver.

use rdj_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::language::Language;
use super::package_size::PackageSize;
use super::translation::{ProductTranslation, TranslationView};

/// A row from the `products` table.
///
/// `nombre` and `descripcion` hold the default-language (Spanish) text;
/// per-language overrides live in `product_translations`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Product {
    pub id: DbId,
    pub nombre: String,
    pub descripcion: String,
    pub imagen: Option<String>,
    pub formatos: Vec<PackageSize>,
    pub activo: bool,
    pub fecha_creacion: Timestamp,
    pub fecha_actualizacion: Timestamp,
}

/// A product enriched with its translations, as served by the read API.
///
/// `nombre_en` / `descripcion_en` are convenience fields resolved through
/// [`resolve`] with [`Language::En`] at construction time.
#[derive(Debug, Clone, Serialize)]
pub struct ProductWithTranslations {
    #[serde(flatten)]
    pub product: Product,
    pub translations: Vec<TranslationView>,
    pub nombre_en: String,
    pub descripcion_en: String,
}

impl ProductWithTranslations {
    /// Assemble the API shape from a product row and its translation rows.
    pub fn new(product: Product, translations: Vec<ProductTranslation>) -> Self {
        let english = resolve(&product, &translations, Language::En);
        let nombre_en = english.nombre.to_owned();
        let descripcion_en = english.descripcion.to_owned();

        Self {
            product,
            translations: translations.iter().map(TranslationView::from).collect(),
            nombre_en,
            descripcion_en,
        }
    }
}

/// Effective display text for a product in one language.
///
/// Borrows from the product or one of its translations; both fields always
/// come from the same source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedText<'a> {
    pub nombre: &'a str,
    pub descripcion: &'a str,
}

/// Resolve the effective name and description for `language`.
///
/// Two-tier lookup: an exact translation for `(product, language)` wins;
/// otherwise the product's own Spanish text is returned. A missing
/// translation is a normal state, not an error, and the fallback is never
/// partial — name and description are never mixed between sources.
pub fn resolve<'a>(
    product: &'a Product,
    translations: &'a [ProductTranslation],
    language: Language,
) -> ResolvedText<'a> {
    match translations.iter().find(|t| t.language == language) {
        Some(translation) => ResolvedText {
            nombre: &translation.nombre,
            descripcion: &translation.descripcion,
        },
        None => ResolvedText {
            nombre: &product.nombre,
            descripcion: &product.descripcion,
        },
    }
}

/// DTO for creating a new product.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProduct {
    #[validate(length(min = 1, max = 200))]
    pub nombre: String,
    #[validate(length(min = 1))]
    pub descripcion: String,
    #[validate(length(max = 500))]
    pub imagen: Option<String>,
    #[serde(default)]
    pub formatos: Vec<PackageSize>,
    pub activo: Option<bool>,
}

/// DTO for updating an existing product. Only non-`None` fields are applied.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProduct {
    #[validate(length(min = 1, max = 200))]
    pub nombre: Option<String>,
    #[validate(length(min = 1))]
    pub descripcion: Option<String>,
    #[validate(length(max = 500))]
    pub imagen: Option<String>,
    pub formatos: Option<Vec<PackageSize>>,
    pub activo: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn product(nombre: &str, descripcion: &str) -> Product {
        Product {
            id: 1,
            nombre: nombre.to_string(),
            descripcion: descripcion.to_string(),
            imagen: None,
            formatos: vec![PackageSize::Ml250, PackageSize::L1],
            activo: true,
            fecha_creacion: Utc::now(),
            fecha_actualizacion: Utc::now(),
        }
    }

    fn translation(language: Language, nombre: &str, descripcion: &str) -> ProductTranslation {
        ProductTranslation {
            id: 10,
            product_id: 1,
            language,
            nombre: nombre.to_string(),
            descripcion: descripcion.to_string(),
            fecha_creacion: Utc::now(),
            fecha_actualizacion: Utc::now(),
        }
    }

    #[test]
    fn resolve_falls_back_to_spanish_when_no_translation() {
        let p = product("Aceite de Oliva", "Aceite de categoría superior");

        let resolved = resolve(&p, &[], Language::En);
        assert_eq!(resolved.nombre, "Aceite de Oliva");
        assert_eq!(resolved.descripcion, "Aceite de categoría superior");
    }

    #[test]
    fn resolve_returns_translation_verbatim() {
        let p = product("Aceite de Oliva", "Aceite de categoría superior");
        let t = translation(Language::En, "Olive Oil", "Superior category oil");

        let resolved = resolve(&p, std::slice::from_ref(&t), Language::En);
        assert_eq!(resolved.nombre, "Olive Oil");
        assert_eq!(resolved.descripcion, "Superior category oil");
    }

    #[test]
    fn resolve_never_mixes_sources() {
        // A translation in another language must not leak into the result.
        let p = product("Vinagre de Vino", "Vinagre de vino tinto");
        let t = translation(Language::Es, "Vinagre de Vino (es)", "Override español");

        let resolved = resolve(&p, std::slice::from_ref(&t), Language::En);
        assert_eq!(resolved.nombre, "Vinagre de Vino");
        assert_eq!(resolved.descripcion, "Vinagre de vino tinto");

        let resolved_es = resolve(&p, std::slice::from_ref(&t), Language::Es);
        assert_eq!(resolved_es.nombre, "Vinagre de Vino (es)");
        assert_eq!(resolved_es.descripcion, "Override español");
    }

    #[test]
    fn with_translations_computes_english_convenience_fields() {
        let p = product("Aceite de Girasol", "Aceite refinado de girasol");
        let t = translation(Language::En, "Sunflower Oil", "Refined sunflower oil");

        let with = ProductWithTranslations::new(p.clone(), vec![t]);
        assert_eq!(with.nombre_en, "Sunflower Oil");
        assert_eq!(with.descripcion_en, "Refined sunflower oil");
        // Base Spanish fields are untouched by the translation.
        assert_eq!(with.product.nombre, "Aceite de Girasol");

        let without = ProductWithTranslations::new(p, vec![]);
        assert_eq!(without.nombre_en, "Aceite de Girasol");
        assert_eq!(without.descripcion_en, "Aceite refinado de girasol");
    }

    #[test]
    fn serialized_shape_matches_api_contract() {
        let p = product("Aceite de Oliva", "Descripción");
        let t = translation(Language::En, "Olive Oil", "Description");
        let with = ProductWithTranslations::new(p, vec![t]);

        let json = serde_json::to_value(&with).unwrap();
        for key in [
            "id",
            "nombre",
            "descripcion",
            "imagen",
            "formatos",
            "activo",
            "fecha_creacion",
            "fecha_actualizacion",
            "translations",
            "nombre_en",
            "descripcion_en",
        ] {
            assert!(json.get(key).is_some(), "missing key: {key}");
        }

        assert_eq!(json["formatos"][0], "250 ml");
        assert_eq!(json["translations"][0]["language"], "en");
        assert_eq!(json["translations"][0]["language_display"], "English");
        assert_eq!(json["nombre_en"], "Olive Oil");
    }

    #[test]
    fn create_dto_validation() {
        let valid = CreateProduct {
            nombre: "Aceite de Oliva".to_string(),
            descripcion: "Descripción".to_string(),
            imagen: None,
            formatos: vec![],
            activo: None,
        };
        assert!(valid.validate().is_ok());

        let empty_name = CreateProduct {
            nombre: String::new(),
            ..valid.clone()
        };
        assert!(empty_name.validate().is_err());

        let long_name = CreateProduct {
            nombre: "x".repeat(201),
            ..valid
        };
        assert!(long_name.validate().is_err());
    }
}

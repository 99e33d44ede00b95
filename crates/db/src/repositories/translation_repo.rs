//! Repository for the `product_translations` table.

use rdj_core::types::DbId;
use sqlx::PgPool;

use crate::models::language::Language;
use crate::models::translation::{CreateTranslation, ProductTranslation, UpdateTranslation};

/// Column list for product_translations queries.
const COLUMNS: &str =
    "id, product_id, language, nombre, descripcion, fecha_creacion, fecha_actualizacion";

/// Provides CRUD operations for product translations.
///
/// Translations are addressed by their logical `(product_id, language)`
/// identity; the unique constraint on that pair makes a duplicate insert
/// fail at the database rather than silently overwrite.
pub struct TranslationRepo;

impl TranslationRepo {
    /// List a product's translations in language declaration order (es, en).
    pub async fn list_for_product(
        pool: &PgPool,
        product_id: DbId,
    ) -> Result<Vec<ProductTranslation>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM product_translations \
             WHERE product_id = $1 \
             ORDER BY language"
        );
        sqlx::query_as::<_, ProductTranslation>(&query)
            .bind(product_id)
            .fetch_all(pool)
            .await
    }

    /// Find one translation by its `(product, language)` identity.
    pub async fn find(
        pool: &PgPool,
        product_id: DbId,
        language: Language,
    ) -> Result<Option<ProductTranslation>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM product_translations \
             WHERE product_id = $1 AND language = $2"
        );
        sqlx::query_as::<_, ProductTranslation>(&query)
            .bind(product_id)
            .bind(language)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new translation, returning the created row.
    ///
    /// A second translation for the same `(product, language)` pair fails
    /// with a unique-constraint violation
    /// (`uq_product_translations_product_language`).
    pub async fn create(
        pool: &PgPool,
        input: &CreateTranslation,
    ) -> Result<ProductTranslation, sqlx::Error> {
        let query = format!(
            "INSERT INTO product_translations (product_id, language, nombre, descripcion) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProductTranslation>(&query)
            .bind(input.product_id)
            .bind(input.language)
            .bind(&input.nombre)
            .bind(&input.descripcion)
            .fetch_one(pool)
            .await
    }

    /// Update a translation by `(product, language)`. Only non-`None` fields
    /// are applied. Returns `None` if the pair has no translation.
    pub async fn update(
        pool: &PgPool,
        product_id: DbId,
        language: Language,
        input: &UpdateTranslation,
    ) -> Result<Option<ProductTranslation>, sqlx::Error> {
        let query = format!(
            "UPDATE product_translations SET \
                nombre = COALESCE($3, nombre), \
                descripcion = COALESCE($4, descripcion), \
                fecha_actualizacion = NOW() \
             WHERE product_id = $1 AND language = $2 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProductTranslation>(&query)
            .bind(product_id)
            .bind(language)
            .bind(&input.nombre)
            .bind(&input.descripcion)
            .fetch_optional(pool)
            .await
    }

    /// Delete a translation by `(product, language)`.
    /// Returns `true` if a row was deleted.
    pub async fn delete(
        pool: &PgPool,
        product_id: DbId,
        language: Language,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM product_translations WHERE product_id = $1 AND language = $2")
                .bind(product_id)
                .bind(language)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count all translation rows for a product.
    pub async fn count_for_product(pool: &PgPool, product_id: DbId) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM product_translations WHERE product_id = $1")
                .bind(product_id)
                .fetch_one(pool)
                .await?;
        Ok(count)
    }
}

//! Administrative write operations for the catalog.
//!
//! The administrative surface (an external web UI) consumes these instead
//! of talking to the repositories directly: inputs are validated, missing
//! rows become [`CoreError::NotFound`], and unique-constraint violations
//! become [`CoreError::Conflict`] instead of raw database errors. The
//! public read API never goes through here.

use rdj_core::error::CoreError;
use rdj_core::types::DbId;
use sqlx::PgPool;
use validator::Validate;

use crate::models::language::Language;
use crate::models::product::{CreateProduct, Product, UpdateProduct};
use crate::models::translation::{
    CreateTranslation, ProductTranslation, TranslationStatus, UpdateTranslation,
};
use crate::repositories::{ProductRepo, TranslationRepo};

/// Administrative operations over products and their translations.
pub struct CatalogAdmin;

impl CatalogAdmin {
    /// Create a product from validated input.
    pub async fn create_product(
        pool: &PgPool,
        input: &CreateProduct,
    ) -> Result<Product, CoreError> {
        validate(input)?;
        let product = ProductRepo::create(pool, input).await.map_err(map_db_err)?;

        tracing::info!(product_id = product.id, nombre = %product.nombre, "Product created");
        Ok(product)
    }

    /// Update a product. Unknown ids are a [`CoreError::NotFound`].
    pub async fn update_product(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProduct,
    ) -> Result<Product, CoreError> {
        validate(input)?;
        let product = ProductRepo::update(pool, id, input)
            .await
            .map_err(map_db_err)?
            .ok_or(CoreError::NotFound {
                entity: "Product",
                id,
            })?;

        tracing::info!(product_id = product.id, "Product updated");
        Ok(product)
    }

    /// Flip the active flag. `activo = false` is the soft removal.
    pub async fn set_product_active(
        pool: &PgPool,
        id: DbId,
        activo: bool,
    ) -> Result<(), CoreError> {
        let updated = ProductRepo::set_active(pool, id, activo)
            .await
            .map_err(map_db_err)?;
        if !updated {
            return Err(CoreError::NotFound {
                entity: "Product",
                id,
            });
        }

        tracing::info!(product_id = id, activo, "Product active flag changed");
        Ok(())
    }

    /// Hard-delete a product and, via cascade, all of its translations.
    pub async fn delete_product(pool: &PgPool, id: DbId) -> Result<(), CoreError> {
        let deleted = ProductRepo::delete(pool, id).await.map_err(map_db_err)?;
        if !deleted {
            return Err(CoreError::NotFound {
                entity: "Product",
                id,
            });
        }

        tracing::info!(product_id = id, "Product deleted");
        Ok(())
    }

    /// Create a translation for an existing product.
    ///
    /// The owning product must exist; a duplicate `(product, language)`
    /// pair is rejected as a [`CoreError::Conflict`], never overwritten.
    pub async fn create_translation(
        pool: &PgPool,
        input: &CreateTranslation,
    ) -> Result<ProductTranslation, CoreError> {
        validate(input)?;

        ProductRepo::find_by_id(pool, input.product_id)
            .await
            .map_err(map_db_err)?
            .ok_or(CoreError::NotFound {
                entity: "Product",
                id: input.product_id,
            })?;

        let translation = TranslationRepo::create(pool, input)
            .await
            .map_err(map_db_err)?;

        tracing::info!(
            product_id = translation.product_id,
            language = %translation.language,
            "Translation created",
        );
        Ok(translation)
    }

    /// Update a translation addressed by `(product, language)`.
    pub async fn update_translation(
        pool: &PgPool,
        product_id: DbId,
        language: Language,
        input: &UpdateTranslation,
    ) -> Result<ProductTranslation, CoreError> {
        validate(input)?;
        let translation = TranslationRepo::update(pool, product_id, language, input)
            .await
            .map_err(map_db_err)?
            .ok_or(CoreError::NotFound {
                entity: "ProductTranslation",
                id: product_id,
            })?;

        tracing::info!(product_id, language = %language, "Translation updated");
        Ok(translation)
    }

    /// Delete a translation addressed by `(product, language)`.
    pub async fn delete_translation(
        pool: &PgPool,
        product_id: DbId,
        language: Language,
    ) -> Result<(), CoreError> {
        let deleted = TranslationRepo::delete(pool, product_id, language)
            .await
            .map_err(map_db_err)?;
        if !deleted {
            return Err(CoreError::NotFound {
                entity: "ProductTranslation",
                id: product_id,
            });
        }

        tracing::info!(product_id, language = %language, "Translation deleted");
        Ok(())
    }

    /// Translation coverage per product for the administrative listing,
    /// in the model's default order (newest first).
    pub async fn translation_status(pool: &PgPool) -> Result<Vec<TranslationStatus>, CoreError> {
        let products = ProductRepo::list_all(pool).await.map_err(map_db_err)?;
        let mut result = Vec::with_capacity(products.len());

        for product in products {
            let translations = TranslationRepo::list_for_product(pool, product.id)
                .await
                .map_err(map_db_err)?;
            result.push(TranslationStatus::from_translations(
                product.id,
                &product.nombre,
                &translations,
            ));
        }

        Ok(result)
    }
}

/// Run validator-derived checks, flattening failures into one message.
fn validate<T: Validate>(input: &T) -> Result<(), CoreError> {
    input
        .validate()
        .map_err(|errors| CoreError::Validation(errors.to_string()))
}

/// Classify a sqlx error into a domain error.
///
/// Unique-constraint violations (PostgreSQL error code 23505 on a `uq_`
/// constraint) become [`CoreError::Conflict`]; everything else is internal.
fn map_db_err(err: sqlx::Error) -> CoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some("23505") {
            let constraint = db_err.constraint().unwrap_or("unknown");
            if constraint.starts_with("uq_") {
                return CoreError::Conflict(format!(
                    "Duplicate value violates unique constraint: {constraint}"
                ));
            }
        }
    }
    CoreError::Internal(err.to_string())
}

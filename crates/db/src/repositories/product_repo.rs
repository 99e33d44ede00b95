//! Repository for the `products` table.

use rdj_core::types::DbId;
use sqlx::PgPool;

use crate::models::product::{CreateProduct, Product, ProductWithTranslations, UpdateProduct};
use crate::repositories::TranslationRepo;

/// Column list for products queries.
const COLUMNS: &str =
    "id, nombre, descripcion, imagen, formatos, activo, fecha_creacion, fecha_actualizacion";

/// Provides CRUD operations for products.
///
/// `fecha_creacion` is set once by the database and never touched again;
/// every UPDATE statement here bumps `fecha_actualizacion`.
pub struct ProductRepo;

impl ProductRepo {
    /// List active products in public display order: oldest first.
    ///
    /// This deliberately reverses the model's default newest-first order
    /// (see [`Self::list_all`]); the public catalog shows the range in the
    /// order it was introduced.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM products \
             WHERE activo = true \
             ORDER BY fecha_creacion ASC"
        );
        sqlx::query_as::<_, Product>(&query).fetch_all(pool).await
    }

    /// List all products in the model's default order: newest first.
    /// Used by the administrative listing.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products ORDER BY fecha_creacion DESC");
        sqlx::query_as::<_, Product>(&query).fetch_all(pool).await
    }

    /// Find a product by its ID, regardless of the active flag.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = $1");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an active product by its ID.
    ///
    /// An inactive product yields `None`, same as a nonexistent one; the
    /// public API does not distinguish the two.
    pub async fn find_active_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = $1 AND activo = true");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an active product by ID, enriched with its translations.
    pub async fn find_active_with_translations(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ProductWithTranslations>, sqlx::Error> {
        let product = Self::find_active_by_id(pool, id).await?;
        match product {
            Some(product) => {
                let translations = TranslationRepo::list_for_product(pool, product.id).await?;
                Ok(Some(ProductWithTranslations::new(product, translations)))
            }
            None => Ok(None),
        }
    }

    /// List active products (oldest first) with their translations.
    pub async fn list_active_with_translations(
        pool: &PgPool,
    ) -> Result<Vec<ProductWithTranslations>, sqlx::Error> {
        let products = Self::list_active(pool).await?;
        let mut result = Vec::with_capacity(products.len());

        for product in products {
            let translations = TranslationRepo::list_for_product(pool, product.id).await?;
            result.push(ProductWithTranslations::new(product, translations));
        }

        Ok(result)
    }

    /// Insert a new product, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateProduct) -> Result<Product, sqlx::Error> {
        let query = format!(
            "INSERT INTO products (nombre, descripcion, imagen, formatos, activo) \
             VALUES ($1, $2, $3, $4, COALESCE($5, true)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(&input.nombre)
            .bind(&input.descripcion)
            .bind(&input.imagen)
            .bind(&input.formatos)
            .bind(input.activo)
            .fetch_one(pool)
            .await
    }

    /// Update a product by ID. Only non-`None` fields are applied.
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProduct,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!(
            "UPDATE products SET \
                nombre = COALESCE($2, nombre), \
                descripcion = COALESCE($3, descripcion), \
                imagen = COALESCE($4, imagen), \
                formatos = COALESCE($5, formatos), \
                activo = COALESCE($6, activo), \
                fecha_actualizacion = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .bind(&input.nombre)
            .bind(&input.descripcion)
            .bind(&input.imagen)
            .bind(&input.formatos)
            .bind(input.activo)
            .fetch_optional(pool)
            .await
    }

    /// Set the active flag. Returns `true` if a row was updated.
    ///
    /// `activo = false` is the soft removal: the product disappears from
    /// all public reads but keeps its translations.
    pub async fn set_active(pool: &PgPool, id: DbId, activo: bool) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE products SET activo = $2, fecha_actualizacion = NOW() WHERE id = $1",
        )
        .bind(id)
        .bind(activo)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Hard-delete a product by ID. Returns `true` if a row was deleted.
    /// Owned translations go with it via `ON DELETE CASCADE`.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

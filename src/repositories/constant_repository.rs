//! Repositorio del almacén de constantes

use sqlx::PgPool;

use crate::dto::constant_dto::{CreateConstantRequest, UpdateConstantRequest};
use crate::models::constant::{Constant, ConstantFilters};
use crate::models::station::SelectOption;
use crate::utils::errors::AppError;
use crate::utils::query::{self, Page, Paginated, QueryFilter};

pub struct ConstantRepository {
    pool: PgPool,
}

impl ConstantRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, filters: &ConstantFilters) -> Result<Paginated<Constant>, AppError> {
        let mut filter = QueryFilter::new();
        filter
            .search(&["cnst_name", "cnst_eng"], filters.search.as_deref())
            // igualdad exacta sobre el tag, sensible a mayúsculas
            .eq_text("cnst_type", filters.cnst_type.as_deref());

        let page = Page::new(filters.page, filters.per_page);
        let result = query::paginate(&self.pool, "constants", &filter, "oid DESC", page).await?;
        Ok(result)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Constant>, AppError> {
        let constant = sqlx::query_as::<_, Constant>("SELECT * FROM constants WHERE oid = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(constant)
    }

    pub async fn create(&self, request: &CreateConstantRequest) -> Result<Constant, AppError> {
        let constant = sqlx::query_as::<_, Constant>(
            r#"
            INSERT INTO constants (cnst_name, cnst_type, cnst_eng)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(&request.cnst_name)
        .bind(&request.cnst_type)
        .bind(&request.cnst_eng)
        .fetch_one(&self.pool)
        .await?;

        Ok(constant)
    }

    pub async fn update(&self, id: i64, request: &UpdateConstantRequest) -> Result<Constant, AppError> {
        let constant = sqlx::query_as::<_, Constant>(
            r#"
            UPDATE constants SET
                cnst_name = COALESCE($2, cnst_name),
                cnst_type = COALESCE($3, cnst_type),
                cnst_eng = COALESCE($4, cnst_eng)
            WHERE oid = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&request.cnst_name)
        .bind(&request.cnst_type)
        .bind(&request.cnst_eng)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Constant not found".to_string()))?;

        Ok(constant)
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM constants WHERE oid = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Constant not found".to_string()));
        }
        Ok(())
    }

    /// Todas las filas de un tag, tal cual está escrito
    pub async fn by_type(&self, type_tag: &str) -> Result<Vec<Constant>, AppError> {
        let constants =
            sqlx::query_as::<_, Constant>("SELECT * FROM constants WHERE cnst_type = $1")
                .bind(type_tag)
                .fetch_all(&self.pool)
                .await?;
        Ok(constants)
    }

    /// Opciones {value, label} de un tag para selects
    pub async fn options(&self, type_tag: &str) -> Result<Vec<SelectOption>, AppError> {
        let options = sqlx::query_as::<_, SelectOption>(
            "SELECT oid AS value, cnst_name AS label FROM constants WHERE cnst_type = $1 ORDER BY cnst_name ASC",
        )
        .bind(type_tag)
        .fetch_all(&self.pool)
        .await?;
        Ok(options)
    }

    /// El conjunto de tags distintos presentes en el almacén
    pub async fn types(&self) -> Result<Vec<String>, AppError> {
        let types: Vec<String> = sqlx::query_scalar(
            "SELECT DISTINCT cnst_type FROM constants WHERE cnst_type IS NOT NULL ORDER BY cnst_type",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(types)
    }
}

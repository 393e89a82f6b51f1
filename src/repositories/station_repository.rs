//! Repositorio de estaciones
//!
//! A diferencia del resto de las entidades, las estaciones se listan por
//! peso de ordenamiento ascendente: el orden es contrato del SPA.

use sqlx::PgPool;

use crate::dto::station_dto::{CreateStationRequest, UpdateStationRequest};
use crate::models::station::{SelectOption, Station, StationFilters};
use crate::utils::errors::AppError;
use crate::utils::query::{self, Page, Paginated, QueryFilter};

pub struct StationRepository {
    pool: PgPool,
}

impl StationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, filters: &StationFilters) -> Result<Paginated<Station>, AppError> {
        let mut filter = QueryFilter::new();
        filter
            .search(
                &["station_name", "station_ename"],
                filters.search.as_deref(),
            )
            .eq("parent_oid", filters.parent_oid);

        let page = Page::new(filters.page, filters.per_page);
        let result = query::paginate(
            &self.pool,
            "stations",
            &filter,
            "station_weight ASC",
            page,
        )
        .await?;
        Ok(result)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Station>, AppError> {
        let station = sqlx::query_as::<_, Station>("SELECT * FROM stations WHERE oid = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(station)
    }

    pub async fn create(&self, request: &CreateStationRequest) -> Result<Station, AppError> {
        let station = sqlx::query_as::<_, Station>(
            r#"
            INSERT INTO stations (station_name, station_ename, station_weight, parent_oid)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&request.station_name)
        .bind(&request.station_ename)
        .bind(request.station_weight)
        .bind(request.parent_oid)
        .fetch_one(&self.pool)
        .await?;

        Ok(station)
    }

    pub async fn update(&self, id: i64, request: &UpdateStationRequest) -> Result<Station, AppError> {
        let station = sqlx::query_as::<_, Station>(
            r#"
            UPDATE stations SET
                station_name = COALESCE($2, station_name),
                station_ename = COALESCE($3, station_ename),
                station_weight = COALESCE($4, station_weight),
                parent_oid = COALESCE($5, parent_oid)
            WHERE oid = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&request.station_name)
        .bind(&request.station_ename)
        .bind(request.station_weight)
        .bind(request.parent_oid)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Station not found".to_string()))?;

        Ok(station)
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM stations WHERE oid = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Station not found".to_string()));
        }
        Ok(())
    }

    /// Opciones {value, label} para los selects del SPA
    pub async fn options(&self) -> Result<Vec<SelectOption>, AppError> {
        let options = sqlx::query_as::<_, SelectOption>(
            "SELECT oid AS value, station_name AS label FROM stations ORDER BY station_name ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(options)
    }
}

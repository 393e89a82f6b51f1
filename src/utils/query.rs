//! Motor genérico de filtrado y paginación
//!
//! Este módulo implementa el patrón que se repite en todos los recursos:
//! criterios opcionales acumulados como predicados SQL ($n posicionales),
//! conteo total sobre el mismo predicado y página de filas LIMIT/OFFSET.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::postgres::{PgPool, PgRow};
use sqlx::{FromRow, Postgres};

/// Tamaño de página por defecto (el valor histórico del API)
pub const DEFAULT_PER_PAGE: i64 = 15;
/// Tamaño de página máximo permitido
pub const MAX_PER_PAGE: i64 = 100;

/// Valor ligado a un placeholder posicional
#[derive(Debug, Clone)]
enum BindValue {
    Int(i64),
    Num(Decimal),
    Str(String),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

/// Acumulador de predicados opcionales.
///
/// Los criterios ausentes (None) simplemente no se agregan; un filtro
/// vacío produce una cláusula WHERE vacía, nunca un error.
#[derive(Debug, Default)]
pub struct QueryFilter {
    conditions: Vec<String>,
    binds: Vec<BindValue>,
}

impl QueryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_placeholder(&self) -> usize {
        self.binds.len() + 1
    }

    /// Igualdad exacta, usada para todos los criterios *_oid
    pub fn eq(&mut self, column: &str, value: Option<i64>) -> &mut Self {
        if let Some(v) = value {
            self.conditions
                .push(format!("{} = ${}", column, self.next_placeholder()));
            self.binds.push(BindValue::Int(v));
        }
        self
    }

    /// Igualdad exacta sobre una columna de texto (tags, etc.);
    /// sensible a mayúsculas por construcción
    pub fn eq_text(&mut self, column: &str, value: Option<&str>) -> &mut Self {
        if let Some(v) = value {
            self.conditions
                .push(format!("{} = ${}", column, self.next_placeholder()));
            self.binds.push(BindValue::Str(v.to_string()));
        }
        self
    }

    /// Búsqueda parcial case-insensitive, OR entre las columnas de texto
    pub fn search(&mut self, columns: &[&str], term: Option<&str>) -> &mut Self {
        if let Some(term) = term {
            let term = term.trim();
            if term.is_empty() {
                return self;
            }
            let pattern = format!("%{}%", term.to_lowercase());
            let mut parts = Vec::with_capacity(columns.len());
            for column in columns {
                parts.push(format!("LOWER({}) LIKE ${}", column, self.next_placeholder()));
                self.binds.push(BindValue::Str(pattern.clone()));
            }
            self.conditions.push(format!("({})", parts.join(" OR ")));
        }
        self
    }

    /// Límite inferior inclusivo sobre una columna de fecha
    pub fn date_from(&mut self, column: &str, value: Option<NaiveDate>) -> &mut Self {
        if let Some(v) = value {
            self.conditions
                .push(format!("{} >= ${}", column, self.next_placeholder()));
            self.binds.push(BindValue::Date(v));
        }
        self
    }

    /// Límite superior inclusivo sobre una columna de fecha
    pub fn date_to(&mut self, column: &str, value: Option<NaiveDate>) -> &mut Self {
        if let Some(v) = value {
            self.conditions
                .push(format!("{} <= ${}", column, self.next_placeholder()));
            self.binds.push(BindValue::Date(v));
        }
        self
    }

    /// Límite inferior numérico (filtros de cantidad mínima)
    pub fn min(&mut self, column: &str, value: Option<Decimal>) -> &mut Self {
        if let Some(v) = value {
            self.conditions
                .push(format!("{} >= ${}", column, self.next_placeholder()));
            self.binds.push(BindValue::Num(v));
        }
        self
    }

    /// Límite inferior inclusivo sobre una columna timestamp
    pub fn datetime_from(&mut self, column: &str, value: Option<NaiveDateTime>) -> &mut Self {
        if let Some(v) = value {
            self.conditions
                .push(format!("{} >= ${}", column, self.next_placeholder()));
            self.binds.push(BindValue::DateTime(v));
        }
        self
    }

    /// Límite superior exclusivo sobre una columna timestamp
    pub fn datetime_before(&mut self, column: &str, value: Option<NaiveDateTime>) -> &mut Self {
        if let Some(v) = value {
            self.conditions
                .push(format!("{} < ${}", column, self.next_placeholder()));
            self.binds.push(BindValue::DateTime(v));
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Renderiza la cláusula WHERE ("" si no hay criterios)
    pub fn where_clause(&self) -> String {
        if self.conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", self.conditions.join(" AND "))
        }
    }

    /// Ejecuta un SELECT con los valores acumulados y mapea todas las filas
    pub async fn fetch_all<T>(&self, pool: &PgPool, sql: &str) -> Result<Vec<T>, sqlx::Error>
    where
        T: Send + Unpin + for<'r> FromRow<'r, PgRow>,
    {
        let mut query = sqlx::query_as::<Postgres, T>(sql);
        for value in &self.binds {
            query = match value {
                BindValue::Int(v) => query.bind(*v),
                BindValue::Num(v) => query.bind(*v),
                BindValue::Str(v) => query.bind(v.clone()),
                BindValue::Date(v) => query.bind(*v),
                BindValue::DateTime(v) => query.bind(*v),
            };
        }
        query.fetch_all(pool).await
    }

    /// Ejecuta un SELECT que devuelve exactamente una fila (agregados)
    pub async fn fetch_one<T>(&self, pool: &PgPool, sql: &str) -> Result<T, sqlx::Error>
    where
        T: Send + Unpin + for<'r> FromRow<'r, PgRow>,
    {
        let mut query = sqlx::query_as::<Postgres, T>(sql);
        for value in &self.binds {
            query = match value {
                BindValue::Int(v) => query.bind(*v),
                BindValue::Num(v) => query.bind(*v),
                BindValue::Str(v) => query.bind(v.clone()),
                BindValue::Date(v) => query.bind(*v),
                BindValue::DateTime(v) => query.bind(*v),
            };
        }
        query.fetch_one(pool).await
    }

    /// Ejecuta un COUNT(*) sobre el mismo predicado
    pub async fn fetch_count(&self, pool: &PgPool, sql: &str) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = self.fetch_one(pool, sql).await?;
        Ok(count)
    }
}

/// Página solicitada, siempre 1-indexada
#[derive(Debug, Clone, Copy)]
pub struct Page {
    pub page: i64,
    pub per_page: i64,
}

impl Page {
    pub fn new(page: Option<i64>, per_page: Option<i64>) -> Self {
        let page = page.unwrap_or(1).max(1);
        let per_page = per_page.unwrap_or(DEFAULT_PER_PAGE).clamp(1, MAX_PER_PAGE);
        Self { page, per_page }
    }

    pub fn limit(&self) -> i64 {
        self.per_page
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.per_page
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// Página de resultados con el conteo total sin paginar
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
    pub total_pages: i64,
}

impl<T> Paginated<T> {
    pub fn new(data: Vec<T>, total: i64, page: Page) -> Self {
        let total_pages = if total == 0 {
            0
        } else {
            (total + page.per_page - 1) / page.per_page
        };
        Self {
            data,
            total,
            page: page.page,
            per_page: page.per_page,
            total_pages,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paginated<U> {
        Paginated {
            data: self.data.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// Ejecuta el predicado dos veces sobre la misma tabla: una para el conteo
/// total y otra para la página de filas con el orden propio de la entidad.
pub async fn paginate<T>(
    pool: &PgPool,
    table: &str,
    filter: &QueryFilter,
    order_by: &str,
    page: Page,
) -> Result<Paginated<T>, sqlx::Error>
where
    T: Send + Unpin + for<'r> FromRow<'r, PgRow>,
{
    let where_clause = filter.where_clause();

    let count_sql = format!("SELECT COUNT(*) FROM {} {}", table, where_clause);
    let total = filter.fetch_count(pool, &count_sql).await?;

    let rows_sql = format!(
        "SELECT * FROM {} {} ORDER BY {} LIMIT {} OFFSET {}",
        table,
        where_clause,
        order_by,
        page.limit(),
        page.offset()
    );
    let rows: Vec<T> = filter.fetch_all(pool, &rows_sql).await?;

    Ok(Paginated::new(rows, total, page))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filter_has_no_where_clause() {
        let filter = QueryFilter::new();
        assert!(filter.is_empty());
        assert_eq!(filter.where_clause(), "");
    }

    #[test]
    fn test_absent_criteria_are_omitted() {
        let mut filter = QueryFilter::new();
        filter
            .eq("status_oid", None)
            .search(&["vehicle_num"], None)
            .date_from("fill_up_date", None);
        assert_eq!(filter.where_clause(), "");
    }

    #[test]
    fn test_eq_renders_placeholder() {
        let mut filter = QueryFilter::new();
        filter.eq("fuel_type_oid", Some(3));
        assert_eq!(filter.where_clause(), "WHERE fuel_type_oid = $1");
    }

    #[test]
    fn test_search_is_an_or_group() {
        let mut filter = QueryFilter::new();
        filter.search(&["vehicle_num", "plate_num", "model"], Some("Toyota"));
        assert_eq!(
            filter.where_clause(),
            "WHERE (LOWER(vehicle_num) LIKE $1 OR LOWER(plate_num) LIKE $2 OR LOWER(model) LIKE $3)"
        );
    }

    #[test]
    fn test_blank_search_term_is_ignored() {
        let mut filter = QueryFilter::new();
        filter.search(&["vehicle_num"], Some("   "));
        assert_eq!(filter.where_clause(), "");
    }

    #[test]
    fn test_placeholders_number_sequentially_across_families() {
        let mut filter = QueryFilter::new();
        filter
            .eq("station_oid", Some(7))
            .search(&["cnst_name", "cnst_eng"], Some("diesel"))
            .date_from("bill_date", NaiveDate::from_ymd_opt(2024, 1, 1))
            .date_to("bill_date", NaiveDate::from_ymd_opt(2024, 12, 31))
            .min("quantity", Some(Decimal::new(100, 0)));
        assert_eq!(
            filter.where_clause(),
            "WHERE station_oid = $1 AND (LOWER(cnst_name) LIKE $2 OR LOWER(cnst_eng) LIKE $3) \
             AND bill_date >= $4 AND bill_date <= $5 AND quantity >= $6"
        );
    }

    #[test]
    fn test_page_defaults() {
        let page = Page::new(None, None);
        assert_eq!(page.page, 1);
        assert_eq!(page.per_page, DEFAULT_PER_PAGE);
        assert_eq!(page.offset(), 0);
    }

    #[test]
    fn test_page_clamping() {
        let page = Page::new(Some(0), Some(500));
        assert_eq!(page.page, 1);
        assert_eq!(page.per_page, MAX_PER_PAGE);

        let page = Page::new(Some(-3), Some(0));
        assert_eq!(page.page, 1);
        assert_eq!(page.per_page, 1);
    }

    #[test]
    fn test_page_offset_is_one_indexed() {
        let page = Page::new(Some(2), Some(10));
        assert_eq!(page.offset(), 10);
        assert_eq!(page.limit(), 10);
    }

    #[test]
    fn test_total_pages_is_ceiling() {
        let paginated = Paginated::new(vec![1, 2, 3], 25, Page::new(Some(2), Some(10)));
        assert_eq!(paginated.total_pages, 3);
        assert_eq!(paginated.page, 2);

        let empty: Paginated<i32> = Paginated::new(vec![], 0, Page::default());
        assert_eq!(empty.total_pages, 0);
    }

    #[test]
    fn test_paginated_map_keeps_counters() {
        let paginated = Paginated::new(vec![1, 2], 12, Page::new(Some(1), Some(2)));
        let mapped = paginated.map(|n| n.to_string());
        assert_eq!(mapped.data, vec!["1", "2"]);
        assert_eq!(mapped.total, 12);
        assert_eq!(mapped.total_pages, 6);
    }
}

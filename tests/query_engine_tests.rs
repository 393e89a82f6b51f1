//! Tests del motor de consultas y del contrato del envelope paginado.

use rust_decimal::Decimal;
use serde_json::{json, Value};

use fuel_management::dto::ApiResponse;
use fuel_management::services::constants;
use fuel_management::utils::query::{Page, Paginated, QueryFilter, DEFAULT_PER_PAGE};
use fuel_management::utils::validation::require_fuel_target;

#[test]
fn test_vehicle_filter_composition() {
    // el orden de los criterios es fijo por entidad: igualdades primero,
    // búsqueda al final, como los arma el repositorio de vehículos
    let mut filter = QueryFilter::new();
    filter
        .eq("status_oid", Some(2))
        .eq("fuel_type_oid", None)
        .eq("assigned_to", Some(14))
        .search(&["vehicle_num", "plate_num", "model"], Some("toyota"));

    assert_eq!(
        filter.where_clause(),
        "WHERE status_oid = $1 AND assigned_to = $2 AND \
         (LOWER(vehicle_num) LIKE $3 OR LOWER(plate_num) LIKE $4 OR LOWER(model) LIKE $5)"
    );
}

#[test]
fn test_no_filters_means_no_where() {
    let mut filter = QueryFilter::new();
    filter
        .eq("veh_oid", None)
        .eq_text("cnst_type", None)
        .date_from("fill_up_date", None)
        .min("gas_quantity", None);

    assert!(filter.is_empty());
    assert_eq!(filter.where_clause(), "");
}

#[test]
fn test_pagination_window_over_25_rows() {
    // 25 filas, página 2 de 10: filas 11-20, 3 páginas en total
    let rows: Vec<i64> = (11..=20).collect();
    let page = Page::new(Some(2), Some(10));
    assert_eq!(page.offset(), 10);
    assert_eq!(page.limit(), 10);

    let paginated = Paginated::new(rows, 25, page);
    assert_eq!(paginated.total_pages, 3);
    assert_eq!(paginated.data.len(), 10);
}

#[test]
fn test_default_page_size_is_fifteen() {
    let page = Page::default();
    assert_eq!(page.per_page, DEFAULT_PER_PAGE);
    assert_eq!(DEFAULT_PER_PAGE, 15);
}

#[test]
fn test_list_envelope_is_doubly_nested() {
    // el SPA espera data.data: el envelope exterior y la página interior
    let paginated = Paginated::new(vec![json!({"oid": 1})], 1, Page::default());
    let envelope = ApiResponse::success(paginated, "Vehicles retrieved successfully");
    let value = serde_json::to_value(&envelope).unwrap();

    assert_eq!(value["success"], json!(true));
    assert!(value["data"]["data"].is_array());
    assert_eq!(value["data"]["total"], json!(1));
    assert_eq!(value["data"]["page"], json!(1));
    assert_eq!(value["data"]["per_page"], json!(15));
    assert_eq!(value["data"]["total_pages"], json!(1));
}

#[test]
fn test_enrichment_attaches_label_and_keeps_original() {
    let mut row = json!({"oid": 5, "fuel_type_oid": 3});
    constants::attach_label(&mut row, "fuel_type_name", Some("بنزين".to_string()));

    assert_eq!(row["fuel_type_oid"], json!(3));
    assert_eq!(row["fuel_type_name"], json!("بنزين"));
}

#[test]
fn test_enrichment_absent_constant_is_null() {
    let mut row = json!({"oid": 5, "fuel_type_oid": 999});
    constants::attach_label(&mut row, "fuel_type_name", None);

    assert_eq!(row["fuel_type_name"], Value::Null);
}

#[test]
fn test_fuel_log_exclusivity_invariant() {
    assert!(require_fuel_target(Some(42), None).is_ok());
    assert!(require_fuel_target(None, Some(3)).is_ok());
    assert!(require_fuel_target(Some(42), Some(3)).is_err());
    assert!(require_fuel_target(None, None).is_err());
}

#[test]
fn test_min_quantity_filter_binds_decimal() {
    let mut filter = QueryFilter::new();
    filter.min("gas_quantity", Some(Decimal::new(5000, 1)));
    assert_eq!(filter.where_clause(), "WHERE gas_quantity >= $1");
}

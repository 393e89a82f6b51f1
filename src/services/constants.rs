//! Resolución de etiquetas del almacén de constantes
//!
//! El esquema codifica todos los campos "tipo de", "estado de" y "vendor"
//! como claves numéricas hacia la tabla constants. Este módulo resuelve
//! (cnst_type, oid) -> nombre legible y adjunta los campos *_name derivados
//! a las filas serializadas, conservando siempre el campo original.
//!
//! Los tags de tipo son los heredados del esquema Oracle, con su ortografía
//! original. No corregirlos: las filas existentes están escritas así.

use serde_json::Value;
use sqlx::PgPool;

pub const FUEL_TYPE_TAG: &str = "gas_type";
pub const VEHICLE_STATUS_TAG: &str = "vehcile_status";
pub const VEHICLE_TYPE_TAG: &str = "Vehcile_type";
pub const USAGE_TYPE_TAG: &str = "veh_type";
pub const VENDOR_TAG: &str = "Vendor";

/// Mapeo de una columna foreign-key al tag de constante y al nombre del
/// campo derivado que se adjunta en la respuesta.
#[derive(Debug, Clone, Copy)]
pub struct ConstantField {
    pub column: &'static str,
    pub type_tag: &'static str,
    pub label: &'static str,
}

/// Campos constantes de un vehículo
pub const VEHICLE_CONSTANT_FIELDS: &[ConstantField] = &[
    ConstantField {
        column: "fuel_type_oid",
        type_tag: FUEL_TYPE_TAG,
        label: "fuel_type_name",
    },
    ConstantField {
        column: "status_oid",
        type_tag: VEHICLE_STATUS_TAG,
        label: "status_name",
    },
    ConstantField {
        column: "type_oid",
        type_tag: VEHICLE_TYPE_TAG,
        label: "type_name",
    },
    ConstantField {
        column: "usage_type_oid",
        type_tag: USAGE_TYPE_TAG,
        label: "usage_type_name",
    },
    ConstantField {
        column: "vendor_oid",
        type_tag: VENDOR_TAG,
        label: "vendor_name",
    },
];

/// Campos constantes de un generador
pub const GENERATOR_CONSTANT_FIELDS: &[ConstantField] = &[ConstantField {
    column: "fuel_type_oid",
    type_tag: FUEL_TYPE_TAG,
    label: "fuel_type_name",
}];

/// Campos constantes de un registro de combustible
pub const FUEL_LOG_CONSTANT_FIELDS: &[ConstantField] = &[ConstantField {
    column: "gas_type",
    type_tag: FUEL_TYPE_TAG,
    label: "fuel_type_name",
}];

/// Busca el nombre de una constante por (tag, oid).
///
/// Un oid nulo o cero resuelve a None, igual que una fila inexistente;
/// nunca es un error. Si el esquema contiene filas duplicadas para el par,
/// gana la primera que devuelva el store.
pub async fn constant_name(
    pool: &PgPool,
    type_tag: &str,
    id: Option<i64>,
) -> Result<Option<String>, sqlx::Error> {
    let id = match id {
        Some(id) if id != 0 => id,
        _ => return Ok(None),
    };

    sqlx::query_scalar("SELECT cnst_name FROM constants WHERE cnst_type = $1 AND oid = $2 LIMIT 1")
        .bind(type_tag)
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Resuelve el nombre de una estación asignada. A diferencia de las
/// constantes, esto cruza contra la identidad propia de otra entidad.
pub async fn station_name(pool: &PgPool, id: Option<i64>) -> Result<Option<String>, sqlx::Error> {
    let id = match id {
        Some(id) if id != 0 => id,
        _ => return Ok(None),
    };

    sqlx::query_scalar("SELECT station_name FROM stations WHERE oid = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Adjunta una etiqueta resuelta a una fila serializada (None -> null)
pub fn attach_label(value: &mut Value, label: &str, name: Option<String>) {
    if let Value::Object(map) = value {
        map.insert(
            label.to_string(),
            name.map_or(Value::Null, Value::String),
        );
    }
}

/// Enriquece una fila serializada con los nombres de sus constantes
pub async fn enrich(
    pool: &PgPool,
    value: &mut Value,
    fields: &[ConstantField],
) -> Result<(), sqlx::Error> {
    for field in fields {
        let id = value.get(field.column).and_then(Value::as_i64);
        let name = constant_name(pool, field.type_tag, id).await?;
        attach_label(value, field.label, name);
    }
    Ok(())
}

/// Enriquece una página completa de filas
pub async fn enrich_rows(
    pool: &PgPool,
    values: &mut [Value],
    fields: &[ConstantField],
) -> Result<(), sqlx::Error> {
    for value in values.iter_mut() {
        enrich(pool, value, fields).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_attach_label_present() {
        let mut row = json!({"fuel_type_oid": 3});
        attach_label(&mut row, "fuel_type_name", Some("بنزين".to_string()));
        assert_eq!(row["fuel_type_name"], json!("بنزين"));
        // el campo original se conserva
        assert_eq!(row["fuel_type_oid"], json!(3));
    }

    #[test]
    fn test_attach_label_absent_is_null_not_error() {
        let mut row = json!({"fuel_type_oid": 999});
        attach_label(&mut row, "fuel_type_name", None);
        assert_eq!(row["fuel_type_name"], json!(null));
    }

    #[test]
    fn test_attach_label_ignores_non_objects() {
        let mut row = json!([1, 2, 3]);
        attach_label(&mut row, "fuel_type_name", Some("x".to_string()));
        assert_eq!(row, json!([1, 2, 3]));
    }

    #[test]
    fn test_vehicle_field_map_keeps_legacy_tags() {
        // la ortografía heredada del esquema es intencional
        let tags: Vec<&str> = VEHICLE_CONSTANT_FIELDS.iter().map(|f| f.type_tag).collect();
        assert!(tags.contains(&"vehcile_status"));
        assert!(tags.contains(&"Vehcile_type"));
        assert!(tags.contains(&"Vendor"));
    }
}

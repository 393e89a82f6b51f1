//! DTOs de entrada/salida
//!
//! Requests validados con validator y el envelope uniforme de respuesta.

pub mod auth_dto;
pub mod constant_dto;
pub mod fuel_log_dto;
pub mod gas_bill_dto;
pub mod gas_store_dto;
pub mod generator_dto;
pub mod maintenance_dto;
pub mod station_dto;
pub mod user_dto;
pub mod vehicle_dto;

use serde::Serialize;

/// Envelope uniforme: toda operación responde {success, message, data}
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// Respuesta de éxito sin payload (deletes)
    pub fn message_only(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_envelope_shape() {
        let response = ApiResponse::success(json!({"oid": 1}), "Vehicle retrieved successfully");
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["success"], json!(true));
        assert_eq!(value["message"], json!("Vehicle retrieved successfully"));
        assert_eq!(value["data"]["oid"], json!(1));
    }

    #[test]
    fn test_message_only_envelope_has_null_data() {
        let response = ApiResponse::message_only("Vehicle deleted successfully");
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["success"], json!(true));
        assert_eq!(value["data"], json!(null));
    }
}

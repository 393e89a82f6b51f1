//! Controller de facturas de combustible
//!
//! El total de cada factura (quantity × price) se deriva al momento de la
//! lectura y se adjunta a la fila serializada; nunca se almacena.

use serde_json::Value;
use sqlx::PgPool;
use validator::Validate;

use crate::dto::gas_bill_dto::{CreateGasBillRequest, SummaryRange, UpdateGasBillRequest};
use crate::dto::ApiResponse;
use crate::models::auth::AuthUser;
use crate::models::gas_bill::{GasBill, GasBillFilters, GasBillSummary};
use crate::repositories::gas_bill_repository::GasBillRepository;
use crate::utils::errors::AppError;
use crate::utils::query::Paginated;
use crate::utils::validation::require_non_negative;

pub struct GasBillController {
    repository: GasBillRepository,
}

impl GasBillController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: GasBillRepository::new(pool),
        }
    }

    fn with_total(bill: &GasBill) -> Value {
        let mut row = serde_json::to_value(bill).unwrap_or(Value::Null);
        if let Value::Object(map) = &mut row {
            let total = bill
                .total_amount()
                .and_then(|t| serde_json::to_value(t).ok())
                .unwrap_or(Value::Null);
            map.insert("total_amount".to_string(), total);
        }
        row
    }

    pub async fn list(
        &self,
        filters: &GasBillFilters,
    ) -> Result<ApiResponse<Paginated<Value>>, AppError> {
        let page = self.repository.list(filters).await?;
        let page = page.map(|bill| Self::with_total(&bill));
        Ok(ApiResponse::success(page, "Gas bills retrieved successfully"))
    }

    pub async fn get_by_id(&self, id: i64) -> Result<ApiResponse<Value>, AppError> {
        let bill = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Gas bill not found".to_string()))?;

        Ok(ApiResponse::success(
            Self::with_total(&bill),
            "Gas bill retrieved successfully",
        ))
    }

    pub async fn create(
        &self,
        auth: &AuthUser,
        request: CreateGasBillRequest,
    ) -> Result<ApiResponse<GasBill>, AppError> {
        auth.ensure_can_write()?;
        request.validate()?;
        require_non_negative("quantity", Some(request.quantity))?;
        require_non_negative("price", request.price)?;

        let bill = self.repository.create(&request, auth.id).await?;
        Ok(ApiResponse::success(bill, "Gas bill created successfully"))
    }

    pub async fn update(
        &self,
        auth: &AuthUser,
        id: i64,
        request: UpdateGasBillRequest,
    ) -> Result<ApiResponse<GasBill>, AppError> {
        auth.ensure_can_write()?;
        request.validate()?;
        require_non_negative("quantity", request.quantity)?;
        require_non_negative("price", request.price)?;

        let bill = self.repository.update(id, &request).await?;
        Ok(ApiResponse::success(bill, "Gas bill updated successfully"))
    }

    pub async fn delete(&self, auth: &AuthUser, id: i64) -> Result<ApiResponse<()>, AppError> {
        auth.ensure_can_write()?;
        self.repository.delete(id).await?;
        Ok(ApiResponse::message_only("Gas bill deleted successfully"))
    }

    pub async fn summary(&self, range: &SummaryRange) -> Result<ApiResponse<GasBillSummary>, AppError> {
        let summary = self.repository.summary(range).await?;
        Ok(ApiResponse::success(
            summary,
            "Bills summary retrieved successfully",
        ))
    }
}

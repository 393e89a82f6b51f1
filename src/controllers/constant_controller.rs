//! Controller del almacén de constantes

use sqlx::PgPool;
use validator::Validate;

use crate::dto::constant_dto::{CreateConstantRequest, UpdateConstantRequest};
use crate::dto::ApiResponse;
use crate::models::auth::AuthUser;
use crate::models::constant::{Constant, ConstantFilters};
use crate::models::station::SelectOption;
use crate::repositories::constant_repository::ConstantRepository;
use crate::utils::errors::AppError;
use crate::utils::query::Paginated;
use crate::utils::validation::require_text;

pub struct ConstantController {
    repository: ConstantRepository,
}

impl ConstantController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ConstantRepository::new(pool),
        }
    }

    pub async fn list(
        &self,
        filters: &ConstantFilters,
    ) -> Result<ApiResponse<Paginated<Constant>>, AppError> {
        let page = self.repository.list(filters).await?;
        Ok(ApiResponse::success(
            page,
            "Constants retrieved successfully",
        ))
    }

    pub async fn get_by_id(&self, id: i64) -> Result<ApiResponse<Constant>, AppError> {
        let constant = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Constant not found".to_string()))?;

        Ok(ApiResponse::success(
            constant,
            "Constant retrieved successfully",
        ))
    }

    pub async fn create(
        &self,
        auth: &AuthUser,
        request: CreateConstantRequest,
    ) -> Result<ApiResponse<Constant>, AppError> {
        auth.ensure_can_write()?;
        request.validate()?;
        require_text("cnst_name", &request.cnst_name)?;

        let constant = self.repository.create(&request).await?;
        Ok(ApiResponse::success(
            constant,
            "Constant created successfully",
        ))
    }

    pub async fn update(
        &self,
        auth: &AuthUser,
        id: i64,
        request: UpdateConstantRequest,
    ) -> Result<ApiResponse<Constant>, AppError> {
        auth.ensure_can_write()?;
        request.validate()?;

        let constant = self.repository.update(id, &request).await?;
        Ok(ApiResponse::success(
            constant,
            "Constant updated successfully",
        ))
    }

    pub async fn delete(&self, auth: &AuthUser, id: i64) -> Result<ApiResponse<()>, AppError> {
        auth.ensure_can_write()?;
        self.repository.delete(id).await?;
        Ok(ApiResponse::message_only("Constant deleted successfully"))
    }

    /// Todas las constantes de un tag, tal cual está escrito en los datos
    pub async fn by_type(&self, type_tag: &str) -> Result<ApiResponse<Vec<Constant>>, AppError> {
        let constants = self.repository.by_type(type_tag).await?;
        Ok(ApiResponse::success(
            constants,
            "Constants retrieved successfully",
        ))
    }

    pub async fn options(&self, type_tag: &str) -> Result<ApiResponse<Vec<SelectOption>>, AppError> {
        let options = self.repository.options(type_tag).await?;
        Ok(ApiResponse::success(
            options,
            "Constant options retrieved successfully",
        ))
    }

    pub async fn types(&self) -> Result<ApiResponse<Vec<String>>, AppError> {
        let types = self.repository.types().await?;
        Ok(ApiResponse::success(
            types,
            "Constant types retrieved successfully",
        ))
    }
}

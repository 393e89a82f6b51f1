//! Controller de usuarios
//!
//! Las contraseñas se hashean acá antes de llegar al repositorio; el hash
//! nunca se serializa hacia el cliente.

use sqlx::PgPool;
use validator::Validate;

use crate::dto::user_dto::{CreateUserRequest, UpdateUserRequest};
use crate::dto::ApiResponse;
use crate::models::auth::AuthUser;
use crate::models::user::{User, UserFilters};
use crate::repositories::user_repository::UserRepository;
use crate::services::auth_service;
use crate::utils::errors::AppError;
use crate::utils::query::Paginated;
use crate::utils::validation::require_text;

pub struct UserController {
    repository: UserRepository,
}

impl UserController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: UserRepository::new(pool),
        }
    }

    pub async fn list(&self, filters: &UserFilters) -> Result<ApiResponse<Paginated<User>>, AppError> {
        let page = self.repository.list(filters).await?;
        Ok(ApiResponse::success(page, "Users retrieved successfully"))
    }

    pub async fn get_by_id(&self, id: i64) -> Result<ApiResponse<User>, AppError> {
        let user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Ok(ApiResponse::success(user, "User retrieved successfully"))
    }

    pub async fn create(
        &self,
        auth: &AuthUser,
        request: CreateUserRequest,
    ) -> Result<ApiResponse<User>, AppError> {
        auth.ensure_can_write()?;
        request.validate()?;
        require_text("user_name_new", &request.user_name_new)?;
        require_text("user_full_name", &request.user_full_name)?;

        if self
            .repository
            .username_exists(&request.user_name_new, None)
            .await?
        {
            return Err(AppError::Conflict("Username already exists".to_string()));
        }

        let password_hash = auth_service::hash_password(&request.user_password)?;
        let user = self.repository.create(&request, &password_hash).await?;
        Ok(ApiResponse::success(user, "User created successfully"))
    }

    pub async fn update(
        &self,
        auth: &AuthUser,
        id: i64,
        request: UpdateUserRequest,
    ) -> Result<ApiResponse<User>, AppError> {
        auth.ensure_can_write()?;
        request.validate()?;

        if let Some(username) = &request.user_name_new {
            if self.repository.username_exists(username, Some(id)).await? {
                return Err(AppError::Conflict("Username already exists".to_string()));
            }
        }

        let password_hash = match &request.user_password {
            Some(plain) => Some(auth_service::hash_password(plain)?),
            None => None,
        };

        let user = self.repository.update(id, &request, password_hash).await?;
        Ok(ApiResponse::success(user, "User updated successfully"))
    }

    pub async fn delete(&self, auth: &AuthUser, id: i64) -> Result<ApiResponse<()>, AppError> {
        auth.ensure_can_write()?;
        self.repository.delete(id).await?;
        Ok(ApiResponse::message_only("User deleted successfully"))
    }

    pub async fn toggle_status(&self, auth: &AuthUser, id: i64) -> Result<ApiResponse<User>, AppError> {
        auth.ensure_can_write()?;
        let user = self.repository.toggle_status(id).await?;
        Ok(ApiResponse::success(
            user,
            "User status updated successfully",
        ))
    }
}

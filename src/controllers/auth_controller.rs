//! Controller de autenticación

use sqlx::PgPool;
use validator::Validate;

use crate::config::environment::EnvironmentConfig;
use crate::dto::auth_dto::{LoginRequest, LoginResponse};
use crate::dto::ApiResponse;
use crate::repositories::user_repository::UserRepository;
use crate::services::auth_service::{self, AuthService};
use crate::utils::errors::AppError;

pub struct AuthController {
    repository: UserRepository,
    auth_service: AuthService,
}

impl AuthController {
    pub fn new(pool: PgPool, config: &EnvironmentConfig) -> Self {
        Self {
            repository: UserRepository::new(pool),
            auth_service: AuthService::new(config),
        }
    }

    pub async fn login(&self, request: LoginRequest) -> Result<ApiResponse<LoginResponse>, AppError> {
        request.validate()?;

        let user = self
            .repository
            .find_active_by_username(&request.username)
            .await?
            .ok_or_else(|| {
                AppError::Unauthorized("Invalid username or inactive user".to_string())
            })?;

        if !auth_service::verify_password(&request.password, &user.user_password) {
            return Err(AppError::Unauthorized("Invalid password".to_string()));
        }

        let token = self.auth_service.generate_token(&user)?;
        let response = LoginResponse {
            token,
            user: auth_service::auth_user_from(&user),
        };

        Ok(ApiResponse::success(response, "Login successful"))
    }
}

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::auth::AuthUser;

/// Request de login
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 3))]
    pub username: String,

    #[validate(length(min = 3))]
    pub password: String,
}

/// Payload de login exitoso
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: AuthUser,
}

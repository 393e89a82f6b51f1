use serde::Deserialize;
use validator::Validate;

/// Request para crear un usuario
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 3, max = 30))]
    pub user_name_new: String,

    #[validate(length(min = 3, max = 30))]
    pub user_password: String,

    pub user_ssn: Option<i64>,

    #[validate(length(min = 1, max = 100))]
    pub user_full_name: String,

    pub user_active: Option<bool>,
    pub read_only: Option<bool>,
}

/// Request para actualizar un usuario (campos parciales)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 3, max = 30))]
    pub user_name_new: Option<String>,

    #[validate(length(min = 3, max = 30))]
    pub user_password: Option<String>,

    pub user_ssn: Option<i64>,

    #[validate(length(min = 1, max = 100))]
    pub user_full_name: Option<String>,

    pub user_active: Option<bool>,
    pub read_only: Option<bool>,
}

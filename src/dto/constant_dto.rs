use serde::Deserialize;
use validator::Validate;

/// Request para crear una constante
#[derive(Debug, Deserialize, Validate)]
pub struct CreateConstantRequest {
    #[validate(length(min = 1, max = 80))]
    pub cnst_name: String,

    #[validate(length(max = 40))]
    pub cnst_type: Option<String>,

    #[validate(length(max = 80))]
    pub cnst_eng: Option<String>,
}

/// Request para actualizar una constante (campos parciales)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateConstantRequest {
    #[validate(length(min = 1, max = 80))]
    pub cnst_name: Option<String>,

    #[validate(length(max = 40))]
    pub cnst_type: Option<String>,

    #[validate(length(max = 80))]
    pub cnst_eng: Option<String>,
}

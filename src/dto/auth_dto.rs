use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::auth::AuthUser;

// Request de login
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
}

// Response de login
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub user: AuthUser,
    pub token: String,
    pub token_type: &'static str,
    pub expires_in: u64,
}

use std::sync::Arc;

use validator::Validate;

use crate::dto::auth_dto::{LoginRequest, LoginResponse};
use crate::models::auth::{AuthUser, Caller};
use crate::services::auth_service::AuthService;
use crate::state::AppState;
use crate::utils::errors::{AppError, AppResult};

pub struct AuthController {
    auth: Arc<AuthService>,
}

impl AuthController {
    pub fn new(state: &AppState) -> Self {
        Self {
            auth: state.auth.clone(),
        }
    }

    pub async fn login(&self, request: LoginRequest) -> AppResult<LoginResponse> {
        request.validate()?;
        let user = self.auth.login(&request.username, &request.password).await?;
        let token = self.auth.issue_token(&user)?;

        Ok(LoginResponse {
            user,
            token,
            token_type: "Bearer",
            expires_in: self.auth.token_ttl_seconds(),
        })
    }

    pub fn me(&self, caller: &Caller) -> AppResult<AuthUser> {
        caller
            .user()
            .cloned()
            .ok_or_else(|| AppError::Unauthorized("No hay sesión activa".to_string()))
    }
}

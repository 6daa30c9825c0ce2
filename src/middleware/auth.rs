//! Middleware de autenticación
//!
//! Resuelve el `Caller` de cada petición y lo deja en las extensiones para
//! que los controllers apliquen la autorización por rol.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::models::auth::Caller;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::extract_token_from_header;

/// Token válido → `Caller::User`; token inválido → 401.
/// Sin token → `Caller::Anonymous`, salvo con `AUTH_REQUIRED=true` (401).
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .map(|h| {
            h.to_str()
                .map(str::to_owned)
                .map_err(|_| AppError::Unauthorized("Header Authorization inválido".to_string()))
        })
        .transpose()?;

    let caller = match header {
        Some(header) => {
            let token = extract_token_from_header(&header)?;
            let user = state.auth.validate_token(token)?;
            debug!("👤 Petición de '{}' ({})", user.username, user.role.as_str());
            Caller::User(user)
        }
        None if state.config.auth_required => {
            return Err(AppError::Unauthorized("Se requiere autenticación".to_string()));
        }
        None => Caller::Anonymous,
    };

    request.extensions_mut().insert(caller);
    Ok(next.run(request).await)
}

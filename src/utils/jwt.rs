//! Utilidades JWT
//!
//! Emisión y verificación de tokens de sesión (HS256). Los tokens no se
//! revocan: expiran según `JWT_EXPIRATION`.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::{
    config::environment::EnvironmentConfig,
    models::auth::{AuthUser, JwtClaims, UserRole},
    utils::errors::AppError,
};

/// Configuración de JWT
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration: u64,
}

impl From<&EnvironmentConfig> for JwtConfig {
    fn from(config: &EnvironmentConfig) -> Self {
        Self {
            secret: config.jwt_secret.clone(),
            expiration: config.jwt_expiration,
        }
    }
}

/// Generar JWT token para un usuario
pub fn generate_token(user: &AuthUser, config: &JwtConfig) -> Result<String, AppError> {
    let now = chrono::Utc::now();
    let expires_at = i64::try_from(config.expiration)
        .ok()
        .and_then(chrono::TimeDelta::try_seconds)
        .and_then(|ttl| now.checked_add_signed(ttl))
        .ok_or_else(|| {
            AppError::Internal(format!("JWT_EXPIRATION fuera de rango: {}", config.expiration))
        })?;

    let claims = JwtClaims {
        sub: user.id.clone(),
        username: user.username.clone(),
        role: user.role.as_str().to_string(),
        exp: expires_at.timestamp(),
        iat: now.timestamp(),
    };

    let encoding_key = EncodingKey::from_secret(config.secret.as_ref());

    encode(&Header::default(), &claims, &encoding_key)
        .map_err(|e| AppError::Jwt(format!("Error generando token: {}", e)))
}

/// Verificar y decodificar JWT token
pub fn verify_token(token: &str, config: &JwtConfig) -> Result<AuthUser, AppError> {
    let decoding_key = DecodingKey::from_secret(config.secret.as_ref());

    let claims = decode::<JwtClaims>(token, &decoding_key, &Validation::default())
        .map_err(|e| AppError::Jwt(format!("Token inválido: {}", e)))?
        .claims;

    let role = UserRole::from_str(&claims.role)
        .ok_or_else(|| AppError::Jwt(format!("Rol desconocido en token: {}", claims.role)))?;

    Ok(AuthUser {
        id: claims.sub,
        username: claims.username,
        role,
    })
}

/// Extraer token del header Authorization
pub fn extract_token_from_header(auth_header: &str) -> Result<&str, AppError> {
    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Jwt("Header Authorization debe comenzar con 'Bearer '".to_string()))?
        .trim();

    if token.is_empty() {
        return Err(AppError::Jwt("Token no puede estar vacío".to_string()));
    }

    Ok(token)
}

use std::collections::HashMap;
use std::time::Duration;

use tracing::{info, warn};

use crate::config::environment::EnvironmentConfig;
use crate::models::auth::{AuthUser, UserRole};
use crate::utils::errors::AppError;
use crate::utils::jwt::{self, JwtConfig};

#[derive(Debug, Clone)]
struct MockUser {
    id: &'static str,
    password: &'static str,
    role: UserRole,
}

/// Servicio de autenticación con tabla fija de usuarios
///
/// Las contraseñas se comparan en texto plano tras una espera artificial.
pub struct AuthService {
    users: HashMap<&'static str, MockUser>,
    jwt_config: JwtConfig,
    login_delay: Duration,
}

impl AuthService {
    pub fn new(config: &EnvironmentConfig) -> Self {
        let mut users = HashMap::new();
        users.insert(
            "admin",
            MockUser {
                id: "admin-001",
                password: "admin",
                role: UserRole::Admin,
            },
        );
        users.insert(
            "conductor",
            MockUser {
                id: "conductor-001",
                password: "conductor",
                role: UserRole::Conductor,
            },
        );

        Self {
            users,
            jwt_config: JwtConfig::from(config),
            login_delay: config.login_delay(),
        }
    }

    /// Valida credenciales y devuelve el usuario autenticado
    pub async fn login(&self, username: &str, password: &str) -> Result<AuthUser, AppError> {
        tokio::time::sleep(self.login_delay).await;

        match self.users.get(username) {
            Some(user) if user.password == password => {
                info!("🔐 Login correcto para '{}' ({})", username, user.role.as_str());
                Ok(AuthUser {
                    id: user.id.to_string(),
                    username: username.to_string(),
                    role: user.role,
                })
            }
            _ => {
                warn!("🔒 Credenciales inválidas para '{}'", username);
                Err(AppError::InvalidCredentials)
            }
        }
    }

    pub fn issue_token(&self, user: &AuthUser) -> Result<String, AppError> {
        jwt::generate_token(user, &self.jwt_config)
    }

    pub fn validate_token(&self, token: &str) -> Result<AuthUser, AppError> {
        jwt::verify_token(token, &self.jwt_config)
    }

    pub fn token_ttl_seconds(&self) -> u64 {
        self.jwt_config.expiration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> AuthService {
        AuthService::new(&EnvironmentConfig::without_delays())
    }

    #[tokio::test]
    async fn admin_login_yields_admin_role() {
        let user = service().login("admin", "admin").await.unwrap();
        assert_eq!(user.id, "admin-001");
        assert_eq!(user.role, UserRole::Admin);
    }

    #[tokio::test]
    async fn wrong_password_is_invalid_credentials() {
        let err = service().login("admin", "wrong").await.unwrap_err();
        assert!(matches!(err, AppError::InvalidCredentials));

        let err = service().login("nadie", "admin").await.unwrap_err();
        assert!(matches!(err, AppError::InvalidCredentials));
    }

    #[tokio::test(start_paused = true)]
    async fn rejection_happens_after_simulated_delay() {
        let service = AuthService::new(&EnvironmentConfig::default());
        let started = tokio::time::Instant::now();

        assert!(service.login("admin", "wrong").await.is_err());
        assert!(started.elapsed() >= Duration::from_millis(800));
    }

    #[tokio::test]
    async fn issued_token_round_trips_through_validation() {
        let service = service();
        let user = service.login("conductor", "conductor").await.unwrap();
        let token = service.issue_token(&user).unwrap();

        assert_eq!(service.validate_token(&token).unwrap(), user);
        assert!(service.validate_token("no.es.token").is_err());
    }
}

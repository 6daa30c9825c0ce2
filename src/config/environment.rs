//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno. Todas las variables son
//! opcionales: un valor ausente o mal formado usa el valor por defecto.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use tracing::warn;

use crate::store::Latency;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    /// URL pública del servidor, solo se muestra en el documento OpenAPI
    pub public_api_url: String,
    pub jwt_secret: String,
    pub jwt_expiration: u64,
    /// Con `true` toda petición a paquetes/rutas exige token Bearer
    pub auth_required: bool,
    pub cors_origins: Vec<String>,
    pub log_level: String,
    pub fetch_delay_ms: u64,
    pub mutation_delay_ms: u64,
    pub login_delay_ms: u64,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            port: 3000,
            host: "0.0.0.0".to_string(),
            public_api_url: "http://localhost:3000".to_string(),
            jwt_secret: "logistics-dev-secret".to_string(),
            jwt_expiration: 86_400,
            auth_required: false,
            cors_origins: Vec::new(),
            log_level: "debug".to_string(),
            fetch_delay_ms: 1000,
            mutation_delay_ms: 600,
            login_delay_ms: 800,
        }
    }
}

impl EnvironmentConfig {
    /// Construye la configuración a partir de las variables de entorno
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            environment: env::var("ENVIRONMENT").unwrap_or(defaults.environment),
            port: parse_var("PORT", defaults.port),
            host: env::var("HOST").unwrap_or(defaults.host),
            public_api_url: env::var("NEXT_PUBLIC_API_URL").unwrap_or(defaults.public_api_url),
            jwt_secret: env::var("JWT_SECRET").unwrap_or(defaults.jwt_secret),
            jwt_expiration: parse_var("JWT_EXPIRATION", defaults.jwt_expiration),
            auth_required: parse_var("AUTH_REQUIRED", defaults.auth_required),
            cors_origins: env::var("CORS_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or(defaults.cors_origins),
            log_level: env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
            fetch_delay_ms: parse_var("FETCH_DELAY_MS", defaults.fetch_delay_ms),
            mutation_delay_ms: parse_var("MUTATION_DELAY_MS", defaults.mutation_delay_ms),
            login_delay_ms: parse_var("LOGIN_DELAY_MS", defaults.login_delay_ms),
        }
    }

    /// Configuración sin latencias simuladas, para tests
    pub fn without_delays() -> Self {
        Self {
            fetch_delay_ms: 0,
            mutation_delay_ms: 0,
            login_delay_ms: 0,
            ..Self::default()
        }
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Obtener la dirección de escucha del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn latency(&self) -> Latency {
        Latency {
            fetch: Duration::from_millis(self.fetch_delay_ms),
            mutation: Duration::from_millis(self.mutation_delay_ms),
        }
    }

    pub fn login_delay(&self) -> Duration {
        Duration::from_millis(self.login_delay_ms)
    }

    pub fn tracing_level(&self) -> tracing::Level {
        tracing::Level::from_str(&self.log_level).unwrap_or(tracing::Level::DEBUG)
    }
}

fn parse_var<T: FromStr>(name: &str, default: T) -> T {
    match env::var(name) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("⚠️ Valor inválido para {}: '{}', usando valor por defecto", name, raw);
            default
        }),
        Err(_) => default,
    }
}

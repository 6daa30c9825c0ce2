use chrono::{DateTime, Utc};
use serde::Serialize;

// Sobre uniforme de respuesta de la API
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            message: None,
            timestamp: None,
        }
    }

    pub fn success_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::success(data)
        }
    }

    /// Respuesta de listado: incluye la marca de tiempo de generación
    pub fn list(data: T) -> Self {
        Self {
            timestamp: Some(Utc::now()),
            ..Self::success(data)
        }
    }
}

impl ApiResponse<()> {
    pub fn failure(error: String, message: Option<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
            message,
            timestamp: None,
        }
    }
}

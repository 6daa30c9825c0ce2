use serde::{Deserialize, Serialize};

/// Roles del sistema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Conductor,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Conductor => "conductor",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "admin" => Some(UserRole::Admin),
            "conductor" => Some(UserRole::Conductor),
            _ => None,
        }
    }
}

/// Usuario autenticado
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub username: String,
    pub role: UserRole,
}

impl AuthUser {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

/// Quién realiza la petición, resuelto por el middleware de autenticación
#[derive(Debug, Clone, PartialEq)]
pub enum Caller {
    /// Sin token y con autenticación opcional: visibilidad de administrador
    Anonymous,
    User(AuthUser),
}

impl Caller {
    pub fn is_admin(&self) -> bool {
        match self {
            Caller::Anonymous => true,
            Caller::User(user) => user.is_admin(),
        }
    }

    /// Id del conductor cuando el llamante es un conductor
    pub fn driver_id(&self) -> Option<&str> {
        match self {
            Caller::User(user) if user.role == UserRole::Conductor => Some(user.id.as_str()),
            _ => None,
        }
    }

    pub fn user(&self) -> Option<&AuthUser> {
        match self {
            Caller::Anonymous => None,
            Caller::User(user) => Some(user),
        }
    }
}

/// Claims del JWT
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: String, // user_id
    pub username: String,
    pub role: String,
    pub exp: i64, // expiration timestamp
    pub iat: i64, // issued at timestamp
}

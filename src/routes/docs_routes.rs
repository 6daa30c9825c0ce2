//! Documentación OpenAPI de la API
//!
//! Documento estático; solo la URL del servidor viene de la configuración
//! (`NEXT_PUBLIC_API_URL`).

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

pub async fn swagger(State(state): State<AppState>) -> Json<Value> {
    Json(openapi_document(&state.config.public_api_url))
}

fn id_parameter() -> Value {
    json!({ "name": "id", "in": "path", "required": true, "schema": { "type": "string" } })
}

fn envelope(schema: Value) -> Value {
    json!({
        "type": "object",
        "properties": {
            "success": { "type": "boolean" },
            "data": schema,
            "message": { "type": "string" },
            "timestamp": { "type": "string", "format": "date-time" }
        }
    })
}

fn json_content(schema: Value) -> Value {
    json!({ "application/json": { "schema": schema } })
}

pub fn openapi_document(server_url: &str) -> Value {
    let package_ref = json!({ "$ref": "#/components/schemas/Package" });
    let route_ref = json!({ "$ref": "#/components/schemas/Route" });
    let error_ref = json!({ "$ref": "#/components/schemas/Error" });
    let bearer = json!([{ "bearerAuth": [] }]);

    json!({
        "openapi": "3.0.0",
        "info": {
            "title": "Sistema de Ruteo Logístico API",
            "description": "API REST para gestión de rutas, paquetes y entregas logísticas",
            "version": env!("CARGO_PKG_VERSION"),
            "contact": { "name": "Soporte Logístico" }
        },
        "servers": [{ "url": server_url, "description": "API Server" }],
        "paths": {
            "/api/auth/login": {
                "post": {
                    "tags": ["Autenticación"],
                    "summary": "Autenticar usuario",
                    "description": "Valida credenciales y retorna token de sesión",
                    "requestBody": {
                        "required": true,
                        "content": json_content(json!({
                            "type": "object",
                            "properties": {
                                "username": { "type": "string", "example": "admin" },
                                "password": { "type": "string", "example": "admin" }
                            },
                            "required": ["username", "password"]
                        }))
                    },
                    "responses": {
                        "200": {
                            "description": "Login exitoso",
                            "content": json_content(envelope(json!({
                                "type": "object",
                                "properties": {
                                    "user": { "$ref": "#/components/schemas/User" },
                                    "token": { "type": "string" },
                                    "tokenType": { "type": "string", "example": "Bearer" },
                                    "expiresIn": { "type": "integer" }
                                }
                            })))
                        },
                        "401": { "description": "Credenciales inválidas", "content": json_content(error_ref.clone()) }
                    }
                }
            },
            "/api/auth/me": {
                "get": {
                    "tags": ["Autenticación"],
                    "summary": "Usuario de la sesión actual",
                    "security": bearer.clone(),
                    "responses": {
                        "200": { "description": "Usuario autenticado", "content": json_content(envelope(json!({ "$ref": "#/components/schemas/User" }))) },
                        "401": { "description": "Sin sesión", "content": json_content(error_ref.clone()) }
                    }
                }
            },
            "/api/packages": {
                "get": {
                    "tags": ["Paquetes"],
                    "summary": "Obtener todos los paquetes",
                    "description": "Retorna la lista de paquetes visible para el usuario",
                    "parameters": [
                        { "name": "status", "in": "query", "schema": { "$ref": "#/components/schemas/PackageStatus" } },
                        { "name": "assignedTo", "in": "query", "schema": { "type": "string" } }
                    ],
                    "responses": {
                        "200": { "description": "Lista de paquetes", "content": json_content(envelope(json!({ "type": "array", "items": package_ref.clone() }))) },
                        "500": { "description": "Error al obtener paquetes", "content": json_content(error_ref.clone()) }
                    }
                },
                "post": {
                    "tags": ["Paquetes"],
                    "summary": "Crear paquete",
                    "security": bearer.clone(),
                    "requestBody": { "required": true, "content": json_content(json!({ "$ref": "#/components/schemas/NewPackage" })) },
                    "responses": {
                        "201": { "description": "Paquete creado", "content": json_content(envelope(package_ref.clone())) },
                        "400": { "description": "Datos inválidos", "content": json_content(error_ref.clone()) },
                        "403": { "description": "Requiere rol de administrador" }
                    }
                }
            },
            "/api/packages/{id}": {
                "get": {
                    "tags": ["Paquetes"],
                    "summary": "Obtener paquete específico",
                    "parameters": [id_parameter()],
                    "responses": {
                        "200": { "description": "Paquete encontrado", "content": json_content(envelope(package_ref.clone())) },
                        "404": { "description": "Paquete no encontrado", "content": json_content(error_ref.clone()) }
                    }
                },
                "put": {
                    "tags": ["Paquetes"],
                    "summary": "Actualizar paquete",
                    "description": "Aplica solo los campos presentes. Los conductores solo pueden cambiar el estado de sus paquetes.",
                    "parameters": [id_parameter()],
                    "requestBody": {
                        "required": true,
                        "content": json_content(json!({
                            "type": "object",
                            "properties": {
                                "status": { "$ref": "#/components/schemas/PackageStatus" },
                                "assignedTo": { "type": "string" },
                                "priority": { "$ref": "#/components/schemas/PackagePriority" },
                                "trackingNumber": { "type": "string" },
                                "origin": { "type": "string" },
                                "destination": { "type": "string" },
                                "weight": { "type": "number" }
                            }
                        }))
                    },
                    "responses": {
                        "200": { "description": "Paquete actualizado", "content": json_content(envelope(package_ref.clone())) },
                        "404": { "description": "Paquete no encontrado", "content": json_content(error_ref.clone()) }
                    }
                },
                "delete": {
                    "tags": ["Paquetes"],
                    "summary": "Eliminar paquete",
                    "security": bearer.clone(),
                    "parameters": [id_parameter()],
                    "responses": {
                        "200": { "description": "Paquete eliminado", "content": json_content(envelope(package_ref.clone())) },
                        "404": { "description": "Paquete no encontrado", "content": json_content(error_ref.clone()) }
                    }
                }
            },
            "/api/packages/{id}/assign": {
                "post": {
                    "tags": ["Paquetes"],
                    "summary": "Asignar paquete a un conductor",
                    "security": bearer.clone(),
                    "parameters": [id_parameter()],
                    "requestBody": {
                        "required": true,
                        "content": json_content(json!({
                            "type": "object",
                            "properties": { "driverId": { "type": "string", "example": "conductor-001" } },
                            "required": ["driverId"]
                        }))
                    },
                    "responses": {
                        "200": { "description": "Paquete asignado", "content": json_content(envelope(package_ref.clone())) },
                        "404": { "description": "Paquete no encontrado", "content": json_content(error_ref.clone()) }
                    }
                }
            },
            "/api/packages/refresh": {
                "post": {
                    "tags": ["Paquetes"],
                    "summary": "Recargar paquetes semilla",
                    "security": bearer.clone(),
                    "responses": { "200": { "description": "Lista recargada", "content": json_content(envelope(json!({ "type": "array", "items": package_ref.clone() }))) } }
                }
            },
            "/api/routes": {
                "get": {
                    "tags": ["Rutas"],
                    "summary": "Obtener todas las rutas",
                    "parameters": [
                        { "name": "status", "in": "query", "schema": { "$ref": "#/components/schemas/RouteStatus" } },
                        { "name": "assignedDriver", "in": "query", "schema": { "type": "string" } }
                    ],
                    "responses": {
                        "200": { "description": "Lista de rutas", "content": json_content(envelope(json!({ "type": "array", "items": route_ref.clone() }))) }
                    }
                },
                "post": {
                    "tags": ["Rutas"],
                    "summary": "Crear ruta",
                    "security": bearer.clone(),
                    "requestBody": { "required": true, "content": json_content(route_ref.clone()) },
                    "responses": {
                        "201": { "description": "Ruta creada", "content": json_content(envelope(route_ref.clone())) },
                        "400": { "description": "Datos inválidos", "content": json_content(error_ref.clone()) }
                    }
                }
            },
            "/api/routes/{id}": {
                "get": {
                    "tags": ["Rutas"],
                    "summary": "Obtener ruta específica",
                    "parameters": [id_parameter()],
                    "responses": {
                        "200": { "description": "Ruta encontrada", "content": json_content(envelope(route_ref.clone())) },
                        "404": { "description": "Ruta no encontrada", "content": json_content(error_ref.clone()) }
                    }
                },
                "put": {
                    "tags": ["Rutas"],
                    "summary": "Actualizar estado de ruta",
                    "parameters": [id_parameter()],
                    "requestBody": {
                        "required": true,
                        "content": json_content(json!({
                            "type": "object",
                            "properties": { "status": { "$ref": "#/components/schemas/RouteStatus" } },
                            "required": ["status"]
                        }))
                    },
                    "responses": {
                        "200": { "description": "Ruta actualizada", "content": json_content(envelope(route_ref.clone())) },
                        "404": { "description": "Ruta no encontrada", "content": json_content(error_ref.clone()) }
                    }
                }
            },
            "/api/routes/refresh": {
                "post": {
                    "tags": ["Rutas"],
                    "summary": "Recargar rutas semilla",
                    "security": bearer.clone(),
                    "responses": { "200": { "description": "Lista recargada", "content": json_content(envelope(json!({ "type": "array", "items": route_ref.clone() }))) } }
                }
            },
            "/api/stats": {
                "get": {
                    "tags": ["Panel"],
                    "summary": "Resumen de la operación",
                    "responses": { "200": { "description": "Estadísticas", "content": json_content(envelope(json!({ "$ref": "#/components/schemas/Stats" }))) } }
                }
            },
            "/api/conductor/dashboard": {
                "get": {
                    "tags": ["Panel"],
                    "summary": "Entregas del conductor",
                    "parameters": [
                        { "name": "routeId", "in": "query", "schema": { "type": "string" } },
                        { "name": "driverId", "in": "query", "schema": { "type": "string" }, "description": "Solo administradores" }
                    ],
                    "responses": { "200": { "description": "Vista del conductor" } }
                }
            },
            "/api/health": {
                "get": {
                    "tags": ["Sistema"],
                    "summary": "Estado del servicio",
                    "responses": { "200": { "description": "Servicio operativo" } }
                }
            }
        },
        "components": {
            "securitySchemes": {
                "bearerAuth": { "type": "http", "scheme": "bearer", "bearerFormat": "JWT" }
            },
            "schemas": {
                "PackageStatus": { "type": "string", "enum": ["pendiente", "en_transito", "entregado", "cancelado"], "example": "pendiente" },
                "PackagePriority": { "type": "string", "enum": ["baja", "media", "alta"], "example": "alta" },
                "RouteStatus": { "type": "string", "enum": ["activa", "completada", "pausada"], "example": "activa" },
                "Package": {
                    "type": "object",
                    "properties": {
                        "id": { "type": "string", "example": "pkg-001" },
                        "trackingNumber": { "type": "string", "example": "LOG-2024-001" },
                        "origin": { "type": "string", "example": "Centro de Distribución A" },
                        "destination": { "type": "string", "example": "Zona Centro" },
                        "weight": { "type": "number", "example": 5.2 },
                        "status": { "$ref": "#/components/schemas/PackageStatus" },
                        "priority": { "$ref": "#/components/schemas/PackagePriority" },
                        "assignedTo": { "type": "string", "example": "conductor-001" },
                        "createdAt": { "type": "string", "format": "date-time" }
                    }
                },
                "NewPackage": {
                    "type": "object",
                    "properties": {
                        "trackingNumber": { "type": "string" },
                        "origin": { "type": "string" },
                        "destination": { "type": "string" },
                        "weight": { "type": "number" },
                        "status": { "$ref": "#/components/schemas/PackageStatus" },
                        "priority": { "$ref": "#/components/schemas/PackagePriority" },
                        "assignedTo": { "type": "string" }
                    },
                    "required": ["trackingNumber", "origin", "destination", "weight", "priority"]
                },
                "Route": {
                    "type": "object",
                    "properties": {
                        "id": { "type": "string", "example": "route-001" },
                        "name": { "type": "string", "example": "Ruta Centro-Norte" },
                        "startPoint": { "type": "string", "example": "Almacén Central" },
                        "endPoint": { "type": "string", "example": "Zona Norte" },
                        "distance": { "type": "number", "example": 45.5 },
                        "estimatedTime": { "type": "integer", "example": 120 },
                        "assignedDriver": { "type": "string", "example": "conductor-001" },
                        "packages": { "type": "array", "items": { "type": "string" }, "example": ["pkg-001", "pkg-002"] },
                        "status": { "$ref": "#/components/schemas/RouteStatus" }
                    }
                },
                "User": {
                    "type": "object",
                    "properties": {
                        "id": { "type": "string", "example": "admin-001" },
                        "username": { "type": "string", "example": "admin" },
                        "role": { "type": "string", "enum": ["admin", "conductor"] }
                    }
                },
                "Stats": {
                    "type": "object",
                    "properties": {
                        "totalPackages": { "type": "integer" },
                        "pendingPackages": { "type": "integer" },
                        "inTransitPackages": { "type": "integer" },
                        "deliveredPackages": { "type": "integer" },
                        "highPriorityPackages": { "type": "integer" },
                        "totalRoutes": { "type": "integer" },
                        "activeRoutes": { "type": "integer" },
                        "completedRoutes": { "type": "integer" },
                        "totalDistance": { "type": "number" }
                    }
                },
                "Error": {
                    "type": "object",
                    "properties": {
                        "success": { "type": "boolean", "example": false },
                        "error": { "type": "string", "example": "Paquete no encontrado" },
                        "message": { "type": "string" }
                    }
                }
            }
        }
    })
}

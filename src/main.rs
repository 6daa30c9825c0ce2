use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info, warn};

use logistics_dashboard::config::EnvironmentConfig;
use logistics_dashboard::{create_app, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();
    let config = EnvironmentConfig::from_env();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(config.tracing_level())
        .init();

    info!("🚚 Sistema de Ruteo Logístico - API");
    info!("==================================");

    if config.is_development() && !config.auth_required {
        warn!("⚠️ AUTH_REQUIRED=false: las peticiones sin token tienen acceso de administrador");
    }

    let addr: SocketAddr = config.server_url().parse()?;
    let state = AppState::seeded(config).await;
    let app = create_app(state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("🔐 Autenticación:");
    info!("   POST /api/auth/login - Login");
    info!("   GET  /api/auth/me - Usuario actual");
    info!("📦 Paquetes:");
    info!("   GET    /api/packages - Listar paquetes");
    info!("   POST   /api/packages - Crear paquete");
    info!("   GET    /api/packages/:id - Obtener paquete");
    info!("   PUT    /api/packages/:id - Actualizar paquete");
    info!("   DELETE /api/packages/:id - Eliminar paquete");
    info!("   POST   /api/packages/:id/assign - Asignar conductor");
    info!("   POST   /api/packages/refresh - Recargar datos semilla");
    info!("🗺️ Rutas:");
    info!("   GET  /api/routes - Listar rutas");
    info!("   POST /api/routes - Crear ruta");
    info!("   GET  /api/routes/:id - Obtener ruta");
    info!("   PUT  /api/routes/:id - Actualizar estado de ruta");
    info!("   POST /api/routes/refresh - Recargar datos semilla");
    info!("📊 Panel:");
    info!("   GET  /api/stats - Resumen de la operación");
    info!("   GET  /api/conductor/dashboard - Entregas del conductor");
    info!("📖 Sistema:");
    info!("   GET  /api/swagger - Documentación OpenAPI");
    info!("   GET  /api/health - Estado del servicio");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Error del servidor: {}", e);
        return Err(e.into());
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el manejador de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el manejador de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use dotenvy::dotenv;

use fleet_dispatch::cache::connect_store;
use fleet_dispatch::config::environment::EnvironmentConfig;
use fleet_dispatch::create_app;
use fleet_dispatch::services::auth_service::MockAuthenticator;
use fleet_dispatch::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("🚚 Fleet Dispatch - Gestión de viajes y conductores");
    info!("================================================");

    let config = match EnvironmentConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("❌ Configuración inválida: {}", e);
            return Err(anyhow::anyhow!("Error de configuración: {}", e));
        }
    };

    if config.is_development() {
        info!("🧪 Modo desarrollo");
    }
    if !config.fleet_sync {
        info!("⚠️ Sincronización de flota desactivada: los estados de conductores y vehículos no se actualizan");
    }

    // Inicializar almacén
    let store = match connect_store(&config.storage).await {
        Ok(store) => store,
        Err(e) => {
            error!("❌ Error conectando al almacén: {}", e);
            return Err(anyhow::anyhow!("Error de almacén: {}", e));
        }
    };

    let addr: SocketAddr = config.server_url().parse()?;
    let app_state = AppState::new(config, store, Arc::new(MockAuthenticator::new()));
    let app = create_app(app_state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🔐 Autenticación:");
    info!("   POST /api/auth/login - Login (selección de rol)");
    info!("   POST /api/auth/logout - Cerrar sesión");
    info!("   GET  /api/auth/me - Sesión actual");
    info!("👤 Conductores:");
    info!("   GET|POST /api/drivers - Listar / crear conductores");
    info!("   GET|PUT|DELETE /api/drivers/:id - Conductor");
    info!("🚗 Vehículos:");
    info!("   GET|POST /api/vehicles - Listar / crear vehículos");
    info!("   GET|PUT|DELETE /api/vehicles/:id - Vehículo");
    info!("🧭 Viajes:");
    info!("   GET|POST /api/trips - Listar / crear viajes (asignación automática)");
    info!("   GET  /api/trips/:id - Obtener viaje");
    info!("   POST /api/trips/:id/accept|refuse|start|complete - Ciclo de vida");
    info!("📊 Reportes:");
    info!("   GET  /api/reports/summary|drivers|top-drivers|vehicles|refusals");
    info!("   GET  /api/dashboard/admin - Panel del administrador");
    info!("   GET  /api/driver/dashboard|trips - Panel del conductor");

    // Iniciar servidor en background
    let server_handle = tokio::spawn(async move {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                error!("❌ Error del servidor: {}", e);
                e
            })
    });

    // Esperar a que el servidor termine
    if let Err(e) = server_handle.await? {
        error!("❌ Servidor terminó con error: {}", e);
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
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

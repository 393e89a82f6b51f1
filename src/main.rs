use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use fuel_management::config::environment::EnvironmentConfig;
use fuel_management::database;
use fuel_management::routes;
use fuel_management::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::default();

    // Configurar logging
    let level = if config.is_development() {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    info!("⛽ Fuel Management - API de flota municipal");
    info!("===========================================");

    // Inicializar base de datos
    let pool = match database::create_pool(None).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };
    info!("✅ Base de datos conectada");

    let addr: SocketAddr = config.server_url().parse()?;
    let app_state = AppState::new(pool, config);
    let app = routes::create_app(app_state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Recursos disponibles:");
    info!("   /api/auth        - login, logout, verify, user");
    info!("   /api/vehicles    - CRUD + fuel-logs + stats");
    info!("   /api/generators  - CRUD + fuel-logs + stats");
    info!("   /api/fuel-logs   - CRUD");
    info!("   /api/invoices    - CRUD + summary");
    info!("   /api/inventory   - current, history, update, stats, CRUD");
    info!("   /api/stations    - CRUD + options");
    info!("   /api/users       - CRUD + toggle-status");
    info!("   /api/maintenance - CRUD");
    info!("   /api/constants   - CRUD + types + options");
    info!("   /api/dashboard   - stats");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

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

use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use transit_tracker::config::{DatabaseConfig, EnvironmentConfig};
use transit_tracker::database::DatabaseConnection;
use transit_tracker::{create_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::from_env()?;

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(config.tracing_level())
        .init();

    info!("🚆 Public Transport Tracker API");
    info!("================================================");
    info!("Entorno: {}", config.environment);

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::new(&DatabaseConfig::from(&config)).await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error abriendo la base de datos: {:#}", e);
            return Err(e);
        }
    };

    if db_connection.schema_created() {
        info!("🆕 Base de datos nueva con esquema completo");
    } else {
        info!("🗄️ Reutilizando base de datos existente (sin migraciones)");
    }

    let app_state = AppState::new(db_connection.pool().clone(), config.clone());
    let app = create_router(app_state);

    let addr: SocketAddr = config.server_url().parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /api/health - Health check");
    info!("   GET  /api/routes | POST /api/routes");
    info!("   GET  /api/routes/:id | GET /api/routes/:id/schedules");
    info!("   GET  /api/stations | POST /api/stations | GET /api/stations/:id");
    info!("   GET  /api/schedules?route_id=&day_of_week= | POST /api/schedules");
    info!("   GET  /api/schedules/:id | GET /api/schedules/:id/delays");
    info!("   GET  /api/delays?is_active=&route_id= | POST /api/delays");
    info!("   GET  /api/delays/:id | PUT /api/delays/:id");
    info!("   GET  /api/search?q=&type=");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Error del servidor: {}", e);
        return Err(e.into());
    }

    db_connection.pool().close().await;
    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("No se pudo instalar el handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("No se pudo instalar el handler de SIGTERM: {}", e);
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

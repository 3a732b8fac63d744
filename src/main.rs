use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use dotenvy::dotenv;
use serde_json::json;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use flota_api::config::environment::EnvironmentConfig;
use flota_api::database::create_pool;
use flota_api::middleware::cors::{cors_middleware, cors_middleware_with_origins};
use flota_api::routes;
use flota_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚚 Flota API - Gestión de flota y logística");
    info!("===========================================");

    let config = EnvironmentConfig::desde_env();

    // Inicializar base de datos
    let pool = match create_pool(None).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let cors = if config.is_production() {
        cors_middleware_with_origins(config.cors_origins.clone())
    } else {
        cors_middleware()
    };

    let port = config.port;
    let app_state = AppState::new(pool, config);

    let app = Router::new()
        .route("/health", get(health_endpoint))
        .nest("/api", routes::create_api_router(app_state.clone()))
        .layer(cors)
        .with_state(app_state);

    let addr: SocketAddr = format!("0.0.0.0:{}", port).parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🔐 Endpoints - Auth:");
    info!("   POST /api/auth/login - Iniciar sesión");
    info!("   POST /api/auth/logout - Cerrar sesión");
    info!("   GET  /api/auth/me - Usuario actual");
    info!("🚛 Endpoints - Camiones (requieren token):");
    info!("   POST /api/camiones - Crear camión");
    info!("   GET  /api/camiones?buscar=&estado= - Listar con filtro y conteos");
    info!("   GET  /api/camiones/:id - Obtener camión");
    info!("   PUT  /api/camiones/:id - Actualizar camión");
    info!("   DELETE /api/camiones/:id - Eliminar camión");
    info!("🧑 Endpoints - Motoristas: POST/GET/PUT/DELETE /api/motoristas");
    info!("🏢 Endpoints - Clientes: POST/GET/PUT/DELETE /api/clientes");
    info!("📋 Endpoints - Cotizaciones: POST/GET/PUT/DELETE /api/cotizaciones");
    info!("🗺️ Endpoints - Viajes: POST/GET/PUT/DELETE /api/viajes");
    info!("📊 Endpoints - Dashboard:");
    info!("   GET  /api/dashboard/resumen - Conteos por estado de cada colección");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Endpoint de salud simple
async fn health_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
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

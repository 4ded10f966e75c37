use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use dotenvy::dotenv;
use serde_json::json;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use moto_backoffice::cache;
use moto_backoffice::cache::redis_client::RedisClient;
use moto_backoffice::config::environment::EnvironmentConfig;
use moto_backoffice::database;
use moto_backoffice::middleware::cors::cors_middleware;
use moto_backoffice::routes;
use moto_backoffice::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🏍️ Back-office de Financiación de Motos");
    info!("========================================");

    // Inicializar base de datos
    let pool = match database::create_pool(None).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    // Inicializar Redis y cache
    let redis_url =
        std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string());

    let config = EnvironmentConfig::default();
    let redis_config = cache::CacheConfig {
        redis_url,
        default_ttl: config.tasa_iva_cache_ttl,
        max_connections: 10,
    };

    let redis_client = match RedisClient::new(redis_config).await {
        Ok(client) => client,
        Err(e) => {
            error!("❌ Error conectando a Redis: {}", e);
            return Err(anyhow::anyhow!("Error de Redis: {}", e));
        }
    };

    // Crear router de la API
    let port = config.port;
    let app_state = AppState::new(pool, config, redis_client);

    let app = Router::new()
        .route("/health", get(health_endpoint))
        .nest(
            "/api/cotizaciones",
            routes::cotizacion_routes::create_cotizacion_router(),
        )
        .nest(
            "/api/creditos",
            routes::credito_routes::create_credito_router(),
        )
        .nest(
            "/api/solicitudes-facturacion",
            routes::solicitud_facturacion_routes::create_solicitud_facturacion_router(),
        )
        .layer(cors_middleware())
        .with_state(app_state);

    let addr: SocketAddr = format!("0.0.0.0:{}", port).parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("📋 Endpoints - Cotizaciones:");
    info!("   GET  /api/cotizaciones/:id - Obtener cotización");
    info!("💳 Endpoints - Créditos:");
    info!("   GET  /api/creditos/:codigo - Obtener crédito");
    info!("   GET  /api/creditos/:codigo/desglose - Desglose de costos derivado");
    info!("🧾 Endpoints - Solicitudes de facturación:");
    info!("   POST /api/solicitudes-facturacion - Crear solicitud");
    info!("   GET  /api/solicitudes-facturacion/ultima?credito=CR-XXXXX - Última solicitud");

    // Iniciar servidor en background
    let server_handle = tokio::spawn(async move {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                error!("❌ Error del servidor: {}", e);
                anyhow::Error::from(e)
            })
    });

    // Esperar a que el servidor termine
    if let Err(e) = server_handle.await? {
        error!("❌ Servidor terminó con error: {}", e);
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Endpoint de health check
async fn health_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "service": "moto-backoffice",
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
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

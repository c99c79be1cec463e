use actix_cors::Cors;
use actix_web::middleware::Compress;
use actix_web::{http::header, web, App, HttpResponse, HttpServer, Responder};
use actix_web_prometheus::PrometheusMetricsBuilder;
use std::sync::Arc;

pub mod config;
pub mod datafiles;
pub mod mcp;
pub mod railways;
pub mod render;
pub mod state;
pub mod weather;

pub use crate::state::AppState;

use crate::config::AppConfig;
use crate::mcp::tools::ToolRegistry;
use crate::mcp::{McpService, McpState};

/// Service liveness probe.
async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

pub async fn run() -> std::io::Result<()> {
    dotenvy::dotenv().ok(); // Load .env file
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let app_config = AppConfig::from_env();
    let port = app_config.port;
    let app_state = web::Data::new(AppState::with_config(app_config));
    let mcp_state = web::Data::new(Arc::new(McpState::new(McpService::new(
        ToolRegistry::new(),
    ))));

    let prometheus = PrometheusMetricsBuilder::new("sahayak_server")
        .endpoint("/metrics")
        .build()
        .expect("Failed to create Prometheus metrics middleware");

    log::info!("Starting MCP server at http://0.0.0.0:{}", port);

    HttpServer::new(move || {
        let prometheus = prometheus.clone();
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "OPTIONS"])
            .allowed_headers(vec![
                header::AUTHORIZATION,
                header::ACCEPT,
                header::CONTENT_TYPE,
            ])
            .max_age(3600);

        App::new()
            .wrap(Compress::default())
            .wrap(prometheus)
            .wrap(cors)
            .app_data(app_state.clone())
            .app_data(mcp_state.clone())
            .configure(mcp::config)
            .service(web::resource("/health").route(web::get().to(health)))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config;
use crate::database::store::{CompanyStore, MemoryCompanyStore, PgCompanyStore};
use crate::handlers;

/// Shared handler state: the Record Store behind a trait object so tests and
/// `--memory` runs can swap the backend.
pub type AppState = Arc<dyn CompanyStore>;

pub fn app(store: AppState) -> Router {
    let api_config = &config::config().api;

    let router = Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        // Companies API
        .merge(companies_routes())
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(DefaultBodyLimit::max(api_config.max_request_size_bytes));

    let router = if api_config.enable_request_logging {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    };

    router.with_state(store)
}

fn companies_routes() -> Router<AppState> {
    Router::new()
        // Collection operations
        .route(
            "/api/companies",
            get(handlers::company_list).post(handlers::company_create),
        )
        // Record operations
        .route(
            "/api/companies/:id",
            axum::routing::put(handlers::company_update).delete(handlers::company_delete),
        )
}

/// Run the server: build the store, bind and serve until shutdown.
pub async fn serve(memory: bool) -> anyhow::Result<()> {
    let store: AppState = if memory {
        Arc::new(MemoryCompanyStore::new())
    } else {
        Arc::new(PgCompanyStore::connect().await?)
    };

    let app = app(store);

    // Allow tests or deployments to override port via env
    let port = std::env::var("COMPANIES_API_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    tracing::info!("Companies API listening on http://{}", bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}

async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "name": "Companies API",
        "version": version,
        "description": "Companies management slice - REST API over a relational record store",
        "endpoints": {
            "home": "/ (public)",
            "health": "/health (public)",
            "companies": "/api/companies[/:id]",
        }
    }))
}

async fn health(
    axum::extract::State(store): axum::extract::State<AppState>,
) -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match store.ping().await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": now,
                "store": "ok"
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "degraded",
                "timestamp": now,
                "error": "store unavailable",
                "store_error": e.to_string()
            })),
        ),
    }
}

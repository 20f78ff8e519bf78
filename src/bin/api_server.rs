// src/bin/api_server.rs

use employee_directory::infra::{config, logging};
use employee_directory::storage::employees::{
    EmployeeStore, InMemoryEmployeeStore, PostgresEmployeeStore,
};
use employee_directory::transport;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Connects the configured store. A failed connection is logged and the
/// server keeps running with `/api/*` answering 503.
async fn connect_store() -> anyhow::Result<Option<Arc<dyn EmployeeStore>>> {
    match config::store_kind()? {
        config::StoreKind::Memory => {
            log::warn!("Using the in-memory employee store; records are lost on exit.");
            let store: Arc<dyn EmployeeStore> = Arc::new(InMemoryEmployeeStore::new());
            Ok(Some(store))
        }
        config::StoreKind::Postgres => {
            let Some(database_url) = config::database_url() else {
                log::warn!("No DATABASE_URL provided. Server will run without database connection.");
                return Ok(None);
            };
            let max_connections = config::database_max_connections()?;
            let acquire_timeout = config::database_acquire_timeout()?;
            match PostgresEmployeeStore::connect(&database_url, max_connections, acquire_timeout)
                .await
            {
                Ok(store) => {
                    log::info!("Connected to PostgreSQL (max_connections={}).", max_connections);
                    let store: Arc<dyn EmployeeStore> = Arc::new(store);
                    Ok(Some(store))
                }
                Err(e) => {
                    log::error!("Database connection error: {:#}", e);
                    log::warn!("Server will continue without database connection...");
                    Ok(None)
                }
            }
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    config::load_dotenv();
    if let Err(e) = logging::init_logging(&config::log_spec()) {
        eprintln!("> Logging disabled: {}", e);
    }

    let port = config::port()?;
    let frontend_dirs = config::frontend_dirs();
    let store = connect_store().await?;

    let app_state = transport::http::AppState::new(store, frontend_dirs);
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);
    let app = transport::http::create_router(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", transport::http::ApiDoc::openapi()))
        .layer(cors);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    log::info!("Server is running on http://0.0.0.0:{}", port);
    log::info!("Swagger UI available at http://localhost:{}/swagger-ui", port);

    tokio::select! {
        result = axum::serve(listener, app) => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            log::info!("Shutdown signal received (Ctrl+C).");
        }
    }

    Ok(())
}

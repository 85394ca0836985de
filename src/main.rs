use std::net::SocketAddr;
use tracing_subscriber::EnvFilter;

use rolodex_api::api::{self, AppState};
use rolodex_api::config::Config;
use rolodex_api::infrastructure::Database;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration (.env + environment)
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Connect to database in the background; requests fail fast until ready
    let db = Database::new();
    {
        let db = db.clone();
        let config = config.clone();
        tokio::spawn(async move {
            db.connect_with_retry(
                &config.database_url,
                config.max_connections,
                config.connect_retry_delay,
            )
            .await;
        });
    }

    // Build router
    let app = api::router(AppState::postgres(db));

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app)
        .await
        .expect("Server failed");
}

use std::sync::Arc;

use spaza_assist_api::config::{Config, INSECURE_DEFAULT_SECRET};
use spaza_assist_api::store::Store;
use spaza_assist_api::{build_router, AppState};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let config = Config::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .json()
        .init();

    if let Err(e) = config.validate() {
        tracing::error!("Refusing to start: {e}");
        std::process::exit(1);
    }
    if config.jwt.secret == INSECURE_DEFAULT_SECRET {
        tracing::warn!("JWT_SECRET is the insecure development default; override it before any real deployment");
    }

    let addr = format!("0.0.0.0:{}", config.port);
    let state = AppState {
        store: Store::new(),
        config: Arc::new(config),
    };
    let router = build_router(state);

    tracing::info!("Spaza Assist API listening on {addr}");

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {addr}: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, router).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

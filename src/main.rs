use holonet::server::{config::Config, model::app::AppState, startup};
use tracing_subscriber::EnvFilter;

static DEFAULT_LOG_FILTER: &str = "holonet=info,tower_http=info";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let db = match startup::connect_to_database(&config).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to connect to database: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Starting server");

    let app = startup::build_app(AppState { db });

    if let Err(e) = startup::serve(&config, app).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

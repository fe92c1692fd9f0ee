use std::sync::Arc;

use axum::http::{header::{ACCEPT, CONTENT_TYPE}, HeaderValue, Method};
use dotenv::dotenv;
use residences::{config::Config, db::db::Catalog, routes::create_router, AppState};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing_subscriber::filter::LevelFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::DEBUG)
        .init();

    dotenv().ok();

    let config = Config::init();

    let listings = match config.load_listings() {
        Ok(listings) => {
            tracing::info!(
                "✅ Loaded {} listings ({})",
                listings.len(),
                config
                    .listings_path
                    .as_deref()
                    .unwrap_or(config.dataset.code())
            );
            listings
        }
        Err(err) => {
            tracing::error!("🔥 Failed to load listings: {}", err);
            std::process::exit(1);
        }
    };

    let allowed_origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Skipping invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_headers([ACCEPT, CONTENT_TYPE])
        .allow_methods([Method::GET]);

    let app_state = Arc::new(AppState::new(Catalog::new(listings), config.clone()));

    let app = create_router(app_state.clone()).layer(cors);

    let listener = match tokio::net::TcpListener::bind(format!("0.0.0.0:{}", &config.port)).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("🔥 Failed to bind port {}: {}", config.port, err);
            std::process::exit(1);
        }
    };

    tracing::info!("🚀 Server is running on {}", config.app_url);
    tracing::info!(
        "🗺️  Dataset {} · map provider {} · default locale {}",
        config.dataset.code(),
        config.dataset.map_provider().name(),
        config.default_locale
    );

    if let Err(err) = axum::serve(listener, app).await {
        tracing::error!("🔥 Server stopped with error: {}", err);
        std::process::exit(1);
    }
}

mod model;
mod server;

use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    error::AppError,
    service::{auth::token::TokenService, geocode::GeocodeService, image::ImageStore},
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_reqwest_client()?;

    let tokens = TokenService::new(&config.jwt_secret, config.token_ttl);
    let geocoder = GeocodeService::new(
        http_client,
        config.geocode_url.clone(),
        config.geocode_api_key.clone(),
    );

    let app = server::router::router().with_state(AppState::new(
        db,
        tokens,
        config.password_cost,
        geocoder,
        ImageStore::new(config.upload_dir.clone()),
    ));

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Starting server on {}", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}

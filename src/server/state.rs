//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction. Every field is cheap to clone:
//! - `DatabaseConnection` is a connection pool (clones share the pool)
//! - `TokenService` holds the signing keys derived at startup
//! - `GeocodeService` wraps a `reqwest::Client`, which uses an `Arc` internally
//! - `ImageStore` only holds the upload directory path

use sea_orm::DatabaseConnection;

use crate::server::service::{
    auth::token::TokenService, geocode::GeocodeService, image::ImageStore,
};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Issues and verifies academy bearer tokens.
    pub tokens: TokenService,

    /// bcrypt cost factor for new password hashes.
    pub password_cost: u32,

    /// Resolves player addresses to coordinates.
    pub geocoder: GeocodeService,

    /// Removes player images from the upload directory.
    pub images: ImageStore,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `tokens` - Token service configured with the signing secret
    /// - `password_cost` - bcrypt cost factor
    /// - `geocoder` - Geocoding service
    /// - `images` - Image store rooted at the upload directory
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        tokens: TokenService,
        password_cost: u32,
        geocoder: GeocodeService,
        images: ImageStore,
    ) -> Self {
        Self {
            db,
            tokens,
            password_cost,
            geocoder,
            images,
        }
    }
}

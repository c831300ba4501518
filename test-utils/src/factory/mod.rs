//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories handle the academy/player relationship so
//! fixtures start out consistent: a factory-created player is always present in its
//! academy's owned-set.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let academy = factory::academy::create_academy(&db).await?;
//!     let player = factory::player::create_player(&db, academy.id).await?;
//!
//!     // Create with all dependencies
//!     let (academy, player) = factory::helpers::create_player_with_academy(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! let academy = factory::academy::AcademyFactory::new(&db)
//!     .email("owner@example.com")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `academy` - Create academy entities
//! - `player` - Create player entities together with their owned-set entry
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod academy;
pub mod helpers;
pub mod player;

pub use academy::create_academy;
pub use player::create_player;

//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
///
/// This atomic counter ensures each factory-created entity gets unique
/// names and emails to prevent unique constraint collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an academy owning a single player.
///
/// Both entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((academy, player))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_player_with_academy(
    db: &DatabaseConnection,
) -> Result<(entity::academy::Model, entity::player::Model), DbErr> {
    let academy = crate::factory::academy::create_academy(db).await?;
    let player = crate::factory::player::create_player(db, academy.id).await?;

    Ok((academy, player))
}

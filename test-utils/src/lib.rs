//! Test fixtures for the academy roster backend.
//!
//! Every test gets its own in-memory SQLite database behind a single pooled connection,
//! so schema created in `build` is visible to every query the test runs.
//! `TestBuilder::with_roster_tables` creates the academy, player and owned-set tables in
//! one call. The factories in [`factory`] insert a player together with its owned-set
//! entry, so fixtures start out with both sides of the ownership relation in agreement.
//!
//! ```rust,ignore
//! let test = TestBuilder::new().with_roster_tables().build().await?;
//! let db = test.db.as_ref().unwrap();
//! let (academy, player) = factory::helpers::create_player_with_academy(db).await?;
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;

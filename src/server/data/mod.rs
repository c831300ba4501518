//! Database repository layer for academies, players and the owned-set.
//!
//! Repositories handle database operations (CRUD) for each table. They use SeaORM entity
//! models internally and return domain models to keep the data layer separate from the
//! business logic layer.
//!
//! Every repository is generic over `sea_orm::ConnectionTrait`, so the same repository can
//! run against the pooled `DatabaseConnection` or against an open `DatabaseTransaction`.
//! The player service relies on this to group writes to several tables into one
//! transaction.

pub mod academy;
pub mod academy_player;
pub mod player;

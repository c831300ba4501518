//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing ownership checks and credential handling
//! - **Orchestration**: Coordinating multiple repository calls and external services
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Grouping the player and owned-set writes into one
//!   atomic unit

pub mod academy;
pub mod auth;
pub mod geocode;
pub mod image;
pub mod player;

#[cfg(test)]
mod test;

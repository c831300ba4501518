//! Server-side API backend and business logic.
//!
//! This module contains the backend implementation for the academy roster: API endpoints,
//! business logic, data access, and infrastructure services. The backend uses Axum as the
//! web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, validation, and DTO conversion
//! - **Service Layer** (`service/`) - Business logic, ownership checks, and transactions
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer token authentication guard
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, token and geocoding services)
//! - **Startup** (`startup`) - Database connection, migrations, and HTTP client setup
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** authenticates the caller through `AuthGuard` where required
//! 3. **Controller** validates the DTO, converts it to params, calls service
//! 4. **Service** executes business logic, opening a transaction for multi-row writes
//! 5. **Data** queries database, converts entities to domain models
//! 6. **Controller** converts domain model to DTO, returns HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;

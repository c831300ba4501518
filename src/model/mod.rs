//! Data transfer objects shared by the HTTP API.
//!
//! These types describe the JSON request and response bodies of the REST surface.
//! Server-side domain models are converted into these at the controller boundary.

pub mod academy;
pub mod api;
pub mod player;

//! HTTP request handlers.
//!
//! Controllers authenticate the caller where required, validate and convert request DTOs
//! into domain parameters, call the service layer, and convert the results back into
//! response DTOs. Every handler carries a `utoipa::path` annotation so the router can
//! collect it into the OpenAPI document.

pub mod academy;
pub mod player;

#[cfg(test)]
mod test;

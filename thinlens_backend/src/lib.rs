//! HTTP backend of the thinlens simulation
//!
//! The backend exposes the thin lens calculator as a stateless JSON endpoint (`POST /calculate`).
//! In addition, it serves a welcome page, a few general endpoints and the OpenAPI documentation.
pub mod calculate;
pub mod error;
pub mod general;
pub mod pages;
pub mod routes;
pub mod server;

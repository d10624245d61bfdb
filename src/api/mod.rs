//! HTTP boundary for registration and historical queries.

pub mod handlers;
pub mod models;
pub mod routes;
pub mod server;

//! Assignment API: an HTTP service for recording course assignments.
//!
//! One endpoint inserts an assignment row into PostgreSQL through a shared
//! connection pool; a health endpoint reports liveness. The binary in
//! `main.rs` wires configuration, logging, the pool, and the router together;
//! everything else lives here so tests can drive the HTTP surface in-process.

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod model;
pub mod routes;
pub mod state;
pub mod store;

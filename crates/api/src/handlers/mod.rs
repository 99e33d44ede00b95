//! Request handlers for the public read API.
//!
//! Handlers delegate to the repositories in `rdj_db` and map errors via
//! [`crate::error::AppError`]. All catalog endpoints are read-only; writes
//! happen through the administrative surface, outside this server.

pub mod products;

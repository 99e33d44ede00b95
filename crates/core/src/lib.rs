//! Shared domain types for the Rey Don Jaime catalog backend.
//!
//! Kept deliberately small: the id/timestamp aliases every crate agrees on
//! and the domain error enum the db and api layers map from.

pub mod error;
pub mod types;

//! Shared domain types for the movies API.
//!
//! Contains the base type aliases, the domain error taxonomy, and the
//! pure validation primitives used by the db and api crates.

pub mod error;
pub mod types;
pub mod validation;

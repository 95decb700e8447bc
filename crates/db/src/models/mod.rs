//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` input DTO with its validation rules
//! - Query-parameter structs for list endpoints

pub mod movie;

//! Repository layer: one struct of associated functions per table.

pub mod movie_repo;

pub use movie_repo::MovieRepo;

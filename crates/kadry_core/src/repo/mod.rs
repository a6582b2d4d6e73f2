//! Repository layer abstractions and storage backends.
//!
//! # Responsibility
//! - Define the uniform CRUD/paginate/sort contract over teacher storage.
//! - Isolate file-serialization and SQL details from callers.
//!
//! # Invariants
//! - Write paths validate through the entity constructor before touching
//!   storage.
//! - Paging past the last page yields an empty sequence, never an error.
//! - An unknown sort field is an error, never a silent no-op.

pub mod db_repo;
pub mod decorator;
pub mod factory;
pub mod file_repo;
pub mod teacher_repo;

//! Domain model for academic staff records.
//!
//! # Responsibility
//! - Define the canonical validated `Teacher` entity.
//! - Keep every field behind validating constructors and setters.
//!
//! # Invariants
//! - No `Teacher` instance ever holds an unvalidated field value.
//! - Entity equality is defined by the SNILS value, not by assigned id.

pub mod snils;
pub mod teacher;

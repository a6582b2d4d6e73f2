//! Core domain logic for Kadry, a registry of academic staff records.
//! This crate is the single source of truth for business invariants.

pub mod codec;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;

pub use codec::{
    decode, decode_delimited, decode_json, decode_xml, detect_format, CodecError, CodecResult,
    DecodeError, WireFormat,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::snils::validate_snils;
pub use model::teacher::{Teacher, TeacherDraft, TeacherParams, ValidationError};
pub use repo::db_repo::SqliteTeacherRepository;
pub use repo::decorator::{FilterDecorator, SortDecorator, TeacherPredicate};
pub use repo::factory::{create_repository, BackendKind, RepoConfig};
pub use repo::file_repo::{FileFormat, FileTeacherRepository};
pub use repo::teacher_repo::{RepoError, RepoResult, SortField, TeacherRepository};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

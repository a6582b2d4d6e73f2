//! Backend selection for teacher repositories.
//!
//! # Responsibility
//! - Map an explicit backend kind plus owned configuration to a concrete
//!   repository behind the uniform contract.
//!
//! # Invariants
//! - Backend choice is explicit dynamic dispatch over a closed kind enum;
//!   no configuration globals are consulted.

use crate::db;
use crate::repo::db_repo::SqliteTeacherRepository;
use crate::repo::file_repo::{FileFormat, FileTeacherRepository};
use crate::repo::teacher_repo::{RepoError, RepoResult, TeacherRepository};
use std::path::PathBuf;
use std::str::FromStr;

/// Storage backend kind selectable by configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    Json,
    Yaml,
    Db,
}

impl FromStr for BackendKind {
    type Err = RepoError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "json" => Ok(Self::Json),
            "yaml" => Ok(Self::Yaml),
            "db" => Ok(Self::Db),
            other => Err(RepoError::UnknownBackend(other.to_string())),
        }
    }
}

/// Explicitly owned backend configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoConfig {
    pub json_path: PathBuf,
    pub yaml_path: PathBuf,
    pub db_path: PathBuf,
}

impl Default for RepoConfig {
    fn default() -> Self {
        Self {
            json_path: PathBuf::from("data/teachers.json"),
            yaml_path: PathBuf::from("data/teachers.yaml"),
            db_path: PathBuf::from("data/teachers.db"),
        }
    }
}

/// Creates the repository for the selected backend kind.
///
/// File backends degrade load failures to an empty collection; the
/// relational backend fails construction when the database cannot be
/// opened or migrated.
pub fn create_repository(
    kind: BackendKind,
    config: &RepoConfig,
) -> RepoResult<Box<dyn TeacherRepository>> {
    match kind {
        BackendKind::Json => Ok(Box::new(FileTeacherRepository::open(
            &config.json_path,
            FileFormat::Json,
        ))),
        BackendKind::Yaml => Ok(Box::new(FileTeacherRepository::open(
            &config.yaml_path,
            FileFormat::Yaml,
        ))),
        BackendKind::Db => {
            let conn = db::open_db(&config.db_path)?;
            Ok(Box::new(SqliteTeacherRepository::new(conn)))
        }
    }
}

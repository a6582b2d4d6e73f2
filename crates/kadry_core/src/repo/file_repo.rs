//! File-backed teacher repositories (JSON and YAML).
//!
//! # Responsibility
//! - Load the whole persisted collection into memory on open.
//! - Apply every mutation to the in-memory copy only; an explicit `save`
//!   rewrites the whole file.
//!
//! # Invariants
//! - A missing or corrupt file degrades to an empty collection with a
//!   logged diagnostic; the two causes emit distinct events.
//! - Persisted entries that fail entity validation are skipped, not
//!   silently accepted.
//! - `add` assigns `max(existing id) + 1`, or 1 for an empty collection.

use crate::model::teacher::{Teacher, TeacherDraft, TeacherParams};
use crate::repo::teacher_repo::{page_slice, RepoError, RepoResult, SortField, TeacherRepository};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Serialization format of a file-backed repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Yaml,
}

impl FileFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

/// On-disk shape of one teacher entry (array-of-object file layout).
///
/// `snils` is optional on disk for compatibility with older files, but an
/// entry without a valid SNILS fails entity validation and is skipped at
/// load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TeacherRecord {
    teacher_id: i64,
    last_name: String,
    first_name: String,
    #[serde(default)]
    patronymic: Option<String>,
    #[serde(default)]
    academic_degree: Option<String>,
    #[serde(default)]
    administrative_position: Option<String>,
    #[serde(default)]
    experience_years: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    snils: Option<String>,
}

impl TeacherRecord {
    fn from_entity(teacher: &Teacher) -> Self {
        Self {
            teacher_id: i64::from(teacher.teacher_id()),
            last_name: teacher.last_name().to_string(),
            first_name: teacher.first_name().to_string(),
            patronymic: teacher.patronymic().map(str::to_string),
            academic_degree: teacher.academic_degree().map(str::to_string),
            administrative_position: teacher.administrative_position().map(str::to_string),
            experience_years: i64::from(teacher.experience_years()),
            snils: Some(teacher.snils().to_string()),
        }
    }

    fn into_params(self) -> TeacherParams {
        TeacherParams {
            teacher_id: self.teacher_id,
            last_name: self.last_name,
            first_name: self.first_name,
            patronymic: self.patronymic,
            academic_degree: self.academic_degree,
            administrative_position: self.administrative_position,
            experience_years: self.experience_years,
            snils: self.snils,
        }
    }
}

/// Teacher repository persisted as one JSON or YAML array file.
pub struct FileTeacherRepository {
    path: PathBuf,
    format: FileFormat,
    teachers: Vec<Teacher>,
}

impl FileTeacherRepository {
    /// Opens a repository over a JSON array file.
    pub fn open_json(path: impl Into<PathBuf>) -> Self {
        Self::open(path, FileFormat::Json)
    }

    /// Opens a repository over a YAML array file.
    pub fn open_yaml(path: impl Into<PathBuf>) -> Self {
        Self::open(path, FileFormat::Yaml)
    }

    /// Opens a repository, loading the whole collection into memory.
    ///
    /// Load failures degrade to an empty collection; see module
    /// invariants.
    pub fn open(path: impl Into<PathBuf>, format: FileFormat) -> Self {
        let path = path.into();
        let teachers = load_collection(&path, format);
        info!(
            "event=repo_open module=repo status=ok format={} count={}",
            format.as_str(),
            teachers.len()
        );
        Self {
            path,
            format,
            teachers,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> FileFormat {
        self.format
    }

    fn next_id(&self) -> u32 {
        self.teachers
            .iter()
            .map(Teacher::teacher_id)
            .max()
            .map_or(1, |max| max + 1)
    }
}

impl TeacherRepository for FileTeacherRepository {
    fn get_by_id(&self, teacher_id: u32) -> RepoResult<Option<Teacher>> {
        Ok(self
            .teachers
            .iter()
            .find(|teacher| teacher.teacher_id() == teacher_id)
            .cloned())
    }

    fn get_k_n_short_list(&self, k: usize, n: usize) -> RepoResult<Vec<Teacher>> {
        Ok(page_slice(&self.teachers, k, n))
    }

    fn sort_by_field(&mut self, field: SortField) -> RepoResult<Vec<Teacher>> {
        self.teachers.sort_by(|a, b| field.compare(a, b));
        Ok(self.teachers.clone())
    }

    fn add(&mut self, draft: &TeacherDraft) -> RepoResult<Teacher> {
        let teacher = Teacher::new(draft.with_id(self.next_id()))?;
        self.teachers.push(teacher.clone());
        Ok(teacher)
    }

    fn update(&mut self, teacher_id: u32, draft: &TeacherDraft) -> RepoResult<Option<Teacher>> {
        let Some(slot) = self
            .teachers
            .iter_mut()
            .find(|teacher| teacher.teacher_id() == teacher_id)
        else {
            return Ok(None);
        };
        let updated = Teacher::new(draft.with_id(teacher_id))?;
        *slot = updated.clone();
        Ok(Some(updated))
    }

    fn delete(&mut self, teacher_id: u32) -> RepoResult<bool> {
        let before = self.teachers.len();
        self.teachers
            .retain(|teacher| teacher.teacher_id() != teacher_id);
        Ok(self.teachers.len() != before)
    }

    fn count(&self) -> RepoResult<usize> {
        Ok(self.teachers.len())
    }

    fn save(&self) -> RepoResult<()> {
        let records: Vec<TeacherRecord> = self.teachers.iter().map(TeacherRecord::from_entity).collect();
        let serialized = match self.format {
            FileFormat::Json => serde_json::to_string_pretty(&records)
                .map_err(|err| RepoError::Storage(format!("json serialization failed: {err}")))?,
            FileFormat::Yaml => serde_yaml::to_string(&records)
                .map_err(|err| RepoError::Storage(format!("yaml serialization failed: {err}")))?,
        };
        std::fs::write(&self.path, serialized).map_err(|err| {
            RepoError::Storage(format!(
                "failed to write `{}`: {err}",
                self.path.display()
            ))
        })?;
        info!(
            "event=repo_save module=repo status=ok format={} count={}",
            self.format.as_str(),
            records.len()
        );
        Ok(())
    }
}

fn load_collection(path: &Path, format: FileFormat) -> Vec<Teacher> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            info!(
                "event=repo_load module=repo status=missing format={} path={}",
                format.as_str(),
                path.display()
            );
            return Vec::new();
        }
        Err(err) => {
            warn!(
                "event=repo_load module=repo status=error error_code=file_unreadable format={} path={} error={}",
                format.as_str(),
                path.display(),
                err
            );
            return Vec::new();
        }
    };

    if raw.trim().is_empty() {
        return Vec::new();
    }

    let records: Vec<TeacherRecord> = match parse_records(&raw, format) {
        Ok(records) => records,
        Err(reason) => {
            warn!(
                "event=repo_load module=repo status=error error_code=file_corrupt format={} path={} error={}",
                format.as_str(),
                path.display(),
                reason
            );
            return Vec::new();
        }
    };

    let mut teachers = Vec::with_capacity(records.len());
    for record in records {
        match Teacher::new(record.into_params()) {
            Ok(teacher) => teachers.push(teacher),
            Err(err) => warn!(
                "event=repo_load module=repo status=skipped format={} path={} error={}",
                format.as_str(),
                path.display(),
                err
            ),
        }
    }
    teachers
}

fn parse_records(raw: &str, format: FileFormat) -> Result<Vec<TeacherRecord>, String> {
    match format {
        FileFormat::Json => serde_json::from_str(raw).map_err(|err| err.to_string()),
        FileFormat::Yaml => serde_yaml::from_str(raw).map_err(|err| err.to_string()),
    }
}

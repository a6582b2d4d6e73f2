//! Teacher repository contract shared by every storage backend.
//!
//! # Responsibility
//! - Define the CRUD + pagination + sort operations backends implement.
//! - Provide the shared paging and ordering helpers.
//!
//! # Invariants
//! - `get_k_n_short_list` treats page numbers as 1-based; an offset at or
//!   past the end of the collection is a normal empty page.
//! - Absent records are `None`/`false` results, not errors.

use crate::db::DbError;
use crate::model::teacher::{Teacher, TeacherDraft, ValidationError};
use std::cmp::Ordering;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository-level error for persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(ValidationError),
    Db(DbError),
    /// File-level persistence failure (unreadable path, write failure).
    Storage(String),
    /// Persisted state that no longer satisfies entity constraints.
    InvalidData(String),
    InvalidSortField(String),
    UnknownBackend(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::Storage(message) => write!(f, "storage failure: {message}"),
            Self::InvalidData(message) => write!(f, "invalid persisted teacher data: {message}"),
            Self::InvalidSortField(field) => write!(
                f,
                "unknown sort field `{field}`; expected teacher_id|last_name|first_name|experience_years"
            ),
            Self::UnknownBackend(kind) => {
                write!(f, "unknown repository backend `{kind}`; expected json|yaml|db")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::Storage(_)
            | Self::InvalidData(_)
            | Self::InvalidSortField(_)
            | Self::UnknownBackend(_) => None,
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Field a repository listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    TeacherId,
    LastName,
    FirstName,
    ExperienceYears,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TeacherId => "teacher_id",
            Self::LastName => "last_name",
            Self::FirstName => "first_name",
            Self::ExperienceYears => "experience_years",
        }
    }

    /// Comparator over the selected field.
    pub fn compare(&self, a: &Teacher, b: &Teacher) -> Ordering {
        match self {
            Self::TeacherId => a.teacher_id().cmp(&b.teacher_id()),
            Self::LastName => a.last_name().cmp(b.last_name()),
            Self::FirstName => a.first_name().cmp(b.first_name()),
            Self::ExperienceYears => a.experience_years().cmp(&b.experience_years()),
        }
    }
}

impl FromStr for SortField {
    type Err = RepoError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "teacher_id" => Ok(Self::TeacherId),
            "last_name" => Ok(Self::LastName),
            "first_name" => Ok(Self::FirstName),
            "experience_years" => Ok(Self::ExperienceYears),
            other => Err(RepoError::InvalidSortField(other.to_string())),
        }
    }
}

impl Display for SortField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Uniform contract over teacher storage backends.
///
/// Implemented by the file-backed JSON/YAML repositories, the SQLite
/// repository, and the filter/sort decorators, so arbitrary wrap-of-wrap
/// chains still satisfy the same contract.
pub trait TeacherRepository {
    /// Looks a record up by backend-assigned id.
    fn get_by_id(&self, teacher_id: u32) -> RepoResult<Option<Teacher>>;

    /// Returns page `n` (1-based) of page size `k` over the backend's
    /// natural order. A start offset past the collection end is an empty
    /// page, not an error.
    fn get_k_n_short_list(&self, k: usize, n: usize) -> RepoResult<Vec<Teacher>>;

    /// Returns the collection ordered by `field`. File backends reorder
    /// their in-memory collection; the relational backend returns an
    /// ordered snapshot.
    fn sort_by_field(&mut self, field: SortField) -> RepoResult<Vec<Teacher>>;

    /// Validates the draft and stores it under a backend-assigned id.
    fn add(&mut self, draft: &TeacherDraft) -> RepoResult<Teacher>;

    /// Replaces the record with the given id. `None` means no such record.
    fn update(&mut self, teacher_id: u32, draft: &TeacherDraft) -> RepoResult<Option<Teacher>>;

    /// Removes the record with the given id. True iff one existed.
    fn delete(&mut self, teacher_id: u32) -> RepoResult<bool>;

    fn count(&self) -> RepoResult<usize>;

    /// Flushes the whole collection to backing storage. File backends
    /// rewrite their file; the relational backend commits per operation
    /// and treats this as a no-op.
    fn save(&self) -> RepoResult<()>;
}

impl<T: TeacherRepository + ?Sized> TeacherRepository for Box<T> {
    fn get_by_id(&self, teacher_id: u32) -> RepoResult<Option<Teacher>> {
        (**self).get_by_id(teacher_id)
    }

    fn get_k_n_short_list(&self, k: usize, n: usize) -> RepoResult<Vec<Teacher>> {
        (**self).get_k_n_short_list(k, n)
    }

    fn sort_by_field(&mut self, field: SortField) -> RepoResult<Vec<Teacher>> {
        (**self).sort_by_field(field)
    }

    fn add(&mut self, draft: &TeacherDraft) -> RepoResult<Teacher> {
        (**self).add(draft)
    }

    fn update(&mut self, teacher_id: u32, draft: &TeacherDraft) -> RepoResult<Option<Teacher>> {
        (**self).update(teacher_id, draft)
    }

    fn delete(&mut self, teacher_id: u32) -> RepoResult<bool> {
        (**self).delete(teacher_id)
    }

    fn count(&self) -> RepoResult<usize> {
        (**self).count()
    }

    fn save(&self) -> RepoResult<()> {
        (**self).save()
    }
}

/// Applies the `(n-1)*k .. +k` page window to an in-memory sequence.
///
/// Page numbers are 1-based; `n == 0` and any window past the end both
/// yield an empty page.
pub(crate) fn page_slice(items: &[Teacher], k: usize, n: usize) -> Vec<Teacher> {
    let Some(start) = n.checked_sub(1).and_then(|page| page.checked_mul(k)) else {
        return Vec::new();
    };
    if start >= items.len() {
        return Vec::new();
    }
    items.iter().skip(start).take(k).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::{RepoError, SortField};

    #[test]
    fn sort_field_parses_the_four_known_names() {
        assert_eq!("teacher_id".parse::<SortField>().unwrap(), SortField::TeacherId);
        assert_eq!("last_name".parse::<SortField>().unwrap(), SortField::LastName);
        assert_eq!("first_name".parse::<SortField>().unwrap(), SortField::FirstName);
        assert_eq!(
            "experience_years".parse::<SortField>().unwrap(),
            SortField::ExperienceYears
        );
    }

    #[test]
    fn unknown_sort_field_is_an_error_not_a_default() {
        let err = "salary".parse::<SortField>().unwrap_err();
        assert!(matches!(err, RepoError::InvalidSortField(field) if field == "salary"));
    }
}

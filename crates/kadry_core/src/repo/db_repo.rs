//! SQLite-backed teacher repository.
//!
//! # Responsibility
//! - Execute each contract operation as one parameterized statement.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Write paths validate through `Teacher::new` before SQL mutations.
//! - Read paths reject invalid persisted rows instead of masking them.
//! - The connection is passed in at construction, owned by the repository
//!   and reused for every operation; each statement commits individually.

use crate::model::teacher::{Teacher, TeacherDraft, TeacherParams};
use crate::repo::teacher_repo::{RepoError, RepoResult, SortField, TeacherRepository};
use rusqlite::{params, Connection, Row};

const TEACHER_SELECT_SQL: &str = "SELECT
    teacher_id,
    last_name,
    first_name,
    patronymic,
    academic_degree,
    administrative_position,
    experience_years,
    snils
FROM teachers";

/// Relational teacher repository over an owned SQLite connection.
///
/// The id sequence is engine-assigned and is not guaranteed to agree with
/// the `max + 1` numbering of the file backends after mixed use.
pub struct SqliteTeacherRepository {
    conn: Connection,
}

impl SqliteTeacherRepository {
    /// Wraps a migrated connection from `db::open_db` /
    /// `db::open_db_in_memory`.
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }
}

impl TeacherRepository for SqliteTeacherRepository {
    fn get_by_id(&self, teacher_id: u32) -> RepoResult<Option<Teacher>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TEACHER_SELECT_SQL} WHERE teacher_id = ?1;"))?;
        let mut rows = stmt.query([teacher_id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_teacher_row(row)?));
        }
        Ok(None)
    }

    fn get_k_n_short_list(&self, k: usize, n: usize) -> RepoResult<Vec<Teacher>> {
        let Some(offset) = n.checked_sub(1).and_then(|page| page.checked_mul(k)) else {
            return Ok(Vec::new());
        };

        let mut stmt = self.conn.prepare(&format!(
            "{TEACHER_SELECT_SQL} ORDER BY teacher_id LIMIT ?1 OFFSET ?2;"
        ))?;
        let limit = i64::try_from(k).unwrap_or(i64::MAX);
        let offset = i64::try_from(offset).unwrap_or(i64::MAX);
        let mut rows = stmt.query(params![limit, offset])?;

        let mut teachers = Vec::new();
        while let Some(row) = rows.next()? {
            teachers.push(parse_teacher_row(row)?);
        }
        Ok(teachers)
    }

    fn sort_by_field(&mut self, field: SortField) -> RepoResult<Vec<Teacher>> {
        // `SortField` is a closed enum, so interpolating the column name
        // cannot inject arbitrary SQL.
        let mut stmt = self.conn.prepare(&format!(
            "{TEACHER_SELECT_SQL} ORDER BY {} ASC;",
            field.as_str()
        ))?;
        let mut rows = stmt.query([])?;

        let mut teachers = Vec::new();
        while let Some(row) = rows.next()? {
            teachers.push(parse_teacher_row(row)?);
        }
        Ok(teachers)
    }

    fn add(&mut self, draft: &TeacherDraft) -> RepoResult<Teacher> {
        // Validate before mutating storage; the provisional id is replaced
        // by the engine-assigned one after insert.
        let teacher = Teacher::new(draft.with_id(1))?;

        let new_id: u32 = self.conn.query_row(
            "INSERT INTO teachers (
                last_name,
                first_name,
                patronymic,
                academic_degree,
                administrative_position,
                experience_years,
                snils
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            RETURNING teacher_id;",
            params![
                teacher.last_name(),
                teacher.first_name(),
                teacher.patronymic(),
                teacher.academic_degree(),
                teacher.administrative_position(),
                teacher.experience_years(),
                teacher.snils(),
            ],
            |row| row.get(0),
        )?;

        Ok(teacher.reassigned(new_id))
    }

    fn update(&mut self, teacher_id: u32, draft: &TeacherDraft) -> RepoResult<Option<Teacher>> {
        let teacher = Teacher::new(draft.with_id(teacher_id))?;

        let changed = self.conn.execute(
            "UPDATE teachers
             SET
                last_name = ?1,
                first_name = ?2,
                patronymic = ?3,
                academic_degree = ?4,
                administrative_position = ?5,
                experience_years = ?6,
                snils = ?7
             WHERE teacher_id = ?8;",
            params![
                teacher.last_name(),
                teacher.first_name(),
                teacher.patronymic(),
                teacher.academic_degree(),
                teacher.administrative_position(),
                teacher.experience_years(),
                teacher.snils(),
                teacher_id,
            ],
        )?;

        if changed == 0 {
            return Ok(None);
        }
        Ok(Some(teacher))
    }

    fn delete(&mut self, teacher_id: u32) -> RepoResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM teachers WHERE teacher_id = ?1;", [teacher_id])?;
        Ok(changed > 0)
    }

    fn count(&self) -> RepoResult<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM teachers;", [], |row| row.get(0))?;
        Ok(usize::try_from(count).unwrap_or(0))
    }

    fn save(&self) -> RepoResult<()> {
        // Every statement commits individually; there is nothing to flush.
        Ok(())
    }
}

fn parse_teacher_row(row: &Row<'_>) -> RepoResult<Teacher> {
    let params = TeacherParams {
        teacher_id: row.get("teacher_id")?,
        last_name: row.get("last_name")?,
        first_name: row.get("first_name")?,
        patronymic: row.get("patronymic")?,
        academic_degree: row.get("academic_degree")?,
        administrative_position: row.get("administrative_position")?,
        experience_years: row.get("experience_years")?,
        snils: row.get("snils")?,
    };
    Teacher::new(params)
        .map_err(|err| RepoError::InvalidData(format!("teachers row rejected: {err}")))
}

//! Teacher entity and per-field validators.
//!
//! # Responsibility
//! - Hold validated, normalized teacher record fields.
//! - Re-run the constructor validators on every setter call.
//!
//! # Invariants
//! - Validators are pure; a failed validation never partially mutates state.
//! - `teacher_id` is assigned by a storage backend and immutable afterwards.
//! - Two teachers are equal iff their SNILS values are equal.

use crate::model::snils::validate_snils;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static NAME_CHARSET: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-zА-Яа-яЁё\- ]+$").expect("name charset pattern must compile")
});
static TITLE_CHARSET: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-zА-Яа-яЁё0-9\s.,\-()]+$").expect("title charset pattern must compile")
});

/// Validation failure for a single entity field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Field the violated constraint belongs to.
    pub field: &'static str,
    /// Human-readable constraint description.
    pub reason: String,
}

impl ValidationError {
    pub(crate) fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid {}: {}", self.field, self.reason)
    }
}

impl Error for ValidationError {}

/// Raw constructor parameters before validation.
///
/// Numeric fields carry wire-typed `i64` values; validation narrows them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeacherParams {
    pub teacher_id: i64,
    pub last_name: String,
    pub first_name: String,
    pub patronymic: Option<String>,
    pub academic_degree: Option<String>,
    pub administrative_position: Option<String>,
    pub experience_years: i64,
    pub snils: Option<String>,
}

/// Raw teacher data without an id, used by repository `add`/`update`.
///
/// The id is a backend concern: file backends derive `max + 1`, the
/// relational backend takes the engine-assigned sequence value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeacherDraft {
    pub last_name: String,
    pub first_name: String,
    pub patronymic: Option<String>,
    pub academic_degree: Option<String>,
    pub administrative_position: Option<String>,
    pub experience_years: i64,
    pub snils: Option<String>,
}

impl TeacherDraft {
    /// Combines the draft with a backend-assigned id into full parameters.
    pub fn with_id(&self, teacher_id: u32) -> TeacherParams {
        TeacherParams {
            teacher_id: i64::from(teacher_id),
            last_name: self.last_name.clone(),
            first_name: self.first_name.clone(),
            patronymic: self.patronymic.clone(),
            academic_degree: self.academic_degree.clone(),
            administrative_position: self.administrative_position.clone(),
            experience_years: self.experience_years,
            snils: self.snils.clone(),
        }
    }
}

/// Validated teacher record.
///
/// Fields are private; reads go through accessors and writes through
/// validating setters, so no instance can hold an out-of-contract value.
#[derive(Debug, Clone)]
pub struct Teacher {
    teacher_id: u32,
    last_name: String,
    first_name: String,
    patronymic: Option<String>,
    academic_degree: Option<String>,
    administrative_position: Option<String>,
    experience_years: u32,
    snils: String,
}

impl Teacher {
    /// Builds a teacher from raw parameters, validating every field.
    ///
    /// The first violated constraint aborts construction; errors are never
    /// batched.
    pub fn new(params: TeacherParams) -> Result<Self, ValidationError> {
        let snils = match params.snils.as_deref() {
            Some(value) => validate_snils(value)?,
            None => return Err(ValidationError::new("snils", "is required")),
        };

        Ok(Self {
            teacher_id: validate_teacher_id(params.teacher_id)?,
            last_name: validate_name("last_name", &params.last_name)?,
            first_name: validate_name("first_name", &params.first_name)?,
            patronymic: validate_optional_name("patronymic", params.patronymic.as_deref())?,
            academic_degree: validate_title("academic_degree", params.academic_degree.as_deref())?,
            administrative_position: validate_title(
                "administrative_position",
                params.administrative_position.as_deref(),
            )?,
            experience_years: validate_experience(params.experience_years)?,
            snils,
        })
    }

    pub fn teacher_id(&self) -> u32 {
        self.teacher_id
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn patronymic(&self) -> Option<&str> {
        self.patronymic.as_deref()
    }

    pub fn academic_degree(&self) -> Option<&str> {
        self.academic_degree.as_deref()
    }

    pub fn administrative_position(&self) -> Option<&str> {
        self.administrative_position.as_deref()
    }

    pub fn experience_years(&self) -> u32 {
        self.experience_years
    }

    /// Normalized 11-digit SNILS value.
    pub fn snils(&self) -> &str {
        &self.snils
    }

    pub fn set_last_name(&mut self, value: &str) -> Result<(), ValidationError> {
        self.last_name = validate_name("last_name", value)?;
        Ok(())
    }

    pub fn set_first_name(&mut self, value: &str) -> Result<(), ValidationError> {
        self.first_name = validate_name("first_name", value)?;
        Ok(())
    }

    pub fn set_patronymic(&mut self, value: Option<&str>) -> Result<(), ValidationError> {
        self.patronymic = validate_optional_name("patronymic", value)?;
        Ok(())
    }

    pub fn set_academic_degree(&mut self, value: Option<&str>) -> Result<(), ValidationError> {
        self.academic_degree = validate_title("academic_degree", value)?;
        Ok(())
    }

    pub fn set_administrative_position(
        &mut self,
        value: Option<&str>,
    ) -> Result<(), ValidationError> {
        self.administrative_position = validate_title("administrative_position", value)?;
        Ok(())
    }

    pub fn set_experience_years(&mut self, value: i64) -> Result<(), ValidationError> {
        self.experience_years = validate_experience(value)?;
        Ok(())
    }

    pub fn set_snils(&mut self, value: &str) -> Result<(), ValidationError> {
        self.snils = validate_snils(value)?;
        Ok(())
    }

    /// Replaces the backend-assigned id.
    ///
    /// Only storage backends may renumber a record, so this stays
    /// crate-private.
    pub(crate) fn reassigned(mut self, teacher_id: u32) -> Self {
        self.teacher_id = teacher_id;
        self
    }

    /// `Last First [Patronymic]`.
    pub fn full_name(&self) -> String {
        match self.patronymic.as_deref() {
            Some(patronymic) => format!("{} {} {patronymic}", self.last_name, self.first_name),
            None => format!("{} {}", self.last_name, self.first_name),
        }
    }

    /// One-line listing form used by list views.
    pub fn short_info(&self) -> String {
        format!(
            "{}: {} ({} yrs)",
            self.teacher_id,
            self.full_name(),
            self.experience_years
        )
    }

    /// Full record form with every present field labeled.
    pub fn full_info(&self) -> String {
        let mut parts = vec![
            format!("id: {}", self.teacher_id),
            format!("last name: {}", self.last_name),
            format!("first name: {}", self.first_name),
        ];
        if let Some(patronymic) = self.patronymic.as_deref() {
            parts.push(format!("patronymic: {patronymic}"));
        }
        if let Some(degree) = self.academic_degree.as_deref() {
            parts.push(format!("academic degree: {degree}"));
        }
        if let Some(position) = self.administrative_position.as_deref() {
            parts.push(format!("administrative position: {position}"));
        }
        parts.push(format!("experience: {} yrs", self.experience_years));
        parts.push(format!("snils: {}", self.snils));
        parts.join(", ")
    }
}

/// Identity is the person, and the person is the SNILS value. Two records
/// with different backend ids but one SNILS are the same teacher.
impl PartialEq for Teacher {
    fn eq(&self, other: &Self) -> bool {
        self.snils == other.snils
    }
}

impl Eq for Teacher {}

impl Display for Teacher {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Teacher {}: {}, SNILS: {}, experience: {} yrs",
            self.teacher_id,
            self.full_name(),
            self.snils,
            self.experience_years
        )
    }
}

fn validate_teacher_id(value: i64) -> Result<u32, ValidationError> {
    u32::try_from(value)
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| ValidationError::new("teacher_id", "must be a positive integer"))
}

fn validate_name(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new(field, "must not be empty"));
    }
    if !NAME_CHARSET.is_match(trimmed) {
        return Err(ValidationError::new(
            field,
            "may contain only letters, hyphens and spaces",
        ));
    }
    Ok(trimmed.to_string())
}

fn validate_optional_name(
    field: &'static str,
    value: Option<&str>,
) -> Result<Option<String>, ValidationError> {
    match value {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => validate_name(field, raw).map(Some),
    }
}

fn validate_title(
    field: &'static str,
    value: Option<&str>,
) -> Result<Option<String>, ValidationError> {
    let Some(raw) = value else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if !TITLE_CHARSET.is_match(trimmed) {
        return Err(ValidationError::new(field, "contains invalid characters"));
    }
    Ok(Some(trimmed.to_string()))
}

fn validate_experience(value: i64) -> Result<u32, ValidationError> {
    u32::try_from(value)
        .map_err(|_| ValidationError::new("experience_years", "must be a non-negative integer"))
}

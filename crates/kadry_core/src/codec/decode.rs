//! Per-format teacher decoders.
//!
//! # Responsibility
//! - Turn one external string into `TeacherParams` and then into a
//!   validated `Teacher`.
//! - Report structural failures as `DecodeError` and constraint failures
//!   as `ValidationError`, never mixed.
//!
//! # Invariants
//! - Delimited input has exactly 8 `;`-separated fields in fixed order.
//! - JSON/XML require `teacher_id`, `last_name`, `first_name`.
//! - Empty optional field text normalizes to absent.

use crate::model::teacher::{Teacher, TeacherParams, ValidationError};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// External representation a teacher record can be decoded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireFormat {
    Delimited,
    Json,
    Xml,
}

impl WireFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Delimited => "delimited",
            Self::Json => "json",
            Self::Xml => "xml",
        }
    }
}

impl Display for WireFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structural parse failure in one wire format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeError {
    pub format: WireFormat,
    pub reason: String,
}

impl DecodeError {
    fn new(format: WireFormat, reason: impl Into<String>) -> Self {
        Self {
            format,
            reason: reason.into(),
        }
    }
}

impl Display for DecodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} decode failed: {}", self.format, self.reason)
    }
}

impl Error for DecodeError {}

pub type CodecResult<T> = Result<T, CodecError>;

/// Either the string could not be parsed, or the parsed parameters
/// violated an entity constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    Decode(DecodeError),
    Validation(ValidationError),
}

impl Display for CodecError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Decode(err) => write!(f, "{err}"),
            Self::Validation(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CodecError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Decode(err) => Some(err),
            Self::Validation(err) => Some(err),
        }
    }
}

impl From<DecodeError> for CodecError {
    fn from(value: DecodeError) -> Self {
        Self::Decode(value)
    }
}

impl From<ValidationError> for CodecError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Guesses the wire format from the trimmed outer characters.
///
/// `{..}` is JSON, `<..>` is XML, everything else is the delimited form.
/// The dispatch is closed: malformed input whose brackets happen to match
/// a format is parsed as that format and fails with that format's error.
/// Callers that know the format should use the per-format functions.
pub fn detect_format(input: &str) -> WireFormat {
    let trimmed = input.trim();
    if trimmed.starts_with('{') && trimmed.ends_with('}') {
        WireFormat::Json
    } else if trimmed.starts_with('<') && trimmed.ends_with('>') {
        WireFormat::Xml
    } else {
        WireFormat::Delimited
    }
}

/// Detects the format and decodes through the matching decoder.
pub fn decode(input: &str) -> CodecResult<Teacher> {
    match detect_format(input) {
        WireFormat::Delimited => decode_delimited(input),
        WireFormat::Json => decode_json(input),
        WireFormat::Xml => decode_xml(input),
    }
}

/// Decodes `id;last;first;patronymic;degree;position;experience;snils`.
pub fn decode_delimited(input: &str) -> CodecResult<Teacher> {
    let parts: Vec<&str> = input.trim().split(';').collect();
    if parts.len() != 8 {
        return Err(DecodeError::new(
            WireFormat::Delimited,
            format!(
                "expected 8 fields `id;last;first;patronymic;degree;position;experience;snils`, got {}",
                parts.len()
            ),
        )
        .into());
    }

    let teacher_id = parse_int(WireFormat::Delimited, "id", parts[0])?;
    let experience_years = parse_int(WireFormat::Delimited, "experience", parts[6])?;

    let params = TeacherParams {
        teacher_id,
        last_name: parts[1].to_string(),
        first_name: parts[2].to_string(),
        patronymic: non_empty(parts[3]),
        academic_degree: non_empty(parts[4]),
        administrative_position: non_empty(parts[5]),
        experience_years,
        snils: non_empty(parts[7]),
    };
    Ok(Teacher::new(params)?)
}

/// Decodes a JSON object with the `teacher_*` key layout.
pub fn decode_json(input: &str) -> CodecResult<Teacher> {
    let value: serde_json::Value = serde_json::from_str(input)
        .map_err(|err| DecodeError::new(WireFormat::Json, format!("malformed json: {err}")))?;
    let object = value
        .as_object()
        .ok_or_else(|| DecodeError::new(WireFormat::Json, "top-level value must be an object"))?;

    for key in ["teacher_id", "last_name", "first_name"] {
        if !object.contains_key(key) {
            return Err(
                DecodeError::new(WireFormat::Json, format!("missing required key `{key}`")).into(),
            );
        }
    }

    let teacher_id = object["teacher_id"].as_i64().ok_or_else(|| {
        DecodeError::new(WireFormat::Json, "`teacher_id` must be an integer")
    })?;
    let experience_years = match object.get("experience_years") {
        None | Some(serde_json::Value::Null) => 0,
        Some(value) => value.as_i64().ok_or_else(|| {
            DecodeError::new(WireFormat::Json, "`experience_years` must be an integer")
        })?,
    };

    let params = TeacherParams {
        teacher_id,
        last_name: json_string(object, "last_name")?.unwrap_or_default(),
        first_name: json_string(object, "first_name")?.unwrap_or_default(),
        patronymic: json_string(object, "patronymic")?,
        academic_degree: json_string(object, "academic_degree")?,
        administrative_position: json_string(object, "administrative_position")?,
        experience_years,
        snils: json_string(object, "snils")?,
    };
    Ok(Teacher::new(params)?)
}

/// Decodes an XML document rooted at `<teacher>`.
pub fn decode_xml(input: &str) -> CodecResult<Teacher> {
    let document = roxmltree::Document::parse(input)
        .map_err(|err| DecodeError::new(WireFormat::Xml, format!("malformed xml: {err}")))?;
    let root = document.root_element();
    if root.tag_name().name() != "teacher" {
        return Err(DecodeError::new(
            WireFormat::Xml,
            format!("root element must be `teacher`, got `{}`", root.tag_name().name()),
        )
        .into());
    }

    for name in ["teacher_id", "last_name", "first_name"] {
        if child_text(&root, name).is_none() {
            return Err(DecodeError::new(
                WireFormat::Xml,
                format!("missing required element `{name}`"),
            )
            .into());
        }
    }

    let teacher_id = parse_int(
        WireFormat::Xml,
        "teacher_id",
        &child_text(&root, "teacher_id").unwrap_or_default(),
    )?;
    let experience_years = match child_text(&root, "experience_years") {
        None => 0,
        Some(text) => parse_int(WireFormat::Xml, "experience_years", &text)?,
    };

    let params = TeacherParams {
        teacher_id,
        last_name: child_text(&root, "last_name").unwrap_or_default(),
        first_name: child_text(&root, "first_name").unwrap_or_default(),
        patronymic: child_text(&root, "patronymic"),
        academic_degree: child_text(&root, "academic_degree"),
        administrative_position: child_text(&root, "administrative_position"),
        experience_years,
        snils: child_text(&root, "snils"),
    };
    Ok(Teacher::new(params)?)
}

fn parse_int(format: WireFormat, field: &str, raw: &str) -> Result<i64, DecodeError> {
    raw.trim()
        .parse()
        .map_err(|_| DecodeError::new(format, format!("`{field}` must be an integer, got `{raw}`")))
}

fn non_empty(raw: &str) -> Option<String> {
    if raw.is_empty() {
        None
    } else {
        Some(raw.to_string())
    }
}

fn json_string(
    object: &serde_json::Map<String, serde_json::Value>,
    key: &str,
) -> Result<Option<String>, DecodeError> {
    match object.get(key) {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(text)) => Ok(Some(text.clone())),
        Some(_) => Err(DecodeError::new(
            WireFormat::Json,
            format!("`{key}` must be a string"),
        )),
    }
}

fn child_text(node: &roxmltree::Node<'_, '_>, name: &str) -> Option<String> {
    node.children()
        .find(|child| child.is_element() && child.tag_name().name() == name)
        .and_then(|child| child.text())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::{detect_format, WireFormat};

    #[test]
    fn detection_is_a_closed_three_way_dispatch() {
        assert_eq!(detect_format(r#"{"teacher_id": 1}"#), WireFormat::Json);
        assert_eq!(detect_format(" <teacher></teacher> "), WireFormat::Xml);
        assert_eq!(detect_format("1;a;b;;;;0;"), WireFormat::Delimited);
        // Bracket-matching garbage still routes to the bracket format.
        assert_eq!(detect_format("{not json at all}"), WireFormat::Json);
    }
}

//! Field-level input validation.
//!
//! # Responsibility
//! - Turn raw console input into normalized field values.
//! - Reject malformed values with `TaskValidationError`.
//!
//! # Invariants
//! - Functions here are pure: no logging, no repository access.
//! - Lengths are counted in chars, not bytes.

use crate::model::task::{
    RequestedId, TaskId, TaskValidationError, MAX_DESCRIPTION_CHARS, MAX_TITLE_CHARS,
};

/// Trims a title and checks it is non-empty and within `MAX_TITLE_CHARS`.
pub fn normalize_title(raw: &str) -> Result<String, TaskValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TaskValidationError::EmptyTitle);
    }

    let chars = trimmed.chars().count();
    if chars > MAX_TITLE_CHARS {
        return Err(TaskValidationError::TitleTooLong { chars });
    }

    Ok(trimmed.to_string())
}

/// Checks a description is within `MAX_DESCRIPTION_CHARS`. Empty is allowed.
pub fn check_description(raw: &str) -> Result<(), TaskValidationError> {
    let chars = raw.chars().count();
    if chars > MAX_DESCRIPTION_CHARS {
        return Err(TaskValidationError::DescriptionTooLong { chars });
    }
    Ok(())
}

/// Parses a raw console ID.
///
/// Anything that is not an optionally signed run of ASCII digits yields
/// `InvalidId`. Every integer is accepted: positive values that fit
/// `TaskId` become `RequestedId::Task`, the rest `RequestedId::Unassignable`
/// so lookup can report them as not found.
pub fn parse_task_id(raw: &str) -> Result<RequestedId, TaskValidationError> {
    let trimmed = raw.trim();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(TaskValidationError::InvalidId {
            input: trimmed.to_string(),
        });
    }

    let magnitude = digits.trim_start_matches('0');
    if magnitude.is_empty() {
        return Ok(RequestedId::Unassignable("0".to_string()));
    }
    if negative {
        return Ok(RequestedId::Unassignable(format!("-{magnitude}")));
    }

    Ok(match magnitude.parse::<TaskId>() {
        Ok(id) => RequestedId::Task(id),
        Err(_) => RequestedId::Unassignable(magnitude.to_string()),
    })
}

/// Checks a record ID is positive. Used by constructors and deserialization.
pub fn check_task_id(id: TaskId) -> Result<(), TaskValidationError> {
    if id == 0 {
        return Err(TaskValidationError::NonPositiveId {
            input: id.to_string(),
        });
    }
    Ok(())
}

/// Strips leading and trailing whitespace from console input.
pub fn sanitize_input(raw: &str) -> String {
    raw.trim().to_string()
}

/// Returns whether input is empty or whitespace-only.
pub fn is_blank(raw: &str) -> bool {
    raw.trim().is_empty()
}

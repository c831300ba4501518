//! Input validation helpers used when converting request DTOs into parameters.

use std::path::{Component, Path};

use crate::server::error::AppError;

const INVALID_INPUT: &str = "Invalid inputs passed, please check your data.";

/// Rejects empty or whitespace-only values.
///
/// # Returns
/// - `Ok(())` - Value contains at least one non-whitespace character
/// - `Err(AppError::Validation)` - Value is blank
pub fn require_non_empty(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        tracing::debug!("Validation failed: {} is empty", field);
        return Err(AppError::Validation(INVALID_INPUT.to_string()));
    }

    Ok(())
}

/// Rejects values shorter than `min` characters.
pub fn require_min_length(field: &str, value: &str, min: usize) -> Result<(), AppError> {
    if value.chars().count() < min {
        tracing::debug!("Validation failed: {} shorter than {} characters", field, min);
        return Err(AppError::Validation(INVALID_INPUT.to_string()));
    }

    Ok(())
}

/// Requires a non-empty relative path that stays below its base directory.
///
/// Image paths are resolved against the upload directory, so absolute paths,
/// drive prefixes and `..` segments are rejected.
///
/// # Returns
/// - `Ok(())` - Path only has normal or `.` segments
/// - `Err(AppError::Validation)` - Path is blank, absolute or climbs out of its base
pub fn require_relative_path(field: &str, value: &str) -> Result<(), AppError> {
    require_non_empty(field, value)?;

    let contained = Path::new(value)
        .components()
        .all(|component| matches!(component, Component::Normal(_) | Component::CurDir));

    if !contained {
        tracing::debug!("Validation failed: {} is not a relative path", field);
        return Err(AppError::Validation(INVALID_INPUT.to_string()));
    }

    Ok(())
}

/// Normalizes an email address and checks its shape.
///
/// The address is trimmed and lowercased so lookups and the unique index
/// treat differently-cased spellings as the same academy. A valid address has
/// exactly one `@`, a non-empty local part, and a domain containing a dot that
/// neither starts nor ends the domain.
///
/// # Returns
/// - `Ok(String)` - The normalized email
/// - `Err(AppError::Validation)` - Email is malformed
pub fn normalize_email(email: &str) -> Result<String, AppError> {
    let email = email.trim().to_lowercase();

    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && domain.contains('.')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    };

    if !valid {
        tracing::debug!("Validation failed: malformed email");
        return Err(AppError::Validation(INVALID_INPUT.to_string()));
    }

    Ok(email)
}

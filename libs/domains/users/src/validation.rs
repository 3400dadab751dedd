//! Field validation rules.
//!
//! Each function checks one candidate field and returns either the typed
//! value or the accumulated list of human-readable violation messages.
//! Rules for a field do not short-circuit: everything that applies is
//! reported, so a request with several problems surfaces them together.
//!
//! Values arrive as loosely typed JSON so that wrong-typed input (a
//! numeric name, a string age) is reported as a message rather than
//! rejected at deserialization.

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;
use uuid::Uuid;

use crate::models::User;

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

/// Validate the `name` field: required, string-typed (purely numeric
/// strings are rejected), non-empty, at most 100 characters.
pub fn validate_name(value: Option<&Value>) -> Result<String, Vec<String>> {
    let mut errors = Vec::new();

    let Some(value) = value.filter(|v| !v.is_null()) else {
        errors.push("Validation error: 'name' field is required.".to_string());
        return Err(errors);
    };

    let Some(name) = value.as_str() else {
        errors.push("Validation error: 'name' must be a string.".to_string());
        return Err(errors);
    };

    if !name.is_empty() && name.trim().parse::<f64>().is_ok() {
        errors.push("Validation error: 'name' must be a string.".to_string());
    }
    if name.is_empty() {
        errors.push("Validation error: 'name' cannot be an empty string.".to_string());
    }
    if name.chars().count() > 100 {
        errors.push("Validation error: 'name' cannot exceed 100 characters.".to_string());
    }

    if errors.is_empty() {
        Ok(name.to_string())
    } else {
        Err(errors)
    }
}

/// Validate the `email` field: required, string-typed, non-empty, valid
/// syntax, at most 100 characters, and case-insensitively unique among
/// `users`. `exclude` names the user being updated, so reasserting one's
/// own email does not self-conflict.
pub fn validate_email(
    value: Option<&Value>,
    users: &[User],
    exclude: Option<Uuid>,
) -> Result<String, Vec<String>> {
    let mut errors = Vec::new();

    let Some(value) = value.filter(|v| !v.is_null()) else {
        errors.push("Validation error: 'email' field is required.".to_string());
        return Err(errors);
    };

    let Some(email) = value.as_str() else {
        errors.push("Validation error: 'email' must be a string.".to_string());
        return Err(errors);
    };

    if email.is_empty() {
        errors.push("Validation error: 'email' cannot be an empty string.".to_string());
    }
    if !EMAIL_REGEX.is_match(email) {
        errors.push("Validation error: 'email' must be a valid email address.".to_string());
    }
    if email.chars().count() > 100 {
        errors.push("Validation error: 'email' cannot exceed 100 characters.".to_string());
    }
    if users
        .iter()
        .any(|user| user.email.to_lowercase() == email.to_lowercase() && Some(user.id) != exclude)
    {
        errors.push("Validation error: A user with this email already exists.".to_string());
    }

    if errors.is_empty() {
        Ok(email.to_string())
    } else {
        Err(errors)
    }
}

enum AgeCandidate {
    Int(i64),
    NonInteger,
    NotNumeric,
}

fn classify_age(value: &Value) -> AgeCandidate {
    match value {
        Value::Number(n) => match n.as_i64() {
            Some(i) => AgeCandidate::Int(i),
            None => AgeCandidate::NonInteger,
        },
        // String bodies carried numbers in the wild; accept the ones
        // that parse as integers.
        Value::String(s) => {
            if let Ok(i) = s.trim().parse::<i64>() {
                AgeCandidate::Int(i)
            } else if s.trim().parse::<f64>().is_ok() {
                AgeCandidate::NonInteger
            } else {
                AgeCandidate::NotNumeric
            }
        }
        _ => AgeCandidate::NotNumeric,
    }
}

/// Validate the `age` field: required (explicit absence, not falsy
/// zero), numeric, an integer between 1 and 120 inclusive.
pub fn validate_age(value: Option<&Value>) -> Result<u32, Vec<String>> {
    let mut errors = Vec::new();

    let Some(value) = value else {
        errors.push("Validation error: 'age' field is required.".to_string());
        return Err(errors);
    };

    if value.is_null() || matches!(value, Value::String(s) if s.trim().is_empty()) {
        errors.push("Validation error: 'age' cannot be an empty string or null.".to_string());
        return Err(errors);
    }

    match classify_age(value) {
        AgeCandidate::NotNumeric => {
            errors.push("Validation error: 'age' must be a number.".to_string());
        }
        AgeCandidate::NonInteger => {
            errors.push(
                "Validation error: 'age' must be a positive number between 1 and 120.".to_string(),
            );
        }
        AgeCandidate::Int(age) => {
            if (1..=120).contains(&age) {
                return Ok(age as u32);
            }
            errors.push(
                "Validation error: 'age' must be a positive number between 1 and 120.".to_string(),
            );
        }
    }

    Err(errors)
}

/// Validate the `password` field (registration only): required, at
/// least 6 characters. No further format rules apply.
pub fn validate_password(value: Option<&Value>) -> Result<String, Vec<String>> {
    let mut errors = Vec::new();

    let Some(value) = value.filter(|v| !v.is_null()) else {
        errors.push("Validation error: 'password' field is required.".to_string());
        return Err(errors);
    };

    match value.as_str() {
        Some(password) if password.chars().count() >= 6 => Ok(password.to_string()),
        _ => {
            errors.push(
                "Validation error: 'password' must be at least 6 characters long.".to_string(),
            );
            Err(errors)
        }
    }
}

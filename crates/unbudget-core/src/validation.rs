//! Parsing of raw form input into domain values.

use crate::error::ValidationError;

pub const MIN_AGE: u8 = 1;
pub const MAX_AGE: u8 = 120;

/// Parse an age in whole years, 1-120.
pub fn parse_age(input: &str) -> Result<u8, ValidationError> {
    let trimmed = input.trim();
    let value: i64 = trimmed.parse().map_err(|_| ValidationError::NotANumber {
        field: "age",
        input: trimmed.to_string(),
    })?;
    check_age(value)
}

/// Range-check an age that is already numeric.
pub fn check_age(value: i64) -> Result<u8, ValidationError> {
    if (i64::from(MIN_AGE)..=i64::from(MAX_AGE)).contains(&value) {
        Ok(value as u8)
    } else {
        Err(ValidationError::AgeOutOfRange(value))
    }
}

/// Parse a positive spend amount. `field` names the input in messages.
pub fn parse_spend(field: &'static str, input: &str) -> Result<f64, ValidationError> {
    let trimmed = input.trim().trim_start_matches('$');
    let value: f64 = trimmed.parse().map_err(|_| ValidationError::NotANumber {
        field,
        input: input.trim().to_string(),
    })?;
    check_spend(field, value)
}

pub fn check_spend(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NotANumber {
            field,
            input: value.to_string(),
        });
    }
    if value <= 0.0 {
        return Err(ValidationError::NonPositiveSpend { field, value });
    }
    Ok(value)
}

/// Trimmed, non-empty habit name.
pub fn parse_habit_name(input: &str) -> Result<String, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyHabitName);
    }
    Ok(trimmed.to_string())
}

//! Preflight mirror of the backend's user constraints. The form gate decides
//! whether a submission happens; these checks only reproduce the messages the
//! backend would answer with, so the CLI can surface them before the round
//! trip.

use crate::api::models::CreateUserRequest;
use anyhow::{bail, Result};
use regex::Regex;

pub const MAX_FIRST_NAME: usize = 30;
pub const MAX_LAST_NAME: usize = 30;
pub const MAX_USERNAME: usize = 30;
pub const MAX_EMAIL: usize = 50;
pub const MAX_PASSWORD: usize = 30;

pub const MIN_USERNAME: usize = 2;
pub const MIN_EMAIL: usize = 6;
pub const MIN_PASSWORD: usize = 8;

// addr-spec as the backend matches it: dotted atoms or a quoted local part,
// hostname labels or a bracketed IPv4 literal
const EMAIL_PATTERN: &str = r#"(?i)^(?:[a-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-z0-9!#$%&'*+/=?^_`{|}~-]+)*|"(?:[\x01-\x08\x0b\x0c\x0e-\x1f\x21\x23-\x5b\x5d-\x7f]|\\[\x01-\x09\x0b\x0c\x0e-\x7f])*")@(?:(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z0-9](?:[a-z0-9-]*[a-z0-9])?|\[(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?|[a-z0-9-]*[a-z0-9]:(?:[\x01-\x08\x0b\x0c\x0e-\x1f\x21-\x5a\x53-\x7f]|\\[\x01-\x09\x0b\x0c\x0e-\x7f])+)\])$"#;

const USERNAME_PATTERN: &str = r"^[A-Za-z0-9 _]*$";

fn has_match(pattern: &str, value: &str) -> bool {
    Regex::new(pattern).map_or(false, |re| re.is_match(value))
}

/// Run every backend constraint against a registration payload, reporting
/// the first violation.
pub fn validate_create_user(request: &CreateUserRequest) -> Result<()> {
    validate_first_name(&request.first_name)?;
    validate_last_name(&request.last_name)?;
    validate_username(&request.user_name)?;
    validate_email(&request.email)?;
    validate_passwords(&request.password, &request.confirm_password)?;

    Ok(())
}

pub fn validate_first_name(first_name: &str) -> Result<()> {
    if first_name.trim().is_empty() {
        bail!("First name may not be null, empty, or contain one whitespace");
    }

    if first_name.chars().count() > MAX_FIRST_NAME {
        bail!("First name may not be more than {MAX_FIRST_NAME} characters");
    }

    Ok(())
}

pub fn validate_last_name(last_name: &str) -> Result<()> {
    if last_name.chars().count() > MAX_LAST_NAME {
        bail!("Last name may not be more than {MAX_LAST_NAME} characters");
    }

    Ok(())
}

/// Username rules: 2-30 characters from letters, numbers, underscores, and
/// spaces.
pub fn validate_username(username: &str) -> Result<()> {
    if username.is_empty() {
        bail!("Username may not be null or empty");
    }

    if username.chars().count() > MAX_USERNAME {
        bail!("Username may not be more than {MAX_USERNAME} characters");
    }

    if username.chars().count() < MIN_USERNAME {
        bail!("Username may not be less than {MIN_USERNAME} characters");
    }

    if !has_match(USERNAME_PATTERN, username) {
        bail!("Username may only use lowercase / uppercase letters, numbers 0-9, underscores and whitespaces");
    }

    Ok(())
}

/// Email rules: 6-50 characters, addr-spec shaped.
pub fn validate_email(email: &str) -> Result<()> {
    if email.is_empty() {
        bail!("Email may not be null or empty");
    }

    if email.chars().count() > MAX_EMAIL {
        bail!("Email may not be more than {MAX_EMAIL} characters");
    }

    if email.chars().count() < MIN_EMAIL {
        bail!("Email may not be less than {MIN_EMAIL} characters");
    }

    if !has_match(EMAIL_PATTERN, email) {
        bail!("Email does not follow pattern restrictions");
    }

    Ok(())
}

/// Password rules: matching confirmation, 8-30 characters, at least one
/// special character, digit, uppercase, and lowercase letter.
pub fn validate_passwords(password: &str, confirm_password: &str) -> Result<()> {
    if password.is_empty() {
        bail!("Password may not be null or empty");
    }

    if password != confirm_password {
        bail!("Password and confirm password does not match");
    }

    if password.chars().count() < MIN_PASSWORD {
        bail!("Password must be at least {MIN_PASSWORD} characters");
    }

    if password.chars().count() > MAX_PASSWORD {
        bail!("Password may not be more than {MAX_PASSWORD} characters");
    }

    // character classes exactly as the backend matches them, space included
    if !has_match(r"(?i)[^a-z0-9 ]", password) {
        bail!("Password must have at least 1 special character");
    }

    if !has_match(r"[0-9 ]", password) {
        bail!("Password must have at least 1 number");
    }

    if !has_match(r"[A-Z ]", password) {
        bail!("Password must have at least 1 UPPERCASE character");
    }

    if !has_match(r"[a-z ]", password) {
        bail!("Password must have at least 1 lowercase character");
    }

    Ok(())
}

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

pub const MIN_PASSWORD_LENGTH: usize = 6;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

fn error(message: &'static str) -> ValidationError {
    ValidationError::new("0").with_message(Cow::from(message))
}

pub fn is_email(email: &str) -> Result<(), ValidationError> {
    if email.trim().is_empty() {
        return Err(error("Email is required"));
    }

    if !EMAIL_REGEX.is_match(email) {
        return Err(error("Invalid email format"));
    }

    Ok(())
}

pub fn is_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(error("Password is required"));
    }

    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(error("Password must have at least 6 characters"));
    }

    Ok(())
}

pub fn is_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(error("Name is required"));
    }

    Ok(())
}

pub fn is_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(error("Title is required"));
    }

    Ok(())
}

pub fn is_description(description: &str) -> Result<(), ValidationError> {
    if description.trim().is_empty() {
        return Err(error("Description is required"));
    }

    Ok(())
}

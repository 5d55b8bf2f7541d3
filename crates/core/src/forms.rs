//! Sign-in and sign-up form rules
//!
//! Forms are checked before anything is sent to the auth service. A form
//! that fails validation never produces a request body.

use crate::types::{LoginRequest, RegisterRequest};
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

const USERNAME_MIN: usize = 2;
const USERNAME_MAX: usize = 20;
const PASSWORD_MIN: usize = 8;
const PASSWORD_MAX: usize = 16;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern is a valid regex")
});

/// A message attached to a single form field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Every rule a form broke, in field order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("form has {} invalid field(s)", .errors.len())]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// First message reported for `field`, if any
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

/// Values typed into the sign-in form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Values typed into the sign-up form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl LoginForm {
    /// Check the form and turn it into a request body
    pub fn validate(&self) -> Result<LoginRequest, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        check_email(&mut errors, &self.email);
        check_password(&mut errors, &self.password);
        errors.into_result()?;

        Ok(LoginRequest {
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }
}

impl RegisterForm {
    /// Check the form and turn it into a request body
    pub fn validate(&self) -> Result<RegisterRequest, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        check_username(&mut errors, &self.username);
        check_email(&mut errors, &self.email);
        check_password(&mut errors, &self.password);
        errors.into_result()?;

        Ok(RegisterRequest {
            username: self.username.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }
}

/// Loose shape check for an email address
pub fn is_valid_email(email: &str) -> bool {
    !email.starts_with('.') && !email.contains("..") && EMAIL_RE.is_match(email)
}

/// Length as a browser form counts it, in UTF-16 code units
fn text_length(value: &str) -> usize {
    value.encode_utf16().count()
}

fn check_username(errors: &mut ValidationErrors, username: &str) {
    let len = text_length(username);
    if len < USERNAME_MIN {
        errors.push(
            "username",
            format!("Username must be at least {USERNAME_MIN} characters."),
        );
    } else if len > USERNAME_MAX {
        errors.push(
            "username",
            format!("Username must be at most {USERNAME_MAX} characters."),
        );
    }
}

fn check_email(errors: &mut ValidationErrors, email: &str) {
    if !is_valid_email(email) {
        errors.push("email", "Invalid email");
    }
}

fn check_password(errors: &mut ValidationErrors, password: &str) {
    let len = text_length(password);
    if len < PASSWORD_MIN {
        errors.push(
            "password",
            format!("Password must be at least {PASSWORD_MIN} characters."),
        );
    } else if len > PASSWORD_MAX {
        errors.push(
            "password",
            format!("Password must be at most {PASSWORD_MAX} characters."),
        );
    }
}

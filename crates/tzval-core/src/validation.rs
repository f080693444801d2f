//! # Validation Reporting
//!
//! Exceptional values report their reason into a caller-supplied
//! [`ErrorSink`]. The sink owns presentation: [`ValidationErrors`] renders
//! `("email", "has a invalid value of x")` as
//! `"Email has a invalid value of x"`.

use serde::Serialize;

/// A collector of per-field validation messages.
pub trait ErrorSink {
    /// Record `message` against `field`.
    fn add(&mut self, field: &str, message: &str);
}

/// A single recorded validation error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// An ordered list of field errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Errors in the order they were added.
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// Messages recorded for one field.
    pub fn messages_for<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.errors
            .iter()
            .filter(move |e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// Each error rendered as `"{Humanized field} {message}"`.
    pub fn full_messages(&self) -> Vec<String> {
        self.errors
            .iter()
            .map(|e| format!("{} {}", humanize(&e.field), e.message))
            .collect()
    }
}

impl ErrorSink for ValidationErrors {
    fn add(&mut self, field: &str, message: &str) {
        self.errors.push(FieldError {
            field: field.to_string(),
            message: message.to_string(),
        });
    }
}

impl ErrorSink for Vec<(String, String)> {
    fn add(&mut self, field: &str, message: &str) {
        self.push((field.to_string(), message.to_string()));
    }
}

/// `"time_zone_id"` → `"Time zone"`.
fn humanize(field: &str) -> String {
    let field = field.strip_suffix("_id").unwrap_or(field);
    let spaced = field.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

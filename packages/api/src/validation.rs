// ABOUTME: Request field validation for API handlers
// ABOUTME: Collects every violation in call order instead of stopping at the first one

use std::fmt;

use tracing::warn;

/// A single rejected field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub key: &'static str,
    pub message: &'static str,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.message)
    }
}

/// Accumulates field violations for one request
#[derive(Debug, Default)]
pub struct Validation {
    errors: Vec<FieldError>,
}

impl Validation {
    pub fn new() -> Self {
        Self::default()
    }

    fn check(&mut self, ok: bool, key: &'static str, message: &'static str) -> bool {
        if !ok {
            self.errors.push(FieldError { key, message });
        }
        ok
    }

    /// String must contain something other than whitespace
    pub fn required_str(&mut self, value: &str, key: &'static str, message: &'static str) -> bool {
        self.check(!value.trim().is_empty(), key, message)
    }

    /// Integer must be non-zero
    pub fn required_int(&mut self, value: i64, key: &'static str, message: &'static str) -> bool {
        self.check(value != 0, key, message)
    }

    /// At most `max` characters
    pub fn max_size(
        &mut self,
        value: &str,
        max: usize,
        key: &'static str,
        message: &'static str,
    ) -> bool {
        self.check(value.chars().count() <= max, key, message)
    }

    pub fn min(&mut self, value: i64, min: i64, key: &'static str, message: &'static str) -> bool {
        self.check(value >= min, key, message)
    }

    /// Inclusive on both ends
    pub fn range(
        &mut self,
        value: i64,
        min: i64,
        max: i64,
        key: &'static str,
        message: &'static str,
    ) -> bool {
        self.check((min..=max).contains(&value), key, message)
    }

    /// Parse an integer field, recording a violation when it is not one
    pub fn numeric(&mut self, raw: &str, key: &'static str, message: &'static str) -> Option<i64> {
        let parsed = raw.trim().parse::<i64>().ok();
        self.check(parsed.is_some(), key, message);
        parsed
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Emit one warning per violation
    pub fn log_errors(&self) {
        for err in &self.errors {
            warn!(key = err.key, "{}", err.message);
        }
    }
}

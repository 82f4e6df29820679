use std::sync::LazyLock;

use email_address::EmailAddress;
use regex::Regex;
use url::Url;
use uuid::Uuid;

use super::{form::FormFields, result::ActionError, result::FieldErrors};

static YEAR_MONTH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-(0[1-9]|1[0-2])$").expect("Invalid YYYY-MM pattern"));

/// Walks a submitted form field by field, collecting every failure.
///
/// Each check returns a usable value even when it fails, so a draft can be
/// assembled unconditionally; [`FormValidator::finish`] decides whether that
/// draft may be used.
pub struct FormValidator<'a> {
    form: &'a FormFields,
    errors: FieldErrors,
}

impl<'a> FormValidator<'a> {
    pub fn new(form: &'a FormFields) -> Self {
        Self {
            form,
            errors: FieldErrors::new(),
        }
    }

    pub fn required(&mut self, field: &str, label: &str, max_len: usize) -> String {
        let form = self.form;
        match form.text(field) {
            Some(value) => {
                self.check_length(field, label, value, max_len);
                value.to_string()
            }
            None => {
                self.errors.add(field, format!("{label} is required"));
                String::new()
            }
        }
    }

    pub fn optional(&mut self, field: &str, label: &str, max_len: usize) -> Option<String> {
        let form = self.form;
        let value = form.text(field)?;
        self.check_length(field, label, value, max_len);
        Some(value.to_string())
    }

    /// Free text without a length cap (description, summary).
    pub fn required_text(&mut self, field: &str, label: &str) -> String {
        self.required(field, label, usize::MAX)
    }

    pub fn optional_text(&mut self, field: &str, label: &str) -> Option<String> {
        self.optional(field, label, usize::MAX)
    }

    pub fn year_month(&mut self, field: &str, label: &str) -> String {
        let value = self.required(field, label, usize::MAX);
        if !value.is_empty() && !YEAR_MONTH.is_match(&value) {
            self.errors
                .add(field, format!("{label} must use the YYYY-MM format"));
        }
        value
    }

    pub fn optional_year_month(&mut self, field: &str, label: &str) -> Option<String> {
        let form = self.form;
        let value = form.text(field)?;
        if !YEAR_MONTH.is_match(value) {
            self.errors
                .add(field, format!("{label} must use the YYYY-MM format"));
        }
        Some(value.to_string())
    }

    pub fn int_in_range(&mut self, field: &str, label: &str, min: i32, max: i32) -> i32 {
        let form = self.form;
        match form.text(field) {
            Some(raw) => self.parse_in_range(field, label, raw, min, max).unwrap_or(min),
            None => {
                self.errors.add(field, format!("{label} is required"));
                min
            }
        }
    }

    pub fn optional_int_in_range(
        &mut self,
        field: &str,
        label: &str,
        min: i32,
        max: i32,
    ) -> Option<i32> {
        let form = self.form;
        let raw = form.text(field)?;
        self.parse_in_range(field, label, raw, min, max)
    }

    pub fn optional_url(&mut self, field: &str, label: &str) -> Option<String> {
        let value = self.optional(field, label, 255)?;
        let valid = Url::parse(&value)
            .map(|url| matches!(url.scheme(), "http" | "https") && url.has_host())
            .unwrap_or(false);

        if !valid {
            self.errors
                .add(field, format!("{label} must be a valid http(s) URL"));
        }
        Some(value)
    }

    pub fn optional_email(&mut self, field: &str, label: &str) -> Option<String> {
        let value = self.optional(field, label, 255)?;
        if !EmailAddress::is_valid(&value) {
            self.errors
                .add(field, format!("{label} must be a valid email address"));
        }
        Some(value)
    }

    /// Comma separated list; entries are trimmed and blanks dropped.
    pub fn list(&mut self, field: &str, label: &str) -> Vec<String> {
        let items: Vec<String> = self
            .form
            .get(field)
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect();

        if items.is_empty() {
            self.errors
                .add(field, format!("{label} must contain at least one entry"));
        }
        items
    }

    /// `YYYY-MM` strings compare correctly as plain strings.
    pub fn date_order(&mut self, end_field: &str, start: &str, end: Option<&str>) {
        let Some(end) = end else { return };

        let both_valid = YEAR_MONTH.is_match(start) && YEAR_MONTH.is_match(end);
        if both_valid && end < start {
            self.errors
                .add(end_field, "End date cannot be before start date");
        }
    }

    pub fn finish(self) -> Result<(), ActionError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            tracing::debug!(fields = ?self.errors, "Form validation failed");
            Err(ActionError::Validation(self.errors))
        }
    }

    fn check_length(&mut self, field: &str, label: &str, value: &str, max_len: usize) {
        if value.chars().count() > max_len {
            self.errors.add(
                field,
                format!("{label} must be at most {max_len} characters"),
            );
        }
    }

    fn parse_in_range(
        &mut self,
        field: &str,
        label: &str,
        raw: &str,
        min: i32,
        max: i32,
    ) -> Option<i32> {
        match raw.parse::<i32>() {
            Ok(n) if (min..=max).contains(&n) => Some(n),
            Ok(_) => {
                self.errors
                    .add(field, format!("{label} must be between {min} and {max}"));
                None
            }
            Err(_) => {
                self.errors
                    .add(field, format!("{label} must be a whole number"));
                None
            }
        }
    }
}

/// Parses the id a mutating action is addressed to.
pub fn parse_record_id(raw: &str) -> Result<Uuid, ActionError> {
    Uuid::parse_str(raw.trim()).map_err(|_| ActionError::invalid_id())
}

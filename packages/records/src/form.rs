//! # Form capture and schema validation
//!
//! The modal form binds every input to a [`FormValues`] entry keyed by field
//! name. On submit, a resource turns those raw strings into its typed draft
//! through a [`FormReader`]:
//!
//! 1. presence and number parsing are checked field by field,
//! 2. the assembled draft is run through its `validator` rules,
//! 3. every problem ends up in [`FormErrors`], at most one message per field.
//!
//! A draft only exists when all fields pass, so a request can never be built
//! from invalid input.

use std::collections::BTreeMap;

use validator::Validate;

/// Input type of a form field, used by the UI to pick the `<input type>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Url,
    Number,
    Email,
}

impl FieldKind {
    pub fn input_type(self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Url => "text",
            FieldKind::Number => "number",
            FieldKind::Email => "email",
        }
    }
}

/// Static description of one form input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub placeholder: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn new(name: &'static str, placeholder: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            placeholder,
            kind,
        }
    }
}

/// Raw string values of the form inputs, keyed by field name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormValues(BTreeMap<String, String>);

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a field; an unset field reads as empty.
    pub fn get(&self, field: &str) -> &str {
        self.0.get(field).map(String::as_str).unwrap_or_default()
    }

    pub fn set(&mut self, field: &str, value: impl Into<String>) {
        self.0.insert(field.to_string(), value.into());
    }

    /// Builder form of [`FormValues::set`].
    pub fn with(mut self, field: &str, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(|v| v.is_empty())
    }
}

/// Per-field validation messages.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<String, String>);

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Record a message; the first message for a field wins.
    pub fn insert(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_insert_with(|| message.into());
    }

    pub fn remove(&mut self, field: &str) {
        self.0.remove(field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Merge `validator` failures, keeping any message already recorded.
    pub fn extend_from_validation(&mut self, errors: &validator::ValidationErrors) {
        for (field, field_errors) in errors.field_errors() {
            let Some(error) = field_errors.first() else {
                continue;
            };
            let field = field.to_string();
            let message = error
                .message
                .as_ref()
                .map_or_else(|| format!("{field} is invalid"), ToString::to_string);
            self.insert(&field, message);
        }
    }
}

/// Reads typed values out of [`FormValues`], collecting errors as it goes.
pub struct FormReader<'a> {
    values: &'a FormValues,
    errors: FormErrors,
}

impl<'a> FormReader<'a> {
    pub fn new(values: &'a FormValues) -> Self {
        Self {
            values,
            errors: FormErrors::new(),
        }
    }

    /// Optional text, trimmed.
    pub fn text(&mut self, field: &str) -> String {
        self.values.get(field).trim().to_string()
    }

    /// Text that must not be blank.
    pub fn required_text(&mut self, field: &str, label: &str) -> String {
        let value = self.text(field);
        if value.is_empty() {
            self.errors.insert(field, format!("{label} is required"));
        }
        value
    }

    /// A required whole number. Returns 0 when missing or malformed.
    pub fn integer(&mut self, field: &str, label: &str) -> i64 {
        let raw = self.text(field);
        if raw.is_empty() {
            self.errors.insert(field, format!("{label} is required"));
            return 0;
        }
        match raw.parse::<i64>() {
            Ok(n) => n,
            Err(_) if raw.parse::<f64>().is_ok() => {
                self.errors
                    .insert(field, format!("{label} must be a whole number"));
                0
            }
            Err(_) => {
                self.errors.insert(field, format!("{label} must be a number"));
                0
            }
        }
    }

    /// A required decimal number. Returns 0.0 when missing or malformed.
    pub fn number(&mut self, field: &str, label: &str) -> f64 {
        let raw = self.text(field);
        if raw.is_empty() {
            self.errors.insert(field, format!("{label} is required"));
            return 0.0;
        }
        match raw.parse::<f64>() {
            Ok(n) if n.is_finite() => n,
            _ => {
                self.errors.insert(field, format!("{label} must be a number"));
                0.0
            }
        }
    }

    /// Run the draft's validation rules and hand it back if nothing failed.
    pub fn finish<D: Validate>(mut self, draft: D) -> Result<D, FormErrors> {
        if let Err(errors) = draft.validate() {
            self.errors.extend_from_validation(&errors);
        }
        if self.errors.is_empty() {
            Ok(draft)
        } else {
            Err(self.errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Debug, Validate)]
    struct Probe {
        #[validate(email(message = "Email must be a valid email"))]
        email: String,
        #[validate(range(min = 0, message = "Count must not be negative"))]
        count: i64,
    }

    #[test]
    fn test_unset_field_reads_empty() {
        let values = FormValues::new().with("name", "Ann");
        assert_eq!(values.get("name"), "Ann");
        assert_eq!(values.get("missing"), "");
    }

    #[test]
    fn test_first_error_per_field_wins() {
        let mut errors = FormErrors::new();
        errors.insert("age", "Age is required");
        errors.insert("age", "Age must be a number");
        assert_eq!(errors.get("age"), Some("Age is required"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_reader_reports_parse_errors() {
        let values = FormValues::new()
            .with("a", "")
            .with("b", "12.5")
            .with("c", "abc")
            .with("d", " 7 ");
        let mut reader = FormReader::new(&values);
        assert_eq!(reader.integer("a", "A"), 0);
        assert_eq!(reader.integer("b", "B"), 0);
        assert_eq!(reader.integer("c", "C"), 0);
        assert_eq!(reader.integer("d", "D"), 7);

        let errors = reader
            .finish(Probe {
                email: "x@y.io".into(),
                count: 1,
            })
            .unwrap_err();
        assert_eq!(errors.get("a"), Some("A is required"));
        assert_eq!(errors.get("b"), Some("B must be a whole number"));
        assert_eq!(errors.get("c"), Some("C must be a number"));
        assert!(!errors.contains("d"));
    }

    #[test]
    fn test_finish_merges_validator_messages() {
        let values = FormValues::new();
        let reader = FormReader::new(&values);
        let errors = reader
            .finish(Probe {
                email: "not-an-email".into(),
                count: -1,
            })
            .unwrap_err();
        assert_eq!(errors.get("email"), Some("Email must be a valid email"));
        assert_eq!(errors.get("count"), Some("Count must not be negative"));
    }

    #[test]
    fn test_finish_returns_valid_draft() {
        let values = FormValues::new();
        let reader = FormReader::new(&values);
        let probe = reader
            .finish(Probe {
                email: "b@x.com".into(),
                count: 0,
            })
            .unwrap();
        assert_eq!(probe.count, 0);
    }
}

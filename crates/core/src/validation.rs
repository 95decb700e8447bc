//! Pure input-validation primitives.
//!
//! Handlers and DTOs compose these rule checks into a [`Violations`]
//! accumulator so a single request reports every failed rule at once,
//! rather than bailing on the first. A failed check never mutates the
//! input; callers only learn `(field, rule)` pairs.

use serde::Serialize;

/// A single failed rule on a named input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub field: &'static str,
    pub rule: &'static str,
}

/// Machine-readable validation failure: every `(field, rule)` pair that
/// did not hold for the input.
#[derive(Debug, Clone, Serialize, thiserror::Error)]
#[error("Validation failed: {}", format_violations(.violations))]
pub struct ValidationError {
    pub violations: Vec<Violation>,
}

fn format_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| format!("{} ({})", v.field, v.rule))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Accumulator for rule checks. Convert with [`Violations::into_result`]
/// once every rule for the input has run.
#[derive(Debug, Default)]
pub struct Violations {
    inner: Vec<Violation>,
}

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &'static str, rule: &'static str) {
        self.inner.push(Violation { field, rule });
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// `Ok(())` when no rule failed, otherwise the full violation list.
    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.inner.is_empty() {
            Ok(())
        } else {
            Err(ValidationError {
                violations: self.inner,
            })
        }
    }
}

// ---------------------------------------------------------------------------
// Rule primitives
// ---------------------------------------------------------------------------

/// The field must contain at least one non-whitespace character.
pub fn require_non_blank(v: &mut Violations, field: &'static str, value: &str) {
    if value.trim().is_empty() {
        v.push(field, "required");
    }
}

/// The field must not exceed `max` characters.
pub fn max_chars(v: &mut Violations, field: &'static str, value: &str, max: usize) {
    if value.chars().count() > max {
        v.push(field, "too_long");
    }
}

/// The field must fall within `min..=max`.
pub fn in_range(v: &mut Violations, field: &'static str, value: i64, min: i64, max: i64) {
    if value < min || value > max {
        v.push(field, "out_of_range");
    }
}

/// The field must look like an absolute http(s) URL.
pub fn http_url(v: &mut Violations, field: &'static str, value: &str) {
    if !(value.starts_with("http://") || value.starts_with("https://")) {
        v.push(field, "invalid_url");
    }
}

/// Database identifiers are positive integers.
pub fn positive_id(v: &mut Violations, field: &'static str, value: i64) {
    if value < 1 {
        v.push(field, "not_positive");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_accumulator_is_ok() {
        assert!(Violations::new().into_result().is_ok());
    }

    #[test]
    fn collects_every_failed_rule() {
        let mut v = Violations::new();
        require_non_blank(&mut v, "title", "   ");
        in_range(&mut v, "year", 1700, 1888, 2100);
        http_url(&mut v, "cover", "ftp://example.com/poster.png");

        let err = v.into_result().unwrap_err();
        assert_eq!(err.violations.len(), 3);
        assert_eq!(
            err.violations[0],
            Violation {
                field: "title",
                rule: "required"
            }
        );
        assert_eq!(err.violations[1].rule, "out_of_range");
        assert_eq!(err.violations[2].rule, "invalid_url");
    }

    #[test]
    fn passing_rules_record_nothing() {
        let mut v = Violations::new();
        require_non_blank(&mut v, "title", "Dune");
        max_chars(&mut v, "title", "Dune", 80);
        in_range(&mut v, "year", 2021, 1888, 2100);
        http_url(&mut v, "cover", "https://example.com/dune.jpg");
        positive_id(&mut v, "movieId", 7);
        assert!(v.into_result().is_ok());
    }

    #[test]
    fn max_chars_counts_characters_not_bytes() {
        let mut v = Violations::new();
        max_chars(&mut v, "title", "héllo", 5);
        assert!(v.is_empty());
    }

    #[test]
    fn zero_and_negative_ids_are_rejected() {
        for id in [0, -5] {
            let mut v = Violations::new();
            positive_id(&mut v, "movieId", id);
            assert!(!v.is_empty(), "id {id} should be rejected");
        }
    }

    #[test]
    fn error_message_names_field_and_rule() {
        let mut v = Violations::new();
        require_non_blank(&mut v, "title", "");
        let err = v.into_result().unwrap_err();
        assert_eq!(err.to_string(), "Validation failed: title (required)");
    }
}

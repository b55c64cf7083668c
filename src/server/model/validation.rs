//! Field-level request validation.
//!
//! Each request shape declares a static table of rules; `validate` runs the table and
//! collects every violation instead of stopping at the first one.

/// A single violated constraint on a request field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    /// Name of the field as it appears in the request JSON.
    pub field: &'static str,
    /// Human readable description of the constraint.
    pub message: &'static str,
}

/// A (field, predicate, message) entry in a validation table.
pub struct Rule<T> {
    pub field: &'static str,
    pub check: fn(&T) -> bool,
    pub message: &'static str,
}

/// Runs every rule against `value` and returns the violations in table order.
pub fn validate<T>(value: &T, rules: &[Rule<T>]) -> Vec<FieldViolation> {
    rules
        .iter()
        .filter(|rule| !(rule.check)(value))
        .map(|rule| FieldViolation {
            field: rule.field,
            message: rule.message,
        })
        .collect()
}

/// Present and containing at least one non-whitespace character.
pub fn is_not_blank(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

/// Number of characters (not bytes) is within `min..=max`. Absent values pass.
pub fn has_char_length(value: Option<&str>, min: usize, max: usize) -> bool {
    value.map_or(true, |v| (min..=max).contains(&v.chars().count()))
}

/// Supplied values must not be blank. Absent values pass.
pub fn is_not_blank_if_present(value: Option<&str>) -> bool {
    value.map_or(true, |v| !v.trim().is_empty())
}

/// Removes repeated hashtags keeping the first occurrence of each.
pub fn dedup_preserving_order(values: Vec<String>) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(values.len());
    for value in values {
        if !unique.contains(&value) {
            unique.push(value);
        }
    }
    unique
}

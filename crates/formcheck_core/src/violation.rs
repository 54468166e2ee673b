//! Structured validation failures.
//!
//! A [`Violation`] is data, never an error value: expected validation
//! failures are returned to the caller inside a [`ValidationOutcome`] so the
//! presentation layer can decide how to render them. Each violation carries
//! everything needed to produce a message without re-deriving context — the
//! symbolic code, the template arguments, the resolved lookup-key chain and,
//! for binding failures, the original rejected input.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What a violation points at: the whole record, or one named field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "field", rename_all = "lowercase")]
pub enum ErrorTarget {
    /// Cross-field violation on the record itself
    Record,
    /// Violation on a single named field
    Field(String),
}

impl ErrorTarget {
    /// Returns the field name for field-level targets.
    pub fn field_name(&self) -> Option<&str> {
        match self {
            ErrorTarget::Record => None,
            ErrorTarget::Field(name) => Some(name),
        }
    }
}

/// A value substituted into a message template.
///
/// Templates reference arguments positionally (`{0}`, `{1}`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageArg {
    /// Numeric argument (bounds, computed totals)
    Int(i64),
    /// Text argument
    Text(String),
}

impl fmt::Display for MessageArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageArg::Int(value) => write!(f, "{}", value),
            MessageArg::Text(value) => write!(f, "{}", value),
        }
    }
}

impl From<i64> for MessageArg {
    fn from(value: i64) -> Self {
        MessageArg::Int(value)
    }
}

impl From<i32> for MessageArg {
    fn from(value: i32) -> Self {
        MessageArg::Int(i64::from(value))
    }
}

impl From<&str> for MessageArg {
    fn from(value: &str) -> Self {
        MessageArg::Text(value.to_string())
    }
}

impl From<String> for MessageArg {
    fn from(value: String) -> Self {
        MessageArg::Text(value)
    }
}

/// A single validation failure.
///
/// # Example
///
/// ```rust
/// use formcheck_core::{ErrorTarget, Violation};
///
/// let violation = Violation::field("price", "range")
///     .with_arguments(vec![1000.into(), 1_000_000.into()]);
///
/// assert_eq!(violation.target, ErrorTarget::Field("price".to_string()));
/// assert_eq!(violation.code, "range");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    /// Record-level or field-level target
    pub target: ErrorTarget,

    /// Symbolic code, e.g. `required`, `range`, `max`, `totalPriceMin`
    pub code: String,

    /// Ordered arguments for message templates
    #[serde(default)]
    pub arguments: Vec<MessageArg>,

    /// Fallback lookup keys, most specific first
    #[serde(default)]
    pub resolved_codes: Vec<String>,

    /// Original user input, kept when the violation stems from a
    /// parse/type failure rather than a range check
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejected_value: Option<String>,
}

impl Violation {
    /// Creates a field-level violation with the given symbolic code.
    pub fn field(field: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            target: ErrorTarget::Field(field.into()),
            code: code.into(),
            arguments: Vec::new(),
            resolved_codes: Vec::new(),
            rejected_value: None,
        }
    }

    /// Creates a record-level violation with the given symbolic code.
    pub fn record(code: impl Into<String>) -> Self {
        Self {
            target: ErrorTarget::Record,
            code: code.into(),
            arguments: Vec::new(),
            resolved_codes: Vec::new(),
            rejected_value: None,
        }
    }

    /// Sets the message template arguments.
    pub fn with_arguments(mut self, arguments: Vec<MessageArg>) -> Self {
        self.arguments = arguments;
        self
    }

    /// Sets the resolved lookup-key chain.
    pub fn with_resolved_codes(mut self, codes: Vec<String>) -> Self {
        self.resolved_codes = codes;
        self
    }

    /// Records the original rejected input value.
    pub fn with_rejected_value(mut self, value: impl Into<String>) -> Self {
        self.rejected_value = Some(value.into());
        self
    }

    /// Returns the field name for field-level violations.
    pub fn field_name(&self) -> Option<&str> {
        self.target.field_name()
    }
}

/// Result of one validation pass: an ordered list of violations.
///
/// An empty outcome means the record is valid. Order is the order in which
/// rules emitted their violations, so callers can render them stably.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    violations: Vec<Violation>,
}

impl ValidationOutcome {
    /// Creates an empty (valid) outcome.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no violations were recorded.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Number of recorded violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// True when the outcome holds no violations.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Appends a violation.
    pub fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    /// Appends all violations from another outcome, preserving order.
    pub fn merge(&mut self, other: ValidationOutcome) {
        self.violations.extend(other.violations);
    }

    /// All violations in emission order.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Violations recorded against one named field.
    pub fn field_violations<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a Violation> {
        self.violations
            .iter()
            .filter(move |v| v.field_name() == Some(field))
    }

    /// Record-level (cross-field) violations.
    pub fn record_violations(&self) -> impl Iterator<Item = &Violation> {
        self.violations
            .iter()
            .filter(|v| v.target == ErrorTarget::Record)
    }
}

impl IntoIterator for ValidationOutcome {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}

impl FromIterator<Violation> for ValidationOutcome {
    fn from_iter<I: IntoIterator<Item = Violation>>(iter: I) -> Self {
        Self {
            violations: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_outcome_is_valid() {
        let outcome = ValidationOutcome::new();
        assert!(outcome.is_valid());
        assert_eq!(outcome.len(), 0);
    }

    #[test]
    fn test_push_and_filter_by_target() {
        let mut outcome = ValidationOutcome::new();
        outcome.push(Violation::field("itemName", "required"));
        outcome.push(Violation::field("price", "range"));
        outcome.push(Violation::record("totalPriceMin"));

        assert!(!outcome.is_valid());
        assert_eq!(outcome.field_violations("price").count(), 1);
        assert_eq!(outcome.field_violations("itemName").count(), 1);
        assert_eq!(outcome.record_violations().count(), 1);
    }

    #[test]
    fn test_merge_preserves_order() {
        let mut first = ValidationOutcome::new();
        first.push(Violation::field("itemName", "required"));

        let mut second = ValidationOutcome::new();
        second.push(Violation::record("totalPriceMin"));

        first.merge(second);
        let codes: Vec<&str> = first.violations().iter().map(|v| v.code.as_str()).collect();
        assert_eq!(codes, vec!["required", "totalPriceMin"]);
    }

    #[test]
    fn test_message_arg_display() {
        assert_eq!(MessageArg::Int(10_000).to_string(), "10000");
        assert_eq!(MessageArg::Text("abc".to_string()).to_string(), "abc");
    }

    #[test]
    fn test_violation_serializes_to_json() {
        let violation = Violation::field("quantity", "max")
            .with_arguments(vec![0.into(), 9999.into()])
            .with_resolved_codes(vec!["max.item.quantity".to_string(), "max".to_string()]);

        let json = serde_json::to_value(&violation).unwrap();
        assert_eq!(json["code"], "max");
        assert_eq!(json["target"]["field"], "quantity");
        assert_eq!(json["arguments"][1], 9999);
    }
}

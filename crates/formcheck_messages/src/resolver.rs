//! Fallback-chain generation for violation codes.
//!
//! Message catalogs are keyed by dotted codes, and the resolver decides
//! which keys a lookup should probe and in what order. The chain always
//! runs from most specific to least specific, so a catalog can override a
//! single field's message without touching the generic one.

use thiserror::Error;

/// Errors raised for malformed resolver input.
///
/// These are programming-contract violations, not validation results: a
/// blank code or context identifier would silently corrupt the generated
/// chain, so it is rejected outright.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    /// The symbolic code was empty
    #[error("message code must not be empty")]
    EmptyCode,

    /// A context identifier (object name, field name, field type) was empty
    #[error("{0} must not be empty")]
    EmptyContext(&'static str),
}

/// Result type alias for resolver operations.
pub type Result<T> = std::result::Result<T, ResolveError>;

/// Generates ordered, de-duplicated message-code fallback chains.
///
/// For a record-level code `C` on object `T` the chain is:
///
/// ```text
/// C.T
/// C
/// ```
///
/// For a field-level code `C` on object `T`, field `F` of type `Y`:
///
/// ```text
/// C.T.F
/// C.F
/// C.Y
/// C
/// ```
///
/// Duplicate keys (possible when identifiers coincide, e.g. `T == F`) keep
/// only their first occurrence, preserving overall order.
///
/// # Example
///
/// ```rust
/// use formcheck_messages::MessageCodesResolver;
///
/// let resolver = MessageCodesResolver::new();
/// let codes = resolver.resolve_record("required", "item").unwrap();
/// assert_eq!(codes, vec!["required.item", "required"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MessageCodesResolver;

impl MessageCodesResolver {
    /// Creates a resolver.
    pub fn new() -> Self {
        Self
    }

    /// Resolves the fallback chain for a record-level violation.
    pub fn resolve_record(&self, code: &str, object: &str) -> Result<Vec<String>> {
        if code.is_empty() {
            return Err(ResolveError::EmptyCode);
        }
        if object.is_empty() {
            return Err(ResolveError::EmptyContext("object name"));
        }

        Ok(dedup_preserving_order(vec![
            format!("{}.{}", code, object),
            code.to_string(),
        ]))
    }

    /// Resolves the fallback chain for a field-level violation.
    pub fn resolve_field(
        &self,
        code: &str,
        object: &str,
        field: &str,
        field_type: &str,
    ) -> Result<Vec<String>> {
        if code.is_empty() {
            return Err(ResolveError::EmptyCode);
        }
        if object.is_empty() {
            return Err(ResolveError::EmptyContext("object name"));
        }
        if field.is_empty() {
            return Err(ResolveError::EmptyContext("field name"));
        }
        if field_type.is_empty() {
            return Err(ResolveError::EmptyContext("field type"));
        }

        Ok(dedup_preserving_order(vec![
            format!("{}.{}.{}", code, object, field),
            format!("{}.{}", code, field),
            format!("{}.{}", code, field_type),
            code.to_string(),
        ]))
    }
}

/// Drops later duplicates, keeping first-seen order.
fn dedup_preserving_order(codes: Vec<String>) -> Vec<String> {
    let mut seen = Vec::with_capacity(codes.len());
    for code in codes {
        if !seen.contains(&code) {
            seen.push(code);
        }
    }
    seen
}

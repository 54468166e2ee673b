//! Catalog of user-facing message templates.
//!
//! Templates are keyed by the dotted codes the resolver produces and
//! reference violation arguments positionally (`{0}`, `{1}`, ...). Rendering
//! probes a violation's resolved chain in order and falls back to a generic
//! message when nothing matches, so a violation can always be shown to the
//! user even with an incomplete catalog.

use formcheck_core::Violation;
use std::collections::HashMap;
use tracing::debug;

/// Message used when no catalog entry matches any resolved code.
pub const GENERIC_FALLBACK: &str = "invalid value";

/// Code → template mapping with fallback rendering.
///
/// # Example
///
/// ```rust
/// use formcheck_core::Violation;
/// use formcheck_messages::MessageCatalog;
///
/// let catalog = MessageCatalog::standard();
/// let violation = Violation::field("price", "range")
///     .with_arguments(vec![1000.into(), 1_000_000.into()])
///     .with_resolved_codes(vec![
///         "range.item.price".to_string(),
///         "range".to_string(),
///     ]);
///
/// assert_eq!(
///     catalog.render(&violation),
///     "price must be between 1000 and 1000000"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct MessageCatalog {
    messages: HashMap<String, String>,
    fallback: String,
}

impl MessageCatalog {
    /// Creates an empty catalog with the generic fallback message.
    pub fn new() -> Self {
        Self {
            messages: HashMap::new(),
            fallback: GENERIC_FALLBACK.to_string(),
        }
    }

    /// Creates a catalog from an existing code → template map.
    pub fn from_map(messages: HashMap<String, String>) -> Self {
        Self {
            messages,
            fallback: GENERIC_FALLBACK.to_string(),
        }
    }

    /// Built-in English templates for the standard item rule codes.
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        catalog.insert("required.item.itemName", "item name is required");
        catalog.insert("range.item.price", "price must be between {0} and {1}");
        catalog.insert("max.item.quantity", "quantity must be between {0} and {1}");
        catalog.insert(
            "totalPriceMin",
            "total price must be at least {0} (current total: {1})",
        );
        catalog.insert("typeMismatch.item.price", "price must be a whole number");
        catalog.insert(
            "typeMismatch.item.quantity",
            "quantity must be a whole number",
        );
        catalog.insert("required", "this field is required");
        catalog.insert("range", "value must be between {0} and {1}");
        catalog.insert("max", "value must be at most {1}");
        catalog.insert("typeMismatch", "the supplied value could not be read");
        catalog
    }

    /// Adds or replaces a template.
    pub fn insert(&mut self, code: impl Into<String>, template: impl Into<String>) {
        self.messages.insert(code.into(), template.into());
    }

    /// Replaces the generic fallback message.
    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = fallback.into();
        self
    }

    /// Looks up a template by exact code.
    pub fn template(&self, code: &str) -> Option<&str> {
        self.messages.get(code).map(String::as_str)
    }

    /// Number of templates in the catalog.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// True when the catalog holds no templates.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Renders a violation to user-facing text.
    ///
    /// Probes the violation's resolved codes in order, then the symbolic
    /// code itself, then the fallback. The first template found wins.
    pub fn render(&self, violation: &Violation) -> String {
        for code in &violation.resolved_codes {
            if let Some(template) = self.template(code) {
                return expand(template, violation);
            }
        }

        // A violation built without a resolved chain still renders by its
        // symbolic code.
        if let Some(template) = self.template(&violation.code) {
            return expand(template, violation);
        }

        debug!(code = %violation.code, "no catalog entry matched, using fallback");
        expand(&self.fallback, violation)
    }
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self::new()
    }
}

/// Substitutes `{0}`, `{1}`, ... placeholders with the violation arguments.
fn expand(template: &str, violation: &Violation) -> String {
    let mut message = template.to_string();
    for (index, argument) in violation.arguments.iter().enumerate() {
        let placeholder = format!("{{{}}}", index);
        message = message.replace(&placeholder, &argument.to_string());
    }
    message
}

//! Raw form binding.
//!
//! Transport layers hand over text, not typed records. [`FormBinder`] turns
//! an [`ItemForm`] of raw optional strings into an [`Item`], recording a
//! `typeMismatch` violation -- with the original input preserved as the
//! rejected value -- for every field that fails to parse. Binding failures
//! never abort the bind: the remaining fields still come through, so rule
//! validation can run on whatever did parse.

use formcheck_core::{Item, ValidationOutcome, Violation};
use formcheck_messages::MessageCodesResolver;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Untyped form input, field for field what a user submitted.
///
/// Every field is an optional raw string; blank strings are treated as
/// absent rather than as parse failures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemForm {
    /// Raw identifier input
    #[serde(default)]
    pub id: Option<String>,

    /// Raw name input
    #[serde(default)]
    pub item_name: Option<String>,

    /// Raw price input
    #[serde(default)]
    pub price: Option<String>,

    /// Raw quantity input
    #[serde(default)]
    pub quantity: Option<String>,
}

impl ItemForm {
    /// Creates an empty form.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Result of binding a form: the typed item plus any binding violations.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundItem {
    /// The typed record; fields that failed to parse are absent
    pub item: Item,
    /// `typeMismatch` violations, one per unparseable field
    pub violations: ValidationOutcome,
}

/// Binds raw form input to typed items.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormBinder {
    resolver: MessageCodesResolver,
}

impl FormBinder {
    /// Creates a binder.
    pub fn new() -> Self {
        Self {
            resolver: MessageCodesResolver::new(),
        }
    }

    /// Binds a form to an [`Item`].
    ///
    /// Numeric fields that fail to parse leave the typed field absent and
    /// record a field violation with code `typeMismatch` and the original
    /// text as the rejected value.
    pub fn bind(&self, form: &ItemForm) -> BoundItem {
        let mut violations = ValidationOutcome::new();

        let id = self.parse_number::<u64>(&form.id, "id", "u64", &mut violations);
        let price = self.parse_number::<i32>(&form.price, "price", "i32", &mut violations);
        let quantity = self.parse_number::<i32>(&form.quantity, "quantity", "i32", &mut violations);

        let item = Item {
            id,
            item_name: form.item_name.clone(),
            price,
            quantity,
        };

        BoundItem { item, violations }
    }

    fn parse_number<T: std::str::FromStr>(
        &self,
        raw: &Option<String>,
        field: &str,
        type_name: &str,
        violations: &mut ValidationOutcome,
    ) -> Option<T> {
        let text = raw.as_deref()?.trim();
        if text.is_empty() {
            return None;
        }

        match text.parse::<T>() {
            Ok(value) => Some(value),
            Err(_) => {
                debug!(field, rejected = text, "binding failed, recording type mismatch");
                let codes = self
                    .resolver
                    .resolve_field("typeMismatch", Item::OBJECT_NAME, field, type_name)
                    .expect("binding codes and context are non-empty");
                violations.push(
                    Violation::field(field, "typeMismatch")
                        .with_resolved_codes(codes)
                        .with_rejected_value(raw.as_deref().unwrap_or_default()),
                );
                None
            }
        }
    }
}

//! The candidate record under validation.
//!
//! An [`Item`] mirrors a web form: every field is optional because the user
//! may have left it blank, and nothing is enforced at construction time.
//! All constraints live in the rule layer; the type itself stays inert.

use serde::{Deserialize, Serialize};

/// A catalog item as submitted from a form or API payload.
///
/// No invariants are enforced here — an `Item` with a missing name or a
/// negative price is representable on purpose, so that validation can report
/// every problem instead of failing at the first one. Validators take the
/// item by reference and never mutate it.
///
/// # Example
///
/// ```rust
/// use formcheck_core::Item;
///
/// let item = Item {
///     id: None,
///     item_name: Some("notebook".to_string()),
///     price: Some(1200),
///     quantity: Some(20),
/// };
/// assert_eq!(item.item_name.as_deref(), Some("notebook"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Identifier assigned by the store; absent for new records
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Display name; may be empty or missing in raw input
    #[serde(default)]
    pub item_name: Option<String>,

    /// Unit price; bounds are checked by the rule set, not here
    #[serde(default)]
    pub price: Option<i32>,

    /// Ordered quantity; bounds are checked by the rule set, not here
    #[serde(default)]
    pub quantity: Option<i32>,
}

impl Item {
    /// Object name used when composing message codes for this record type.
    pub const OBJECT_NAME: &'static str = "item";

    /// Creates an item with every field absent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when the name field contains at least one
    /// non-whitespace character.
    pub fn has_name(&self) -> bool {
        self.item_name
            .as_deref()
            .is_some_and(|name| !name.trim().is_empty())
    }

    /// Widened total of `price * quantity`, when both fields are present.
    ///
    /// The product is computed in `i64` so that no pair of `i32` inputs can
    /// wrap around.
    pub fn total_price(&self) -> Option<i64> {
        match (self.price, self.quantity) {
            (Some(price), Some(quantity)) => Some(i64::from(price) * i64::from(quantity)),
            _ => None,
        }
    }
}

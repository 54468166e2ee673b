//! Builder for constructing items in tests and calling code.
//!
//! Mirrors the shape raw form input takes: every setter is optional, and
//! `build` never fails because an incomplete item is a legal input to
//! validation.

use crate::Item;

/// Fluent builder for an [`Item`].
///
/// # Example
///
/// ```rust
/// use formcheck_core::ItemBuilder;
///
/// let item = ItemBuilder::new()
///     .name("notebook")
///     .price(1200)
///     .quantity(20)
///     .build();
///
/// assert_eq!(item.price, Some(1200));
/// assert_eq!(item.id, None);
/// ```
#[derive(Debug, Default)]
pub struct ItemBuilder {
    id: Option<u64>,
    item_name: Option<String>,
    price: Option<i32>,
    quantity: Option<i32>,
}

impl ItemBuilder {
    /// Creates a builder with every field absent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the store identifier.
    pub fn id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.item_name = Some(name.into());
        self
    }

    /// Sets the unit price.
    pub fn price(mut self, price: i32) -> Self {
        self.price = Some(price);
        self
    }

    /// Sets the quantity.
    pub fn quantity(mut self, quantity: i32) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// Builds the item. Infallible: missing fields stay `None`.
    pub fn build(self) -> Item {
        Item {
            id: self.id,
            item_name: self.item_name,
            price: self.price,
            quantity: self.quantity,
        }
    }
}

//! Validator trait for item records.
//!
//! Implementations evaluate a candidate [`Item`] and report every problem
//! they find as data. A caller holding several validators can use
//! [`ItemValidator::supports`] to dispatch by object name; there is no
//! global registration mechanism.

use crate::{Item, ValidationOutcome};

/// Core trait for validating item records.
///
/// Validation never fails as an operation: an invalid record produces a
/// non-empty [`ValidationOutcome`], and a valid one produces an empty
/// outcome. Implementations must be pure with respect to the item — the
/// record is taken by shared reference and never mutated — and must be
/// callable concurrently, hence the `Send + Sync` bound.
///
/// # Example
///
/// ```rust
/// use formcheck_core::{Item, ItemValidator, ValidationOutcome, Violation};
///
/// struct NamePolice;
///
/// impl ItemValidator for NamePolice {
///     fn validate(&self, item: &Item) -> ValidationOutcome {
///         let mut outcome = ValidationOutcome::new();
///         if !item.has_name() {
///             outcome.push(Violation::field("itemName", "required"));
///         }
///         outcome
///     }
/// }
///
/// let outcome = NamePolice.validate(&Item::new());
/// assert_eq!(outcome.len(), 1);
/// ```
pub trait ItemValidator: Send + Sync {
    /// Evaluates the item and returns every violation found.
    ///
    /// An empty outcome means the item passed all rules.
    fn validate(&self, item: &Item) -> ValidationOutcome;

    /// Whether this validator applies to the given object name.
    ///
    /// Default implementation accepts [`Item::OBJECT_NAME`].
    fn supports(&self, object_name: &str) -> bool {
        object_name == Item::OBJECT_NAME
    }
}

//! Rule evaluation engine.
//!
//! The engine walks a [`RuleTable`] over a candidate item and collects every
//! violation. There is no short-circuiting between rules: the user sees all
//! problems from one submission, not just the first.

use crate::{RuleTable, table::ItemField};
use formcheck_core::{Item, ItemValidator, MessageArg, ValidationOutcome, Violation};
use formcheck_messages::MessageCodesResolver;
use tracing::debug;

/// Evaluates a rule table against item records.
///
/// Construction wires in a [`MessageCodesResolver`], so every emitted
/// violation already carries its resolved fallback chain and the caller can
/// render messages without re-deriving context. The engine holds no mutable
/// state; `validate` is pure with respect to the item and safe to call from
/// any number of threads.
///
/// # Example
///
/// ```rust
/// use formcheck_core::ItemBuilder;
/// use formcheck_rules::RuleEngine;
///
/// let engine = RuleEngine::new();
/// let item = ItemBuilder::new().price(999).quantity(20).build();
///
/// let outcome = engine.validate(&item);
/// let price_violation = outcome.field_violations("price").next().unwrap();
/// assert_eq!(price_violation.code, "range");
/// assert_eq!(price_violation.resolved_codes[0], "range.item.price");
/// ```
#[derive(Debug, Clone)]
pub struct RuleEngine {
    table: RuleTable,
    resolver: MessageCodesResolver,
}

impl RuleEngine {
    /// Creates an engine over the canonical item rule set.
    pub fn new() -> Self {
        Self::with_table(RuleTable::standard())
    }

    /// Creates an engine over a caller-supplied rule table.
    ///
    /// A blank object name (possible in a hand-edited table file) is
    /// normalized to the default so code chains stay well-formed.
    pub fn with_table(mut table: RuleTable) -> Self {
        if table.object_name.trim().is_empty() {
            table.object_name = Item::OBJECT_NAME.to_string();
        }
        Self {
            table,
            resolver: MessageCodesResolver::new(),
        }
    }

    /// The rule table this engine evaluates.
    pub fn table(&self) -> &RuleTable {
        &self.table
    }

    /// Evaluates every rule and returns the collected violations.
    ///
    /// An empty outcome means the item passed. The item is never mutated,
    /// and repeated calls on the same item yield identical outcomes.
    pub fn validate(&self, item: &Item) -> ValidationOutcome {
        let mut outcome = ValidationOutcome::new();

        for rule in &self.table.field_rules {
            if let Some(arguments) = rule.check(item) {
                outcome.push(self.field_violation(rule.code(), rule.field(), arguments));
            }
        }

        for rule in &self.table.record_rules {
            if let Some(arguments) = rule.check(item) {
                let codes = self
                    .resolver
                    .resolve_record(rule.code(), &self.table.object_name)
                    .expect("rule codes and object names are non-empty");
                outcome.push(
                    Violation::record(rule.code())
                        .with_arguments(arguments)
                        .with_resolved_codes(codes),
                );
            }
        }

        debug!(
            object = %self.table.object_name,
            violations = outcome.len(),
            "rule evaluation complete"
        );
        outcome
    }

    fn field_violation(
        &self,
        code: &str,
        field: ItemField,
        arguments: Vec<MessageArg>,
    ) -> Violation {
        let codes = self
            .resolver
            .resolve_field(code, &self.table.object_name, field.name(), field.type_name())
            .expect("rule codes, field names and object names are non-empty");
        Violation::field(field.name(), code)
            .with_arguments(arguments)
            .with_resolved_codes(codes)
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemValidator for RuleEngine {
    fn validate(&self, item: &Item) -> ValidationOutcome {
        RuleEngine::validate(self, item)
    }

    fn supports(&self, object_name: &str) -> bool {
        object_name == self.table.object_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formcheck_core::ItemBuilder;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_valid_item_produces_empty_outcome() {
        let engine = RuleEngine::new();
        let item = ItemBuilder::new().name("notebook").price(1200).quantity(20).build();

        assert!(engine.validate(&item).is_valid());
    }

    #[test]
    fn test_all_rules_run_without_short_circuit() {
        let engine = RuleEngine::new();
        let item = Item::new();

        // Name, price and quantity all fail; the record rule is skipped
        // because its operands are absent.
        let outcome = engine.validate(&item);
        assert_eq!(outcome.len(), 3);

        let codes: Vec<&str> = outcome.violations().iter().map(|v| v.code.as_str()).collect();
        assert_eq!(codes, vec!["required", "range", "max"]);
    }

    #[test]
    fn test_violations_carry_resolved_chains() {
        let engine = RuleEngine::new();
        let item = ItemBuilder::new().price(999).quantity(20).build();

        let outcome = engine.validate(&item);
        let name = outcome.field_violations("itemName").next().unwrap();
        assert_eq!(
            name.resolved_codes,
            vec![
                "required.item.itemName",
                "required.itemName",
                "required.String",
                "required"
            ]
        );

        let price = outcome.field_violations("price").next().unwrap();
        assert_eq!(
            price.resolved_codes,
            vec!["range.item.price", "range.price", "range.i32", "range"]
        );
    }

    #[test]
    fn test_record_violation_for_low_total() {
        let engine = RuleEngine::new();
        let item = ItemBuilder::new().name("eraser").price(1000).quantity(5).build();

        let outcome = engine.validate(&item);
        assert_eq!(outcome.len(), 1);

        let violation = outcome.record_violations().next().unwrap();
        assert_eq!(violation.code, "totalPriceMin");
        assert_eq!(violation.arguments, vec![10_000.into(), 5_000.into()]);
        assert_eq!(
            violation.resolved_codes,
            vec!["totalPriceMin.item", "totalPriceMin"]
        );
    }

    #[test]
    fn test_validate_is_idempotent() {
        let engine = RuleEngine::new();
        let item = ItemBuilder::new().name(" ").price(50).quantity(-3).build();

        assert_eq!(engine.validate(&item), engine.validate(&item));
    }

    #[test]
    fn test_blank_object_name_is_normalized() {
        let engine = RuleEngine::with_table(RuleTable::new("  "));
        assert_eq!(engine.table().object_name, "item");
        assert!(engine.supports("item"));
    }
}

//! Declarative validation rules for item records.
//!
//! This module replaces hand-written per-field `if` chains with a rule
//! table: each rule names the field it inspects, its bounds, and the
//! symbolic code it reports under. The engine evaluates the table, so
//! tightening a bound is a data change, not a code change.

use formcheck_core::{Item, MessageArg};
use serde::{Deserialize, Serialize};

/// Lower price bound in the canonical rule set.
pub const PRICE_MIN: i32 = 1_000;
/// Upper price bound in the canonical rule set.
pub const PRICE_MAX: i32 = 1_000_000;
/// Lower quantity bound in the canonical rule set.
pub const QUANTITY_MIN: i32 = 0;
/// Upper quantity bound in the canonical rule set.
pub const QUANTITY_MAX: i32 = 9_999;
/// Minimum accepted `price * quantity` total in the canonical rule set.
pub const TOTAL_MIN: i64 = 10_000;

/// Fields of an [`Item`] that rules can address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ItemField {
    /// The display name
    ItemName,
    /// The unit price
    Price,
    /// The ordered quantity
    Quantity,
}

impl ItemField {
    /// Wire-level field name, as used in violations and message codes.
    pub fn name(&self) -> &'static str {
        match self {
            ItemField::ItemName => "itemName",
            ItemField::Price => "price",
            ItemField::Quantity => "quantity",
        }
    }

    /// Declared type name, used as the third entry of a field code chain.
    pub fn type_name(&self) -> &'static str {
        match self {
            ItemField::ItemName => "String",
            ItemField::Price | ItemField::Quantity => "i32",
        }
    }

    /// Text content of the field, for text fields.
    pub fn text<'a>(&self, item: &'a Item) -> Option<&'a str> {
        match self {
            ItemField::ItemName => item.item_name.as_deref(),
            ItemField::Price | ItemField::Quantity => None,
        }
    }

    /// Numeric content of the field, for numeric fields.
    pub fn number(&self, item: &Item) -> Option<i32> {
        match self {
            ItemField::ItemName => None,
            ItemField::Price => item.price,
            ItemField::Quantity => item.quantity,
        }
    }
}

/// A rule evaluated against a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "camelCase")]
pub enum FieldRule {
    /// Text field must contain at least one non-whitespace character.
    /// Reported under code `required` with no arguments.
    Required {
        /// Field under inspection
        field: ItemField,
    },

    /// Numeric field must be present and within `[min, max]`.
    /// Reported under code `range` with arguments `[min, max]`.
    Range {
        /// Field under inspection
        field: ItemField,
        /// Minimum value (inclusive)
        min: i32,
        /// Maximum value (inclusive)
        max: i32,
    },

    /// Numeric field must be present and within `[min, max]`.
    /// Reported under code `max` with arguments `[min, max]`.
    Max {
        /// Field under inspection
        field: ItemField,
        /// Minimum value (inclusive)
        min: i32,
        /// Maximum value (inclusive)
        max: i32,
    },
}

impl FieldRule {
    /// The symbolic code this rule reports under.
    pub fn code(&self) -> &'static str {
        match self {
            FieldRule::Required { .. } => "required",
            FieldRule::Range { .. } => "range",
            FieldRule::Max { .. } => "max",
        }
    }

    /// The field this rule inspects.
    pub fn field(&self) -> ItemField {
        match self {
            FieldRule::Required { field }
            | FieldRule::Range { field, .. }
            | FieldRule::Max { field, .. } => *field,
        }
    }

    /// Evaluates the rule against an item.
    ///
    /// Returns `Some(arguments)` when the rule is violated, `None` when the
    /// field passes. A missing value violates every field rule.
    pub fn check(&self, item: &Item) -> Option<Vec<MessageArg>> {
        match self {
            FieldRule::Required { field } => {
                let blank = field
                    .text(item)
                    .is_none_or(|text| text.trim().is_empty());
                blank.then(Vec::new)
            }
            FieldRule::Range { field, min, max } | FieldRule::Max { field, min, max } => {
                let out_of_bounds = field
                    .number(item)
                    .is_none_or(|value| value < *min || value > *max);
                out_of_bounds.then(|| vec![(*min).into(), (*max).into()])
            }
        }
    }
}

/// A cross-field rule evaluated against the whole record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "camelCase")]
pub enum RecordRule {
    /// The widened `price * quantity` total must reach `min`.
    /// Only evaluated when both operands are present; reported under code
    /// `totalPriceMin` with arguments `[min, total]`.
    TotalMin {
        /// Minimum accepted total
        min: i64,
    },
}

impl RecordRule {
    /// The symbolic code this rule reports under.
    pub fn code(&self) -> &'static str {
        match self {
            RecordRule::TotalMin { .. } => "totalPriceMin",
        }
    }

    /// Evaluates the rule against an item.
    ///
    /// Returns `Some(arguments)` when violated. Skips evaluation (returns
    /// `None`) when an operand field is absent, since the per-field rules
    /// already report that.
    pub fn check(&self, item: &Item) -> Option<Vec<MessageArg>> {
        match self {
            RecordRule::TotalMin { min } => {
                let total = item.total_price()?;
                (total < *min).then(|| vec![(*min).into(), total.into()])
            }
        }
    }
}

/// An ordered set of rules for one record type.
///
/// # Example
///
/// ```rust
/// use formcheck_rules::{FieldRule, ItemField, RuleTable};
///
/// let table = RuleTable::new("item")
///     .field_rule(FieldRule::Required { field: ItemField::ItemName })
///     .field_rule(FieldRule::Range { field: ItemField::Price, min: 1, max: 100 });
///
/// assert_eq!(table.field_rules.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleTable {
    /// Object name used when composing message codes
    #[serde(default = "default_object_name")]
    pub object_name: String,

    /// Field-level rules, in evaluation order
    #[serde(default)]
    pub field_rules: Vec<FieldRule>,

    /// Record-level rules, evaluated after the field rules
    #[serde(default)]
    pub record_rules: Vec<RecordRule>,
}

fn default_object_name() -> String {
    Item::OBJECT_NAME.to_string()
}

impl RuleTable {
    /// Creates an empty table for the given object name.
    pub fn new(object_name: impl Into<String>) -> Self {
        Self {
            object_name: object_name.into(),
            field_rules: Vec::new(),
            record_rules: Vec::new(),
        }
    }

    /// The canonical item rule set: required name, price in
    /// `[1000, 1000000]`, quantity in `[0, 9999]`, total of at least 10000.
    pub fn standard() -> Self {
        Self::new(Item::OBJECT_NAME)
            .field_rule(FieldRule::Required {
                field: ItemField::ItemName,
            })
            .field_rule(FieldRule::Range {
                field: ItemField::Price,
                min: PRICE_MIN,
                max: PRICE_MAX,
            })
            .field_rule(FieldRule::Max {
                field: ItemField::Quantity,
                min: QUANTITY_MIN,
                max: QUANTITY_MAX,
            })
            .record_rule(RecordRule::TotalMin { min: TOTAL_MIN })
    }

    /// Appends a field rule.
    pub fn field_rule(mut self, rule: FieldRule) -> Self {
        self.field_rules.push(rule);
        self
    }

    /// Appends a record rule.
    pub fn record_rule(mut self, rule: RecordRule) -> Self {
        self.record_rules.push(rule);
        self
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::standard()
    }
}

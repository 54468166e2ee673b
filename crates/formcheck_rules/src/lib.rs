//! # Formcheck Rules
//!
//! Declarative rule table and evaluation engine for item validation.
//!
//! Rules are data, not code: a [`RuleTable`] lists field-level and
//! record-level rules, and the [`RuleEngine`] evaluates all of them against
//! a candidate item, producing a [`formcheck_core::ValidationOutcome`]. The
//! canonical item rules ship as [`RuleTable::standard`]; alternate bound
//! sets can be deserialized from a YAML or TOML file.
//!
//! ## Example
//!
//! ```rust
//! use formcheck_core::ItemBuilder;
//! use formcheck_rules::RuleEngine;
//!
//! let engine = RuleEngine::new();
//!
//! let ok = ItemBuilder::new().name("notebook").price(1200).quantity(20).build();
//! assert!(engine.validate(&ok).is_valid());
//!
//! let cheap = ItemBuilder::new().name("eraser").price(999).quantity(20).build();
//! let outcome = engine.validate(&cheap);
//! assert_eq!(outcome.field_violations("price").count(), 1);
//! ```

pub mod binding;
pub mod engine;
pub mod table;

pub use binding::*;
pub use engine::*;
pub use table::*;

//! # Formcheck Core
//!
//! Core data structures and types for the formcheck validation engine.
//!
//! This crate provides the fundamental building blocks for validating
//! form-style input records and reporting the result in a structured way:
//!
//! - **Item**: the candidate record under validation
//! - **Violation**: a single record- or field-level validation failure,
//!   carrying a symbolic code, message arguments and resolved lookup keys
//! - **ValidationOutcome**: the ordered collection of violations for one
//!   validation pass (empty means the record is valid)
//!
//! ## Example
//!
//! ```rust
//! use formcheck_core::{Item, ValidationOutcome, Violation};
//!
//! let item = Item {
//!     item_name: Some("notebook".to_string()),
//!     price: Some(1200),
//!     quantity: Some(20),
//!     ..Default::default()
//! };
//!
//! let mut outcome = ValidationOutcome::new();
//! assert!(outcome.is_valid());
//!
//! outcome.push(Violation::field("price", "range"));
//! assert!(!outcome.is_valid());
//! ```

pub mod builder;
pub mod item;
pub mod validator;
pub mod violation;

pub use builder::*;
pub use item::*;
pub use validator::*;
pub use violation::*;

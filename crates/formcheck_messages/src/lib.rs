//! # Formcheck Messages
//!
//! Message-code resolution and rendering for validation violations.
//!
//! Two pieces compose here:
//!
//! - [`MessageCodesResolver`] turns a symbolic violation code plus context
//!   (object name, field name, field type) into an ordered chain of catalog
//!   lookup keys, most specific first.
//! - [`MessageCatalog`] holds code → template mappings and renders a
//!   violation into user-facing text by probing its resolved chain in order.
//!
//! ## Example
//!
//! ```rust
//! use formcheck_messages::MessageCodesResolver;
//!
//! let resolver = MessageCodesResolver::new();
//! let codes = resolver
//!     .resolve_field("required", "item", "itemName", "String")
//!     .unwrap();
//!
//! assert_eq!(
//!     codes,
//!     vec!["required.item.itemName", "required.itemName", "required.String", "required"]
//! );
//! ```

pub mod catalog;
pub mod resolver;

pub use catalog::*;
pub use resolver::*;

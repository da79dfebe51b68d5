//! # exml
//!
//! Validation engine for EFL declarative widget trees.
//!
//! Markup describes a tree of widgets with attributes. This crate checks
//! that tree against an API schema as it is built: widget names must resolve
//! to classes, only containers may have children, and attributes must name
//! writable properties whose declared type can represent the given text.
//! Problems are collected as issues; the tree is always built in full.
//!
//! Parsing the markup and loading the API schema are left to the caller.
//!
//! ## Example
//!
//! ```rust
//! use exml::api::{Api, Class, Property};
//! use exml::validators::{TreeBuilder, Validator};
//!
//! let api = Api::new()
//!     .with_class(Class::new("Efl.Ui.Box").with_interface("Efl.IPack"))
//!     .with_class(Class::new("Efl.Ui.Button").with_property(Property::new("Size", "System.Int32")));
//!
//! let validator = Validator::builder().registry(&api).build()?;
//! let mut builder = TreeBuilder::new(&validator);
//! builder.open_widget("Box")?;
//! builder.open_widget("Button")?;
//! builder.set_attribute("Size", "abc")?;
//! builder.close_widget()?;
//! builder.close_widget()?;
//!
//! let report = builder.finish()?;
//! assert_eq!(report.error_count(), 1);
//! assert_eq!(report.tree.len(), 2);
//! # Ok::<(), exml::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod names;
pub mod options;

pub mod api;
pub mod validators;

// Re-exports for convenience
pub use api::{Api, Class, Property, SchemaRegistry, TypeRef, Visibility};
pub use error::{Error, Result};
pub use options::{ValidationOptions, CONTAINER_INTERFACE};
pub use validators::{
    IssueKind, Severity, TreeBuilder, ValidationIssue, ValidationReport, Validator, WidgetId,
    WidgetTree,
};

/// Version of the exml library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

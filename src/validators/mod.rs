//! Widget tree validators
//!
//! This module contains the validation engine: the widget arena, the
//! construction rules, the built-in value types and the issue model.

pub mod builders;
pub mod builtins;
pub mod issues;
pub mod report;
pub mod validation;
pub mod widgets;

// Re-exports
pub use builders::TreeBuilder;
pub use builtins::{is_value_compatible, NumericType, NumericValue};
pub use issues::{IssueKind, Severity, ValidationIssue};
pub use report::{ValidationReport, ValidityStatus};
pub use validation::{Validator, ValidatorBuilder};
pub use widgets::{DepthFirst, Widget, WidgetId, WidgetTree, INDENT_WIDTH};

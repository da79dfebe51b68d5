//! Widget type name handling
//!
//! Markup refers to widget classes either by a bare name (`Button`) or by a
//! fully qualified, dot-separated name (`Efl.Ui.Button`). Bare names live in
//! the toolkit's default namespace.

/// Default namespace for bare widget names
pub const DEFAULT_NAMESPACE: &str = "Efl.Ui";

/// Separator between namespace segments
pub const NAMESPACE_SEPARATOR: char = '.';

/// Check if a name carries a namespace
pub fn is_qualified(name: &str, separator: char) -> bool {
    name.contains(separator)
}

/// Qualify a widget name, prefixing `namespace` when the name has no separator.
///
/// Names that already contain the separator are returned verbatim.
pub fn qualify_name(name: &str, namespace: &str, separator: char) -> String {
    if is_qualified(name, separator) {
        name.to_string()
    } else {
        format!("{}{}{}", namespace, separator, name)
    }
}

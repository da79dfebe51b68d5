//! Validation options
//!
//! Policy knobs for the validation engine. The defaults reproduce the
//! toolkit's reference rules; the presets trade strictness for noise.

use crate::names::{DEFAULT_NAMESPACE, NAMESPACE_SEPARATOR};
use crate::validators::Severity;

/// Interface a class implements to accept child widgets
pub const CONTAINER_INTERFACE: &str = "Efl.IPack";

/// Validation engine configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOptions {
    /// Namespace prefixed to bare widget names before lookup
    pub default_namespace: String,

    /// Interface marking a class as a container
    pub container_interface: String,

    /// Separator between namespace segments
    pub namespace_separator: char,

    /// Severity of the issue raised when an attribute is assigned twice
    // TODO: settle with the markup authors whether overwrites are legal
    pub duplicate_attribute_severity: Severity,

    /// Raise an issue for attributes on widgets whose type did not resolve
    pub report_unresolved_attributes: bool,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            default_namespace: DEFAULT_NAMESPACE.to_string(),
            container_interface: CONTAINER_INTERFACE.to_string(),
            namespace_separator: NAMESPACE_SEPARATOR,
            duplicate_attribute_severity: Severity::Error,
            report_unresolved_attributes: false,
        }
    }
}

impl ValidationOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create strict options (attributes of unknown types are reported too)
    pub fn strict() -> Self {
        Self {
            report_unresolved_attributes: true,
            ..Self::default()
        }
    }

    /// Create lenient options (repeated attributes are only a warning)
    pub fn lenient() -> Self {
        Self {
            duplicate_attribute_severity: Severity::Warning,
            ..Self::default()
        }
    }

    /// Set the default namespace
    pub fn with_default_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.default_namespace = namespace.into();
        self
    }

    /// Set the container interface
    pub fn with_container_interface(mut self, interface: impl Into<String>) -> Self {
        self.container_interface = interface.into();
        self
    }

    /// Set the namespace separator
    pub fn with_namespace_separator(mut self, separator: char) -> Self {
        self.namespace_separator = separator;
        self
    }

    /// Set the duplicate attribute severity
    pub fn with_duplicate_attribute_severity(mut self, severity: Severity) -> Self {
        self.duplicate_attribute_severity = severity;
        self
    }

    /// Enable or disable reporting of attributes on unresolved widgets
    pub fn with_report_unresolved_attributes(mut self, report: bool) -> Self {
        self.report_unresolved_attributes = report;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = ValidationOptions::default();
        assert_eq!(options.default_namespace, "Efl.Ui");
        assert_eq!(options.container_interface, "Efl.IPack");
        assert_eq!(options.namespace_separator, '.');
        assert_eq!(options.duplicate_attribute_severity, Severity::Error);
        assert!(!options.report_unresolved_attributes);
    }

    #[test]
    fn test_presets() {
        assert!(ValidationOptions::strict().report_unresolved_attributes);
        assert_eq!(
            ValidationOptions::lenient().duplicate_attribute_severity,
            Severity::Warning
        );
    }

    #[test]
    fn test_builder_setters() {
        let options = ValidationOptions::new()
            .with_default_namespace("My.Ui")
            .with_container_interface("My.IContainer")
            .with_namespace_separator(':');
        assert_eq!(options.default_namespace, "My.Ui");
        assert_eq!(options.container_interface, "My.IContainer");
        assert_eq!(options.namespace_separator, ':');
    }
}

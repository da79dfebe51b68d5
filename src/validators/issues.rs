//! Validation issues
//!
//! Every rule violation the engine finds becomes a [`ValidationIssue`]. Issues
//! never stop tree construction; they are collected in discovery order and
//! handed to whoever reports them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How serious an issue is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum Severity {
    /// Informational note
    Info,
    /// Suspicious but legal markup
    Warning,
    /// Markup the toolkit will reject
    Error,
}

impl Severity {
    /// Get the severity as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which rule produced an issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum IssueKind {
    /// Widget name not found in the API
    UnknownType,
    /// Attribute assigned more than once
    DuplicateAttribute,
    /// Attribute does not name a property of the class
    UnknownProperty,
    /// Property exists but cannot be set from markup
    ReadOnlyProperty,
    /// Value text not representable in the property type
    IncompatibleValue,
    /// Child added to a widget that cannot hold children
    NotAContainer,
    /// Attribute set on a widget whose type did not resolve
    UnresolvedOwner,
}

/// A single discovered problem
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Short title
    pub title: String,
    /// Human-readable description
    pub description: String,
    /// Severity
    pub severity: Severity,
    /// Rule that fired
    pub kind: IssueKind,
    /// Widget path the issue refers to, e.g. `Box/Button`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl ValidationIssue {
    /// Create a new issue
    pub fn new(
        kind: IssueKind,
        severity: Severity,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity,
            kind,
            path: None,
        }
    }

    /// Create an error issue
    pub fn error(kind: IssueKind, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(kind, Severity::Error, title, description)
    }

    /// Set the widget path
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Check if this issue is an error
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    // Constructors for each rule, so messages stay consistent.

    pub(crate) fn unknown_type(name: &str, namespace: &str) -> Self {
        Self::error(
            IssueKind::UnknownType,
            format!("Unknown type {}", name),
            format!("Type could not be found in the {} namespace", namespace),
        )
    }

    pub(crate) fn duplicate_attribute(name: &str, severity: Severity) -> Self {
        Self::new(
            IssueKind::DuplicateAttribute,
            severity,
            format!("Duplicate attribute {}", name),
            "Attribute was already set on this widget",
        )
    }

    pub(crate) fn unknown_property(name: &str, class: &str) -> Self {
        Self::error(
            IssueKind::UnknownProperty,
            format!("Unknown property {}", name),
            format!("Type {} has no property named {}", class, name),
        )
    }

    pub(crate) fn read_only_property(name: &str, class: &str) -> Self {
        Self::error(
            IssueKind::ReadOnlyProperty,
            format!("Property {} is not writable", name),
            format!("Property {} of {} has no public setter", name, class),
        )
    }

    pub(crate) fn incompatible_value(name: &str, value: &str, type_name: &str) -> Self {
        Self::error(
            IssueKind::IncompatibleValue,
            format!("Invalid value for {}", name),
            format!("'{}' is not a valid {} value", value, type_name),
        )
    }

    pub(crate) fn not_a_container(name: &str) -> Self {
        Self::error(
            IssueKind::NotAContainer,
            format!("Type {} is not a container", name),
            "It can't have children",
        )
    }

    pub(crate) fn unresolved_owner(name: &str, owner: &str) -> Self {
        Self::new(
            IssueKind::UnresolvedOwner,
            Severity::Warning,
            format!("Cannot validate attribute {}", name),
            format!("Owning type {} is unknown", owner),
        )
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.severity, self.title, self.description)?;
        if let Some(ref path) = self.path {
            write!(f, " (at {})", path)?;
        }
        Ok(())
    }
}

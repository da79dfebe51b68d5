//! Validation report
//!
//! The outcome of validating a whole document: the tree that was built and
//! every issue found while building it.

use super::issues::{IssueKind, Severity, ValidationIssue};
use super::widgets::WidgetTree;

/// Validity status of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidityStatus {
    /// No error issues
    Valid,
    /// At least one error issue
    Invalid,
    /// Nothing was validated
    NotKnown,
}

/// Tree plus accumulated issues
#[derive(Debug, Clone)]
pub struct ValidationReport<'a> {
    /// The validated tree
    pub tree: WidgetTree<'a>,
    /// Issues in discovery order
    pub issues: Vec<ValidationIssue>,
}

impl<'a> ValidationReport<'a> {
    /// Create a report
    pub fn new(tree: WidgetTree<'a>, issues: Vec<ValidationIssue>) -> Self {
        Self { tree, issues }
    }

    /// Check if no error issue was found
    pub fn is_valid(&self) -> bool {
        !self.issues.iter().any(ValidationIssue::is_error)
    }

    /// Validity of the document
    pub fn validity(&self) -> ValidityStatus {
        if self.tree.is_empty() {
            ValidityStatus::NotKnown
        } else if self.is_valid() {
            ValidityStatus::Valid
        } else {
            ValidityStatus::Invalid
        }
    }

    /// Number of issues with the given severity
    pub fn count(&self, severity: Severity) -> usize {
        self.issues.iter().filter(|i| i.severity == severity).count()
    }

    /// Number of error issues
    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    /// Number of warning issues
    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    /// Issues produced by one rule
    pub fn issues_of_kind(&self, kind: IssueKind) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(move |i| i.kind == kind)
    }
}

//! Tree builder
//!
//! Replays the events a markup parser produces, in document order, on top of
//! a [`Validator`]: open a widget, set attributes on it, close it. Closing a
//! widget links it into its parent. Each call returns its own issues and the
//! builder keeps the running list for the final [`ValidationReport`].

use super::issues::ValidationIssue;
use super::report::ValidationReport;
use super::validation::Validator;
use super::widgets::{WidgetId, WidgetTree};
use crate::error::{Error, Result};

/// Incremental, event-driven tree construction
#[derive(Debug)]
pub struct TreeBuilder<'v, 'a> {
    validator: &'v Validator<'a>,
    tree: WidgetTree<'a>,
    open: Vec<WidgetId>,
    root: Option<WidgetId>,
    issues: Vec<ValidationIssue>,
}

impl<'v, 'a> TreeBuilder<'v, 'a> {
    /// Create a builder for an empty tree
    pub fn new(validator: &'v Validator<'a>) -> Self {
        Self {
            validator,
            tree: WidgetTree::new(),
            open: Vec::new(),
            root: None,
            issues: Vec::new(),
        }
    }

    /// Open a widget under the innermost open widget
    pub fn open_widget(&mut self, name: &str) -> Result<Vec<ValidationIssue>> {
        let parent = self.open.last().copied();
        if parent.is_none() {
            if let Some(root) = self.root.and_then(|id| self.tree.get(id)) {
                return Err(Error::MultipleRoots(root.name().to_string()));
            }
        }

        let (id, issues) = self.validator.create_widget(&mut self.tree, name, parent)?;
        if parent.is_none() {
            self.root = Some(id);
        }
        self.open.push(id);
        Ok(self.record(issues))
    }

    /// Set an attribute on the innermost open widget
    pub fn set_attribute(&mut self, name: &str, value: &str) -> Result<Vec<ValidationIssue>> {
        let current = self.current()?;
        let issues = self
            .validator
            .add_attribute(&mut self.tree, current, name, value)?;
        Ok(self.record(issues))
    }

    /// Close the innermost open widget and link it into its parent
    pub fn close_widget(&mut self) -> Result<Vec<ValidationIssue>> {
        let child = self.open.pop().ok_or(Error::NoOpenWidget)?;
        let issues = match self.tree.parent(child) {
            Some(parent) => self.validator.add_child(&mut self.tree, parent, child)?,
            None => Vec::new(),
        };
        Ok(self.record(issues))
    }

    /// Innermost open widget
    pub fn current(&self) -> Result<WidgetId> {
        self.open.last().copied().ok_or(Error::NoOpenWidget)
    }

    /// Number of widgets still open
    pub fn depth(&self) -> usize {
        self.open.len()
    }

    /// Tree built so far
    pub fn tree(&self) -> &WidgetTree<'a> {
        &self.tree
    }

    /// Issues found so far
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    /// Finish building; every opened widget must have been closed
    pub fn finish(self) -> Result<ValidationReport<'a>> {
        if !self.open.is_empty() {
            return Err(Error::UnclosedWidgets(self.open.len()));
        }
        tracing::debug!(
            widgets = self.tree.len(),
            issues = self.issues.len(),
            "finished widget tree"
        );
        Ok(ValidationReport::new(self.tree, self.issues))
    }

    fn record(&mut self, issues: Vec<ValidationIssue>) -> Vec<ValidationIssue> {
        self.issues.extend(issues.iter().cloned());
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Api, Class, Property};
    use crate::validators::issues::IssueKind;

    fn api() -> Api {
        Api::new()
            .with_class(Class::new("Efl.Ui.Box").with_interface("Efl.IPack"))
            .with_class(
                Class::new("Efl.Ui.Button").with_property(Property::new("Size", "System.Int32")),
            )
    }

    #[test]
    fn test_build_nested_tree() {
        let api = api();
        let validator = Validator::new(&api);
        let mut builder = TreeBuilder::new(&validator);

        assert!(builder.open_widget("Box").unwrap().is_empty());
        assert!(builder.open_widget("Button").unwrap().is_empty());
        assert_eq!(builder.depth(), 2);
        assert!(builder.set_attribute("Size", "3").unwrap().is_empty());
        assert!(builder.close_widget().unwrap().is_empty());
        assert!(builder.close_widget().unwrap().is_empty());

        let report = builder.finish().unwrap();
        assert!(report.is_valid());
        let root = report.tree.root().unwrap();
        assert_eq!(report.tree.get(root).unwrap().children().len(), 1);
    }

    #[test]
    fn test_issues_accumulate() {
        let api = api();
        let validator = Validator::new(&api);
        let mut builder = TreeBuilder::new(&validator);

        builder.open_widget("Button").unwrap();
        builder.set_attribute("Size", "big").unwrap();
        let issues = builder.open_widget("Ghost").unwrap();
        assert_eq!(issues[0].kind, IssueKind::UnknownType);
        let issues = builder.close_widget().unwrap();
        assert_eq!(issues[0].kind, IssueKind::NotAContainer);
        builder.close_widget().unwrap();

        let kinds: Vec<_> = builder.issues().iter().map(|i| i.kind).collect();
        assert_eq!(
            kinds,
            vec![
                IssueKind::IncompatibleValue,
                IssueKind::UnknownType,
                IssueKind::NotAContainer,
            ]
        );
        let report = builder.finish().unwrap();
        assert_eq!(report.tree.len(), 2);
        assert_eq!(report.error_count(), 3);
    }

    #[test]
    fn test_protocol_errors() {
        let api = api();
        let validator = Validator::new(&api);
        let mut builder = TreeBuilder::new(&validator);

        assert!(matches!(builder.set_attribute("Size", "1"), Err(Error::NoOpenWidget)));
        assert!(matches!(builder.close_widget(), Err(Error::NoOpenWidget)));

        builder.open_widget("Box").unwrap();
        builder.close_widget().unwrap();
        assert!(matches!(builder.open_widget("Box"), Err(Error::MultipleRoots(_))));
        assert_eq!(builder.tree().len(), 1);
    }

    #[test]
    fn test_finish_with_open_widgets() {
        let api = api();
        let validator = Validator::new(&api);
        let mut builder = TreeBuilder::new(&validator);
        builder.open_widget("Box").unwrap();
        builder.open_widget("Button").unwrap();
        builder.close_widget().unwrap();
        assert!(matches!(builder.finish(), Err(Error::UnclosedWidgets(1))));
    }
}

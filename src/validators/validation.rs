//! Widget validation rules
//!
//! [`Validator`] applies the three construction rules to a [`WidgetTree`]:
//! name resolution when a widget is created, attribute checks when an
//! attribute is assigned, and the container check when a child is linked.
//! Every rule mutates the tree first and then reports what it found, so an
//! invalid document still yields a complete tree and the full issue list.

use super::builtins::is_value_compatible;
use super::issues::ValidationIssue;
use super::widgets::{Widget, WidgetId, WidgetTree};
use crate::api::SchemaRegistry;
use crate::error::{Error, Result};
use crate::names::qualify_name;
use crate::options::ValidationOptions;
use std::fmt;

/// Validation engine bound to one schema registry
#[derive(Clone)]
pub struct Validator<'a> {
    registry: &'a dyn SchemaRegistry,
    options: ValidationOptions,
}

impl fmt::Debug for Validator<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl<'a> Validator<'a> {
    /// Create a validator with default options
    pub fn new(registry: &'a dyn SchemaRegistry) -> Self {
        Self::with_options(registry, ValidationOptions::default())
    }

    /// Create a validator with explicit options
    pub fn with_options(registry: &'a dyn SchemaRegistry, options: ValidationOptions) -> Self {
        Self { registry, options }
    }

    /// Start building a validator
    pub fn builder() -> ValidatorBuilder<'a> {
        ValidatorBuilder::default()
    }

    /// Active options
    pub fn options(&self) -> &ValidationOptions {
        &self.options
    }

    /// Bound registry
    pub fn registry(&self) -> &'a dyn SchemaRegistry {
        self.registry
    }

    /// Create a widget named `name` under `parent` and resolve its class.
    ///
    /// The widget is not linked into the parent's children; that happens in
    /// [`Validator::add_child`]. An unknown name yields one error issue and a
    /// widget with no class that is not a container.
    pub fn create_widget(
        &self,
        tree: &mut WidgetTree<'a>,
        name: &str,
        parent: Option<WidgetId>,
    ) -> Result<(WidgetId, Vec<ValidationIssue>)> {
        if let Some(parent) = parent {
            check_id(tree, parent)?;
        }

        let mut issues = Vec::new();
        let qualified = qualify_name(
            name,
            &self.options.default_namespace,
            self.options.namespace_separator,
        );
        let class = self.registry.find_class(&qualified);

        let is_container = match class {
            Some(class) => {
                let is_container = class.implements(&self.options.container_interface);
                tracing::debug!(widget = name, class = %class.name, is_container, "resolved widget class");
                is_container
            }
            None => {
                tracing::debug!(widget = name, qualified = %qualified, "unknown widget type");
                issues.push(ValidationIssue::unknown_type(
                    name,
                    &self.options.default_namespace,
                ));
                false
            }
        };

        let id = tree.insert(Widget::new(name, qualified, parent, class, is_container));
        let path = tree.path(id);
        Ok((id, with_path(issues, &path)))
    }

    /// Assign attribute `name` on `widget`, then check the assignment.
    ///
    /// The value is stored even when a check fails. The checks are
    /// independent and each may add an issue: repeated assignment, unknown
    /// property, read-only property, and value text incompatible with the
    /// property type. Property checks are skipped for widgets whose class did
    /// not resolve unless the options ask for an issue in that case.
    pub fn add_attribute(
        &self,
        tree: &mut WidgetTree<'a>,
        widget: WidgetId,
        name: &str,
        value: &str,
    ) -> Result<Vec<ValidationIssue>> {
        let node = tree
            .get_mut(widget)
            .ok_or(Error::UnknownWidget(widget.index()))?;
        let previous = node.set_attribute(name, value);
        let class = node.resolved_class();
        let owner = node.name().to_string();

        let mut issues = Vec::new();

        if previous.is_some() {
            issues.push(ValidationIssue::duplicate_attribute(
                name,
                self.options.duplicate_attribute_severity,
            ));
        }

        match class {
            Some(class) => match class.property(name) {
                Some(property) => {
                    tracing::trace!(
                        widget = %owner,
                        attribute = name,
                        ty = %property.type_ref.name,
                        "checking attribute"
                    );
                    if !property.is_writable() {
                        issues.push(ValidationIssue::read_only_property(name, &class.name));
                    }
                    if !is_value_compatible(&property.type_ref, value) {
                        issues.push(ValidationIssue::incompatible_value(
                            name,
                            value,
                            &property.type_ref.name,
                        ));
                    }
                }
                None => issues.push(ValidationIssue::unknown_property(name, &class.name)),
            },
            None if self.options.report_unresolved_attributes => {
                issues.push(ValidationIssue::unresolved_owner(name, &owner));
            }
            None => {}
        }

        let path = tree.path(widget);
        Ok(with_path(issues, &path))
    }

    /// Append `child` to the children of `parent`.
    ///
    /// A parent that is not a container yields one issue; the child is
    /// appended anyway so issues further down can still be found.
    pub fn add_child(
        &self,
        tree: &mut WidgetTree<'a>,
        parent: WidgetId,
        child: WidgetId,
    ) -> Result<Vec<ValidationIssue>> {
        check_id(tree, child)?;
        let node = tree
            .get_mut(parent)
            .ok_or(Error::UnknownWidget(parent.index()))?;

        let mut issues = Vec::new();
        if !node.is_container() {
            issues.push(ValidationIssue::not_a_container(node.name()));
        }
        node.push_child(child);

        let path = tree.path(parent);
        Ok(with_path(issues, &path))
    }
}

fn check_id(tree: &WidgetTree<'_>, id: WidgetId) -> Result<()> {
    tree.get(id)
        .map(|_| ())
        .ok_or(Error::UnknownWidget(id.index()))
}

fn with_path(issues: Vec<ValidationIssue>, path: &str) -> Vec<ValidationIssue> {
    issues.into_iter().map(|i| i.with_path(path)).collect()
}

/// Builder binding a registry and options into a [`Validator`]
#[derive(Default)]
pub struct ValidatorBuilder<'a> {
    registry: Option<&'a dyn SchemaRegistry>,
    options: ValidationOptions,
}

impl<'a> ValidatorBuilder<'a> {
    /// Bind the schema registry
    pub fn registry(mut self, registry: &'a dyn SchemaRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Set the options
    pub fn options(mut self, options: ValidationOptions) -> Self {
        self.options = options;
        self
    }

    /// Build the validator; fails if no registry was bound
    pub fn build(self) -> Result<Validator<'a>> {
        let registry = self.registry.ok_or(Error::RegistryNotConfigured)?;
        Ok(Validator::with_options(registry, self.options))
    }
}

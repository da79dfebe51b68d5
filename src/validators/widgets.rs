//! Widget tree
//!
//! Widgets are stored in a flat arena owned by [`WidgetTree`]; parent and
//! child relations are [`WidgetId`] indices. A widget's resolved class is a
//! borrow into the schema registry, so a tree cannot outlive its registry.

use crate::api::Class;
use indexmap::IndexMap;
use std::fmt;

/// Number of spaces per indentation level in tree dumps
pub const INDENT_WIDTH: usize = 4;

/// Handle of a widget inside its tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(pub(crate) usize);

impl WidgetId {
    /// Arena index of the widget
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A node of the validated tree
#[derive(Debug, Clone)]
pub struct Widget<'a> {
    name: String,
    qualified_name: String,
    attributes: IndexMap<String, String>,
    children: Vec<WidgetId>,
    parent: Option<WidgetId>,
    class: Option<&'a Class>,
    is_container: bool,
}

impl<'a> Widget<'a> {
    pub(crate) fn new(
        name: impl Into<String>,
        qualified_name: impl Into<String>,
        parent: Option<WidgetId>,
        class: Option<&'a Class>,
        is_container: bool,
    ) -> Self {
        Self {
            name: name.into(),
            qualified_name: qualified_name.into(),
            attributes: IndexMap::new(),
            children: Vec::new(),
            parent,
            class,
            is_container,
        }
    }

    /// Name as written in the markup
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name after namespace defaulting
    pub fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    /// Attribute values in assignment order
    pub fn attributes(&self) -> &IndexMap<String, String> {
        &self.attributes
    }

    /// Get an attribute value
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(|s| s.as_str())
    }

    /// Child widgets in markup order
    pub fn children(&self) -> &[WidgetId] {
        &self.children
    }

    /// Parent widget, `None` for the root
    pub fn parent(&self) -> Option<WidgetId> {
        self.parent
    }

    /// Class the name resolved to
    pub fn resolved_class(&self) -> Option<&'a Class> {
        self.class
    }

    /// Whether the class can hold children
    pub fn is_container(&self) -> bool {
        self.is_container
    }

    /// Store an attribute, returning the previous value
    pub(crate) fn set_attribute(&mut self, name: &str, value: &str) -> Option<String> {
        self.attributes.insert(name.to_string(), value.to_string())
    }

    pub(crate) fn push_child(&mut self, child: WidgetId) {
        self.children.push(child);
    }
}

/// Arena of widgets forming one tree
#[derive(Debug, Clone, Default)]
pub struct WidgetTree<'a> {
    nodes: Vec<Widget<'a>>,
}

impl<'a> WidgetTree<'a> {
    /// Create an empty tree
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub(crate) fn insert(&mut self, widget: Widget<'a>) -> WidgetId {
        self.nodes.push(widget);
        WidgetId(self.nodes.len() - 1)
    }

    /// Get a widget
    pub fn get(&self, id: WidgetId) -> Option<&Widget<'a>> {
        self.nodes.get(id.0)
    }

    pub(crate) fn get_mut(&mut self, id: WidgetId) -> Option<&mut Widget<'a>> {
        self.nodes.get_mut(id.0)
    }

    /// First widget created without a parent
    pub fn root(&self) -> Option<WidgetId> {
        self.nodes
            .iter()
            .position(|w| w.parent.is_none())
            .map(WidgetId)
    }

    /// Number of widgets
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree has no widgets
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Children of a widget
    pub fn children(&self, id: WidgetId) -> impl Iterator<Item = (WidgetId, &Widget<'a>)> + '_ {
        self.get(id)
            .map(|w| w.children.as_slice())
            .unwrap_or_default()
            .iter()
            .filter_map(move |&child| self.get(child).map(|w| (child, w)))
    }

    /// Parent of a widget
    pub fn parent(&self, id: WidgetId) -> Option<WidgetId> {
        self.get(id).and_then(|w| w.parent)
    }

    /// Number of ancestors of a widget
    pub fn depth(&self, id: WidgetId) -> usize {
        let mut depth = 0;
        let mut current = self.parent(id);
        while let Some(parent) = current {
            depth += 1;
            current = self.parent(parent);
        }
        depth
    }

    /// Names from the root down to a widget, joined by `/`
    pub fn path(&self, id: WidgetId) -> String {
        let mut names = Vec::new();
        let mut current = Some(id);
        while let Some(node) = current.and_then(|i| self.get(i)) {
            names.push(node.name.as_str());
            current = node.parent;
        }
        names.reverse();
        names.join("/")
    }

    /// Depth-first, pre-order walk starting at `id`
    pub fn iter_depth_first(&self, id: WidgetId) -> DepthFirst<'_, 'a> {
        DepthFirst {
            tree: self,
            stack: vec![id],
        }
    }

    /// Dump the subtree under `id`, starting at `indent` levels
    pub fn dump(&self, id: WidgetId, indent: usize) -> String {
        Dump {
            tree: self,
            id,
            indent,
        }
        .to_string()
    }

    fn write_node(&self, f: &mut fmt::Formatter<'_>, id: WidgetId, indent: usize) -> fmt::Result {
        let Some(widget) = self.get(id) else {
            return Ok(());
        };
        let spaces = " ".repeat(INDENT_WIDTH * indent);
        let inner = " ".repeat(INDENT_WIDTH * (indent + 1));

        writeln!(f, "{}Widget: {}", spaces, widget.name)?;
        for (key, value) in &widget.attributes {
            writeln!(f, "{}attrib: {} => {}", inner, key, value)?;
        }
        for &child in &widget.children {
            self.write_node(f, child, indent + 1)?;
        }
        Ok(())
    }
}

struct Dump<'t, 'a> {
    tree: &'t WidgetTree<'a>,
    id: WidgetId,
    indent: usize,
}

impl fmt::Display for Dump<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.tree.write_node(f, self.id, self.indent)
    }
}

impl fmt::Display for WidgetTree<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root() {
            Some(root) => self.write_node(f, root, 0),
            None => Ok(()),
        }
    }
}

/// Iterator returned by [`WidgetTree::iter_depth_first`]
pub struct DepthFirst<'t, 'a> {
    tree: &'t WidgetTree<'a>,
    stack: Vec<WidgetId>,
}

impl<'t, 'a> Iterator for DepthFirst<'t, 'a> {
    type Item = (WidgetId, &'t Widget<'a>);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(id) = self.stack.pop() {
            if let Some(widget) = self.tree.get(id) {
                self.stack.extend(widget.children.iter().rev());
                return Some((id, widget));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_tree() -> (WidgetTree<'static>, WidgetId, WidgetId, WidgetId) {
        let mut tree = WidgetTree::new();
        let root = tree.insert(Widget::new("Box", "Efl.Ui.Box", None, None, true));
        let first = tree.insert(Widget::new("Button", "Efl.Ui.Button", Some(root), None, false));
        let second = tree.insert(Widget::new("Label", "Efl.Ui.Label", Some(root), None, false));
        tree.get_mut(root).unwrap().push_child(first);
        tree.get_mut(root).unwrap().push_child(second);
        (tree, root, first, second)
    }

    #[test]
    fn test_empty_node_dump_is_one_line() {
        let mut tree = WidgetTree::new();
        let id = tree.insert(Widget::new("Box", "Efl.Ui.Box", None, None, false));
        assert_eq!(tree.dump(id, 0), "Widget: Box\n");
        assert_eq!(tree.dump(id, 0).lines().count(), 1);
    }

    #[test]
    fn test_nested_dump() {
        let (mut tree, root, first, _) = sample_tree();
        tree.get_mut(first).unwrap().set_attribute("Size", "10");
        tree.get_mut(first).unwrap().set_attribute("Text", "Ok");

        let expected = "\
Widget: Box
    Widget: Button
        attrib: Size => 10
        attrib: Text => Ok
    Widget: Label
";
        assert_eq!(tree.dump(root, 0), expected);
        assert_eq!(tree.to_string(), expected);
    }

    #[test]
    fn test_dump_with_indent() {
        let (tree, _, first, _) = sample_tree();
        assert_eq!(tree.dump(first, 2), "        Widget: Button\n");
    }

    #[test]
    fn test_attribute_last_write_wins() {
        let (mut tree, root, _, _) = sample_tree();
        let widget = tree.get_mut(root).unwrap();
        assert_eq!(widget.set_attribute("Size", "1"), None);
        assert_eq!(widget.set_attribute("Size", "2"), Some("1".to_string()));
        assert_eq!(widget.attribute("Size"), Some("2"));
        assert_eq!(widget.attributes().len(), 1);
    }

    #[test]
    fn test_traversal() {
        let (tree, root, first, second) = sample_tree();
        assert_eq!(tree.root(), Some(root));
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.parent(first), Some(root));
        assert_eq!(tree.depth(root), 0);
        assert_eq!(tree.depth(second), 1);
        assert_eq!(tree.path(second), "Box/Label");

        let children: Vec<_> = tree.children(root).map(|(id, _)| id).collect();
        assert_eq!(children, vec![first, second]);

        let names: Vec<_> = tree.iter_depth_first(root).map(|(_, w)| w.name()).collect();
        assert_eq!(names, vec!["Box", "Button", "Label"]);
    }

    #[test]
    fn test_empty_tree() {
        let tree = WidgetTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.root(), None);
        assert_eq!(tree.to_string(), "");
        assert_eq!(tree.children(WidgetId(3)).count(), 0);
    }
}

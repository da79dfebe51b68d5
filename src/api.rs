//! API schema model
//!
//! This module defines the read-only catalog of widget classes the engine
//! validates against. Reading the interface-description source is the job of
//! an external loader; it hands the result over as an [`Api`] (built in code
//! or deserialized from JSON) or through its own [`SchemaRegistry`] impl.

use crate::error::Result;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Read-only class lookup used by the validation engine
pub trait SchemaRegistry: Send + Sync {
    /// Find a class by its fully qualified name (exact, case-sensitive)
    fn find_class(&self, name: &str) -> Option<&Class>;
}

/// Member visibility as declared by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Visible to markup
    #[default]
    Public,
    /// Visible to subclasses only
    Protected,
    /// Visible inside the declaring assembly only
    Internal,
    /// Not visible outside the class
    Private,
}

/// Reference to a declared value type, e.g. `System.Int32`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeRef {
    /// Type identifier as spelled by the API
    pub name: String,
}

impl TypeRef {
    /// Create a new type reference
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A class property
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    /// Property name
    pub name: String,
    /// Declared value type
    #[serde(rename = "type")]
    pub type_ref: TypeRef,
    /// Whether the property has a setter
    #[serde(default)]
    pub has_set: bool,
    /// Whether the property has a getter
    #[serde(default)]
    pub has_get: bool,
    /// Visibility of the property
    #[serde(default)]
    pub visibility: Visibility,
}

impl Property {
    /// Create a public read/write property
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_ref: TypeRef::new(type_name),
            has_set: true,
            has_get: true,
            visibility: Visibility::Public,
        }
    }

    /// Create a public read-only property
    pub fn read_only(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            has_set: false,
            ..Self::new(name, type_name)
        }
    }

    /// Set the visibility
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Whether markup may assign this property
    pub fn is_writable(&self) -> bool {
        self.has_set && self.visibility == Visibility::Public
    }
}

/// A widget class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Class {
    /// Fully qualified class name
    pub name: String,
    /// Names of the implemented interfaces
    #[serde(default)]
    pub interfaces: Vec<String>,
    /// Declared properties
    #[serde(default)]
    pub properties: Vec<Property>,
}

impl Class {
    /// Create a class with no interfaces and no properties
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            interfaces: Vec::new(),
            properties: Vec::new(),
        }
    }

    /// Add an implemented interface
    pub fn with_interface(mut self, interface: impl Into<String>) -> Self {
        self.interfaces.push(interface.into());
        self
    }

    /// Add a property
    pub fn with_property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    /// Check if the class implements an interface (exact name match)
    pub fn implements(&self, interface: &str) -> bool {
        self.interfaces.iter().any(|i| i == interface)
    }

    /// Find a property by name; the first declaration wins
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name == name)
    }
}

/// In-memory API catalog keyed by fully qualified class name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ApiDef", into = "ApiDef")]
pub struct Api {
    classes: IndexMap<String, Class>,
}

#[derive(Serialize, Deserialize)]
struct ApiDef {
    #[serde(default)]
    classes: Vec<Class>,
}

impl From<ApiDef> for Api {
    fn from(def: ApiDef) -> Self {
        def.classes.into_iter().collect()
    }
}

impl From<Api> for ApiDef {
    fn from(api: Api) -> Self {
        ApiDef {
            classes: api.classes.into_values().collect(),
        }
    }
}

impl FromIterator<Class> for Api {
    fn from_iter<I: IntoIterator<Item = Class>>(iter: I) -> Self {
        let mut api = Api::new();
        for class in iter {
            api.add_class(class);
        }
        api
    }
}

impl Api {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a catalog from its JSON transport form.
    ///
    /// This is the hand-off format between a schema loader and the engine,
    /// not a loader: reading the interface-description source stays with the
    /// caller.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Register a class; returns false if the name was already taken.
    ///
    /// The first class registered under a name is the one lookups return.
    pub fn add_class(&mut self, class: Class) -> bool {
        if self.classes.contains_key(&class.name) {
            tracing::debug!(class = %class.name, "ignoring duplicate class");
            return false;
        }
        self.classes.insert(class.name.clone(), class);
        true
    }

    /// Builder-style variant of [`Api::add_class`]
    pub fn with_class(mut self, class: Class) -> Self {
        self.add_class(class);
        self
    }

    /// Iterate over classes in registration order
    pub fn classes(&self) -> impl Iterator<Item = &Class> {
        self.classes.values()
    }

    /// Number of registered classes
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl SchemaRegistry for Api {
    fn find_class(&self, name: &str) -> Option<&Class> {
        self.classes.get(name)
    }
}

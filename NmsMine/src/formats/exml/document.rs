//! EXML document structures

use serde::{Deserialize, Serialize};

/// A decoded EXML file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExmlDocument {
    /// The `template` attribute of the `<Data>` root, if present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    /// Top-level properties, in document order.
    #[serde(default)]
    pub properties: Vec<PropertyNode>,
}

/// A single `<Property>` element.
///
/// A node may carry a scalar `value`, nested `children`, or both. Child order
/// is the document order and is significant: indirect values are read from
/// the first child.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyNode {
    /// The `name` attribute.
    pub name: String,
    /// The `value` attribute, `None` if the element has none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Nested properties.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<PropertyNode>,
}

impl ExmlDocument {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The first top-level property.
    ///
    /// Table files wrap all of their entries in one top-level property.
    pub fn root(&self) -> Option<&PropertyNode> {
        self.properties.first()
    }

    /// The entries of a table file (children of the first top-level property).
    pub fn entries(&self) -> &[PropertyNode] {
        self.root().map_or(&[], |root| root.children.as_slice())
    }

    /// Iterate over top-level properties with the given name.
    pub fn find<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a PropertyNode> + 'a {
        self.properties.iter().filter(move |p| p.name == name)
    }
}

impl PropertyNode {
    /// Creates a node with no value and no children.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        PropertyNode {
            name: name.into(),
            value: None,
            children: Vec::new(),
        }
    }

    /// Creates a scalar leaf node.
    #[must_use]
    pub fn with_value(name: impl Into<String>, value: impl Into<String>) -> Self {
        PropertyNode {
            name: name.into(),
            value: Some(value.into()),
            children: Vec::new(),
        }
    }

    /// Builder-style child append.
    #[must_use]
    pub fn child_node(mut self, child: PropertyNode) -> Self {
        self.children.push(child);
        self
    }

    /// The node's value, or `""` when it has none.
    pub fn value_str(&self) -> &str {
        self.value.as_deref().unwrap_or_default()
    }

    /// The first child, if any.
    pub fn first_child(&self) -> Option<&PropertyNode> {
        self.children.first()
    }

    /// The first child with the given name.
    pub fn child(&self, name: &str) -> Option<&PropertyNode> {
        self.children.iter().find(|c| c.name == name)
    }
}

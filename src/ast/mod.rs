//! AST module for hyperspeed markup trees
//!
//! This module provides the node types produced by the builder and consumed by the
//! renderer. Nodes are plain owned values: built once, rendered any number of
//! times, never mutated in between.

// ============================================================================
// IMPORTS
// ============================================================================

use serde::{Deserialize, Serialize};

pub mod json;
pub mod value;

pub use value::{AttributeValue, Properties, PropertyKey, PropertyValue, Scalar, KEY_SEPARATOR};

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// A node of the markup tree.
///
/// Serialized with a `type` discriminant of `ELEMENT` or `TEXT`:
///
/// ```rust
/// use hyperspeed::ast::AstNode;
/// let node = AstNode::text("hello");
/// assert_eq!(node.to_json(), serde_json::json!({ "type": "TEXT", "value": "hello" }));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AstNode {
    #[serde(rename = "ELEMENT")]
    Element(Element),
    #[serde(rename = "TEXT")]
    Text { value: String },
}

/// A markup tag with optional properties and children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub tag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Properties>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<AstNode>>,
}

// ============================================================================
// PUBLIC API IMPLEMENTATION
// ============================================================================

impl Element {
    /// Creates an element with neither properties nor children.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            properties: None,
            children: None,
        }
    }

    /// Sets the properties mapping. An empty mapping is stored as absent.
    pub fn with_properties(mut self, properties: Properties) -> Self {
        self.properties = if properties.is_empty() {
            None
        } else {
            Some(properties)
        };
        self
    }

    pub fn with_children(mut self, children: Vec<AstNode>) -> Self {
        self.children = Some(children);
        self
    }

    /// Children in rendering order; empty when absent.
    pub fn children(&self) -> &[AstNode] {
        self.children.as_deref().unwrap_or(&[])
    }

    pub fn has_properties(&self) -> bool {
        self.properties.as_ref().is_some_and(|p| !p.is_empty())
    }
}

impl AstNode {
    /// Creates a text node.
    pub fn text(value: impl Into<String>) -> Self {
        AstNode::Text {
            value: value.into(),
        }
    }

    /// Creates a bare element node.
    pub fn element(tag: impl Into<String>) -> Self {
        AstNode::Element(Element::new(tag))
    }

    /// Returns the discriminant name used in the serialized form.
    pub fn type_name(&self) -> &'static str {
        match self {
            AstNode::Element(_) => json::ELEMENT,
            AstNode::Text { .. } => json::TEXT,
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            AstNode::Element(element) => Some(element),
            AstNode::Text { .. } => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            AstNode::Text { value } => Some(value),
            AstNode::Element(_) => None,
        }
    }

    /// The serialized interchange form of this tree.
    pub fn to_json(&self) -> serde_json::Value {
        // A tree of strings, numbers and string-keyed maps always serializes.
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

impl From<Element> for AstNode {
    fn from(element: Element) -> Self {
        AstNode::Element(element)
    }
}

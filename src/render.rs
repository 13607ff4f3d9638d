//! # Renderer
//!
//! Depth-first serialization of an [`AstNode`] into HTML text.
//!
//! ## Invariants
//! - Text is emitted verbatim: no escaping, no trimming.
//! - Tag names are lower-cased; attributes keep insertion order.
//! - Rendering is pure: the same tree always renders to the same string.

use indexmap::{IndexMap, IndexSet};

use crate::ast::{AstNode, AttributeValue, Element, Properties, PropertyValue, KEY_SEPARATOR};
use crate::options::RenderOptions;

/// Flattened attribute mapping, ready for emission.
pub type Attributes = IndexMap<String, AttributeValue>;

/// Serializes trees according to a set of [`RenderOptions`].
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    options: RenderOptions,
}

impl Renderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Renders `node` and everything beneath it.
    pub fn render(&self, node: &AstNode) -> String {
        let mut out = String::new();
        self.render_into(node, &mut out);
        out
    }

    fn render_into(&self, node: &AstNode, out: &mut String) {
        match node {
            AstNode::Text { value } => out.push_str(value),
            AstNode::Element(element) => self.render_element(element, out),
        }
    }

    fn render_element(&self, element: &Element, out: &mut String) {
        let tag_name = element.tag.to_lowercase();
        out.push('<');
        out.push_str(&tag_name);
        if let Some(properties) = element.properties.as_ref().filter(|p| !p.is_empty()) {
            out.push(' ');
            out.push_str(&self.attributes_string(properties));
        }
        out.push('>');
        for child in element.children() {
            self.render_into(child, out);
        }
        out.push_str("</");
        out.push_str(&tag_name);
        out.push('>');
    }

    /// `key="value"` pairs joined by single spaces, in flattened order.
    pub fn attributes_string(&self, properties: &Properties) -> String {
        flatten_properties(properties)
            .iter()
            .map(|(key, value)| format!("{}=\"{}\"", key, self.format_value(value)))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Formats one attribute value; sequences are space-joined.
    pub fn format_value(&self, value: &AttributeValue) -> String {
        let parts = value.parts();
        if self.options.dedupe_attribute_values {
            let unique: IndexSet<String> = parts.into_iter().collect();
            unique.into_iter().collect::<Vec<_>>().join(" ")
        } else {
            parts.join(" ")
        }
    }
}

/// Flattens nested property mappings into dash-joined attribute names.
///
/// Nested mappings contribute `key-subkey`, compound keys are joined by `-`,
/// and later identical names overwrite earlier ones while keeping the first
/// position.
///
/// ```rust
/// use hyperspeed::props;
/// use hyperspeed::render::flatten_properties;
/// let flat = flatten_properties(&props! { data: { foo: "x", bar: { baz: 1_i32 } }, id: "a" });
/// let keys: Vec<_> = flat.keys().cloned().collect();
/// assert_eq!(keys, ["data-foo", "data-bar-baz", "id"]);
/// ```
pub fn flatten_properties(properties: &Properties) -> Attributes {
    let mut output = Attributes::with_capacity(properties.len());
    for (key, value) in properties {
        match value {
            PropertyValue::Nested(inner) => {
                for (subkey, subvalue) in flatten_properties(inner) {
                    output.insert(
                        format!("{}{}{}", key.flat(), KEY_SEPARATOR, subkey),
                        subvalue,
                    );
                }
            }
            PropertyValue::Attr(attr) => {
                output.insert(key.flat(), attr.clone());
            }
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{PropertyKey, Scalar};
    use crate::props;

    #[test]
    fn compound_keys_are_dash_joined() {
        let mut props = Properties::new();
        props.insert(PropertyKey::from(vec!["aria", "label"]), PropertyValue::from("x"));
        let flat = flatten_properties(&props);
        assert_eq!(flat.get("aria-label"), Some(&AttributeValue::from("x")));
    }

    #[test]
    fn later_duplicates_overwrite_in_place() {
        let flat = flatten_properties(&props! {
            "data-foo": "first",
            id: "a",
            data: { foo: "second" },
        });
        let pairs: Vec<_> = flat.iter().map(|(k, v)| (k.as_str(), v.to_string())).collect();
        assert_eq!(pairs, [("data-foo", "second".to_string()), ("id", "a".to_string())]);
    }

    #[test]
    fn empty_nested_mapping_contributes_nothing() {
        let flat = flatten_properties(&props! { data: {}, id: "a" });
        assert_eq!(flat.len(), 1);
    }

    #[test]
    fn dedupe_compares_rendered_forms() {
        let value = AttributeValue::List(vec![
            Scalar::from("c1"),
            Scalar::symbol("c1"),
            Scalar::from("c2"),
            Scalar::from("c1"),
        ]);
        assert_eq!(Renderer::default().format_value(&value), "c1 c1 c2 c1");
        let deduping = Renderer::new(RenderOptions::new().dedupe_attribute_values(true));
        assert_eq!(deduping.format_value(&value), "c1 c2");
    }

    #[test]
    fn dedupe_keeps_first_occurrence_order() {
        let value = AttributeValue::List(
            ["b", "a", "b", "c", "a"].into_iter().map(Scalar::from).collect(),
        );
        let deduping = Renderer::new(RenderOptions::new().dedupe_attribute_values(true));
        assert_eq!(deduping.format_value(&value), "b a c");
    }

    #[test]
    fn numbers_render_without_trailing_fraction() {
        let renderer = Renderer::default();
        assert_eq!(renderer.format_value(&AttributeValue::from(1_i32)), "1");
        assert_eq!(renderer.format_value(&AttributeValue::from(2.5)), "2.5");
    }
}

//! Interchange form of the markup tree.
//!
//! Trees arrive here untyped (`serde_json::Value`), so the node discriminant is
//! checked explicitly at every depth. Anything other than `ELEMENT` or `TEXT` is a
//! render error naming the offending node's path.

use serde_json::Value as Json;

use crate::ast::{AstNode, Element, Properties};
use crate::errors::{HyperError, Result, Span};
use crate::hyper_err;

pub const ELEMENT: &str = "ELEMENT";
pub const TEXT: &str = "TEXT";

/// Tag used when an `ELEMENT` node carries none.
pub const DEFAULT_TAG: &str = "div";

/// Parses interchange text into a tree.
///
/// Malformed JSON is a `Parse` error pointing into `text`; a well-formed tree
/// with an unknown discriminant is a `Render` error.
pub fn node_from_str(text: &str) -> Result<AstNode> {
    let value: Json = serde_json::from_str(text).map_err(|e| {
        let offset = offset_of(text, e.line(), e.column());
        hyper_err!(Parse, "invalid AST JSON: {}", e)
            .with_source("ast.json", text, Some(Span { start: offset, end: offset }))
            .with_cause(e)
    })?;
    node_from_value(&value).map_err(|e| e.with_source("ast.json", text, None))
}

/// Converts an untyped tree into an [`AstNode`].
pub fn node_from_value(value: &Json) -> Result<AstNode> {
    convert(value, "root")
}

fn convert(value: &Json, path: &str) -> Result<AstNode> {
    let Json::Object(fields) = value else {
        return Err(unknown_type(path, &format!("a JSON {}", json_kind(value))));
    };
    match fields.get("type") {
        Some(Json::String(kind)) if kind == ELEMENT => convert_element(fields, path),
        Some(Json::String(kind)) if kind == TEXT => Ok(AstNode::text(text_value(fields.get("value")))),
        Some(Json::String(kind)) => Err(unknown_type(path, &format!("`{}`", kind))),
        Some(other) => Err(unknown_type(path, &format!("a JSON {}", json_kind(other)))),
        None => Err(unknown_type(path, "no `type` field")),
    }
}

fn convert_element(fields: &serde_json::Map<String, Json>, path: &str) -> Result<AstNode> {
    let tag = match fields.get("tag") {
        Some(Json::String(tag)) => tag.clone(),
        Some(Json::Null) | None => DEFAULT_TAG.to_string(),
        Some(other) => {
            return Err(hyper_err!(
                Render,
                "{}: element tag must be a string, found a JSON {}",
                path,
                json_kind(other)
            ))
        }
    };
    let mut element = Element::new(tag);

    if let Some(raw) = fields.get("properties").filter(|p| !p.is_null()) {
        let properties: Properties = serde_json::from_value(blank_nulls(raw)).map_err(|e| {
            hyper_err!(Render, "{}: invalid properties: {}", path, e)
                .with_help("property values are strings, numbers, booleans, arrays of those, or nested objects")
                .with_cause(e)
        })?;
        element = element.with_properties(properties);
    }

    match fields.get("children") {
        Some(Json::Array(items)) => {
            let children = items
                .iter()
                .enumerate()
                .map(|(i, child)| convert(child, &format!("{}.children[{}]", path, i)))
                .collect::<Result<Vec<_>>>()?;
            element = element.with_children(children);
        }
        Some(Json::Null) | None => {}
        Some(other) => {
            return Err(hyper_err!(
                Render,
                "{}: children must be an array, found a JSON {}",
                path,
                json_kind(other)
            ))
        }
    }

    Ok(AstNode::Element(element))
}

/// Property values of `null` render as empty text, inside arrays too.
fn blank_nulls(value: &Json) -> Json {
    match value {
        Json::Null => Json::String(String::new()),
        Json::Array(items) => Json::Array(items.iter().map(blank_nulls).collect()),
        Json::Object(fields) => Json::Object(
            fields
                .iter()
                .map(|(key, value)| (key.clone(), blank_nulls(value)))
                .collect(),
        ),
        other => other.clone(),
    }
}

fn text_value(value: Option<&Json>) -> String {
    match value {
        Some(Json::String(s)) => s.clone(),
        Some(Json::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

fn unknown_type(path: &str, found: &str) -> HyperError {
    hyper_err!(
        Render,
        "{}: root type must be {} or {}, found {}",
        path,
        ELEMENT,
        TEXT,
        found
    )
    .with_help("every node needs `\"type\": \"ELEMENT\"` or `\"type\": \"TEXT\"`")
}

fn json_kind(value: &Json) -> &'static str {
    match value {
        Json::Null => "null",
        Json::Bool(_) => "bool",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}

/// Byte offset of a 1-based line/column pair reported by `serde_json`, clamped
/// to the last byte so the span stays readable.
fn offset_of(text: &str, line: usize, column: usize) -> usize {
    let line_start: usize = text
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    (line_start + column.saturating_sub(1)).min(text.len().saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorType;
    use serde_json::json;

    #[test]
    fn element_without_tag_falls_back_to_div() {
        let node = node_from_value(&json!({ "type": "ELEMENT" })).unwrap();
        assert_eq!(node, AstNode::element("div"));
    }

    #[test]
    fn text_values_are_stringified() {
        let node = node_from_value(&json!({ "type": "TEXT", "value": 42 })).unwrap();
        assert_eq!(node.as_text(), Some("42"));
        let node = node_from_value(&json!({ "type": "TEXT" })).unwrap();
        assert_eq!(node.as_text(), Some(""));
    }

    #[test]
    fn nested_unknown_type_reports_path() {
        let tree = json!({
            "type": "ELEMENT",
            "tag": "ul",
            "children": [
                { "type": "TEXT", "value": "ok" },
                { "type": "COMMENT", "value": "nope" }
            ]
        });
        let err = node_from_value(&tree).unwrap_err();
        assert_eq!(err.error_type(), ErrorType::Render);
        assert!(err.message().contains("root.children[1]"));
        assert!(err.message().contains("`COMMENT`"));
    }

    #[test]
    fn missing_type_is_a_render_error() {
        let err = node_from_value(&json!({ "tag": "div" })).unwrap_err();
        assert_eq!(err.error_type(), ErrorType::Render);
        assert!(err.message().contains("no `type` field"));
    }

    #[test]
    fn null_property_values_become_empty_text() {
        let node = node_from_value(&json!({
            "type": "ELEMENT",
            "properties": { "title": null, "class": ["a", null], "data": { "x": null } }
        }))
        .unwrap();
        let props = node.as_element().unwrap().properties.as_ref().unwrap();
        let rendered: Vec<_> = crate::render::flatten_properties(props)
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect();
        assert_eq!(rendered, ["title=", "class=a ", "data-x="]);
    }

    #[test]
    fn malformed_json_points_at_failure() {
        let err = node_from_str("{\n  \"type\": }").unwrap_err();
        assert_eq!(err.error_type(), ErrorType::Parse);
        let labels: Vec<_> = miette::Diagnostic::labels(&err)
            .map(|l| l.collect())
            .unwrap_or_default();
        assert_eq!(labels.len(), 1);
        assert!(labels[0].offset() > 2);
    }

    #[test]
    fn offset_counts_previous_lines() {
        assert_eq!(offset_of("ab\ncd", 2, 2), 4);
        assert_eq!(offset_of("ab", 1, 1), 0);
        assert_eq!(offset_of("ab", 9, 9), 1);
    }
}

//! Tests for building trees inside a definition scope.

use hyperspeed::ast::{AstNode, Element, PropertyKey, PropertyValue};
use hyperspeed::builder::Scope;
use hyperspeed::{define, props, ErrorType, Result};
use serde_json::json;

#[cfg(test)]
mod define_tests {
    use super::*;

    #[test]
    fn test_define_returns_tagged_tree() {
        let ast = define(|h| {
            h.form(vec![
                h.input(props! { type: "text" })?,
                h.button((props! { type: "submit" }, "Greet"))?,
            ])
        })
        .unwrap();

        assert_eq!(
            ast.to_json(),
            json!({
                "type": "ELEMENT",
                "tag": "form",
                "children": [
                    { "type": "ELEMENT", "tag": "input", "properties": { "type": "text" } },
                    {
                        "type": "ELEMENT",
                        "tag": "button",
                        "properties": { "type": "submit" },
                        "children": [{ "type": "TEXT", "value": "Greet" }]
                    }
                ]
            })
        );
    }

    #[test]
    fn test_define_keeps_child_order() {
        let ast = define(|h| {
            h.ul(vec![h.li("one")?, h.li("two")?, h.li("three")?])
        })
        .unwrap();

        let texts: Vec<_> = ast
            .as_element()
            .unwrap()
            .children()
            .iter()
            .map(|li| li.as_element().unwrap().children()[0].as_text().unwrap())
            .collect();
        assert_eq!(texts, ["one", "two", "three"]);
    }

    #[test]
    fn test_define_with_custom_tag() {
        let ast = define(|h| h.tag("my-widget", ())).unwrap();
        assert_eq!(ast, AstNode::Element(Element::new("my-widget")));
    }

    #[test]
    fn test_define_mixes_text_and_elements() {
        let ast = define(|h| h.p(vec![h.text("a "), h.strong("b")?, h.text(" c")])).unwrap();
        assert_eq!(ast.as_element().unwrap().children().len(), 3);
    }

    #[test]
    fn test_define_propagates_definition_error() {
        let err = define(|h| h.div(vec![h.span(42_i32)?])).unwrap_err();
        assert_eq!(err.error_type(), ErrorType::Definition);
        assert!(err.message().contains("`span`"));
    }
}

#[cfg(test)]
mod helper_tests {
    use super::*;

    fn nav_link(h: &Scope, href: &str, label: &str) -> Result<AstNode> {
        h.a((props! { href: href }, label))
    }

    fn nav(h: &Scope, links: &[(&str, &str)]) -> Result<AstNode> {
        let items = links
            .iter()
            .map(|(href, label)| h.li(vec![nav_link(h, href, label)?]))
            .collect::<Result<Vec<_>>>()?;
        h.nav(vec![h.ul(items)?])
    }

    #[test]
    fn test_helpers_compose_with_tag_calls() {
        let ast = define(|h| {
            let logged_in = true;
            let greeting = if logged_in {
                h.span("welcome back")?
            } else {
                h.a((props! { href: "/login" }, "log in"))?
            };
            h.header(vec![nav(h, &[("/", "Home"), ("/about", "About")])?, greeting])
        })
        .unwrap();

        assert_eq!(
            hyperspeed::render(&ast),
            concat!(
                "<header><nav><ul>",
                r#"<li><a href="/">Home</a></li>"#,
                r#"<li><a href="/about">About</a></li>"#,
                "</ul></nav><span>welcome back</span></header>"
            )
        );
    }

    #[test]
    fn test_nested_properties_stay_nested_in_ast() {
        let ast = define(|h| h.div(props! { data: { foo: "x" } })).unwrap();
        let props = ast.as_element().unwrap().properties.as_ref().unwrap();
        assert!(matches!(props.get(&PropertyKey::from("data")), Some(PropertyValue::Nested(_))));
    }
}

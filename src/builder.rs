//! # AST Builder Module
//!
//! ## Purpose
//! Turns tag invocations into [`AstNode`]s. Each invocation carries up to two
//! loosely shaped arguments ([`Arg`]); their shapes select the node that gets
//! built.
//!
//! ## Core Principles
//! - Pure, stateless, composable
//! - Children are always built nodes, never raw literals (text sugar aside)
//! - Helpers are ordinary Rust functions taking `&Scope`
//!
//! ## Invariants
//! - An empty properties mapping is stored as absent
//! - Children keep the order they were given in

use crate::ast::{AstNode, Element, Properties, PropertyKey, PropertyValue, Scalar};
use crate::errors::Result;
use crate::hyper_err;

// ============================================================================
// ARGUMENTS
// ============================================================================

/// One positional argument of a tag invocation.
///
/// Only `Properties`, `Children` and `Text` are accepted shapes; the rest exist so
/// that a mistaken call reports what it received instead of failing to compile
/// in a generic way.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Properties(Properties),
    Children(Vec<AstNode>),
    Text(String),
    Integer(i128),
    Number(f64),
    Bool(bool),
    Symbol(String),
    Node(AstNode),
}

impl Arg {
    /// Returns the shape name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Arg::Properties(_) => "properties mapping",
            Arg::Children(_) => "children sequence",
            Arg::Text(_) => "text string",
            Arg::Integer(_) | Arg::Number(_) => "Number",
            Arg::Bool(_) => "Bool",
            Arg::Symbol(_) => "Symbol",
            Arg::Node(_) => "single node",
        }
    }
}

impl From<Properties> for Arg {
    fn from(props: Properties) -> Self {
        Arg::Properties(props)
    }
}

impl From<Vec<AstNode>> for Arg {
    fn from(children: Vec<AstNode>) -> Self {
        Arg::Children(children)
    }
}

impl From<&str> for Arg {
    fn from(text: &str) -> Self {
        Arg::Text(text.to_string())
    }
}

impl From<String> for Arg {
    fn from(text: String) -> Self {
        Arg::Text(text)
    }
}

impl From<f64> for Arg {
    fn from(n: f64) -> Self {
        Arg::Number(n)
    }
}

impl From<i32> for Arg {
    fn from(n: i32) -> Self {
        Arg::Integer(i128::from(n))
    }
}

impl From<i64> for Arg {
    fn from(n: i64) -> Self {
        Arg::Integer(i128::from(n))
    }
}

impl From<bool> for Arg {
    fn from(b: bool) -> Self {
        Arg::Bool(b)
    }
}

impl From<AstNode> for Arg {
    fn from(node: AstNode) -> Self {
        Arg::Node(node)
    }
}

impl From<Scalar> for Arg {
    fn from(scalar: Scalar) -> Self {
        match scalar {
            Scalar::Bool(b) => Arg::Bool(b),
            Scalar::Int(n) => Arg::Integer(i128::from(n)),
            Scalar::UInt(n) => Arg::Integer(i128::from(n)),
            Scalar::Float(n) => Arg::Number(n),
            Scalar::Str(s) => Arg::Text(s),
            Scalar::Symbol(s) => Arg::Symbol(s),
        }
    }
}

/// The positional arguments of one invocation: nothing, one value, or a pair.
pub trait IntoArgs {
    fn into_args(self) -> (Option<Arg>, Option<Arg>);
}

impl IntoArgs for () {
    fn into_args(self) -> (Option<Arg>, Option<Arg>) {
        (None, None)
    }
}

impl<A: Into<Arg>> IntoArgs for (A,) {
    fn into_args(self) -> (Option<Arg>, Option<Arg>) {
        (Some(self.0.into()), None)
    }
}

impl<A: Into<Arg>, B: Into<Arg>> IntoArgs for (A, B) {
    fn into_args(self) -> (Option<Arg>, Option<Arg>) {
        (Some(self.0.into()), Some(self.1.into()))
    }
}

macro_rules! single_arg {
    ($($source:ty),+ $(,)?) => {
        $(
            impl IntoArgs for $source {
                fn into_args(self) -> (Option<Arg>, Option<Arg>) {
                    (Some(Arg::from(self)), None)
                }
            }
        )+
    };
}

single_arg!(Arg, Properties, Vec<AstNode>, &str, String, f64, i32, i64, bool, AstNode, Scalar);

// ============================================================================
// DECISION TABLE
// ============================================================================

/// Builds the node for one tag invocation from the shapes of its arguments.
///
/// | first        | second           | result                          |
/// |--------------|------------------|---------------------------------|
/// | absent       | (ignored)        | bare element                    |
/// | properties   | children         | properties and children         |
/// | properties   | text             | properties and one text child   |
/// | properties   | absent           | properties only                 |
/// | children     | absent           | children only                   |
/// | text         | absent           | one text child                  |
///
/// Every other combination is a `Definition` error naming the argument at fault.
pub fn build_node(tag: &str, first: Option<Arg>, second: Option<Arg>) -> Result<AstNode> {
    let element = Element::new(tag);
    let element = match (first, second) {
        (None, _) => element,
        (Some(Arg::Properties(props)), Some(Arg::Children(children))) => {
            element.with_properties(props).with_children(children)
        }
        (Some(Arg::Properties(props)), Some(Arg::Text(text))) => element
            .with_properties(props)
            .with_children(vec![AstNode::text(text)]),
        (Some(Arg::Properties(props)), None) => element.with_properties(props),
        (Some(Arg::Properties(_)), Some(other)) => {
            return Err(hyper_err!(
                Definition,
                "second argument of `{}` must be a children sequence or a text string when the first is a properties mapping, found {}",
                tag,
                other.type_name()
            )
            .with_help("wrap child nodes in a Vec, or pass a string for a single text child"));
        }
        (Some(Arg::Children(children)), None) => element.with_children(children),
        (Some(Arg::Text(text)), None) => element.with_children(vec![AstNode::text(text)]),
        (Some(first @ (Arg::Children(_) | Arg::Text(_))), Some(other)) => {
            return Err(hyper_err!(
                Definition,
                "second argument of `{}` is only accepted when the first is a properties mapping; first is a {}, second is a {}",
                tag,
                first.type_name(),
                other.type_name()
            )
            .with_help("put properties first: (props, children) or (props, text)"));
        }
        (Some(other), _) => {
            return Err(hyper_err!(
                Definition,
                "first argument of `{}` must be a properties mapping, a children sequence, a text string, or absent, found {}",
                tag,
                other.type_name()
            )
            .with_help(first_argument_help(&other)));
        }
    };
    Ok(AstNode::Element(element))
}

fn first_argument_help(arg: &Arg) -> String {
    match arg {
        Arg::Integer(n) => format!("pass the number as text: \"{}\"", n),
        Arg::Number(n) => format!("pass the number as text: \"{}\"", Scalar::Float(*n)),
        Arg::Bool(b) => format!("pass the boolean as text: \"{}\"", b),
        Arg::Symbol(s) => format!("symbols are attribute values; pass \"{}\" as text", s),
        Arg::Node(_) => "wrap a single child node in a Vec".to_string(),
        _ => "expected properties, children, or text".to_string(),
    }
}

// ============================================================================
// DEFINITION SCOPE
// ============================================================================

/// Context handed to a definition callback.
///
/// Tag calls go through [`Scope::tag`] or one of the shorthand methods named after
/// common HTML tags. The scope holds no state, so independent definitions never
/// interfere.
#[derive(Debug, Default, Clone, Copy)]
pub struct Scope {
    _private: (),
}

macro_rules! tag_methods {
    ($($name:ident),+ $(,)?) => {
        impl Scope {
            $(
                #[doc = concat!("Builds a `<", stringify!($name), ">` element.")]
                pub fn $name(&self, args: impl IntoArgs) -> Result<AstNode> {
                    self.tag(stringify!($name), args)
                }
            )+
        }
    };
}

impl Scope {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Builds an element for any tag name.
    pub fn tag(&self, tag: &str, args: impl IntoArgs) -> Result<AstNode> {
        let (first, second) = args.into_args();
        build_node(tag, first, second)
    }

    /// A text node, for mixing text with elements in a children sequence.
    pub fn text(&self, value: impl Into<String>) -> AstNode {
        AstNode::text(value)
    }

    /// Starts a fluent builder for `tag`.
    pub fn element(&self, tag: &str) -> ElementBuilder {
        ElementBuilder::new(tag)
    }
}

tag_methods!(
    a, abbr, article, aside, b, blockquote, body, br, button, code, dd, div, dl, dt, em,
    fieldset, footer, form, h1, h2, h3, h4, h5, h6, head, header, hr, html, i, img, input,
    label, legend, li, link, main, meta, nav, ol, option, p, pre, script, section, select,
    small, span, strong, style, table, tbody, td, textarea, tfoot, th, thead, title, tr, ul,
);

// ============================================================================
// FLUENT BUILDER
// ============================================================================

/// Infallible, typed construction of an element.
///
/// ```rust
/// use hyperspeed::builder::ElementBuilder;
/// use hyperspeed::render;
/// let node = ElementBuilder::new("a")
///     .property("href", "/home")
///     .text("Home")
///     .build();
/// assert_eq!(render(&node), r#"<a href="/home">Home</a>"#);
/// ```
#[derive(Debug, Clone)]
pub struct ElementBuilder {
    tag: String,
    properties: Properties,
    children: Option<Vec<AstNode>>,
}

impl ElementBuilder {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            properties: Properties::new(),
            children: None,
        }
    }

    /// Sets one property; a repeated key keeps its first position.
    pub fn property(mut self, key: impl Into<PropertyKey>, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Merges a whole mapping, in its order.
    pub fn properties(mut self, properties: Properties) -> Self {
        self.properties.extend(properties);
        self
    }

    pub fn child(mut self, child: impl Into<AstNode>) -> Self {
        self.children.get_or_insert_with(Vec::new).push(child.into());
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = AstNode>) -> Self {
        self.children.get_or_insert_with(Vec::new).extend(children);
        self
    }

    /// Appends a text child.
    pub fn text(self, value: impl Into<String>) -> Self {
        self.child(AstNode::text(value))
    }

    pub fn build(self) -> AstNode {
        let mut element = Element::new(self.tag).with_properties(self.properties);
        if let Some(children) = self.children {
            element = element.with_children(children);
        }
        AstNode::Element(element)
    }
}

impl From<ElementBuilder> for AstNode {
    fn from(builder: ElementBuilder) -> Self {
        builder.build()
    }
}

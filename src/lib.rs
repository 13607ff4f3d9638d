//! Hyperspeed: describe HTML as nested Rust calls, get an AST, render it to a string.
//!
//! ```rust
//! use hyperspeed::{props, render_with};
//!
//! let html = render_with(|h| {
//!     h.form(vec![
//!         h.input(props! { type: "text" })?,
//!         h.button((props! { type: "submit" }, "Greet"))?,
//!     ])
//! })
//! .unwrap();
//!
//! assert_eq!(
//!     html,
//!     r#"<form><input type="text"></input><button type="submit">Greet</button></form>"#
//! );
//! ```

pub use crate::errors::{format_diagnostic, ErrorContext, ErrorType, HyperError, Result};
pub use crate::options::RenderOptions;
pub use crate::render::Renderer;
pub use crate::ast::AstNode;

pub mod ast;
pub mod builder;
pub mod errors;
pub mod macros;
pub mod options;
pub mod render;

use crate::builder::Scope;

/// Runs a definition callback and returns the tree it builds.
///
/// Helpers are plain functions that take the scope:
///
/// ```rust
/// use hyperspeed::{builder::Scope, define, render, AstNode, Result};
///
/// fn items(h: &Scope, names: &[&str]) -> Result<Vec<AstNode>> {
///     names.iter().map(|n| h.li(*n)).collect()
/// }
///
/// let ast = define(|h| h.ul(items(h, &["a", "b"])?)).unwrap();
/// assert_eq!(render(&ast), "<ul><li>a</li><li>b</li></ul>");
/// ```
pub fn define<F>(definition: F) -> Result<AstNode>
where
    F: FnOnce(&Scope) -> Result<AstNode>,
{
    definition(&Scope::new())
}

/// Renders a tree with default options.
pub fn render(ast: &AstNode) -> String {
    Renderer::default().render(ast)
}

/// Defines a tree with `definition`, then renders it.
pub fn render_with<F>(definition: F) -> Result<String>
where
    F: FnOnce(&Scope) -> Result<AstNode>,
{
    define(definition).map(|ast| render(&ast))
}

/// Renders `ast` when given; otherwise defines the tree first.
pub fn render_or_define<F>(ast: Option<&AstNode>, definition: F) -> Result<String>
where
    F: FnOnce(&Scope) -> Result<AstNode>,
{
    match ast {
        Some(ast) => Ok(render(ast)),
        None => render_with(definition),
    }
}

/// Renders a tree given in its JSON interchange form.
pub fn render_json(text: &str) -> Result<String> {
    ast::json::node_from_str(text).map(|ast| render(&ast))
}

//! Hyperspeed Error Handling
//!
//! # Overview
//!
//! Every failure produced while defining or rendering a tree is a [`HyperError`].
//! Construction goes through the `hyper_err!` macro for message-only errors and
//! through the `with_*` builders when a help text, source, or span is known.
//!
//! - **Use `hyper_err!` for simple, message-only errors.**
//!   - `hyper_err!(Definition, "first argument of `{}` is invalid", tag)`
//!
//! - **Attach help with [`HyperError::with_help`].**
//!
//! - **Attach source text with [`HyperError::with_source`]** when the failure can be
//!   pointed at (JSON interchange input). Spans are byte offsets into that text.
//!
//! The library never prints. Callers that want a human-readable report use
//! [`format_diagnostic`].

use std::sync::Arc;

use miette::{Diagnostic, GraphicalReportHandler, GraphicalTheme, LabeledSpan, NamedSource, SourceCode};
use thiserror::Error;

// Type aliases for clarity and brevity
pub type SourceArc = Arc<NamedSource<String>>;

/// Boxed cause carried by every variant.
pub type Cause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Byte range inside an error's source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

/// Type-safe error classification that corresponds to `HyperError` variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorType {
    /// Builder arguments matched no accepted shape
    Definition,
    /// A node could not be rendered (unknown discriminant)
    Render,
    /// Interchange input was not valid JSON
    Parse,
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::Definition => "Definition",
            ErrorType::Render => "Render",
            ErrorType::Parse => "Parse",
        }
    }

    /// Diagnostic code reported through `miette`.
    pub fn code(&self) -> &'static str {
        match self {
            ErrorType::Definition => "hyperspeed::definition",
            ErrorType::Render => "hyperspeed::render",
            ErrorType::Parse => "hyperspeed::parse",
        }
    }
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Minimal, composable error context for diagnostics.
#[derive(Debug, Default)]
pub struct ErrorContext {
    /// The source text this error points into (if any).
    pub source: Option<SourceArc>,
    /// The primary span for this error (if any).
    pub span: Option<Span>,
    /// An optional help message.
    pub help: Option<String>,
}

impl ErrorContext {
    /// Returns an empty error context (no source, span, or help).
    pub fn none() -> Self {
        Self::default()
    }

    /// Creates a context with only a help message.
    pub fn with_help(help: impl Into<String>) -> Self {
        Self {
            help: Some(help.into()),
            ..Self::default()
        }
    }
}

/// Unified error type for every hyperspeed failure mode.
#[derive(Debug, Error)]
pub enum HyperError {
    #[error("Definition error: {message}")]
    Definition {
        message: String,
        ctx: ErrorContext,
        #[source]
        source: Option<Cause>,
    },
    #[error("Render error: {message}")]
    Render {
        message: String,
        ctx: ErrorContext,
        #[source]
        source: Option<Cause>,
    },
    #[error("Parse error: {message}")]
    Parse {
        message: String,
        ctx: ErrorContext,
        #[source]
        source: Option<Cause>,
    },
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, HyperError>;

impl HyperError {
    fn get_ctx(&self) -> &ErrorContext {
        match self {
            HyperError::Definition { ctx, .. } => ctx,
            HyperError::Render { ctx, .. } => ctx,
            HyperError::Parse { ctx, .. } => ctx,
        }
    }

    fn get_ctx_mut(&mut self) -> &mut ErrorContext {
        match self {
            HyperError::Definition { ctx, .. } => ctx,
            HyperError::Render { ctx, .. } => ctx,
            HyperError::Parse { ctx, .. } => ctx,
        }
    }

    /// Returns the type-safe error classification for this error.
    pub fn error_type(&self) -> ErrorType {
        match self {
            HyperError::Definition { .. } => ErrorType::Definition,
            HyperError::Render { .. } => ErrorType::Render,
            HyperError::Parse { .. } => ErrorType::Parse,
        }
    }

    /// The bare message, without the variant prefix.
    pub fn message(&self) -> &str {
        match self {
            HyperError::Definition { message, .. }
            | HyperError::Render { message, .. }
            | HyperError::Parse { message, .. } => message,
        }
    }

    pub fn help_text(&self) -> Option<&str> {
        self.get_ctx().help.as_deref()
    }

    /// Attaches a help message, replacing any previous one.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.get_ctx_mut().help = Some(help.into());
        self
    }

    /// Attaches the text this error points into, with an optional span.
    pub fn with_source(mut self, name: &str, text: &str, span: Option<Span>) -> Self {
        let ctx = self.get_ctx_mut();
        ctx.source = Some(Arc::new(NamedSource::new(name, text.to_string())));
        ctx.span = span;
        self
    }

    /// Attaches the underlying cause.
    pub fn with_cause(mut self, cause: impl Into<Cause>) -> Self {
        match &mut self {
            HyperError::Definition { source, .. }
            | HyperError::Render { source, .. }
            | HyperError::Parse { source, .. } => *source = Some(cause.into()),
        }
        self
    }
}

impl Diagnostic for HyperError {
    fn code<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        Some(Box::new(self.error_type().code()))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        self.get_ctx()
            .help
            .as_ref()
            .map(|h| Box::new(h) as Box<dyn std::fmt::Display + 'a>)
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        self.get_ctx()
            .source
            .as_ref()
            .map(|s| s.as_ref() as &dyn SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let span = self.get_ctx().span?;
        let len = if span.end > span.start {
            span.end - span.start
        } else {
            1
        };
        let label = LabeledSpan::new(Some(self.message().to_string()), span.start, len);
        Some(Box::new(std::iter::once(label)))
    }
}

/// Renders an error as a plain-text miette report (no colours, unicode frames).
pub fn format_diagnostic(error: &HyperError) -> String {
    let handler = GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor());
    let mut out = String::new();
    if handler.render_report(&mut out, error).is_err() {
        return error.to_string();
    }
    out
}

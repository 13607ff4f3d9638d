//! Construction macros.
//!
//! - `hyper_err!` builds a [`HyperError`](crate::HyperError) variant with a formatted
//!   message and an empty context.
//! - `props!` builds an ordered [`Properties`](crate::ast::Properties) literal.
//!
//! ```rust
//! use hyperspeed::props;
//! let p = props! {
//!     type: "text",
//!     class: ["c1", "c2"],
//!     data: { foo: "x" },
//!     "aria-label": "name",
//!     [hx, get]: "/search",
//! };
//! assert_eq!(p.len(), 5);
//! ```

/// Constructs a `HyperError` variant with a formatted message and no context.
#[macro_export]
macro_rules! hyper_err {
    ($variant:ident, $($fmt:tt)+) => {
        $crate::HyperError::$variant {
            message: format!($($fmt)+),
            ctx: $crate::errors::ErrorContext::none(),
            source: None,
        }
    };
}

/// Builds an ordered properties mapping.
///
/// Keys are identifiers (keywords such as `type` included), string literals, or a
/// bracketed list of parts forming a compound key. Values are any expression
/// convertible into a `PropertyValue`, a bracketed list of scalars, or a braced
/// nested mapping.
#[macro_export]
macro_rules! props {
    () => {
        $crate::ast::Properties::new()
    };
    ($($body:tt)+) => {{
        let mut props = $crate::ast::Properties::new();
        $crate::__props_entries!(props; $($body)+);
        props
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __props_entries {
    ($props:ident;) => {};
    // nested mapping
    ($props:ident; $key:tt : { $($inner:tt)* }, $($rest:tt)*) => {
        $props.insert(
            $crate::__props_key!($key),
            $crate::ast::PropertyValue::Nested($crate::props!($($inner)*)),
        );
        $crate::__props_entries!($props; $($rest)*);
    };
    ($props:ident; $key:tt : { $($inner:tt)* }) => {
        $crate::__props_entries!($props; $key : { $($inner)* },);
    };
    // list of scalars
    ($props:ident; $key:tt : [ $($item:expr),* $(,)? ], $($rest:tt)*) => {
        $props.insert(
            $crate::__props_key!($key),
            $crate::ast::PropertyValue::Attr($crate::ast::AttributeValue::List(vec![
                $($crate::ast::Scalar::from($item)),*
            ])),
        );
        $crate::__props_entries!($props; $($rest)*);
    };
    ($props:ident; $key:tt : [ $($item:expr),* $(,)? ]) => {
        $crate::__props_entries!($props; $key : [ $($item),* ],);
    };
    // any other value
    ($props:ident; $key:tt : $value:expr, $($rest:tt)*) => {
        $props.insert(
            $crate::__props_key!($key),
            $crate::ast::PropertyValue::from($value),
        );
        $crate::__props_entries!($props; $($rest)*);
    };
    ($props:ident; $key:tt : $value:expr) => {
        $crate::__props_entries!($props; $key : $value,);
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __props_key {
    ([ $($part:tt),+ $(,)? ]) => {
        $crate::ast::PropertyKey::Compound(vec![$($crate::__props_key_part!($part)),+])
    };
    ($key:ident) => {
        $crate::ast::PropertyKey::from(stringify!($key))
    };
    ($key:literal) => {
        $crate::ast::PropertyKey::from($key)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __props_key_part {
    ($part:ident) => {
        stringify!($part).to_string()
    };
    ($part:literal) => {
        $part.to_string()
    };
}

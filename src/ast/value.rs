use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator used to join nested and compound property keys.
pub const KEY_SEPARATOR: &str = "-";

/// Ordered properties mapping of an element. Keys are unique; insertion order is
/// rendering order.
pub type Properties = IndexMap<PropertyKey, PropertyValue>;

/// A single attribute scalar.
///
/// Integers keep their own variants so they render exactly; only `Float` goes
/// through `f64`. Variant order matters for untagged deserialization: a JSON
/// integer is tried as `Int`, then `UInt`, before falling back to `Float`.
///
/// # Examples
///
/// ```rust
/// use hyperspeed::ast::Scalar;
/// assert_eq!(Scalar::from("c1").to_string(), "c1");
/// assert_eq!(Scalar::symbol("c2").to_string(), "c2");
/// assert_eq!(Scalar::from(1_i32).to_string(), "1");
/// assert_eq!(Scalar::from(1.5).to_string(), "1.5");
/// assert_eq!(Scalar::from(9_007_199_254_740_993_i64).to_string(), "9007199254740993");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Str(String),
    /// Symbol-like atom; renders as its bare name.
    Symbol(String),
}

/// Largest magnitude below which every whole `f64` is an exact integer.
const F64_EXACT_INT: f64 = 9_007_199_254_740_992.0;

impl Scalar {
    pub fn symbol(name: impl Into<String>) -> Self {
        Scalar::Symbol(name.into())
    }

    /// Returns the type name of the scalar as a string.
    pub fn type_name(&self) -> &'static str {
        match self {
            Scalar::Bool(_) => "Bool",
            Scalar::Int(_) | Scalar::UInt(_) | Scalar::Float(_) => "Number",
            Scalar::Str(_) => "String",
            Scalar::Symbol(_) => "Symbol",
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Int(n) => write!(f, "{}", n),
            Scalar::UInt(n) => write!(f, "{}", n),
            Scalar::Float(n) => {
                if n.fract() == 0.0 && n.abs() <= F64_EXACT_INT {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
            Scalar::Str(s) | Scalar::Symbol(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Str(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::Str(s)
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Scalar::Bool(b)
    }
}

impl From<f64> for Scalar {
    fn from(n: f64) -> Self {
        Scalar::Float(n)
    }
}

impl From<i32> for Scalar {
    fn from(n: i32) -> Self {
        Scalar::Int(i64::from(n))
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Scalar::Int(n)
    }
}

impl From<u64> for Scalar {
    fn from(n: u64) -> Self {
        match i64::try_from(n) {
            Ok(n) => Scalar::Int(n),
            Err(_) => Scalar::UInt(n),
        }
    }
}

impl From<usize> for Scalar {
    fn from(n: usize) -> Self {
        Scalar::from(n as u64)
    }
}

/// A flattened attribute value: one scalar or a space-joined sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    List(Vec<Scalar>),
    Scalar(Scalar),
}

impl AttributeValue {
    /// The rendered string forms of every scalar, in order.
    pub fn parts(&self) -> Vec<String> {
        match self {
            AttributeValue::List(items) => items.iter().map(Scalar::to_string).collect(),
            AttributeValue::Scalar(s) => vec![s.to_string()],
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Scalar(s) => write!(f, "{}", s),
            AttributeValue::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", item)?;
                }
                Ok(())
            }
        }
    }
}

macro_rules! from_scalar_like {
    ($target:ident, $wrap:expr; $($source:ty),+) => {
        $(
            impl From<$source> for $target {
                fn from(value: $source) -> Self {
                    let wrap: fn(Scalar) -> $target = $wrap;
                    wrap(Scalar::from(value))
                }
            }
        )+
    };
}

from_scalar_like!(AttributeValue, AttributeValue::Scalar; Scalar, &str, String, bool, f64, i32, i64, u64, usize);

impl From<Vec<Scalar>> for AttributeValue {
    fn from(items: Vec<Scalar>) -> Self {
        AttributeValue::List(items)
    }
}

/// A value in an element's properties mapping. Nested mappings only shape the
/// flattened attribute names; they never appear in rendered output as such.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Nested(Properties),
    Attr(AttributeValue),
}

from_scalar_like!(
    PropertyValue,
    |s| PropertyValue::Attr(AttributeValue::Scalar(s));
    Scalar, &str, String, bool, f64, i32, i64, u64, usize
);

impl From<AttributeValue> for PropertyValue {
    fn from(value: AttributeValue) -> Self {
        PropertyValue::Attr(value)
    }
}

impl From<Vec<Scalar>> for PropertyValue {
    fn from(items: Vec<Scalar>) -> Self {
        PropertyValue::Attr(AttributeValue::List(items))
    }
}

impl From<Properties> for PropertyValue {
    fn from(props: Properties) -> Self {
        PropertyValue::Nested(props)
    }
}

/// Key of a properties mapping. A compound key is shorthand for a dash-joined
/// attribute name given as parts.
///
/// Serialized form is always the joined string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum PropertyKey {
    Name(String),
    Compound(Vec<String>),
}

impl PropertyKey {
    /// The attribute name this key contributes.
    pub fn flat(&self) -> String {
        match self {
            PropertyKey::Name(name) => name.clone(),
            PropertyKey::Compound(parts) => parts.join(KEY_SEPARATOR),
        }
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.flat())
    }
}

impl From<&str> for PropertyKey {
    fn from(name: &str) -> Self {
        PropertyKey::Name(name.to_string())
    }
}

impl From<String> for PropertyKey {
    fn from(name: String) -> Self {
        PropertyKey::Name(name)
    }
}

impl From<Vec<&str>> for PropertyKey {
    fn from(parts: Vec<&str>) -> Self {
        PropertyKey::Compound(parts.into_iter().map(str::to_string).collect())
    }
}

impl From<PropertyKey> for String {
    fn from(key: PropertyKey) -> Self {
        key.flat()
    }
}

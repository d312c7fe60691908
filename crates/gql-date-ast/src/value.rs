//! Literal value AST nodes

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A value written inline in a query document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum ValueNode {
    /// Variable reference (`$name`), resolved by the executor before coercion
    Variable(String),
    /// Integer literal, kept as written
    Int(String),
    /// Float literal, kept as written
    Float(String),
    /// String literal (quoted or block string), already unescaped
    String(StringValue),
    /// Boolean literal
    Boolean(bool),
    /// `null`
    Null,
    /// Enum value (bare name)
    Enum(String),
    /// List literal
    List(Vec<ValueNode>),
    /// Input object literal, fields in source order
    Object(IndexMap<String, ValueNode>),
}

/// String literal payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringValue {
    /// Unescaped contents
    pub value: String,
    /// Written as a `"""` block string
    pub block: bool,
}

impl StringValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            block: false,
        }
    }

    pub fn block(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            block: true,
        }
    }
}

impl ValueNode {
    /// Create a quoted string literal
    pub fn string(value: impl Into<String>) -> Self {
        Self::String(StringValue::new(value))
    }

    /// Create an integer literal
    pub fn int(value: i64) -> Self {
        Self::Int(value.to_string())
    }

    /// Create a variable reference
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    /// Text of a string literal, `None` for every other node
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(&s.value),
            _ => None,
        }
    }

    /// Name of the node kind, as used in error messages
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Variable(_) => "Variable",
            Self::Int(_) => "IntValue",
            Self::Float(_) => "FloatValue",
            Self::String(_) => "StringValue",
            Self::Boolean(_) => "BooleanValue",
            Self::Null => "NullValue",
            Self::Enum(_) => "EnumValue",
            Self::List(_) => "ListValue",
            Self::Object(_) => "ObjectValue",
        }
    }
}

impl fmt::Display for ValueNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Variable(name) => write!(f, "${}", name),
            Self::Int(raw) | Self::Float(raw) => write!(f, "{}", raw),
            Self::String(s) if s.block => write!(f, "\"\"\"{}\"\"\"", s.value),
            Self::String(s) => write!(f, "{:?}", s.value),
            Self::Boolean(b) => write!(f, "{}", b),
            Self::Null => write!(f, "null"),
            Self::Enum(name) => write!(f, "{}", name),
            Self::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Self::Object(fields) => {
                write!(f, "{{")?;
                for (i, (name, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", name, value)?;
                }
                write!(f, "}}")
            }
        }
    }
}

//! Traversal output records.

use crate::path::AccessPath;
use serde::Serialize;

/// Literal family of an assertable value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PrimitiveKind {
    /// `Int16`, `Int32`, `Int64`
    Integer,
    DateTime,
    Boolean,
    String,
    /// Enum members are not resolved; asserted as their underlying integer.
    Enum,
    /// Scalar without a dedicated literal.
    Unknown,
}

impl PrimitiveKind {
    /// Kind for one of the scalar type names with a dedicated literal.
    pub fn from_type_name(name: &str) -> Option<Self> {
        match name {
            "String" => Some(PrimitiveKind::String),
            "Int16" | "Int32" | "Int64" => Some(PrimitiveKind::Integer),
            "DateTime" => Some(PrimitiveKind::DateTime),
            "Boolean" => Some(PrimitiveKind::Boolean),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PrimitiveKind::Integer => "integer",
            PrimitiveKind::DateTime => "dateTime",
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::String => "string",
            PrimitiveKind::Enum => "enum",
            PrimitiveKind::Unknown => "unknown",
        }
    }
}

/// One assertable value: where it is and what literal it compares against.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ReflectedProperty {
    pub path: AccessPath,
    pub kind: PrimitiveKind,
}

impl ReflectedProperty {
    pub fn new(path: AccessPath, kind: PrimitiveKind) -> Self {
        Self { path, kind }
    }

    /// Dotted access expression, e.g. `model.Inner.Id`.
    pub fn name(&self) -> String {
        self.path.to_string()
    }
}

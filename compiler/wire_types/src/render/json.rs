//! JSON shape policy.
//!
//! Enums render as strings, maps as objects with typed additional
//! properties, named classes as references to their definition.

use std::fmt;

use wire_ir::{PrimitiveKind, StringInterner};

use crate::{BuiltinType, SchemaType, TypeDefinitionTable};

/// JSON-facing shape of a projected type.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum JsonShape {
    String { format: Option<&'static str> },
    Number { whole: bool },
    Boolean,
    Array(Box<JsonShape>),
    /// An object; `additional` types every property of a map-like object.
    Object { additional: Option<Box<JsonShape>> },
    /// Reference to a named definition.
    Ref(String),
    Any,
    Invalid,
}

impl fmt::Display for JsonShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsonShape::String { format: None } => f.write_str("string"),
            JsonShape::String {
                format: Some(format),
            } => write!(f, "string({format})"),
            JsonShape::Number { whole: true } => f.write_str("integer"),
            JsonShape::Number { whole: false } => f.write_str("number"),
            JsonShape::Boolean => f.write_str("boolean"),
            JsonShape::Array(items) => write!(f, "array<{items}>"),
            JsonShape::Object { additional: None } => f.write_str("object"),
            JsonShape::Object {
                additional: Some(value),
            } => write!(f, "object<{value}>"),
            JsonShape::Ref(name) => write!(f, "#{name}"),
            JsonShape::Any => f.write_str("any"),
            JsonShape::Invalid => f.write_str("<unresolvable>"),
        }
    }
}

fn builtin_shape(builtin: BuiltinType) -> JsonShape {
    let format = match builtin {
        BuiltinType::DateTime => "date-time",
        BuiltinType::Date => "date",
        BuiltinType::Time => "time",
        BuiltinType::Duration => "duration",
        BuiltinType::AnyUri => "uri",
        BuiltinType::QName => return JsonShape::String { format: None },
        BuiltinType::Decimal => return JsonShape::Number { whole: false },
        BuiltinType::Integer => return JsonShape::Number { whole: true },
    };
    JsonShape::String {
        format: Some(format),
    }
}

/// Fold a schema type into its JSON shape.
pub fn json_shape(
    schema: &SchemaType,
    definitions: &TypeDefinitionTable,
    interner: &StringInterner,
) -> JsonShape {
    match schema {
        SchemaType::Primitive(kind) if kind.is_numeric() => JsonShape::Number {
            whole: kind.is_whole(),
        },
        SchemaType::Primitive(PrimitiveKind::Boolean) | SchemaType::Boolean => {
            JsonShape::Boolean
        }
        // char
        SchemaType::Primitive(_) | SchemaType::String => JsonShape::String { format: None },
        SchemaType::Binary => JsonShape::String {
            format: Some("base64"),
        },
        SchemaType::Number { whole } => JsonShape::Number { whole: *whole },
        SchemaType::Builtin(builtin) => builtin_shape(*builtin),
        SchemaType::EnumType(_) => JsonShape::String { format: None },
        SchemaType::ClassType(id) => match definitions.get(*id) {
            Some(definition) => {
                let name = definition.name.map_or_else(
                    || simple_name(interner.lookup(definition.identity)),
                    |name| interner.lookup(name),
                );
                JsonShape::Ref(name.to_owned())
            }
            None => JsonShape::Invalid,
        },
        SchemaType::ArrayType(items) => {
            JsonShape::Array(Box::new(json_shape(items, definitions, interner)))
        }
        SchemaType::MapType { value, .. } => JsonShape::Object {
            additional: Some(Box::new(json_shape(value, definitions, interner))),
        },
        SchemaType::AnyType => JsonShape::Any,
        SchemaType::Unresolvable(_) => JsonShape::Invalid,
    }
}

/// Last segment of a dotted identity.
fn simple_name(identity: &str) -> &str {
    identity.rsplit('.').next().unwrap_or(identity)
}

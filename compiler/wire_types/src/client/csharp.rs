//! C# client names.

use wire_ir::PrimitiveKind;

use super::{ClientProjection, PackageConversions};
use crate::BuiltinType;

pub struct CSharpClient {
    conversions: PackageConversions,
}

impl CSharpClient {
    pub fn new(conversions: PackageConversions) -> Self {
        CSharpClient { conversions }
    }
}

impl ClientProjection for CSharpClient {
    fn language(&self) -> &'static str {
        "csharp"
    }

    fn primitive_name(&self, kind: PrimitiveKind) -> &'static str {
        match kind {
            PrimitiveKind::Boolean => "bool",
            PrimitiveKind::Byte => "sbyte",
            PrimitiveKind::Short => "short",
            PrimitiveKind::Int => "int",
            PrimitiveKind::Long => "long",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Double => "double",
            // UTF-16 code unit
            PrimitiveKind::Char => "ushort",
        }
    }

    fn builtin_name(&self, builtin: BuiltinType) -> &'static str {
        match builtin {
            BuiltinType::DateTime | BuiltinType::Date | BuiltinType::Time => {
                "global::System.DateTime"
            }
            BuiltinType::Duration => "global::System.TimeSpan",
            BuiltinType::Decimal => "decimal",
            BuiltinType::Integer => "long",
            BuiltinType::QName => "global::System.Xml.XmlQualifiedName",
            BuiltinType::AnyUri => "string",
        }
    }

    fn string_name(&self) -> &'static str {
        "string"
    }

    fn number_name(&self, whole: bool) -> &'static str {
        if whole {
            "long"
        } else {
            "double"
        }
    }

    fn boolean_name(&self) -> &'static str {
        "bool"
    }

    fn binary_name(&self) -> &'static str {
        "byte[]"
    }

    fn any_name(&self) -> &'static str {
        "object"
    }

    fn collection_name(&self, element: Option<&str>) -> String {
        match element {
            Some(element) => format!("global::System.Collections.Generic.List<{element}>"),
            None => "global::System.Collections.ArrayList".to_owned(),
        }
    }

    fn map_name(&self, key: &str, value: &str) -> String {
        format!("global::System.Collections.Generic.Dictionary<{key}, {value}>")
    }

    fn conversions(&self) -> &PackageConversions {
        &self.conversions
    }
}

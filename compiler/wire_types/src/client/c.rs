//! C client names.
//!
//! Generated C code has no collection or map types: a collection is a
//! pointer to its element type plus a count, so the element name stands in
//! for the collection. User types are `struct` or `enum` declarations named
//! after their package with `_` separators.

use wire_ir::{PrimitiveKind, StringInterner};

use super::{qualified_name, ClientProjection, PackageConversions};
use crate::{BuiltinType, TypeDefinition};

pub struct CClient {
    conversions: PackageConversions,
}

impl CClient {
    pub fn new(conversions: PackageConversions) -> Self {
        CClient { conversions }
    }
}

impl ClientProjection for CClient {
    fn language(&self) -> &'static str {
        "c"
    }

    fn primitive_name(&self, kind: PrimitiveKind) -> &'static str {
        match kind {
            PrimitiveKind::Boolean | PrimitiveKind::Int => "int",
            PrimitiveKind::Byte => "unsigned char",
            PrimitiveKind::Short => "short",
            PrimitiveKind::Long => "long long",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Double => "double",
            PrimitiveKind::Char => "unsigned short",
        }
    }

    fn builtin_name(&self, builtin: BuiltinType) -> &'static str {
        match builtin {
            BuiltinType::DateTime | BuiltinType::Date | BuiltinType::Time => "struct tm",
            BuiltinType::QName => "struct QName",
            BuiltinType::Duration
            | BuiltinType::Decimal
            | BuiltinType::Integer
            | BuiltinType::AnyUri => "xmlChar",
        }
    }

    fn string_name(&self) -> &'static str {
        "xmlChar"
    }

    fn number_name(&self, whole: bool) -> &'static str {
        if whole {
            "long long"
        } else {
            "double"
        }
    }

    fn boolean_name(&self) -> &'static str {
        "int"
    }

    fn binary_name(&self) -> &'static str {
        "unsigned char"
    }

    fn any_name(&self) -> &'static str {
        "struct xmlBasicNode"
    }

    fn collection_name(&self, element: Option<&str>) -> String {
        element.unwrap_or("xmlNode").to_owned()
    }

    // No built-in map serialization; maps need an adapter to be usable.
    fn map_name(&self, _key: &str, _value: &str) -> String {
        "xmlNode".to_owned()
    }

    fn conversions(&self) -> &PackageConversions {
        &self.conversions
    }

    fn package_separator(&self) -> &'static str {
        "_"
    }

    fn definition_name(&self, definition: &TypeDefinition, interner: &StringInterner) -> String {
        let keyword = if definition.is_enum() { "enum" } else { "struct" };
        format!("{keyword} {}", qualified_name(self, definition, interner))
    }
}

//! Java client names.

use wire_ir::{PrimitiveKind, StringInterner};

use super::{ClientProjection, PackageConversions};
use crate::{BuiltinType, SchemaType, TypeDefinitionTable};

pub struct JavaClient {
    conversions: PackageConversions,
}

impl JavaClient {
    pub fn new(conversions: PackageConversions) -> Self {
        JavaClient { conversions }
    }
}

fn boxed(kind: PrimitiveKind) -> &'static str {
    match kind {
        PrimitiveKind::Boolean => "java.lang.Boolean",
        PrimitiveKind::Byte => "java.lang.Byte",
        PrimitiveKind::Short => "java.lang.Short",
        PrimitiveKind::Int => "java.lang.Integer",
        PrimitiveKind::Long => "java.lang.Long",
        PrimitiveKind::Float => "java.lang.Float",
        PrimitiveKind::Double => "java.lang.Double",
        PrimitiveKind::Char => "java.lang.Character",
    }
}

impl ClientProjection for JavaClient {
    fn language(&self) -> &'static str {
        "java"
    }

    fn primitive_name(&self, kind: PrimitiveKind) -> &'static str {
        kind.keyword()
    }

    fn builtin_name(&self, builtin: BuiltinType) -> &'static str {
        match builtin {
            BuiltinType::DateTime | BuiltinType::Date | BuiltinType::Time => "java.util.Date",
            BuiltinType::Duration => "javax.xml.datatype.Duration",
            BuiltinType::Decimal => "java.math.BigDecimal",
            BuiltinType::Integer => "java.math.BigInteger",
            BuiltinType::QName => "javax.xml.namespace.QName",
            BuiltinType::AnyUri => "java.net.URI",
        }
    }

    fn string_name(&self) -> &'static str {
        "java.lang.String"
    }

    fn number_name(&self, whole: bool) -> &'static str {
        if whole {
            "java.lang.Long"
        } else {
            "java.lang.Double"
        }
    }

    fn boolean_name(&self) -> &'static str {
        "java.lang.Boolean"
    }

    fn binary_name(&self) -> &'static str {
        "byte[]"
    }

    fn any_name(&self) -> &'static str {
        "java.lang.Object"
    }

    fn collection_name(&self, element: Option<&str>) -> String {
        format!("java.util.List<{}>", element.unwrap_or(self.any_name()))
    }

    fn map_name(&self, key: &str, value: &str) -> String {
        format!("java.util.Map<{key}, {value}>")
    }

    fn conversions(&self) -> &PackageConversions {
        &self.conversions
    }

    fn element_name(
        &self,
        schema: &SchemaType,
        definitions: &TypeDefinitionTable,
        interner: &StringInterner,
    ) -> String {
        match schema {
            SchemaType::Primitive(kind) => boxed(*kind).to_owned(),
            _ => self.type_name(schema, definitions, interner),
        }
    }
}

//! ActionScript 3 client names.

use wire_ir::PrimitiveKind;

use super::{ClientProjection, PackageConversions};
use crate::BuiltinType;

pub struct ActionScriptClient {
    conversions: PackageConversions,
}

impl ActionScriptClient {
    pub fn new(conversions: PackageConversions) -> Self {
        ActionScriptClient { conversions }
    }
}

impl ClientProjection for ActionScriptClient {
    fn language(&self) -> &'static str {
        "as3"
    }

    fn primitive_name(&self, kind: PrimitiveKind) -> &'static str {
        match kind {
            PrimitiveKind::Boolean => "Boolean",
            PrimitiveKind::Byte | PrimitiveKind::Short | PrimitiveKind::Int => "int",
            PrimitiveKind::Long | PrimitiveKind::Float | PrimitiveKind::Double => "Number",
            PrimitiveKind::Char => "String",
        }
    }

    fn builtin_name(&self, builtin: BuiltinType) -> &'static str {
        match builtin {
            BuiltinType::DateTime | BuiltinType::Date | BuiltinType::Time => "Date",
            BuiltinType::Decimal | BuiltinType::Integer => "Number",
            BuiltinType::Duration | BuiltinType::QName | BuiltinType::AnyUri => "String",
        }
    }

    fn string_name(&self) -> &'static str {
        "String"
    }

    fn number_name(&self, whole: bool) -> &'static str {
        if whole {
            "int"
        } else {
            "Number"
        }
    }

    fn boolean_name(&self) -> &'static str {
        "Boolean"
    }

    fn binary_name(&self) -> &'static str {
        "flash.utils.ByteArray"
    }

    fn any_name(&self) -> &'static str {
        "Object"
    }

    fn collection_name(&self, _element: Option<&str>) -> String {
        "mx.collections.ArrayCollection".to_owned()
    }

    fn map_name(&self, _key: &str, _value: &str) -> String {
        "Object".to_owned()
    }

    fn conversions(&self) -> &PackageConversions {
        &self.conversions
    }
}

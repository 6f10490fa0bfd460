//! Ruby client names.

use wire_ir::PrimitiveKind;

use super::{capitalize_segments, ClientProjection, PackageConversions};
use crate::BuiltinType;

pub struct RubyClient {
    conversions: PackageConversions,
}

impl RubyClient {
    pub fn new(conversions: PackageConversions) -> Self {
        RubyClient { conversions }
    }
}

impl ClientProjection for RubyClient {
    fn language(&self) -> &'static str {
        "ruby"
    }

    fn primitive_name(&self, kind: PrimitiveKind) -> &'static str {
        match kind {
            PrimitiveKind::Boolean => "Boolean",
            PrimitiveKind::Byte | PrimitiveKind::Short | PrimitiveKind::Int => "Fixnum",
            PrimitiveKind::Long => "Bignum",
            PrimitiveKind::Float | PrimitiveKind::Double => "Float",
            PrimitiveKind::Char => "String",
        }
    }

    fn builtin_name(&self, builtin: BuiltinType) -> &'static str {
        match builtin {
            BuiltinType::DateTime | BuiltinType::Date | BuiltinType::Time => "Time",
            BuiltinType::Decimal => "Float",
            BuiltinType::Integer => "Bignum",
            BuiltinType::Duration | BuiltinType::QName | BuiltinType::AnyUri => "String",
        }
    }

    fn string_name(&self) -> &'static str {
        "String"
    }

    fn number_name(&self, whole: bool) -> &'static str {
        if whole {
            "Bignum"
        } else {
            "Float"
        }
    }

    fn boolean_name(&self) -> &'static str {
        "Boolean"
    }

    fn binary_name(&self) -> &'static str {
        "String"
    }

    fn any_name(&self) -> &'static str {
        "Object"
    }

    fn collection_name(&self, _element: Option<&str>) -> String {
        "Array".to_owned()
    }

    fn map_name(&self, _key: &str, _value: &str) -> String {
        "Hash".to_owned()
    }

    fn conversions(&self) -> &PackageConversions {
        &self.conversions
    }

    fn package_separator(&self) -> &'static str {
        "::"
    }

    fn format_package(&self, package: &str) -> String {
        capitalize_segments(package, self.package_separator())
    }

    fn enums_as_strings(&self) -> bool {
        true
    }
}

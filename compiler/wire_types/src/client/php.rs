//! PHP client names.
//!
//! PHP clients only distinguish a handful of scalar kinds; every number is
//! an `Integer` and temporal values travel as strings.

use wire_ir::PrimitiveKind;

use super::{capitalize_segments, ClientProjection, PackageConversions};
use crate::BuiltinType;

pub struct PhpClient {
    conversions: PackageConversions,
}

impl PhpClient {
    pub fn new(conversions: PackageConversions) -> Self {
        PhpClient { conversions }
    }
}

impl ClientProjection for PhpClient {
    fn language(&self) -> &'static str {
        "php"
    }

    fn primitive_name(&self, kind: PrimitiveKind) -> &'static str {
        match kind {
            PrimitiveKind::Boolean => "Boolean",
            PrimitiveKind::Char => "String",
            _ => "Integer",
        }
    }

    fn builtin_name(&self, builtin: BuiltinType) -> &'static str {
        match builtin {
            BuiltinType::Decimal | BuiltinType::Integer => "Integer",
            _ => "String",
        }
    }

    fn string_name(&self) -> &'static str {
        "String"
    }

    fn number_name(&self, _whole: bool) -> &'static str {
        "Integer"
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
        "Array".to_owned()
    }

    fn conversions(&self) -> &PackageConversions {
        &self.conversions
    }

    fn package_separator(&self) -> &'static str {
        "\\"
    }

    fn format_package(&self, package: &str) -> String {
        capitalize_segments(package, self.package_separator())
    }

    fn enums_as_strings(&self) -> bool {
        true
    }
}

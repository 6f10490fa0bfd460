//! Objective-C client names.
//!
//! Classes carry no namespaces, so a user type is its package folded into a
//! capitalized prefix followed by its simple name. Package conversions map a
//! package to the prefix identifier to use instead.

use wire_ir::{PrimitiveKind, StringInterner};

use super::{capitalize_segments, qualified_name, ClientProjection, PackageConversions};
use crate::{BuiltinType, TypeDefinition};

pub struct ObjCClient {
    conversions: PackageConversions,
}

impl ObjCClient {
    pub fn new(conversions: PackageConversions) -> Self {
        ObjCClient { conversions }
    }
}

impl ClientProjection for ObjCClient {
    fn language(&self) -> &'static str {
        "objc"
    }

    fn primitive_name(&self, kind: PrimitiveKind) -> &'static str {
        match kind {
            PrimitiveKind::Boolean => "BOOL",
            PrimitiveKind::Byte => "unsigned char",
            PrimitiveKind::Short => "short",
            PrimitiveKind::Int => "int",
            PrimitiveKind::Long => "long long",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Double => "double",
            PrimitiveKind::Char => "unsigned short",
        }
    }

    fn builtin_name(&self, builtin: BuiltinType) -> &'static str {
        match builtin {
            BuiltinType::DateTime | BuiltinType::Date | BuiltinType::Time => "NSDate",
            BuiltinType::Decimal => "NSDecimalNumber",
            BuiltinType::Integer => "NSNumber",
            BuiltinType::QName => "QName",
            BuiltinType::AnyUri => "NSURL",
            BuiltinType::Duration => "NSString",
        }
    }

    fn string_name(&self) -> &'static str {
        "NSString"
    }

    fn number_name(&self, _whole: bool) -> &'static str {
        "NSNumber"
    }

    fn boolean_name(&self) -> &'static str {
        "BOOL"
    }

    fn binary_name(&self) -> &'static str {
        "NSData"
    }

    fn any_name(&self) -> &'static str {
        "NSObject"
    }

    fn collection_name(&self, _element: Option<&str>) -> String {
        "NSArray".to_owned()
    }

    fn map_name(&self, _key: &str, _value: &str) -> String {
        "NSDictionary".to_owned()
    }

    fn conversions(&self) -> &PackageConversions {
        &self.conversions
    }

    fn package_separator(&self) -> &'static str {
        ""
    }

    fn format_package(&self, package: &str) -> String {
        capitalize_segments(package, "")
    }

    fn definition_name(&self, definition: &TypeDefinition, interner: &StringInterner) -> String {
        let name = qualified_name(self, definition, interner);
        if definition.is_enum() {
            format!("enum {name}")
        } else {
            name
        }
    }
}

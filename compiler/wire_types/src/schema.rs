//! Canonical schema types.
//!
//! `SchemaType` is the closed classification every consumer renders from.
//! Named user types are held by reference (`TypeDefinitionId`), never
//! inlined, so a `SchemaType` value is acyclic even when the class graph it
//! describes is not.

use std::fmt;

use wire_diagnostic::{Diagnostic, ErrorCode};
use wire_ir::PrimitiveKind;

use crate::TypeDefinitionId;

/// The XML Schema namespace all primitive and built-in names live in.
pub const XML_SCHEMA_NS: &str = "http://www.w3.org/2001/XMLSchema";

/// Named built-in simple types with no user-visible structure.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BuiltinType {
    DateTime,
    Date,
    Time,
    Duration,
    Decimal,
    Integer,
    QName,
    AnyUri,
}

impl BuiltinType {
    /// Local name in the XML Schema namespace.
    pub const fn xml_name(self) -> &'static str {
        match self {
            BuiltinType::DateTime => "dateTime",
            BuiltinType::Date => "date",
            BuiltinType::Time => "time",
            BuiltinType::Duration => "duration",
            BuiltinType::Decimal => "decimal",
            BuiltinType::Integer => "integer",
            BuiltinType::QName => "QName",
            BuiltinType::AnyUri => "anyURI",
        }
    }

    /// Whether the built-in is a temporal value.
    pub const fn is_temporal(self) -> bool {
        matches!(
            self,
            BuiltinType::DateTime | BuiltinType::Date | BuiltinType::Time | BuiltinType::Duration
        )
    }
}

/// Local name of a primitive in the XML Schema namespace.
pub const fn primitive_xml_name(kind: PrimitiveKind) -> &'static str {
    match kind {
        PrimitiveKind::Boolean => "boolean",
        PrimitiveKind::Byte => "byte",
        PrimitiveKind::Short => "short",
        PrimitiveKind::Int => "int",
        PrimitiveKind::Long => "long",
        PrimitiveKind::Float => "float",
        PrimitiveKind::Double => "double",
        PrimitiveKind::Char => "unsignedShort",
    }
}

/// Why a type cannot be projected.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnresolvableKind {
    /// Not in the known-type registry nor the definition table.
    UnknownType,
    /// `void`.
    Void,
    /// An interface with no adapter, map shape or collection shape.
    BareInterface,
    /// An annotation type.
    AnnotationType,
    /// Multi-dimensional arrays and nested collections.
    UnsupportedNesting,
    /// Adapter chain longer than the configured limit.
    AdapterCycle,
    /// Explicit adapter whose bound does not cover the declared type.
    AdapterMismatch,
    /// Adapter identity with no declaration.
    UnknownAdapter,
}

impl UnresolvableKind {
    /// Stable diagnostic code for this kind.
    pub const fn error_code(self) -> ErrorCode {
        match self {
            UnresolvableKind::UnknownType => ErrorCode::E1001,
            UnresolvableKind::Void => ErrorCode::E1002,
            UnresolvableKind::BareInterface => ErrorCode::E1003,
            UnresolvableKind::AnnotationType => ErrorCode::E1004,
            UnresolvableKind::UnsupportedNesting => ErrorCode::E1005,
            UnresolvableKind::AdapterCycle => ErrorCode::E1006,
            UnresolvableKind::AdapterMismatch => ErrorCode::E1007,
            UnresolvableKind::UnknownAdapter => ErrorCode::E1008,
        }
    }

    /// Whether the problem is the type's structure rather than missing information.
    pub const fn is_invalid_wire_shape(self) -> bool {
        matches!(
            self,
            UnresolvableKind::Void | UnresolvableKind::BareInterface | UnresolvableKind::AnnotationType
        )
    }
}

/// A type that has no wire representation, with a user-facing reason.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Unresolvable {
    pub kind: UnresolvableKind,
    pub reason: String,
}

impl Unresolvable {
    pub fn new(kind: UnresolvableKind, reason: impl Into<String>) -> Self {
        Unresolvable {
            kind,
            reason: reason.into(),
        }
    }

    /// Convert into a diagnostic, optionally attached to a site label.
    pub fn to_diagnostic(&self, site: Option<&str>) -> Diagnostic {
        let mut diag = Diagnostic::error(self.kind.error_code()).with_message(self.reason.clone());
        if let Some(site) = site {
            diag = diag.with_site(site);
        }
        match self.kind {
            UnresolvableKind::UnknownType => {
                diag.with_suggestion("import or export the type explicitly")
            }
            UnresolvableKind::BareInterface => {
                diag.with_suggestion("declare an adapter for the interface")
            }
            UnresolvableKind::AdapterCycle => {
                diag.with_note("adapter targets must eventually reach a type without an adapter")
            }
            _ => diag,
        }
    }
}

impl fmt::Display for Unresolvable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.reason)
    }
}

impl std::error::Error for Unresolvable {}

/// Canonical wire shape of a type occurrence.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum SchemaType {
    Primitive(PrimitiveKind),
    /// Byte sequences.
    Binary,
    String,
    Number {
        whole: bool,
    },
    Boolean,
    /// Registry leaf with a named built-in simple type.
    Builtin(BuiltinType),
    /// A named complex or simple user type.
    ClassType(TypeDefinitionId),
    EnumType(TypeDefinitionId),
    ArrayType(Box<SchemaType>),
    /// Always anonymous.
    MapType {
        key: Box<SchemaType>,
        value: Box<SchemaType>,
    },
    /// Open, unconstrained type.
    AnyType,
    Unresolvable(Unresolvable),
}

impl SchemaType {
    pub fn array(component: SchemaType) -> Self {
        SchemaType::ArrayType(Box::new(component))
    }

    pub fn map(key: SchemaType, value: SchemaType) -> Self {
        SchemaType::MapType {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    pub fn unresolvable(kind: UnresolvableKind, reason: impl Into<String>) -> Self {
        SchemaType::Unresolvable(Unresolvable::new(kind, reason))
    }

    #[inline]
    pub fn is_unresolvable(&self) -> bool {
        matches!(self, SchemaType::Unresolvable(_))
    }

    /// The unresolvable payload, if any.
    pub fn as_unresolvable(&self) -> Option<&Unresolvable> {
        match self {
            SchemaType::Unresolvable(u) => Some(u),
            _ => None,
        }
    }

    /// Definition referenced by a class or enum type.
    pub fn definition(&self) -> Option<TypeDefinitionId> {
        match self {
            SchemaType::ClassType(id) | SchemaType::EnumType(id) => Some(*id),
            _ => None,
        }
    }

    /// Every definition referenced anywhere in this type.
    pub fn referenced_definitions(&self) -> Vec<TypeDefinitionId> {
        let mut out = Vec::new();
        self.collect_definitions(&mut out);
        out
    }

    fn collect_definitions(&self, out: &mut Vec<TypeDefinitionId>) {
        match self {
            SchemaType::ClassType(id) | SchemaType::EnumType(id) => out.push(*id),
            SchemaType::ArrayType(component) => component.collect_definitions(out),
            SchemaType::MapType { key, value } => {
                key.collect_definitions(out);
                value.collect_definitions(out);
            }
            _ => {}
        }
    }

    /// Short category name, for reports and logs.
    pub fn kind_name(&self) -> &'static str {
        match self {
            SchemaType::Primitive(_) => "primitive",
            SchemaType::Binary => "binary",
            SchemaType::String => "string",
            SchemaType::Number { .. } => "number",
            SchemaType::Boolean => "boolean",
            SchemaType::Builtin(_) => "builtin",
            SchemaType::ClassType(_) => "class",
            SchemaType::EnumType(_) => "enum",
            SchemaType::ArrayType(_) => "array",
            SchemaType::MapType { .. } => "map",
            SchemaType::AnyType => "any",
            SchemaType::Unresolvable(_) => "unresolvable",
        }
    }
}

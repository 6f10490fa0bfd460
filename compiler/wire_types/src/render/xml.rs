//! XML Schema naming policy.
//!
//! Primitives, built-ins and scalars live in the XML Schema namespace and are
//! written with the `xs:` prefix. Named user types are written as
//! `{namespace}local`. Enums keep their named type.

use std::fmt;

use wire_ir::StringInterner;

use crate::{primitive_xml_name, SchemaType, TypeDefinitionTable, XML_SCHEMA_NS};

/// Qualified XML name of a projected type.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum XmlTypeName {
    /// A named type; `namespace` is empty for the default namespace.
    Named { namespace: String, local: String },
    /// Repeated occurrences of the inner type.
    List(Box<XmlTypeName>),
    /// Anonymous type (maps, anonymous definitions).
    Anonymous,
    Unresolvable,
}

impl XmlTypeName {
    fn xs(local: &str) -> Self {
        XmlTypeName::Named {
            namespace: XML_SCHEMA_NS.to_owned(),
            local: local.to_owned(),
        }
    }

    /// Whether the name lives in the XML Schema namespace.
    pub fn is_schema_builtin(&self) -> bool {
        match self {
            XmlTypeName::Named { namespace, .. } => namespace == XML_SCHEMA_NS,
            XmlTypeName::List(inner) => inner.is_schema_builtin(),
            XmlTypeName::Anonymous | XmlTypeName::Unresolvable => false,
        }
    }
}

impl fmt::Display for XmlTypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            XmlTypeName::Named { namespace, local } if namespace == XML_SCHEMA_NS => {
                write!(f, "xs:{local}")
            }
            XmlTypeName::Named { namespace, local } if namespace.is_empty() => f.write_str(local),
            XmlTypeName::Named { namespace, local } => write!(f, "{{{namespace}}}{local}"),
            XmlTypeName::List(inner) => write!(f, "{inner}[]"),
            XmlTypeName::Anonymous => f.write_str("(anonymous)"),
            XmlTypeName::Unresolvable => f.write_str("<unresolvable>"),
        }
    }
}

/// Fold a schema type into its XML name.
pub fn xml_type_name(
    schema: &SchemaType,
    definitions: &TypeDefinitionTable,
    interner: &StringInterner,
) -> XmlTypeName {
    match schema {
        SchemaType::Primitive(kind) => XmlTypeName::xs(primitive_xml_name(*kind)),
        SchemaType::Binary => XmlTypeName::xs("base64Binary"),
        SchemaType::String => XmlTypeName::xs("string"),
        SchemaType::Number { whole: true } => XmlTypeName::xs("long"),
        SchemaType::Number { whole: false } => XmlTypeName::xs("double"),
        SchemaType::Boolean => XmlTypeName::xs("boolean"),
        SchemaType::Builtin(builtin) => XmlTypeName::xs(builtin.xml_name()),
        SchemaType::AnyType => XmlTypeName::xs("anyType"),
        SchemaType::ClassType(id) | SchemaType::EnumType(id) => {
            let Some(definition) = definitions.get(*id) else {
                return XmlTypeName::Unresolvable;
            };
            match definition.name {
                Some(name) => XmlTypeName::Named {
                    namespace: definition
                        .namespace
                        .map(|ns| interner.lookup(ns).to_owned())
                        .unwrap_or_default(),
                    local: interner.lookup(name).to_owned(),
                },
                None => XmlTypeName::Anonymous,
            }
        }
        SchemaType::ArrayType(component) => {
            XmlTypeName::List(Box::new(xml_type_name(component, definitions, interner)))
        }
        SchemaType::MapType { .. } => XmlTypeName::Anonymous,
        SchemaType::Unresolvable(_) => XmlTypeName::Unresolvable,
    }
}

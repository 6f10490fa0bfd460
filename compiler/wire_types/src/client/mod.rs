//! Client projection adapters.
//!
//! Each client language folds a `SchemaType` into a type name for generated
//! client code. Every language supplies its scalar vocabulary and its single
//! collection and map spellings; naming of user types (package conversion,
//! client-name overrides) is shared.

mod actionscript;
mod c;
mod csharp;
mod java;
mod objc;
mod php;
mod ruby;

use wire_ir::{PrimitiveKind, StringInterner};

use crate::{BuiltinType, SchemaType, TypeDefinition, TypeDefinitionTable};

pub use actionscript::ActionScriptClient;
pub use c::CClient;
pub use csharp::CSharpClient;
pub use java::JavaClient;
pub use objc::ObjCClient;
pub use php::PhpClient;
pub use ruby::RubyClient;

/// Placeholder name for types with no wire representation.
pub const UNRESOLVABLE_NAME: &str = "<unresolvable>";

/// Host package to client package replacements.
///
/// A conversion applies to the package itself and to every package below
/// it; the longest matching source package wins.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PackageConversions {
    /// Sorted by descending source length.
    entries: Vec<(String, String)>,
}

impl PackageConversions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, from: &str, to: &str) -> Self {
        self.insert(from, to);
        self
    }

    pub fn insert(&mut self, from: &str, to: &str) {
        self.entries.retain(|(existing, _)| existing != from);
        self.entries.push((from.to_owned(), to.to_owned()));
        self.entries.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
    }

    /// Converted package, or `package` unchanged.
    pub fn convert(&self, package: &str) -> String {
        for (from, to) in &self.entries {
            if package == from {
                return to.clone();
            }
            if let Some(rest) = package.strip_prefix(from.as_str()) {
                if rest.starts_with('.') {
                    return format!("{to}{rest}");
                }
            }
        }
        package.to_owned()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Naming policy of one client language.
pub trait ClientProjection: Send + Sync {
    /// Language identifier (`csharp`, `java`, ...).
    fn language(&self) -> &'static str;

    fn primitive_name(&self, kind: PrimitiveKind) -> &'static str;

    fn builtin_name(&self, builtin: BuiltinType) -> &'static str;

    fn string_name(&self) -> &'static str;

    fn number_name(&self, whole: bool) -> &'static str;

    fn boolean_name(&self) -> &'static str;

    fn binary_name(&self) -> &'static str;

    /// The open object type.
    fn any_name(&self) -> &'static str;

    /// Collection spelling; `element` is `None` for untyped elements.
    fn collection_name(&self, element: Option<&str>) -> String;

    fn map_name(&self, key: &str, value: &str) -> String;

    fn conversions(&self) -> &PackageConversions;

    fn package_separator(&self) -> &'static str {
        "."
    }

    /// Render a (converted) dotted package in the language's syntax.
    fn format_package(&self, package: &str) -> String {
        package.replace('.', self.package_separator())
    }

    /// Languages without client-side enums use the string name.
    fn enums_as_strings(&self) -> bool {
        false
    }

    /// Name of a type used as a collection element or map entry. Languages
    /// whose generics cannot hold primitives override this.
    fn element_name(
        &self,
        schema: &SchemaType,
        definitions: &TypeDefinitionTable,
        interner: &StringInterner,
    ) -> String {
        self.type_name(schema, definitions, interner)
    }

    /// Fully qualified client name of a user type.
    fn definition_name(&self, definition: &TypeDefinition, interner: &StringInterner) -> String {
        qualified_name(self, definition, interner)
    }

    /// Fold a schema type into a client type name.
    fn type_name(
        &self,
        schema: &SchemaType,
        definitions: &TypeDefinitionTable,
        interner: &StringInterner,
    ) -> String {
        match schema {
            SchemaType::Primitive(kind) => self.primitive_name(*kind).to_owned(),
            SchemaType::Binary => self.binary_name().to_owned(),
            SchemaType::String => self.string_name().to_owned(),
            SchemaType::Number { whole } => self.number_name(*whole).to_owned(),
            SchemaType::Boolean => self.boolean_name().to_owned(),
            SchemaType::Builtin(builtin) => self.builtin_name(*builtin).to_owned(),
            SchemaType::AnyType => self.any_name().to_owned(),
            SchemaType::EnumType(_) if self.enums_as_strings() => self.string_name().to_owned(),
            SchemaType::ClassType(id) | SchemaType::EnumType(id) => definitions
                .get(*id)
                .map_or_else(
                    || UNRESOLVABLE_NAME.to_owned(),
                    |definition| self.definition_name(definition, interner),
                ),
            SchemaType::ArrayType(element) => match **element {
                SchemaType::AnyType => self.collection_name(None),
                ref element => {
                    let element = self.element_name(element, definitions, interner);
                    self.collection_name(Some(&element))
                }
            },
            SchemaType::MapType { key, value } => {
                let key = self.element_name(key, definitions, interner);
                let value = self.element_name(value, definitions, interner);
                self.map_name(&key, &value)
            }
            SchemaType::Unresolvable(_) => UNRESOLVABLE_NAME.to_owned(),
        }
    }
}

/// Converted package and simple (or client) name of a user type, joined by
/// the client's package separator.
fn qualified_name<C: ClientProjection + ?Sized>(
    client: &C,
    definition: &TypeDefinition,
    interner: &StringInterner,
) -> String {
    let identity = interner.lookup(definition.identity);
    let (package, simple) = identity.rsplit_once('.').unwrap_or(("", identity));
    let simple = definition
        .client_name
        .map_or(simple, |name| interner.lookup(name));
    if package.is_empty() {
        return simple.to_owned();
    }
    let package = client.format_package(&client.conversions().convert(package));
    format!("{package}{}{simple}", client.package_separator())
}

/// Upper-case the first letter of every package segment.
fn capitalize_segments(package: &str, separator: &str) -> String {
    package
        .split('.')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(separator)
}

//! Declaration sites: accessors, parameters and return types.
//!
//! A site is where a type is *used*, as opposed to where it is declared.
//! Adapter associations and format overrides attach here.

use crate::{Name, TypeRef};

/// Explicit wire shape requested on an accessor.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ShapeOverride {
    Array,
    Boolean,
    Number,
    Object,
    String,
}

impl ShapeOverride {
    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s {
            "array" => Some(ShapeOverride::Array),
            "boolean" => Some(ShapeOverride::Boolean),
            "number" => Some(ShapeOverride::Number),
            "object" => Some(ShapeOverride::Object),
            "string" => Some(ShapeOverride::String),
            _ => None,
        }
    }
}

/// Format/serialization overrides on one site.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct FormatOverrides {
    pub shape: Option<ShapeOverride>,
    /// Custom serializer in charge of the whole value.
    pub using: Option<Name>,
    /// Treat the value as this type instead.
    pub as_type: Option<TypeRef>,
    /// Treat array/collection elements (or map values) as this type.
    pub contents_as: Option<TypeRef>,
    /// Treat map keys as this type.
    pub key_as: Option<TypeRef>,
}

impl FormatOverrides {
    pub fn is_empty(&self) -> bool {
        self.shape.is_none()
            && self.using.is_none()
            && self.as_type.is_none()
            && self.contents_as.is_none()
            && self.key_as.is_none()
    }
}

/// One occurrence of a type at an accessor, parameter or return.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct DeclSite {
    /// Human-readable location (`com.acme.Person#address`).
    pub label: Name,
    pub ty: TypeRef,
    /// Adapter declared on the accessor itself.
    pub adapter: Option<Name>,
    /// Scope whose adapters apply to this site.
    pub scope: Option<Name>,
    pub format: FormatOverrides,
}

impl DeclSite {
    pub fn new(label: Name, ty: TypeRef) -> Self {
        DeclSite {
            label,
            ty,
            adapter: None,
            scope: None,
            format: FormatOverrides::default(),
        }
    }

    #[must_use]
    pub fn with_adapter(mut self, adapter: Name) -> Self {
        self.adapter = Some(adapter);
        self
    }

    #[must_use]
    pub fn with_scope(mut self, scope: Name) -> Self {
        self.scope = Some(scope);
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: FormatOverrides) -> Self {
        self.format = format;
        self
    }
}

//! Declaration model files.
//!
//! A model is the JSON form of what a declaration scanner records: declared
//! types, adapters, adapter scopes, type definitions and the sites to
//! project. Type references use a compact notation:
//!
//! ```text
//! "int"  "java.lang.String"  "com.acme.Person[]"  "void"  "?"
//! { "type": "java.util.List", "args": ["com.acme.Person"] }
//! { "array": { "type": "java.util.List", "args": ["int"] } }
//! { "extends": "java.lang.Number" }   { "super": "java.lang.Integer" }
//! { "var": "T", "bounds": ["java.lang.Comparable"] }
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use wire_ir::{
    AdapterDecl, DeclKind, DeclSite, DeclarationTable, FormatOverrides, PrimitiveKind, Scope,
    ShapeOverride, StringInterner, TypeDecl, TypeRef,
};
use wire_types::{
    install_host_prelude, DefinitionKind, PackageConversions, TypeDefinition, TypeDefinitionTable,
};

/// Failure to read or decode a model file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot read model `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed model: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("site `{site}` requests unknown shape `{shape}`")]
    UnknownShape { site: String, shape: String },
    #[error("type `{0}` is defined more than once")]
    DuplicateDefinition(String),
}

#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum TypeRefDto {
    /// Primitive keyword, `void`, `?`, or a declared identity with optional
    /// `[]` suffix.
    Named(String),
    Generic {
        #[serde(rename = "type")]
        identity: String,
        args: Vec<TypeRefDto>,
    },
    Array {
        array: Box<TypeRefDto>,
    },
    Extends {
        extends: Box<TypeRefDto>,
    },
    Super {
        #[serde(rename = "super")]
        lower: Box<TypeRefDto>,
    },
    Variable {
        var: String,
        #[serde(default)]
        bounds: Vec<TypeRefDto>,
    },
}

impl TypeRefDto {
    pub fn to_type_ref(&self, interner: &StringInterner) -> TypeRef {
        match self {
            TypeRefDto::Named(text) => named_type(text, interner),
            TypeRefDto::Generic { identity, args } => TypeRef::generic(
                interner.intern(identity),
                args.iter().map(|arg| arg.to_type_ref(interner)).collect(),
            ),
            TypeRefDto::Array { array } => TypeRef::array(array.to_type_ref(interner)),
            TypeRefDto::Extends { extends } => {
                TypeRef::wildcard_extends(extends.to_type_ref(interner))
            }
            TypeRefDto::Super { lower } => TypeRef::Wildcard {
                upper: None,
                lower: Some(Box::new(lower.to_type_ref(interner))),
            },
            TypeRefDto::Variable { var, bounds } => TypeRef::Variable {
                name: interner.intern(var),
                bounds: bounds.iter().map(|b| b.to_type_ref(interner)).collect(),
            },
        }
    }
}

fn named_type(text: &str, interner: &StringInterner) -> TypeRef {
    if let Some(component) = text.strip_suffix("[]") {
        return TypeRef::array(named_type(component, interner));
    }
    match text {
        "void" => TypeRef::Void,
        "?" => TypeRef::unbounded_wildcard(),
        _ => match PrimitiveKind::from_keyword(text) {
            Some(kind) => TypeRef::Primitive(kind),
            None => TypeRef::declared(interner.intern(text)),
        },
    }
}

#[derive(Copy, Clone, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclKindDto {
    Class,
    Interface,
    Enum,
    Annotation,
}

impl From<DeclKindDto> for DeclKind {
    fn from(kind: DeclKindDto) -> Self {
        match kind {
            DeclKindDto::Class => DeclKind::Class,
            DeclKindDto::Interface => DeclKind::Interface,
            DeclKindDto::Enum => DeclKind::Enum,
            DeclKindDto::Annotation => DeclKind::Annotation,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct TypeDeclDto {
    pub identity: String,
    pub kind: DeclKindDto,
    #[serde(default)]
    pub type_params: Vec<String>,
    #[serde(default)]
    pub supertypes: Vec<TypeRefDto>,
    pub adapter: Option<String>,
    pub scope: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct AdapterDto {
    pub identity: String,
    pub bound: TypeRefDto,
    pub target: TypeRefDto,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ScopeAdapterDto {
    pub bound: String,
    pub adapter: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ScopeDto {
    pub name: String,
    #[serde(default)]
    pub adapters: Vec<ScopeAdapterDto>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct FormatDto {
    pub shape: Option<String>,
    pub using: Option<String>,
    #[serde(rename = "as")]
    pub as_type: Option<TypeRefDto>,
    pub contents_as: Option<TypeRefDto>,
    pub key_as: Option<TypeRefDto>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct SiteDto {
    pub label: String,
    #[serde(rename = "type")]
    pub ty: TypeRefDto,
    pub adapter: Option<String>,
    pub scope: Option<String>,
    #[serde(default)]
    pub format: FormatDto,
}

impl SiteDto {
    fn to_site(&self, interner: &StringInterner) -> Result<DeclSite, LoadError> {
        let shape = match &self.format.shape {
            None => None,
            Some(shape) => Some(ShapeOverride::from_str_opt(shape).ok_or_else(|| {
                LoadError::UnknownShape {
                    site: self.label.clone(),
                    shape: shape.clone(),
                }
            })?),
        };
        let format = FormatOverrides {
            shape,
            using: self.format.using.as_deref().map(|s| interner.intern(s)),
            as_type: self.format.as_type.as_ref().map(|t| t.to_type_ref(interner)),
            contents_as: self.format.contents_as.as_ref().map(|t| t.to_type_ref(interner)),
            key_as: self.format.key_as.as_ref().map(|t| t.to_type_ref(interner)),
        };

        let mut site = DeclSite::new(interner.intern(&self.label), self.ty.to_type_ref(interner))
            .with_format(format);
        if let Some(adapter) = &self.adapter {
            site = site.with_adapter(interner.intern(adapter));
        }
        if let Some(scope) = &self.scope {
            site = site.with_scope(interner.intern(scope));
        }
        Ok(site)
    }
}

#[derive(Copy, Clone, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DefinitionKindDto {
    Complex,
    Simple,
    Enum,
}

impl From<DefinitionKindDto> for DefinitionKind {
    fn from(kind: DefinitionKindDto) -> Self {
        match kind {
            DefinitionKindDto::Complex => DefinitionKind::Complex,
            DefinitionKindDto::Simple => DefinitionKind::Simple,
            DefinitionKindDto::Enum => DefinitionKind::Enum,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct DefinitionDto {
    pub identity: String,
    pub kind: DefinitionKindDto,
    /// Absent for anonymous types.
    pub name: Option<String>,
    pub namespace: Option<String>,
    pub client_name: Option<String>,
    #[serde(default)]
    pub properties: Vec<SiteDto>,
}

fn default_prelude() -> bool {
    true
}

/// A declaration model as stored on disk.
#[derive(Clone, Debug, Deserialize)]
pub struct Model {
    /// Install the host collection and map lattice before the model's types.
    #[serde(default = "default_prelude")]
    pub prelude: bool,
    #[serde(default)]
    pub types: Vec<TypeDeclDto>,
    #[serde(default)]
    pub adapters: Vec<AdapterDto>,
    #[serde(default)]
    pub scopes: Vec<ScopeDto>,
    #[serde(default)]
    pub definitions: Vec<DefinitionDto>,
    #[serde(default)]
    pub sites: Vec<SiteDto>,
    /// Package conversions per client language.
    #[serde(default)]
    pub packages: BTreeMap<String, BTreeMap<String, String>>,
}

/// Interned tables built from a `Model`.
pub struct LoadedModel {
    pub decls: DeclarationTable,
    pub definitions: TypeDefinitionTable,
    pub sites: Vec<DeclSite>,
    pub packages: BTreeMap<String, PackageConversions>,
}

impl LoadedModel {
    /// Package conversions for a client language.
    pub fn conversions(&self, language: &str) -> PackageConversions {
        self.packages.get(language).cloned().unwrap_or_default()
    }
}

impl Model {
    /// Read and decode a model file.
    #[tracing::instrument(level = "debug")]
    pub fn load(path: &Path) -> Result<Model, LoadError> {
        let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Model::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Model, LoadError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Intern the model into declaration and definition tables.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn build(&self, interner: &StringInterner) -> Result<LoadedModel, LoadError> {
        let mut decls = DeclarationTable::new();
        if self.prelude {
            install_host_prelude(&mut decls, interner);
        }

        for dto in &self.types {
            let mut decl = TypeDecl::new(interner.intern(&dto.identity), dto.kind.into())
                .with_type_params(dto.type_params.iter().map(|p| interner.intern(p)).collect());
            for supertype in &dto.supertypes {
                decl = decl.with_supertype(supertype.to_type_ref(interner));
            }
            if let Some(adapter) = &dto.adapter {
                decl = decl.with_adapter(interner.intern(adapter));
            }
            if let Some(scope) = &dto.scope {
                decl = decl.with_scope(interner.intern(scope));
            }
            decls.register_type(decl);
        }

        for dto in &self.adapters {
            decls.register_adapter(AdapterDecl {
                identity: interner.intern(&dto.identity),
                bound: dto.bound.to_type_ref(interner),
                target: dto.target.to_type_ref(interner),
            });
        }

        for dto in &self.scopes {
            let scope = dto.adapters.iter().fold(
                Scope::new(interner.intern(&dto.name)),
                |scope, entry| {
                    scope.with_adapter(interner.intern(&entry.bound), interner.intern(&entry.adapter))
                },
            );
            decls.register_scope(scope);
        }

        let mut definitions = TypeDefinitionTable::new();
        for dto in &self.definitions {
            let identity = interner.intern(&dto.identity);
            if definitions.contains(identity) {
                return Err(LoadError::DuplicateDefinition(dto.identity.clone()));
            }
            let mut definition = TypeDefinition::new(identity, dto.kind.into());
            if let Some(name) = &dto.name {
                definition = definition.named(interner.intern(name));
            }
            if let Some(namespace) = &dto.namespace {
                definition = definition.in_namespace(interner.intern(namespace));
            }
            if let Some(client_name) = &dto.client_name {
                definition = definition.with_client_name(interner.intern(client_name));
            }
            for property in &dto.properties {
                definition = definition.with_property(property.to_site(interner)?);
            }
            definitions.register(definition);
        }

        let sites = self
            .sites
            .iter()
            .map(|site| site.to_site(interner))
            .collect::<Result<Vec<_>, _>>()?;

        let packages = self
            .packages
            .iter()
            .map(|(language, entries)| {
                let conversions = entries
                    .iter()
                    .fold(PackageConversions::new(), |acc, (from, to)| acc.with(from, to));
                (language.clone(), conversions)
            })
            .collect();

        tracing::debug!(
            types = decls.type_count(),
            definitions = definitions.len(),
            sites = sites.len(),
            "model built"
        );
        Ok(LoadedModel {
            decls,
            definitions,
            sites,
            packages,
        })
    }
}

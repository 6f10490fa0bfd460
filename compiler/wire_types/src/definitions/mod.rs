//! Registry of user-defined wire types.
//!
//! The `TypeDefinitionTable` holds every complex, simple and enum type the
//! declaration scanner discovered. The engine only asks two questions of it:
//! "is this identity defined?" and "is it an enum?". Consumers use it to
//! render names and to walk properties.
//!
//! # Design
//!
//! - Dense storage: definitions live in a `Vec` indexed by `TypeDefinitionId`
//! - `FxHashMap` identity index for O(1) lookup
//! - `BTreeMap` index by identity for deterministic iteration

use std::collections::BTreeMap;
use std::fmt;

use rustc_hash::FxHashMap;
use wire_ir::{DeclSite, Name};

/// Handle to a registered type definition.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct TypeDefinitionId(u32);

impl TypeDefinitionId {
    /// Sentinel for a definition not yet registered.
    pub const NONE: Self = Self(u32::MAX);

    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }
}

impl fmt::Debug for TypeDefinitionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            write!(f, "TypeDefinitionId::NONE")
        } else {
            write!(f, "TypeDefinitionId({})", self.0)
        }
    }
}

/// Classification of a user type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum DefinitionKind {
    /// Element-only content (properties).
    Complex,
    /// Text content with attributes at most.
    Simple,
    Enum,
}

/// A registered user type.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct TypeDefinition {
    pub id: TypeDefinitionId,
    pub identity: Name,
    /// Declared wire name; `None` means anonymous.
    pub name: Option<Name>,
    pub namespace: Option<Name>,
    pub kind: DefinitionKind,
    /// Properties in declaration order.
    pub properties: Vec<DeclSite>,
    /// Display name override for client code.
    pub client_name: Option<Name>,
}

impl TypeDefinition {
    pub fn new(identity: Name, kind: DefinitionKind) -> Self {
        TypeDefinition {
            id: TypeDefinitionId::NONE,
            identity,
            name: None,
            namespace: None,
            kind,
            properties: Vec::new(),
            client_name: None,
        }
    }

    #[must_use]
    pub fn named(mut self, name: Name) -> Self {
        self.name = Some(name);
        self
    }

    #[must_use]
    pub fn in_namespace(mut self, namespace: Name) -> Self {
        self.namespace = Some(namespace);
        self
    }

    #[must_use]
    pub fn with_property(mut self, property: DeclSite) -> Self {
        self.properties.push(property);
        self
    }

    #[must_use]
    pub fn with_client_name(mut self, client_name: Name) -> Self {
        self.client_name = Some(client_name);
        self
    }

    #[inline]
    pub fn is_anonymous(&self) -> bool {
        self.name.is_none()
    }

    #[inline]
    pub fn is_enum(&self) -> bool {
        self.kind == DefinitionKind::Enum
    }

    #[inline]
    pub fn is_simple(&self) -> bool {
        self.kind == DefinitionKind::Simple
    }
}

/// Table of user-defined types.
#[derive(Clone, Debug, Default)]
pub struct TypeDefinitionTable {
    definitions: Vec<TypeDefinition>,
    by_identity: FxHashMap<Name, TypeDefinitionId>,
    sorted: BTreeMap<Name, TypeDefinitionId>,
}

impl TypeDefinitionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a definition and return its id.
    ///
    /// Registering an identity twice replaces the earlier definition and
    /// keeps its id, so `ClassType` references taken before stay valid.
    pub fn register(&mut self, mut definition: TypeDefinition) -> TypeDefinitionId {
        if let Some(&id) = self.by_identity.get(&definition.identity) {
            definition.id = id;
            self.definitions[id.index()] = definition;
            return id;
        }

        let raw = u32::try_from(self.definitions.len()).unwrap_or(u32::MAX - 1);
        let id = TypeDefinitionId::from_raw(raw);
        definition.id = id;
        self.by_identity.insert(definition.identity, id);
        self.sorted.insert(definition.identity, id);
        self.definitions.push(definition);
        id
    }

    #[inline]
    pub fn get(&self, id: TypeDefinitionId) -> Option<&TypeDefinition> {
        self.definitions.get(id.index())
    }

    /// Definition for a type identity.
    #[inline]
    pub fn lookup(&self, identity: Name) -> Option<&TypeDefinition> {
        self.by_identity
            .get(&identity)
            .and_then(|id| self.definitions.get(id.index()))
    }

    #[inline]
    pub fn contains(&self, identity: Name) -> bool {
        self.by_identity.contains_key(&identity)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Definitions in identity order (interning order of the identities).
    pub fn iter(&self) -> impl Iterator<Item = &TypeDefinition> {
        self.sorted
            .values()
            .filter_map(|id| self.definitions.get(id.index()))
    }
}

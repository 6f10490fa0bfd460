//! Declared-type lattice.
//!
//! The declaration scanner records every declared type it sees (classes,
//! interfaces, enums, annotations) with its type parameters and direct
//! supertypes, plus every adapter declaration and adapter scope. The shape
//! detectors and the adapter resolver answer their questions purely from
//! this table.

use rustc_hash::FxHashMap;

use crate::{Name, TypeRef};

/// Kind of a declared type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum DeclKind {
    Class,
    Interface,
    Enum,
    Annotation,
}

impl DeclKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            DeclKind::Class => "class",
            DeclKind::Interface => "interface",
            DeclKind::Enum => "enum",
            DeclKind::Annotation => "annotation",
        }
    }
}

/// One declared type.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct TypeDecl {
    pub identity: Name,
    pub kind: DeclKind,
    /// Type parameter names, in declaration order.
    pub type_params: Vec<Name>,
    /// Direct superclass first, then implemented interfaces in declaration order.
    pub supertypes: Vec<TypeRef>,
    /// Adapter declared on the type itself.
    pub adapter: Option<Name>,
    /// Enclosing adapter scope (package).
    pub scope: Option<Name>,
}

impl TypeDecl {
    pub fn new(identity: Name, kind: DeclKind) -> Self {
        TypeDecl {
            identity,
            kind,
            type_params: Vec::new(),
            supertypes: Vec::new(),
            adapter: None,
            scope: None,
        }
    }

    #[must_use]
    pub fn with_type_params(mut self, params: Vec<Name>) -> Self {
        self.type_params = params;
        self
    }

    #[must_use]
    pub fn with_supertype(mut self, supertype: TypeRef) -> Self {
        self.supertypes.push(supertype);
        self
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

    #[inline]
    pub fn is_interface(&self) -> bool {
        self.kind == DeclKind::Interface
    }
}

/// An adapter: converts between a logical `bound` type and a `target` wire type.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct AdapterDecl {
    pub identity: Name,
    /// The logical type the adapter handles.
    pub bound: TypeRef,
    /// The substitute type that goes on the wire.
    pub target: TypeRef,
}

/// A set of adapters applying to every type in an enclosing scope,
/// keyed by the identity of the type they adapt.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Scope {
    pub name: Name,
    pub adapters: FxHashMap<Name, Name>,
}

impl Scope {
    pub fn new(name: Name) -> Self {
        Scope {
            name,
            adapters: FxHashMap::default(),
        }
    }

    /// Register `adapter` for values of type `bound`.
    #[must_use]
    pub fn with_adapter(mut self, bound: Name, adapter: Name) -> Self {
        self.adapters.insert(bound, adapter);
        self
    }

    pub fn adapter_for(&self, bound: Name) -> Option<Name> {
        self.adapters.get(&bound).copied()
    }
}

/// Every declared type, adapter and scope known to a run.
#[derive(Clone, Debug, Default)]
pub struct DeclarationTable {
    types: FxHashMap<Name, TypeDecl>,
    adapters: FxHashMap<Name, AdapterDecl>,
    scopes: FxHashMap<Name, Scope>,
}

impl DeclarationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a type, replacing any previous declaration of the same identity.
    pub fn register_type(&mut self, decl: TypeDecl) {
        self.types.insert(decl.identity, decl);
    }

    pub fn register_adapter(&mut self, adapter: AdapterDecl) {
        self.adapters.insert(adapter.identity, adapter);
    }

    pub fn register_scope(&mut self, scope: Scope) {
        self.scopes.insert(scope.name, scope);
    }

    #[inline]
    pub fn get_type(&self, identity: Name) -> Option<&TypeDecl> {
        self.types.get(&identity)
    }

    #[inline]
    pub fn get_adapter(&self, identity: Name) -> Option<&AdapterDecl> {
        self.adapters.get(&identity)
    }

    #[inline]
    pub fn get_scope(&self, name: Name) -> Option<&Scope> {
        self.scopes.get(&name)
    }

    /// Direct supertypes of `identity`; empty for undeclared identities.
    pub fn supertypes(&self, identity: Name) -> &[TypeRef] {
        self.types
            .get(&identity)
            .map_or(&[][..], |decl| decl.supertypes.as_slice())
    }

    /// Whether `identity` equals `ancestor` or has it as a transitive supertype.
    pub fn is_subtype_of(&self, identity: Name, ancestor: Name) -> bool {
        if identity == ancestor {
            return true;
        }
        let mut visited = rustc_hash::FxHashSet::default();
        let mut stack = vec![identity];
        while let Some(current) = stack.pop() {
            if !visited.insert(current) {
                continue;
            }
            for supertype in self.supertypes(current) {
                if let Some(parent) = supertype.identity() {
                    if parent == ancestor {
                        return true;
                    }
                    stack.push(parent);
                }
            }
        }
        false
    }

    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    pub fn types(&self) -> impl Iterator<Item = &TypeDecl> {
        self.types.values()
    }
}

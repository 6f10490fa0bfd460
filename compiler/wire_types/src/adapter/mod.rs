//! Adapter resolution.
//!
//! An adapter converts between a logical type and a substitute wire type. It
//! can be declared on the site, on the type itself, or on an enclosing scope
//! keyed by the adapted type, and is looked up in that order. Resolution here
//! is one step only: if the target is itself adapted, the engine finds out
//! when it projects the target.

use wire_ir::{DeclSite, DeclarationTable, Name, TypeRef};

use crate::WellKnownNames;

/// A resolved adapter.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct AdapterUse {
    pub adapter: Name,
    /// The substitute type to project instead.
    pub target: TypeRef,
    /// The adapter applies to each element of an array or collection, not
    /// to the container.
    pub elementwise: bool,
}

/// An explicit adapter that cannot be applied.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum AdapterError {
    /// No declaration for the adapter identity.
    Unknown(Name),
    /// The adapter's bound covers neither the declared type nor its element.
    Mismatch { adapter: Name },
}

impl AdapterError {
    pub fn adapter(self) -> Name {
        match self {
            AdapterError::Unknown(adapter) | AdapterError::Mismatch { adapter } => adapter,
        }
    }
}

/// Looks up adapters in a declaration table.
pub struct AdapterResolver<'a> {
    decls: &'a DeclarationTable,
    names: &'a WellKnownNames,
}

impl<'a> AdapterResolver<'a> {
    pub fn new(decls: &'a DeclarationTable, names: &'a WellKnownNames) -> Self {
        AdapterResolver { decls, names }
    }

    /// Whether `adapter` can handle values of `identity`.
    ///
    /// A bound of the root object type adapts anything; otherwise the
    /// identity must be the bound or one of its subtypes. Adapters whose
    /// bound is not a declared type adapt nothing.
    pub fn adapts(&self, adapter: Name, identity: Name) -> bool {
        let Some(decl) = self.decls.get_adapter(adapter) else {
            return false;
        };
        match decl.bound.identity() {
            Some(bound) if self.names.is_object(bound) => true,
            Some(bound) => self.decls.is_subtype_of(identity, bound),
            None => false,
        }
    }

    /// Resolve the explicit adapter of a site.
    ///
    /// `element` is the element type when the site's type is an array or a
    /// collection. The adapter is checked against the element first, then
    /// against the whole type. Type-level and scope adapters are not
    /// consulted here: the engine finds them wherever the type occurs, so a
    /// site without an explicit adapter projects exactly like its type.
    pub fn resolve_adapter(
        &self,
        site: &DeclSite,
        element: Option<&TypeRef>,
    ) -> Result<Option<AdapterUse>, AdapterError> {
        let Some(adapter) = site.adapter else {
            return Ok(None);
        };
        let Some(decl) = self.decls.get_adapter(adapter) else {
            return Err(AdapterError::Unknown(adapter));
        };
        if element.is_some_and(|element| self.adapts_type(adapter, element)) {
            return Ok(Some(AdapterUse {
                adapter,
                target: decl.target.clone(),
                elementwise: true,
            }));
        }
        if self.adapts_type(adapter, &site.ty) {
            return Ok(Some(AdapterUse {
                adapter,
                target: decl.target.clone(),
                elementwise: false,
            }));
        }
        Err(AdapterError::Mismatch { adapter })
    }

    /// Adapter for a bare type: its own declared adapter, then the adapters
    /// of `scope`, then those of the type's declaring scope.
    ///
    /// Candidates that do not actually adapt the type are skipped.
    pub fn resolve_for_type(&self, identity: Name, scope: Option<Name>) -> Option<AdapterUse> {
        let declared = self.decls.get_type(identity);

        let own = declared.and_then(|decl| decl.adapter);
        let from_scope = |scope: Option<Name>| {
            scope
                .and_then(|s| self.decls.get_scope(s))
                .and_then(|s| s.adapter_for(identity))
        };

        [own, from_scope(scope), from_scope(declared.and_then(|d| d.scope))]
            .into_iter()
            .flatten()
            .find(|&adapter| self.adapts(adapter, identity))
            .and_then(|adapter| {
                self.decls.get_adapter(adapter).map(|decl| AdapterUse {
                    adapter,
                    target: decl.target.clone(),
                    elementwise: false,
                })
            })
    }

    fn adapts_type(&self, adapter: Name, ty: &TypeRef) -> bool {
        match ty {
            TypeRef::Declared { identity, .. } => self.adapts(adapter, *identity),
            // Primitives, arrays and wildcards can only be handled by an
            // adapter bound to the root object type.
            _ => self
                .decls
                .get_adapter(adapter)
                .and_then(|decl| decl.bound.identity())
                .is_some_and(|bound| self.names.is_object(bound) && !ty.is_void()),
        }
    }
}

//! Structural shape detection.
//!
//! Whether a declared type behaves like a map or a collection is decided by
//! walking its supertype lattice, not by its name: any class that (directly
//! or transitively) implements the host map interface is a map, and its key
//! and value types are whatever the inheritance chain binds the map's type
//! parameters to.
//!
//! # Algorithm
//!
//! Breadth-first over `(identity, type arguments)` pairs, starting at the
//! type itself. At each step the declaration's type parameters are bound to
//! the current arguments and substituted into its direct supertypes. The
//! first target reached is the most-derived one. Any later path reaching a
//! target with different bindings is reported as an ambiguity; the
//! most-derived binding is still used.

use std::collections::VecDeque;

use rustc_hash::{FxHashMap, FxHashSet};
use wire_ir::{DeclarationTable, Name, TypeRef};

use crate::WellKnownNames;

/// Walks deeper than this are abandoned. Real lattices are a handful of
/// levels deep; only recursive generic supertypes get anywhere near it.
const MAX_LATTICE_DEPTH: usize = 64;

/// Key and value types of a map-shaped type.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct MapShape {
    pub key: TypeRef,
    pub value: TypeRef,
}

/// Element type of a collection-shaped type.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct CollectionShape {
    pub element: TypeRef,
}

/// Conflicting bindings for one shape reached through two paths.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct AmbiguousBinding {
    /// The type whose lattice was walked.
    pub start: Name,
    /// The map or collection interface that was reached twice.
    pub interface: Name,
    /// Bindings from the most-derived path (used).
    pub chosen: Vec<TypeRef>,
    /// Bindings from a less-derived path (ignored).
    pub conflicting: Vec<TypeRef>,
}

/// A detected shape plus any ambiguity found on the way.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Detection<T> {
    pub shape: T,
    pub ambiguity: Option<AmbiguousBinding>,
}

/// Map and collection detectors over a declaration table.
pub struct ShapeDetector<'a> {
    decls: &'a DeclarationTable,
    names: &'a WellKnownNames,
}

impl<'a> ShapeDetector<'a> {
    pub fn new(decls: &'a DeclarationTable, names: &'a WellKnownNames) -> Self {
        ShapeDetector { decls, names }
    }

    /// Detect a map shape. Raw usage binds key and value to `?`.
    pub fn detect_map(&self, ty: &TypeRef) -> Option<Detection<MapShape>> {
        let map = self.names.map;
        let found = self.find_binding(ty, |identity| identity == map, 2)?;
        let mut args = found.args.into_iter();
        let key = args.next().unwrap_or_else(TypeRef::unbounded_wildcard);
        let value = args.next().unwrap_or_else(TypeRef::unbounded_wildcard);
        Some(Detection {
            shape: MapShape { key, value },
            ambiguity: found.ambiguity,
        })
    }

    /// Detect a collection shape. Raw usage binds the element to `?`.
    pub fn detect_collection(&self, ty: &TypeRef) -> Option<Detection<CollectionShape>> {
        let names = self.names;
        let found = self.find_binding(ty, |identity| names.is_collection(identity), 1)?;
        let element = found
            .args
            .into_iter()
            .next()
            .unwrap_or_else(TypeRef::unbounded_wildcard);
        Some(Detection {
            shape: CollectionShape { element },
            ambiguity: found.ambiguity,
        })
    }

    /// Identities of every type reachable upward from `identity`, breadth-first.
    pub fn supertype_chain(&self, identity: Name) -> Vec<Name> {
        let mut chain = Vec::new();
        let mut seen = FxHashSet::default();
        let mut queue = VecDeque::from([identity]);
        while let Some(current) = queue.pop_front() {
            if !seen.insert(current) {
                continue;
            }
            chain.push(current);
            for supertype in self.decls.supertypes(current) {
                if let Some(parent) = supertype.identity() {
                    queue.push_back(parent);
                }
            }
        }
        chain
    }

    fn find_binding(
        &self,
        ty: &TypeRef,
        is_target: impl Fn(Name) -> bool,
        arity: usize,
    ) -> Option<Binding> {
        let TypeRef::Declared { identity, args } = ty else {
            return None;
        };

        let mut queue = VecDeque::from([(*identity, args.clone(), 0usize)]);
        let mut visited: FxHashSet<(Name, Vec<TypeRef>)> = FxHashSet::default();
        let mut chosen: Option<(Name, Vec<TypeRef>)> = None;
        let mut ambiguity = None;

        while let Some((current, args, depth)) = queue.pop_front() {
            if !visited.insert((current, args.clone())) {
                continue;
            }

            if is_target(current) {
                let bound = normalize_args(args, arity);
                match &chosen {
                    None => chosen = Some((current, bound)),
                    Some((_, first)) if *first != bound && ambiguity.is_none() => {
                        ambiguity = Some(AmbiguousBinding {
                            start: *identity,
                            interface: current,
                            chosen: first.clone(),
                            conflicting: bound,
                        });
                    }
                    Some(_) => {}
                }
                // Nothing above a target can add information
                continue;
            }

            if depth >= MAX_LATTICE_DEPTH {
                continue;
            }
            let Some(decl) = self.decls.get_type(current) else {
                continue;
            };

            let env = bind_params(&decl.type_params, &args);
            for supertype in &decl.supertypes {
                if let TypeRef::Declared { identity, args } = supertype.substitute(&env) {
                    queue.push_back((identity, args, depth + 1));
                }
            }
        }

        chosen.map(|(_, args)| Binding { args, ambiguity })
    }
}

struct Binding {
    args: Vec<TypeRef>,
    ambiguity: Option<AmbiguousBinding>,
}

/// Bind type parameters to arguments. Raw usage (no arguments) binds every
/// parameter to the unbounded wildcard.
fn bind_params(params: &[Name], args: &[TypeRef]) -> FxHashMap<Name, TypeRef> {
    if args.is_empty() {
        return params
            .iter()
            .map(|&p| (p, TypeRef::unbounded_wildcard()))
            .collect();
    }
    params.iter().copied().zip(args.iter().cloned()).collect()
}

/// Arguments of a reached target, or `?` for each slot on raw usage.
fn normalize_args(args: Vec<TypeRef>, arity: usize) -> Vec<TypeRef> {
    if args.len() == arity {
        args
    } else {
        vec![TypeRef::unbounded_wildcard(); arity]
    }
}

#[cfg(test)]
mod tests;

//! One projection step per `TypeRef` variant.

use wire_diagnostic::{Diagnostic, ErrorCode};
use wire_ir::{DeclKind, Name, PrimitiveKind, TypeRef};

use super::Projector;
use crate::adapter::AdapterResolver;
use crate::shape::{AmbiguousBinding, MapShape, ShapeDetector};
use crate::{Context, ContextFlags, SchemaType, UnresolvableKind};

/// How many times one map identity may be open at once before the type is
/// treated as recursive.
const MAX_OPEN_MAP_REPEATS: usize = 8;

impl Projector<'_> {
    #[tracing::instrument(
        level = "trace",
        skip_all,
        fields(ty = %ty.display(&self.interner), flags = ?ctx.flags)
    )]
    pub(super) fn dispatch(&mut self, ty: &TypeRef, ctx: Context) -> SchemaType {
        match ty {
            TypeRef::Primitive(kind) => project_primitive(*kind, ctx),
            TypeRef::Void => {
                SchemaType::unresolvable(UnresolvableKind::Void, "void is not a valid wire type")
            }
            TypeRef::Array(component) => self.project_array(component, ctx),
            TypeRef::Declared { identity, .. } => self.project_declared(ty, *identity, ctx),
            // Upper bound only; `? super X` is as open as `?`
            TypeRef::Wildcard { upper, .. } => match upper.as_deref() {
                Some(bound) => self.project(bound, ctx),
                None => SchemaType::AnyType,
            },
            TypeRef::Variable { name, bounds } => self.project_variable(*name, bounds, ctx),
        }
    }

    fn project_array(&mut self, component: &TypeRef, ctx: Context) -> SchemaType {
        if ctx.in_array() {
            return SchemaType::unresolvable(
                UnresolvableKind::UnsupportedNesting,
                "multi-dimensional arrays unsupported",
            );
        }

        let element = self.project(component, ctx.enter_array());
        if element == SchemaType::Binary && self.is_byte_component(component, ctx) {
            return SchemaType::Binary;
        }
        if ctx.in_collection() {
            return SchemaType::unresolvable(
                UnresolvableKind::UnsupportedNesting,
                format!(
                    "array `{}` nested in a collection is unsupported",
                    TypeRef::array(component.clone()).display(&self.interner)
                ),
            );
        }
        match element {
            failed @ SchemaType::Unresolvable(_) => failed,
            element => SchemaType::array(element),
        }
    }

    /// Whether an array component is the primitive `byte`, directly or
    /// through adapters, wildcards and type variables. A component that is
    /// binary on its own (a registry entry) stays an element.
    fn is_byte_component(&mut self, component: &TypeRef, ctx: Context) -> bool {
        self.project(component, ctx) == SchemaType::Primitive(PrimitiveKind::Byte)
    }

    fn project_declared(&mut self, ty: &TypeRef, identity: Name, ctx: Context) -> SchemaType {
        let adapter =
            AdapterResolver::new(self.decls, &self.names).resolve_for_type(identity, ctx.scope);
        if let Some(found) = adapter {
            if ctx.adapter_depth >= self.config.max_adapter_chain {
                return SchemaType::unresolvable(
                    UnresolvableKind::AdapterCycle,
                    format!(
                        "adapter `{}` closes a chain longer than {} adapters",
                        self.interner.lookup(found.adapter),
                        self.config.max_adapter_chain
                    ),
                );
            }
            tracing::debug!(
                ty = self.interner.lookup(identity),
                adapter = self.interner.lookup(found.adapter),
                "type adapter redirects"
            );
            return self.project(&found.target, ctx.follow_adapter());
        }

        let map = ShapeDetector::new(self.decls, &self.names).detect_map(ty);
        if let Some(found) = map {
            tracing::debug!(ty = self.interner.lookup(identity), "map shape detected");
            self.record_ambiguity(found.ambiguity);
            if self.is_recursive_map(ty, identity) {
                tracing::debug!(ty = self.interner.lookup(identity), "recursive map type");
                return SchemaType::AnyType;
            }
            self.open_maps.push(ty.clone());
            let result = self.project_map_entries(found.shape, ctx);
            self.open_maps.pop();
            return result;
        }

        if let Some(known) = self.known.lookup(identity) {
            return known;
        }

        let collection = ShapeDetector::new(self.decls, &self.names).detect_collection(ty);
        if let Some(found) = collection {
            tracing::debug!(ty = self.interner.lookup(identity), "collection shape detected");
            self.record_ambiguity(found.ambiguity);
            if ctx.flags.intersects(ContextFlags::SEQUENCE_POSITION) {
                return SchemaType::unresolvable(
                    UnresolvableKind::UnsupportedNesting,
                    format!(
                        "collection `{}` nested in an array or collection is unsupported",
                        ty.display(&self.interner)
                    ),
                );
            }
            return match self.project(&found.shape.element, ctx.enter_collection()) {
                failed @ SchemaType::Unresolvable(_) => failed,
                element => SchemaType::array(element),
            };
        }

        if let Some(definition) = self.definitions.lookup(identity) {
            return if definition.is_enum() {
                SchemaType::EnumType(definition.id)
            } else {
                SchemaType::ClassType(definition.id)
            };
        }

        let name = self.interner.lookup(identity);
        match self.decls.get_type(identity).map(|decl| decl.kind) {
            Some(DeclKind::Interface) if ctx.flags.intersects(ContextFlags::ELEMENT_POSITION) => {
                SchemaType::AnyType
            }
            Some(DeclKind::Interface) => SchemaType::unresolvable(
                UnresolvableKind::BareInterface,
                format!("bare interface `{name}` cannot be a wire type"),
            ),
            Some(DeclKind::Annotation) => SchemaType::unresolvable(
                UnresolvableKind::AnnotationType,
                format!("annotation type `{name}` cannot be a wire type"),
            ),
            _ => SchemaType::unresolvable(
                UnresolvableKind::UnknownType,
                format!("unknown type `{name}`; import or export it explicitly"),
            ),
        }
    }

    fn project_map_entries(&mut self, shape: MapShape, ctx: Context) -> SchemaType {
        let MapShape { key, value } = shape;
        let key = self.project(&key, ctx.enter_map());
        if key.is_unresolvable() {
            return key;
        }
        let value = self.project(&value, ctx.enter_map());
        if value.is_unresolvable() {
            return value;
        }
        SchemaType::map(key, value)
    }

    /// A map type whose entries are already being projected, such as
    /// `Tree extends HashMap<String, Tree>`. Generic maps that grow on each
    /// step (`Node<T> extends HashMap<String, Node<List<T>>>`) are caught by
    /// a cap on how often one identity may be open.
    fn is_recursive_map(&self, ty: &TypeRef, identity: Name) -> bool {
        let mut repeats = 0;
        for open in &self.open_maps {
            if open == ty {
                return true;
            }
            if open.identity() == Some(identity) {
                repeats += 1;
            }
        }
        repeats >= MAX_OPEN_MAP_REPEATS
    }

    fn project_variable(&mut self, name: Name, bounds: &[TypeRef], ctx: Context) -> SchemaType {
        let Some(bound) = bounds.first() else {
            return SchemaType::AnyType;
        };
        // `T extends Comparable<T>` refers back to itself
        if self.open_variables.contains(&name) {
            return SchemaType::AnyType;
        }
        self.open_variables.push(name);
        let result = self.project(bound, ctx);
        self.open_variables.pop();
        result
    }

    /// Warn about an ambiguous binding once per engine, whether or not the
    /// projection that found it is later served from the cache.
    fn record_ambiguity(&mut self, ambiguity: Option<AmbiguousBinding>) {
        let Some(ambiguity) = ambiguity else {
            return;
        };
        if !self
            .reported_ambiguities
            .insert((ambiguity.start, ambiguity.interface))
        {
            return;
        }
        let start = self.interner.lookup(ambiguity.start);
        let interface = self.interner.lookup(ambiguity.interface);
        let chosen = self.render_args(&ambiguity.chosen);
        let conflicting = self.render_args(&ambiguity.conflicting);

        tracing::warn!(
            start,
            interface,
            %chosen,
            %conflicting,
            "ambiguous binding resolved by the most-derived path"
        );
        self.warnings.push(
            Diagnostic::warning(ErrorCode::W1001)
                .with_message(format!(
                    "`{start}` reaches `{interface}` with conflicting type arguments"
                ))
                .with_site(start)
                .with_note(format!("using <{chosen}>, ignoring <{conflicting}>")),
        );
    }

    fn render_args(&self, args: &[TypeRef]) -> String {
        args.iter()
            .map(|arg| arg.display(&self.interner))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn project_primitive(kind: PrimitiveKind, ctx: Context) -> SchemaType {
    if kind == PrimitiveKind::Byte && ctx.in_array() {
        SchemaType::Binary
    } else {
        SchemaType::Primitive(kind)
    }
}

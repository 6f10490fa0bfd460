//! Type projection engine.
//!
//! `Projector` maps a host `TypeRef` to its canonical `SchemaType`. One
//! projector serves one consumer (XML, JSON, a client language) with that
//! consumer's known-type registry; all projectors of a run share the same
//! declaration and definition tables read-only.
//!
//! # Architecture
//!
//! ```text
//! project_site(site)
//!   ├─ format overrides (shape / serializer / substitute / contents)
//!   ├─ site adapter (whole type or element-wise)
//!   └─ project(ty, ctx)          memoized on (ty, ctx)
//!        └─ dispatch             one arm per TypeRef variant
//!             Declared: type adapter → map → registry → collection
//!                       → definition → interface/annotation → unknown
//! ```
//!
//! The `Context` is a value passed down every call; the engine keeps no
//! per-call state apart from the memo table and the type variables and map
//! types currently being expanded.

mod dispatch;

use rustc_hash::{FxHashMap, FxHashSet};
use wire_diagnostic::Diagnostic;
use wire_ir::{DeclSite, DeclarationTable, Name, SharedInterner, TypeRef};

use crate::adapter::{AdapterError, AdapterResolver};
use crate::overrides::{apply_overrides, classify, OverrideStep, Slot};
use crate::shape::ShapeDetector;
use crate::stack::ensure_sufficient_stack;
use crate::{
    Context, HostConventions, KnownTypeRegistry, SchemaType, TypeDefinitionId,
    TypeDefinitionTable, Unresolvable, UnresolvableKind, WellKnownNames,
};

/// Per-engine settings.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct ProjectorConfig {
    /// Reuse results for repeated `(type, context)` pairs.
    pub memoize: bool,
    /// Adapters followed in one chain before it is reported as a cycle.
    pub max_adapter_chain: u8,
    /// Apply accessor format overrides in `project_site`. Only the JSON-facing
    /// consumers honor them.
    pub honor_format_overrides: bool,
}

impl Default for ProjectorConfig {
    fn default() -> Self {
        ProjectorConfig {
            memoize: true,
            max_adapter_chain: 16,
            honor_format_overrides: true,
        }
    }
}

/// The type projection engine.
pub struct Projector<'a> {
    decls: &'a DeclarationTable,
    definitions: &'a TypeDefinitionTable,
    known: KnownTypeRegistry,
    names: WellKnownNames,
    interner: SharedInterner,
    config: ProjectorConfig,
    cache: FxHashMap<(TypeRef, Context), SchemaType>,
    warnings: Vec<Diagnostic>,
    /// `(start, interface)` pairs already warned about.
    reported_ambiguities: FxHashSet<(Name, Name)>,
    /// Type variables whose bound is being projected.
    open_variables: Vec<Name>,
    /// Map types whose key and value are being projected.
    open_maps: Vec<TypeRef>,
}

impl<'a> Projector<'a> {
    pub fn new(
        decls: &'a DeclarationTable,
        definitions: &'a TypeDefinitionTable,
        known: KnownTypeRegistry,
        interner: SharedInterner,
    ) -> Self {
        let names = WellKnownNames::new(&interner, &HostConventions::default());
        Projector {
            decls,
            definitions,
            known,
            names,
            interner,
            config: ProjectorConfig::default(),
            cache: FxHashMap::default(),
            warnings: Vec::new(),
            reported_ambiguities: FxHashSet::default(),
            open_variables: Vec::new(),
            open_maps: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: ProjectorConfig) -> Self {
        self.config = config;
        self.cache.clear();
        self
    }

    #[must_use]
    pub fn with_conventions(mut self, conventions: &HostConventions) -> Self {
        self.names = WellKnownNames::new(&self.interner, conventions);
        self.cache.clear();
        self
    }

    #[inline]
    pub fn config(&self) -> ProjectorConfig {
        self.config
    }

    #[inline]
    pub fn definitions(&self) -> &'a TypeDefinitionTable {
        self.definitions
    }

    #[inline]
    pub fn interner(&self) -> &SharedInterner {
        &self.interner
    }

    /// Project a type occurrence in a context.
    ///
    /// Never fails: problems come back as `SchemaType::Unresolvable`.
    pub fn project(&mut self, ty: &TypeRef, ctx: Context) -> SchemaType {
        ensure_sufficient_stack(|| self.project_memoized(ty, ctx))
    }

    /// Project a type at the top level, outside any site or scope.
    pub fn project_type(&mut self, ty: &TypeRef) -> SchemaType {
        self.project(ty, Context::root(None))
    }

    /// Project a site: format overrides, then the site's adapter, then the
    /// declared type.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn project_site(&mut self, site: &DeclSite) -> SchemaType {
        tracing::debug!(site = self.interner.lookup(site.label), "projecting site");
        let ctx = Context::root(site.scope);

        if !self.config.honor_format_overrides {
            return self.project_site_base(site, ctx);
        }

        match classify(&site.format) {
            OverrideStep::Final(schema) => schema,
            OverrideStep::Redirect(substitute) => self.project(substitute, ctx),
            OverrideStep::None => self.project_site_base(site, ctx),
            OverrideStep::Contents => {
                let base = self.project_site_base(site, ctx);
                apply_overrides(base, &site.format, |substitute, slot| {
                    let slot_ctx = match slot {
                        Slot::Whole => ctx,
                        Slot::Element => ctx.enter_collection(),
                        Slot::Key | Slot::Value => ctx.enter_map(),
                    };
                    self.project(substitute, slot_ctx)
                })
            }
        }
    }

    /// `project_site` for callers that propagate failures with `?`.
    pub fn project_checked(&mut self, site: &DeclSite) -> Result<SchemaType, Unresolvable> {
        match self.project_site(site) {
            SchemaType::Unresolvable(unresolvable) => Err(unresolvable),
            schema => Ok(schema),
        }
    }

    /// Every definition reachable from `root` through property types,
    /// `root` first, in depth-first discovery order.
    ///
    /// Each definition is visited once, so mutually recursive classes
    /// terminate.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn reachable_definitions(&mut self, root: TypeDefinitionId) -> Vec<TypeDefinitionId> {
        let definitions = self.definitions;
        let mut visited = FxHashSet::default();
        let mut order = Vec::new();
        let mut stack = vec![root];

        while let Some(id) = stack.pop() {
            if !visited.insert(id) {
                continue;
            }
            let Some(definition) = definitions.get(id) else {
                continue;
            };
            order.push(id);

            let mut referenced = Vec::new();
            for property in &definition.properties {
                referenced.extend(self.project_site(property).referenced_definitions());
            }
            // Reverse so the first property's types are explored first
            stack.extend(referenced.into_iter().rev());
        }

        tracing::debug!(count = order.len(), "reachable definitions collected");
        order
    }

    /// Drain warnings (ambiguous bindings) recorded since the last call.
    pub fn take_warnings(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.warnings)
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    fn project_memoized(&mut self, ty: &TypeRef, ctx: Context) -> SchemaType {
        // Results under an open type variable or map depend on what is open,
        // which the key does not capture.
        let cacheable =
            self.config.memoize && self.open_variables.is_empty() && self.open_maps.is_empty();
        if !cacheable {
            return self.dispatch(ty, ctx);
        }

        let key = (ty.clone(), ctx);
        if let Some(hit) = self.cache.get(&key) {
            tracing::trace!("projection cache hit");
            return hit.clone();
        }
        let result = self.dispatch(ty, ctx);
        self.cache.insert(key, result.clone());
        result
    }

    /// The site's adapter, then its declared type.
    fn project_site_base(&mut self, site: &DeclSite, ctx: Context) -> SchemaType {
        let element = self.element_of(&site.ty);
        let resolved =
            AdapterResolver::new(self.decls, &self.names).resolve_adapter(site, element.as_ref());

        let found = match resolved {
            Ok(Some(found)) => found,
            Ok(None) => return self.project(&site.ty, ctx),
            Err(AdapterError::Unknown(adapter)) => {
                return SchemaType::unresolvable(
                    UnresolvableKind::UnknownAdapter,
                    format!("adapter `{}` is not declared", self.interner.lookup(adapter)),
                );
            }
            Err(AdapterError::Mismatch { adapter }) => {
                return SchemaType::unresolvable(
                    UnresolvableKind::AdapterMismatch,
                    format!(
                        "adapter `{}` does not adapt `{}`",
                        self.interner.lookup(adapter),
                        site.ty.display(&self.interner)
                    ),
                );
            }
        };

        tracing::debug!(
            adapter = self.interner.lookup(found.adapter),
            elementwise = found.elementwise,
            "site adapter applied"
        );
        let ctx = ctx.follow_adapter();
        if !found.elementwise {
            return self.project(&found.target, ctx);
        }
        // The target replaces the element; the container rules still apply
        if matches!(site.ty, TypeRef::Array(_)) {
            return self.project(&TypeRef::array(found.target), ctx);
        }
        match self.project(&found.target, ctx.enter_collection()) {
            failed @ SchemaType::Unresolvable(_) => failed,
            element => SchemaType::array(element),
        }
    }

    /// Element type of an array or collection, with wildcards and type
    /// variables replaced by their first bound.
    fn element_of(&self, ty: &TypeRef) -> Option<TypeRef> {
        let element = match ty {
            TypeRef::Array(component) => (**component).clone(),
            TypeRef::Declared { .. } => {
                ShapeDetector::new(self.decls, &self.names)
                    .detect_collection(ty)?
                    .shape
                    .element
            }
            _ => return None,
        };
        Some(first_bound(element))
    }
}

/// Strip wildcards and type variables down to their first bound. A wildcard
/// without an upper bound is left unbounded.
fn first_bound(ty: TypeRef) -> TypeRef {
    match ty {
        TypeRef::Wildcard {
            upper: Some(bound), ..
        } => first_bound(*bound),
        TypeRef::Wildcard { upper: None, .. } => TypeRef::unbounded_wildcard(),
        TypeRef::Variable { bounds, .. } => match bounds.into_iter().next() {
            Some(bound) => first_bound(bound),
            None => TypeRef::unbounded_wildcard(),
        },
        other => other,
    }
}

#[cfg(test)]
mod tests;

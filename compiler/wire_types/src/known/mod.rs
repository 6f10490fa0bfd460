//! Known-type registry.
//!
//! Host runtime-library types (dates, big numbers, URIs, binary handles...)
//! have fixed wire representations and no user-visible structure. The
//! registry maps their identities, or identity prefixes, to a `SchemaType`.
//!
//! Exact entries win over prefix entries; among prefixes the longest match
//! wins. The registry is built once per engine and never changes during a run.

mod presets;

use rustc_hash::FxHashMap;
use wire_ir::{Name, SharedInterner};

use crate::SchemaType;

pub use presets::DateFormat;

/// Identity-or-prefix to schema type table.
#[derive(Clone)]
pub struct KnownTypeRegistry {
    interner: SharedInterner,
    exact: FxHashMap<Name, SchemaType>,
    /// Kept sorted by descending prefix length.
    prefixes: Vec<(String, SchemaType)>,
}

impl KnownTypeRegistry {
    /// Create an empty registry.
    pub fn new(interner: SharedInterner) -> Self {
        KnownTypeRegistry {
            interner,
            exact: FxHashMap::default(),
            prefixes: Vec::new(),
        }
    }

    /// Register an exact identity, replacing any earlier entry.
    pub fn insert(&mut self, identity: &str, schema: SchemaType) {
        let name = self.interner.intern(identity);
        self.exact.insert(name, schema);
    }

    /// Register an identity prefix.
    pub fn insert_prefix(&mut self, prefix: &str, schema: SchemaType) {
        if let Some(entry) = self.prefixes.iter_mut().find(|(p, _)| p == prefix) {
            entry.1 = schema;
            return;
        }
        self.prefixes.push((prefix.to_owned(), schema));
        // Stable: equal-length prefixes keep registration order
        self.prefixes.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
    }

    /// Schema type for a library identity.
    pub fn lookup(&self, identity: Name) -> Option<SchemaType> {
        if let Some(schema) = self.exact.get(&identity) {
            return Some(schema.clone());
        }
        if self.prefixes.is_empty() {
            return None;
        }
        let text = self.interner.lookup(identity);
        self.prefixes
            .iter()
            .find(|(prefix, _)| text.starts_with(prefix.as_str()))
            .map(|(_, schema)| schema.clone())
    }

    #[inline]
    pub fn contains(&self, identity: Name) -> bool {
        self.lookup(identity).is_some()
    }

    /// Number of exact plus prefix entries.
    pub fn len(&self) -> usize {
        self.exact.len() + self.prefixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exact.is_empty() && self.prefixes.is_empty()
    }
}

impl std::fmt::Debug for KnownTypeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KnownTypeRegistry")
            .field("exact", &self.exact.len())
            .field("prefixes", &self.prefixes.len())
            .finish()
    }
}

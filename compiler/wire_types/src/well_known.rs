//! Host conventions and their pre-interned names.
//!
//! The shape detectors and the adapter resolver compare identities against a
//! handful of host-library types (the map interface, the collection
//! interfaces, the root object type). [`WellKnownNames`] interns them once
//! per engine so every comparison is a `Name` (u32) equality instead of an
//! interner lookup.

use wire_ir::{Name, StringInterner};

/// Identities of the host library's structural types.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HostConventions {
    /// The canonical associative mapping interface.
    pub map: String,
    /// Interfaces whose implementors behave like ordered sequences.
    pub collections: Vec<String>,
    /// The root of the class hierarchy.
    pub object: String,
}

impl Default for HostConventions {
    fn default() -> Self {
        HostConventions {
            map: "java.util.Map".to_owned(),
            collections: vec![
                "java.util.Collection".to_owned(),
                "java.lang.Iterable".to_owned(),
            ],
            object: "java.lang.Object".to_owned(),
        }
    }
}

/// Pre-interned names for the host conventions.
#[derive(Clone, Debug)]
pub struct WellKnownNames {
    pub map: Name,
    pub collections: Vec<Name>,
    pub object: Name,
}

impl WellKnownNames {
    /// Intern all well-known names using the given interner.
    pub fn new(interner: &StringInterner, conventions: &HostConventions) -> Self {
        WellKnownNames {
            map: interner.intern(&conventions.map),
            collections: conventions
                .collections
                .iter()
                .map(|c| interner.intern(c))
                .collect(),
            object: interner.intern(&conventions.object),
        }
    }

    #[inline]
    pub fn is_map(&self, identity: Name) -> bool {
        identity == self.map
    }

    #[inline]
    pub fn is_collection(&self, identity: Name) -> bool {
        self.collections.contains(&identity)
    }

    #[inline]
    pub fn is_object(&self, identity: Name) -> bool {
        identity == self.object
    }
}

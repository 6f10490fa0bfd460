//! Projection context.
//!
//! The context is an immutable value threaded through every recursive
//! projection call. Nothing about it is stored on the engine, so the same
//! engine can be re-entered for a nested type without any save/restore.

use bitflags::bitflags;
use wire_ir::Name;

bitflags! {
    /// Where the type being projected sits.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct ContextFlags: u8 {
        /// Component of an array.
        const IN_ARRAY = 1 << 0;
        /// Element of a collection.
        const IN_COLLECTION = 1 << 1;
        /// Key or value of a map.
        const IN_MAP = 1 << 2;
    }
}

impl Default for ContextFlags {
    fn default() -> Self {
        Self::empty()
    }
}

impl ContextFlags {
    /// Positions in which a bare interface degrades to the open type.
    pub const ELEMENT_POSITION: Self =
        Self::from_bits_truncate(Self::IN_COLLECTION.bits() | Self::IN_MAP.bits());

    /// Positions in which a nested array or collection is rejected.
    pub const SEQUENCE_POSITION: Self =
        Self::from_bits_truncate(Self::IN_ARRAY.bits() | Self::IN_COLLECTION.bits());
}

/// Contextual state for one projection step.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Context {
    pub flags: ContextFlags,
    /// Adapter scope of the originating site.
    pub scope: Option<Name>,
    /// Number of adapters followed to reach this type.
    pub adapter_depth: u8,
}

impl Context {
    /// Top-level context for a site in `scope`.
    pub fn root(scope: Option<Name>) -> Self {
        Context {
            flags: ContextFlags::empty(),
            scope,
            adapter_depth: 0,
        }
    }

    #[inline]
    pub fn in_array(self) -> bool {
        self.flags.contains(ContextFlags::IN_ARRAY)
    }

    #[inline]
    pub fn in_collection(self) -> bool {
        self.flags.contains(ContextFlags::IN_COLLECTION)
    }

    /// Context for an array component.
    #[must_use]
    pub fn enter_array(self) -> Self {
        Context {
            flags: self.flags | ContextFlags::IN_ARRAY,
            ..self
        }
    }

    /// Context for a collection element: the position flags start over with
    /// only the collection flag. Scope and adapter depth carry over.
    #[must_use]
    pub fn enter_collection(self) -> Self {
        Context {
            flags: ContextFlags::IN_COLLECTION,
            ..self
        }
    }

    /// Context for a map key or value: the position flags start over with
    /// only the map flag. Scope and adapter depth carry over.
    #[must_use]
    pub fn enter_map(self) -> Self {
        Context {
            flags: ContextFlags::IN_MAP,
            ..self
        }
    }

    /// Context for the target of an adapter.
    #[must_use]
    pub fn follow_adapter(self) -> Self {
        Context {
            adapter_depth: self.adapter_depth.saturating_add(1),
            ..self
        }
    }
}

//! Wire IR - host-side input model for type projection.
//!
//! This crate holds everything the declaration scanner produces and the
//! projection engine consumes:
//! - Names for interned type identities
//! - `TypeRef`, one occurrence of a type in the host type system
//! - `DeclarationTable`, the declared-type lattice (supertypes, type
//!   parameters, adapters, scopes)
//! - `DeclSite`, an accessor/parameter/return occurrence with its adapter and
//!   format annotations
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: identities are `Name(u32)` so lookups and cycle
//!   checks are integer comparisons.
//! - **Immutable Input**: nothing here is mutated once the scanner finishes;
//!   the engine only reads.

mod decl;
mod interner;
mod name;
mod site;
mod type_ref;

pub use decl::{AdapterDecl, DeclKind, DeclarationTable, Scope, TypeDecl};
pub use interner::{InternError, SharedInterner, StringInterner};
pub use name::Name;
pub use site::{DeclSite, FormatOverrides, ShapeOverride};
pub use type_ref::{PrimitiveKind, TypeRef};

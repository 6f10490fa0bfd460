//! Type projection for Wire.
//!
//! Maps host types (`wire_ir::TypeRef`) to the canonical wire schema
//! (`SchemaType`) that every serialization consumer renders from:
//! - `Projector`, the projection engine, memoized per `(type, context)`
//! - `KnownTypeRegistry`, the per-consumer table of host types with a fixed
//!   wire meaning
//! - `ShapeDetector`, map and collection detection through the declared
//!   supertype lattice
//! - `AdapterResolver`, site, type and scope adapters
//! - rendering policies for XML, JSON and the client languages
//!
//! # Failure Model
//!
//! Projection never panics and never aborts: a type with no wire form
//! projects to `SchemaType::Unresolvable`, which carries its reason and
//! propagates through every enclosing array and map.

mod adapter;
pub mod client;
mod definitions;
mod engine;
mod flags;
mod known;
mod overrides;
mod prelude;
mod render;
mod schema;
mod shape;
mod stack;
mod well_known;

pub use adapter::{AdapterError, AdapterResolver, AdapterUse};
pub use client::{ClientProjection, PackageConversions};
pub use definitions::{DefinitionKind, TypeDefinition, TypeDefinitionId, TypeDefinitionTable};
pub use engine::{Projector, ProjectorConfig};
pub use flags::{Context, ContextFlags};
pub use known::{DateFormat, KnownTypeRegistry};
pub use overrides::{apply_overrides, classify, shape_schema, OverrideStep, Slot};
pub use prelude::install_host_prelude;
pub use render::{json_shape, xml_type_name, JsonShape, XmlTypeName};
pub use schema::{
    primitive_xml_name, BuiltinType, SchemaType, Unresolvable, UnresolvableKind, XML_SCHEMA_NS,
};
pub use shape::{AmbiguousBinding, CollectionShape, Detection, MapShape, ShapeDetector};
pub use well_known::{HostConventions, WellKnownNames};

//! Format and serialization overrides.
//!
//! Overrides on an accessor take priority over everything the engine would
//! infer from the declared type. The rules are checked in order and the first
//! one that matches is final:
//!
//! 1. An explicit shape returns the corresponding schema type directly.
//! 2. A custom serializer collapses to the open object type.
//! 3. A substitute type redirects projection to that type.
//! 4. Per-element substitutes replace the element of an array, or the key
//!    and value of a map, independently.

use wire_ir::{FormatOverrides, ShapeOverride, TypeRef};

use crate::SchemaType;

/// What the override layer decided before any projection happens.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum OverrideStep<'f> {
    /// Final result; the declared type is never consulted.
    Final(SchemaType),
    /// Project this type instead of the declared one.
    Redirect(&'f TypeRef),
    /// Project the declared type, then apply element substitutes.
    Contents,
    /// No override applies.
    None,
}

/// Position of a substitute inside the base schema type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Slot {
    Whole,
    Element,
    Key,
    Value,
}

/// Schema type for an explicit shape.
pub fn shape_schema(shape: ShapeOverride) -> SchemaType {
    match shape {
        ShapeOverride::Array => SchemaType::array(SchemaType::AnyType),
        ShapeOverride::Boolean => SchemaType::Boolean,
        ShapeOverride::Number => SchemaType::Number { whole: false },
        ShapeOverride::Object => SchemaType::AnyType,
        ShapeOverride::String => SchemaType::String,
    }
}

/// Rules 1 to 3, and whether rule 4 needs the projected base.
pub fn classify(overrides: &FormatOverrides) -> OverrideStep<'_> {
    if let Some(shape) = overrides.shape {
        return OverrideStep::Final(shape_schema(shape));
    }
    if overrides.using.is_some() {
        return OverrideStep::Final(SchemaType::AnyType);
    }
    if let Some(substitute) = &overrides.as_type {
        return OverrideStep::Redirect(substitute);
    }
    if overrides.contents_as.is_some() || overrides.key_as.is_some() {
        return OverrideStep::Contents;
    }
    OverrideStep::None
}

/// Apply the override rules to an already projected `base`.
///
/// `project` resolves a substitute type in the given slot. An unresolvable
/// substitute replaces the whole result. Bases that are neither arrays nor
/// maps pass through untouched when only element substitutes are present.
pub fn apply_overrides(
    base: SchemaType,
    overrides: &FormatOverrides,
    mut project: impl FnMut(&TypeRef, Slot) -> SchemaType,
) -> SchemaType {
    match classify(overrides) {
        OverrideStep::Final(schema) => schema,
        OverrideStep::Redirect(substitute) => project(substitute, Slot::Whole),
        OverrideStep::None => base,
        OverrideStep::Contents => match base {
            SchemaType::ArrayType(element) => match &overrides.contents_as {
                Some(contents) => match project(contents, Slot::Element) {
                    failed @ SchemaType::Unresolvable(_) => failed,
                    element => SchemaType::array(element),
                },
                None => SchemaType::ArrayType(element),
            },
            SchemaType::MapType { key, value } => {
                let key = match &overrides.key_as {
                    Some(substitute) => project(substitute, Slot::Key),
                    None => *key,
                };
                let value = match &overrides.contents_as {
                    Some(substitute) => project(substitute, Slot::Value),
                    None => *value,
                };
                if key.is_unresolvable() {
                    return key;
                }
                if value.is_unresolvable() {
                    return value;
                }
                SchemaType::map(key, value)
            }
            other => other,
        },
    }
}

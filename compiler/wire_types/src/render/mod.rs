//! Consumer rendering policies.
//!
//! The engine produces one canonical `SchemaType`; each consumer folds it
//! into its own vocabulary. Policies are thin and declarative: they never
//! look at host types, only at schema types and the definition table.

mod json;
mod xml;

pub use json::{json_shape, JsonShape};
pub use xml::{xml_type_name, XmlTypeName};

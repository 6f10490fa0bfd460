//! Built-in registry tables for the XML-facing and JSON-facing consumers.

use wire_ir::{PrimitiveKind, SharedInterner};

use super::KnownTypeRegistry;
use crate::{BuiltinType, SchemaType};

/// How date/time library types appear in JSON.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum DateFormat {
    /// Epoch milliseconds (whole numbers); calendar dates use their
    /// built-in types.
    #[default]
    Millis,
    /// Formatted strings.
    String,
}

impl DateFormat {
    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s {
            "millis" => Some(DateFormat::Millis),
            "string" => Some(DateFormat::String),
            _ => None,
        }
    }

    /// The representation of a date type whose millis rendering is `millis`.
    fn date_type(self, millis: SchemaType) -> SchemaType {
        match self {
            DateFormat::Millis => millis,
            DateFormat::String => SchemaType::String,
        }
    }
}

const XML_DATE_TIMES: &[&str] = &[
    "java.util.Calendar",
    "java.util.Date",
    "java.sql.Timestamp",
    "java.util.GregorianCalendar",
    "javax.xml.datatype.XMLGregorianCalendar",
    "java.time.LocalDateTime",
    "java.time.OffsetDateTime",
    "java.time.ZonedDateTime",
    "java.time.Instant",
];

const BINARY_HANDLES: &[&str] = &[
    "java.nio.ByteBuffer",
    "java.awt.Image",
    "javax.activation.DataHandler",
    "javax.xml.transform.Source",
];

const OPEN_OBJECTS: &[&str] = &["java.lang.Object", "java.lang.Record", "java.io.Serializable"];

impl KnownTypeRegistry {
    /// Registry for XML Schema projection.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn xml(interner: SharedInterner) -> Self {
        let mut registry = KnownTypeRegistry::new(interner);

        registry.insert("java.lang.Boolean", SchemaType::Primitive(PrimitiveKind::Boolean));
        registry.insert("java.lang.Byte", SchemaType::Primitive(PrimitiveKind::Byte));
        registry.insert("java.lang.Short", SchemaType::Primitive(PrimitiveKind::Short));
        registry.insert("java.lang.Integer", SchemaType::Primitive(PrimitiveKind::Int));
        registry.insert("java.lang.Long", SchemaType::Primitive(PrimitiveKind::Long));
        registry.insert("java.lang.Float", SchemaType::Primitive(PrimitiveKind::Float));
        registry.insert("java.lang.Double", SchemaType::Primitive(PrimitiveKind::Double));
        registry.insert("java.lang.Character", SchemaType::Primitive(PrimitiveKind::Char));
        registry.insert("java.lang.String", SchemaType::String);
        registry.insert("java.math.BigInteger", SchemaType::Builtin(BuiltinType::Integer));
        registry.insert("java.math.BigDecimal", SchemaType::Builtin(BuiltinType::Decimal));
        for identity in XML_DATE_TIMES {
            registry.insert(identity, SchemaType::Builtin(BuiltinType::DateTime));
        }
        registry.insert("java.time.LocalDate", SchemaType::Builtin(BuiltinType::Date));
        registry.insert("java.time.LocalTime", SchemaType::Builtin(BuiltinType::Time));
        registry.insert("javax.xml.datatype.Duration", SchemaType::Builtin(BuiltinType::Duration));
        registry.insert("javax.xml.namespace.QName", SchemaType::Builtin(BuiltinType::QName));
        registry.insert("java.net.URI", SchemaType::String);
        registry.insert("java.util.UUID", SchemaType::String);
        registry.insert("java.lang.Class", SchemaType::String);
        for identity in OPEN_OBJECTS {
            registry.insert(identity, SchemaType::AnyType);
        }
        for identity in BINARY_HANDLES {
            registry.insert(identity, SchemaType::Binary);
        }
        // Remaining java.time values have a lexical form.
        registry.insert_prefix("java.time.", SchemaType::String);

        tracing::debug!(entries = registry.len(), "xml registry built");
        registry
    }

    /// Registry for JSON shape projection.
    #[tracing::instrument(level = "debug", skip(interner))]
    pub fn json(interner: SharedInterner, dates: DateFormat) -> Self {
        let mut registry = KnownTypeRegistry::new(interner);
        let whole = SchemaType::Number { whole: true };
        let fraction = SchemaType::Number { whole: false };

        for identity in [
            "java.lang.Boolean",
            "java.util.concurrent.atomic.AtomicBoolean",
        ] {
            registry.insert(identity, SchemaType::Boolean);
        }
        for identity in [
            "java.lang.Byte",
            "java.lang.Short",
            "java.lang.Integer",
            "java.lang.Long",
            "java.lang.Number",
            "java.util.concurrent.atomic.AtomicInteger",
            "java.util.concurrent.atomic.AtomicLong",
            "java.math.BigInteger",
        ] {
            registry.insert(identity, whole.clone());
        }
        for identity in [
            "java.lang.Float",
            "java.lang.Double",
            "java.math.BigDecimal",
        ] {
            registry.insert(identity, fraction.clone());
        }
        for identity in [
            "java.lang.Character",
            "java.lang.String",
            "java.lang.Enum",
            "java.lang.Class",
            "java.util.Locale",
            "java.util.Currency",
            "java.util.UUID",
            "java.net.URI",
            "java.net.URL",
            "javax.xml.namespace.QName",
            "java.time.Period",
            "java.time.YearMonth",
            "java.time.MonthDay",
            "java.time.ZoneId",
            "java.time.ZoneOffset",
        ] {
            registry.insert(identity, SchemaType::String);
        }
        for identity in [
            "java.util.Calendar",
            "java.util.Date",
            "java.sql.Date",
            "java.sql.Timestamp",
            "java.util.GregorianCalendar",
            "javax.xml.datatype.XMLGregorianCalendar",
            "java.time.Duration",
            "java.time.Instant",
            "java.time.Year",
            "java.time.LocalTime",
            "java.time.OffsetTime",
        ] {
            registry.insert(identity, dates.date_type(whole.clone()));
        }
        for identity in ["java.time.LocalDate", "org.joda.time.LocalDate"] {
            registry.insert(identity, dates.date_type(SchemaType::Builtin(BuiltinType::Date)));
        }
        for identity in [
            "java.time.LocalDateTime",
            "java.time.ZonedDateTime",
            "java.time.OffsetDateTime",
            "org.joda.time.DateTime",
        ] {
            registry.insert(
                identity,
                dates.date_type(SchemaType::Builtin(BuiltinType::DateTime)),
            );
        }
        for identity in OPEN_OBJECTS {
            registry.insert(identity, SchemaType::AnyType);
        }
        // Binary content is base64 text in JSON.
        for identity in BINARY_HANDLES {
            registry.insert(identity, SchemaType::String);
        }

        // Tree-model nodes
        registry.insert("com.fasterxml.jackson.databind.JsonNode", SchemaType::AnyType);
        registry.insert(
            "com.fasterxml.jackson.databind.node.ArrayNode",
            SchemaType::array(SchemaType::AnyType),
        );
        registry.insert("com.fasterxml.jackson.databind.node.BooleanNode", SchemaType::Boolean);
        for identity in [
            "com.fasterxml.jackson.databind.node.IntNode",
            "com.fasterxml.jackson.databind.node.ShortNode",
            "com.fasterxml.jackson.databind.node.LongNode",
            "com.fasterxml.jackson.databind.node.BigIntegerNode",
            "com.fasterxml.jackson.databind.node.NumericNode",
        ] {
            registry.insert(identity, whole.clone());
        }
        for identity in [
            "com.fasterxml.jackson.databind.node.FloatNode",
            "com.fasterxml.jackson.databind.node.DoubleNode",
            "com.fasterxml.jackson.databind.node.DecimalNode",
        ] {
            registry.insert(identity, fraction.clone());
        }
        for identity in [
            "com.fasterxml.jackson.databind.node.ObjectNode",
            "com.fasterxml.jackson.databind.node.ContainerNode",
            "com.fasterxml.jackson.databind.node.POJONode",
        ] {
            registry.insert(identity, SchemaType::AnyType);
        }
        // Text, binary, missing and null nodes, and any other value node.
        registry.insert_prefix("com.fasterxml.jackson.databind.node.", SchemaType::String);
        registry.insert_prefix("java.time.temporal.", SchemaType::String);
        registry.insert_prefix("java.time.", SchemaType::String);

        tracing::debug!(entries = registry.len(), "json registry built");
        registry
    }
}

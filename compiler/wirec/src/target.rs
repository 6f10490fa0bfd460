//! Projection consumers.

use clap::ValueEnum;
use wire_ir::SharedInterner;
use wire_types::{
    client::{
        ActionScriptClient, CClient, CSharpClient, JavaClient, ObjCClient, PhpClient, RubyClient,
    },
    json_shape, xml_type_name, ClientProjection, DateFormat, KnownTypeRegistry,
    PackageConversions, SchemaType, TypeDefinitionTable,
};

/// A consumer of projected types.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, ValueEnum)]
pub enum Target {
    Xml,
    Json,
    Csharp,
    Java,
    Php,
    Ruby,
    #[value(name = "as3")]
    As3,
    C,
    #[value(name = "objc")]
    ObjC,
}

impl Target {
    pub const ALL: [Target; 9] = [
        Target::Xml,
        Target::Json,
        Target::Csharp,
        Target::Java,
        Target::Php,
        Target::Ruby,
        Target::As3,
        Target::C,
        Target::ObjC,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Target::Xml => "xml",
            Target::Json => "json",
            Target::Csharp => "csharp",
            Target::Java => "java",
            Target::Php => "php",
            Target::Ruby => "ruby",
            Target::As3 => "as3",
            Target::C => "c",
            Target::ObjC => "objc",
        }
    }

    /// Consumers that read JSON-facing format annotations.
    pub const fn is_json_facing(self) -> bool {
        matches!(self, Target::Json | Target::Php)
    }

    pub fn registry(self, interner: SharedInterner, dates: DateFormat) -> KnownTypeRegistry {
        if self.is_json_facing() {
            KnownTypeRegistry::json(interner, dates)
        } else {
            KnownTypeRegistry::xml(interner)
        }
    }

    /// Name renderer for this consumer.
    pub fn renderer(self, conversions: PackageConversions) -> Renderer {
        match self {
            Target::Xml => Renderer::Xml,
            Target::Json => Renderer::Json,
            Target::Csharp => Renderer::Client(Box::new(CSharpClient::new(conversions))),
            Target::Java => Renderer::Client(Box::new(JavaClient::new(conversions))),
            Target::Php => Renderer::Client(Box::new(PhpClient::new(conversions))),
            Target::Ruby => Renderer::Client(Box::new(RubyClient::new(conversions))),
            Target::As3 => Renderer::Client(Box::new(ActionScriptClient::new(conversions))),
            Target::C => Renderer::Client(Box::new(CClient::new(conversions))),
            Target::ObjC => Renderer::Client(Box::new(ObjCClient::new(conversions))),
        }
    }
}

/// Folds schema types into the consumer's vocabulary.
pub enum Renderer {
    Xml,
    Json,
    Client(Box<dyn ClientProjection>),
}

impl Renderer {
    pub fn render(
        &self,
        schema: &SchemaType,
        definitions: &TypeDefinitionTable,
        interner: &SharedInterner,
    ) -> String {
        match self {
            Renderer::Xml => xml_type_name(schema, definitions, interner).to_string(),
            Renderer::Json => json_shape(schema, definitions, interner).to_string(),
            Renderer::Client(client) => client.type_name(schema, definitions, interner),
        }
    }
}

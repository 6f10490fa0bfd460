#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;
use wire_diagnostic::ErrorCode;
use wire_ir::{
    AdapterDecl, DeclKind, FormatOverrides, PrimitiveKind, Scope, ShapeOverride, TypeDecl,
};

use super::*;
use crate::{install_host_prelude, DefinitionKind, TypeDefinition};

struct Fixture {
    interner: SharedInterner,
    decls: DeclarationTable,
    definitions: TypeDefinitionTable,
    person: TypeDefinitionId,
    address: TypeDefinitionId,
    color: TypeDefinitionId,
}

impl Fixture {
    /// A small model:
    /// - `Person { address: Address, friends: List<Person> }`
    /// - `Address { resident: Person }`
    /// - `Color` enum
    /// - `Shape` interface, `Marker` annotation
    /// - `Money` with a scope adapter to `String` in `com.acme`
    /// - `Celsius` adapted to `int` on the type itself
    /// - `Ping` and `Pong` adapted to each other
    fn new() -> Self {
        let interner = SharedInterner::new();
        let mut decls = DeclarationTable::new();
        install_host_prelude(&mut decls, &interner);
        let n = |s: &str| interner.intern(s);

        for (identity, kind) in [
            ("com.acme.Person", DeclKind::Class),
            ("com.acme.Address", DeclKind::Class),
            ("com.acme.Color", DeclKind::Enum),
            ("com.acme.Shape", DeclKind::Interface),
            ("com.acme.Marker", DeclKind::Annotation),
            ("com.acme.Money", DeclKind::Class),
        ] {
            decls.register_type(TypeDecl::new(n(identity), kind));
        }
        decls.register_type(
            TypeDecl::new(n("com.acme.Celsius"), DeclKind::Class)
                .with_adapter(n("com.acme.CelsiusAdapter")),
        );
        decls.register_adapter(AdapterDecl {
            identity: n("com.acme.CelsiusAdapter"),
            bound: TypeRef::declared(n("com.acme.Celsius")),
            target: TypeRef::Primitive(PrimitiveKind::Int),
        });
        decls.register_adapter(AdapterDecl {
            identity: n("com.acme.MoneyAdapter"),
            bound: TypeRef::declared(n("com.acme.Money")),
            target: TypeRef::declared(n("java.lang.String")),
        });
        decls.register_scope(
            Scope::new(n("com.acme")).with_adapter(n("com.acme.Money"), n("com.acme.MoneyAdapter")),
        );
        decls.register_type(
            TypeDecl::new(n("com.acme.Ping"), DeclKind::Class).with_adapter(n("com.acme.PingAdapter")),
        );
        decls.register_type(
            TypeDecl::new(n("com.acme.Pong"), DeclKind::Class).with_adapter(n("com.acme.PongAdapter")),
        );
        decls.register_adapter(AdapterDecl {
            identity: n("com.acme.PingAdapter"),
            bound: TypeRef::declared(n("com.acme.Ping")),
            target: TypeRef::declared(n("com.acme.Pong")),
        });
        decls.register_adapter(AdapterDecl {
            identity: n("com.acme.PongAdapter"),
            bound: TypeRef::declared(n("com.acme.Pong")),
            target: TypeRef::declared(n("com.acme.Ping")),
        });

        let person_ty = TypeRef::declared(n("com.acme.Person"));
        let mut definitions = TypeDefinitionTable::new();
        let person = definitions.register(
            TypeDefinition::new(n("com.acme.Person"), DefinitionKind::Complex)
                .named(n("person"))
                .with_property(DeclSite::new(
                    n("com.acme.Person#address"),
                    TypeRef::declared(n("com.acme.Address")),
                ))
                .with_property(DeclSite::new(
                    n("com.acme.Person#friends"),
                    TypeRef::generic(n("java.util.List"), vec![person_ty.clone()]),
                )),
        );
        let address = definitions.register(
            TypeDefinition::new(n("com.acme.Address"), DefinitionKind::Complex)
                .named(n("address"))
                .with_property(DeclSite::new(n("com.acme.Address#resident"), person_ty)),
        );
        let color = definitions.register(
            TypeDefinition::new(n("com.acme.Color"), DefinitionKind::Enum).named(n("color")),
        );

        Fixture {
            interner,
            decls,
            definitions,
            person,
            address,
            color,
        }
    }

    fn name(&self, s: &str) -> Name {
        self.interner.intern(s)
    }

    fn ty(&self, s: &str) -> TypeRef {
        TypeRef::declared(self.name(s))
    }

    fn generic(&self, s: &str, args: Vec<TypeRef>) -> TypeRef {
        TypeRef::generic(self.name(s), args)
    }

    fn site(&self, ty: TypeRef) -> DeclSite {
        DeclSite::new(self.name("com.acme.Order#field"), ty)
    }

    fn projector(&self) -> Projector<'_> {
        Projector::new(
            &self.decls,
            &self.definitions,
            KnownTypeRegistry::xml(self.interner.clone()),
            self.interner.clone(),
        )
    }
}

fn kind_of(schema: &SchemaType) -> Option<UnresolvableKind> {
    schema.as_unresolvable().map(|u| u.kind)
}

fn int() -> TypeRef {
    TypeRef::Primitive(PrimitiveKind::Int)
}

fn byte() -> TypeRef {
    TypeRef::Primitive(PrimitiveKind::Byte)
}

// Primitives, void and arrays

#[test]
fn test_primitives_map_directly() {
    let f = Fixture::new();
    let mut p = f.projector();
    for kind in PrimitiveKind::ALL {
        assert_eq!(
            p.project_type(&TypeRef::Primitive(kind)),
            SchemaType::Primitive(kind)
        );
    }
}

#[test]
fn test_void_is_unresolvable() {
    let f = Fixture::new();
    let schema = f.projector().project_type(&TypeRef::Void);
    assert_eq!(kind_of(&schema), Some(UnresolvableKind::Void));
    assert_eq!(
        schema.as_unresolvable().map(|u| u.reason.as_str()),
        Some("void is not a valid wire type")
    );
}

#[test]
fn test_byte_array_is_binary() {
    let f = Fixture::new();
    let mut p = f.projector();
    assert_eq!(p.project_type(&TypeRef::array(byte())), SchemaType::Binary);
    assert_eq!(
        p.project_type(&TypeRef::array(int())),
        SchemaType::array(SchemaType::Primitive(PrimitiveKind::Int))
    );
}

#[test]
fn test_multi_dimensional_arrays_rejected() {
    let f = Fixture::new();
    let mut p = f.projector();
    for component in [int(), byte(), f.ty("com.acme.Person")] {
        let schema = p.project_type(&TypeRef::array(TypeRef::array(component)));
        assert_eq!(kind_of(&schema), Some(UnresolvableKind::UnsupportedNesting));
    }
}

#[test]
fn test_array_of_classes() {
    let f = Fixture::new();
    let schema = f.projector().project_type(&TypeRef::array(f.ty("com.acme.Person")));
    assert_eq!(schema, SchemaType::array(SchemaType::ClassType(f.person)));
}

// Declared types

#[test]
fn test_registry_entries_verbatim() {
    let f = Fixture::new();
    let mut p = f.projector();
    assert_eq!(p.project_type(&f.ty("java.lang.String")), SchemaType::String);
    assert_eq!(
        p.project_type(&f.ty("java.lang.Integer")),
        SchemaType::Primitive(PrimitiveKind::Int)
    );
    assert_eq!(
        p.project_type(&f.ty("java.util.Date")),
        SchemaType::Builtin(crate::BuiltinType::DateTime)
    );
    assert_eq!(p.project_type(&f.ty("java.lang.Object")), SchemaType::AnyType);
}

#[test]
fn test_enum_and_class_definitions() {
    let f = Fixture::new();
    let mut p = f.projector();
    assert_eq!(
        p.project_type(&f.ty("com.acme.Color")),
        SchemaType::EnumType(f.color)
    );
    assert_eq!(
        p.project_type(&f.ty("com.acme.Person")),
        SchemaType::ClassType(f.person)
    );
}

#[test]
fn test_unknown_type() {
    let f = Fixture::new();
    let schema = f.projector().project_type(&f.ty("com.other.Mystery"));
    assert_eq!(kind_of(&schema), Some(UnresolvableKind::UnknownType));

    let diag = schema
        .as_unresolvable()
        .map(|u| u.to_diagnostic(Some("com.acme.Order#mystery")))
        .unwrap();
    assert_eq!(diag.code, ErrorCode::E1001);
    assert_eq!(
        diag.message,
        "unknown type `com.other.Mystery`; import or export it explicitly"
    );
}

#[test]
fn test_bare_interface_and_annotation() {
    let f = Fixture::new();
    let mut p = f.projector();
    assert_eq!(
        kind_of(&p.project_type(&f.ty("com.acme.Shape"))),
        Some(UnresolvableKind::BareInterface)
    );
    assert_eq!(
        kind_of(&p.project_type(&f.ty("com.acme.Marker"))),
        Some(UnresolvableKind::AnnotationType)
    );
}

#[test]
fn test_interface_element_degrades_to_any() {
    let f = Fixture::new();
    let mut p = f.projector();
    let list = f.generic("java.util.List", vec![f.ty("com.acme.Shape")]);
    assert_eq!(p.project_type(&list), SchemaType::array(SchemaType::AnyType));

    let map = f.generic(
        "java.util.Map",
        vec![f.ty("java.lang.String"), f.ty("com.acme.Shape")],
    );
    assert_eq!(
        p.project_type(&map),
        SchemaType::map(SchemaType::String, SchemaType::AnyType)
    );
}

// Maps and collections

#[test]
fn test_map_of_string_to_list_of_integer() {
    let f = Fixture::new();
    let ty = f.generic(
        "java.util.Map",
        vec![
            f.ty("java.lang.String"),
            f.generic("java.util.List", vec![f.ty("java.lang.Integer")]),
        ],
    );
    assert_eq!(
        f.projector().project_type(&ty),
        SchemaType::map(
            SchemaType::String,
            SchemaType::array(SchemaType::Primitive(PrimitiveKind::Int))
        )
    );
}

#[test]
fn test_map_shape_precedes_registry() {
    let mut f = Fixture::new();
    let legacy = f.name("com.acme.LegacyMap");
    let supertype = f.generic(
        "java.util.HashMap",
        vec![f.ty("java.lang.String"), f.ty("java.lang.String")],
    );
    f.decls
        .register_type(TypeDecl::new(legacy, DeclKind::Class).with_supertype(supertype));

    let mut known = KnownTypeRegistry::xml(f.interner.clone());
    known.insert("com.acme.LegacyMap", SchemaType::String);
    let mut p = Projector::new(&f.decls, &f.definitions, known, f.interner.clone());

    assert_eq!(
        p.project_type(&TypeRef::declared(legacy)),
        SchemaType::map(SchemaType::String, SchemaType::String)
    );
}

#[test]
fn test_raw_map_is_any_to_any() {
    let f = Fixture::new();
    assert_eq!(
        f.projector().project_type(&f.ty("java.util.HashMap")),
        SchemaType::map(SchemaType::AnyType, SchemaType::AnyType)
    );
}

#[test]
fn test_map_key_array_allowed() {
    let f = Fixture::new();
    // Map entries start a fresh context, so an array value is fine
    let ty = f.generic(
        "java.util.Map",
        vec![f.ty("java.lang.String"), TypeRef::array(int())],
    );
    assert_eq!(
        f.projector().project_type(&ty),
        SchemaType::map(
            SchemaType::String,
            SchemaType::array(SchemaType::Primitive(PrimitiveKind::Int))
        )
    );
}

#[test]
fn test_nested_collections_rejected() {
    let f = Fixture::new();
    let mut p = f.projector();

    let nested = f.generic(
        "java.util.List",
        vec![f.generic("java.util.Set", vec![f.ty("java.lang.String")])],
    );
    assert_eq!(
        kind_of(&p.project_type(&nested)),
        Some(UnresolvableKind::UnsupportedNesting)
    );

    let array_of_lists =
        TypeRef::array(f.generic("java.util.List", vec![f.ty("java.lang.String")]));
    assert_eq!(
        kind_of(&p.project_type(&array_of_lists)),
        Some(UnresolvableKind::UnsupportedNesting)
    );

    let list_of_arrays = f.generic("java.util.List", vec![TypeRef::array(int())]);
    assert_eq!(
        kind_of(&p.project_type(&list_of_arrays)),
        Some(UnresolvableKind::UnsupportedNesting)
    );
}

#[test]
fn test_list_of_byte_arrays_is_binary_list() {
    let f = Fixture::new();
    let ty = f.generic("java.util.List", vec![TypeRef::array(byte())]);
    assert_eq!(
        f.projector().project_type(&ty),
        SchemaType::array(SchemaType::Binary)
    );
}

#[test]
fn test_raw_collection_is_any_array() {
    let f = Fixture::new();
    assert_eq!(
        f.projector().project_type(&f.ty("java.util.ArrayList")),
        SchemaType::array(SchemaType::AnyType)
    );
}

#[test]
fn test_self_referential_map_terminates() {
    let mut f = Fixture::new();
    let tree = f.name("com.acme.Tree");
    let supertype = f.generic(
        "java.util.HashMap",
        vec![f.ty("java.lang.String"), TypeRef::declared(tree)],
    );
    f.decls
        .register_type(TypeDecl::new(tree, DeclKind::Class).with_supertype(supertype));

    let forest = f.name("com.acme.Forest");
    let supertype = f.generic(
        "java.util.HashMap",
        vec![
            f.ty("java.lang.String"),
            f.generic("java.util.List", vec![TypeRef::declared(forest)]),
        ],
    );
    f.decls
        .register_type(TypeDecl::new(forest, DeclKind::Class).with_supertype(supertype));

    let mut p = f.projector();
    assert_eq!(
        p.project_type(&TypeRef::declared(tree)),
        SchemaType::map(SchemaType::String, SchemaType::AnyType)
    );
    assert_eq!(
        p.project_type(&TypeRef::declared(forest)),
        SchemaType::map(SchemaType::String, SchemaType::array(SchemaType::AnyType))
    );
    // The inner occurrence is the recursive one, not the outer
    let wrapped = f.generic(
        "java.util.Map",
        vec![f.ty("java.lang.String"), TypeRef::declared(tree)],
    );
    assert_eq!(
        p.project_type(&wrapped),
        SchemaType::map(
            SchemaType::String,
            SchemaType::map(SchemaType::String, SchemaType::AnyType)
        )
    );
}

#[test]
fn test_mutually_recursive_collection_and_map_terminate() {
    let mut f = Fixture::new();
    let branch = f.name("com.acme.Branch");
    let leaves = f.name("com.acme.Leaves");
    let node = f.name("com.acme.Node");

    let branch_super = f.generic("java.util.ArrayList", vec![TypeRef::declared(leaves)]);
    let leaves_super = f.generic(
        "java.util.HashMap",
        vec![f.ty("java.lang.String"), TypeRef::declared(branch)],
    );
    let node_super = f.generic("java.util.ArrayList", vec![TypeRef::declared(node)]);
    f.decls
        .register_type(TypeDecl::new(branch, DeclKind::Class).with_supertype(branch_super));
    f.decls
        .register_type(TypeDecl::new(leaves, DeclKind::Class).with_supertype(leaves_super));
    f.decls
        .register_type(TypeDecl::new(node, DeclKind::Class).with_supertype(node_super));

    let mut p = f.projector();
    assert_eq!(
        p.project_type(&TypeRef::declared(branch)),
        SchemaType::array(SchemaType::map(
            SchemaType::String,
            SchemaType::array(SchemaType::AnyType)
        ))
    );
    // A list of itself is a nested collection
    assert_eq!(
        kind_of(&p.project_type(&TypeRef::declared(node))),
        Some(UnresolvableKind::UnsupportedNesting)
    );
}

#[test]
fn test_growing_generic_map_terminates() {
    let mut f = Fixture::new();
    let node = f.name("com.acme.Deep");
    let t = f.name("T");
    // Deep<T> extends HashMap<String, Deep<List<T>>>
    let value = TypeRef::generic(
        node,
        vec![f.generic("java.util.List", vec![TypeRef::variable(t)])],
    );
    let supertype = f.generic("java.util.HashMap", vec![f.ty("java.lang.String"), value]);
    f.decls.register_type(
        TypeDecl::new(node, DeclKind::Class)
            .with_type_params(vec![t])
            .with_supertype(supertype),
    );

    let schema = f
        .projector()
        .project_type(&TypeRef::generic(node, vec![f.ty("java.lang.String")]));

    let mut depth = 0;
    let mut current = &schema;
    while let SchemaType::MapType { key, value } = current {
        assert_eq!(**key, SchemaType::String);
        depth += 1;
        current = &**value;
    }
    assert_eq!(current, &SchemaType::AnyType);
    assert_eq!(depth, 8);
}

#[test]
fn test_ambiguous_binding_warns() {
    let mut f = Fixture::new();
    let named = f.name("com.acme.Named");
    let odd = f.name("com.acme.Odd");
    let named_super = f.generic(
        "java.util.Map",
        vec![f.ty("java.lang.String"), f.ty("java.lang.Object")],
    );
    f.decls
        .register_type(TypeDecl::new(named, DeclKind::Interface).with_supertype(named_super));
    let hash = f.generic(
        "java.util.HashMap",
        vec![f.ty("java.lang.String"), f.ty("java.lang.Integer")],
    );
    f.decls.register_type(
        TypeDecl::new(odd, DeclKind::Class)
            .with_supertype(hash)
            .with_supertype(TypeRef::declared(named)),
    );

    let mut p = f.projector();
    assert_eq!(
        p.project_type(&TypeRef::declared(odd)),
        SchemaType::map(SchemaType::String, SchemaType::Primitive(PrimitiveKind::Int))
    );

    let warnings = p.take_warnings();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].code, ErrorCode::W1001);
    assert_eq!(warnings[0].site_label(), "com.acme.Odd");
    assert!(p.take_warnings().is_empty());
}

#[test]
fn test_ambiguity_warnings_do_not_depend_on_cache() {
    let mut f = Fixture::new();
    let named = f.name("com.acme.Named");
    let odd = f.name("com.acme.Odd");
    let named_super = f.generic(
        "java.util.Map",
        vec![f.ty("java.lang.String"), f.ty("java.lang.Object")],
    );
    f.decls
        .register_type(TypeDecl::new(named, DeclKind::Interface).with_supertype(named_super));
    let hash = f.generic(
        "java.util.HashMap",
        vec![f.ty("java.lang.String"), f.ty("java.lang.Integer")],
    );
    f.decls.register_type(
        TypeDecl::new(odd, DeclKind::Class)
            .with_supertype(hash)
            .with_supertype(TypeRef::declared(named)),
    );

    let types = [
        TypeRef::declared(odd),
        TypeRef::declared(odd),
        f.generic("java.util.List", vec![TypeRef::declared(odd)]),
    ];
    let codes = |memoize: bool| {
        let mut p = f.projector().with_config(ProjectorConfig {
            memoize,
            ..ProjectorConfig::default()
        });
        for ty in &types {
            let _ = p.project_type(ty);
        }
        p.take_warnings()
            .into_iter()
            .map(|w| (w.code, w.site_label().to_owned()))
            .collect::<Vec<_>>()
    };
    let cached = codes(true);
    assert_eq!(cached, vec![(ErrorCode::W1001, "com.acme.Odd".to_owned())]);
    assert_eq!(codes(false), cached);
}

// Wildcards and type variables

#[test]
fn test_wildcards() {
    let f = Fixture::new();
    let mut p = f.projector();
    assert_eq!(p.project_type(&TypeRef::unbounded_wildcard()), SchemaType::AnyType);
    assert_eq!(
        p.project_type(&TypeRef::wildcard_extends(f.ty("com.acme.Person"))),
        SchemaType::ClassType(f.person)
    );
    // `? super Person` only says what may be written, so it is open
    let lower = TypeRef::Wildcard {
        upper: None,
        lower: Some(Box::new(f.ty("com.acme.Person"))),
    };
    assert_eq!(p.project_type(&lower), SchemaType::AnyType);

    let list = f.generic("java.util.List", vec![lower]);
    assert_eq!(p.project_type(&list), SchemaType::array(SchemaType::AnyType));
}

#[test]
fn test_variable_uses_first_bound() {
    let f = Fixture::new();
    let mut p = f.projector();
    let t = f.name("T");

    assert_eq!(p.project_type(&TypeRef::variable(t)), SchemaType::AnyType);

    let bounded = TypeRef::Variable {
        name: t,
        bounds: vec![f.ty("com.acme.Person"), f.ty("com.acme.Shape")],
    };
    assert_eq!(p.project_type(&bounded), SchemaType::ClassType(f.person));
}

#[test]
fn test_self_referential_variable() {
    let f = Fixture::new();
    let t = f.name("T");
    // T extends T (after substitution in a recursive declaration)
    let inner = TypeRef::Variable {
        name: t,
        bounds: vec![TypeRef::variable(t)],
    };
    let outer = TypeRef::Variable {
        name: t,
        bounds: vec![inner],
    };
    assert_eq!(f.projector().project_type(&outer), SchemaType::AnyType);
}

// Adapters

#[test]
fn test_type_adapter_redirects_to_primitive() {
    let f = Fixture::new();
    assert_eq!(
        f.projector().project_type(&f.ty("com.acme.Celsius")),
        SchemaType::Primitive(PrimitiveKind::Int)
    );
}

#[test]
fn test_scope_adapter() {
    let f = Fixture::new();
    let mut p = f.projector();
    let money = f.site(f.ty("com.acme.Money"));
    // Outside the scope nothing adapts it and it has no definition
    assert_eq!(
        kind_of(&p.project_site(&money)),
        Some(UnresolvableKind::UnknownType)
    );

    let scoped = money.with_scope(f.name("com.acme"));
    assert_eq!(p.project_site(&scoped), SchemaType::String);
}

#[test]
fn test_adapter_cycle_detected() {
    let f = Fixture::new();
    let schema = f.projector().project_type(&f.ty("com.acme.Ping"));
    assert_eq!(kind_of(&schema), Some(UnresolvableKind::AdapterCycle));

    let short = ProjectorConfig {
        max_adapter_chain: 2,
        ..ProjectorConfig::default()
    };
    let mut p = f.projector().with_config(short);
    let reason = p
        .project_type(&f.ty("com.acme.Ping"))
        .as_unresolvable()
        .map(|u| u.reason.clone())
        .unwrap();
    assert_eq!(
        reason,
        "adapter `com.acme.PingAdapter` closes a chain longer than 2 adapters"
    );
}

#[test]
fn test_adapter_to_own_map_terminates() {
    let mut f = Fixture::new();
    let lazy = f.name("com.acme.Lazy");
    let target = f.generic(
        "java.util.Map",
        vec![f.ty("java.lang.String"), TypeRef::declared(lazy)],
    );
    f.decls.register_type(
        TypeDecl::new(lazy, DeclKind::Class).with_adapter(f.name("com.acme.LazyAdapter")),
    );
    f.decls.register_adapter(AdapterDecl {
        identity: f.name("com.acme.LazyAdapter"),
        bound: TypeRef::declared(lazy),
        target,
    });

    assert_eq!(
        f.projector().project_type(&TypeRef::declared(lazy)),
        SchemaType::map(SchemaType::String, SchemaType::AnyType)
    );
}

#[test]
fn test_adapter_depth_counts_through_map_entries() {
    let mut f = Fixture::new();
    let wrap = f.name("com.acme.Wrap");
    let target = f.generic(
        "java.util.Map",
        vec![f.ty("java.lang.String"), f.ty("com.acme.Celsius")],
    );
    f.decls.register_type(
        TypeDecl::new(wrap, DeclKind::Class).with_adapter(f.name("com.acme.WrapAdapter")),
    );
    f.decls.register_adapter(AdapterDecl {
        identity: f.name("com.acme.WrapAdapter"),
        bound: TypeRef::declared(wrap),
        target,
    });

    let mut p = f.projector();
    assert_eq!(
        p.project_type(&TypeRef::declared(wrap)),
        SchemaType::map(SchemaType::String, SchemaType::Primitive(PrimitiveKind::Int))
    );

    let mut short = f.projector().with_config(ProjectorConfig {
        max_adapter_chain: 1,
        ..ProjectorConfig::default()
    });
    assert_eq!(
        kind_of(&short.project_type(&TypeRef::declared(wrap))),
        Some(UnresolvableKind::AdapterCycle)
    );
}

#[test]
fn test_site_adapter_whole_and_elementwise() {
    let f = Fixture::new();
    let mut p = f.projector();
    let adapter = f.name("com.acme.MoneyAdapter");

    let whole = f.site(f.ty("com.acme.Money")).with_adapter(adapter);
    assert_eq!(p.project_site(&whole), SchemaType::String);

    let list = f
        .site(f.generic("java.util.List", vec![f.ty("com.acme.Money")]))
        .with_adapter(adapter);
    assert_eq!(p.project_site(&list), SchemaType::array(SchemaType::String));

    let array = f
        .site(TypeRef::array(f.ty("com.acme.Money")))
        .with_adapter(adapter);
    assert_eq!(p.project_site(&array), SchemaType::array(SchemaType::String));
}

#[test]
fn test_site_adapter_elementwise_keeps_array_rules() {
    let mut f = Fixture::new();
    let octets = f.name("com.acme.OctetAdapter");
    f.decls.register_adapter(AdapterDecl {
        identity: octets,
        bound: f.ty("java.lang.Object"),
        target: byte(),
    });

    let site = f
        .site(TypeRef::array(f.ty("com.acme.Person")))
        .with_adapter(octets);
    assert_eq!(f.projector().project_site(&site), SchemaType::Binary);
}

#[test]
fn test_site_without_adapter_projects_like_its_type() {
    let mut f = Fixture::new();
    let blob = f.name("com.acme.Blob");
    let tiny = f.name("com.acme.Tiny");
    for (identity, adapter, target) in [
        (blob, "com.acme.BlobAdapter", TypeRef::array(byte())),
        (tiny, "com.acme.TinyAdapter", byte()),
    ] {
        let adapter = f.name(adapter);
        f.decls
            .register_type(TypeDecl::new(identity, DeclKind::Class).with_adapter(adapter));
        f.decls.register_adapter(AdapterDecl {
            identity: adapter,
            bound: TypeRef::declared(identity),
            target,
        });
    }
    let tree = f.name("com.acme.Tree");
    let tree_super = f.generic(
        "java.util.HashMap",
        vec![f.ty("java.lang.String"), TypeRef::declared(tree)],
    );
    f.decls
        .register_type(TypeDecl::new(tree, DeclKind::Class).with_supertype(tree_super));

    let scope = f.name("com.acme");
    let types = [
        TypeRef::array(TypeRef::declared(blob)),
        TypeRef::array(TypeRef::declared(tiny)),
        TypeRef::array(byte()),
        TypeRef::array(f.ty("java.lang.Byte")),
        TypeRef::array(f.ty("java.awt.Image")),
        TypeRef::array(f.ty("com.acme.Money")),
        TypeRef::array(f.ty("com.acme.Celsius")),
        f.generic("java.util.List", vec![f.ty("com.acme.Money")]),
        f.generic("java.util.List", vec![TypeRef::array(TypeRef::declared(tiny))]),
        TypeRef::declared(tree),
        f.ty("com.acme.Person"),
    ];
    let mut p = f.projector();
    for ty in &types {
        let through_site = p.project_site(&f.site(ty.clone()).with_scope(scope));
        let through_type = p.project(ty, Context::root(Some(scope)));
        assert_eq!(through_site, through_type, "{}", ty.display(&f.interner));
    }

    assert_eq!(
        kind_of(&p.project_type(&types[0])),
        Some(UnresolvableKind::UnsupportedNesting)
    );
    assert_eq!(p.project_type(&types[1]), SchemaType::Binary);
    assert_eq!(
        p.project_type(&types[3]),
        SchemaType::array(SchemaType::Primitive(PrimitiveKind::Byte))
    );
    assert_eq!(
        p.project_type(&types[4]),
        SchemaType::array(SchemaType::Binary)
    );
    assert_eq!(
        p.project(&types[5], Context::root(Some(scope))),
        SchemaType::array(SchemaType::String)
    );
    assert_eq!(
        p.project_type(&types[8]),
        SchemaType::array(SchemaType::Binary)
    );
}

#[test]
fn test_site_adapter_errors() {
    let f = Fixture::new();
    let mut p = f.projector();

    let missing = f
        .site(f.ty("com.acme.Money"))
        .with_adapter(f.name("com.acme.Missing"));
    let schema = p.project_site(&missing);
    assert_eq!(kind_of(&schema), Some(UnresolvableKind::UnknownAdapter));

    let mismatch = f
        .site(f.ty("com.acme.Person"))
        .with_adapter(f.name("com.acme.MoneyAdapter"));
    let schema = p.project_site(&mismatch);
    assert_eq!(kind_of(&schema), Some(UnresolvableKind::AdapterMismatch));
    assert_eq!(
        schema.as_unresolvable().map(|u| u.reason.as_str()),
        Some("adapter `com.acme.MoneyAdapter` does not adapt `com.acme.Person`")
    );
}

// Format overrides

#[test]
fn test_shape_override_short_circuits() {
    let f = Fixture::new();
    let site = f.site(f.ty("com.other.Mystery")).with_format(FormatOverrides {
        shape: Some(ShapeOverride::String),
        ..FormatOverrides::default()
    });
    assert_eq!(f.projector().project_site(&site), SchemaType::String);
}

#[test]
fn test_overrides_ignored_when_disabled() {
    let f = Fixture::new();
    let site = f.site(f.ty("com.acme.Person")).with_format(FormatOverrides {
        shape: Some(ShapeOverride::String),
        ..FormatOverrides::default()
    });
    let config = ProjectorConfig {
        honor_format_overrides: false,
        ..ProjectorConfig::default()
    };
    let mut p = f.projector().with_config(config);
    assert_eq!(p.project_site(&site), SchemaType::ClassType(f.person));
}

#[test]
fn test_substitute_and_contents_overrides() {
    let f = Fixture::new();
    let mut p = f.projector();

    let redirected = f.site(f.ty("com.other.Mystery")).with_format(FormatOverrides {
        as_type: Some(f.ty("com.acme.Person")),
        ..FormatOverrides::default()
    });
    assert_eq!(p.project_site(&redirected), SchemaType::ClassType(f.person));

    let map = f.generic(
        "java.util.Map",
        vec![f.ty("java.lang.String"), f.ty("java.lang.Object")],
    );
    let contents = f.site(map).with_format(FormatOverrides {
        contents_as: Some(f.ty("com.acme.Color")),
        ..FormatOverrides::default()
    });
    assert_eq!(
        p.project_site(&contents),
        SchemaType::map(SchemaType::String, SchemaType::EnumType(f.color))
    );
}

#[test]
fn test_project_checked() {
    let f = Fixture::new();
    let mut p = f.projector();
    assert_eq!(
        p.project_checked(&f.site(f.ty("com.acme.Person"))),
        Ok(SchemaType::ClassType(f.person))
    );
    let err = p.project_checked(&f.site(TypeRef::Void)).unwrap_err();
    assert_eq!(err.kind, UnresolvableKind::Void);
}

// Memoization and traversal

#[test]
fn test_memoization_does_not_change_results() {
    let f = Fixture::new();
    let mut cached = f.projector();
    let mut uncached = f.projector().with_config(ProjectorConfig {
        memoize: false,
        ..ProjectorConfig::default()
    });

    let types = [
        f.ty("com.acme.Person"),
        f.generic("java.util.List", vec![f.ty("com.acme.Color")]),
        TypeRef::array(TypeRef::array(int())),
        f.ty("com.acme.Ping"),
        f.ty("com.acme.Celsius"),
    ];
    for ty in &types {
        let first = cached.project_type(ty);
        assert_eq!(cached.project_type(ty), first);
        assert_eq!(uncached.project_type(ty), first);
    }
    assert!(cached.cache_len() > 0);
    assert_eq!(uncached.cache_len(), 0);

    cached.clear_cache();
    assert_eq!(cached.cache_len(), 0);
}

#[test]
fn test_reachable_definitions_terminate_on_cycles() {
    let f = Fixture::new();
    let reachable = f.projector().reachable_definitions(f.person);
    assert_eq!(reachable, vec![f.person, f.address]);

    let from_color = f.projector().reachable_definitions(f.color);
    assert_eq!(from_color, vec![f.color]);
}

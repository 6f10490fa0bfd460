use pretty_assertions::assert_eq;
use wire_ir::{DeclKind, PrimitiveKind, StringInterner, TypeDecl};

use super::*;
use crate::{install_host_prelude, HostConventions};

struct Fixture {
    interner: StringInterner,
    decls: DeclarationTable,
    names: WellKnownNames,
}

impl Fixture {
    fn new() -> Self {
        let interner = StringInterner::new();
        let mut decls = DeclarationTable::new();
        install_host_prelude(&mut decls, &interner);
        let names = WellKnownNames::new(&interner, &HostConventions::default());
        Fixture {
            interner,
            decls,
            names,
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

    fn detector(&self) -> ShapeDetector<'_> {
        ShapeDetector::new(&self.decls, &self.names)
    }
}

#[test]
fn test_map_interface_itself() {
    let f = Fixture::new();
    let map = f.generic(
        "java.util.Map",
        vec![f.ty("java.lang.String"), f.ty("java.lang.Integer")],
    );

    let found = f.detector().detect_map(&map);
    assert_eq!(
        found,
        Some(Detection {
            shape: MapShape {
                key: f.ty("java.lang.String"),
                value: f.ty("java.lang.Integer"),
            },
            ambiguity: None,
        })
    );
}

#[test]
fn test_map_through_implementation_chain() {
    let f = Fixture::new();
    let linked = f.generic(
        "java.util.LinkedHashMap",
        vec![f.ty("java.lang.String"), TypeRef::array(TypeRef::Primitive(PrimitiveKind::Int))],
    );

    let found = f.detector().detect_map(&linked).map(|d| d.shape);
    assert_eq!(
        found,
        Some(MapShape {
            key: f.ty("java.lang.String"),
            value: TypeRef::array(TypeRef::Primitive(PrimitiveKind::Int)),
        })
    );
}

#[test]
fn test_concrete_subclass_binds_parameters() {
    let mut f = Fixture::new();
    // class Registry extends HashMap<String, Person>
    let registry = f.name("com.acme.Registry");
    let binding = f.generic(
        "java.util.HashMap",
        vec![f.ty("java.lang.String"), f.ty("com.acme.Person")],
    );
    f.decls
        .register_type(TypeDecl::new(registry, DeclKind::Class).with_supertype(binding));

    let found = f.detector().detect_map(&TypeRef::declared(registry)).map(|d| d.shape);
    assert_eq!(
        found,
        Some(MapShape {
            key: f.ty("java.lang.String"),
            value: f.ty("com.acme.Person"),
        })
    );
}

#[test]
fn test_partial_binding_through_generic_subclass() {
    let mut f = Fixture::new();
    // class Index<V> extends TreeMap<String, V>
    let index = f.name("com.acme.Index");
    let v = f.name("V");
    let supertype = f.generic(
        "java.util.TreeMap",
        vec![f.ty("java.lang.String"), TypeRef::variable(v)],
    );
    f.decls.register_type(
        TypeDecl::new(index, DeclKind::Class)
            .with_type_params(vec![v])
            .with_supertype(supertype),
    );

    let used = TypeRef::generic(index, vec![f.ty("java.lang.Long")]);
    let found = f.detector().detect_map(&used).map(|d| d.shape);
    assert_eq!(
        found,
        Some(MapShape {
            key: f.ty("java.lang.String"),
            value: f.ty("java.lang.Long"),
        })
    );
}

#[test]
fn test_raw_map_binds_wildcards() {
    let f = Fixture::new();
    let found = f.detector().detect_map(&f.ty("java.util.HashMap")).map(|d| d.shape);
    assert_eq!(
        found,
        Some(MapShape {
            key: TypeRef::unbounded_wildcard(),
            value: TypeRef::unbounded_wildcard(),
        })
    );
}

#[test]
fn test_properties_is_object_map() {
    let f = Fixture::new();
    let found = f
        .detector()
        .detect_map(&f.ty("java.util.Properties"))
        .map(|d| d.shape);
    assert_eq!(
        found,
        Some(MapShape {
            key: f.ty("java.lang.Object"),
            value: f.ty("java.lang.Object"),
        })
    );
}

#[test]
fn test_not_a_map() {
    let f = Fixture::new();
    let detector = f.detector();
    assert_eq!(detector.detect_map(&f.ty("java.util.ArrayList")), None);
    assert_eq!(detector.detect_map(&f.ty("com.acme.Unknown")), None);
    assert_eq!(
        detector.detect_map(&TypeRef::Primitive(PrimitiveKind::Int)),
        None
    );
    assert_eq!(
        detector.detect_map(&TypeRef::array(f.ty("java.util.HashMap"))),
        None
    );
}

#[test]
fn test_conflicting_paths_prefer_most_derived() {
    let mut f = Fixture::new();
    // interface Named extends Map<String, Object>
    // class Odd extends HashMap<String, Integer> implements Named
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

    // Both paths reach Map at depth 2; HashMap is declared first.
    let found = f.detector().detect_map(&TypeRef::declared(odd));
    let Some(found) = found else {
        panic!("expected a map shape");
    };
    assert_eq!(found.shape.value, f.ty("java.lang.Integer"));

    let ambiguity = found.ambiguity;
    assert_eq!(
        ambiguity,
        Some(AmbiguousBinding {
            start: odd,
            interface: f.name("java.util.Map"),
            chosen: vec![f.ty("java.lang.String"), f.ty("java.lang.Integer")],
            conflicting: vec![f.ty("java.lang.String"), f.ty("java.lang.Object")],
        })
    );
}

#[test]
fn test_collection_through_list() {
    let f = Fixture::new();
    let list = f.generic("java.util.List", vec![f.ty("java.lang.Integer")]);
    let found = f.detector().detect_collection(&list);
    assert_eq!(
        found,
        Some(Detection {
            shape: CollectionShape {
                element: f.ty("java.lang.Integer"),
            },
            ambiguity: None,
        })
    );
}

#[test]
fn test_collection_consistent_paths_not_ambiguous() {
    let f = Fixture::new();
    // LinkedList reaches Collection via List and via Deque/Queue
    let linked = f.generic("java.util.LinkedList", vec![f.ty("java.lang.String")]);
    let found = f.detector().detect_collection(&linked);
    assert_eq!(
        found,
        Some(Detection {
            shape: CollectionShape {
                element: f.ty("java.lang.String"),
            },
            ambiguity: None,
        })
    );
}

#[test]
fn test_raw_collection() {
    let f = Fixture::new();
    let found = f
        .detector()
        .detect_collection(&f.ty("java.util.HashSet"))
        .map(|d| d.shape.element);
    assert_eq!(found, Some(TypeRef::unbounded_wildcard()));
}

#[test]
fn test_map_is_not_collection() {
    let f = Fixture::new();
    assert_eq!(f.detector().detect_collection(&f.ty("java.util.HashMap")), None);
}

#[test]
fn test_self_referential_supertype_terminates() {
    let mut f = Fixture::new();
    // class Node<T> extends Node<Node<T>>: the arguments grow forever
    let node = f.name("com.acme.Node");
    let t = f.name("T");
    let grows = TypeRef::generic(node, vec![TypeRef::generic(node, vec![TypeRef::variable(t)])]);
    f.decls.register_type(
        TypeDecl::new(node, DeclKind::Class)
            .with_type_params(vec![t])
            .with_supertype(grows),
    );

    let used = TypeRef::generic(node, vec![f.ty("java.lang.String")]);
    assert_eq!(f.detector().detect_map(&used), None);
}

#[test]
fn test_supertype_chain_breadth_first() {
    let f = Fixture::new();
    let chain = f.detector().supertype_chain(f.name("java.util.ArrayList"));
    let names: Vec<&str> = chain.iter().map(|&n| f.interner.lookup(n)).collect();
    assert_eq!(
        names,
        vec![
            "java.util.ArrayList",
            "java.lang.Object",
            "java.util.List",
            "java.util.Collection",
            "java.lang.Iterable",
        ]
    );
}

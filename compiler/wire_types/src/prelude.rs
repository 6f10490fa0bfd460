//! Declarations of the host collection library.
//!
//! The shape detectors only see what is in the `DeclarationTable`. Models
//! rarely declare `java.util.List` or `java.util.HashMap` themselves, so the
//! common collection and map types are installed here with their real
//! supertype lattices. Declarations already present in the table are kept.

use wire_ir::{DeclKind, DeclarationTable, Name, StringInterner, TypeDecl, TypeRef};

/// (identity, kind, type params, supertypes as (identity, param indices))
type PreludeEntry = (
    &'static str,
    DeclKind,
    &'static [&'static str],
    &'static [(&'static str, &'static [usize])],
);

const PRELUDE: &[PreludeEntry] = &[
    ("java.lang.Object", DeclKind::Class, &[], &[]),
    ("java.lang.Iterable", DeclKind::Interface, &["T"], &[]),
    (
        "java.util.Collection",
        DeclKind::Interface,
        &["E"],
        &[("java.lang.Iterable", &[0])],
    ),
    (
        "java.util.List",
        DeclKind::Interface,
        &["E"],
        &[("java.util.Collection", &[0])],
    ),
    (
        "java.util.Set",
        DeclKind::Interface,
        &["E"],
        &[("java.util.Collection", &[0])],
    ),
    (
        "java.util.SortedSet",
        DeclKind::Interface,
        &["E"],
        &[("java.util.Set", &[0])],
    ),
    (
        "java.util.Queue",
        DeclKind::Interface,
        &["E"],
        &[("java.util.Collection", &[0])],
    ),
    (
        "java.util.Deque",
        DeclKind::Interface,
        &["E"],
        &[("java.util.Queue", &[0])],
    ),
    (
        "java.util.ArrayList",
        DeclKind::Class,
        &["E"],
        &[("java.lang.Object", &[]), ("java.util.List", &[0])],
    ),
    (
        "java.util.LinkedList",
        DeclKind::Class,
        &["E"],
        &[
            ("java.lang.Object", &[]),
            ("java.util.List", &[0]),
            ("java.util.Deque", &[0]),
        ],
    ),
    (
        "java.util.HashSet",
        DeclKind::Class,
        &["E"],
        &[("java.lang.Object", &[]), ("java.util.Set", &[0])],
    ),
    (
        "java.util.TreeSet",
        DeclKind::Class,
        &["E"],
        &[("java.lang.Object", &[]), ("java.util.SortedSet", &[0])],
    ),
    ("java.util.Map", DeclKind::Interface, &["K", "V"], &[]),
    (
        "java.util.SortedMap",
        DeclKind::Interface,
        &["K", "V"],
        &[("java.util.Map", &[0, 1])],
    ),
    (
        "java.util.HashMap",
        DeclKind::Class,
        &["K", "V"],
        &[("java.lang.Object", &[]), ("java.util.Map", &[0, 1])],
    ),
    (
        "java.util.LinkedHashMap",
        DeclKind::Class,
        &["K", "V"],
        &[("java.util.HashMap", &[0, 1]), ("java.util.Map", &[0, 1])],
    ),
    (
        "java.util.TreeMap",
        DeclKind::Class,
        &["K", "V"],
        &[("java.lang.Object", &[]), ("java.util.SortedMap", &[0, 1])],
    ),
    (
        "java.util.Hashtable",
        DeclKind::Class,
        &["K", "V"],
        &[("java.lang.Object", &[]), ("java.util.Map", &[0, 1])],
    ),
];

/// Install the host collection declarations into `table`.
///
/// Returns the number of declarations added.
#[tracing::instrument(level = "debug", skip_all)]
pub fn install_host_prelude(table: &mut DeclarationTable, interner: &StringInterner) -> usize {
    let mut added = 0;

    for &(identity, kind, params, supertypes) in PRELUDE {
        let identity = interner.intern(identity);
        if table.get_type(identity).is_some() {
            continue;
        }

        let params: Vec<Name> = params.iter().map(|p| interner.intern(p)).collect();
        let mut decl = TypeDecl::new(identity, kind).with_type_params(params.clone());
        for &(supertype, arg_indices) in supertypes {
            let args = arg_indices
                .iter()
                .filter_map(|&i| params.get(i))
                .map(|&p| TypeRef::variable(p))
                .collect();
            decl = decl.with_supertype(TypeRef::generic(interner.intern(supertype), args));
        }
        table.register_type(decl);
        added += 1;
    }

    // Properties is a Hashtable<Object, Object>.
    let properties = interner.intern("java.util.Properties");
    if table.get_type(properties).is_none() {
        let object = TypeRef::declared(interner.intern("java.lang.Object"));
        table.register_type(TypeDecl::new(properties, DeclKind::Class).with_supertype(
            TypeRef::generic(
                interner.intern("java.util.Hashtable"),
                vec![object.clone(), object],
            ),
        ));
        added += 1;
    }

    tracing::debug!(added, "host prelude installed");
    added
}

//! Type references: one occurrence of a type in the host type system.
//!
//! A `TypeRef` is what the declaration scanner hands over for every property,
//! parameter, return type, supertype and type argument. It is an immutable
//! tree; the engine never mutates one, it only builds substituted copies when
//! walking an inheritance chain.

use std::fmt::Write as _;

use rustc_hash::FxHashMap;

use crate::{Name, StringInterner};

/// Host primitive kinds.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum PrimitiveKind {
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    Char,
}

impl PrimitiveKind {
    /// All primitive kinds in declaration order.
    pub const ALL: [PrimitiveKind; 8] = [
        PrimitiveKind::Boolean,
        PrimitiveKind::Byte,
        PrimitiveKind::Short,
        PrimitiveKind::Int,
        PrimitiveKind::Long,
        PrimitiveKind::Float,
        PrimitiveKind::Double,
        PrimitiveKind::Char,
    ];

    /// The host keyword for this primitive.
    pub const fn keyword(self) -> &'static str {
        match self {
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::Byte => "byte",
            PrimitiveKind::Short => "short",
            PrimitiveKind::Int => "int",
            PrimitiveKind::Long => "long",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Double => "double",
            PrimitiveKind::Char => "char",
        }
    }

    /// Parse a host keyword.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.keyword() == keyword)
    }

    /// Whether values of this kind are whole numbers.
    pub const fn is_whole(self) -> bool {
        matches!(
            self,
            PrimitiveKind::Byte | PrimitiveKind::Short | PrimitiveKind::Int | PrimitiveKind::Long
        )
    }

    /// Whether values of this kind are numeric.
    pub const fn is_numeric(self) -> bool {
        !matches!(self, PrimitiveKind::Boolean | PrimitiveKind::Char)
    }
}

/// One occurrence of a type in the host type system.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeRef {
    /// A primitive (`int`, `byte`, ...).
    Primitive(PrimitiveKind),
    /// A declared class, interface or enum, possibly parameterized.
    ///
    /// Empty `args` on a generic declaration means raw usage.
    Declared { identity: Name, args: Vec<TypeRef> },
    /// An array of the component type.
    Array(Box<TypeRef>),
    /// A wildcard (`?`, `? extends U`, `? super L`).
    Wildcard {
        upper: Option<Box<TypeRef>>,
        lower: Option<Box<TypeRef>>,
    },
    /// A type variable with its declared bounds, in declaration order.
    Variable { name: Name, bounds: Vec<TypeRef> },
    /// No type (`void`).
    Void,
}

impl TypeRef {
    /// A non-generic declared type.
    pub fn declared(identity: Name) -> Self {
        TypeRef::Declared {
            identity,
            args: Vec::new(),
        }
    }

    /// A parameterized declared type.
    pub fn generic(identity: Name, args: Vec<TypeRef>) -> Self {
        TypeRef::Declared { identity, args }
    }

    /// An array of `component`.
    pub fn array(component: TypeRef) -> Self {
        TypeRef::Array(Box::new(component))
    }

    /// The unbounded wildcard `?`.
    pub fn unbounded_wildcard() -> Self {
        TypeRef::Wildcard {
            upper: None,
            lower: None,
        }
    }

    /// `? extends upper`.
    pub fn wildcard_extends(upper: TypeRef) -> Self {
        TypeRef::Wildcard {
            upper: Some(Box::new(upper)),
            lower: None,
        }
    }

    /// A type variable with no bounds.
    pub fn variable(name: Name) -> Self {
        TypeRef::Variable {
            name,
            bounds: Vec::new(),
        }
    }

    /// Identity of a declared type.
    #[inline]
    pub fn identity(&self) -> Option<Name> {
        match self {
            TypeRef::Declared { identity, .. } => Some(*identity),
            _ => None,
        }
    }

    /// Type arguments of a declared type (empty for everything else).
    #[inline]
    pub fn type_args(&self) -> &[TypeRef] {
        match self {
            TypeRef::Declared { args, .. } => args,
            _ => &[],
        }
    }

    /// Component type of an array.
    #[inline]
    pub fn component(&self) -> Option<&TypeRef> {
        match self {
            TypeRef::Array(component) => Some(component),
            _ => None,
        }
    }

    #[inline]
    pub fn is_void(&self) -> bool {
        matches!(self, TypeRef::Void)
    }

    /// Replace type variables bound in `env`, recursively.
    ///
    /// Variables absent from `env` are left as they are.
    #[must_use]
    pub fn substitute(&self, env: &FxHashMap<Name, TypeRef>) -> TypeRef {
        if env.is_empty() {
            return self.clone();
        }
        match self {
            TypeRef::Variable { name, .. } => match env.get(name) {
                Some(bound) => bound.clone(),
                None => self.clone(),
            },
            TypeRef::Declared { identity, args } => TypeRef::Declared {
                identity: *identity,
                args: args.iter().map(|arg| arg.substitute(env)).collect(),
            },
            TypeRef::Array(component) => TypeRef::array(component.substitute(env)),
            TypeRef::Wildcard { upper, lower } => TypeRef::Wildcard {
                upper: upper.as_ref().map(|u| Box::new(u.substitute(env))),
                lower: lower.as_ref().map(|l| Box::new(l.substitute(env))),
            },
            TypeRef::Primitive(_) | TypeRef::Void => self.clone(),
        }
    }

    /// Render in host source syntax (`java.util.Map<java.lang.String, int[]>`).
    pub fn display(&self, interner: &StringInterner) -> String {
        let mut buf = String::new();
        self.display_into(interner, &mut buf);
        buf
    }

    fn display_into(&self, interner: &StringInterner, buf: &mut String) {
        match self {
            TypeRef::Primitive(kind) => buf.push_str(kind.keyword()),
            TypeRef::Declared { identity, args } => {
                buf.push_str(interner.lookup(*identity));
                if !args.is_empty() {
                    buf.push('<');
                    for (i, arg) in args.iter().enumerate() {
                        if i > 0 {
                            buf.push_str(", ");
                        }
                        arg.display_into(interner, buf);
                    }
                    buf.push('>');
                }
            }
            TypeRef::Array(component) => {
                component.display_into(interner, buf);
                buf.push_str("[]");
            }
            TypeRef::Wildcard { upper, lower } => {
                buf.push('?');
                if let Some(upper) = upper {
                    buf.push_str(" extends ");
                    upper.display_into(interner, buf);
                }
                if let Some(lower) = lower {
                    buf.push_str(" super ");
                    lower.display_into(interner, buf);
                }
            }
            TypeRef::Variable { name, bounds } => {
                buf.push_str(interner.lookup(*name));
                for (i, bound) in bounds.iter().enumerate() {
                    let _ = write!(buf, "{}", if i == 0 { " extends " } else { " & " });
                    bound.display_into(interner, buf);
                }
            }
            TypeRef::Void => buf.push_str("void"),
        }
    }
}

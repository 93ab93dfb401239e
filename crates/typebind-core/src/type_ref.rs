//! Type expressions as seen by the binding generator.
//!
//! A `TypeRef` is an immutable value compared structurally. Primitives and
//! the handful of builtin names the generator treats specially are
//! canonicalized to the constants below, so exclusion sets built from them
//! match any equal reference.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

/// Reference to a type, as used in signatures and hierarchy edges.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeRef {
    /// Named type without type arguments (fully-qualified unless a type variable).
    Simple(Cow<'static, str>),
    /// Generic instantiation `base<args...>`.
    Parametrized { base: Box<TypeRef>, args: Vec<TypeRef> },
    /// `component` with `dimensions` levels of array-ness (always >= 1).
    Array {
        component: Box<TypeRef>,
        dimensions: u32,
    },
    /// `? extends bound`. Lower-bounded wildcards never reach this variant.
    Wildcard(Box<TypeRef>),
    /// Optional value of the inner type.
    Nullable(Box<TypeRef>),
}

impl TypeRef {
    pub const VOID: TypeRef = TypeRef::Simple(Cow::Borrowed("void"));
    pub const BOOLEAN: TypeRef = TypeRef::Simple(Cow::Borrowed("boolean"));
    pub const BYTE: TypeRef = TypeRef::Simple(Cow::Borrowed("byte"));
    pub const SHORT: TypeRef = TypeRef::Simple(Cow::Borrowed("short"));
    pub const CHAR: TypeRef = TypeRef::Simple(Cow::Borrowed("char"));
    pub const INT: TypeRef = TypeRef::Simple(Cow::Borrowed("int"));
    pub const LONG: TypeRef = TypeRef::Simple(Cow::Borrowed("long"));
    pub const FLOAT: TypeRef = TypeRef::Simple(Cow::Borrowed("float"));
    pub const DOUBLE: TypeRef = TypeRef::Simple(Cow::Borrowed("double"));

    pub const OBJECT: TypeRef = TypeRef::Simple(Cow::Borrowed("java.lang.Object"));
    pub const STRING: TypeRef = TypeRef::Simple(Cow::Borrowed("java.lang.String"));
    pub const LIST: TypeRef = TypeRef::Simple(Cow::Borrowed("java.util.List"));

    /// Name of the iterable root type, which gets an iterator-protocol member.
    pub const ITERABLE_NAME: &'static str = "java.lang.Iterable";

    /// Types that are never emitted as declarations of their own.
    pub const BUILTINS: [TypeRef; 11] = [
        TypeRef::BOOLEAN,
        TypeRef::BYTE,
        TypeRef::SHORT,
        TypeRef::CHAR,
        TypeRef::INT,
        TypeRef::LONG,
        TypeRef::FLOAT,
        TypeRef::DOUBLE,
        TypeRef::STRING,
        TypeRef::OBJECT,
        TypeRef::LIST,
    ];

    /// Named type, canonicalizing primitives, boxed primitives and builtins.
    pub fn named(name: impl Into<String>) -> TypeRef {
        let name = name.into();
        match name.as_str() {
            "void" => TypeRef::VOID,
            "boolean" | "java.lang.Boolean" => TypeRef::BOOLEAN,
            "byte" | "java.lang.Byte" => TypeRef::BYTE,
            "short" | "java.lang.Short" => TypeRef::SHORT,
            "char" | "java.lang.Character" => TypeRef::CHAR,
            "int" | "java.lang.Integer" => TypeRef::INT,
            "long" | "java.lang.Long" => TypeRef::LONG,
            "float" | "java.lang.Float" => TypeRef::FLOAT,
            "double" | "java.lang.Double" => TypeRef::DOUBLE,
            "java.lang.Object" => TypeRef::OBJECT,
            "java.lang.String" => TypeRef::STRING,
            "java.util.List" => TypeRef::LIST,
            _ => TypeRef::Simple(Cow::Owned(name)),
        }
    }

    /// Generic instantiation. Without arguments this is just `base`.
    pub fn parametrized(base: TypeRef, args: Vec<TypeRef>) -> TypeRef {
        if args.is_empty() {
            return base;
        }
        TypeRef::Parametrized {
            base: Box::new(base),
            args,
        }
    }

    /// Array of `component`. Nested arrays collapse into one dimension count.
    pub fn array(component: TypeRef, dimensions: u32) -> TypeRef {
        let dimensions = dimensions.max(1);
        match component {
            TypeRef::Array {
                component,
                dimensions: inner,
            } => TypeRef::Array {
                component,
                dimensions: inner.saturating_add(dimensions),
            },
            component => TypeRef::Array {
                component: Box::new(component),
                dimensions,
            },
        }
    }

    pub fn wildcard(upper_bound: TypeRef) -> TypeRef {
        TypeRef::Wildcard(Box::new(upper_bound))
    }

    pub fn nullable(inner: TypeRef) -> TypeRef {
        match inner {
            TypeRef::Nullable(_) => inner,
            inner => TypeRef::Nullable(Box::new(inner)),
        }
    }

    /// Wrap in array-ness, mirroring `T` -> `T[]...`.
    pub fn make_array(self, dimensions: u32) -> TypeRef {
        TypeRef::array(self, dimensions)
    }

    /// Fully-qualified name, excluding type arguments.
    ///
    /// Arrays append `[]` per dimension; wildcards are `*`. Nullable types
    /// report the name of the type they wrap.
    pub fn name(&self) -> String {
        match self {
            TypeRef::Simple(name) => name.to_string(),
            TypeRef::Parametrized { base, .. } => base.name(),
            TypeRef::Array {
                component,
                dimensions,
            } => format!("{}{}", component.name(), "[]".repeat(*dimensions as usize)),
            TypeRef::Wildcard(_) => "*".to_string(),
            TypeRef::Nullable(inner) => inner.name(),
        }
    }

    /// Last dot-separated segment of [`name`](Self::name).
    pub fn simple_name(&self) -> String {
        let name = self.name();
        match name.rfind('.') {
            Some(pos) => name[pos + 1..].to_string(),
            None => name,
        }
    }

    /// Innermost non-array, non-generic type.
    pub fn base_type(&self) -> &TypeRef {
        match self {
            TypeRef::Simple(_) | TypeRef::Wildcard(_) => self,
            TypeRef::Parametrized { base, .. } => base.base_type(),
            TypeRef::Array { component, .. } => component.base_type(),
            TypeRef::Nullable(inner) => inner.base_type(),
        }
    }

    pub fn array_dimensions(&self) -> u32 {
        match self {
            TypeRef::Array { dimensions, .. } => *dimensions,
            TypeRef::Nullable(inner) => inner.array_dimensions(),
            _ => 0,
        }
    }

    /// Type arguments of a generic instantiation, empty otherwise.
    pub fn type_args(&self) -> &[TypeRef] {
        match self {
            TypeRef::Parametrized { args, .. } => args,
            TypeRef::Nullable(inner) => inner.type_args(),
            _ => &[],
        }
    }

    pub fn is_builtin(&self) -> bool {
        TypeRef::BUILTINS.contains(self.base_type())
    }

    /// Visits every type node under this one, including itself.
    ///
    /// A `Nullable` wrapper is transparent: only its inner type is visited.
    pub fn walk<'a>(&'a self, visitor: &mut impl FnMut(&'a TypeRef)) {
        match self {
            TypeRef::Simple(_) => visitor(self),
            TypeRef::Parametrized { base, args } => {
                visitor(self);
                base.walk(visitor);
                for arg in args {
                    arg.walk(visitor);
                }
            }
            TypeRef::Array { component, .. } => {
                visitor(self);
                component.walk(visitor);
            }
            TypeRef::Wildcard(bound) => {
                visitor(self);
                bound.walk(visitor);
            }
            TypeRef::Nullable(inner) => inner.walk(visitor),
        }
    }

    /// Target-language spelling of primitives and builtins, if this is one.
    pub fn builtin_ts_name(&self) -> Option<&'static str> {
        let TypeRef::Simple(name) = self else {
            return None;
        };
        let ts = match name.as_ref() {
            "void" => "void",
            "boolean" => "boolean",
            "byte" | "short" | "int" | "long" | "float" | "double" => "number",
            "char" | "java.lang.String" => "string",
            "java.lang.Object" => "any",
            "java.util.List" => "any[]",
            _ => return None,
        };
        Some(ts)
    }

    /// Target-language identity of this type with fully-qualified names.
    ///
    /// Two references with equal erasure render to the same target type,
    /// e.g. `int` and `long` both erase to `number`.
    pub fn erasure(&self) -> String {
        match self {
            TypeRef::Simple(name) => match self.builtin_ts_name() {
                Some(ts) => ts.to_string(),
                None => name.to_string(),
            },
            TypeRef::Parametrized { base, args } => {
                if base.base_type() == &TypeRef::LIST && args.len() == 1 {
                    return format!("{}[]", args[0].erasure());
                }
                let args: Vec<String> = args.iter().map(TypeRef::erasure).collect();
                format!("{}<{}>", base.erasure(), args.join(", "))
            }
            TypeRef::Array {
                component,
                dimensions,
            } => format!("{}{}", component.erasure(), "[]".repeat(*dimensions as usize)),
            TypeRef::Wildcard(bound) => bound.erasure(),
            TypeRef::Nullable(inner) => inner.erasure(),
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Parametrized { base, args } => {
                write!(f, "{base}<")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_str(">")
            }
            TypeRef::Array {
                component,
                dimensions,
            } => write!(f, "{component}{}", "[]".repeat(*dimensions as usize)),
            TypeRef::Wildcard(bound) => write!(f, "? extends {bound}"),
            _ => f.write_str(&self.name()),
        }
    }
}

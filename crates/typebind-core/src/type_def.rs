//! Type definitions: classes, interfaces, enums and functional interfaces.

use serde::Serialize;

use crate::member::{Member, Method};
use crate::type_ref::TypeRef;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    Class,
    Interface,
    Enum,
    /// Interface with a single abstract method.
    FunctionalInterface,
}

/// A class-like declaration with its hierarchy edges and members.
///
/// Supertypes and interfaces are references by name; they are resolved
/// against a [`TypeTable`](crate::TypeTable) only when a pass needs them.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TypeDefinition {
    pub kind: TypeKind,
    /// The type itself, parametrized by its generic parameters if any.
    #[serde(rename = "type")]
    pub type_ref: TypeRef,
    pub super_types: Vec<TypeRef>,
    pub interfaces: Vec<TypeRef>,
    pub members: Vec<Member>,
    pub javadoc: Option<String>,
    pub is_public: bool,
    pub is_static: bool,
}

impl TypeDefinition {
    pub fn new(kind: TypeKind, type_ref: TypeRef) -> Self {
        Self {
            kind,
            type_ref,
            super_types: Vec::new(),
            interfaces: Vec::new(),
            members: Vec::new(),
            javadoc: None,
            is_public: true,
            is_static: false,
        }
    }

    /// Fully-qualified name.
    pub fn name(&self) -> String {
        self.type_ref.name()
    }

    pub fn simple_name(&self) -> String {
        self.type_ref.simple_name()
    }

    /// Whether any member is declared under `name`.
    pub fn has_member(&self, name: &str) -> bool {
        self.members.iter().any(|member| member.name() == name)
    }

    pub fn methods(&self) -> impl Iterator<Item = &Method> {
        self.members.iter().filter_map(Member::as_method)
    }

    /// Nested type definitions, one level deep.
    pub fn nested(&self) -> impl Iterator<Item = &TypeDefinition> {
        self.members.iter().filter_map(Member::as_type)
    }

    /// Supertypes followed by interfaces.
    pub fn ancestors(&self) -> impl Iterator<Item = &TypeRef> {
        self.super_types.iter().chain(self.interfaces.iter())
    }

    /// Every type reference under this definition, nested definitions included.
    pub fn walk_type_refs<'a>(&'a self, visitor: &mut impl FnMut(&'a TypeRef)) {
        self.type_ref.walk(visitor);
        for ancestor in self.ancestors() {
            ancestor.walk(visitor);
        }
        for member in &self.members {
            match member {
                Member::Method(method) => {
                    for type_ref in method.type_refs() {
                        type_ref.walk(visitor);
                    }
                }
                Member::Field(field) => field.type_ref.walk(visitor),
                Member::Type(def) => def.walk_type_refs(visitor),
            }
        }
    }
}

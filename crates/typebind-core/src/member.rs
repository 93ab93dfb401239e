//! Declaration members: methods and their accessor/constructor variants,
//! fields, and nested type definitions.

use serde::Serialize;

use crate::method_id::MethodId;
use crate::type_def::TypeDefinition;
use crate::type_ref::TypeRef;

/// A member of a type definition.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "member", rename_all = "snake_case")]
pub enum Member {
    Method(Method),
    Field(Field),
    Type(TypeDefinition),
}

impl Member {
    /// Name the member is declared under in the output.
    pub fn name(&self) -> String {
        match self {
            Member::Method(method) => method.name.clone(),
            Member::Field(field) => field.name.clone(),
            Member::Type(def) => def.simple_name(),
        }
    }

    pub fn javadoc(&self) -> Option<&str> {
        match self {
            Member::Method(method) => method.javadoc.as_deref(),
            Member::Field(field) => field.javadoc.as_deref(),
            Member::Type(def) => def.javadoc.as_deref(),
        }
    }

    pub fn is_public(&self) -> bool {
        match self {
            Member::Method(method) => method.is_public,
            Member::Field(field) => field.is_public,
            Member::Type(def) => def.is_public,
        }
    }

    pub fn is_static(&self) -> bool {
        match self {
            Member::Method(method) => method.is_static,
            Member::Field(field) => field.is_static,
            Member::Type(def) => def.is_static,
        }
    }

    pub fn as_method(&self) -> Option<&Method> {
        match self {
            Member::Method(method) => Some(method),
            _ => None,
        }
    }

    pub fn as_method_mut(&mut self) -> Option<&mut Method> {
        match self {
            Member::Method(method) => Some(method),
            _ => None,
        }
    }

    pub fn as_type(&self) -> Option<&TypeDefinition> {
        match self {
            Member::Type(def) => Some(def),
            _ => None,
        }
    }
}

/// What a [`Method`] stands for in the output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MethodKind {
    Method,
    /// Named `new`, returns `void`, never generic.
    Constructor,
    /// Accessor synthesized from a `getX`/`isX` method.
    Getter,
    /// Accessor synthesized from a `setX` method.
    Setter,
}

/// A method, constructor or accessor.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Method {
    pub kind: MethodKind,
    /// Output name. For accessors this is the property name.
    pub name: String,
    /// Name before accessor synthesis. Equal to `name` for other kinds.
    pub original_name: String,
    pub return_type: TypeRef,
    pub params: Vec<Parameter>,
    /// Generic type parameters declared by the method itself.
    pub type_params: Vec<TypeRef>,
    pub javadoc: Option<String>,
    pub is_public: bool,
    pub is_static: bool,
    /// Whether the source marks this method as overriding an ancestor's.
    pub is_override: bool,
    /// Fully-qualified name of the enclosing type.
    pub type_name: String,
}

impl Method {
    /// Public, non-static plain method.
    pub fn new(
        name: impl Into<String>,
        return_type: TypeRef,
        params: Vec<Parameter>,
        type_name: impl Into<String>,
    ) -> Self {
        let name = name.into();
        Self {
            kind: MethodKind::Method,
            original_name: name.clone(),
            name,
            return_type,
            params,
            type_params: Vec::new(),
            javadoc: None,
            is_public: true,
            is_static: false,
            is_override: false,
            type_name: type_name.into(),
        }
    }

    pub fn constructor(params: Vec<Parameter>, type_name: impl Into<String>) -> Self {
        Self {
            kind: MethodKind::Constructor,
            ..Self::new("new", TypeRef::VOID, params, type_name)
        }
    }

    pub fn getter(
        property: impl Into<String>,
        original_name: impl Into<String>,
        return_type: TypeRef,
        type_name: impl Into<String>,
    ) -> Self {
        Self {
            kind: MethodKind::Getter,
            original_name: original_name.into(),
            ..Self::new(property, return_type, Vec::new(), type_name)
        }
    }

    pub fn setter(
        property: impl Into<String>,
        original_name: impl Into<String>,
        value: Parameter,
        type_name: impl Into<String>,
    ) -> Self {
        Self {
            kind: MethodKind::Setter,
            original_name: original_name.into(),
            ..Self::new(property, TypeRef::VOID, vec![value], type_name)
        }
    }

    pub fn with_javadoc(mut self, javadoc: impl Into<String>) -> Self {
        self.javadoc = Some(javadoc.into());
        self
    }

    pub fn with_type_params(mut self, type_params: Vec<TypeRef>) -> Self {
        self.type_params = type_params;
        self
    }

    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    pub fn with_public(mut self, is_public: bool) -> Self {
        self.is_public = is_public;
        self
    }

    pub fn with_override(mut self, is_override: bool) -> Self {
        self.is_override = is_override;
        self
    }

    pub fn is_accessor(&self) -> bool {
        matches!(self.kind, MethodKind::Getter | MethodKind::Setter)
    }

    pub fn id(&self) -> MethodId {
        MethodId::new(self)
    }

    /// Undo accessor synthesis: a plain method under the original name.
    ///
    /// Everything else (signature, documentation, modifiers) is kept.
    /// Non-accessors are returned unchanged.
    pub fn into_plain(self) -> Method {
        if !self.is_accessor() {
            return self;
        }
        Method {
            kind: MethodKind::Method,
            name: self.original_name.clone(),
            ..self
        }
    }

    /// Every type this method mentions, in declaration order.
    pub fn type_refs(&self) -> impl Iterator<Item = &TypeRef> {
        std::iter::once(&self.return_type)
            .chain(self.params.iter().map(|param| &param.type_ref))
            .chain(self.type_params.iter())
    }
}

/// A method or constructor parameter.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub type_ref: TypeRef,
    /// Trailing variable-arity parameter; `type_ref` is the array type.
    pub varargs: bool,
}

impl Parameter {
    pub fn new(name: impl Into<String>, type_ref: TypeRef) -> Self {
        Self {
            name: name.into(),
            type_ref,
            varargs: false,
        }
    }

    pub fn varargs(name: impl Into<String>, type_ref: TypeRef) -> Self {
        Self {
            varargs: true,
            ..Self::new(name, type_ref)
        }
    }
}

/// A field, rendered as a property.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub type_ref: TypeRef,
    pub javadoc: Option<String>,
    pub is_public: bool,
    pub is_static: bool,
    pub is_final: bool,
}

impl Field {
    pub fn new(name: impl Into<String>, type_ref: TypeRef) -> Self {
        Self {
            name: name.into(),
            type_ref,
            javadoc: None,
            is_public: true,
            is_static: false,
            is_final: false,
        }
    }
}

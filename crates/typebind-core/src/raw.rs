//! Deserialization layer: 1:1 mapping of the source resolver's JSON output.
//!
//! The resolver owns symbol resolution; this module only reshapes its facts
//! into the analysis model. Along the way it canonicalizes boxed and builtin
//! names, lowers wildcards the target cannot express, and names
//! constructors and accessors.

use serde::Deserialize;

use crate::member::{Field, Member, Method, MethodKind, Parameter};
use crate::type_def::{TypeDefinition, TypeKind};
use crate::type_ref::TypeRef;
use crate::utils::property_name;
use crate::Result;

/// Top-level resolver output.
#[derive(Debug, Clone, Deserialize)]
pub struct RawModel {
    pub types: Vec<RawTypeDefinition>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawTypeDefinition {
    /// Fully-qualified name; nested types include the enclosing type's name.
    pub name: String,
    pub kind: RawTypeKind,
    #[serde(default)]
    pub type_params: Vec<RawTypeParam>,
    #[serde(default)]
    pub super_types: Vec<RawTypeRef>,
    #[serde(default)]
    pub interfaces: Vec<RawTypeRef>,
    #[serde(default)]
    pub members: Vec<RawMember>,
    #[serde(default)]
    pub javadoc: Option<String>,
    #[serde(default = "default_true", rename = "public")]
    pub is_public: bool,
    #[serde(default, rename = "static")]
    pub is_static: bool,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RawTypeKind {
    Class,
    Interface,
    Enum,
    FunctionalInterface,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RawPrimitive {
    Void,
    Boolean,
    Byte,
    Short,
    Char,
    Int,
    Long,
    Float,
    Double,
}

/// Resolved type expression.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RawTypeRef {
    Primitive(RawPrimitive),
    Class {
        name: String,
        #[serde(default)]
        args: Vec<RawTypeRef>,
    },
    Array {
        component: Box<RawTypeRef>,
        #[serde(default = "default_dimensions")]
        dimensions: u32,
    },
    Wildcard {
        #[serde(default, rename = "extends")]
        upper: Option<Box<RawTypeRef>>,
        #[serde(default, rename = "super")]
        lower: Option<Box<RawTypeRef>>,
    },
    TypeVar(String),
    Nullable(Box<RawTypeRef>),
}

/// Declared generic parameter, e.g. `T extends Comparable<T>`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTypeParam {
    pub name: String,
    #[serde(default)]
    pub bound: Option<RawTypeRef>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "member", rename_all = "snake_case")]
pub enum RawMember {
    Method(RawMethod),
    Constructor(RawMethod),
    Getter(RawMethod),
    Setter(RawMethod),
    Field(RawField),
    Type(RawTypeDefinition),
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawMethod {
    /// Source method name (`getFoo` for a getter).
    pub name: String,
    /// Synthesized property name for accessors; derived from `name` if absent.
    #[serde(default)]
    pub property: Option<String>,
    #[serde(default)]
    pub return_type: Option<RawTypeRef>,
    #[serde(default)]
    pub params: Vec<RawParam>,
    #[serde(default)]
    pub type_params: Vec<RawTypeParam>,
    #[serde(default)]
    pub javadoc: Option<String>,
    #[serde(default = "default_true", rename = "public")]
    pub is_public: bool,
    #[serde(default, rename = "static")]
    pub is_static: bool,
    #[serde(default, rename = "override")]
    pub is_override: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawParam {
    pub name: String,
    #[serde(rename = "type")]
    pub type_ref: RawTypeRef,
    #[serde(default)]
    pub varargs: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawField {
    pub name: String,
    #[serde(rename = "type")]
    pub type_ref: RawTypeRef,
    #[serde(default)]
    pub javadoc: Option<String>,
    #[serde(default = "default_true", rename = "public")]
    pub is_public: bool,
    #[serde(default, rename = "static")]
    pub is_static: bool,
    #[serde(default, rename = "final")]
    pub is_final: bool,
}

fn default_true() -> bool {
    true
}

fn default_dimensions() -> u32 {
    1
}

/// Parse resolver output into type definitions, in input order.
pub fn parse_model(json: &str) -> Result<Vec<TypeDefinition>> {
    let raw: RawModel = serde_json::from_str(json)?;
    Ok(raw
        .types
        .into_iter()
        .map(RawTypeDefinition::into_definition)
        .collect())
}

impl RawTypeDefinition {
    pub fn into_definition(self) -> TypeDefinition {
        let params: Vec<TypeRef> = self
            .type_params
            .into_iter()
            .map(RawTypeParam::into_type_ref)
            .collect();
        let type_ref = TypeRef::parametrized(TypeRef::named(self.name.clone()), params);
        let kind = match self.kind {
            RawTypeKind::Class => TypeKind::Class,
            RawTypeKind::Interface => TypeKind::Interface,
            RawTypeKind::Enum => TypeKind::Enum,
            RawTypeKind::FunctionalInterface => TypeKind::FunctionalInterface,
        };

        let name = self.name;
        TypeDefinition {
            kind,
            type_ref,
            super_types: self
                .super_types
                .into_iter()
                .map(RawTypeRef::into_type_ref)
                .collect(),
            interfaces: self
                .interfaces
                .into_iter()
                .map(RawTypeRef::into_type_ref)
                .collect(),
            members: self
                .members
                .into_iter()
                .map(|member| member.into_member(&name))
                .collect(),
            javadoc: self.javadoc,
            is_public: self.is_public,
            is_static: self.is_static,
        }
    }
}

impl RawTypeParam {
    /// Declaration-site form: a bounded parameter keeps its bound as the
    /// single type argument of the parameter name.
    pub fn into_type_ref(self) -> TypeRef {
        let name = TypeRef::named(self.name);
        match self.bound {
            Some(bound) => TypeRef::parametrized(name, vec![bound.into_type_ref()]),
            None => name,
        }
    }
}

impl RawTypeRef {
    pub fn into_type_ref(self) -> TypeRef {
        match self {
            RawTypeRef::Primitive(primitive) => match primitive {
                RawPrimitive::Void => TypeRef::VOID,
                RawPrimitive::Boolean => TypeRef::BOOLEAN,
                RawPrimitive::Byte => TypeRef::BYTE,
                RawPrimitive::Short => TypeRef::SHORT,
                RawPrimitive::Char => TypeRef::CHAR,
                RawPrimitive::Int => TypeRef::INT,
                RawPrimitive::Long => TypeRef::LONG,
                RawPrimitive::Float => TypeRef::FLOAT,
                RawPrimitive::Double => TypeRef::DOUBLE,
            },
            RawTypeRef::Class { name, args } => TypeRef::parametrized(
                TypeRef::named(name),
                args.into_iter().map(RawTypeRef::into_type_ref).collect(),
            ),
            RawTypeRef::Array {
                component,
                dimensions,
            } => TypeRef::array(component.into_type_ref(), dimensions),
            // `? super X` and a bare `?` have no target analogue.
            RawTypeRef::Wildcard {
                upper: Some(upper),
                lower: None,
            } => TypeRef::wildcard(upper.into_type_ref()),
            RawTypeRef::Wildcard { .. } => TypeRef::OBJECT,
            RawTypeRef::TypeVar(name) => TypeRef::named(name),
            RawTypeRef::Nullable(inner) => TypeRef::nullable(inner.into_type_ref()),
        }
    }
}

impl RawMember {
    pub fn into_member(self, type_name: &str) -> Member {
        match self {
            RawMember::Method(raw) => Member::Method(raw.into_method(MethodKind::Method, type_name)),
            RawMember::Constructor(raw) => {
                Member::Method(raw.into_method(MethodKind::Constructor, type_name))
            }
            RawMember::Getter(raw) => Member::Method(raw.into_method(MethodKind::Getter, type_name)),
            RawMember::Setter(raw) => Member::Method(raw.into_method(MethodKind::Setter, type_name)),
            RawMember::Field(raw) => Member::Field(Field {
                name: raw.name,
                type_ref: raw.type_ref.into_type_ref(),
                javadoc: raw.javadoc,
                is_public: raw.is_public,
                is_static: raw.is_static,
                is_final: raw.is_final,
            }),
            RawMember::Type(raw) => Member::Type(raw.into_definition()),
        }
    }
}

impl RawMethod {
    fn into_method(self, kind: MethodKind, type_name: &str) -> Method {
        // An accessor whose name does not follow the convention stays a method.
        let (kind, name) = match kind {
            MethodKind::Method => (kind, self.name.clone()),
            MethodKind::Constructor => (kind, "new".to_string()),
            MethodKind::Getter | MethodKind::Setter => {
                match self.property.clone().or_else(|| property_name(&self.name)) {
                    Some(property) => (kind, property),
                    None => (MethodKind::Method, self.name.clone()),
                }
            }
        };
        let return_type = match kind {
            MethodKind::Constructor => TypeRef::VOID,
            _ => self
                .return_type
                .map(RawTypeRef::into_type_ref)
                .unwrap_or(TypeRef::VOID),
        };
        let type_params = match kind {
            MethodKind::Constructor => Vec::new(),
            _ => self
                .type_params
                .into_iter()
                .map(RawTypeParam::into_type_ref)
                .collect(),
        };
        let original_name = match kind {
            MethodKind::Constructor => name.clone(),
            _ => self.name,
        };

        Method {
            kind,
            name,
            original_name,
            return_type,
            params: self
                .params
                .into_iter()
                .map(|param| Parameter {
                    name: param.name,
                    type_ref: param.type_ref.into_type_ref(),
                    varargs: param.varargs,
                })
                .collect(),
            type_params,
            javadoc: self.javadoc,
            is_public: self.is_public,
            is_static: self.is_static,
            is_override: self.is_override,
            type_name: type_name.to_string(),
        }
    }
}

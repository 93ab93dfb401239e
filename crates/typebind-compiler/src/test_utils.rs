//! Model builders and output helpers for tests.

use typebind_core::{
    Field, Member, Method, Parameter, TypeDefinition, TypeKind, TypeRef, TypeTable,
};

use crate::{Config, OutputUnit, Pipeline};

/// Builder for a [`TypeDefinition`].
pub struct TypeBuilder(TypeDefinition);

pub fn class(name: &str) -> TypeBuilder {
    TypeBuilder(TypeDefinition::new(TypeKind::Class, TypeRef::named(name)))
}

pub fn interface(name: &str) -> TypeBuilder {
    TypeBuilder(TypeDefinition::new(TypeKind::Interface, TypeRef::named(name)))
}

pub fn enumeration(name: &str) -> TypeBuilder {
    TypeBuilder(TypeDefinition::new(TypeKind::Enum, TypeRef::named(name)))
}

pub fn functional(name: &str) -> TypeBuilder {
    TypeBuilder(TypeDefinition::new(
        TypeKind::FunctionalInterface,
        TypeRef::named(name),
    ))
}

impl TypeBuilder {
    /// Declare generic parameters.
    pub fn generics(mut self, params: Vec<TypeRef>) -> Self {
        self.0.type_ref = TypeRef::parametrized(TypeRef::named(self.0.name()), params);
        self
    }

    pub fn extends(mut self, ancestor: TypeRef) -> Self {
        self.0.super_types.push(ancestor);
        self
    }

    pub fn implements(mut self, ancestor: TypeRef) -> Self {
        self.0.interfaces.push(ancestor);
        self
    }

    pub fn doc(mut self, doc: &str) -> Self {
        self.0.javadoc = Some(doc.to_string());
        self
    }

    pub fn method(mut self, method: Method) -> Self {
        self.0.members.push(Member::Method(method));
        self
    }

    pub fn field(mut self, field: Field) -> Self {
        self.0.members.push(Member::Field(field));
        self
    }

    pub fn nested(mut self, def: TypeDefinition) -> Self {
        self.0.members.push(Member::Type(def));
        self
    }

    pub fn build(self) -> TypeDefinition {
        self.0
    }
}

pub fn named(name: &str) -> TypeRef {
    TypeRef::named(name)
}

pub fn param(name: &str, type_ref: TypeRef) -> Parameter {
    Parameter::new(name, type_ref)
}

/// Plain public method of `owner`.
pub fn method(owner: &str, name: &str, params: Vec<Parameter>, ret: TypeRef) -> Method {
    Method::new(name, ret, params, owner)
}

/// Getter derived from `get<Name>`.
pub fn getter(owner: &str, property: &str, ret: TypeRef) -> Method {
    Method::getter(property, accessor_name("get", property), ret, owner)
}

/// Setter derived from `set<Name>`.
pub fn setter(owner: &str, property: &str, value: TypeRef) -> Method {
    Method::setter(
        property,
        accessor_name("set", property),
        Parameter::new("value", value),
        owner,
    )
}

fn accessor_name(prefix: &str, property: &str) -> String {
    let mut chars = property.chars();
    match chars.next() {
        Some(first) => format!("{prefix}{}{}", first.to_ascii_uppercase(), chars.as_str()),
        None => prefix.to_string(),
    }
}

pub fn table(defs: Vec<TypeDefinition>) -> TypeTable {
    TypeTable::new(defs).expect("test types must be unique")
}

/// Run the pipeline and join every unit under a `// <name>` header.
pub fn generate(config: Config, defs: Vec<TypeDefinition>) -> String {
    let pipeline = Pipeline::new(config).expect("valid config");
    render_units(&pipeline.run(&table(defs)))
}

pub fn render_units(units: &[OutputUnit]) -> String {
    units
        .iter()
        .map(|unit| format!("// {}\n{}", unit.name, unit.contents))
        .collect::<Vec<_>>()
        .join("\n")
}

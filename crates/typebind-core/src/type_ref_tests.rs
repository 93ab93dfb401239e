use crate::TypeRef;

fn named(name: &str) -> TypeRef {
    TypeRef::named(name)
}

#[test]
fn boxed_types_canonicalize_to_primitives() {
    assert_eq!(named("java.lang.Integer"), TypeRef::INT);
    assert_eq!(named("java.lang.Boolean"), TypeRef::BOOLEAN);
    assert_eq!(named("java.lang.Character"), TypeRef::CHAR);
    assert_eq!(named("java.lang.String"), TypeRef::STRING);
    assert_ne!(named("com.acme.Integer"), TypeRef::INT);
}

#[test]
fn parametrized_without_args_is_base() {
    let base = named("com.acme.Box");
    assert_eq!(TypeRef::parametrized(base.clone(), vec![]), base);
}

#[test]
fn nested_arrays_collapse() {
    let inner = TypeRef::array(TypeRef::INT, 1);
    let outer = TypeRef::array(inner, 2);
    assert_eq!(outer.array_dimensions(), 3);
    assert_eq!(outer.base_type(), &TypeRef::INT);
    assert_eq!(outer.name(), "int[][][]");
}

#[test]
fn nested_array_dimensions_saturate() {
    let inner = TypeRef::array(TypeRef::INT, u32::MAX);
    let outer = TypeRef::array(inner, 3);
    assert_eq!(outer.array_dimensions(), u32::MAX);
}

#[test]
fn array_dimensions_never_zero() {
    assert_eq!(TypeRef::INT.make_array(0).array_dimensions(), 1);
}

#[test]
fn nullable_is_transparent() {
    let inner = TypeRef::parametrized(named("com.acme.Box"), vec![TypeRef::STRING]);
    let nullable = TypeRef::nullable(TypeRef::nullable(inner.clone()));

    assert_eq!(nullable, TypeRef::Nullable(Box::new(inner.clone())));
    assert_eq!(nullable.name(), "com.acme.Box");
    assert_eq!(nullable.type_args(), &[TypeRef::STRING]);
    assert_eq!(nullable.erasure(), inner.erasure());
}

#[test]
fn simple_name_strips_package() {
    let list = TypeRef::parametrized(TypeRef::LIST, vec![TypeRef::STRING]);
    assert_eq!(list.simple_name(), "List");
    assert_eq!(named("T").simple_name(), "T");
}

#[test]
fn builtins() {
    assert!(TypeRef::INT.is_builtin());
    assert!(TypeRef::parametrized(TypeRef::LIST, vec![named("com.acme.Dog")]).is_builtin());
    assert!(!TypeRef::VOID.is_builtin());
    assert!(!named("com.acme.Dog").is_builtin());
}

#[test]
fn erasure_merges_numeric_types() {
    assert_eq!(TypeRef::INT.erasure(), "number");
    assert_eq!(TypeRef::LONG.erasure(), TypeRef::DOUBLE.erasure());
    assert_eq!(TypeRef::CHAR.erasure(), TypeRef::STRING.erasure());
    assert_eq!(TypeRef::OBJECT.erasure(), "any");
}

#[test]
fn erasure_of_generics() {
    let dogs = TypeRef::parametrized(TypeRef::LIST, vec![named("com.acme.Dog")]);
    assert_eq!(dogs.erasure(), "com.acme.Dog[]");

    let map = TypeRef::parametrized(
        named("java.util.Map"),
        vec![TypeRef::STRING, TypeRef::wildcard(named("com.acme.Dog"))],
    );
    assert_eq!(map.erasure(), "java.util.Map<string, com.acme.Dog>");

    assert_eq!(TypeRef::array(TypeRef::BYTE, 2).erasure(), "number[][]");
}

#[test]
fn walk_visits_every_node() {
    let ty = TypeRef::nullable(TypeRef::parametrized(
        named("java.util.Map"),
        vec![TypeRef::STRING, TypeRef::array(named("com.acme.Dog"), 1)],
    ));

    let mut seen = Vec::new();
    ty.walk(&mut |node| seen.push(node.to_string()));

    assert_eq!(
        seen,
        vec![
            "java.util.Map<java.lang.String, com.acme.Dog[]>",
            "java.util.Map",
            "java.lang.String",
            "com.acme.Dog[]",
            "com.acme.Dog",
        ]
    );
}

#[test]
fn display() {
    let ty = TypeRef::parametrized(
        TypeRef::LIST,
        vec![TypeRef::wildcard(named("com.acme.Animal"))],
    );
    assert_eq!(ty.to_string(), "java.util.List<? extends com.acme.Animal>");
}

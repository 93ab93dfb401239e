use indoc::indoc;

use crate::{Error, Member, MethodKind, TypeKind, TypeRef, parse_model};

const SAMPLE_JSON: &str = indoc! {r#"
    {
      "types": [
        {
          "name": "com.acme.Kennel",
          "kind": "class",
          "type_params": [
            {"name": "T", "bound": {"class": {"name": "com.acme.Animal"}}}
          ],
          "super_types": [{"class": {"name": "java.lang.Object"}}],
          "interfaces": [
            {"class": {"name": "java.lang.Iterable", "args": [{"type_var": "T"}]}}
          ],
          "javadoc": "Holds animals.",
          "members": [
            {"member": "constructor", "name": "Kennel", "params": []},
            {
              "member": "getter",
              "name": "getSize",
              "return_type": {"class": {"name": "java.lang.Integer"}}
            },
            {
              "member": "setter",
              "name": "setLabel",
              "property": "tag",
              "params": [{"name": "label", "type": {"class": {"name": "java.lang.String"}}}]
            },
            {
              "member": "getter",
              "name": "size",
              "return_type": {"primitive": "int"}
            },
            {
              "member": "method",
              "name": "addAll",
              "params": [
                {
                  "name": "animals",
                  "type": {"class": {"name": "java.util.List", "args": [{"wildcard": {"super": {"type_var": "T"}}}]}}
                },
                {
                  "name": "more",
                  "type": {"array": {"component": {"type_var": "T"}}},
                  "varargs": true
                }
              ],
              "override": true
            },
            {
              "member": "field",
              "name": "CAPACITY",
              "type": {"primitive": "long"},
              "static": true,
              "final": true
            },
            {
              "member": "type",
              "name": "com.acme.Kennel.Slot",
              "kind": "enum",
              "static": true
            }
          ]
        },
        {
          "name": "com.acme.Walker",
          "kind": "functional_interface",
          "members": [
            {
              "member": "method",
              "name": "walk",
              "return_type": {"nullable": {"class": {"name": "com.acme.Route"}}},
              "params": [{"name": "distance", "type": {"primitive": "double"}}]
            }
          ]
        }
      ]
    }
"#};

#[test]
fn parses_definitions_in_order() {
    let defs = parse_model(SAMPLE_JSON).unwrap();
    let names: Vec<_> = defs.iter().map(|def| def.name()).collect();
    assert_eq!(names, vec!["com.acme.Kennel", "com.acme.Walker"]);
    assert_eq!(defs[1].kind, TypeKind::FunctionalInterface);
}

#[test]
fn bounded_type_params_keep_bound() {
    let defs = parse_model(SAMPLE_JSON).unwrap();
    let kennel = &defs[0];
    assert_eq!(
        kennel.type_ref.to_string(),
        "com.acme.Kennel<T<com.acme.Animal>>"
    );
    assert_eq!(kennel.super_types, vec![TypeRef::OBJECT]);
    assert_eq!(
        kennel.interfaces[0].to_string(),
        "java.lang.Iterable<T>"
    );
    assert_eq!(kennel.javadoc.as_deref(), Some("Holds animals."));
}

#[test]
fn members_are_named_by_kind() {
    let defs = parse_model(SAMPLE_JSON).unwrap();
    let methods: Vec<_> = defs[0]
        .methods()
        .map(|m| (m.kind, m.name.as_str(), m.original_name.as_str()))
        .collect();

    assert_eq!(
        methods,
        vec![
            (MethodKind::Constructor, "new", "new"),
            (MethodKind::Getter, "size", "getSize"),
            (MethodKind::Setter, "tag", "setLabel"),
            (MethodKind::Method, "size", "size"),
            (MethodKind::Method, "addAll", "addAll"),
        ]
    );
}

#[test]
fn signatures_are_canonicalized() {
    let defs = parse_model(SAMPLE_JSON).unwrap();
    let methods: Vec<_> = defs[0].methods().collect();

    assert_eq!(methods[0].return_type, TypeRef::VOID);
    assert_eq!(methods[1].return_type, TypeRef::INT);
    assert_eq!(methods[2].params[0].type_ref, TypeRef::STRING);

    let add_all = methods[4];
    assert!(add_all.is_override);
    assert_eq!(add_all.type_name, "com.acme.Kennel");
    assert_eq!(
        add_all.params[0].type_ref,
        TypeRef::parametrized(TypeRef::LIST, vec![TypeRef::OBJECT])
    );
    assert!(add_all.params[1].varargs);
    assert_eq!(add_all.params[1].type_ref.to_string(), "T[]");
}

#[test]
fn fields_and_nested_types() {
    let defs = parse_model(SAMPLE_JSON).unwrap();
    let members = &defs[0].members;

    let Member::Field(field) = &members[5] else {
        panic!("expected a field, got {:?}", members[5]);
    };
    assert_eq!(field.type_ref, TypeRef::LONG);
    assert!(field.is_static && field.is_final && field.is_public);

    let slot = members[6].as_type().unwrap();
    assert_eq!(slot.kind, TypeKind::Enum);
    assert_eq!(slot.name(), "com.acme.Kennel.Slot");
    assert_eq!(members[6].name(), "Slot");
    assert!(slot.is_static);
}

#[test]
fn nullable_return_type() {
    let defs = parse_model(SAMPLE_JSON).unwrap();
    let walk = defs[1].methods().next().unwrap();
    assert_eq!(
        walk.return_type,
        TypeRef::nullable(TypeRef::named("com.acme.Route"))
    );
    assert_eq!(walk.params[0].type_ref, TypeRef::DOUBLE);
}

#[test]
fn rejects_malformed_input() {
    let err = parse_model(r#"{"types": [{"name": "a.A"}]}"#).unwrap_err();
    assert!(matches!(err, Error::Json(_)));
    assert!(err.to_string().starts_with("malformed resolver output: "));
}

#[test]
fn empty_model() {
    assert!(parse_model(r#"{"types": []}"#).unwrap().is_empty());
}

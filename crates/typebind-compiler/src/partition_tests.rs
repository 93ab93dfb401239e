use typebind_core::TypeRef;

use crate::Config;
use crate::partition::{collect_modules, partition, partition_key};
use crate::test_utils::{class, interface};

#[test]
fn key_uses_first_two_segments() {
    assert_eq!(partition_key("com.acme.zoo.animals", false), "com_acme");
    assert_eq!(partition_key("com.acme", false), "com_acme");
    assert_eq!(partition_key("default", false), "default");
}

#[test]
fn key_per_module() {
    assert_eq!(partition_key("com.acme.zoo.Cage", true), "com_acme_zoo_Cage");
}

#[test]
fn modules_lift_nested_types() {
    let outer = class("com.acme.Outer")
        .nested(class("com.acme.Outer.Inner").build())
        .build();
    let defs = vec![outer, class("com.acme.Other").build(), class("Orphan").build()];

    let modules = collect_modules(&defs);
    let layout: Vec<(&str, Vec<String>)> = modules
        .iter()
        .map(|(module, defs)| (module.as_str(), defs.iter().map(|d| d.name()).collect()))
        .collect();

    assert_eq!(
        layout,
        vec![
            ("com.acme", vec!["com.acme.Outer".to_string(), "com.acme.Other".to_string()]),
            ("com.acme.Outer", vec!["com.acme.Outer.Inner".to_string()]),
            ("default", vec!["Orphan".to_string()]),
        ]
    );
}

#[test]
fn builtins_are_never_emitted() {
    let list = interface("java.util.List")
        .generics(vec![TypeRef::named("E")])
        .build();
    let defs = vec![
        class("java.lang.Object").build(),
        class("java.lang.String").build(),
        list,
        class("java.util.Map").build(),
    ];

    let modules = collect_modules(&defs);
    let names: Vec<String> = modules.values().flatten().map(|d| d.name()).collect();
    assert_eq!(names, vec!["java.util.Map"]);
}

#[test]
fn units_concatenate_modules_sharing_a_key() {
    let rendered = vec![
        ("com.acme.a".to_string(), "A\n".to_string()),
        ("org.x".to_string(), "X\n".to_string()),
        ("com.acme.b".to_string(), "B\n".to_string()),
    ];
    let units = partition(rendered, &Config::new());

    let names: Vec<&str> = units.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["com_acme.d.ts", "org_x.d.ts"]);
    assert_eq!(units[0].contents, "A\n\nB\n");
}

#[test]
fn index_references_every_unit() {
    let rendered = vec![
        ("com.acme.a".to_string(), "A\n".to_string()),
        ("org.x".to_string(), "X\n".to_string()),
    ];
    let units = partition(rendered, &Config::new().build_index(true));

    let index = units.last().unwrap();
    assert_eq!(index.name, "index.d.ts");
    insta::assert_snapshot!(&index.contents, @r"
    // auto-generated references to packages
    /// <reference path='com_acme.d.ts' />
    /// <reference path='org_x.d.ts' />
    ");
}

#[test]
fn group_by_module_splits_units() {
    let rendered = vec![
        ("com.acme.a".to_string(), "A\n".to_string()),
        ("com.acme.b".to_string(), "B\n".to_string()),
    ];
    let units = partition(rendered, &Config::new().group_by_module(true));
    let names: Vec<&str> = units.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["com_acme_a.d.ts", "com_acme_b.d.ts"]);
}

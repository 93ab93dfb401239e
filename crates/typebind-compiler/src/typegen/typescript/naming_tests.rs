use super::{Emitter, escape_param_name};
use crate::Config;
use crate::test_utils::table;

#[test]
fn reserved_parameter_names() {
    assert_eq!(escape_param_name("function"), "function_");
    assert_eq!(escape_param_name("default"), "default_");
    assert_eq!(escape_param_name("value"), "value");
}

#[test]
fn local_and_unpackaged_names_stay_bare() {
    let table = table(vec![]);
    let config = Config::new();
    let mut emitter = Emitter::new(&table, &config, "com.acme");

    assert_eq!(emitter.local_name("com.acme.Dog"), "Dog");
    assert_eq!(emitter.local_name("T"), "T");
    assert!(emitter.import_lines().is_empty());
}

#[test]
fn imports_are_grouped_and_aliased() {
    let table = table(vec![]);
    let config = Config::new();
    let mut emitter = Emitter::new(&table, &config, "com.acme");
    emitter.taken.insert("Dog".to_string());

    assert_eq!(emitter.local_name("org.zoo.Cage"), "Cage");
    assert_eq!(emitter.local_name("org.zoo.Dog"), "org_zoo_Dog");
    assert_eq!(emitter.local_name("net.shelter.Cage"), "net_shelter_Cage");
    assert_eq!(emitter.local_name("org.zoo.Keeper"), "Keeper");
    assert_eq!(emitter.local_name("org.zoo.Cage"), "Cage");

    assert_eq!(
        emitter.import_lines(),
        vec![
            "import { Cage, Dog as org_zoo_Dog, Keeper } from 'org.zoo';",
            "import { Cage as net_shelter_Cage } from 'net.shelter';",
        ]
    );
}

#[test]
fn nested_types_import_from_enclosing_type() {
    let table = table(vec![]);
    let config = Config::new();
    let mut emitter = Emitter::new(&table, &config, "com.acme");

    assert_eq!(emitter.local_name("com.acme.Outer.Inner"), "Inner");
    assert_eq!(
        emitter.import_lines(),
        vec!["import { Inner } from 'com.acme.Outer';"]
    );
}

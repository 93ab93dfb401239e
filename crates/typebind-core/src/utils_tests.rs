use crate::utils::{module_name, property_name, simple_name};

#[test]
fn module_of_nested_type_is_enclosing_type() {
    assert_eq!(module_name("com.acme.Outer.Inner"), "com.acme.Outer");
    assert_eq!(module_name("com.acme.Outer"), "com.acme");
}

#[test]
fn module_of_unpackaged_type_is_empty() {
    assert_eq!(module_name("Orphan"), "");
    assert_eq!(simple_name("Orphan"), "Orphan");
}

#[test]
fn property_name_prefixes() {
    assert_eq!(property_name("getName").as_deref(), Some("name"));
    assert_eq!(property_name("setName").as_deref(), Some("name"));
    assert_eq!(property_name("isActive").as_deref(), Some("active"));
}

#[test]
fn property_name_keeps_acronyms() {
    assert_eq!(property_name("getURL").as_deref(), Some("URL"));
    assert_eq!(property_name("getX").as_deref(), Some("x"));
}

#[test]
fn property_name_rejects_non_accessors() {
    assert_eq!(property_name("get"), None);
    assert_eq!(property_name("issue"), None);
    assert_eq!(property_name("settle"), None);
    assert_eq!(property_name("run"), None);
}

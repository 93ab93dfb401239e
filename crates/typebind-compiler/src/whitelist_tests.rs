use std::time::{Duration, Instant};

use crate::{Error, MethodWhitelist};

#[test]
fn empty_whitelist_allows_nothing() {
    let whitelist = MethodWhitelist::new(Vec::<String>::new()).unwrap();
    assert!(whitelist.is_empty());
    assert!(!whitelist.allows("com.acme.Dog", "bark"));
}

#[test]
fn requires_full_match() {
    let whitelist = MethodWhitelist::new(["com\\.acme\\.Dog\\.bark"]).unwrap();
    assert!(whitelist.allows("com.acme.Dog", "bark"));
    assert!(!whitelist.allows("com.acme.Dog", "barkLoudly"));
    assert!(!whitelist.allows("org.com.acme.Dog", "bark"));
}

#[test]
fn alternation_is_grouped() {
    let whitelist = MethodWhitelist::new(["a|b"]).unwrap();
    assert!(!whitelist.allows("a", "x"));
    assert!(!whitelist.allows("x", "b"));

    let whitelist = MethodWhitelist::new([".*\\.(add|remove)"]).unwrap();
    assert!(whitelist.allows("com.acme.Kennel", "add"));
    assert!(whitelist.allows("com.acme.Kennel", "remove"));
    assert!(!whitelist.allows("com.acme.Kennel", "addAll"));
}

#[test]
fn any_pattern_matches() {
    let whitelist = MethodWhitelist::new(["com\\.acme\\..*\\.add", ".*\\.toString"]).unwrap();
    assert_eq!(whitelist.len(), 2);
    assert!(whitelist.allows("com.acme.Kennel", "add"));
    assert!(whitelist.allows("org.other.Thing", "toString"));
    assert!(!whitelist.allows("org.other.Thing", "add"));
    assert_eq!(
        whitelist.sources().collect::<Vec<_>>(),
        vec!["com\\.acme\\..*\\.add", ".*\\.toString"]
    );
}

#[test]
fn invalid_pattern_fails_at_construction() {
    let err = MethodWhitelist::new([".*", "(unclosed"]).unwrap_err();
    let Error::InvalidWhitelistPattern { pattern, .. } = &err;
    assert_eq!(pattern, "(unclosed");
    assert!(
        err.to_string()
            .starts_with("invalid method whitelist pattern `(unclosed`: ")
    );
}

#[test]
fn word_boundaries_are_supported() {
    let whitelist = MethodWhitelist::new([r"com\.acme\.Dog\.\bfeed"]).unwrap();
    assert!(whitelist.allows("com.acme.Dog", "feed"));
    assert!(!whitelist.allows("com.acme.Dog", "overfeed"));
}

#[test]
fn unicode_classes_build_quickly() {
    let start = Instant::now();
    let whitelist = MethodWhitelist::new([r"\w+\.\w+\.\w+\.get\w{1,20}"]).unwrap();
    assert!(start.elapsed() < Duration::from_secs(5));

    assert!(whitelist.allows("com.acme.Dog", "getName"));
    assert!(whitelist.allows("com.acme.Dog", "getÉtat"));
    assert!(!whitelist.allows("com.acme.Dog", "setName"));
    assert!(!whitelist.allows("com.acme.zoo.Dog", "getName"));
}

/// Everything before the last `.` of a qualified name.
///
/// For a nested type this is the enclosing type's qualified name. Names
/// without a package yield an empty string.
///
/// # Examples
/// ```
/// use typebind_core::utils::module_name;
/// assert_eq!(module_name("java.util.List"), "java.util");
/// assert_eq!(module_name("java.util.Map.Entry"), "java.util.Map");
/// assert_eq!(module_name("Orphan"), "");
/// ```
pub fn module_name(qualified: &str) -> &str {
    match qualified.rfind('.') {
        Some(pos) => &qualified[..pos],
        None => "",
    }
}

/// Last dot-separated segment of a qualified name.
///
/// # Examples
/// ```
/// use typebind_core::utils::simple_name;
/// assert_eq!(simple_name("java.util.List"), "List");
/// assert_eq!(simple_name("T"), "T");
/// ```
pub fn simple_name(qualified: &str) -> &str {
    match qualified.rfind('.') {
        Some(pos) => &qualified[pos + 1..],
        None => qualified,
    }
}

/// Property name for an accessor-style method name.
///
/// Strips a `get`, `set` or `is` prefix followed by an uppercase letter and
/// lowercases the first remaining character. Returns `None` if the name does
/// not follow the convention.
///
/// # Examples
/// ```
/// use typebind_core::utils::property_name;
/// assert_eq!(property_name("getName").as_deref(), Some("name"));
/// assert_eq!(property_name("isEmpty").as_deref(), Some("empty"));
/// assert_eq!(property_name("getURL").as_deref(), Some("URL"));
/// assert_eq!(property_name("gettysburg"), None);
/// ```
pub fn property_name(method: &str) -> Option<String> {
    let rest = ["get", "set", "is"]
        .iter()
        .find_map(|prefix| method.strip_prefix(prefix))?;
    let mut chars = rest.chars();
    let first = chars.next()?;
    if !first.is_ascii_uppercase() {
        return None;
    }

    // Leave acronyms (`getURL` -> `URL`) alone, like the bean convention.
    let second_upper = chars.next().is_some_and(|c| c.is_ascii_uppercase());
    if second_upper {
        return Some(rest.to_string());
    }

    let mut result = String::with_capacity(rest.len());
    result.push(first.to_ascii_lowercase());
    result.push_str(&rest[first.len_utf8()..]);
    Some(result)
}

//! Names derived from a file's position in the tree.

use serde_json::Value;

use strata_templates::Variables;

/// Variable holding the Pascal-case identifier (`UserIndex`).
pub const IDENTIFIER_VAR: &str = "identifier";
/// Variable holding the camel-case identifier (`userIndex`).
pub const CAMEL_IDENTIFIER_VAR: &str = "camel_identifier";
/// Variable holding the slash-joined logical path (`user/index`).
pub const LOGICAL_PATH_VAR: &str = "logical_path";
/// Variable holding the file key without its extension (`index`).
pub const NAME_VAR: &str = "name";

/// Key without its final extension. Dot-files keep their full name.
pub fn strip_extension(key: &str) -> &str {
    match key.rfind('.') {
        Some(idx) if idx > 0 => &key[..idx],
        _ => key,
    }
}

/// Breadcrumb plus stem, each segment's first character upper-cased.
pub fn pascal_identifier(breadcrumb: &[String], stem: &str) -> String {
    breadcrumb
        .iter()
        .map(String::as_str)
        .chain(std::iter::once(stem))
        .map(capitalize)
        .collect()
}

/// Pascal identifier with its first character lower-cased.
pub fn camel_identifier(breadcrumb: &[String], stem: &str) -> String {
    let pascal = pascal_identifier(breadcrumb, stem);
    let mut chars = pascal.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
    }
}

/// Breadcrumb joined by `/`, followed by the stem.
pub fn logical_path(breadcrumb: &[String], stem: &str) -> String {
    if breadcrumb.is_empty() {
        return stem.to_string();
    }
    format!("{}/{}", breadcrumb.join("/"), stem)
}

/// All derived variables for the file `key` under `breadcrumb`.
pub fn derived_variables(breadcrumb: &[String], key: &str) -> Variables {
    let stem = strip_extension(key);
    let mut vars = Variables::new();
    vars.insert(
        IDENTIFIER_VAR.to_string(),
        Value::String(pascal_identifier(breadcrumb, stem)),
    );
    vars.insert(
        CAMEL_IDENTIFIER_VAR.to_string(),
        Value::String(camel_identifier(breadcrumb, stem)),
    );
    vars.insert(
        LOGICAL_PATH_VAR.to_string(),
        Value::String(logical_path(breadcrumb, stem)),
    );
    vars.insert(NAME_VAR.to_string(), Value::String(stem.to_string()));
    vars
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

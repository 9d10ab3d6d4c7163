use once_cell::sync::Lazy;
use regex::Regex;

static INVALID_NAME_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z0-9_]").expect("static regex"));
static INVALID_NAMESPACE_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z0-9_\.]").expect("static regex"));
static AVRO_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("static regex"));
static UPPER_WORDS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Z][a-z0-9]*").expect("static regex"));
static MIXED_WORDS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-z0-9]+|[A-Z][a-z0-9]*").expect("static regex"));

/// Convert a raw string into a valid Avro name.
///
/// Ensures the identifier starts with a letter or underscore,
/// replaces invalid characters with `_`, and prefixes leading digits.
pub fn avro_name(name: &str) -> String {
    let mut val = INVALID_NAME_CHARS.replace_all(name, "_").to_string();
    if val.is_empty() || !val.starts_with(|c: char| c.is_ascii_alphabetic() || c == '_') {
        val = format!("_{val}");
    }
    val
}

/// Convert an input string into a valid Avro namespace.
///
/// Replaces invalid chars with `_` but preserves dots as separators.
pub fn avro_namespace(name: &str) -> String {
    let val = INVALID_NAMESPACE_CHARS.replace_all(name, "_").to_string();
    if val.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{val}")
    } else {
        val
    }
}

/// True when `name` may be used unchanged as an Avro name or enum symbol.
pub fn is_valid_avro_name(name: &str) -> bool {
    AVRO_NAME.is_match(name)
}

/// Convert string to PascalCase.
pub fn pascal(input: &str) -> String {
    if input.contains('.') {
        return input.split('.').map(pascal).collect::<Vec<_>>().join(".");
    }
    if input.is_empty() {
        return String::new();
    }

    let words: Vec<&str> = if input.contains('_') {
        input.split('_').collect()
    } else if input.starts_with(|c: char| c.is_uppercase()) {
        UPPER_WORDS.find_iter(input).map(|m| m.as_str()).collect()
    } else {
        MIXED_WORDS.find_iter(input).map(|m| m.as_str()).collect()
    };

    words.into_iter().map(capitalize).collect()
}

/// The token used to tell apart same-named types from different namespaces:
/// every namespace segment in PascalCase, concatenated.
///
/// `pkg.mod_a` becomes `PkgModA`.
pub fn namespace_token(namespace: &str) -> String {
    namespace
        .split('.')
        .filter(|segment| !segment.is_empty())
        .map(pascal)
        .collect()
}

/// Build the full name of a named type from its name and optional namespace.
pub fn fullname(name: &str, namespace: Option<&str>) -> String {
    match namespace {
        Some(ns) if !ns.is_empty() => format!("{ns}.{name}"),
        _ => name.to_string(),
    }
}

/// Capitalize first letter
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(f) => f.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn avro_name_replaces_invalid_characters() {
        assert_eq!(avro_name("Page<T>"), "Page_T_");
        assert_eq!(avro_name("2fast"), "_2fast");
        assert_eq!(avro_name(""), "_");
        assert_eq!(avro_namespace("my-pkg.v2"), "my_pkg.v2");
    }

    #[test]
    fn symbol_validity() {
        assert!(is_valid_avro_name("valid_val"));
        assert!(is_valid_avro_name("_RED"));
        assert!(!is_valid_avro_name("http-only"));
        assert!(!is_valid_avro_name("FunctionError.ExtensionInitError"));
        assert!(!is_valid_avro_name("1st"));
    }

    #[test]
    fn pascal_splits_words() {
        assert_eq!(pascal("mod_a"), "ModA");
        assert_eq!(pascal("pkg"), "Pkg");
        assert_eq!(pascal("myModule"), "MyModule");
        assert_eq!(pascal("HTTPServer"), "HTTPServer");
    }

    #[test]
    fn namespace_token_concatenates_segments() {
        assert_eq!(namespace_token("pkg.mod_a"), "PkgModA");
        assert_eq!(namespace_token("pkg.mod_b"), "PkgModB");
        assert_eq!(namespace_token("shop"), "Shop");
    }

    #[test]
    fn fullname_skips_empty_namespace() {
        assert_eq!(fullname("User", Some("app")), "app.User");
        assert_eq!(fullname("User", Some("")), "User");
        assert_eq!(fullname("User", None), "User");
    }
}

use std::sync::LazyLock;

use any_ascii::any_ascii;
use inflections::Inflect;
use regex::Regex;

static INVALID_CHARS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_]+").unwrap());
static MULTI_UNDERSCORE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_+").unwrap());

/// Base transformation shared by all identifier conversions: transliterates to
/// ASCII, replaces invalid characters with underscores, collapses consecutive
/// underscores, and trims any leading or trailing underscores.
pub(crate) fn sanitize(input: &str) -> String {
  if input.is_empty() {
    return String::new();
  }

  let ascii = any_ascii(input);
  let replaced = INVALID_CHARS_RE.replace_all(&ascii, "_");
  let collapsed = MULTI_UNDERSCORE_RE.replace_all(&replaced, "_");

  collapsed.trim_matches('_').to_string()
}

/// Converts any identifier string into a PHP class name (`PascalCase`).
///
/// The result is deterministic and idempotent: `normalize(normalize(x))`
/// always equals `normalize(x)`. Generated class names, file names, and field
/// type references all go through this function, so downstream name matching
/// is exact by construction.
///
/// # Rules:
/// 1. Sanitizes the base string and converts to `PascalCase`.
/// 2. If the result starts with a digit, it's prefixed with `T`.
/// 3. If the result is empty, it becomes `Unnamed`.
pub(crate) fn normalize(name: &str) -> String {
  let mut ident = sanitize(name).to_pascal_case();

  if ident.is_empty() {
    return "Unnamed".to_string();
  }

  if ident.starts_with(|c: char| c.is_ascii_digit()) {
    ident.insert(0, 'T');
  }

  ident
}

/// Converts a schema property key into a PHP property name (`camelCase`).
///
/// # Rules:
/// 1. Sanitizes the base string.
/// 2. Converts to `camelCase`.
/// 3. If the result starts with a digit, it's prefixed with `_`.
/// 4. If the result is empty, it becomes `_`.
pub(crate) fn to_property_name(name: &str) -> String {
  let mut ident = sanitize(name).to_camel_case();

  if ident.is_empty() {
    return "_".to_string();
  }

  if ident.starts_with(|c: char| c.is_ascii_digit()) {
    ident.insert(0, '_');
  }

  ident
}

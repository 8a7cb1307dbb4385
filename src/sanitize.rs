//! Escaping of benchmark and variant names for the emitted document.
//!
//! Names end up in three different contexts, each with its own rules:
//!
//! - script identifiers (`var <group>_<variant> = …`),
//! - script string literals (series names, titles, container ids),
//! - HTML attribute values and text (`<div id='…'>`, `<title>`).
//!
//! Names made only of ASCII letters, digits and `_`, which is what the Go
//! benchmark harness produces, pass through every function unchanged.

use std::borrow::Cow;

use serde_json::Value;

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

/// Turns `name` into a valid script identifier.
///
/// Characters outside `[A-Za-z0-9_$]` become `_`, a leading digit is
/// prefixed with `_`, and an empty name becomes `_`.
#[must_use]
pub fn script_identifier(name: &str) -> Cow<'_, str> {
    let starts_with_digit = name.starts_with(|c: char| c.is_ascii_digit());
    if !name.is_empty() && !starts_with_digit && name.chars().all(is_identifier_char) {
        return Cow::Borrowed(name);
    }

    let mut ident = String::with_capacity(name.len() + 1);
    if name.is_empty() || starts_with_digit {
        ident.push('_');
    }
    ident.extend(
        name.chars()
            .map(|c| if is_identifier_char(c) { c } else { '_' }),
    );
    Cow::Owned(ident)
}

/// Closes the gap a JSON literal leaves inside `<script>`: the sequence
/// `</` may only appear within strings, where `<\/` means the same.
fn guard_script(json: &str) -> String {
    json.replace("</", "<\\/")
}

/// Encodes `value` as a script string literal that cannot terminate the
/// surrounding `<script>` element.
#[must_use]
pub fn script_string(value: &str) -> String {
    guard_script(&Value::from(value).to_string())
}

/// Encodes a JSON value for embedding inside `<script>`.
#[must_use]
pub fn script_value(value: &Value) -> String {
    guard_script(&value.to_string())
}

/// Escapes `value` for HTML text and quoted attribute values.
#[must_use]
pub fn html_escape(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(value);
    }

    let mut escaped = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

//! `{{path}}` placeholder substitution.
//!
//! Templates are JSON documents in raw text form. Placeholders usually sit
//! inside string fields, so substituted strings are escaped for a JSON string
//! context and lists are joined with an escaped newline. Placeholders whose
//! path is absent from the data are left untouched.

use regex::{Captures, Regex};
use serde_json::Value;
use std::sync::LazyLock;

/// Matches `{{segment(.segment)*}}` with word-character segments.
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{(\w+(?:\.\w+)*)\}\}").expect("placeholder pattern is valid")
});

/// Escaped newline as it appears inside a JSON string.
const ESCAPED_NEWLINE: &str = "\\n";

/// Substitute every placeholder in `template` with values from `data`.
#[must_use]
pub fn interpolate(template: &str, data: &Value) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures<'_>| {
            let path = &caps[1];
            match lookup(data, path) {
                Some(value) => render(value),
                None => {
                    log::debug!("Template variable '{}' not found, leaving as-is", path);
                    caps[0].to_string()
                }
            }
        })
        .into_owned()
}

/// Walk a dotted path through nested objects (and arrays, by index).
///
/// Returns `None` when any segment is missing or an intermediate value is
/// null. A present `null` at the end of the path is returned as
/// `Some(Value::Null)`.
#[must_use]
pub fn lookup<'a>(data: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(data, |current, segment| match current {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

/// Render a found value for insertion into a JSON string field.
fn render(value: &Value) -> String {
    match value {
        Value::String(s) => escape(s),
        Value::Array(items) => items
            .iter()
            .map(render)
            .collect::<Vec<_>>()
            .join(ESCAPED_NEWLINE),
        Value::Object(_) => escape(&value.to_string()),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
    }
}

/// Escape backslashes, then quotes, then newlines.
fn escape(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', ESCAPED_NEWLINE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_simple_substitution() {
        let data = json!({"title": "My Slides", "author": "Test User"});
        let out = interpolate(r#"{"title": "{{title}}", "author": "{{author}}"}"#, &data);
        assert_eq!(out, r#"{"title": "My Slides", "author": "Test User"}"#);
    }

    #[test]
    fn test_nested_path() {
        let data = json!({"a": {"b": "x"}});
        assert_eq!(interpolate("{{a.b}}", &data), "x");
    }

    #[test]
    fn test_missing_path_left_unchanged() {
        let data = json!({"a": {"c": "x"}});
        assert_eq!(interpolate("{{a.b}}", &data), "{{a.b}}");
        assert_eq!(interpolate("{{nope}}", &json!({})), "{{nope}}");
    }

    #[test]
    fn test_null_intermediate_is_not_found() {
        let data = json!({"a": null});
        assert_eq!(interpolate("{{a.b}}", &data), "{{a.b}}");
    }

    #[test]
    fn test_present_null_is_rendered() {
        let data = json!({"a": null});
        assert_eq!(lookup(&data, "a"), Some(&Value::Null));
        assert_eq!(interpolate("{{a}}", &data), "null");
    }

    #[test]
    fn test_newline_is_escaped() {
        let data = json!({"content": "Line1\nLine2"});
        let out = interpolate("{{content}}", &data);
        assert_eq!(out, "Line1\\nLine2");
        assert!(!out.contains('\n'));
    }

    #[test]
    fn test_escape_order() {
        let data = json!({"s": "a\\b \"q\"\nz"});
        assert_eq!(interpolate("{{s}}", &data), r#"a\\b \"q\"\nz"#);
    }

    #[test]
    fn test_list_joined_with_escaped_newline() {
        let data = json!({"list": ["p", "q", "r"]});
        assert_eq!(interpolate("{{list}}", &data), "p\\nq\\nr");
    }

    #[test]
    fn test_scalars_stringified() {
        let data = json!({"n": 42, "f": 1.5, "b": true});
        assert_eq!(interpolate("{{n}} {{f}} {{b}}", &data), "42 1.5 true");
    }

    #[test]
    fn test_array_index_segment() {
        let data = json!({"items": ["first", "second"]});
        assert_eq!(interpolate("{{items.1}}", &data), "second");
        assert_eq!(interpolate("{{items.5}}", &data), "{{items.5}}");
    }

    #[test]
    fn test_non_word_placeholder_ignored() {
        let data = json!({"a-b": "x"});
        assert_eq!(interpolate("{{a-b}}", &data), "{{a-b}}");
        assert_eq!(interpolate("{{ a }}", &json!({"a": "x"})), "{{ a }}");
    }

    #[test]
    fn test_output_parses_as_json() {
        let data = json!({
            "quote": "She said \"hi\"",
            "path": "C:\\temp",
            "lines": ["one", "two \"2\""],
        });
        let template = r#"{"q": "{{quote}}", "p": "{{path}}", "l": "{{lines}}"}"#;
        let parsed: Value = serde_json::from_str(&interpolate(template, &data)).unwrap();
        assert_eq!(parsed["q"], "She said \"hi\"");
        assert_eq!(parsed["p"], "C:\\temp");
        assert_eq!(parsed["l"], "one\ntwo \"2\"");
    }
}

//! Dotted path access into nested JSON objects.
//!
//! Paths are `.` separated segment names, e.g. `colors.syntax.keyword`.

use serde_json::{Map, Value};

/// Write `value` at the dotted `path`, creating intermediate objects as needed.
///
/// Any intermediate node that is not an object is replaced by an empty object.
pub fn set_path(root: &mut Map<String, Value>, path: &str, value: Value) {
    let (parents, leaf) = match path.rsplit_once('.') {
        Some((parents, leaf)) => (Some(parents), leaf),
        None => (None, path),
    };

    let mut current = root;
    if let Some(parents) = parents {
        for key in parents.split('.') {
            let node = current
                .entry(key.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !node.is_object() {
                *node = Value::Object(Map::new());
            }
            let Value::Object(map) = node else {
                unreachable!("intermediate node was just replaced by an object");
            };
            current = map;
        }
    }

    current.insert(leaf.to_string(), value);
}

/// Read the value at the dotted `path`, or `None` when any segment is missing.
pub fn get_path<'a>(root: &'a Map<String, Value>, path: &str) -> Option<&'a Value> {
    let mut segments = path.split('.');
    let mut current = root.get(segments.next()?)?;

    for key in segments {
        current = current.as_object()?.get(key)?;
    }

    Some(current)
}

/// Returns `true` when a value is present at `path`.
pub fn has_path(root: &Map<String, Value>, path: &str) -> bool {
    get_path(root, path).is_some()
}

/// Count the color leaves (strings starting with `#`) below `value`.
pub fn count_colors(value: &Value) -> usize {
    match value {
        Value::String(s) if s.starts_with('#') => 1,
        Value::Object(map) => map.values().map(count_colors).sum(),
        Value::Array(items) => items.iter().map(count_colors).sum(),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::*;
    use serde_json::json;

    #[test]
    fn test_set_path_creates_intermediates() {
        let mut root = Map::new();
        set_path(&mut root, "colors.sidebar.background", json!("#252526"));

        assert_eq!(
            Value::Object(root),
            json!({ "colors": { "sidebar": { "background": "#252526" } } })
        );
    }

    #[test]
    fn test_set_path_single_segment() {
        let mut root = Map::new();
        set_path(&mut root, "background", json!("#1e1e1e"));
        assert_eq!(root.get("background"), Some(&json!("#1e1e1e")));
    }

    #[test]
    fn test_set_path_replaces_non_object_intermediate() {
        let mut root = Map::new();
        set_path(&mut root, "colors.tab", json!("#000000"));
        set_path(&mut root, "colors.tab.active", json!("#1e1e1e"));

        assert_eq!(
            get_path(&root, "colors.tab.active"),
            Some(&json!("#1e1e1e"))
        );
        assert_eq!(
            get_path(&root, "colors.tab"),
            Some(&json!({ "active": "#1e1e1e" }))
        );
    }

    #[test]
    fn test_set_path_overwrites_leaf_in_place() {
        let mut root = Map::new();
        set_path(&mut root, "colors.background", json!("#111111"));
        set_path(&mut root, "colors.foreground", json!("#222222"));
        set_path(&mut root, "colors.background", json!("#333333"));

        let colors = assert_some!(root.get("colors").and_then(Value::as_object));
        let keys: Vec<&str> = colors.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["background", "foreground"]);
        assert_eq!(colors.get("background"), Some(&json!("#333333")));
    }

    #[test]
    fn test_get_path_missing_segments() {
        let mut root = Map::new();
        set_path(&mut root, "colors.syntax.keyword", json!("#569cd6"));

        assert_none!(get_path(&root, "colors.syntax.string"));
        assert_none!(get_path(&root, "colors.terminal.red"));
        assert_none!(get_path(&root, "colors.syntax.keyword.nested"));
        assert_none!(get_path(&Map::new(), "colors"));
        assert!(has_path(&root, "colors.syntax"));
        assert!(!has_path(&root, "theme"));
    }

    #[test]
    fn test_count_colors() {
        let value = json!({
            "colors": {
                "background": "#1e1e1e",
                "name": "not a color",
                "syntax": { "keyword": "#569cd6", "string": "#ce9178" }
            }
        });
        assert_eq!(count_colors(&value), 3);
        assert_eq!(count_colors(&json!({})), 0);
    }
}

//! Bounded search through nested JSON payloads.
//!
//! Search results bury the canonical link at a depth that depends on the
//! entity type, so we walk the tree looking for a string stored under a
//! given key. Depth is capped so a malformed payload can't blow the stack.

use serde_json::Value;

/// Maximum nesting level visited
pub const MAX_DEPTH: usize = 32;

/// Find the first string stored under `key` that contains `substring`.
///
/// Objects are checked at their own level before their children are
/// visited; arrays are visited in order.
pub fn find_first_str_with<'a>(value: &'a Value, key: &str, substring: &str) -> Option<&'a str> {
    walk(value, key, substring, 0)
}

fn walk<'a>(value: &'a Value, key: &str, substring: &str, depth: usize) -> Option<&'a str> {
    if depth > MAX_DEPTH {
        return None;
    }

    match value {
        Value::Object(map) => {
            if let Some(found) = map
                .get(key)
                .and_then(Value::as_str)
                .filter(|s| s.contains(substring))
            {
                return Some(found);
            }
            map.values()
                .find_map(|child| walk(child, key, substring, depth + 1))
        }
        Value::Array(items) => items
            .iter()
            .find_map(|child| walk(child, key, substring, depth + 1)),
        _ => None,
    }
}

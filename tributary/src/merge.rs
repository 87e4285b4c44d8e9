//! Earlier-wins merge mechanics.

use serde_json::{Map, Value};

use crate::stream::Contribution;

/// Fold `contribution` into `accumulated`, keeping existing keys.
///
/// Precedence is earlier-wins: a key already present in `accumulated` is
/// never overwritten, so the bootstrap document beats every stream and a
/// lower-priority stream beats a higher-priority one on overlap. Collisions
/// are decided at the top level only; when both sides hold composite values
/// under the same key, the contribution's value is skipped wholesale rather
/// than reconciled field by field.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use tributary::merge_keep_first;
///
/// let mut accumulated = json!({"x": 1, "y": 2})
///     .as_object()
///     .cloned()
///     .unwrap();
/// let contribution = json!({"y": 99, "z": 3}).as_object().cloned().unwrap();
/// merge_keep_first(&mut accumulated, contribution);
/// assert_eq!(
///     serde_json::Value::Object(accumulated),
///     json!({"x": 1, "y": 2, "z": 3})
/// );
/// ```
pub fn merge_keep_first(accumulated: &mut Map<String, Value>, contribution: Contribution) {
    for (key, value) in contribution {
        accumulated.entry(key).or_insert(value);
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn object(value: Value) -> Map<String, Value> {
        value.as_object().cloned().expect("object literal")
    }

    #[test]
    fn existing_keys_are_never_overwritten() {
        let mut accumulated = object(json!({"x": 1, "y": 2}));
        merge_keep_first(&mut accumulated, object(json!({"y": 99, "z": 3})));
        assert_eq!(Value::Object(accumulated), json!({"x": 1, "y": 2, "z": 3}));
    }

    #[test]
    fn nested_collisions_are_not_reconciled_recursively() {
        let mut accumulated = object(json!({"db": {"host": "a"}}));
        merge_keep_first(&mut accumulated, object(json!({"db": {"host": "b", "port": 5432}})));
        // The accumulated value wins wholesale; no field-by-field merge.
        assert_eq!(Value::Object(accumulated), json!({"db": {"host": "a"}}));
    }

    #[test]
    fn empty_contributions_change_nothing() {
        let mut accumulated = object(json!({"x": 1}));
        merge_keep_first(&mut accumulated, Map::new());
        assert_eq!(Value::Object(accumulated), json!({"x": 1}));
    }

    #[test]
    fn empty_accumulated_takes_everything() {
        let mut accumulated = Map::new();
        merge_keep_first(&mut accumulated, object(json!({"a": [1, 2], "b": null})));
        assert_eq!(Value::Object(accumulated), json!({"a": [1, 2], "b": null}));
    }
}

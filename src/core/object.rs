//! Helpers over insertion-ordered mappings.
//!
//! Callbacks receive the value first and the key second, mirroring array
//! callbacks where the second argument is the index.

use crate::domain::value::Value;
use indexmap::IndexMap;
use std::hash::Hash;

/// Like [`map`](crate::core::array::map), but over a mapping's values.
pub fn map_object<V, U, F>(obj: &IndexMap<String, V>, mut f: F) -> Vec<U>
where
    F: FnMut(&V, &str) -> U,
{
    obj.iter().map(|(key, value)| f(value, key)).collect()
}

/// The mapping's values in traversal order.
pub fn to_array<V: Clone>(obj: &IndexMap<String, V>) -> Vec<V> {
    obj.values().cloned().collect()
}

pub fn filter_object<V, F>(obj: &IndexMap<String, V>, mut f: F) -> IndexMap<String, V>
where
    V: Clone,
    F: FnMut(&V, &str) -> bool,
{
    obj.iter()
        .filter(|(key, value)| f(value, key))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Counts entries by the key `f` returns. Entries for which `f` returns
/// `None` are skipped.
pub fn count_by<V, K, F>(obj: &IndexMap<String, V>, mut f: F) -> IndexMap<K, usize>
where
    K: Hash + Eq,
    F: FnMut(&V, &str) -> Option<K>,
{
    let mut counts = IndexMap::new();
    for (key, value) in obj {
        if let Some(bucket) = f(value, key) {
            *counts.entry(bucket).or_insert(0) += 1;
        }
    }
    counts
}

/// A structurally independent copy. Functions keep their identity.
pub fn deep_clone(value: &Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.iter().map(deep_clone).collect()),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, value)| (key.clone(), deep_clone(value)))
                .collect(),
        ),
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::equality::is_equal;
    use serde_json::json;

    fn pets() -> IndexMap<String, &'static str> {
        let mut obj = IndexMap::new();
        obj.insert("Catniss".to_string(), "cat");
        obj.insert("Lacie".to_string(), "dog");
        obj.insert("Jack".to_string(), "dog");
        obj
    }

    #[test]
    fn test_map_object_uses_callback() {
        let mapped = map_object(&pets(), |val, _| val.to_uppercase());
        assert_eq!(mapped, vec!["CAT", "DOG", "DOG"]);
    }

    #[test]
    fn test_map_object_passes_keys() {
        let mapped = map_object(&pets(), |_, key| key.len());
        assert_eq!(mapped, vec![7, 5, 4]);
    }

    #[test]
    fn test_to_array_collects_values() {
        assert_eq!(to_array(&pets()), vec!["cat", "dog", "dog"]);
    }

    #[test]
    fn test_filter_object_by_key() {
        let filtered = filter_object(&pets(), |_, key| key != "Lacie");
        let keys: Vec<&String> = filtered.keys().collect();
        assert_eq!(keys, vec!["Catniss", "Jack"]);
        assert_eq!(filtered["Jack"], "dog");
    }

    #[test]
    fn test_filter_object_sees_every_value_and_key() {
        let mut fail = false;
        filter_object(&pets(), |val, key| {
            if val.is_empty() || key.is_empty() {
                fail = true;
            }
            false
        });
        assert!(!fail);
    }

    #[test]
    fn test_count_by_value() {
        let counted = count_by(&pets(), |val, _| Some(val.to_string()));
        assert_eq!(counted.get("cat"), Some(&1));
        assert_eq!(counted.get("dog"), Some(&2));
    }

    #[test]
    fn test_count_by_skips_none() {
        let counted = count_by(&pets(), |val, _| (*val == "dog").then_some("dog"));
        assert_eq!(counted.len(), 1);
        assert_eq!(counted["dog"], 2);
    }

    #[test]
    fn test_deep_clone_is_independent() {
        let mut original = Value::from(json!([{"test": 1}, {"test": 2}, {"test": 3}]));
        let copy = deep_clone(&original);

        if let Value::Array(items) = &mut original {
            items[1]
                .as_object_mut()
                .unwrap()
                .insert("test".to_string(), Value::from("fish"));
        }

        assert_eq!(copy.as_array().unwrap()[1].get("test").and_then(Value::as_f64), Some(2.0));
        assert!(!is_equal(&copy, &original));
    }

    #[test]
    fn test_deep_clone_passes_primitives_through() {
        assert!(is_equal(&deep_clone(&Value::from(5)), &Value::from(5)));
        assert!(is_equal(&deep_clone(&Value::from("string")), &Value::from("string")));
    }
}

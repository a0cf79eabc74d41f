use crate::core::equality::is_equal;
use crate::domain::value::Value;
use crate::utils::error::{Result, WunderError};

pub fn map<T, U, F>(items: &[T], mut f: F) -> Vec<U>
where
    F: FnMut(&T, usize) -> U,
{
    items.iter().enumerate().map(|(i, item)| f(item, i)).collect()
}

pub fn filter<T: Clone, F>(items: &[T], mut f: F) -> Vec<T>
where
    F: FnMut(&T) -> bool,
{
    items.iter().filter(|item| f(item)).cloned().collect()
}

pub fn for_each<T, F>(items: &[T], mut f: F)
where
    F: FnMut(&T, usize),
{
    for (i, item) in items.iter().enumerate() {
        f(item, i);
    }
}

/// Walks from the last element to the first. The callback receives the
/// element, a forward counter starting at 0, and the element's real index.
pub fn for_each_reverse<T, F>(items: &[T], mut f: F)
where
    F: FnMut(&T, usize, usize),
{
    for (forward, (i, item)) in items.iter().enumerate().rev().enumerate() {
        f(item, forward, i);
    }
}

/// First element matching `f`.
pub fn find<T, F>(items: &[T], mut f: F) -> Option<&T>
where
    F: FnMut(&T) -> bool,
{
    items.iter().find(|item| f(item))
}

/// Whether any element is deep-equal to `needle`.
pub fn contains(items: &[Value], needle: &Value) -> bool {
    items.iter().any(|item| is_equal(item, needle))
}

pub use self::contains as includes;

/// Flattens nested arrays of any depth, keeping left-to-right leaf order.
pub fn flatten(items: &[Value]) -> Vec<Value> {
    let mut flat = Vec::with_capacity(items.len());
    flatten_into(items, &mut flat);
    flat
}

fn flatten_into(items: &[Value], out: &mut Vec<Value>) {
    for item in items {
        match item {
            Value::Array(inner) => flatten_into(inner, out),
            leaf => out.push(leaf.clone()),
        }
    }
}

/// Multiset subtraction: each element of `remove` deletes the first
/// deep-equal occurrence from `base`. Elements not present are ignored.
///
/// `remove` may be an array or a single string, number or boolean.
pub fn array_subtract(base: &Value, remove: &Value) -> Result<Vec<Value>> {
    let Value::Array(base) = base else {
        return Err(WunderError::NotASequence { kind: base.kind() });
    };

    let to_remove: &[Value] = match remove {
        Value::Array(items) => items,
        Value::String(_) | Value::Number(_) | Value::Bool(_) => std::slice::from_ref(remove),
        other => {
            return Err(WunderError::UnsupportedType {
                function: "array_subtract",
                kind: other.kind(),
            })
        }
    };

    let mut result = base.clone();
    for needle in to_remove {
        match result.iter().position(|item| is_equal(item, needle)) {
            Some(pos) => {
                result.remove(pos);
            }
            None => tracing::debug!(
                kind = %needle.kind(),
                "array_subtract: value not present in base, skipping"
            ),
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value::ValueKind;
    use serde_json::json;

    fn v(json: serde_json::Value) -> Value {
        Value::from(json)
    }

    fn values(json: serde_json::Value) -> Vec<Value> {
        match Value::from(json) {
            Value::Array(items) => items,
            other => vec![other],
        }
    }

    fn same(left: &[Value], right: &[Value]) -> bool {
        is_equal(&Value::Array(left.to_vec()), &Value::Array(right.to_vec()))
    }

    #[test]
    fn test_map_passes_index() {
        assert_eq!(map(&[10, 20, 30], |n, i| *n as usize + i), vec![10, 21, 32]);
    }

    #[test]
    fn test_filter_keeps_matches() {
        assert_eq!(filter(&[1, 2, 3, 4], |n| n % 2 == 0), vec![2, 4]);
    }

    #[test]
    fn test_for_each_visits_in_order() {
        let mut seen = Vec::new();
        for_each(&["a", "b"], |s, i| seen.push(format!("{i}{s}")));
        assert_eq!(seen, vec!["0a", "1b"]);
    }

    #[test]
    fn test_for_each_reverse_counts_forward() {
        let mut seen = Vec::new();
        for_each_reverse(&['x', 'y', 'z'], |c, forward, i| seen.push((*c, forward, i)));
        assert_eq!(seen, vec![('z', 0, 2), ('y', 1, 1), ('x', 2, 0)]);
    }

    #[test]
    fn test_find_first_match() {
        let arr = values(json!([
            {"number": 1, "value": "blark"},
            {"number": 2, "value": "blork"},
            {"number": 3, "value": "blork"}
        ]));

        let found = find(&arr, |item| item.get("value").and_then(Value::as_str) == Some("blork"));
        assert_eq!(found.and_then(|f| f.get("number")).and_then(Value::as_f64), Some(2.0));
        assert!(find(&arr, |item| item.get("nothing").is_some()).is_none());
    }

    #[test]
    fn test_contains_compares_by_value() {
        let arr = values(json!([1, "two", {"three": true}]));
        assert!(contains(&arr, &v(json!("two"))));
        assert!(contains(&arr, &v(json!({"three": true}))));
        assert!(!contains(&arr, &v(json!("four"))));
        assert!(includes(&arr, &v(json!(1))));
    }

    #[test]
    fn test_flatten_2d() {
        let flat = flatten(&values(json!([[1, 2, 3], [4, 5, 6]])));
        assert!(same(&flat, &values(json!([1, 2, 3, 4, 5, 6]))));
    }

    #[test]
    fn test_flatten_3d() {
        let flat = flatten(&values(json!([[1, [2, 3]], [[4, 5], 6]])));
        assert!(same(&flat, &values(json!([1, 2, 3, 4, 5, 6]))));
    }

    #[test]
    fn test_flatten_4d() {
        let flat = flatten(&values(json!([[[1, [2, [3]]]], [[[[4], 5], 6]]])));
        assert!(same(&flat, &values(json!([1, 2, 3, 4, 5, 6]))));
    }

    #[test]
    fn test_flatten_keeps_objects_whole() {
        let flat = flatten(&values(json!([[{"a": [1, 2]}], []])));
        assert_eq!(flat.len(), 1);
        assert!(is_equal(&flat[0], &v(json!({"a": [1, 2]}))));
    }

    #[test]
    fn test_subtract_requires_array_base() {
        let err = array_subtract(&v(json!(5)), &v(json!(2))).unwrap_err();
        assert!(matches!(err, WunderError::NotASequence { kind: ValueKind::Number }));
    }

    #[test]
    fn test_subtract_rejects_unsupported_operand() {
        let err = array_subtract(&v(json!([1])), &v(json!({"a": 1}))).unwrap_err();
        assert!(err.to_string().contains("object"));
        assert!(array_subtract(&v(json!([1])), &Value::Null).is_err());
    }

    #[test]
    fn test_subtract_string() {
        let out = array_subtract(&v(json!(["1", "2", 3])), &v(json!("2"))).unwrap();
        assert!(same(&out, &values(json!(["1", 3]))));
    }

    #[test]
    fn test_subtract_number_once() {
        let out = array_subtract(&v(json!([5, 5, 7, 2])), &v(json!(5))).unwrap();
        assert!(same(&out, &values(json!([5, 7, 2]))));
    }

    #[test]
    fn test_subtract_array() {
        let out = array_subtract(&v(json!([1, 2, 3, "fish"])), &v(json!([2, "fish"]))).unwrap();
        assert!(same(&out, &values(json!([1, 3]))));
    }

    #[test]
    fn test_subtract_nested_objects() {
        let out = array_subtract(
            &v(json!([{"name": "thing1"}, {"name": "thing2"}])),
            &v(json!([{"name": "thing2"}])),
        )
        .unwrap();
        assert!(same(&out, &values(json!([{"name": "thing1"}]))));
    }

    #[test]
    fn test_subtract_is_multiset() {
        let base = v(json!(["E", "E", "R", "I", "E"]));
        let out = array_subtract(&base, &v(json!(["E", "I"]))).unwrap();
        assert!(same(&out, &values(json!(["E", "R", "E"]))));

        let out = array_subtract(&base, &v(json!(["E", "I", "F", "Y"]))).unwrap();
        assert!(same(&out, &values(json!(["E", "R", "E"]))));
    }
}

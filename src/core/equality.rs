use crate::domain::value::{KindClass, Value, UNDEFINED};

/// All-purpose deep equality.
///
/// Values of different kinds are never equal. Functions compare by identity,
/// arrays elementwise in order, mappings by key count and then by every key of
/// `a` looked up in `b` (a missing key reads as `Undefined`). Everything else
/// uses strict equality, so `NaN` is not equal to itself.
///
/// Inputs must be acyclic.
pub fn is_equal(a: &Value, b: &Value) -> bool {
    let kind = a.kind();
    if kind != b.kind() {
        return false;
    }

    match (kind.class(), a, b) {
        (KindClass::Function, Value::Function(f), Value::Function(g)) => f.ptr_eq(g),
        (KindClass::Sequence, Value::Array(left), Value::Array(right)) => {
            if left.len() != right.len() {
                return false;
            }
            left.iter().zip(right).all(|(l, r)| is_equal(l, r))
        }
        (KindClass::Mapping, Value::Object(left), Value::Object(right)) => {
            if left.len() != right.len() {
                return false;
            }
            // Trusts a's key set once the counts match.
            left.iter()
                .all(|(key, l)| is_equal(l, right.get(key).unwrap_or(&UNDEFINED)))
        }
        _ => strict_equal(a, b),
    }
}

fn strict_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => x == y,
        (Value::String(x), Value::String(y)) => x == y,
        _ => false,
    }
}

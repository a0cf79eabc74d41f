use crate::domain::value::Value;
use regex::Regex;
use std::sync::LazyLock;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@;]+@[^\s@;]+\.[^\s@;.]{2,}$").expect("email pattern compiles")
});

pub fn is_array(value: &Value) -> bool {
    matches!(value, Value::Array(_))
}

pub fn is_function(value: &Value) -> bool {
    matches!(value, Value::Function(_))
}

/// Plain mappings only. Arrays and functions are not objects here.
pub fn is_object(value: &Value) -> bool {
    matches!(value, Value::Object(_))
}

pub fn is_email(candidate: &str) -> bool {
    EMAIL.is_match(candidate)
}

/// Builds a [`Value`](crate::Value) from a literal-like syntax.
///
/// - `null`, `true`, `false`
/// - `[a, b, c]`: a sequence keyed `0..n`
/// - `{"key": v, 3: w}`: a sequence with explicit string or integer keys
/// - anything else goes through `Value::from`
///
/// Elements are token trees, so negative numbers and other compound
/// expressions need parentheses: `value!([(-1), (2 * 3)])`.
///
/// Every bracket pair creates a fresh, distinct sequence.
///
/// ```rust
/// use value_exporter::{value, Value};
///
/// let data = value!({"name": "Alice", "scores": [1, 2, (-3)], "admin": false});
/// let seq = data.as_sequence().unwrap();
/// assert_eq!(seq.get("name"), Some(Value::from("Alice")));
/// assert_eq!(seq.len(), 3);
/// ```
#[macro_export]
macro_rules! value {
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Array($crate::Sequence::new())
    };

    ([ $($elem:tt),* $(,)? ]) => {{
        let seq = $crate::Sequence::new();
        $(
            seq.push($crate::value!($elem));
        )*
        $crate::Value::Array(seq)
    }};

    ({}) => {
        $crate::Value::Array($crate::Sequence::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let seq = $crate::Sequence::new();
        $(
            seq.insert($key, $crate::value!($value));
        )*
        $crate::Value::Array(seq)
    }};

    ($other:expr) => {
        $crate::Value::from($other)
    };
}

#[cfg(test)]
mod tests {
    use crate::{Key, Value};

    #[test]
    fn test_value_macro_primitives() {
        assert_eq!(value!(null), Value::Null);
        assert_eq!(value!(true), Value::Bool(true));
        assert_eq!(value!(false), Value::Bool(false));
        assert_eq!(value!(42), Value::Int(42));
        assert_eq!(value!(3.5), Value::Float(3.5));
        assert_eq!(value!("hello"), Value::String("hello".to_string()));
    }

    #[test]
    fn test_value_macro_sequences() {
        let empty = value!([]);
        assert!(empty.as_sequence().map(|seq| seq.is_empty()).unwrap_or(false));

        let list = value!([1, "two", null]);
        let seq = list.as_sequence().unwrap();
        assert_eq!(seq.len(), 3);
        assert_eq!(seq.get(0), Some(Value::Int(1)));
        assert_eq!(seq.get(1), Some(Value::from("two")));
        assert_eq!(seq.get(2), Some(Value::Null));
    }

    #[test]
    fn test_value_macro_keyed() {
        let keyed = value!({"a": 1, 5: [true], "c": {}});
        let seq = keyed.as_sequence().unwrap();
        let keys: Vec<_> = seq.entries().keys().cloned().collect();
        assert_eq!(keys, vec![Key::from("a"), Key::Int(5), Key::from("c")]);
        assert_eq!(seq.push("next"), Some(6));
    }

    #[test]
    fn test_value_macro_nested_sequences_are_distinct() {
        let outer = value!([[1], [1]]);
        let seq = outer.as_sequence().unwrap();
        assert_ne!(seq.get(0), seq.get(1));
    }
}

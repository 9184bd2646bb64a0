use value_exporter::{export, value, EnumConstant, Key, Record, Value};

#[test]
fn test_value_macro_null() {
    let value = value!(null);
    assert_eq!(value, Value::Null);
}

#[test]
fn test_value_macro_booleans() {
    let true_val = value!(true);
    assert_eq!(true_val, Value::Bool(true));

    let false_val = value!(false);
    assert_eq!(false_val, Value::Bool(false));
}

#[test]
fn test_value_macro_numbers() {
    let int_val = value!(42);
    assert_eq!(int_val, Value::Int(42));

    let float_val = value!(3.5);
    assert_eq!(float_val, Value::Float(3.5));

    let negative_val = value!(-123);
    assert_eq!(negative_val, Value::Int(-123));
}

#[test]
fn test_value_macro_strings() {
    let string_val = value!("hello world");
    assert_eq!(string_val, Value::String("hello world".to_string()));

    let empty_string = value!("");
    assert_eq!(empty_string, Value::String("".to_string()));
}

#[test]
fn test_value_macro_sequences() {
    let empty = value!([]);
    assert_eq!(export(&empty, 0).unwrap(), "Array &0 []");

    let mixed = value!([1, "hello", true, null, (-2)]);
    assert_eq!(
        export(&mixed, 0).unwrap(),
        "Array &0 [\n    0 => 1,\n    1 => 'hello',\n    2 => true,\n    3 => null,\n    4 => -2,\n]"
    );
}

#[test]
fn test_value_macro_keyed() {
    let keyed = value!({
        "name": "Alice",
        "age": 30,
        7: "seven"
    });

    let seq = keyed.as_sequence().unwrap();
    assert_eq!(seq.len(), 3);
    assert_eq!(seq.get("name"), Some(Value::from("Alice")));
    assert_eq!(seq.get("age"), Some(Value::Int(30)));
    assert_eq!(seq.get(7), Some(Value::from("seven")));
    assert!(seq.entries().contains_key(&Key::Int(7)));
}

#[test]
fn test_value_macro_nested() {
    let nested = value!({
        "user": {
            "id": 123,
            "name": "Bob"
        },
        "tags": ["admin", "developer"]
    });

    assert_eq!(
        export(&nested, 0).unwrap(),
        [
            "Array &0 [",
            "    'user' => Array &1 [",
            "        'id' => 123,",
            "        'name' => 'Bob',",
            "    ],",
            "    'tags' => Array &2 [",
            "        0 => 'admin',",
            "        1 => 'developer',",
            "    ],",
            "]",
        ]
        .join("\n")
    );
}

#[test]
fn test_value_macro_embeds_handles() {
    let owner = Record::new("User").with_field("name", "Alice");
    let suit = EnumConstant::unit("Suit", "Hearts");
    let data = value!([(owner.clone()), (suit.clone())]);

    let seq = data.as_sequence().unwrap();
    assert_eq!(seq.get(0), Some(Value::from(&owner)));
    assert_eq!(seq.get(1).and_then(|v| v.as_enum().map(|c| c.id())), Some(suit.id()));
}

#[test]
fn test_value_methods() {
    let null_val = value!(null);
    assert!(null_val.is_null());
    assert!(!null_val.is_bool());
    assert!(!null_val.is_int());
    assert!(!null_val.is_string());
    assert!(!null_val.is_array());
    assert!(!null_val.is_object());

    let bool_val = value!(true);
    assert!(bool_val.is_bool());
    assert_eq!(bool_val.as_bool(), Some(true));

    let str_val = value!("hello");
    assert!(str_val.is_string());
    assert_eq!(str_val.as_str(), Some("hello"));

    let array_val = value!([1, 2, 3]);
    assert!(array_val.is_array());
    assert!(array_val.is_composite());
    assert_eq!(array_val.as_sequence().unwrap().len(), 3);
}

use serde::Serialize;
use std::collections::BTreeMap;
use value_exporter::{to_string, to_string_with_options, to_value, ExporterOptions, Value};

#[derive(Serialize)]
struct User {
    id: u32,
    name: String,
    active: bool,
    tags: Vec<String>,
}

#[derive(Serialize)]
struct Product {
    sku: String,
    price: f64,
    quantity: u32,
}

#[derive(Serialize)]
struct Order {
    order_id: u32,
    customer: User,
    items: Vec<Product>,
    note: Option<String>,
}

#[derive(Serialize)]
enum Status {
    Pending,
    Shipped { carrier: String },
}

/// Replaces every `#<digits>` with `#N`, record ids depend on test order.
fn normalize_ids(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        out.push(c);
        if c == '#' && chars.peek().map_or(false, |d| d.is_ascii_digit()) {
            while chars.peek().map_or(false, |d| d.is_ascii_digit()) {
                chars.next();
            }
            out.push('N');
        }
    }
    out
}

#[test]
fn test_simple_struct() {
    let user = User {
        id: 123,
        name: "Alice".to_string(),
        active: true,
        tags: vec!["admin".to_string(), "developer".to_string()],
    };

    assert_eq!(
        normalize_ids(&to_string(&user).unwrap()),
        [
            "User Object #N (",
            "    'id' => 123,",
            "    'name' => 'Alice',",
            "    'active' => true,",
            "    'tags' => Array &0 [",
            "        0 => 'admin',",
            "        1 => 'developer',",
            "    ],",
            ")",
        ]
        .join("\n")
    );
}

#[test]
fn test_nested_struct() {
    let order = Order {
        order_id: 12345,
        customer: User {
            id: 1,
            name: "Bob".to_string(),
            active: false,
            tags: vec![],
        },
        items: vec![Product {
            sku: "WIDGET-001".to_string(),
            price: 29.99,
            quantity: 2,
        }],
        note: None,
    };

    assert_eq!(
        normalize_ids(&to_string(&order).unwrap()),
        [
            "Order Object #N (",
            "    'order_id' => 12345,",
            "    'customer' => User Object #N (",
            "        'id' => 1,",
            "        'name' => 'Bob',",
            "        'active' => false,",
            "        'tags' => Array &0 [],",
            "    ),",
            "    'items' => Array &1 [",
            "        0 => Product Object #N (",
            "            'sku' => 'WIDGET-001',",
            "            'price' => 29.99,",
            "            'quantity' => 2,",
            "        ),",
            "    ],",
            "    'note' => null,",
            ")",
        ]
        .join("\n")
    );
}

#[test]
fn test_enum_variants() {
    let pending = to_value(&Status::Pending).unwrap();
    let rendered = to_string(&Status::Pending).unwrap();
    assert_eq!(
        rendered,
        format!("Status Enum #{} (Pending)", pending.as_enum().unwrap().id())
    );

    let shipped = to_string(&Status::Shipped {
        carrier: "UPS".to_string(),
    })
    .unwrap();
    assert_eq!(
        normalize_ids(&shipped),
        "Status::Shipped Object #N (\n    'carrier' => 'UPS',\n)"
    );
}

#[test]
fn test_maps() {
    let mut scores = BTreeMap::new();
    scores.insert("alice", 3.0);
    scores.insert("bob", 0.5);

    assert_eq!(
        to_string(&scores).unwrap(),
        "Array &0 [\n    'alice' => 3.0,\n    'bob' => 0.5,\n]"
    );
}

#[test]
fn test_tuple_and_unit() {
    assert_eq!(
        to_string(&(1, "two")).unwrap(),
        "Array &0 [\n    0 => 1,\n    1 => 'two',\n]"
    );
    assert_eq!(to_string(&()).unwrap(), "null");
}

#[test]
fn test_converted_values_are_fresh() {
    let tags = vec!["x".to_string()];
    let first = to_value(&tags).unwrap();
    let second = to_value(&tags).unwrap();
    assert_ne!(first, second);
}

#[test]
fn test_large_unsigned_is_float() {
    assert_eq!(to_value(&u64::MAX).unwrap(), Value::Float(u64::MAX as f64));
    assert_eq!(to_string(&u64::MAX).unwrap(), "1.8446744073709552E+19");
}

#[test]
fn test_options_do_not_change_full_export() {
    let options = ExporterOptions::new()
        .with_max_length_for_strings(5)
        .with_shorten_arrays_longer_than(1);
    assert_eq!(
        to_string_with_options(&vec!["long string"], options).unwrap(),
        "Array &0 [\n    0 => 'long string',\n]"
    );
}

struct RawBytes<'a>(&'a [u8]);

impl Serialize for RawBytes<'_> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bytes(self.0)
    }
}

#[test]
fn test_bytes_export_as_byte_string() {
    assert_eq!(
        to_string(&RawBytes(&[0xff, 0x00])).unwrap(),
        "Binary String: 0xff00"
    );
    assert_eq!(to_string(&RawBytes(b"abc")).unwrap(), "'abc'");
}
